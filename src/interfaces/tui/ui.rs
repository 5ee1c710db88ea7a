//! Rendering for the interactive session

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus, Overlay};
use crate::store::Theme;

/// Colors derived from the stored theme, mirroring the page palette.
struct Palette {
    bg: Color,
    fg: Color,
    muted: Color,
    accent: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg: Color::Rgb(30, 30, 40),
            fg: Color::Rgb(238, 238, 238),
            muted: Color::DarkGray,
            accent: Color::Cyan,
        },
        Theme::Light => Palette {
            bg: Color::Rgb(245, 246, 250),
            fg: Color::Rgb(34, 34, 34),
            muted: Color::DarkGray,
            accent: Color::Cyan,
        },
    }
}

pub fn ui(frame: &mut Frame, app: &App) {
    let palette = palette(app.theme);

    let background = Block::default().style(Style::default().bg(palette.bg).fg(palette.fg));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Min(5),    // Link list
            Constraint::Length(3), // Toast
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, &palette, chunks[0]);
    draw_input(frame, app, &palette, chunks[1]);
    draw_list(frame, app, &palette, chunks[2]);
    draw_toast(frame, app, &palette, chunks[3]);
    draw_footer(frame, app, &palette, chunks[4]);

    match app.overlay {
        Overlay::ConfirmDelete => draw_delete_confirm(frame, app, &palette),
        Overlay::ConfirmClear => draw_clear_confirm(frame, app, &palette),
        Overlay::None => {}
    }
}

/// Draw title bar with version and link count
fn draw_title_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("Shortly", Style::default().fg(palette.accent).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(palette.muted),
        ),
        Span::styled("| ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("Total: {} ", app.table.len()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.accent)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn draw_input(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::Input && app.overlay == Overlay::None;
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(palette.muted)
    };

    let content = if app.input.is_empty() {
        Span::styled("Paste a long URL", Style::default().fg(palette.muted))
    } else {
        Span::styled(app.input.as_str(), Style::default().fg(palette.fg))
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Long URL")
            .title_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(input, area);

    if focused {
        let cursor_x =
            area.x + 1 + (app.input.chars().count() as u16).min(area.width.saturating_sub(2));
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_list(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.focus == Focus::List && app.overlay == Overlay::None;
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(palette.muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!("Saved links ({})", app.table.len()))
        .title_style(Style::default().fg(palette.accent).bold());

    if app.table.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No saved links yet — create one above.",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .table
        .iter_newest_first()
        .map(|record| {
            // Truncate URL if too long, on a char boundary
            let display_target = match record.target.char_indices().nth(60) {
                Some((idx, _)) => format!("{}...", &record.target[..idx]),
                None => record.target.clone(),
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("#/{}", record.id),
                    Style::default().fg(palette.accent).bold(),
                ),
                Span::raw("  "),
                Span::styled(display_target, Style::default().fg(Color::Blue)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the toast slot, falling back to a quiet ready line
fn draw_toast(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (text, style) = match &app.toast {
        Some(toast) => (
            toast.message.clone(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(51, 51, 51))
                .bold(),
        ),
        None => ("Ready".to_string(), Style::default().fg(palette.accent)),
    };

    let toast = Paragraph::new(text)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(toast, area);
}

/// Draw footer with keyboard shortcuts
fn draw_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let shortcuts: Vec<(&str, &str, Color)> = match app.overlay {
        Overlay::ConfirmDelete | Overlay::ConfirmClear => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        Overlay::None => match app.focus {
            Focus::Input => vec![
                ("Enter", "Shorten", Color::Green),
                ("Tab", "Links", Color::Cyan),
                ("Esc", "Quit", Color::Magenta),
            ],
            Focus::List => vec![
                ("Up/Down", "Navigate", Color::Cyan),
                ("Enter/o", "Open", Color::Green),
                ("y", "Copy", Color::Yellow),
                ("g", "QR", Color::Blue),
                ("d", "Delete", Color::Red),
                ("c", "Clear", Color::Red),
                ("t", "Theme", Color::Magenta),
                ("q", "Quit", Color::Magenta),
            ],
        },
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(palette.fg),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn draw_delete_confirm(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(record) = app.selected_record() else {
        return;
    };
    let popup_area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Confirm Delete")
        .title_style(Style::default().fg(Color::Red).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 2));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete this link?",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Id: ", Style::default().fg(palette.muted)),
            Span::styled(
                format!("#/{}", record.id),
                Style::default().fg(palette.accent).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(palette.muted)),
            Span::styled(record.target.as_str(), Style::default().fg(Color::Blue)),
        ]),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner_area);
}

fn draw_clear_confirm(frame: &mut Frame, app: &App, palette: &Palette) {
    let popup_area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Confirm Clear")
        .title_style(Style::default().fg(Color::Red).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 2));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Clear ALL saved links?",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("This removes all {} saved links.", app.table.len()),
            Style::default().fg(palette.fg),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    // Cut the given rectangle into three vertical pieces
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    // Then cut the middle vertical piece into three width-wise pieces
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1] // Return the middle chunk
}
