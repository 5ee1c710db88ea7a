//! Interactive session state and key handling

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::clipboard;
use crate::config::Config;
use crate::service;
use crate::store::{LinkRecord, LinkStore, LinkTable, StoreEvent, Theme};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_millis(2200);

/// Which part of the screen takes keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// Modal confirmation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    ConfirmDelete,
    ConfirmClear,
}

/// One transient notice. A new toast replaces the old one, so only the
/// last message of a burst is ever visible.
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

pub struct App {
    store: Arc<LinkStore>,
    config: Config,
    events: Receiver<StoreEvent>,

    pub table: LinkTable,
    pub theme: Theme,
    pub input: String,
    pub focus: Focus,
    pub overlay: Overlay,
    pub selected_index: usize,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> App {
        let store = Arc::new(LinkStore::open(config));
        let table = store.load();
        let theme = store.theme();
        // The draft survives a closed session, like a half-typed form.
        let input = store.last_input();
        let events = store.subscribe();
        store.watch();

        App {
            store,
            config: config.clone(),
            events,
            table,
            theme,
            input,
            focus: Focus::Input,
            overlay: Overlay::None,
            selected_index: 0,
            toast: None,
            should_quit: false,
        }
    }

    /// Housekeeping between frames: expire the toast and pick up
    /// externally announced changes.
    pub fn tick(&mut self) {
        if let Some(toast) = &self.toast
            && toast.expired()
        {
            self.toast = None;
        }

        let mut changed = false;
        while self.events.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.reload();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.overlay {
            Overlay::ConfirmDelete => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.overlay = Overlay::None;
                    self.delete_selected();
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.overlay = Overlay::None;
                }
                _ => {}
            },
            Overlay::ConfirmClear => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.overlay = Overlay::None;
                    self.clear_all();
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.overlay = Overlay::None;
                }
                _ => {}
            },
            Overlay::None => match self.focus {
                Focus::Input => self.handle_input_key(key.code),
                Focus::List => self.handle_list_key(key.code),
            },
        }
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.shorten(),
            KeyCode::Backspace => {
                self.input.pop();
                self.save_draft();
            }
            KeyCode::Tab | KeyCode::Down => self.focus = Focus::List,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.input.push(c);
                self.save_draft();
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                } else {
                    self.focus = Focus::Input;
                }
            }
            KeyCode::Down => {
                if self.selected_index + 1 < self.table.len() {
                    self.selected_index += 1;
                }
            }
            KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Input,
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('y') => self.copy_selected(),
            KeyCode::Char('g') => self.open_qr_selected(),
            KeyCode::Char('d') => {
                if !self.table.is_empty() {
                    self.overlay = Overlay::ConfirmDelete;
                }
            }
            KeyCode::Char('c') => {
                if !self.table.is_empty() {
                    self.overlay = Overlay::ConfirmClear;
                }
            }
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Record shown at `selected_index` in display (newest first) order
    pub fn selected_record(&self) -> Option<&LinkRecord> {
        self.table.iter_newest_first().nth(self.selected_index)
    }

    pub fn short_url(&self, id: &str) -> String {
        service::short_url_for(&self.config, id)
    }

    /// Re-read everything from the stash and clamp the selection.
    pub fn reload(&mut self) {
        self.table = self.store.load();
        self.theme = self.store.theme();
        let len = self.table.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    fn shorten(&mut self) {
        match service::create(&self.store, &self.config, &self.input) {
            Ok(created) => {
                if created.scheme_corrected {
                    self.set_toast("No protocol found — prepending https://");
                }
                self.set_toast("Short URL created");
                match clipboard::copy(&created.short_url) {
                    Ok(()) => self.set_toast("Copied to clipboard"),
                    Err(e) => debug!("Clipboard unavailable: {}", e),
                }
                self.input.clear();
                self.save_draft();
                self.reload();
                // The fresh link sits on top of the display order.
                self.selected_index = 0;
            }
            Err(e) => self.set_toast(e.message().to_string()),
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_record().map(|r| r.id.clone()) else {
            return;
        };
        match self.store.remove(&id) {
            Ok(true) => {
                self.set_toast("Deleted link");
                self.reload();
            }
            Ok(false) => self.reload(),
            Err(e) => self.set_toast(e.message().to_string()),
        }
    }

    fn clear_all(&mut self) {
        match self.store.clear() {
            Ok(()) => {
                self.set_toast("All links cleared");
                self.reload();
            }
            Err(e) => self.set_toast(e.message().to_string()),
        }
    }

    fn copy_selected(&mut self) {
        let Some(id) = self.selected_record().map(|r| r.id.clone()) else {
            return;
        };
        let short_url = self.short_url(&id);
        match clipboard::copy(&short_url) {
            Ok(()) => self.set_toast("Copied to clipboard"),
            Err(e) => debug!("Clipboard unavailable: {}", e),
        }
    }

    fn open_selected(&mut self) {
        let Some(target) = self.selected_record().map(|r| r.target.clone()) else {
            return;
        };
        if let Err(e) = webbrowser::open(&target) {
            self.set_toast(format!("Failed to open browser: {}", e));
        }
    }

    fn open_qr_selected(&mut self) {
        let Some(id) = self.selected_record().map(|r| r.id.clone()) else {
            return;
        };
        let short_url = self.short_url(&id);
        let qr_url = service::qr_url_for(&self.config, &short_url);
        if let Err(e) = webbrowser::open(&qr_url) {
            self.set_toast(format!("Failed to open browser: {}", e));
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set_theme(self.theme) {
            self.set_toast(e.message().to_string());
        }
    }

    fn save_draft(&mut self) {
        if let Err(e) = self.store.set_last_input(&self.input) {
            debug!("Draft not saved: {}", e);
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }
}
