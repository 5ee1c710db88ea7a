//! Clipboard copy with a terminal fallback.
//!
//! The system clipboard is the primary path. When no clipboard service
//! is reachable (SSH sessions, bare consoles) the text goes out as an
//! OSC 52 escape sequence instead, which capable terminals translate
//! into a clipboard write on the user's side of the connection. The
//! sequence is written to stderr so piped stdout stays clean.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::errors::{Result, ShortlyError};

/// Copy text, trying the system clipboard first and OSC 52 second
pub fn copy(text: &str) -> Result<()> {
    match copy_system(text) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!("System clipboard unavailable ({}), trying OSC 52", e);
            copy_osc52(text)
        }
    }
}

fn copy_system(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ShortlyError::clipboard(format!("Failed to open clipboard: {}", e)))?;
    clipboard
        .set_text(text)
        .map_err(|e| ShortlyError::clipboard(format!("Failed to write clipboard: {}", e)))
}

fn copy_osc52(text: &str) -> Result<()> {
    let mut out = io::stderr();
    write!(out, "\x1b]52;c;{}\x07", STANDARD.encode(text))
        .and_then(|_| out.flush())
        .map_err(|e| ShortlyError::clipboard(format!("OSC 52 write failed: {}", e)))
}
