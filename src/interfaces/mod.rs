//! User interfaces
//!
//! One-shot CLI commands and the interactive terminal session.

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
