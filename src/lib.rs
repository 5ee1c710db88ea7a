//! Shortly - a personal short link stash
//!
//! This library provides the core functionality for shortly: a link
//! table persisted as a single JSON file, fragment-style address
//! resolution and the interfaces around them.
//!
//! # Features
//! - **tui**: interactive terminal session (default)
//!
//! # Architecture
//! - `store`: link table, theme and draft persistence over the stash file
//! - `stash`: whole-file key/value persistence
//! - `alloc`: collision-checked identifier allocation
//! - `resolve`: `#/<id>` address resolution
//! - `service`: create flow, short URLs and QR codes
//! - `interfaces`: user interfaces (CLI, TUI)
//! - `system`: logging, lockfile and cross-process notification

pub mod alloc;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod resolve;
pub mod service;
pub mod stash;
pub mod store;
pub mod system;
