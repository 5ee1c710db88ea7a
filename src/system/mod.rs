//! System-level modules
//!
//! Platform plumbing that the core never sees directly:
//! - Logging initialization
//! - Single-instance lockfile
//! - Cross-process change announcements

pub mod lockfile;
pub mod logging;
pub mod notify;
