//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod add;
mod clear;
mod copy;
mod list;
mod open;
mod qr;
mod remove;
mod theme;

pub use add::add;
pub use clear::clear;
pub use copy::copy;
pub use list::list;
pub use open::open;
pub use qr::qr;
pub use remove::remove;
pub use theme::theme;
