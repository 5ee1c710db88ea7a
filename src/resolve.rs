//! Short-address resolution.
//!
//! Evaluating an address against the link table is a pure function with
//! four terminal outcomes. Hosts decide what "redirect" means for them
//! (the CLI opens the target in the system browser); this module only
//! classifies.

use crate::alloc::ID_LENGTH;
use crate::store::LinkTable;

/// Outcome of evaluating one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No fragment in the address, nothing to do
    NoFragment,
    /// A fragment that is not `/` followed by a full-length identifier
    Malformed,
    /// Identifier present in the table
    Found { id: String, target: String },
    /// Well-formed identifier with no entry, the host shows a notice
    NotFound { id: String },
}

/// Evaluate `address` against `table` once.
///
/// The fragment must be exactly `#/<id>` with the identifier
/// [`ID_LENGTH`] characters long. Anything else resolves to a no-op
/// variant; resolution never mutates the table.
pub fn resolve(address: &str, table: &LinkTable) -> Resolution {
    let Some((_, fragment)) = address.split_once('#') else {
        return Resolution::NoFragment;
    };
    let Some(id) = fragment.strip_prefix('/') else {
        return Resolution::Malformed;
    };
    if id.len() != ID_LENGTH {
        return Resolution::Malformed;
    }
    match table.get(id) {
        Some(target) => Resolution::Found {
            id: id.to_string(),
            target: target.to_string(),
        },
        None => Resolution::NotFound { id: id.to_string() },
    }
}
