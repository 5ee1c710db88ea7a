//! Identifier allocation.

use std::iter;

use crate::errors::{Result, ShortlyError};

/// Length of every identifier
pub const ID_LENGTH: usize = 6;

/// Alphabet identifiers draw from, 62 symbols
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Collision redraws before the allocator reports the space exhausted
pub const MAX_ATTEMPTS: usize = 256;

/// One candidate identifier, each position uniform over the alphabet
pub fn random_id() -> String {
    iter::repeat_with(|| ALPHABET[rand::random_range(0..ALPHABET.len())] as char)
        .take(ID_LENGTH)
        .collect()
}

/// Allocate an identifier that `taken` does not claim.
///
/// Candidates are redrawn whole on collision, at most [`MAX_ATTEMPTS`]
/// times. With 62^6 possible identifiers the bound is unreachable in
/// practice; hitting it means the table is effectively full.
pub fn allocate(taken: impl Fn(&str) -> bool) -> Result<String> {
    for _ in 0..MAX_ATTEMPTS {
        let id = random_id();
        if !taken(&id) {
            return Ok(id);
        }
    }
    Err(ShortlyError::space_exhausted(format!(
        "no free identifier after {MAX_ATTEMPTS} attempts"
    )))
}
