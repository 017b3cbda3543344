//! Length section - checks the password stays within the accepted length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::scorer::PasswordScorer;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 16;

/// Checks `MIN_LENGTH <= length <= MAX_LENGTH`, counted in characters.
///
/// # Returns
/// - `Some(reason)` asking for more characters if too short, or fewer if too long
/// - `None` if the length is accepted
pub fn length_section(password: &SecretString, _scorer: &PasswordScorer) -> SectionResult {
    let len = password.expose_secret().chars().count();
    if len < MIN_LENGTH {
        return Some(format!("Use at least {} characters", MIN_LENGTH));
    }
    if len > MAX_LENGTH {
        return Some(format!("Use no more than {} characters", MAX_LENGTH));
    }
    None
}
