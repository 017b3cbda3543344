//! Pattern section - detects repeated and sequential patterns.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::scorer::PasswordScorer;

pub const PATTERN_WARNING: &str = "Avoid repeated characters and common sequences";

/// Runs the scorer's weak-pattern set over the password.
///
/// # Returns
/// - `Some(warning)` if any weak pattern is found
/// - `None` otherwise
pub fn pattern_section(password: &SecretString, scorer: &PasswordScorer) -> SectionResult {
    if scorer.weak_patterns().matches(password.expose_secret()) {
        return Some(PATTERN_WARNING.to_string());
    }
    None
}
