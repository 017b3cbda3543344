//! Common-password section - checks the password against the deny-list.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::scorer::PasswordScorer;

/// Fails when the lowercased password contains a deny-list entry.
pub fn common_section(password: &SecretString, scorer: &PasswordScorer) -> SectionResult {
    if scorer.deny_list().matches(password.expose_secret()) {
        return Some("Avoid common passwords".to_string());
    }
    None
}
