//! Character variety sections - uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::scorer::PasswordScorer;

/// Characters accepted by the special-character check.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

fn any_char(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

/// Requires at least one ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString, _scorer: &PasswordScorer) -> SectionResult {
    if any_char(password, |c| c.is_ascii_uppercase()) {
        return None;
    }
    Some("Add an uppercase letter".to_string())
}

/// Requires at least one ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString, _scorer: &PasswordScorer) -> SectionResult {
    if any_char(password, |c| c.is_ascii_lowercase()) {
        return None;
    }
    Some("Add a lowercase letter".to_string())
}

/// Requires at least one digit.
pub fn number_section(password: &SecretString, _scorer: &PasswordScorer) -> SectionResult {
    if any_char(password, |c| c.is_ascii_digit()) {
        return None;
    }
    Some("Add a number".to_string())
}

/// Requires at least one character from [`SPECIAL_CHARS`].
pub fn special_section(password: &SecretString, _scorer: &PasswordScorer) -> SectionResult {
    if any_char(password, |c| SPECIAL_CHARS.contains(c)) {
        return None;
    }
    Some("Add a special character".to_string())
}
