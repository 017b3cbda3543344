//! Password assessment sections
//!
//! Each section evaluates one checklist entry (or the weak-pattern
//! penalty) and reports the suggestion to show when it fails.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::common_section;
pub use length::{MAX_LENGTH, MIN_LENGTH, length_section};
pub use pattern::{PATTERN_WARNING, pattern_section};
pub use variety::{
    SPECIAL_CHARS, lowercase_section, number_section, special_section, uppercase_section,
};

use secrecy::SecretString;

use crate::scorer::PasswordScorer;

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Section failed, with the corrective message
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Signature shared by every section.
pub type Section = fn(&SecretString, &PasswordScorer) -> SectionResult;
