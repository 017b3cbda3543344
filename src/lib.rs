//! Password strength meter
//!
//! Scores a password from 0 to 100, maps it to a strength tier, reports a
//! six-entry checklist and up to three suggestions. Assessment is a pure
//! function of the password and the scorer's rules, cheap enough to run
//! on every keystroke.
//!
//! # Features
//!
//! - `async` (default): Enables debounced keystroke assessment with cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serialize/Deserialize for the assessment types
//!
//! # Environment Variables
//!
//! - `PWD_DENY_LIST_PATH`: Custom path to a deny-list file, used by
//!   [`PasswordScorer::from_env`] (default: `./assets/deny-list.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{assess, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Ax7!mQ2p".to_string().into());
//! let assessment = assess(&password);
//!
//! assert_eq!(assessment.strength, PasswordStrength::Strong);
//! for suggestion in &assessment.suggestions {
//!     println!("{}", suggestion);
//! }
//! ```

mod deny_list;
mod patterns;
mod scorer;
mod sections;
mod types;

#[cfg(feature = "async")]
mod debounce;

// Public API
pub use deny_list::{
    COMMON_PASSWORDS, DEFAULT_DENY_LIST_PATH, DENY_LIST_ENV, DenyList, DenyListError,
    deny_list_path,
};
pub use patterns::{DEFAULT_WEAK_PATTERNS, PatternError, REPEAT_RUN_LENGTH, WeakPatterns};
pub use scorer::{LENGTH_BONUSES, PATTERN_PENALTY, PasswordScorer, assess};
pub use sections::{MAX_LENGTH, MIN_LENGTH, PATTERN_WARNING, SPECIAL_CHARS};
pub use types::{
    Check, Checklist, MAX_SCORE, MAX_SUGGESTIONS, MIN_SCORE, PasswordAssessment, PasswordScore,
    PasswordStrength,
};

#[cfg(feature = "async")]
pub use debounce::{DEBOUNCE, assess_debounced};
