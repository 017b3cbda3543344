//! Weak-pattern detection.
//!
//! A weak pattern is a low-entropy substring: a run of identical
//! characters, an ascending digit or letter run, or a keyboard-row triple.
//! All matching is case-insensitive.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use thiserror::Error;

/// Identical consecutive characters needed to count as a repeated run.
pub const REPEAT_RUN_LENGTH: usize = 3;

/// Built-in pattern expressions, compiled case-insensitively.
pub const DEFAULT_WEAK_PATTERNS: [&str; 3] = [
    "123|234|345|456|567|678|789",
    "abc|bcd|cde|def|efg|fgh|ghi",
    "qwe|asd|zxc",
];

static DEFAULT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DEFAULT_WEAK_PATTERNS
        .iter()
        .map(|p| compile(p).expect("built-in weak pattern is valid"))
        .collect()
});

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid weak pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Repeated-run threshold must be at least 2, got {0}")]
    InvalidRepeatRun(usize),
}

fn compile(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PatternError::Invalid {
            pattern: pattern.to_string(),
            source,
        })
}

/// Set of weak-pattern detectors.
#[derive(Debug, Clone)]
pub struct WeakPatterns {
    repeat_run: Option<usize>,
    regexes: Vec<Regex>,
}

impl Default for WeakPatterns {
    fn default() -> Self {
        Self {
            repeat_run: Some(REPEAT_RUN_LENGTH),
            regexes: DEFAULT_REGEXES.clone(),
        }
    }
}

impl WeakPatterns {
    /// Builds a set from custom expressions, keeping the repeated-run check.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regexes = patterns
            .into_iter()
            .map(|p| compile(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            repeat_run: Some(REPEAT_RUN_LENGTH),
            regexes,
        })
    }

    /// Changes the repeated-run threshold. `None` disables the check.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::InvalidRepeatRun` for a threshold below 2,
    /// which would flag every non-empty password.
    pub fn with_repeat_run(mut self, run: Option<usize>) -> Result<Self, PatternError> {
        if let Some(n) = run.filter(|&n| n < 2) {
            return Err(PatternError::InvalidRepeatRun(n));
        }
        self.repeat_run = run;
        Ok(self)
    }

    /// Returns `true` if any detector fires.
    pub fn matches(&self, password: &str) -> bool {
        if let Some(run) = self.repeat_run {
            if has_repeated_run(password, run) {
                return true;
            }
        }
        self.regexes.iter().any(|re| re.is_match(password))
    }
}

/// Detects `run` or more identical consecutive characters, ignoring case.
///
/// `run` is at least 2, as enforced by `WeakPatterns::with_repeat_run`.
fn has_repeated_run(password: &str, run: usize) -> bool {
    let mut count = 0;
    let mut prev: Option<char> = None;
    for c in password.chars().flat_map(char::to_lowercase) {
        if prev == Some(c) {
            count += 1;
        } else {
            count = 1;
            prev = Some(c);
        }
        if count >= run {
            return true;
        }
    }
    false
}
