//! Deny-list of common passwords.
//!
//! A password fails the `not_common` check when its lowercase form
//! contains any entry as a substring.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a custom deny-list file.
pub const DENY_LIST_ENV: &str = "PWD_DENY_LIST_PATH";

/// Path used when `PWD_DENY_LIST_PATH` is not set.
pub const DEFAULT_DENY_LIST_PATH: &str = "./assets/deny-list.txt";

/// Built-in common passwords.
pub const COMMON_PASSWORDS: [&str; 10] = [
    "password", "123456", "12345678", "qwerty", "abc123", "monkey", "letmein", "dragon",
    "111111", "iloveyou",
];

#[derive(Error, Debug)]
pub enum DenyListError {
    #[error("Deny-list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read deny-list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Deny-list file is empty")]
    EmptyFile,
}

/// Returns the deny-list file path.
///
/// Priority:
/// 1. Environment variable `PWD_DENY_LIST_PATH`
/// 2. Default path `./assets/deny-list.txt`
pub fn deny_list_path() -> PathBuf {
    std::env::var(DENY_LIST_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DENY_LIST_PATH))
}

/// Lowercased set of common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyList {
    entries: HashSet<String>,
}

impl Default for DenyList {
    fn default() -> Self {
        Self::from_entries(COMMON_PASSWORDS)
    }
}

impl DenyList {
    /// Builds a deny-list from arbitrary entries.
    ///
    /// Entries are trimmed and lowercased; blank ones are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a newline-separated deny-list file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let deny_list = pwd_meter::DenyList::from_path("/etc/myapp/deny-list.txt")?;
    /// let scorer = pwd_meter::PasswordScorer::default().with_deny_list(deny_list);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenyListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Deny-list load FAILED: FileNotFound {:?}", path);
            return Err(DenyListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Deny-list load FAILED: Empty file {:?}", path);
            return Err(DenyListError::EmptyFile);
        }

        let deny_list = Self::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Deny-list loaded: {} passwords from {:?}", deny_list.len(), path);

        Ok(deny_list)
    }

    /// Loads the deny-list from [`deny_list_path`].
    pub fn from_env() -> Result<Self, DenyListError> {
        Self::from_path(deny_list_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the lowercased password contains any entry.
    pub fn matches(&self, password: &str) -> bool {
        let lowered = password.to_lowercase();
        self.entries.iter().any(|entry| lowered.contains(entry.as_str()))
    }
}
