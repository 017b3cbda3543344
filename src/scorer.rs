//! Password scorer - main assessment logic.

use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;

use crate::deny_list::{DenyList, DenyListError};
use crate::patterns::WeakPatterns;
use crate::sections::{
    Section, common_section, length_section, lowercase_section, number_section, pattern_section,
    special_section, uppercase_section,
};
use crate::types::{
    Check, Checklist, MAX_SUGGESTIONS, PasswordAssessment, PasswordScore, PasswordStrength,
};

/// Flat penalty applied when a weak pattern is found.
pub const PATTERN_PENALTY: f64 = 20.0;

/// `(min length, bonus)` pairs; every reached threshold adds its bonus.
pub const LENGTH_BONUSES: [(usize, f64); 2] = [(12, 10.0), (14, 10.0)];

static DEFAULT_SCORER: LazyLock<PasswordScorer> = LazyLock::new(PasswordScorer::default);

/// Checklist sections in evaluation order.
const SECTIONS: [(Check, Section); 6] = [
    (Check::Length, length_section),
    (Check::Uppercase, uppercase_section),
    (Check::Lowercase, lowercase_section),
    (Check::Number, number_section),
    (Check::Special, special_section),
    (Check::NotCommon, common_section),
];

/// Scores passwords against a deny-list and a weak-pattern set.
///
/// The rule set is immutable once built, so a scorer can be shared
/// across threads and every assessment depends only on its input.
#[derive(Debug, Clone, Default)]
pub struct PasswordScorer {
    deny_list: DenyList,
    weak_patterns: WeakPatterns,
}

impl PasswordScorer {
    /// Builds a scorer whose deny-list comes from `PWD_DENY_LIST_PATH`
    /// (or `./assets/deny-list.txt`).
    pub fn from_env() -> Result<Self, DenyListError> {
        Ok(Self::default().with_deny_list(DenyList::from_env()?))
    }

    pub fn with_deny_list(mut self, deny_list: DenyList) -> Self {
        self.deny_list = deny_list;
        self
    }

    pub fn with_weak_patterns(mut self, weak_patterns: WeakPatterns) -> Self {
        self.weak_patterns = weak_patterns;
        self
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny_list
    }

    pub fn weak_patterns(&self) -> &WeakPatterns {
        &self.weak_patterns
    }

    /// Assesses a password.
    ///
    /// # Returns
    /// A `PasswordAssessment` with the clamped score, its tier, the
    /// checklist and up to three suggestions.
    pub fn assess(&self, password: &SecretString) -> PasswordAssessment {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return PasswordAssessment::empty();
        }
        let pwd_len = pwd.chars().count();

        let mut checklist = Checklist::default();
        let mut suggestions = Vec::new();

        // Every section runs, even after a failure
        for (check, section_fn) in SECTIONS {
            match section_fn(password, self) {
                Some(suggestion) => suggestions.push(suggestion),
                None => checklist.set(check, true),
            }
        }

        let mut raw = checklist.passed_count() as f64 / Check::ALL.len() as f64 * 100.0;

        for (min_len, bonus) in LENGTH_BONUSES {
            if pwd_len >= min_len {
                raw += bonus;
            }
        }

        if let Some(warning) = pattern_section(password, self) {
            raw -= PATTERN_PENALTY;
            suggestions.push(warning);
        }

        let score = PasswordScore::new(raw);
        let strength = PasswordStrength::from_score(score);
        suggestions.truncate(MAX_SUGGESTIONS);

        #[cfg(feature = "tracing")]
        tracing::trace!(score = score.value(), ?strength, "password assessed");

        PasswordAssessment {
            score,
            strength,
            checklist,
            suggestions,
        }
    }

    /// Convenience wrapper for callers holding a plain `&str`.
    pub fn assess_str(&self, password: &str) -> PasswordAssessment {
        self.assess(&SecretString::new(password.to_string().into()))
    }
}

/// Assesses a password with the built-in deny-list and weak patterns.
pub fn assess(password: &SecretString) -> PasswordAssessment {
    DEFAULT_SCORER.assess(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::PATTERN_WARNING;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn eval(pwd: &str) -> PasswordAssessment {
        assess(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_assess_empty_password() {
        let assessment = eval("");

        assert_eq!(assessment.score.value(), 0.0);
        assert_eq!(assessment.strength, PasswordStrength::None);
        assert!(assessment.checklist.not_common);
        assert_eq!(assessment.checklist.passed_count(), 1);
        assert!(assessment.suggestions.is_empty());
        assert_eq!(assessment, PasswordAssessment::empty());
    }

    #[test]
    fn test_assess_clamps_at_100() {
        // 14 chars, every class, no pattern: 100 + 20 before clamping
        let assessment = eval("Rk7!mQ2p#Lw9Tz");

        assert_eq!(assessment.checklist.passed_count(), 6);
        assert_eq!(assessment.score.value(), 100.0);
        assert_eq!(assessment.strength, PasswordStrength::Strong);
        assert!(assessment.suggestions.is_empty());
    }

    #[test]
    fn test_assess_pattern_penalty_beats_checklist() {
        let repeated = eval("Aaaaaaa1!");
        let clean = eval("Ax7!mQ2p");

        assert_eq!(repeated.checklist.passed_count(), 6);
        assert_eq!(repeated.score.value(), 80.0);
        assert_eq!(repeated.suggestions, vec![PATTERN_WARNING.to_string()]);
        assert_eq!(clean.score.value(), 100.0);
        assert!(repeated.score < clean.score);
    }

    #[test]
    fn test_assess_common_password_with_suffix() {
        let assessment = eval("password123");

        assert!(!assessment.checklist.not_common);
        assert!(assessment.suggestions.contains(&"Avoid common passwords".to_string()));
    }

    #[test]
    fn test_assess_boundary_30_is_fair() {
        // lowercase + number + not_common = 50, minus the repeat penalty
        let assessment = eval("aaa1");

        assert_eq!(assessment.score.value(), 30.0);
        assert_eq!(assessment.strength, PasswordStrength::Fair);
    }

    #[test]
    fn test_assess_boundary_60_is_good() {
        // length + lowercase + not_common = 50, plus the 12-char bonus
        let assessment = eval("xmbqzrtwpkvn");

        assert_eq!(assessment.score.value(), 60.0);
        assert_eq!(assessment.strength, PasswordStrength::Good);
    }

    #[test]
    fn test_assess_boundary_80_is_strong() {
        let assessment = eval("Aaaaaaa1!");

        assert_eq!(assessment.score.value(), 80.0);
        assert_eq!(assessment.strength, PasswordStrength::Strong);
    }

    #[test]
    fn test_assess_weak_tier() {
        // lowercase + not_common = 33.3, minus the repeat penalty
        let assessment = eval("zzz");

        assert!(assessment.score.value() < 30.0);
        assert_eq!(assessment.strength, PasswordStrength::Weak);
    }

    #[test]
    fn test_assess_length_bonuses_stack() {
        // Only lowercase letters without patterns, lengths 11..=14
        let base = eval("xmbqzrtwpkv").score.value();
        let twelve = eval("xmbqzrtwpkvn").score.value();
        let thirteen = eval("xmbqzrtwpkvnj").score.value();
        let fourteen = eval("xmbqzrtwpkvnjy").score.value();

        assert_eq!(twelve - base, 10.0);
        assert_eq!(thirteen, twelve);
        assert_eq!(fourteen - base, 20.0);
    }

    #[test]
    fn test_assess_penalty_applied_before_clamp() {
        // 20 chars: length fails, bonuses +20, penalty -20
        let assessment = eval("Zk!4Rp9#Lw2Tq7Mx5Aaa");

        assert!(!assessment.checklist.length);
        let expected = 5.0 / 6.0 * 100.0 + 20.0 - 20.0;
        assert!((assessment.score.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_assess_length_suggestion_branches() {
        let short = eval("Ab1!");
        let long = eval("Rk7!mQ2p#Lw9Tz5Yv");

        assert_eq!(short.suggestions[0], "Use at least 8 characters");
        assert_eq!(long.suggestions[0], "Use no more than 16 characters");
        assert!(!short.checklist.length);
        assert!(!long.checklist.length);
    }

    #[test]
    fn test_assess_suggestions_capped_and_ordered() {
        // Fails length, uppercase, number, special, not_common and has a pattern
        let assessment = eval("qwerty");

        assert_eq!(assessment.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(
            assessment.suggestions,
            vec![
                "Use at least 8 characters".to_string(),
                "Add an uppercase letter".to_string(),
                "Add a number".to_string(),
            ]
        );
    }

    #[test]
    fn test_assess_pattern_warning_is_last() {
        // Fails only number, plus a pattern
        let assessment = eval("Xy!abcWmz");

        assert_eq!(
            assessment.suggestions,
            vec!["Add a number".to_string(), PATTERN_WARNING.to_string()]
        );
    }

    #[test]
    fn test_assess_is_deterministic() {
        for pwd in ["", "a", "password123", "Aaaaaaa1!", "Rk7!mQ2p#Lw9Tz"] {
            assert_eq!(eval(pwd), eval(pwd), "non-deterministic for '{}'", pwd);
        }
    }

    #[test]
    fn test_assess_score_bounds() {
        let test_passwords = [
            "",
            "a",
            "!!!",
            "password",
            "Aaaaaaa1!",
            "Zk!4Rp9#Lw2Tq7Mx5Aaa",
            "VeryStrongPassword123!@#",
        ];

        for pwd in test_passwords {
            let score = eval(pwd).score.value();
            assert!(
                (0.0..=100.0).contains(&score),
                "Score {} out of bounds for password '{}'",
                score,
                pwd
            );
        }
    }

    #[test]
    fn test_assess_str_matches_assess() {
        let scorer = PasswordScorer::default();
        assert_eq!(scorer.assess_str("Ax7!mQ2p"), eval("Ax7!mQ2p"));
    }

    #[test]
    fn test_assess_custom_rules() {
        let scorer = PasswordScorer::default()
            .with_deny_list(DenyList::from_entries(["rating"]))
            .with_weak_patterns(WeakPatterns::new(["store"]).expect("valid pattern"));

        let assessment = scorer.assess_str("MyStore!7x");
        assert!(assessment.checklist.not_common);
        assert_eq!(assessment.suggestions, vec![PATTERN_WARNING.to_string()]);

        let assessment = scorer.assess_str("Rating!7x");
        assert!(!assessment.checklist.not_common);
    }

    #[test]
    #[serial]
    fn test_from_env_loads_deny_list() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "sunshine").expect("Failed to write");
        let path = temp_file.path().to_str().unwrap();
        // SAFETY: env-touching tests are serialized
        unsafe {
            std::env::set_var(crate::deny_list::DENY_LIST_ENV, path);
        }

        let scorer = PasswordScorer::from_env().expect("deny-list should load");
        assert!(!scorer.assess_str("Sunshine!7x").checklist.not_common);
        assert!(scorer.assess_str("password!7X").checklist.not_common);

        unsafe {
            std::env::remove_var(crate::deny_list::DENY_LIST_ENV);
        }
    }
}
