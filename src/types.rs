//! Assessment types returned by the scorer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound of the score range.
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of the score range.
pub const MAX_SCORE: f64 = 100.0;

/// Maximum number of suggestions surfaced by an assessment.
pub const MAX_SUGGESTIONS: usize = 3;

/// Password score, always within `[0, 100]`.
///
/// Deserialization goes through [`PasswordScore::new`], so out-of-range
/// values are clamped on the way in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct PasswordScore(f64);

impl PasswordScore {
    /// Builds a score, clamping the raw value into `[0, 100]`.
    ///
    /// `NaN` maps to `MIN_SCORE`.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(MIN_SCORE);
        }
        Self(raw.clamp(MIN_SCORE, MAX_SCORE))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for PasswordScore {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<PasswordScore> for f64 {
    fn from(score: PasswordScore) -> Self {
        score.value()
    }
}

/// Strength tier derived from the score.
///
/// `None` is reserved for the empty password. The variants are ordered
/// from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PasswordStrength {
    #[default]
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Maps a score of a non-empty password to its tier.
    ///
    /// Intervals are lower-inclusive: `<30` weak, `[30,60)` fair,
    /// `[60,80)` good, `>=80` strong.
    pub fn from_score(score: PasswordScore) -> Self {
        let value = score.value();
        if value >= 80.0 {
            PasswordStrength::Strong
        } else if value >= 60.0 {
            PasswordStrength::Good
        } else if value >= 30.0 {
            PasswordStrength::Fair
        } else {
            PasswordStrength::Weak
        }
    }
}

/// One entry of the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Check {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
    NotCommon,
}

impl Check {
    /// All checks in evaluation order.
    pub const ALL: [Check; 6] = [
        Check::Length,
        Check::Uppercase,
        Check::Lowercase,
        Check::Number,
        Check::Special,
        Check::NotCommon,
    ];
}

/// Outcome of every check for a single password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Checklist {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
    pub not_common: bool,
}

impl Checklist {
    /// Checklist of the empty password.
    pub fn empty() -> Self {
        Self {
            not_common: true,
            ..Self::default()
        }
    }

    pub fn get(&self, check: Check) -> bool {
        match check {
            Check::Length => self.length,
            Check::Uppercase => self.uppercase,
            Check::Lowercase => self.lowercase,
            Check::Number => self.number,
            Check::Special => self.special,
            Check::NotCommon => self.not_common,
        }
    }

    pub fn set(&mut self, check: Check, passed: bool) {
        let slot = match check {
            Check::Length => &mut self.length,
            Check::Uppercase => &mut self.uppercase,
            Check::Lowercase => &mut self.lowercase,
            Check::Number => &mut self.number,
            Check::Special => &mut self.special,
            Check::NotCommon => &mut self.not_common,
        };
        *slot = passed;
    }

    /// Iterates `(check, passed)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Check, bool)> + '_ {
        Check::ALL.into_iter().map(|check| (check, self.get(check)))
    }

    pub fn passed_count(&self) -> usize {
        self.iter().filter(|(_, passed)| *passed).count()
    }
}

/// Full result of assessing one password.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PasswordAssessment {
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    pub checklist: Checklist,
    pub suggestions: Vec<String>,
}

impl PasswordAssessment {
    /// Zero-state returned for the empty password.
    pub fn empty() -> Self {
        Self {
            score: PasswordScore::new(0.0),
            strength: PasswordStrength::None,
            checklist: Checklist::empty(),
            suggestions: Vec::new(),
        }
    }
}
