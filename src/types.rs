//! Value types shared by the evaluator and the level mapper.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default number of rules a meter shows under the bars.
pub const DEFAULT_MAX_RULES: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown rule identifier: {0}")]
    UnknownRule(String),
    #[error("Unknown strength level: {0}")]
    UnknownLevel(String),
    #[error("Bars number must be 3, 4 or 5, got {0}")]
    InvalidBars(u8),
}

/// Stable rule identifiers.
///
/// The string forms are the keys consumers use for label lookup, so they
/// must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    MinLength,
    Uppercase,
    Lowercase,
    Number,
    Special,
    NoEmail,
    NoForbiddenWords,
}

impl RuleId {
    pub const ALL: [RuleId; 7] = [
        RuleId::MinLength,
        RuleId::Uppercase,
        RuleId::Lowercase,
        RuleId::Number,
        RuleId::Special,
        RuleId::NoEmail,
        RuleId::NoForbiddenWords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::MinLength => "minLength",
            RuleId::Uppercase => "uppercase",
            RuleId::Lowercase => "lowercase",
            RuleId::Number => "number",
            RuleId::Special => "special",
            RuleId::NoEmail => "noEmail",
            RuleId::NoForbiddenWords => "noForbiddenWords",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseError::UnknownRule(s.to_string()))
    }
}

/// Discrete strength categories, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Soso,
    Good,
    Strong,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Soso,
        StrengthLevel::Good,
        StrengthLevel::Strong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "veryWeak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Soso => "soso",
            StrengthLevel::Good => "good",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrengthLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseError::UnknownLevel(s.to_string()))
    }
}

/// How many bars the meter renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bars {
    Three,
    Four,
    #[default]
    Five,
}

impl Bars {
    pub fn count(&self) -> u8 {
        match self {
            Bars::Three => 3,
            Bars::Four => 4,
            Bars::Five => 5,
        }
    }
}

impl TryFrom<u8> for Bars {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Bars::Three),
            4 => Ok(Bars::Four),
            5 => Ok(Bars::Five),
            other => Err(ParseError::InvalidBars(other)),
        }
    }
}

/// Context for the optional rules. Absent values leave the rule unevaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    pub email: Option<String>,
    pub forbidden_words: Vec<String>,
}

impl RuleOptions {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_forbidden_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_words = words.into_iter().map(Into::into).collect();
        self
    }
}

/// Options for a full strength computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthOptions {
    pub bars: Bars,
    pub rules: RuleOptions,
}

impl StrengthOptions {
    pub fn with_bars(mut self, bars: Bars) -> Self {
        self.bars = bars;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.rules = self.rules.with_email(email);
        self
    }

    pub fn with_forbidden_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = self.rules.with_forbidden_words(words);
        self
    }
}

/// Outcome of running the active rules over a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub passed_rules: Vec<RuleId>,
    pub failed_rules: Vec<RuleId>,
    /// 0..=5
    pub score: u8,
}

/// Final result handed to a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub passed_rules: Vec<RuleId>,
    pub failed_rules: Vec<RuleId>,
    pub percentage: u8,
    pub bars: Bars,
}

impl StrengthResult {
    /// Number of highlighted bars for the configured bar count.
    pub fn active_bars(&self) -> u8 {
        crate::level::to_active_bars(self.level, self.bars)
    }

    pub fn is_passed(&self, rule: RuleId) -> bool {
        self.passed_rules.contains(&rule)
    }

    /// Picks up to `max_rules` rules to show, failed ones first.
    pub fn display_rules(&self, max_rules: usize) -> Vec<RuleId> {
        self.failed_rules
            .iter()
            .chain(self.passed_rules.iter())
            .take(max_rules)
            .copied()
            .collect()
    }
}
