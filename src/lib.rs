//! Rule-based password strength meter
//!
//! This library scores a password against a fixed rule set, maps the
//! score to a strength level and tells a meter how many bars to light.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORBIDDEN_WORDS_PATH`: Custom path to a forbidden word list
//!   (default: `./assets/forbidden-words.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{compute_strength, Bars, StrengthLevel, StrengthOptions};
//! use secrecy::SecretString;
//!
//! let options = StrengthOptions::default()
//!     .with_bars(Bars::Four)
//!     .with_email("johndoe@mail.com")
//!     .with_forbidden_words(["acme"]);
//!
//! let password = SecretString::new("MyP@ssw0rd123".to_string().into());
//! let result = compute_strength(&password, &options);
//!
//! assert_eq!(result.level, StrengthLevel::Strong);
//! assert_eq!(result.active_bars(), 4);
//! assert_eq!(result.percentage, 100);
//! ```

// Internal modules
mod evaluator;
mod level;
mod rules;
mod types;
mod wordlist;

// Public API
pub use evaluator::{compute_strength, evaluate};
pub use level::{to_active_bars, to_level, to_percentage, MAX_SCORE};
pub use rules::{
    active_rules, mandatory_rules, Rule, RuleCheck, MIN_LENGTH, RULES, SPECIAL_CHARACTERS,
};
pub use types::{
    Bars, EvaluationResult, ParseError, RuleId, RuleOptions, StrengthLevel, StrengthOptions,
    StrengthResult, DEFAULT_MAX_RULES,
};
pub use wordlist::{
    forbidden_words_path, load_forbidden_words, load_forbidden_words_from_path, WordListError,
    FORBIDDEN_WORDS_PATH_VAR,
};

#[cfg(feature = "async")]
pub use evaluator::{compute_strength_tx, DEBOUNCE};
