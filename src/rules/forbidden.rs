//! Forbidden words rule - checks the password against caller-supplied words.

use crate::types::RuleOptions;
use secrecy::{ExposeSecret, SecretString};

/// Fails if the password contains any forbidden word, ignoring case.
pub fn no_forbidden_words_rule(password: &SecretString, options: &RuleOptions) -> bool {
    if options.forbidden_words.is_empty() {
        return true;
    }
    let password = password.expose_secret().to_lowercase();
    !options
        .forbidden_words
        .iter()
        .any(|word| password.contains(&word.to_lowercase()))
}
