//! Character variety rules - uppercase, lowercase, numbers, special chars.

use crate::types::RuleOptions;
use secrecy::{ExposeSecret, SecretString};

/// Characters accepted by the `special` rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>_-+=[]\\/`~;'";

fn contains_any(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

/// Passes if the password contains an ASCII uppercase letter.
pub fn uppercase_rule(password: &SecretString, _options: &RuleOptions) -> bool {
    contains_any(password, |c| c.is_ascii_uppercase())
}

/// Passes if the password contains an ASCII lowercase letter.
pub fn lowercase_rule(password: &SecretString, _options: &RuleOptions) -> bool {
    contains_any(password, |c| c.is_ascii_lowercase())
}

/// Passes if the password contains an ASCII digit.
pub fn number_rule(password: &SecretString, _options: &RuleOptions) -> bool {
    contains_any(password, |c| c.is_ascii_digit())
}

/// Passes if the password contains one of [`SPECIAL_CHARACTERS`].
pub fn special_rule(password: &SecretString, _options: &RuleOptions) -> bool {
    contains_any(password, |c| SPECIAL_CHARACTERS.contains(c))
}
