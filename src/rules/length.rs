//! Length rule - checks password minimum length.

use crate::types::RuleOptions;
use secrecy::{ExposeSecret, SecretString};

/// Minimum number of characters for `minLength` to pass.
pub const MIN_LENGTH: usize = 12;

/// Passes if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice.
pub fn min_length_rule(password: &SecretString, _options: &RuleOptions) -> bool {
    password.expose_secret().encode_utf16().count() >= MIN_LENGTH
}
