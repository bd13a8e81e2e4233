//! Email rule - rejects passwords reusing part of the user's email.

use crate::types::RuleOptions;
use secrecy::{ExposeSecret, SecretString};

/// Shortest run of the email local part that counts as a match.
const MIN_MATCH: usize = 4;

/// Fails if any 4+ consecutive characters of the email local part appear in
/// the password, ignoring case.
///
/// Lengths and runs are measured in UTF-16 code units. Local parts shorter
/// than four units never fail.
pub fn no_email_rule(password: &SecretString, options: &RuleOptions) -> bool {
    let Some(email) = options.email.as_deref() else {
        return true;
    };
    let email = email.to_lowercase();
    let local: Vec<u16> = email
        .split('@')
        .next()
        .unwrap_or_default()
        .encode_utf16()
        .collect();
    if local.len() < MIN_MATCH {
        return true;
    }

    let password: Vec<u16> = password
        .expose_secret()
        .to_lowercase()
        .encode_utf16()
        .collect();
    // Every longer matching run starts with a matching window of MIN_MATCH.
    !local
        .windows(MIN_MATCH)
        .any(|run| password.windows(MIN_MATCH).any(|window| window == run))
}
