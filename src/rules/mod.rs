//! Password rules
//!
//! Each rule is a named predicate with its own activation condition.
//! The registry order is the order results are reported in.

mod email;
mod forbidden;
mod length;
mod variety;

use secrecy::SecretString;

use crate::types::{RuleId, RuleOptions};

pub use email::no_email_rule;
pub use forbidden::no_forbidden_words_rule;
pub use length::{min_length_rule, MIN_LENGTH};
pub use variety::{
    lowercase_rule, number_rule, special_rule, uppercase_rule, SPECIAL_CHARACTERS,
};

/// Predicate signature shared by all rules. `true` means the rule passed.
pub type RuleCheck = fn(&SecretString, &RuleOptions) -> bool;

/// A single entry of the rule registry.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    /// Whether the rule takes part in an evaluation with these options.
    pub is_active: fn(&RuleOptions) -> bool,
    pub check: RuleCheck,
    /// Score points removed when the rule fails.
    pub penalty: u8,
}

fn always(_: &RuleOptions) -> bool {
    true
}

fn has_email(options: &RuleOptions) -> bool {
    options.email.as_deref().is_some_and(|email| !email.is_empty())
}

fn has_forbidden_words(options: &RuleOptions) -> bool {
    !options.forbidden_words.is_empty()
}

pub const MANDATORY_RULE_COUNT: usize = 5;

/// All rules, mandatory ones first.
pub static RULES: [Rule; 7] = [
    Rule {
        id: RuleId::MinLength,
        is_active: always,
        check: min_length_rule,
        penalty: 0,
    },
    Rule {
        id: RuleId::Uppercase,
        is_active: always,
        check: uppercase_rule,
        penalty: 0,
    },
    Rule {
        id: RuleId::Lowercase,
        is_active: always,
        check: lowercase_rule,
        penalty: 0,
    },
    Rule {
        id: RuleId::Number,
        is_active: always,
        check: number_rule,
        penalty: 0,
    },
    Rule {
        id: RuleId::Special,
        is_active: always,
        check: special_rule,
        penalty: 0,
    },
    Rule {
        id: RuleId::NoEmail,
        is_active: has_email,
        check: no_email_rule,
        penalty: 2,
    },
    Rule {
        id: RuleId::NoForbiddenWords,
        is_active: has_forbidden_words,
        check: no_forbidden_words_rule,
        penalty: 2,
    },
];

/// The rules evaluated regardless of options.
pub fn mandatory_rules() -> &'static [Rule] {
    &RULES[..MANDATORY_RULE_COUNT]
}

/// Rules that take part in an evaluation with `options`, in registry order.
pub fn active_rules(options: &RuleOptions) -> impl Iterator<Item = &'static Rule> + '_ {
    RULES.iter().filter(move |rule| (rule.is_active)(options))
}
