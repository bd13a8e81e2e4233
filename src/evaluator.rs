//! Password strength evaluator - rule orchestration and scoring.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::level::{to_level, to_percentage, MAX_SCORE};
use crate::rules::{active_rules, mandatory_rules};
use crate::types::{EvaluationResult, RuleOptions, StrengthLevel, StrengthOptions, StrengthResult};

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Runs every active rule against the password and scores the outcome.
///
/// The base score is the pass ratio scaled to 0..=5 and rounded half up.
/// Each failed rule then removes its penalty, never going below zero.
pub fn evaluate(password: &SecretString, options: &RuleOptions) -> EvaluationResult {
    let mut passed_rules = Vec::new();
    let mut failed_rules = Vec::new();
    let mut penalties = Vec::new();

    for rule in active_rules(options) {
        if (rule.check)(password, options) {
            passed_rules.push(rule.id);
        } else {
            failed_rules.push(rule.id);
            if rule.penalty > 0 {
                penalties.push(rule.penalty);
            }
        }
    }

    let passed = passed_rules.len();
    let total = passed + failed_rules.len();
    let mut score = if total > 0 {
        let max = usize::from(MAX_SCORE);
        ((passed * max * 2 + total) / (total * 2)) as u8
    } else {
        0
    };

    for penalty in penalties {
        score = score.saturating_sub(penalty);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        passed = passed_rules.len(),
        failed = failed_rules.len(),
        score,
        "password evaluated"
    );

    EvaluationResult {
        passed_rules,
        failed_rules,
        score,
    }
}

/// Evaluates the password and maps the score to a level and percentage.
///
/// An empty password short-circuits to score 0 with every mandatory rule
/// failed, whatever the options.
pub fn compute_strength(password: &SecretString, options: &StrengthOptions) -> StrengthResult {
    if password.expose_secret().is_empty() {
        return StrengthResult {
            score: 0,
            level: StrengthLevel::VeryWeak,
            passed_rules: Vec::new(),
            failed_rules: mandatory_rules().iter().map(|rule| rule.id).collect(),
            percentage: 0,
            bars: options.bars,
        };
    }

    let EvaluationResult {
        passed_rules,
        failed_rules,
        score,
    } = evaluate(password, &options.rules);

    StrengthResult {
        score,
        level: to_level(score, options.bars),
        passed_rules,
        failed_rules,
        percentage: to_percentage(score),
        bars: options.bars,
    }
}

/// Debounced version that sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
#[cfg(feature = "async")]
pub async fn compute_strength_tx(
    password: &SecretString,
    options: &StrengthOptions,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled");
        return;
    }

    let result = compute_strength(password, options);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::to_active_bars;
    use crate::types::{Bars, RuleId};

    fn pwd(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    const MANDATORY: [RuleId; 5] = [
        RuleId::MinLength,
        RuleId::Uppercase,
        RuleId::Lowercase,
        RuleId::Number,
        RuleId::Special,
    ];

    #[test]
    fn test_evaluate_strong_password() {
        let result = evaluate(&pwd("MyP@ssw0rd123"), &RuleOptions::default());
        assert_eq!(result.passed_rules, MANDATORY.to_vec());
        assert!(result.failed_rules.is_empty());
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_evaluate_rule_counts_match_active_rules() {
        let cases = [
            (RuleOptions::default(), 5),
            (RuleOptions::default().with_email("johndoe@mail.com"), 6),
            (RuleOptions::default().with_forbidden_words(["qwerty"]), 6),
            (
                RuleOptions::default()
                    .with_email("johndoe@mail.com")
                    .with_forbidden_words(["qwerty"]),
                7,
            ),
        ];
        for password in ["", "a", "johndoe", "MyP@ssw0rd123", "🔒🔒🔒"] {
            for (options, expected) in &cases {
                let result = evaluate(&pwd(password), options);
                assert_eq!(
                    result.passed_rules.len() + result.failed_rules.len(),
                    *expected,
                    "password {password:?}"
                );
                assert!(result.passed_rules.iter().all(|id| !result.failed_rules.contains(id)));
            }
        }
    }

    #[test]
    fn test_evaluate_keeps_registry_order() {
        let options = RuleOptions::default().with_email("johndoe@mail.com");
        let result = evaluate(&pwd("johndoe"), &options);
        assert_eq!(
            result.failed_rules,
            vec![
                RuleId::MinLength,
                RuleId::Uppercase,
                RuleId::Number,
                RuleId::Special,
                RuleId::NoEmail
            ]
        );
        assert_eq!(result.passed_rules, vec![RuleId::Lowercase]);
    }

    #[test]
    fn test_evaluate_pass_ratio_rounding() {
        // 3 of 5 mandatory rules
        assert_eq!(evaluate(&pwd("abcdefgh1!"), &RuleOptions::default()).score, 3);
        // 1 of 5
        assert_eq!(evaluate(&pwd("abc"), &RuleOptions::default()).score, 1);
        // 3 of 6 rounds 2.5 up
        let options = RuleOptions::default().with_forbidden_words(["zzzz"]);
        assert_eq!(evaluate(&pwd("abc1"), &options).score, 3);
    }

    #[test]
    fn test_evaluate_email_penalty() {
        let options = RuleOptions::default().with_email("johndoe@mail.com");
        let result = evaluate(&pwd("John@Secure123"), &options);
        assert!(result.failed_rules.contains(&RuleId::NoEmail));
        // 5 of 6 passed -> round(4.17) = 4, minus 2
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_evaluate_forbidden_word_penalty() {
        let options = RuleOptions::default().with_forbidden_words(["qwerty"]);
        let result = evaluate(&pwd("myqwerty1"), &options);
        assert!(result.failed_rules.contains(&RuleId::NoForbiddenWords));
        // lowercase + number of 6 -> round(1.67) = 2, minus 2
        assert_eq!(result.score, 0);

        let upper = evaluate(&pwd("MyQWERTY1"), &options);
        assert!(upper.failed_rules.contains(&RuleId::NoForbiddenWords));
    }

    #[test]
    fn test_evaluate_penalties_floor_at_zero() {
        let options = RuleOptions::default()
            .with_email("johndoe@mail.com")
            .with_forbidden_words(["john"]);
        let result = evaluate(&pwd("john"), &options);
        assert!(result.failed_rules.contains(&RuleId::NoEmail));
        assert!(result.failed_rules.contains(&RuleId::NoForbiddenWords));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_evaluate_both_penalties_stack() {
        let options = RuleOptions::default()
            .with_email("johndoe@mail.com")
            .with_forbidden_words(["secure"]);
        let result = evaluate(&pwd("John@Secure123"), &options);
        // 5 of 7 passed -> round(3.57) = 4, minus 2 twice
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_evaluate_short_local_part_never_fails() {
        let options = RuleOptions::default().with_email("ab@mail.com");
        let result = evaluate(&pwd("ab@mail.com-AB1x"), &options);
        assert!(result.passed_rules.contains(&RuleId::NoEmail));
    }

    #[test]
    fn test_evaluate_unicode_and_long_input() {
        let long = "Aa1!".repeat(10_000);
        assert_eq!(evaluate(&pwd(&long), &RuleOptions::default()).score, 5);
        let result = evaluate(&pwd("パスワードパスワードパスワード"), &RuleOptions::default());
        assert_eq!(result.passed_rules, vec![RuleId::MinLength]);
    }

    #[test]
    fn test_evaluate_counts_utf16_units() {
        let result = evaluate(&pwd("😀😀😀😀😀😀"), &RuleOptions::default());
        assert_eq!(result.passed_rules, vec![RuleId::MinLength]);

        let options = RuleOptions::default().with_email("ab😀@mail.com");
        let result = evaluate(&pwd("xxab😀xx"), &options);
        assert!(result.failed_rules.contains(&RuleId::NoEmail));
    }

    #[test]
    fn test_compute_strength_empty_password() {
        let options = StrengthOptions::default()
            .with_email("johndoe@mail.com")
            .with_forbidden_words(["qwerty"]);
        let result = compute_strength(&pwd(""), &options);
        assert_eq!(result.score, 0);
        assert_eq!(result.level, StrengthLevel::VeryWeak);
        assert!(result.passed_rules.is_empty());
        assert_eq!(result.failed_rules, MANDATORY.to_vec());
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn test_compute_strength_strong_password() {
        let result = compute_strength(&pwd("MyP@ssw0rd123"), &StrengthOptions::default());
        assert_eq!(result.score, 5);
        assert_eq!(result.level, StrengthLevel::Strong);
        assert_eq!(result.active_bars(), 5);
        assert_eq!(result.percentage, 100);
        assert!(result.is_passed(RuleId::Special));
    }

    #[test]
    fn test_compute_strength_bars_configuration() {
        // score 3
        let password = pwd("abcdefgh1!");
        let three = compute_strength(&password, &StrengthOptions::default().with_bars(Bars::Three));
        let four = compute_strength(&password, &StrengthOptions::default().with_bars(Bars::Four));
        let five = compute_strength(&password, &StrengthOptions::default());
        assert_eq!(three.level, StrengthLevel::Soso);
        assert_eq!(four.level, StrengthLevel::Good);
        assert_eq!(five.level, StrengthLevel::Soso);
        assert_eq!(three.active_bars(), 2);
        assert_eq!(four.active_bars(), to_active_bars(StrengthLevel::Good, Bars::Four));
        assert_eq!(five.active_bars(), 3);
        assert!([three.percentage, four.percentage, five.percentage].iter().all(|&p| p == 60));
    }

    #[test]
    fn test_compute_strength_percentage_matches_score() {
        for password in ["a", "abc", "abcdefgh1!", "Abcdefgh1!", "MyP@ssw0rd123"] {
            let result = compute_strength(&pwd(password), &StrengthOptions::default());
            assert_eq!(result.percentage, to_percentage(result.score));
            assert_eq!(u32::from(result.percentage), u32::from(result.score) * 20);
        }
    }

    #[test]
    fn test_compute_strength_is_idempotent() {
        let options = StrengthOptions::default()
            .with_bars(Bars::Four)
            .with_email("johndoe@mail.com")
            .with_forbidden_words(["qwerty"]);
        let password = pwd("Johnny-Qwerty-7");
        assert_eq!(
            compute_strength(&password, &options),
            compute_strength(&password, &options)
        );
    }
}
