//! Strength scorer - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    character_variety_section, common_password_section, length_section, pattern_section,
};
use crate::types::{AnalysisResult, BreachStatus, Evaluation, ScoreBreakdown};

/// Evaluates password strength from character composition and common-password
/// membership.
///
/// Additive pass over independent checks (length tiers, then one check per
/// character class), followed by the common-password penalty, clamped to
/// `[0, 100]`. Suggestions are emitted once per unmet criterion in check
/// order; pattern findings contribute feedback without moving the score.
pub fn evaluate_password_strength(password: &SecretString) -> Evaluation {
    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();

    // Additive pass: length first, then character variety.
    let length_outcome = length_section(password);
    let (variety_outcome, variety) = character_variety_section(password);

    let mut score = length_outcome.points + variety_outcome.points;
    suggestions.extend(length_outcome.suggestions);
    suggestions.extend(variety_outcome.suggestions);

    let patterns = pattern_section(password);
    feedback.extend(patterns.feedback);
    suggestions.extend(patterns.suggestions);

    // Penalty applies after the additive pass.
    let common = common_password_section(password, score);
    score = common.score;
    if let Some(note) = common.feedback {
        feedback.push(note);
    }

    let score = score.min(100);

    let breakdown = ScoreBreakdown {
        length: password.expose_secret().chars().count(),
        has_uppercase: variety.has_uppercase,
        has_lowercase: variety.has_lowercase,
        has_numbers: variety.has_numbers,
        has_symbols: variety.has_symbols,
        is_common: common.is_common,
        has_patterns: patterns.has_patterns,
        has_repeated: patterns.has_repeated,
    };

    Evaluation {
        score,
        feedback,
        suggestions,
        breakdown,
    }
}

/// Complete analysis without a backend: local scoring merged with an
/// unchecked breach status. This is the degraded path every surface falls
/// back to when the breach service is unreachable.
pub fn analyze_offline(password: &SecretString) -> AnalysisResult {
    AnalysisResult::from_parts(
        evaluate_password_strength(password),
        BreachStatus::unchecked(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strength;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    #[serial]
    fn test_strong_password_scores_strong() {
        crate::blacklist::reset_blacklist_for_testing();

        let evaluation = evaluate_password_strength(&secret("Str0ng!Passw0rd123"));
        assert!(evaluation.score >= 80);
        assert_eq!(evaluation.strength(), Strength::Strong);
        assert!(evaluation.suggestions.is_empty());
        assert!(!evaluation.breakdown.is_common);
    }

    #[test]
    #[serial]
    fn test_common_password_penalized_to_weak() {
        crate::blacklist::reset_blacklist_for_testing();

        let evaluation = evaluate_password_strength(&secret("password"));
        // 15 (length 8) + 15 (lowercase) = 30, penalty floors it at 5.
        assert_eq!(evaluation.score, 5);
        assert_eq!(evaluation.strength(), Strength::Weak);
        assert!(evaluation.breakdown.is_common);
        assert!(
            evaluation
                .feedback
                .iter()
                .any(|f| f.contains("commonly used"))
        );
    }

    #[test]
    #[serial]
    fn test_empty_password_scores_zero() {
        crate::blacklist::reset_blacklist_for_testing();

        let evaluation = evaluate_password_strength(&secret(""));
        assert_eq!(evaluation.score, 0);
        assert_eq!(evaluation.strength(), Strength::Weak);
        assert_eq!(evaluation.breakdown, ScoreBreakdown::default());
    }

    #[test]
    #[serial]
    fn test_score_bounds_and_threshold_consistency() {
        crate::blacklist::reset_blacklist_for_testing();

        let corpus = [
            "",
            "a",
            "abc",
            "password",
            "qwerty",
            "MyPass123!",
            "short1!",
            "nouppercase123!",
            "NOLOWERCASE123!",
            "NoNumbersHere!",
            "NoSymbols123abc",
            "Str0ng!Passw0rd123",
            "CorrectHorseBatteryStaple!42",
            "aaaa1111bbbb",
            "pässwörd",
        ];

        for pwd in corpus {
            let evaluation = evaluate_password_strength(&secret(pwd));
            assert!(evaluation.score <= 100, "score out of bounds for {:?}", pwd);
            assert_eq!(
                evaluation.strength(),
                Strength::from_score(evaluation.score),
                "label inconsistent for {:?}",
                pwd
            );
        }
    }

    #[test]
    #[serial]
    fn test_suggestions_follow_check_order() {
        crate::blacklist::reset_blacklist_for_testing();

        let evaluation = evaluate_password_strength(&secret("abc"));
        // length, uppercase, numbers, symbols - lowercase is present.
        assert_eq!(evaluation.suggestions.len(), 4);
        assert!(evaluation.suggestions[0].contains("8 characters"));
        assert!(evaluation.suggestions[1].contains("uppercase"));
        assert!(evaluation.suggestions[2].contains("numbers"));
        assert!(evaluation.suggestions[3].contains("special"));
    }

    #[test]
    #[serial]
    fn test_pattern_findings_leave_score_untouched() {
        crate::blacklist::reset_blacklist_for_testing();

        // All additive checks pass and "abcd" trips the sequential scan.
        let evaluation = evaluate_password_strength(&secret("abcdTest123!"));
        assert_eq!(evaluation.score, 100);
        assert!(evaluation.breakdown.has_patterns);
        assert!(
            evaluation
                .feedback
                .iter()
                .any(|f| f.contains("Sequential"))
        );
    }

    #[test]
    #[serial]
    fn test_analyze_offline_marks_breach_unchecked() {
        crate::blacklist::reset_blacklist_for_testing();

        let result = analyze_offline(&secret("Str0ng!Passw0rd123"));
        assert_eq!(result.strength, Strength::Strong);
        assert!(!result.breached);
        assert_eq!(result.breach_count, 0);
        assert!(!result.breach_checked);
        assert!(result.breach_message.contains("backend"));
        assert!(result.details.is_some());
    }
}
