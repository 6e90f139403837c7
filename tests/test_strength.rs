use passmeter::strength::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password() {
        for password in ["Abcdefgh123!", "Tr0ub4dor&3xyz", "correct-Horse-9-battery"] {
            let result = evaluate(password);
            assert_eq!(result.score, 85, "{}", password);
            assert!(result.score <= MAX_SCORE);
            assert_eq!(result.label, StrengthLabel::Strong);
            assert!(result.suggestions.is_empty());
        }
    }

    #[test]
    fn test_empty_password() {
        let result = evaluate("");
        assert_eq!(result.score, 0);
        assert_eq!(result.label, StrengthLabel::VeryWeak);
        assert_eq!(
            result.suggestions,
            vec![
                SUGGEST_TOO_SHORT,
                SUGGEST_UPPERCASE,
                SUGGEST_LOWERCASE,
                SUGGEST_DIGIT,
                SUGGEST_SPECIAL,
            ]
        );
    }

    #[test]
    fn test_medium_length_all_classes() {
        let result = evaluate("Abc12345!");
        assert_eq!(result.score, 75);
        assert_eq!(result.label, StrengthLabel::Moderate);
        assert_eq!(result.suggestions, vec!["Make your password at least 12 characters long."]);
    }

    #[test]
    fn test_suggestions_keep_check_order() {
        // long, lowercase only
        let result = evaluate("abcdefghijklmnop");
        assert_eq!(result.score, 40);
        assert_eq!(result.label, StrengthLabel::Weak);
        assert_eq!(result.suggestions, vec![SUGGEST_UPPERCASE, SUGGEST_DIGIT, SUGGEST_SPECIAL]);
    }

    #[test]
    fn test_short_password_scores() {
        let result = evaluate("aB1!");
        assert_eq!(result.score, 60);
        assert_eq!(result.label, StrengthLabel::Moderate);
        assert_eq!(result.suggestions, vec![SUGGEST_TOO_SHORT]);

        let result = evaluate("abc");
        assert_eq!(result.score, 15);
        assert_eq!(result.label, StrengthLabel::VeryWeak);
        assert_eq!(result.suggestions.len(), 4);
    }

    #[test]
    fn test_length_boundaries() {
        assert_eq!(evaluate("aaaaaaa").score, 15);
        assert_eq!(evaluate("aaaaaaaa").score, 30);
        assert_eq!(evaluate("aaaaaaaaaaa").score, 30);
        assert_eq!(evaluate("aaaaaaaaaaaa").score, 40);
    }

    #[test]
    fn test_non_ascii_does_not_count_as_class() {
        let result = evaluate("ÄÖÜäöü");
        assert_eq!(result.score, 0);
        assert_eq!(result.suggestions.len(), 5);
    }

    #[test]
    fn test_score_monotonic_per_requirement() {
        // each base lacks one requirement; the second string satisfies only that one
        let cases = [
            ("Abc1!", "Abc1!xyz"),
            ("Abc1!xyz", "Abc1!xyzuvwq"),
            ("abcdefgh12!x", "abcdefgh12!xA"),
            ("ABCDEFGH12!X", "ABCDEFGH12!Xa"),
            ("Abcdefghijk!", "Abcdefghijk!1"),
            ("Abcdefghijk1", "Abcdefghijk1!"),
            ("abc", "abc1"),
        ];
        for (base, improved) in cases {
            assert!(evaluate(improved).score > evaluate(base).score, "{} -> {}", base, improved);
        }
    }

    #[test]
    fn test_non_ascii_digit_is_not_counted() {
        let result = evaluate("Abcdefghijk!\u{0663}");
        assert_eq!(result.score, 70);
        assert_eq!(result.label, StrengthLabel::Moderate);
        assert_eq!(result.suggestions, vec![SUGGEST_DIGIT]);
    }

    #[test]
    fn test_classification_table() {
        assert_eq!(classify(80), StrengthLabel::Strong);
        assert_eq!(classify(79), StrengthLabel::Moderate);
        assert_eq!(classify(60), StrengthLabel::Moderate);
        assert_eq!(classify(59), StrengthLabel::Weak);
        assert_eq!(classify(30), StrengthLabel::Weak);
        assert_eq!(classify(29), StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(StrengthLabel::Strong.color(), "#16a34a");
        assert_eq!(StrengthLabel::Moderate.color(), "#facc15");
        assert_eq!(StrengthLabel::Weak.color(), "#f97316");
        assert_eq!(StrengthLabel::VeryWeak.color(), "#dc2626");
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
    }

    #[test]
    fn test_result_serializes() {
        let json = serde_json::to_value(evaluate("Abc12345!")).unwrap();
        assert_eq!(json["score"], 75);
        assert_eq!(json["label"], "Moderate");
        assert_eq!(json["suggestions"].as_array().map(|a| a.len()), Some(1));
    }
}
