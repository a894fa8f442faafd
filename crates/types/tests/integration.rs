//! Integration tests for types crate

#[cfg(test)]
mod tests {
    use sumcheck_types::*;

    #[test]
    fn test_color_choice_serialization() {
        let json = serde_json::to_string(&ColorChoice::Never).unwrap();
        assert_eq!(json, "\"never\"");
        let parsed: ColorChoice = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(parsed, ColorChoice::Always);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
        assert_eq!(OutputFormat::default(), OutputFormat::Tty);
    }

    #[test]
    fn test_absorb_accumulates_totals() {
        let mut first = ManifestSummary::default();
        first.record(&VerificationResult::Match);
        first.record(&VerificationResult::NotFound);

        let mut totals = ManifestSummary::default();
        totals.absorb(&first);
        totals.absorb(&first);

        assert_eq!(totals.total, 4);
        assert_eq!(totals.correct, 2);
        assert_eq!(totals.not_found, 2);
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_labels() {
        assert_eq!(VerificationResult::Match.label(), "ok");
        assert!(!VerificationResult::Match.is_issue());
        assert!(VerificationResult::NotFound.is_issue());
    }
}
