//! Condition Module Tests
//!
//! Validates filter-block extraction, the condition grammar, error handling
//! for malformed blocks, and the narrowing predicates.

#[cfg(test)]
mod tests {
    use crate::conditions::parser::{extract_conditions, parse_block};
    use crate::conditions::types::{matches_all, Condition};
    use crate::error::SearchError;
    use crate::search::types::{BiasRating, Document};
    use crate::vector::sparse::SparseVector;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn doc() -> Document {
        Document {
            doc_id: 0,
            title: "Recount ordered".to_string(),
            summary: String::new(),
            link: String::new(),
            authors: vec!["Jane Doe".to_string(), "John Smith".to_string()],
            vector: SparseVector::new(),
            publish_date: date(2020, 10, 15).and_hms_opt(8, 30, 0),
            publisher: Some("Wire Service".to_string()),
            bias_rating: Some(BiasRating::LeanLeft),
            site_link: None,
        }
    }

    // ============================================================
    // EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_written_before() {
        let (free_text, conditions) =
            extract_conditions("Biden coronavirus `WRITTEN BEFORE 10-20-2020`").unwrap();

        assert_eq!(free_text, "Biden coronavirus ");
        assert_eq!(
            conditions,
            vec![Condition::WrittenBefore(date(2020, 10, 20))]
        );
    }

    #[test]
    fn test_extract_no_block_passes_through() {
        let (free_text, conditions) = extract_conditions("Biden coronavirus").unwrap();
        assert_eq!(free_text, "Biden coronavirus");
        assert!(conditions.is_empty());
    }

    #[test]
    fn test_extract_unterminated_block_passes_through() {
        let query = "Biden coronavirus `WRITTEN BEFORE 10-20-2020";
        let (free_text, conditions) = extract_conditions(query).unwrap();
        assert_eq!(free_text, query);
        assert!(conditions.is_empty());
    }

    #[test]
    fn test_extract_block_mid_string() {
        let (free_text, conditions) =
            extract_conditions("Biden `HAVING BIAS CENTER` coronavirus").unwrap();

        assert_eq!(free_text, "Biden  coronavirus");
        assert_eq!(conditions, vec![Condition::HavingBias(BiasRating::Center)]);
    }

    #[test]
    fn test_extract_preserves_condition_order() {
        let (_, conditions) = extract_conditions(
            "recount `WRITTEN AFTER 1-1-2020 WRITTEN BEFORE 12-31-2020 HAVING BIAS LEFT`",
        )
        .unwrap();

        assert_eq!(
            conditions,
            vec![
                Condition::WrittenAfter(date(2020, 1, 1)),
                Condition::WrittenBefore(date(2020, 12, 31)),
                Condition::HavingBias(BiasRating::Left),
            ]
        );
    }

    // ============================================================
    // GRAMMAR TESTS
    // ============================================================

    #[test]
    fn test_parse_written_by_single_author() {
        let conditions = parse_block("WRITTEN BY \"Jane Doe\"").unwrap();
        assert_eq!(
            conditions,
            vec![Condition::WrittenBy(vec!["Jane Doe".to_string()])]
        );
    }

    #[test]
    fn test_parse_written_by_author_list() {
        let conditions = parse_block("WRITTEN BY \"Jane Doe\" AND \"John Smith\"").unwrap();
        assert_eq!(
            conditions,
            vec![Condition::WrittenBy(vec![
                "Jane Doe".to_string(),
                "John Smith".to_string(),
            ])]
        );
    }

    #[test]
    fn test_parse_published_by() {
        let conditions = parse_block("PUBLISHED BY \"Wire Service\"").unwrap();
        assert_eq!(
            conditions,
            vec![Condition::PublishedBy("Wire Service".to_string())]
        );
    }

    #[test]
    fn test_parse_all_bias_ratings() {
        let cases = [
            ("LEFT", BiasRating::Left),
            ("LEAN LEFT", BiasRating::LeanLeft),
            ("CENTER", BiasRating::Center),
            ("LEAN RIGHT", BiasRating::LeanRight),
            ("RIGHT", BiasRating::Right),
            ("MIXED", BiasRating::Mixed),
        ];
        for (token, expected) in cases {
            let conditions = parse_block(&format!("HAVING BIAS {}", token)).unwrap();
            assert_eq!(conditions, vec![Condition::HavingBias(expected)]);
        }
    }

    #[test]
    fn test_parse_single_digit_date_components() {
        let conditions = parse_block("WRITTEN AFTER 5-5-2020").unwrap();
        assert_eq!(conditions, vec![Condition::WrittenAfter(date(2020, 5, 5))]);
    }

    // ============================================================
    // ERROR TESTS
    // ============================================================

    #[test]
    fn test_invalid_month_and_day_rejected() {
        let err = extract_conditions("`WRITTEN BEFORE 13-45-2020`").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_malformed_date_shape_rejected() {
        let err = parse_block("WRITTEN BEFORE 2020-10-20").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_unknown_bias_token_rejected() {
        let err = parse_block("HAVING BIAS NEUTRAL").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        let err = parse_block("SORTED BY \"date\"").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_empty_block_rejected() {
        assert!(matches!(
            extract_conditions("recount ``"),
            Err(SearchError::Parse(_))
        ));
    }

    #[test]
    fn test_truncated_condition_rejected() {
        let err = parse_block("WRITTEN BEFORE").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_rejection_is_atomic() {
        // the leading valid condition must not leak out of a bad block
        let result = extract_conditions("`HAVING BIAS CENTER WRITTEN BEFORE 13-45-2020`");
        assert!(matches!(result, Err(SearchError::Parse(_))));
    }

    // ============================================================
    // NARROWING TESTS
    // ============================================================

    #[test]
    fn test_written_by_intersects_author_set() {
        let condition = Condition::WrittenBy(vec!["John Smith".to_string()]);
        assert!(condition.matches(&doc()));

        let condition = Condition::WrittenBy(vec!["Someone Else".to_string()]);
        assert!(!condition.matches(&doc()));
    }

    #[test]
    fn test_date_bounds_are_strict() {
        let published = doc(); // published 2020-10-15 08:30

        assert!(Condition::WrittenBefore(date(2020, 10, 16)).matches(&published));
        assert!(!Condition::WrittenBefore(date(2020, 10, 15)).matches(&published));

        assert!(Condition::WrittenAfter(date(2020, 10, 15)).matches(&published));
        assert!(!Condition::WrittenAfter(date(2020, 10, 16)).matches(&published));
    }

    #[test]
    fn test_undated_document_fails_date_bounds() {
        let mut undated = doc();
        undated.publish_date = None;

        assert!(!Condition::WrittenBefore(date(2030, 1, 1)).matches(&undated));
        assert!(!Condition::WrittenAfter(date(2000, 1, 1)).matches(&undated));
    }

    #[test]
    fn test_published_by_exact_equality() {
        assert!(Condition::PublishedBy("Wire Service".to_string()).matches(&doc()));
        assert!(!Condition::PublishedBy("wire service".to_string()).matches(&doc()));
    }

    #[test]
    fn test_having_bias_exact_equality() {
        assert!(Condition::HavingBias(BiasRating::LeanLeft).matches(&doc()));
        assert!(!Condition::HavingBias(BiasRating::Left).matches(&doc()));
    }

    #[test]
    fn test_null_matches_everything() {
        assert!(Condition::Null.matches(&doc()));
    }

    #[test]
    fn test_conditions_and_compose() {
        let both = vec![
            Condition::PublishedBy("Wire Service".to_string()),
            Condition::HavingBias(BiasRating::LeanLeft),
        ];
        assert!(matches_all(&both, &doc()));

        let conflicting = vec![
            Condition::PublishedBy("Wire Service".to_string()),
            Condition::HavingBias(BiasRating::Right),
        ];
        assert!(!matches_all(&conflicting, &doc()));
    }
}
