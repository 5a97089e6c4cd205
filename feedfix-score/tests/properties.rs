//! Property tests for the scoring contract.

use feedfix_profiles::ruleset;
use feedfix_registry::get_meta;
use feedfix_score::score;
use feedfix_types::issue::{Issue, Severity};
use feedfix_types::meta::IssueCategory;
use proptest::prelude::*;

fn arb_issue() -> impl Strategy<Value = Issue> {
    let codes = prop::sample::select(vec![
        "shopify/missing_required_column",
        "shopify/missing_required_value",
        "shopify/invalid_boolean",
        "shopify/invalid_price",
        "shopify/invalid_quantity",
        "shopify/invalid_handle",
        "shopify/invalid_image_url",
        "shopify/options_not_unique",
        "shopify/duplicate_grouping_key",
        "shopify/duplicate_sku_in_group",
        "shopify/duplicate_sku_across_products",
        "shopify/inconsistent_shared_field",
        "shopify/seo_title_too_long",
        "shopify/missing_recommended_column",
    ]);
    let severities = prop::sample::select(vec![
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ]);
    (codes, severities, 0usize..50).prop_map(|(code, severity, row)| Issue {
        severity,
        code: code.to_string(),
        row: Some(row),
        column: None,
        message: String::new(),
        suggestion: None,
    })
}

fn arb_issues() -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(arb_issue(), 0..40)
}

proptest! {
    #[test]
    fn readiness_is_exactly_no_blocking_errors(issues in arb_issues()) {
        let rs = ruleset("shopify").expect("shopify");
        let breakdown = score(&issues, rs);

        let expected_blocking = issues
            .iter()
            .filter(|i| {
                i.severity == Severity::Error
                    && get_meta("shopify", &i.code).is_some_and(|m| m.blocking)
            })
            .count() as u64;

        prop_assert_eq!(breakdown.counts.blocking_errors, expected_blocking);
        prop_assert_eq!(breakdown.ready, expected_blocking == 0);
    }

    #[test]
    fn adding_an_issue_never_raises_its_category_score(
        issues in arb_issues(),
        extra in arb_issue(),
    ) {
        let rs = ruleset("shopify").expect("shopify");
        let category = get_meta("shopify", &extra.code)
            .map(|m| m.category)
            .unwrap_or(IssueCategory::Structure);

        let before = score(&issues, rs);
        let mut with_extra = issues;
        with_extra.push(extra);
        let after = score(&with_extra, rs);

        prop_assert!(after.categories[&category] <= before.categories[&category]);
        prop_assert!(after.score <= before.score);
    }

    #[test]
    fn scoring_is_deterministic(issues in arb_issues()) {
        let rs = ruleset("shopify").expect("shopify");
        prop_assert_eq!(score(&issues, rs), score(&issues, rs));
    }

    #[test]
    fn scores_stay_in_range(issues in arb_issues()) {
        let rs = ruleset("shopify").expect("shopify");
        let breakdown = score(&issues, rs);
        prop_assert!(breakdown.score <= 100);
        for (_, s) in breakdown.categories {
            prop_assert!(s <= 100);
        }
    }
}
