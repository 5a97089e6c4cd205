//! Scoring & readiness: weighted 0–100 score plus the independent
//! `ready` signal.
//!
//! Per category the penalty is linear in issue counts with a logarithmic
//! tail: the linear term dominates for a handful of issues, while the log
//! term gives diminishing marginal penalty so one systemic, high-count
//! problem does not collapse the score to zero. Readiness is not a
//! function of the score at all — it is exactly "no blocking errors".

use feedfix_profiles::FormatRuleSet;
use feedfix_registry::get_meta;
use feedfix_types::breakdown::{IssueCounts, ReadinessLabel, ValidationBreakdown};
use feedfix_types::issue::{Issue, Severity};
use feedfix_types::meta::IssueCategory;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    errors: u64,
    warnings: u64,
    infos: u64,
    blocking_errors: u64,
}

/// Compute the weighted breakdown for one issue list.
pub fn score(issues: &[Issue], ruleset: &FormatRuleSet) -> ValidationBreakdown {
    let mut tallies: BTreeMap<IssueCategory, Tally> = BTreeMap::new();
    let mut counts = IssueCounts::default();

    for issue in issues {
        let meta = get_meta(ruleset.format_id, &issue.code);
        let category = meta
            .map(|m| m.category)
            .unwrap_or(IssueCategory::Structure);
        // Blocking is an error-severity concept: a "blocking" code carried
        // by a warning never blocks readiness.
        let blocking =
            issue.severity == Severity::Error && meta.map(|m| m.blocking).unwrap_or(false);

        let tally = tallies.entry(category).or_default();
        match issue.severity {
            Severity::Error => {
                tally.errors += 1;
                counts.errors += 1;
            }
            Severity::Warning => {
                tally.warnings += 1;
                counts.warnings += 1;
            }
            Severity::Info => {
                tally.infos += 1;
                counts.infos += 1;
            }
        }
        if blocking {
            tally.blocking_errors += 1;
            counts.blocking_errors += 1;
        }
    }

    // Every category gets a display score; unweighted ones just don't
    // feed the overall number.
    let mut categories = BTreeMap::new();
    let mut category_scores = BTreeMap::new();
    for category in IssueCategory::ALL {
        let tally = tallies.get(&category).copied().unwrap_or_default();
        let s = category_score(&tally);
        category_scores.insert(category, s);
        categories.insert(category, s.round() as u8);
    }

    let weight_total: f64 = ruleset.weights.iter().map(|(_, w)| w).sum();
    let overall = if weight_total > 0.0 {
        let weighted: f64 = ruleset
            .weights
            .iter()
            .map(|(category, weight)| {
                category_scores.get(category).copied().unwrap_or(100.0) * (weight / weight_total)
            })
            .sum();
        weighted.clamp(0.0, 100.0).round() as u8
    } else {
        100
    };

    let ready = counts.blocking_errors == 0;

    ValidationBreakdown {
        score: overall,
        categories,
        counts,
        ready,
        label: label_for(overall, ready),
    }
}

fn category_score(tally: &Tally) -> f64 {
    (100.0 - penalty(tally)).clamp(0.0, 100.0)
}

fn penalty(tally: &Tally) -> f64 {
    let e = tally.errors as f64;
    let w = tally.warnings as f64;
    let i = tally.infos as f64;
    let b = tally.blocking_errors as f64;

    10.0 * e + 4.0 * w + 1.0 * i
        + 6.0 * (1.0 + e).ln()
        + 2.5 * (1.0 + w).ln()
        + 1.25 * (1.0 + i).ln()
        + 12.0 * b
}

/// Banded label over `(score, ready)`. Only ready tables can reach the top
/// two bands: a single unresolved blocking issue caps a high-scoring table
/// at "fair".
fn label_for(score: u8, ready: bool) -> ReadinessLabel {
    if ready && score >= 90 {
        ReadinessLabel::Excellent
    } else if ready && score >= 70 {
        ReadinessLabel::Good
    } else if score >= 50 {
        ReadinessLabel::Fair
    } else if score >= 25 {
        ReadinessLabel::Poor
    } else {
        ReadinessLabel::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedfix_profiles::ruleset;
    use pretty_assertions::assert_eq;

    fn issue(code: &str, severity: Severity, row: Option<usize>) -> Issue {
        Issue {
            severity,
            code: code.to_string(),
            row,
            column: None,
            message: String::new(),
            suggestion: None,
        }
    }

    #[test]
    fn empty_issue_list_scores_100_and_ready() {
        let rs = ruleset("shopify").expect("shopify");
        let breakdown = score(&[], rs);
        assert_eq!(breakdown.score, 100);
        assert!(breakdown.ready);
        assert_eq!(breakdown.label, ReadinessLabel::Excellent);
        assert!(breakdown.categories.values().all(|&s| s == 100));
    }

    #[test]
    fn penalty_formula_matches_the_contract() {
        let tally = Tally {
            errors: 1,
            warnings: 0,
            infos: 0,
            blocking_errors: 1,
        };
        let expected = 10.0 + 6.0 * 2.0_f64.ln() + 12.0;
        assert!((penalty(&tally) - expected).abs() < 1e-9);
    }

    #[test]
    fn log_term_dampens_high_counts() {
        // 50 infos in one category: linear alone would be 50; with the log
        // term the category still keeps a nonzero score.
        let tally = Tally {
            infos: 40,
            ..Default::default()
        };
        let s = category_score(&tally);
        assert!(s > 0.0 && s < 100.0);
    }

    #[test]
    fn blocking_error_blocks_readiness_regardless_of_score() {
        let rs = ruleset("shopify").expect("shopify");
        let issues = vec![issue(
            "shopify/missing_required_column",
            Severity::Error,
            None,
        )];
        let breakdown = score(&issues, rs);
        assert!(!breakdown.ready);
        assert!(breakdown.score > 70, "one issue should not tank the score");
        // Not ready caps the label below the top two bands.
        assert_eq!(breakdown.label, ReadinessLabel::Fair);
    }

    #[test]
    fn warnings_never_block() {
        let rs = ruleset("shopify").expect("shopify");
        let issues = vec![
            issue("shopify/duplicate_sku_across_products", Severity::Warning, Some(0)),
            issue("shopify/inconsistent_shared_field", Severity::Warning, Some(1)),
        ];
        let breakdown = score(&issues, rs);
        assert!(breakdown.ready);
        assert_eq!(breakdown.counts.blocking_errors, 0);
    }

    #[test]
    fn unweighted_categories_do_not_move_the_overall() {
        // Shipping is unweighted for shopify: a weight-less category tanks
        // its own display score but not the overall number.
        let rs = ruleset("shopify").expect("shopify");
        assert!(!rs.weights.iter().any(|(c, _)| *c == IssueCategory::Shipping));

        let issues: Vec<Issue> = (0..8)
            .map(|row| issue("shopify/invalid_weight", Severity::Error, Some(row)))
            .collect();
        let breakdown = score(&issues, rs);

        assert!(breakdown.categories[&IssueCategory::Shipping] < 40);
        assert_eq!(breakdown.score, 100);
        assert!(!breakdown.ready, "invalid_weight is still blocking");
    }

    #[test]
    fn category_display_scores_reflect_their_issues() {
        let rs = ruleset("shopify").expect("shopify");
        let issues = vec![issue("shopify/invalid_price", Severity::Error, Some(0))];
        let breakdown = score(&issues, rs);

        assert!(breakdown.categories[&IssueCategory::Pricing] < 100);
        assert_eq!(breakdown.categories[&IssueCategory::Images], 100);
    }

    #[test]
    fn label_bands() {
        assert_eq!(label_for(95, true), ReadinessLabel::Excellent);
        assert_eq!(label_for(75, true), ReadinessLabel::Good);
        assert_eq!(label_for(95, false), ReadinessLabel::Fair);
        assert_eq!(label_for(60, true), ReadinessLabel::Fair);
        assert_eq!(label_for(30, false), ReadinessLabel::Poor);
        assert_eq!(label_for(10, true), ReadinessLabel::Critical);
    }
}
