//! Row & cross-row validation: turn a canonical table into an ordered,
//! deduplicated issue list.
//!
//! `validate` is a pure function of its inputs: the table is never
//! mutated, and two passes over identical input produce byte-identical
//! output. All normalization happens in the fix engine; rules that need a
//! normalized view (case-insensitive option tuples, trimmed comparisons)
//! compute it locally.

mod accumulator;
mod context;
mod rules;

pub use accumulator::IssueAccumulator;
pub use context::{RowClass, RuleContext};

use feedfix_profiles::{ConfigError, FormatRuleSet, RuleKind};
use feedfix_types::issue::Issue;
use feedfix_types::table::CanonicalTable;
use tracing::debug;

/// Run the profile's ordered rule pipeline over `table`.
///
/// Bad data never errors here — it becomes an [`Issue`]. The `Err` arm is
/// reserved for programming-contract violations in the rule set itself.
pub fn validate(
    table: &CanonicalTable,
    ruleset: &FormatRuleSet,
) -> Result<Vec<Issue>, ConfigError> {
    ruleset.verify()?;

    let cx = RuleContext::new(table, ruleset);
    let mut acc = IssueAccumulator::default();
    for rule in rules::rules_for(ruleset) {
        rule.check(&cx, &mut acc)?;
    }

    let issues = acc.finish();
    debug!(
        format = ruleset.format_id,
        rows = table.rows.len(),
        issues = issues.len(),
        "validation pass complete"
    );
    Ok(issues)
}

/// Every issue code the pipeline can emit for this profile, sorted.
///
/// Used by the registry coverage tests: each of these must resolve to
/// metadata.
pub fn emittable_codes(ruleset: &FormatRuleSet) -> Vec<String> {
    let mut suffixes: Vec<&str> = Vec::new();
    for rule in &ruleset.rules {
        match rule {
            RuleKind::RequiredColumns => suffixes.push("missing_required_column"),
            RuleKind::RecommendedColumns => suffixes.push("missing_recommended_column"),
            RuleKind::RequiredValues => suffixes.push("missing_required_value"),
            RuleKind::FieldFormats => {
                for field in &ruleset.fields {
                    suffixes.push(field.code);
                }
            }
            RuleKind::VariantGroups => {
                if let Some(g) = &ruleset.grouping {
                    suffixes.push("duplicate_grouping_key");
                    if !g.option_value_columns.is_empty() {
                        suffixes.push("options_not_unique");
                        suffixes.push("option_order_gap");
                        suffixes.push("missing_option_name");
                    }
                    if !g.shared_columns.is_empty() {
                        suffixes.push("inconsistent_shared_field");
                    }
                    if g.identifier_column
                        .is_some_and(|id| id != g.key_column)
                    {
                        suffixes.push("duplicate_sku_in_group");
                    }
                }
            }
            RuleKind::IdentifierUniqueness => {
                if ruleset
                    .grouping
                    .as_ref()
                    .and_then(|g| g.identifier_column)
                    .is_some()
                {
                    suffixes.push("duplicate_sku_across_products");
                }
            }
        }
    }

    let mut codes: Vec<String> = suffixes.into_iter().map(|s| ruleset.code(s)).collect();
    codes.sort();
    codes.dedup();
    codes
}
