use crate::accumulator::IssueAccumulator;
use crate::context::RuleContext;
use crate::rules::Rule;
use feedfix_profiles::ConfigError;
use feedfix_types::issue::{Issue, Severity};
use std::collections::BTreeMap;

/// Cross-table identifier reuse.
///
/// Reuse across *different* products is a warning, not an error:
/// re-listings and shared barcodes make it sometimes legitimate. Reuse
/// within one group is the variant rule's blocking error, not ours.
pub(crate) struct IdentifierUniqueness;

impl Rule for IdentifierUniqueness {
    fn check(&self, cx: &RuleContext<'_>, out: &mut IssueAccumulator) -> Result<(), ConfigError> {
        let Some(grouping) = &cx.ruleset.grouping else {
            return Ok(());
        };
        let Some(id_col) = grouping.identifier_column else {
            return Ok(());
        };
        if !cx.table.has_header(id_col) {
            return Ok(());
        }

        // identifier → (rows carrying it, distinct group keys).
        let mut occurrences: BTreeMap<&str, (Vec<usize>, std::collections::BTreeSet<&str>)> =
            BTreeMap::new();
        for row in cx.standard_rows() {
            let id = cx.table.cell(row, id_col).trim();
            if id.is_empty() {
                continue;
            }
            let key = cx.table.cell(row, grouping.key_column).trim();
            let entry = occurrences.entry(id).or_default();
            entry.0.push(row);
            entry.1.insert(key);
        }

        for (id, (rows, keys)) in occurrences {
            if keys.len() < 2 {
                continue;
            }
            for row in rows {
                out.push(Issue {
                    severity: Severity::Warning,
                    code: cx.ruleset.code("duplicate_sku_across_products"),
                    row: Some(row),
                    column: Some(id_col.to_string()),
                    message: format!("{} {:?} is reused by another product", id_col, id),
                    suggestion: Some(format!(
                        "Use a distinct {id_col} per product unless the reuse is intentional"
                    )),
                });
            }
        }

        Ok(())
    }
}
