use crate::accumulator::IssueAccumulator;
use crate::context::RuleContext;
use crate::rules::Rule;
use feedfix_profiles::{ConfigError, GroupingSpec};
use feedfix_types::issue::{Issue, Severity};
use std::collections::BTreeMap;

/// Cross-row variant-group checks.
///
/// Media-only rows never participate: they neither count toward group
/// size nor trigger option/identifier checks.
pub(crate) struct VariantGroups;

impl Rule for VariantGroups {
    fn check(&self, cx: &RuleContext<'_>, out: &mut IssueAccumulator) -> Result<(), ConfigError> {
        let Some(grouping) = &cx.ruleset.grouping else {
            return Ok(());
        };
        if !cx.table.has_header(grouping.key_column) {
            // The missing header is already a file-level issue.
            return Ok(());
        }

        let groups = partition(cx, grouping);

        for (key, rows) in &groups {
            check_option_fill_order(cx, grouping, rows, out);
            check_option_names(cx, grouping, key, rows, out);

            if rows.len() < 2 {
                continue;
            }

            if !looks_like_variants(cx, grouping, rows) {
                flag_duplicate_key(cx, grouping, key, rows, out);
                continue;
            }

            check_option_tuples(cx, grouping, key, rows, out);
            check_shared_fields(cx, grouping, key, rows, out);
            check_group_identifiers(cx, grouping, key, rows, out);
        }

        Ok(())
    }
}

/// Standard rows by trimmed grouping key, blank keys excluded.
fn partition<'a>(
    cx: &'a RuleContext<'_>,
    grouping: &GroupingSpec,
) -> BTreeMap<&'a str, Vec<usize>> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for row in cx.standard_rows() {
        let key = cx.table.cell(row, grouping.key_column).trim();
        if key.is_empty() {
            continue;
        }
        groups.entry(key).or_default().push(row);
    }
    groups
}

/// A multi-row group is variant-like when any member carries an option
/// value or the members have at least two distinct identifiers.
fn looks_like_variants(cx: &RuleContext<'_>, grouping: &GroupingSpec, rows: &[usize]) -> bool {
    let has_option_values = rows.iter().any(|&row| {
        grouping
            .option_value_columns
            .iter()
            .any(|col| !cx.table.is_blank(row, col))
    });
    if has_option_values {
        return true;
    }

    if let Some(id_col) = grouping.identifier_column {
        let mut identifiers = std::collections::BTreeSet::new();
        for &row in rows {
            let id = cx.table.cell(row, id_col).trim();
            if !id.is_empty() {
                identifiers.insert(id);
            }
        }
        return identifiers.len() >= 2;
    }

    false
}

fn flag_duplicate_key(
    cx: &RuleContext<'_>,
    grouping: &GroupingSpec,
    key: &str,
    rows: &[usize],
    out: &mut IssueAccumulator,
) {
    for &row in rows {
        out.push(Issue {
            severity: Severity::Error,
            code: cx.ruleset.code("duplicate_grouping_key"),
            row: Some(row),
            column: Some(grouping.key_column.to_string()),
            message: format!(
                "{} rows share {} {:?} but have no option values or distinct identifiers",
                rows.len(),
                grouping.key_column,
                key
            ),
            suggestion: Some(format!(
                "Give each row a distinct {} or merge the duplicates",
                grouping.key_column
            )),
        });
    }
}

/// Option values must be filled left to right: a later option column set
/// while an earlier one is blank breaks the hierarchy.
fn check_option_fill_order(
    cx: &RuleContext<'_>,
    grouping: &GroupingSpec,
    rows: &[usize],
    out: &mut IssueAccumulator,
) {
    let columns: Vec<&str> = grouping
        .option_value_columns
        .iter()
        .copied()
        .filter(|col| cx.table.has_header(col))
        .collect();

    for &row in rows {
        for (i, col) in columns.iter().enumerate() {
            if cx.table.is_blank(row, col) {
                continue;
            }
            let first_gap = columns[..i].iter().find(|c| cx.table.is_blank(row, c));
            if let Some(gap) = first_gap {
                out.push(Issue {
                    severity: Severity::Error,
                    code: cx.ruleset.code("option_order_gap"),
                    row: Some(row),
                    column: Some(col.to_string()),
                    message: format!("{:?} is set while {:?} is blank", col, gap),
                    suggestion: Some(format!("Fill {gap:?} or move the value there")),
                });
            }
        }
    }
}

/// An option value column in use needs its name column set somewhere in
/// the group (marketplaces read the names from the product's first row).
fn check_option_names(
    cx: &RuleContext<'_>,
    grouping: &GroupingSpec,
    key: &str,
    rows: &[usize],
    out: &mut IssueAccumulator,
) {
    for (value_col, name_col) in grouping
        .option_value_columns
        .iter()
        .zip(grouping.option_name_columns)
    {
        if !cx.table.has_header(value_col) || !cx.table.has_header(name_col) {
            continue;
        }
        let value_used = rows.iter().any(|&row| !cx.table.is_blank(row, value_col));
        let name_set = rows.iter().any(|&row| !cx.table.is_blank(row, name_col));
        if value_used && !name_set {
            out.push(Issue {
                severity: Severity::Error,
                code: cx.ruleset.code("missing_option_name"),
                row: Some(rows[0]),
                column: Some(name_col.to_string()),
                message: format!("{:?} is used but {:?} is never set for {:?}", value_col, name_col, key),
                suggestion: Some(format!("Set {name_col:?} on the first row of the product")),
            });
        }
    }
}

/// Within a variant group the option-value tuple must be unique,
/// case-insensitive and trimmed.
fn check_option_tuples(
    cx: &RuleContext<'_>,
    grouping: &GroupingSpec,
    key: &str,
    rows: &[usize],
    out: &mut IssueAccumulator,
) {
    if grouping.option_value_columns.is_empty() {
        return;
    }

    let mut by_tuple: BTreeMap<Vec<String>, Vec<usize>> = BTreeMap::new();
    for &row in rows {
        let tuple: Vec<String> = grouping
            .option_value_columns
            .iter()
            .map(|col| cx.table.cell(row, col).trim().to_lowercase())
            .collect();
        by_tuple.entry(tuple).or_default().push(row);
    }

    let column = grouping.option_value_columns[0];
    for (tuple, tuple_rows) in by_tuple {
        if tuple_rows.len() < 2 {
            continue;
        }
        let shown: Vec<&str> = tuple
            .iter()
            .map(|v| if v.is_empty() { "(blank)" } else { v.as_str() })
            .collect();
        for row in tuple_rows {
            out.push(Issue {
                severity: Severity::Error,
                code: cx.ruleset.code("options_not_unique"),
                row: Some(row),
                column: Some(column.to_string()),
                message: format!(
                    "Option values [{}] are not unique within {:?}",
                    shown.join(" / "),
                    key
                ),
                suggestion: Some("Give each variant a distinct option combination".to_string()),
            });
        }
    }
}

/// Shared descriptive fields should match the group's first non-blank
/// occurrence. Divergence is advisory, not blocking.
fn check_shared_fields(
    cx: &RuleContext<'_>,
    grouping: &GroupingSpec,
    key: &str,
    rows: &[usize],
    out: &mut IssueAccumulator,
) {
    for col in grouping.shared_columns {
        if !cx.table.has_header(col) {
            continue;
        }
        let first = rows
            .iter()
            .map(|&row| cx.table.cell(row, col).trim())
            .find(|v| !v.is_empty());
        let Some(first) = first else {
            continue;
        };

        for &row in rows {
            let value = cx.table.cell(row, col).trim();
            if value.is_empty() || value == first {
                continue;
            }
            out.push(Issue {
                severity: Severity::Warning,
                code: cx.ruleset.code("inconsistent_shared_field"),
                row: Some(row),
                column: Some(col.to_string()),
                message: format!(
                    "{} {:?} differs from {:?} used elsewhere in {:?}",
                    col, value, first, key
                ),
                suggestion: Some(format!("Align {col:?} across the product's rows")),
            });
        }
    }
}

/// Identifier reuse inside one group is an error; reuse across products is
/// the cross-table rule's business.
fn check_group_identifiers(
    cx: &RuleContext<'_>,
    grouping: &GroupingSpec,
    key: &str,
    rows: &[usize],
    out: &mut IssueAccumulator,
) {
    let Some(id_col) = grouping.identifier_column else {
        return;
    };
    // When the identifier is the grouping key itself, every member shares
    // it by definition; the duplicate-key check covers that case.
    if id_col == grouping.key_column || !cx.table.has_header(id_col) {
        return;
    }

    let mut by_id: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for &row in rows {
        let id = cx.table.cell(row, id_col).trim();
        if !id.is_empty() {
            by_id.entry(id).or_default().push(row);
        }
    }

    for (id, id_rows) in by_id {
        if id_rows.len() < 2 {
            continue;
        }
        for row in id_rows {
            out.push(Issue {
                severity: Severity::Error,
                code: cx.ruleset.code("duplicate_sku_in_group"),
                row: Some(row),
                column: Some(id_col.to_string()),
                message: format!("{} {:?} is used by more than one variant of {:?}", id_col, id, key),
                suggestion: Some(format!("Give each variant a unique {id_col}")),
            });
        }
    }
}
