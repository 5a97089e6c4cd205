//! Deterministic auto-fix engine.
//!
//! Applies exactly one transform per eligible issue, selected by issue
//! code. Eligibility is gated by registry metadata (`blocking &&
//! auto_fixable` on an error-severity issue), never by severity alone.
//! The engine never invents cell values and never resolves issues that
//! need judgment; re-running it on its own output is a no-op.

use feedfix_profiles::{ConfigError, FieldKind, FormatRuleSet};
use feedfix_registry::get_meta;
use feedfix_types::fix::FixResult;
use feedfix_types::issue::{Issue, Severity};
use feedfix_types::table::CanonicalTable;
use std::collections::BTreeMap;
use tracing::debug;

/// Apply every provable fix for `issues` to a copy of `table`.
pub fn auto_fix(
    table: &CanonicalTable,
    issues: &[Issue],
    ruleset: &FormatRuleSet,
) -> Result<FixResult, ConfigError> {
    ruleset.verify()?;

    let mut fixed = table.clone();
    let mut log: Vec<String> = Vec::new();
    let mut by_code: BTreeMap<String, u64> = BTreeMap::new();
    let mut fixable_found = 0u64;

    for issue in issues {
        if issue.severity != Severity::Error {
            continue;
        }
        let Some(meta) = get_meta(ruleset.format_id, &issue.code) else {
            continue;
        };
        if !(meta.blocking && meta.auto_fixable) {
            continue;
        }
        fixable_found += 1;

        let applied = match issue.code_suffix() {
            "missing_required_column" => fix_missing_column(&mut fixed, issue),
            _ => fix_cell(&mut fixed, issue, ruleset),
        };

        if let Some(entry) = applied {
            if !log.contains(&entry) {
                log.push(entry);
            }
            *by_code.entry(issue.code.clone()).or_default() += 1;
        }
    }

    debug!(
        format = ruleset.format_id,
        found = fixable_found,
        applied = log.len(),
        "auto-fix pass complete"
    );

    Ok(FixResult {
        table: fixed,
        fixes_applied: log,
        fixed_by_code: by_code,
        fixable_found,
    })
}

/// Append the missing header and backfill blanks. Cell *values* are never
/// invented; the blanks it exposes stay for manual resolution.
fn fix_missing_column(table: &mut CanonicalTable, issue: &Issue) -> Option<String> {
    let column = issue.column.as_deref()?;
    if table.ensure_header(column) {
        Some(format!("Added missing column {column:?}"))
    } else {
        None
    }
}

/// One deterministic cell rewrite, selected by issue code.
fn fix_cell(table: &mut CanonicalTable, issue: &Issue, ruleset: &FormatRuleSet) -> Option<String> {
    let row = issue.row?;
    let column = issue.column.as_deref()?;
    let field = ruleset.field(column)?;
    let value = table.cell(row, column).to_string();

    let replacement = match (issue.code_suffix(), &field.kind) {
        (
            "invalid_boolean",
            FieldKind::Boolean {
                canonical_true,
                canonical_false,
                truthy,
                falsy,
            },
        ) => normalize_boolean(&value, canonical_true, canonical_false, truthy, falsy),
        ("invalid_price", FieldKind::Money) => clean_money(&value),
        (_, FieldKind::Enum { allowed, synonyms }) => normalize_enum(&value, allowed, synonyms),
        _ => None,
    }?;

    if replacement == value {
        return None;
    }
    table.set_cell(row, column, replacement.clone());
    Some(format!(
        "Row {}: normalized {} → {}",
        row + 1,
        column,
        replacement
    ))
}

fn normalize_boolean(
    value: &str,
    canonical_true: &str,
    canonical_false: &str,
    truthy: &[&str],
    falsy: &[&str],
) -> Option<String> {
    let key = value.trim().to_lowercase();
    if key == canonical_true.to_lowercase() || truthy.iter().any(|t| *t == key) {
        return Some(canonical_true.to_string());
    }
    if key == canonical_false.to_lowercase() || falsy.iter().any(|f| *f == key) {
        return Some(canonical_false.to_string());
    }
    None
}

fn normalize_enum(value: &str, allowed: &[&str], synonyms: &[(&str, &str)]) -> Option<String> {
    let key = value.trim().to_lowercase();
    if let Some(token) = allowed.iter().find(|a| a.to_lowercase() == key) {
        return Some(token.to_string());
    }
    synonyms
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| to.to_string())
}

/// Strip currency symbols, separators and all whitespace; keep the result
/// only if it parses as a finite number. Otherwise the cell stays
/// untouched and the issue stays unresolved.
fn clean_money(value: &str) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥') && *c != ',' && !c.is_whitespace())
        .collect();

    let parses = cleaned
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false);
    if parses { Some(cleaned) } else { None }
}
