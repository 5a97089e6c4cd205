//! Schema canonicalization: map an arbitrary input table onto a
//! marketplace's canonical header set.
//!
//! Guarantees:
//! - Deterministic: alias priority decides, never input column order.
//! - Zero data loss: input headers matching no alias are preserved
//!   verbatim and appended after the canonical headers.
//! - Side-effect-free on the raw input.

use feedfix_profiles::{ConfigError, FormatRuleSet};
use feedfix_types::table::{AliasCollision, CanonDiagnostics, CanonicalTable, RawTable, Row};
use std::collections::BTreeMap;
use tracing::debug;

/// Map `raw` onto the canonical schema of `ruleset`.
///
/// Diagnostics report duplicate input headers (risk of overwritten values
/// at parse time) and alias collisions (two source columns claiming one
/// canonical field). A duplicate *output* header is an internal invariant
/// violation and comes back as a [`ConfigError`].
pub fn canonicalize(
    raw: &RawTable,
    ruleset: &FormatRuleSet,
) -> Result<(CanonicalTable, CanonDiagnostics), ConfigError> {
    let mut diagnostics = CanonDiagnostics::default();

    // Normalized match key per input header, in input order.
    let input: Vec<(String, String)> = raw
        .headers
        .iter()
        .map(|h| (h.clone(), match_key(h)))
        .collect();

    // Duplicate input headers, by normalized name.
    let mut key_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, key) in &input {
        *key_counts.entry(key.as_str()).or_default() += 1;
    }
    for (key, count) in key_counts {
        if count > 1 {
            diagnostics.duplicate_input_headers.push(key.to_string());
        }
    }

    // Resolve each canonical header to a source column, alias priority
    // first, input order second. Only the winning source is consumed;
    // collision losers are carried through verbatim below so their values
    // survive the mapping.
    let mut resolved: Vec<(&'static str, String)> = Vec::new();
    let mut claimed: Vec<bool> = vec![false; input.len()];
    let mut collision_losers: Vec<bool> = vec![false; input.len()];

    for canonical in &ruleset.canonical_headers {
        let aliases = alias_keys(ruleset, canonical);

        let mut matches: Vec<usize> = Vec::new();
        let mut winner: Option<usize> = None;
        for alias in &aliases {
            for (idx, (_, key)) in input.iter().enumerate() {
                if key == alias && !matches.contains(&idx) {
                    matches.push(idx);
                    if winner.is_none() {
                        winner = Some(idx);
                    }
                }
            }
        }

        if matches.len() > 1 {
            matches.sort_unstable();
            diagnostics.alias_collisions.push(AliasCollision {
                canonical: canonical.to_string(),
                sources: matches.iter().map(|i| input[*i].0.clone()).collect(),
            });
        }

        if let Some(idx) = winner {
            claimed[idx] = true;
            for m in matches {
                if m != idx {
                    collision_losers[m] = true;
                }
            }
            resolved.push((*canonical, input[idx].0.clone()));
        }
    }

    // Unclaimed input headers keep their original spelling and ride along
    // after the canonical block. Collision losers are appended too (data
    // preservation) but are already reported via `alias_collisions`.
    let mut fixed_headers: Vec<String> = resolved.iter().map(|(c, _)| c.to_string()).collect();
    for (idx, (original, _)) in input.iter().enumerate() {
        if claimed[idx] {
            continue;
        }
        if !fixed_headers.contains(original) {
            fixed_headers.push(original.clone());
        }
        if !collision_losers[idx] {
            diagnostics.unmatched_headers.push(original.clone());
        }
    }

    // Invariant: the output header list has no duplicates.
    let mut seen = std::collections::BTreeSet::new();
    for header in &fixed_headers {
        if !seen.insert(header.as_str()) {
            return Err(ConfigError::DuplicateOutputHeader {
                format_id: ruleset.format_id.to_string(),
                header: header.clone(),
            });
        }
    }

    let rows = raw
        .rows
        .iter()
        .map(|row| remap_row(row, &resolved, &input, &claimed))
        .collect();

    debug!(
        format = ruleset.format_id,
        resolved = resolved.len(),
        unmatched = diagnostics.unmatched_headers.len(),
        "canonicalized headers"
    );

    Ok((CanonicalTable::new(fixed_headers, rows), diagnostics))
}

fn remap_row(
    row: &Row,
    resolved: &[(&'static str, String)],
    input: &[(String, String)],
    claimed: &[bool],
) -> Row {
    let mut out = Row::new();
    for (canonical, source) in resolved {
        let value = row.get(source).cloned().unwrap_or_default();
        out.insert(canonical.to_string(), value);
    }
    for (idx, (original, _)) in input.iter().enumerate() {
        if claimed[idx] {
            continue;
        }
        let value = row.get(original).cloned().unwrap_or_default();
        out.entry(original.clone()).or_insert(value);
    }
    out
}

/// Alias keys for one canonical header, priority order: the canonical
/// spelling itself, then the profile's accepted spellings.
fn alias_keys(ruleset: &FormatRuleSet, canonical: &str) -> Vec<String> {
    let mut keys = vec![match_key(canonical)];
    if let Some(group) = ruleset.aliases.iter().find(|g| g.canonical == canonical) {
        for accepted in group.accepted {
            let key = match_key(accepted);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Trim, collapse internal whitespace runs, lowercase.
fn match_key(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedfix_profiles::ruleset;
    use pretty_assertions::assert_eq;

    fn raw(headers: &[&str], rows: &[&[(&str, &str)]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|pairs| {
                    pairs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect()
                })
                .collect(),
            parse_failures: vec![],
        }
    }

    #[test]
    fn match_key_collapses_whitespace_and_case() {
        assert_eq!(match_key("  Product   Title "), "product title");
        assert_eq!(match_key("Handle"), "handle");
    }

    #[test]
    fn canonical_spelling_resolves_directly() {
        let rs = ruleset("shopify").expect("shopify");
        let (table, diags) =
            canonicalize(&raw(&["Handle", "Title"], &[&[("Handle", "tee"), ("Title", "Tee")]]), rs)
                .expect("canonicalize");

        assert_eq!(table.fixed_headers, vec!["Handle", "Title"]);
        assert_eq!(table.cell(0, "Handle"), "tee");
        assert!(diags.unmatched_headers.is_empty());
    }

    #[test]
    fn alias_resolves_with_whitespace_and_case_noise() {
        let rs = ruleset("shopify").expect("shopify");
        let (table, _) = canonicalize(
            &raw(&["  product   NAME "], &[&[("  product   NAME ", "Shirt")]]),
            rs,
        )
        .expect("canonicalize");

        assert_eq!(table.fixed_headers, vec!["Title"]);
        assert_eq!(table.cell(0, "Title"), "Shirt");
    }

    #[test]
    fn alias_priority_beats_input_order() {
        // "price" is a later alias of Variant Price than the canonical
        // spelling, so "Variant Price" wins no matter where it sits.
        let rs = ruleset("shopify").expect("shopify");
        let (table, diags) = canonicalize(
            &raw(
                &["price", "Variant Price"],
                &[&[("price", "9.99"), ("Variant Price", "19.99")]],
            ),
            rs,
        )
        .expect("canonicalize");

        assert_eq!(table.cell(0, "Variant Price"), "19.99");
        assert_eq!(diags.alias_collisions.len(), 1);
        assert_eq!(diags.alias_collisions[0].canonical, "Variant Price");
        assert_eq!(
            diags.alias_collisions[0].sources,
            vec!["price", "Variant Price"]
        );

        // The losing column's values survive under its original name.
        assert!(table.has_header("price"));
        assert_eq!(table.cell(0, "price"), "9.99");
        assert!(!diags.unmatched_headers.contains(&"price".to_string()));
    }

    #[test]
    fn unmatched_headers_are_preserved_verbatim() {
        let rs = ruleset("shopify").expect("shopify");
        let (table, diags) = canonicalize(
            &raw(
                &["Handle", "Internal Notes"],
                &[&[("Handle", "tee"), ("Internal Notes", "keep me")]],
            ),
            rs,
        )
        .expect("canonicalize");

        assert_eq!(table.fixed_headers, vec!["Handle", "Internal Notes"]);
        assert_eq!(table.cell(0, "Internal Notes"), "keep me");
        assert_eq!(diags.unmatched_headers, vec!["Internal Notes"]);
    }

    #[test]
    fn duplicate_input_headers_are_reported() {
        let rs = ruleset("shopify").expect("shopify");
        let (_, diags) = canonicalize(&raw(&["Title", "title "], &[]), rs).expect("canonicalize");
        assert_eq!(diags.duplicate_input_headers, vec!["title"]);
    }

    #[test]
    fn unresolved_canonical_headers_are_absent() {
        // Scenario: "Title" missing entirely. The canonical table must not
        // invent the column; the validator reports it and the fixer adds it.
        let rs = ruleset("shopify").expect("shopify");
        let (table, _) = canonicalize(&raw(&["Handle"], &[&[("Handle", "tee")]]), rs)
            .expect("canonicalize");
        assert!(!table.has_header("Title"));
    }

    #[test]
    fn rows_are_backfilled_for_every_header() {
        let rs = ruleset("shopify").expect("shopify");
        let (table, _) = canonicalize(
            &raw(&["Handle", "Title"], &[&[("Handle", "tee")]]),
            rs,
        )
        .expect("canonicalize");
        assert_eq!(table.cell(0, "Title"), "");
    }

    #[test]
    fn repeated_canonicalization_is_deterministic() {
        let rs = ruleset("ebay").expect("ebay");
        let input = raw(
            &["qty", "Title", "price", "Weird Column"],
            &[&[
                ("qty", "3"),
                ("Title", "Vintage radio"),
                ("price", "10.00"),
                ("Weird Column", "x"),
            ]],
        );

        let (a, da) = canonicalize(&input, rs).expect("first");
        let (b, db) = canonicalize(&input, rs).expect("second");
        assert_eq!(a, b);
        assert_eq!(da, db);
    }
}
