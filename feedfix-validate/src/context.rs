use feedfix_profiles::FormatRuleSet;
use feedfix_types::table::CanonicalTable;

/// How a row participates in validation.
///
/// Computed exactly once per pass and shared by every rule, so a row can
/// never be treated as media-only by one rule and as a variant by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// A normal product/variant row.
    Standard,
    /// Carries only the grouping key plus a media reference; exempt from
    /// variant, price, and required-value rules.
    MediaOnly,
}

/// Shared, read-only state for one validation pass.
pub struct RuleContext<'a> {
    pub table: &'a CanonicalTable,
    pub ruleset: &'a FormatRuleSet,
    classes: Vec<RowClass>,
}

impl<'a> RuleContext<'a> {
    pub fn new(table: &'a CanonicalTable, ruleset: &'a FormatRuleSet) -> Self {
        let classes = classify_rows(table, ruleset);
        Self {
            table,
            ruleset,
            classes,
        }
    }

    pub fn class(&self, row: usize) -> RowClass {
        self.classes.get(row).copied().unwrap_or(RowClass::Standard)
    }

    pub fn is_media_only(&self, row: usize) -> bool {
        self.class(row) == RowClass::MediaOnly
    }

    /// Indices of standard (non-media) rows, in row order.
    pub fn standard_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.table.rows.len()).filter(|&i| !self.is_media_only(i))
    }
}

/// A row is media-only when the grouping key and the media column are both
/// set and every variant-signal field (option values, identifier, price,
/// shared descriptive fields) is blank.
fn classify_rows(table: &CanonicalTable, ruleset: &FormatRuleSet) -> Vec<RowClass> {
    let Some(grouping) = &ruleset.grouping else {
        return vec![RowClass::Standard; table.rows.len()];
    };
    let Some(media) = grouping.media_column else {
        return vec![RowClass::Standard; table.rows.len()];
    };

    let mut signals: Vec<&str> = Vec::new();
    signals.extend(grouping.option_value_columns);
    signals.extend(grouping.shared_columns);
    if let Some(id) = grouping.identifier_column
        && id != grouping.key_column
    {
        signals.push(id);
    }
    if let Some(price) = grouping.price_column {
        signals.push(price);
    }

    (0..table.rows.len())
        .map(|row| {
            let keyed = !table.is_blank(row, grouping.key_column);
            let has_media = !table.is_blank(row, media);
            let signals_blank = signals.iter().all(|col| table.is_blank(row, col));
            if keyed && has_media && signals_blank {
                RowClass::MediaOnly
            } else {
                RowClass::Standard
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedfix_profiles::ruleset;
    use feedfix_types::table::Row;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn shopify_table(rows: Vec<Row>) -> CanonicalTable {
        let headers = ruleset("shopify")
            .expect("shopify")
            .canonical_headers
            .iter()
            .map(|h| h.to_string())
            .collect();
        CanonicalTable::new(headers, rows)
    }

    #[test]
    fn image_continuation_row_is_media_only() {
        let rs = ruleset("shopify").expect("shopify");
        let table = shopify_table(vec![
            row(&[
                ("Handle", "tee"),
                ("Title", "Tee"),
                ("Variant Price", "9.99"),
                ("Option1 Value", "Red"),
            ]),
            row(&[
                ("Handle", "tee"),
                ("Image Src", "https://cdn.example.com/tee-2.jpg"),
                ("Image Position", "2"),
            ]),
        ]);

        let cx = RuleContext::new(&table, rs);
        assert_eq!(cx.class(0), RowClass::Standard);
        assert_eq!(cx.class(1), RowClass::MediaOnly);
        assert_eq!(cx.standard_rows().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn row_with_price_is_not_media_only() {
        let rs = ruleset("shopify").expect("shopify");
        let table = shopify_table(vec![row(&[
            ("Handle", "tee"),
            ("Image Src", "https://cdn.example.com/tee.jpg"),
            ("Variant Price", "9.99"),
        ])]);

        let cx = RuleContext::new(&table, rs);
        assert_eq!(cx.class(0), RowClass::Standard);
    }

    #[test]
    fn row_without_media_is_not_media_only() {
        let rs = ruleset("shopify").expect("shopify");
        let table = shopify_table(vec![row(&[("Handle", "tee")])]);
        let cx = RuleContext::new(&table, rs);
        assert_eq!(cx.class(0), RowClass::Standard);
    }
}
