use crate::accumulator::IssueAccumulator;
use crate::context::RuleContext;
use crate::rules::Rule;
use feedfix_profiles::ConfigError;
use feedfix_types::issue::{Issue, Severity};

/// Row-level check: required columns that exist must be filled.
///
/// Media-only rows are exempt: an image continuation row legitimately
/// leaves title and price blank.
pub(crate) struct RequiredValues;

impl Rule for RequiredValues {
    fn check(&self, cx: &RuleContext<'_>, out: &mut IssueAccumulator) -> Result<(), ConfigError> {
        for column in &cx.ruleset.required {
            if !cx.table.has_header(column) {
                // RequiredColumns already reported the missing header; a
                // blank value in a column that does not exist is not a
                // separate finding.
                continue;
            }
            for row in cx.standard_rows() {
                if !cx.table.is_blank(row, column) {
                    continue;
                }
                out.push(Issue {
                    severity: Severity::Error,
                    code: cx.ruleset.code("missing_required_value"),
                    row: Some(row),
                    column: Some(column.to_string()),
                    message: format!("Required value {column:?} is blank"),
                    suggestion: None,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::validate;
    use feedfix_profiles::ruleset;
    use feedfix_types::table::{CanonicalTable, Row};

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blank_required_value_is_flagged_per_row() {
        let rs = ruleset("shopify").expect("shopify");
        let headers = vec![
            "Handle".to_string(),
            "Title".to_string(),
            "Variant Price".to_string(),
        ];
        let table = CanonicalTable::new(
            headers,
            vec![
                row(&[("Handle", "tee"), ("Title", "Tee"), ("Variant Price", "9.99")]),
                row(&[("Handle", "mug"), ("Title", ""), ("Variant Price", "4.00")]),
            ],
        );

        let issues = validate(&table, rs).expect("validate");
        let blanks: Vec<_> = issues
            .iter()
            .filter(|i| i.code == "shopify/missing_required_value")
            .collect();
        assert_eq!(blanks.len(), 1);
        assert_eq!(blanks[0].row, Some(1));
        assert_eq!(blanks[0].column.as_deref(), Some("Title"));
    }

    #[test]
    fn media_only_rows_are_exempt() {
        // Scenario D: handle + image URL only, everything else blank.
        let rs = ruleset("shopify").expect("shopify");
        let headers: Vec<String> = rs.canonical_headers.iter().map(|h| h.to_string()).collect();
        let table = CanonicalTable::new(
            headers,
            vec![
                row(&[
                    ("Handle", "tee"),
                    ("Title", "Tee"),
                    ("Variant Price", "9.99"),
                ]),
                row(&[
                    ("Handle", "tee"),
                    ("Image Src", "https://cdn.example.com/tee-2.jpg"),
                ]),
            ],
        );

        let issues = validate(&table, rs).expect("validate");
        assert!(
            !issues
                .iter()
                .any(|i| i.code == "shopify/missing_required_value" && i.row == Some(1)),
            "media-only row must not be flagged for blank required values"
        );
    }
}
