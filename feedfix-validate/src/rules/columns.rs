use crate::accumulator::IssueAccumulator;
use crate::context::RuleContext;
use crate::rules::Rule;
use feedfix_profiles::ConfigError;
use feedfix_types::issue::{Issue, Severity};

/// File-level check: every required column must exist in the table.
pub(crate) struct RequiredColumns;

impl Rule for RequiredColumns {
    fn check(&self, cx: &RuleContext<'_>, out: &mut IssueAccumulator) -> Result<(), ConfigError> {
        for column in &cx.ruleset.required {
            if cx.table.has_header(column) {
                continue;
            }
            out.push(Issue {
                severity: Severity::Error,
                code: cx.ruleset.code("missing_required_column"),
                row: None,
                column: Some(column.to_string()),
                message: format!("Required column {column:?} is missing"),
                suggestion: Some(format!("Add a {column:?} column")),
            });
        }
        Ok(())
    }
}

/// File-level check: recommended columns are advisory only.
pub(crate) struct RecommendedColumns;

impl Rule for RecommendedColumns {
    fn check(&self, cx: &RuleContext<'_>, out: &mut IssueAccumulator) -> Result<(), ConfigError> {
        for column in &cx.ruleset.recommended {
            if cx.table.has_header(column) {
                continue;
            }
            out.push(Issue {
                severity: Severity::Info,
                code: cx.ruleset.code("missing_recommended_column"),
                row: None,
                column: Some(column.to_string()),
                message: format!("Recommended column {column:?} is missing"),
                suggestion: None,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::validate;
    use feedfix_profiles::ruleset;
    use feedfix_types::issue::Severity;
    use feedfix_types::table::CanonicalTable;

    #[test]
    fn missing_required_column_is_file_level_error() {
        let rs = ruleset("shopify").expect("shopify");
        let table = CanonicalTable::new(vec!["Handle".to_string()], vec![]);

        let issues = validate(&table, rs).expect("validate");
        let issue = issues
            .iter()
            .find(|i| i.code == "shopify/missing_required_column" && i.column.as_deref() == Some("Title"))
            .expect("missing Title issue");
        assert_eq!(issue.severity, Severity::Error);
        assert!(issue.row.is_none());
    }

    #[test]
    fn recommended_columns_are_info() {
        let rs = ruleset("ebay").expect("ebay");
        let headers = vec![
            "Action".to_string(),
            "Title".to_string(),
            "Quantity".to_string(),
            "Start Price".to_string(),
        ];
        let table = CanonicalTable::new(headers, vec![]);

        let issues = validate(&table, rs).expect("validate");
        assert!(issues
            .iter()
            .any(|i| i.code == "ebay/missing_recommended_column"
                && i.severity == Severity::Info
                && i.column.as_deref() == Some("Pic URL")));
    }
}
