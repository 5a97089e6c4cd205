use serde::{Deserialize, Serialize};

/// Issue severity. Ordered so that `Error` ranks highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

/// One validation finding.
///
/// `row == None` means file-level (e.g. a missing header). Within one
/// validation pass the `(severity, code, row, column)` tuple is unique;
/// duplicates are collapsed by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,

    /// `"<format_id>/<name>"`, e.g. `"shopify/invalid_handle"`.
    pub code: String,

    /// 0-based data row index. Absent for file-level issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    /// The code suffix after the format id, e.g. `"invalid_handle"`.
    pub fn code_suffix(&self) -> &str {
        self.code
            .split_once('/')
            .map(|(_, suffix)| suffix)
            .unwrap_or(&self.code)
    }

    /// Collapse key for the uniqueness invariant.
    pub fn dedup_key(&self) -> (Severity, &str, Option<usize>, Option<&str>) {
        (
            self.severity,
            self.code.as_str(),
            self.row,
            self.column.as_deref(),
        )
    }

    pub fn is_file_level(&self) -> bool {
        self.row.is_none()
    }
}
