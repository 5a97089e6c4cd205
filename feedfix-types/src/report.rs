use crate::breakdown::ValidationBreakdown;
use crate::issue::Issue;
use crate::table::{CanonDiagnostics, ParseFailure};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `feedfix.report.v1` artifact written after a check or fix run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedReport {
    /// Schema identifier, `"feedfix.report.v1"`.
    pub schema: String,

    pub tool: ToolInfo,

    #[serde(default)]
    pub run: RunInfo,

    pub input: InputInfo,

    /// Target format id, e.g. `"shopify"`.
    pub format: String,

    #[serde(default)]
    pub diagnostics: CanonDiagnostics,

    #[serde(default)]
    pub issues: Vec<Issue>,

    pub breakdown: ValidationBreakdown,

    /// Present only for fix runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixes: Option<FixSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 of the raw input bytes, when the source can provide them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,

    pub rows: u64,
    pub headers: u64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parse_failures: Vec<ParseFailure>,
}

/// What a fix run changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixSummary {
    #[serde(default)]
    pub fixes_applied: Vec<String>,

    #[serde(default)]
    pub fixed_by_code: BTreeMap<String, u64>,

    #[serde(default)]
    pub fixable_found: u64,

    /// Breakdown recomputed on the fixed table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown_after: Option<ValidationBreakdown>,
}
