use crate::meta::IssueCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weighted readiness score for one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationBreakdown {
    /// Overall 0–100 score after category weighting.
    pub score: u8,

    /// Per-category 0–100 display scores. Categories outside the
    /// profile's weighted set still appear here but contribute nothing
    /// to `score`.
    pub categories: BTreeMap<IssueCategory, u8>,

    pub counts: IssueCounts,

    /// True iff no blocking errors remain. Independent of `score`.
    pub ready: bool,

    pub label: ReadinessLabel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub errors: u64,
    pub warnings: u64,
    pub infos: u64,
    pub blocking_errors: u64,
}

/// Qualitative band over `(score, ready)`. Only ready tables can receive
/// the top two bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLabel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl ReadinessLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLabel::Excellent => "excellent",
            ReadinessLabel::Good => "good",
            ReadinessLabel::Fair => "fair",
            ReadinessLabel::Poor => "poor",
            ReadinessLabel::Critical => "critical",
        }
    }
}
