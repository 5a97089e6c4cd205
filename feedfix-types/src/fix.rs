use crate::table::CanonicalTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output of one auto-fix pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixResult {
    /// The corrected table (headers + rows).
    pub table: CanonicalTable,

    /// Deduplicated human-readable changelog, e.g.
    /// `"Row 12: normalized Published → FALSE"`.
    #[serde(default)]
    pub fixes_applied: Vec<String>,

    /// Applied-fix counts per issue code.
    #[serde(default)]
    pub fixed_by_code: BTreeMap<String, u64>,

    /// How many blocking + auto-fixable issues the pass saw. Informational
    /// only; an issue can be seen but left unresolved (e.g. a money value
    /// that still fails to parse after cleanup).
    #[serde(default)]
    pub fixable_found: u64,
}

impl FixResult {
    /// Total number of applied fixes.
    pub fn applied_count(&self) -> u64 {
        self.fixed_by_code.values().sum()
    }

    /// True when the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.fixes_applied.is_empty()
    }
}
