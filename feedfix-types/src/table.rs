use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One table row: column name → cell value.
///
/// Column *order* lives in the owning table's header list, so a sorted map
/// keeps row access deterministic without tracking order twice.
pub type Row = BTreeMap<String, String>;

/// A table exactly as the reader produced it, before canonicalization.
///
/// The reader contract: column order preserved, blank cells are empty
/// strings, and rows that failed to tokenize are reported in
/// `parse_failures` instead of being dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,

    #[serde(default)]
    pub rows: Vec<Row>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parse_failures: Vec<ParseFailure>,
}

/// A row the reader could not tokenize. Line numbers are 1-based and refer
/// to the source file, not the row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub line: u64,
    pub message: String,
}

/// A table mapped onto a canonical marketplace schema.
///
/// Invariants:
/// - `fixed_headers` lists canonical headers first, then any unrecognized
///   input headers appended verbatim, order-stable.
/// - Every row has a value (possibly `""`) for every header.
/// - No input header is ever silently discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTable {
    pub fixed_headers: Vec<String>,

    #[serde(default)]
    pub rows: Vec<Row>,
}

impl CanonicalTable {
    pub fn new(fixed_headers: Vec<String>, rows: Vec<Row>) -> Self {
        let mut table = Self {
            fixed_headers,
            rows,
        };
        table.backfill();
        table
    }

    /// Cell value at `(row, header)`, or `""` when the header is unknown.
    pub fn cell(&self, row: usize, header: &str) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(header))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True when the cell is empty or whitespace-only.
    pub fn is_blank(&self, row: usize, header: &str) -> bool {
        self.cell(row, header).trim().is_empty()
    }

    pub fn has_header(&self, header: &str) -> bool {
        self.fixed_headers.iter().any(|h| h == header)
    }

    /// Overwrite a cell. No-op for out-of-range rows.
    pub fn set_cell(&mut self, row: usize, header: &str, value: String) {
        if let Some(r) = self.rows.get_mut(row) {
            r.insert(header.to_string(), value);
        }
    }

    /// Append a header (if absent) and backfill every row with `""`.
    /// Returns true when the header was actually added.
    pub fn ensure_header(&mut self, header: &str) -> bool {
        if self.has_header(header) {
            self.backfill();
            return false;
        }
        self.fixed_headers.push(header.to_string());
        self.backfill();
        true
    }

    /// Restore the every-row-has-every-header invariant.
    fn backfill(&mut self) {
        for row in &mut self.rows {
            for header in &self.fixed_headers {
                row.entry(header.clone()).or_default();
            }
        }
    }
}

/// What the canonicalizer noticed about the input headers.
///
/// These are advisory: none of them stop the pipeline, but duplicate
/// input headers mean earlier values were overwritten during parsing and
/// alias collisions mean two source columns both claimed one canonical
/// field (first in alias-priority order wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonDiagnostics {
    /// Normalized input header names that appeared more than once.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_input_headers: Vec<String>,

    /// Two distinct input headers mapped to the same canonical field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias_collisions: Vec<AliasCollision>,

    /// Input headers preserved verbatim because no alias matched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched_headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasCollision {
    pub canonical: String,
    /// The colliding input headers, in input order. The first one is the
    /// one whose values were kept.
    pub sources: Vec<String>,
}
