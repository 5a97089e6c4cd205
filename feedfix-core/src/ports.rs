//! Port traits abstracting all I/O away from the pipeline.

use camino::{Utf8Path, Utf8PathBuf};
use feedfix_types::table::{RawTable, Row};

/// A loaded input table plus provenance for the report envelope.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: RawTable,
    pub path: Option<Utf8PathBuf>,
    /// SHA-256 of the raw input bytes, when the source has them.
    pub sha256: Option<String>,
}

/// Source of the input table.
pub trait TableSource {
    fn load(&self) -> anyhow::Result<LoadedTable>;
}

/// Destination for a fixed table.
pub trait TableSink {
    fn write(&self, headers: &[String], rows: &[Row]) -> anyhow::Result<()>;
}

/// File-system write operations for artifacts.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
