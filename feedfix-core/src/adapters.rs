//! Default CSV/filesystem-backed port implementations.
//!
//! The reader contract: column order preserved, blank cells as empty
//! strings, and malformed rows reported in `parse_failures` rather than
//! dropped silently.

use crate::ports::{LoadedTable, TableSink, TableSource, WritePort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use feedfix_types::table::{ParseFailure, RawTable, Row};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Reads the input table from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    pub path: Utf8PathBuf,
}

impl CsvTableSource {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl TableSource for CsvTableSource {
    fn load(&self) -> anyhow::Result<LoadedTable> {
        let bytes = fs_err::read(self.path.as_std_path())
            .with_context(|| format!("read {}", self.path))?;
        let sha256 = sha256_hex(&bytes);

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes.as_slice());

        let headers: Vec<String> = reader
            .headers()
            .context("read CSV headers")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows: Vec<Row> = Vec::new();
        let mut parse_failures: Vec<ParseFailure> = Vec::new();

        for record in reader.records() {
            match record {
                Ok(record) => {
                    let line = record
                        .position()
                        .map(|p| p.line())
                        .unwrap_or(0);
                    if record.len() != headers.len() {
                        parse_failures.push(ParseFailure {
                            line,
                            message: format!(
                                "expected {} cells, found {}",
                                headers.len(),
                                record.len()
                            ),
                        });
                    }
                    // Short rows backfill with empty strings; surplus cells
                    // have no header to live under and are covered by the
                    // parse failure above.
                    let row: Row = headers
                        .iter()
                        .enumerate()
                        .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
                        .collect();
                    rows.push(row);
                }
                Err(err) => {
                    let line = err.position().map(|p| p.line()).unwrap_or(0);
                    parse_failures.push(ParseFailure {
                        line,
                        message: err.to_string(),
                    });
                }
            }
        }

        debug!(
            path = self.path.as_str(),
            rows = rows.len(),
            failures = parse_failures.len(),
            "loaded CSV"
        );

        Ok(LoadedTable {
            table: RawTable {
                headers,
                rows,
                parse_failures,
            },
            path: Some(self.path.clone()),
            sha256: Some(sha256),
        })
    }
}

/// Writes a table as RFC4180-ish CSV with a fixed column order.
#[derive(Debug, Clone)]
pub struct CsvTableSink {
    pub path: Utf8PathBuf,
}

impl CsvTableSink {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl TableSink for CsvTableSink {
    fn write(&self, headers: &[String], rows: &[Row]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs_err::create_dir_all(parent.as_std_path())
                .with_context(|| format!("create parent dir for {}", self.path))?;
        }

        let file = fs_err::File::create(self.path.as_std_path())
            .with_context(|| format!("create {}", self.path))?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(headers).context("write CSV headers")?;
        for row in rows {
            let record: Vec<&str> = headers
                .iter()
                .map(|h| row.get(h).map(String::as_str).unwrap_or(""))
                .collect();
            writer.write_record(&record).context("write CSV row")?;
        }
        writer.flush().context("flush CSV writer")?;
        Ok(())
    }
}

/// In-memory table source for embedding and testing.
#[derive(Debug, Clone)]
pub struct InMemoryTableSource {
    table: RawTable,
}

impl InMemoryTableSource {
    pub fn new(table: RawTable) -> Self {
        Self { table }
    }
}

impl TableSource for InMemoryTableSource {
    fn load(&self) -> anyhow::Result<LoadedTable> {
        Ok(LoadedTable {
            table: self.table.clone(),
            path: None,
            sha256: None,
        })
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        std::fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(path).with_context(|| format!("create_dir_all {}", path))
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
