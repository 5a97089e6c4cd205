//! Core check and fix pipelines, I/O-agnostic: the table comes in through
//! a [`TableSource`], artifacts go out through a [`WritePort`] /
//! [`TableSink`].
//!
//! Issue assembly order: the aggregated parse-failure issue first, then
//! canonicalizer header diagnostics, then the validator's (already
//! sorted) list. Duplicate `(severity, code, row, column)` tuples keep
//! their first occurrence.

use crate::ports::{LoadedTable, TableSink, TableSource, WritePort};
use crate::settings::{CheckSettings, FixSettings};
use anyhow::Context;
use chrono::Utc;
use feedfix_canon::canonicalize;
use feedfix_fix::auto_fix;
use feedfix_profiles::{ConfigError, FormatRuleSet};
use feedfix_render::{render_fixlog_md, render_report_md};
use feedfix_score::score;
use feedfix_types::breakdown::ValidationBreakdown;
use feedfix_types::issue::{Issue, Severity};
use feedfix_types::report::{FeedReport, FixSummary, InputInfo, RunInfo, ToolInfo};
use feedfix_types::table::{CanonDiagnostics, CanonicalTable};
use feedfix_validate::validate;
use tracing::{debug, error};

/// Error type for pipeline results. Exit code 2 = not ready, 1 = tool
/// error; the not-ready signal itself travels on the outcome, not here.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// A programming-contract violation (unknown profile, bad rule set).
    /// Fatal for the caller; never shown as a data issue.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Outcome of `run_check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub table: CanonicalTable,
    pub issues: Vec<Issue>,
    pub breakdown: ValidationBreakdown,
    pub report: FeedReport,
    /// True when blocking issues remain; the CLI maps this to exit 2.
    pub not_ready: bool,
}

/// Run the check pipeline: canonicalize → validate → score.
pub fn run_check(
    settings: &CheckSettings,
    source: &dyn TableSource,
    tool: ToolInfo,
) -> Result<CheckOutcome, ToolError> {
    let started = Utc::now();
    let ruleset = lookup_ruleset(&settings.format_id)?;
    let loaded = source.load().context("load input table")?;

    let (table, diagnostics) = canonicalize(&loaded.table, ruleset).inspect_err(log_config)?;

    let mut issues = file_issues(&loaded, &diagnostics, ruleset);
    issues.extend(validate(&table, ruleset).inspect_err(log_config)?);
    dedup_preserving_order(&mut issues);

    let breakdown = score(&issues, ruleset);
    let not_ready = !breakdown.ready;

    let report = build_report(
        &loaded,
        ruleset,
        diagnostics,
        issues.clone(),
        breakdown.clone(),
        None,
        tool,
        started,
    );

    debug!(
        format = ruleset.format_id,
        score = breakdown.score,
        ready = breakdown.ready,
        "check complete"
    );

    Ok(CheckOutcome {
        table,
        issues,
        breakdown,
        report,
        not_ready,
    })
}

/// Outcome of `run_fix`.
pub struct FixOutcome {
    /// The corrected table.
    pub table: CanonicalTable,
    /// Issues remaining *after* the fix pass.
    pub remaining: Vec<Issue>,
    pub fixes_applied: Vec<String>,
    pub breakdown_before: ValidationBreakdown,
    pub breakdown_after: ValidationBreakdown,
    pub report: FeedReport,
    /// True when blocking issues remain after fixing.
    pub not_ready: bool,
}

/// Run the fix pipeline: check, auto-fix, then re-validate and re-score
/// the fixed table.
pub fn run_fix(
    settings: &FixSettings,
    source: &dyn TableSource,
    tool: ToolInfo,
) -> Result<FixOutcome, ToolError> {
    let started = Utc::now();
    let ruleset = lookup_ruleset(&settings.format_id)?;
    let loaded = source.load().context("load input table")?;

    let (table, diagnostics) = canonicalize(&loaded.table, ruleset).inspect_err(log_config)?;

    let mut issues = file_issues(&loaded, &diagnostics, ruleset);
    issues.extend(validate(&table, ruleset).inspect_err(log_config)?);
    dedup_preserving_order(&mut issues);
    let breakdown_before = score(&issues, ruleset);

    let fix = auto_fix(&table, &issues, ruleset).inspect_err(log_config)?;

    // Re-validate the fixed table from scratch; file-level non-validator
    // issues (parse failures, header diagnostics) are not fixable and
    // carry over.
    let mut remaining = file_issues(&loaded, &diagnostics, ruleset);
    remaining.extend(validate(&fix.table, ruleset).inspect_err(log_config)?);
    dedup_preserving_order(&mut remaining);
    let breakdown_after = score(&remaining, ruleset);
    let not_ready = !breakdown_after.ready;

    let fixes = FixSummary {
        fixes_applied: fix.fixes_applied.clone(),
        fixed_by_code: fix.fixed_by_code.clone(),
        fixable_found: fix.fixable_found,
        breakdown_after: Some(breakdown_after.clone()),
    };
    let report = build_report(
        &loaded,
        ruleset,
        diagnostics,
        remaining.clone(),
        breakdown_before.clone(),
        Some(fixes),
        tool,
        started,
    );

    debug!(
        format = ruleset.format_id,
        applied = fix.fixes_applied.len(),
        ready = breakdown_after.ready,
        "fix complete"
    );

    Ok(FixOutcome {
        table: fix.table,
        remaining,
        fixes_applied: fix.fixes_applied,
        breakdown_before,
        breakdown_after,
        report,
        not_ready,
    })
}

/// Write check artifacts (`report.json`, `report.md`).
pub fn write_check_artifacts(
    outcome: &CheckOutcome,
    out_dir: &camino::Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let json = serde_json::to_string_pretty(&outcome.report).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), json.as_bytes())?;

    let md = render_report_md(&outcome.report);
    writer.write_file(&out_dir.join("report.md"), md.as_bytes())?;

    Ok(())
}

/// Write fix artifacts (`report.json`, `report.md`, `fixlog.md`) and the
/// corrected table through `sink`.
pub fn write_fix_artifacts(
    outcome: &FixOutcome,
    out_dir: &camino::Utf8Path,
    writer: &dyn WritePort,
    sink: &dyn TableSink,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let json = serde_json::to_string_pretty(&outcome.report).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), json.as_bytes())?;

    let md = render_report_md(&outcome.report);
    writer.write_file(&out_dir.join("report.md"), md.as_bytes())?;

    let fixlog = render_fixlog_md(&outcome.report);
    writer.write_file(&out_dir.join("fixlog.md"), fixlog.as_bytes())?;

    sink.write(&outcome.table.fixed_headers, &outcome.table.rows)
        .context("write fixed table")?;

    Ok(())
}

fn lookup_ruleset(format_id: &str) -> Result<&'static FormatRuleSet, ToolError> {
    feedfix_profiles::ruleset(format_id).map_err(|e| {
        error!("{e}");
        ToolError::Config(e)
    })
}

fn log_config(e: &ConfigError) {
    error!("{e}");
}

/// File-level issues that precede validation: the aggregated parse
/// failure first, then header diagnostics.
fn file_issues(
    loaded: &LoadedTable,
    diagnostics: &CanonDiagnostics,
    ruleset: &FormatRuleSet,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    let failures = &loaded.table.parse_failures;
    if !failures.is_empty() {
        let lines: Vec<String> = failures.iter().map(|f| f.line.to_string()).collect();
        issues.push(Issue {
            severity: Severity::Error,
            code: ruleset.code("parse_error"),
            row: None,
            column: None,
            message: format!(
                "{} row(s) could not be parsed cleanly (line {})",
                failures.len(),
                lines.join(", ")
            ),
            suggestion: Some("Fix the quoting or cell count on the reported lines".to_string()),
        });
    }

    for header in &diagnostics.duplicate_input_headers {
        issues.push(Issue {
            severity: Severity::Warning,
            code: ruleset.code("duplicate_header"),
            row: None,
            column: Some(header.clone()),
            message: format!("Input header {header:?} appears more than once"),
            suggestion: Some("Remove or rename the duplicate column in the source".to_string()),
        });
    }

    for collision in &diagnostics.alias_collisions {
        issues.push(Issue {
            severity: Severity::Warning,
            code: ruleset.code("ambiguous_header"),
            row: None,
            column: Some(collision.canonical.clone()),
            message: format!(
                "Columns {} all map onto {:?}; {:?} was used",
                collision
                    .sources
                    .iter()
                    .map(|s| format!("{s:?}"))
                    .collect::<Vec<_>>()
                    .join(", "),
                collision.canonical,
                collision.sources.first().map(String::as_str).unwrap_or("")
            ),
            suggestion: Some("Keep a single source column for this field".to_string()),
        });
    }

    issues
}

fn dedup_preserving_order(issues: &mut Vec<Issue>) {
    let mut seen = std::collections::BTreeSet::new();
    issues.retain(|issue| {
        let key = (
            issue.severity,
            issue.code.clone(),
            issue.row,
            issue.column.clone(),
        );
        seen.insert(key)
    });
}

#[allow(clippy::too_many_arguments)]
fn build_report(
    loaded: &LoadedTable,
    ruleset: &FormatRuleSet,
    diagnostics: CanonDiagnostics,
    issues: Vec<Issue>,
    breakdown: ValidationBreakdown,
    fixes: Option<FixSummary>,
    tool: ToolInfo,
    started: chrono::DateTime<Utc>,
) -> FeedReport {
    let ended = Utc::now();
    FeedReport {
        schema: feedfix_types::schema::FEEDFIX_REPORT_V1.to_string(),
        tool,
        run: RunInfo {
            started_at: Some(started.to_rfc3339()),
            ended_at: Some(ended.to_rfc3339()),
            duration_ms: Some((ended - started).num_milliseconds().max(0) as u64),
        },
        input: InputInfo {
            path: loaded.path.as_ref().map(|p| p.to_string()),
            sha256: loaded.sha256.clone(),
            rows: loaded.table.rows.len() as u64,
            headers: loaded.table.headers.len() as u64,
            parse_failures: loaded.table.parse_failures.clone(),
        },
        format: ruleset.format_id.to_string(),
        diagnostics,
        issues,
        breakdown,
        fixes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTableSource;
    use camino::{Utf8Path, Utf8PathBuf};
    use feedfix_types::table::{ParseFailure, RawTable, Row};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemWritePort {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl WritePort for MemWritePort {
        fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
            self.files
                .lock()
                .expect("lock files")
                .insert(path.as_str().to_string(), contents.to_vec());
            Ok(())
        }

        fn create_dir_all(&self, _path: &Utf8Path) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemTableSink {
        written: Mutex<Option<(Vec<String>, Vec<Row>)>>,
    }

    impl TableSink for MemTableSink {
        fn write(&self, headers: &[String], rows: &[Row]) -> anyhow::Result<()> {
            *self.written.lock().expect("lock") = Some((headers.to_vec(), rows.to_vec()));
            Ok(())
        }
    }

    fn tool() -> ToolInfo {
        ToolInfo {
            name: "feedfix".into(),
            version: Some("0.0.0-test".into()),
        }
    }

    fn raw(headers: &[&str], rows: &[&[(&str, &str)]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|pairs| {
                    pairs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect()
                })
                .collect(),
            parse_failures: vec![],
        }
    }

    fn check_settings() -> CheckSettings {
        CheckSettings {
            input: Utf8PathBuf::from("mem.csv"),
            format_id: "shopify".to_string(),
            out_dir: Utf8PathBuf::from("out"),
        }
    }

    #[test]
    fn run_check_produces_report_and_not_ready_signal() {
        let source = InMemoryTableSource::new(raw(
            &["Handle", "Title"],
            &[&[("Handle", "my shirt"), ("Title", "Shirt")]],
        ));

        let outcome = run_check(&check_settings(), &source, tool()).expect("run_check");
        assert!(outcome.not_ready, "invalid handle blocks readiness");
        assert!(outcome
            .issues
            .iter()
            .any(|i| i.code == "shopify/invalid_handle"));
        assert_eq!(outcome.report.format, "shopify");
        assert_eq!(outcome.report.input.rows, 1);
        assert!(outcome.report.run.started_at.is_some());
    }

    #[test]
    fn unknown_format_is_a_config_error() {
        let source = InMemoryTableSource::new(raw(&["Title"], &[]));
        let settings = CheckSettings {
            format_id: "etsy".to_string(),
            ..check_settings()
        };
        let err = run_check(&settings, &source, tool()).expect_err("must fail");
        assert!(matches!(err, ToolError::Config(ConfigError::UnknownFormat(_))));
    }

    #[test]
    fn parse_failures_sort_first_in_the_combined_list() {
        let mut table = raw(
            &["Handle", "Title"],
            &[&[("Handle", "my shirt"), ("Title", "Shirt")]],
        );
        table.parse_failures.push(ParseFailure {
            line: 3,
            message: "expected 2 cells, found 5".to_string(),
        });
        let source = InMemoryTableSource::new(table);

        let outcome = run_check(&check_settings(), &source, tool()).expect("run_check");
        assert_eq!(outcome.issues[0].code, "shopify/parse_error");
        assert!(outcome.issues[0].message.contains("line 3"));
    }

    #[test]
    fn run_fix_applies_fixes_and_rescores() {
        let source = InMemoryTableSource::new(raw(
            &["Handle", "Title", "Variant Price", "Published"],
            &[&[
                ("Handle", "tee"),
                ("Title", "Tee"),
                ("Variant Price", "$1,299.00"),
                ("Published", "yes"),
            ]],
        ));
        let settings = FixSettings {
            input: Utf8PathBuf::from("mem.csv"),
            format_id: "shopify".to_string(),
            out_dir: Utf8PathBuf::from("out"),
            output: None,
        };

        let outcome = run_fix(&settings, &source, tool()).expect("run_fix");
        assert_eq!(outcome.table.cell(0, "Variant Price"), "1299.00");
        assert_eq!(outcome.table.cell(0, "Published"), "TRUE");
        assert!(!outcome.not_ready, "all blocking issues were fixable");
        assert!(outcome.breakdown_after.score >= outcome.breakdown_before.score);
        assert!(!outcome
            .remaining
            .iter()
            .any(|i| i.code == "shopify/invalid_price"));

        let fixes = outcome.report.fixes.as_ref().expect("fix summary");
        assert_eq!(fixes.fixable_found, 2);
        assert!(fixes.breakdown_after.is_some());
    }

    #[test]
    fn write_check_artifacts_writes_expected_files() {
        let source = InMemoryTableSource::new(raw(
            &["Handle", "Title"],
            &[&[("Handle", "tee"), ("Title", "Tee")]],
        ));
        let outcome = run_check(&check_settings(), &source, tool()).expect("run_check");

        let writer = MemWritePort::default();
        write_check_artifacts(&outcome, Utf8Path::new("out"), &writer).expect("write artifacts");

        let files = writer.files.lock().expect("files");
        assert!(files.contains_key("out/report.json"));
        assert!(files.contains_key("out/report.md"));

        let json: serde_json::Value =
            serde_json::from_slice(files.get("out/report.json").expect("json")).expect("parse");
        assert_eq!(json["schema"], "feedfix.report.v1");
    }

    #[test]
    fn write_fix_artifacts_includes_fixlog_and_table() {
        let source = InMemoryTableSource::new(raw(
            &["Handle", "Title", "Variant Price", "Published"],
            &[&[
                ("Handle", "tee"),
                ("Title", "Tee"),
                ("Variant Price", "9.99"),
                ("Published", "yes"),
            ]],
        ));
        let settings = FixSettings {
            input: Utf8PathBuf::from("mem.csv"),
            format_id: "shopify".to_string(),
            out_dir: Utf8PathBuf::from("out"),
            output: None,
        };
        let outcome = run_fix(&settings, &source, tool()).expect("run_fix");

        let writer = MemWritePort::default();
        let sink = MemTableSink::default();
        write_fix_artifacts(&outcome, Utf8Path::new("out"), &writer, &sink)
            .expect("write artifacts");

        let files = writer.files.lock().expect("files");
        assert!(files.contains_key("out/report.json"));
        assert!(files.contains_key("out/report.md"));
        assert!(files.contains_key("out/fixlog.md"));

        let written = sink.written.lock().expect("sink");
        let (headers, rows) = written.as_ref().expect("table written");
        assert!(headers.contains(&"Published".to_string()));
        assert_eq!(rows[0]["Published"], "TRUE");
    }

    #[test]
    fn duplicate_headers_surface_as_warnings() {
        let source = InMemoryTableSource::new(raw(
            &["Title", "title ", "Handle", "Variant Price"],
            &[&[
                ("Title", "Tee"),
                ("title ", "Tee again"),
                ("Handle", "tee"),
                ("Variant Price", "9.99"),
            ]],
        ));
        let outcome = run_check(&check_settings(), &source, tool()).expect("run_check");
        assert!(outcome
            .issues
            .iter()
            .any(|i| i.code == "shopify/duplicate_header"));
        assert!(outcome
            .issues
            .iter()
            .any(|i| i.code == "shopify/ambiguous_header"));
    }
}
