//! Rendering helpers (markdown) for human-readable artifacts.

use feedfix_types::issue::Severity;
use feedfix_types::report::FeedReport;

pub fn render_report_md(report: &FeedReport) -> String {
    let mut out = String::new();
    out.push_str("# feedfix report\n\n");
    out.push_str(&format!("- Format: `{}`\n", report.format));
    out.push_str(&format!(
        "- Score: {}/100 ({})\n",
        report.breakdown.score,
        report.breakdown.label.as_str()
    ));
    out.push_str(&format!(
        "- Ready: {}\n",
        if report.breakdown.ready { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "- Issues: {} errors, {} warnings, {} infos ({} blocking)\n",
        report.breakdown.counts.errors,
        report.breakdown.counts.warnings,
        report.breakdown.counts.infos,
        report.breakdown.counts.blocking_errors
    ));
    out.push_str(&format!(
        "- Input: {} rows, {} columns\n",
        report.input.rows, report.input.headers
    ));
    if !report.input.parse_failures.is_empty() {
        out.push_str(&format!(
            "- Unparseable rows: {}\n",
            report.input.parse_failures.len()
        ));
    }
    out.push('\n');

    out.push_str("## Category scores\n\n");
    for (category, score) in &report.breakdown.categories {
        out.push_str(&format!("- {}: {}\n", category.as_str(), score));
    }
    out.push('\n');

    if !report.diagnostics.duplicate_input_headers.is_empty()
        || !report.diagnostics.alias_collisions.is_empty()
    {
        out.push_str("## Header diagnostics\n\n");
        for header in &report.diagnostics.duplicate_input_headers {
            out.push_str(&format!("- Duplicate input header: `{}`\n", header));
        }
        for collision in &report.diagnostics.alias_collisions {
            out.push_str(&format!(
                "- Ambiguous mapping for `{}`: {}\n",
                collision.canonical,
                collision.sources.join(", ")
            ));
        }
        out.push('\n');
    }

    out.push_str("## Issues\n\n");
    if report.issues.is_empty() {
        out.push_str("_No issues found._\n");
        return out;
    }

    for (i, issue) in report.issues.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", i + 1, issue.code));
        out.push_str(&format!("- Severity: `{}`\n", severity_label(issue.severity)));
        match issue.row {
            Some(row) => out.push_str(&format!("- Row: {}\n", row + 1)),
            None => out.push_str("- Scope: file\n"),
        }
        if let Some(column) = &issue.column {
            out.push_str(&format!("- Column: `{}`\n", column));
        }
        out.push_str(&format!("\n{}\n", issue.message));
        if let Some(suggestion) = &issue.suggestion {
            out.push_str(&format!("\n> {}\n", suggestion));
        }
        out.push('\n');
    }

    out
}

pub fn render_fixlog_md(report: &FeedReport) -> String {
    let mut out = String::new();
    out.push_str("# feedfix fix log\n\n");

    let Some(fixes) = &report.fixes else {
        out.push_str("_No fix pass was run._\n");
        return out;
    };

    out.push_str(&format!(
        "- Fixable issues found: {}\n- Fixes applied: {}\n\n",
        fixes.fixable_found,
        fixes.fixes_applied.len()
    ));

    if let Some(after) = &fixes.breakdown_after {
        out.push_str(&format!(
            "- Score after fixes: {}/100 ({})\n",
            after.score,
            after.label.as_str()
        ));
        out.push_str(&format!(
            "- Ready after fixes: {}\n\n",
            if after.ready { "yes" } else { "no" }
        ));
    }

    out.push_str("## Changes\n\n");
    if fixes.fixes_applied.is_empty() {
        out.push_str("_No changes applied._\n");
        return out;
    }
    for change in &fixes.fixes_applied {
        out.push_str(&format!("- {}\n", change));
    }

    if !fixes.fixed_by_code.is_empty() {
        out.push_str("\n## By code\n\n");
        for (code, count) in &fixes.fixed_by_code {
            out.push_str(&format!("- `{}`: {}\n", code, count));
        }
    }

    out
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}
