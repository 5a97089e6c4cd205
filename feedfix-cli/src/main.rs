mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{load_or_default, resolve_format, resolve_out_dir};
use feedfix_core::adapters::{CsvTableSink, CsvTableSource, FsWritePort};
use feedfix_core::pipeline::{
    ToolError, run_check, run_fix, write_check_artifacts, write_fix_artifacts,
};
use feedfix_core::rulesets;
use feedfix_core::settings::{CheckSettings, FixSettings};
use feedfix_registry::{GENERIC_META, PROFILE_META, lookup};
use feedfix_types::report::ToolInfo;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "feedfix",
    version,
    about = "Deterministic cleaner and validator for marketplace product-feed exports."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a feed and score its import readiness.
    Check(CheckArgs),
    /// Apply deterministic fixes and write the corrected feed.
    Fix(FixArgs),
    /// Explain an issue code: category, flags, and remediation guidance.
    Explain(ExplainArgs),
    /// List all issue codes with their metadata.
    ListChecks(ListChecksArgs),
    /// List the built-in marketplace formats.
    Formats,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Input CSV file.
    input: Utf8PathBuf,

    /// Target format id (e.g. "shopify", "ebay").
    #[arg(long)]
    format: Option<String>,

    /// Output directory for report artifacts (default: feedfix-out).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Input CSV file.
    input: Utf8PathBuf,

    /// Target format id (e.g. "shopify", "ebay").
    #[arg(long)]
    format: Option<String>,

    /// Output directory for report artifacts (default: feedfix-out).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Where to write the corrected CSV (default: <out_dir>/fixed.csv).
    #[arg(long)]
    output: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Issue code to explain, e.g. "invalid_handle" or "ebay/title_too_long".
    code: String,
}

#[derive(Debug, Parser)]
struct ListChecksArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Fix(args) => cmd_fix(args),
        Command::Explain(args) => cmd_explain(args),
        Command::ListChecks(args) => cmd_list_checks(args),
        Command::Formats => cmd_formats(),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let config_dir = args.input.parent().unwrap_or(Utf8Path::new("."));
    let config = load_or_default(config_dir)?;

    let settings = CheckSettings {
        input: args.input.clone(),
        format_id: resolve_format(args.format, &config),
        out_dir: resolve_out_dir(args.out_dir, &config),
    };

    let source = CsvTableSource::new(settings.input.clone());
    let outcome = match run_check(&settings, &source, tool_info()) {
        Ok(outcome) => outcome,
        Err(ToolError::Config(e)) => return Err(e.into()),
        Err(ToolError::Internal(e)) => return Err(e),
    };

    write_check_artifacts(&outcome, &settings.out_dir, &FsWritePort)
        .context("write artifacts")?;

    println!(
        "{}: score {}/100 ({}), ready: {}",
        settings.input,
        outcome.breakdown.score,
        outcome.breakdown.label.as_str(),
        if outcome.breakdown.ready { "yes" } else { "no" }
    );
    println!(
        "{} errors, {} warnings, {} infos ({} blocking); report in {}",
        outcome.breakdown.counts.errors,
        outcome.breakdown.counts.warnings,
        outcome.breakdown.counts.infos,
        outcome.breakdown.counts.blocking_errors,
        settings.out_dir
    );

    Ok(exit_for(outcome.not_ready))
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<ExitCode> {
    let config_dir = args.input.parent().unwrap_or(Utf8Path::new("."));
    let config = load_or_default(config_dir)?;

    let settings = FixSettings {
        input: args.input.clone(),
        format_id: resolve_format(args.format, &config),
        out_dir: resolve_out_dir(args.out_dir, &config),
        output: args.output,
    };

    let source = CsvTableSource::new(settings.input.clone());
    let outcome = match run_fix(&settings, &source, tool_info()) {
        Ok(outcome) => outcome,
        Err(ToolError::Config(e)) => return Err(e.into()),
        Err(ToolError::Internal(e)) => return Err(e),
    };

    let sink = CsvTableSink::new(settings.output_path());
    write_fix_artifacts(&outcome, &settings.out_dir, &FsWritePort, &sink)
        .context("write artifacts")?;

    println!(
        "applied {} fix(es); score {} → {}, ready: {}",
        outcome.fixes_applied.len(),
        outcome.breakdown_before.score,
        outcome.breakdown_after.score,
        if outcome.breakdown_after.ready { "yes" } else { "no" }
    );
    for change in &outcome.fixes_applied {
        println!("  - {change}");
    }
    println!("corrected feed written to {}", settings.output_path());

    Ok(exit_for(outcome.not_ready))
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<ExitCode> {
    let Some(meta) = lookup(&args.code) else {
        println!("Unknown issue code: {}", args.code);
        println!("Run `feedfix list-checks` for the full list.");
        return Ok(ExitCode::from(1));
    };

    println!("{} ({})", meta.title, meta.code);
    println!();
    println!("Category:   {}", meta.category.as_str());
    println!("Blocking:   {}", if meta.blocking { "yes" } else { "no" });
    println!("Auto-fix:   {}", if meta.auto_fixable { "yes" } else { "no" });
    println!();
    println!("{}", meta.explanation);
    println!();
    println!("Why it is classified this way:");
    println!("{}", meta.rationale);
    println!();
    println!("How to resolve:");
    println!("{}", meta.remedy);

    Ok(ExitCode::SUCCESS)
}

fn cmd_list_checks(args: ListChecksArgs) -> anyhow::Result<ExitCode> {
    match args.format {
        OutputFormat::Text => {
            println!("Generic checks:");
            for meta in GENERIC_META {
                println!(
                    "  {:<32} {:<12} blocking={:<5} auto-fix={:<5} {}",
                    meta.code,
                    meta.category.as_str(),
                    meta.blocking,
                    meta.auto_fixable,
                    meta.title
                );
            }
            println!();
            println!("Profile-specific overrides:");
            for meta in PROFILE_META {
                println!(
                    "  {:<32} {:<12} blocking={:<5} auto-fix={:<5} {}",
                    meta.code,
                    meta.category.as_str(),
                    meta.blocking,
                    meta.auto_fixable,
                    meta.title
                );
            }
        }
        OutputFormat::Json => {
            let all: Vec<_> = GENERIC_META.iter().chain(PROFILE_META).collect();
            let json = serde_json::to_string_pretty(&all).context("serialize checks")?;
            println!("{json}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_formats() -> anyhow::Result<ExitCode> {
    for rs in rulesets() {
        println!(
            "{:<10} {} ({} canonical columns, {} required)",
            rs.format_id,
            rs.display_name,
            rs.canonical_headers.len(),
            rs.required.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "feedfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

/// Exit code 2 signals "blocking issues remain", mirroring the report's
/// `ready` flag; 0 means the feed is importable as-is.
fn exit_for(not_ready: bool) -> ExitCode {
    if not_ready {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
