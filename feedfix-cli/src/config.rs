//! Configuration file loading for feedfix.
//!
//! Discovers and loads `feedfix.toml` from the input file's directory.
//! CLI arguments take precedence over config file settings.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "feedfix.toml";

/// Top-level configuration from feedfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedfixConfig {
    /// Default target format id.
    pub format: Option<String>,

    /// Default artifact output directory.
    pub out_dir: Option<Utf8PathBuf>,
}

/// Discover the feedfix.toml config file next to the input.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a feedfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<FeedfixConfig> {
    let contents =
        fs::read_to_string(path.as_std_path()).with_context(|| format!("read config file {path}"))?;
    parse_config(&contents).with_context(|| format!("parse config file {path}"))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<FeedfixConfig> {
    let config: FeedfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return defaults if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<FeedfixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(FeedfixConfig::default()),
    }
}

/// Merge config file settings with CLI arguments (CLI wins).
pub fn resolve_format(cli: Option<String>, config: &FeedfixConfig) -> String {
    cli.or_else(|| config.format.clone())
        .unwrap_or_else(|| "shopify".to_string())
}

pub fn resolve_out_dir(cli: Option<Utf8PathBuf>, config: &FeedfixConfig) -> Utf8PathBuf {
    cli.or_else(|| config.out_dir.clone())
        .unwrap_or_else(|| Utf8PathBuf::from("feedfix-out"))
}
