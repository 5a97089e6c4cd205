//! Clap-free settings for the check and fix pipelines.

use camino::Utf8PathBuf;

/// Settings for the check pipeline.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub input: Utf8PathBuf,
    pub format_id: String,
    pub out_dir: Utf8PathBuf,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            input: Utf8PathBuf::from("products.csv"),
            format_id: "shopify".to_string(),
            out_dir: Utf8PathBuf::from("feedfix-out"),
        }
    }
}

/// Settings for the fix pipeline.
#[derive(Debug, Clone)]
pub struct FixSettings {
    pub input: Utf8PathBuf,
    pub format_id: String,
    pub out_dir: Utf8PathBuf,
    /// Where to write the corrected CSV. Defaults to `<out_dir>/fixed.csv`.
    pub output: Option<Utf8PathBuf>,
}

impl FixSettings {
    pub fn output_path(&self) -> Utf8PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.out_dir.join("fixed.csv"))
    }
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            input: Utf8PathBuf::from("products.csv"),
            format_id: "shopify".to_string(),
            out_dir: Utf8PathBuf::from("feedfix-out"),
            output: None,
        }
    }
}
