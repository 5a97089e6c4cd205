//! Marketplace format rule sets.
//!
//! Each target marketplace is one [`FormatRuleSet`]: canonical headers,
//! header aliases, required/recommended fields, per-column format checks,
//! variant-grouping wiring, the ordered rule list, and category weights.
//! Adding a marketplace means adding one rule set here (plus optional
//! bespoke registry copy); the engines are never touched.

mod ebay;
mod error;
mod shopify;

pub use error::ConfigError;

use feedfix_types::issue::Severity;
use feedfix_types::meta::IssueCategory;
use std::sync::LazyLock;

/// Immutable per-marketplace configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct FormatRuleSet {
    /// Stable id used in issue codes, e.g. `"shopify"`.
    pub format_id: &'static str,
    pub display_name: &'static str,

    /// Canonical output headers, in output order.
    pub canonical_headers: Vec<&'static str>,

    /// Accepted source spellings per canonical header, in priority order.
    /// Matching is case- and whitespace-insensitive. The canonical header
    /// itself always matches and does not need to be listed.
    pub aliases: Vec<AliasGroup>,

    pub required: Vec<&'static str>,
    pub recommended: Vec<&'static str>,

    /// Per-column format checks.
    pub fields: Vec<FieldSpec>,

    /// Cross-row variant grouping, when the marketplace has one.
    pub grouping: Option<GroupingSpec>,

    /// The validation pipeline, in execution order.
    pub rules: Vec<RuleKind>,

    /// Category weights for the overall score. Non-negative; renormalized
    /// to sum 1 by the scoring engine.
    pub weights: Vec<(IssueCategory, f64)>,
}

#[derive(Debug, Clone)]
pub struct AliasGroup {
    pub canonical: &'static str,
    pub accepted: &'static [&'static str],
}

/// One column-level format check.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub column: &'static str,
    pub kind: FieldKind,
    /// Issue code suffix emitted on failure, e.g. `"invalid_boolean"`.
    pub code: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Exact two-token vocabulary. `truthy`/`falsy` list the synonym
    /// spellings the auto-fixer may normalize (matched case-insensitively).
    Boolean {
        canonical_true: &'static str,
        canonical_false: &'static str,
        truthy: &'static [&'static str],
        falsy: &'static [&'static str],
    },
    /// Finite decimal number, no currency symbols or separators.
    Money,
    /// Non-negative integer.
    Integer,
    /// Closed vocabulary; `synonyms` maps lowercased spellings the
    /// auto-fixer may normalize onto an allowed token.
    Enum {
        allowed: &'static [&'static str],
        synonyms: &'static [(&'static str, &'static str)],
    },
    /// Must parse as an `http`/`https` URL.
    Url,
    /// URL-slug shape: lowercase alphanumerics and hyphens only.
    Handle,
    /// Plain text with a length ceiling (in characters).
    Text { max_len: usize },
}

/// Wiring for cross-row variant grouping.
#[derive(Debug, Clone)]
pub struct GroupingSpec {
    pub key_column: &'static str,
    /// Option name/value column pairs, left to right. May be empty, in
    /// which case groups of size ≥ 2 can only be duplicates.
    pub option_name_columns: &'static [&'static str],
    pub option_value_columns: &'static [&'static str],
    /// Descriptive fields expected to match across a group.
    pub shared_columns: &'static [&'static str],
    pub identifier_column: Option<&'static str>,
    pub media_column: Option<&'static str>,
    pub price_column: Option<&'static str>,
}

/// The validation rules, in the order a profile lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    RequiredColumns,
    RecommendedColumns,
    RequiredValues,
    FieldFormats,
    VariantGroups,
    IdentifierUniqueness,
}

impl FormatRuleSet {
    /// Full issue code for a suffix, e.g. `"shopify/invalid_handle"`.
    pub fn code(&self, suffix: &str) -> String {
        format!("{}/{}", self.format_id, suffix)
    }

    pub fn field(&self, column: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.column == column)
    }

    pub fn is_required(&self, column: &str) -> bool {
        self.required.iter().any(|c| *c == column)
    }

    /// Sanity-check the rule set against itself. Violations here are
    /// programming errors in the profile definition, not data issues.
    pub fn verify(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::BTreeSet::new();
        for header in &self.canonical_headers {
            if !seen.insert(*header) {
                return Err(ConfigError::DuplicateOutputHeader {
                    format_id: self.format_id.to_string(),
                    header: header.to_string(),
                });
            }
        }

        let known = |column: &str| self.canonical_headers.iter().any(|h| *h == column);
        let check = |column: &str| -> Result<(), ConfigError> {
            if known(column) {
                Ok(())
            } else {
                Err(ConfigError::UnknownColumn {
                    format_id: self.format_id.to_string(),
                    column: column.to_string(),
                })
            }
        };

        for group in &self.aliases {
            check(group.canonical)?;
        }
        for column in self.required.iter().chain(self.recommended.iter()) {
            check(column)?;
        }
        for field in &self.fields {
            check(field.column)?;
        }
        if let Some(grouping) = &self.grouping {
            check(grouping.key_column)?;
            for column in grouping
                .option_name_columns
                .iter()
                .chain(grouping.option_value_columns)
                .chain(grouping.shared_columns)
            {
                check(column)?;
            }
            for column in [
                grouping.identifier_column,
                grouping.media_column,
                grouping.price_column,
            ]
            .into_iter()
            .flatten()
            {
                check(column)?;
            }
        }

        for (category, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    format_id: self.format_id.to_string(),
                    category: category.as_str().to_string(),
                });
            }
        }

        Ok(())
    }
}

static RULESETS: LazyLock<Vec<FormatRuleSet>> =
    LazyLock::new(|| vec![shopify::ruleset(), ebay::ruleset()]);

/// All built-in rule sets.
pub fn rulesets() -> &'static [FormatRuleSet] {
    &RULESETS
}

/// Look up a built-in rule set by format id.
pub fn ruleset(format_id: &str) -> Result<&'static FormatRuleSet, ConfigError> {
    RULESETS
        .iter()
        .find(|rs| rs.format_id == format_id)
        .ok_or_else(|| ConfigError::UnknownFormat(format_id.to_string()))
}
