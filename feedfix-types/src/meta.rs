use serde::{Deserialize, Serialize};

/// Validation categories. Every issue code maps to exactly one category
/// through its registry metadata; the scoring engine weights these per
/// marketplace profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Structure,
    Variant,
    Pricing,
    Inventory,
    Seo,
    Images,
    Sku,
    Attributes,
    Media,
    Compliance,
    Tags,
    Shipping,
}

impl IssueCategory {
    /// All categories, in display order.
    pub const ALL: [IssueCategory; 12] = [
        IssueCategory::Structure,
        IssueCategory::Variant,
        IssueCategory::Pricing,
        IssueCategory::Inventory,
        IssueCategory::Seo,
        IssueCategory::Images,
        IssueCategory::Sku,
        IssueCategory::Attributes,
        IssueCategory::Media,
        IssueCategory::Compliance,
        IssueCategory::Tags,
        IssueCategory::Shipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Structure => "structure",
            IssueCategory::Variant => "variant",
            IssueCategory::Pricing => "pricing",
            IssueCategory::Inventory => "inventory",
            IssueCategory::Seo => "seo",
            IssueCategory::Images => "images",
            IssueCategory::Sku => "sku",
            IssueCategory::Attributes => "attributes",
            IssueCategory::Media => "media",
            IssueCategory::Compliance => "compliance",
            IssueCategory::Tags => "tags",
            IssueCategory::Shipping => "shipping",
        }
    }
}

/// Static metadata for one issue code.
///
/// `blocking = true` means the target marketplace would reject or corrupt
/// the import if the issue is left unaddressed. `auto_fixable = true`
/// means the corrected value is derivable deterministically from the
/// existing cell with no risk of altering business meaning — this flag,
/// not severity, is what gates the auto-fix engine.
#[derive(Debug, Clone, Serialize)]
pub struct IssueMeta {
    /// Full `"<format_id>/<name>"` code for bespoke entries, bare
    /// `"<name>"` suffix for generic fallback entries.
    pub code: &'static str,
    pub category: IssueCategory,
    pub blocking: bool,
    pub auto_fixable: bool,
    pub title: &'static str,
    pub explanation: &'static str,
    pub rationale: &'static str,
    pub remedy: &'static str,
}
