//! The eBay-like profile.
//!
//! Single-row listings keyed by a seller SKU ("Custom Label"). No option
//! columns, so any repeated key is a duplicate listing, never a variant.

use crate::{AliasGroup, FieldKind, FieldSpec, FormatRuleSet, GroupingSpec, RuleKind};
use feedfix_types::issue::Severity;
use feedfix_types::meta::IssueCategory;

pub(crate) fn ruleset() -> FormatRuleSet {
    FormatRuleSet {
        format_id: "ebay",
        display_name: "eBay listing CSV",
        canonical_headers: vec![
            "Action",
            "Custom Label",
            "Category ID",
            "Title",
            "Subtitle",
            "Description",
            "Condition ID",
            "Pic URL",
            "Quantity",
            "Start Price",
            "Buy It Now Price",
            "Duration",
            "Format",
            "Location",
        ],
        aliases: vec![
            AliasGroup {
                canonical: "Action",
                accepted: &["action", "*action*"],
            },
            AliasGroup {
                canonical: "Custom Label",
                accepted: &["custom label", "custom label (sku)", "sku", "customlabel"],
            },
            AliasGroup {
                canonical: "Category ID",
                accepted: &["category id", "category", "categoryid", "*category*"],
            },
            AliasGroup {
                canonical: "Title",
                accepted: &["title", "item title", "*title*", "name"],
            },
            AliasGroup {
                canonical: "Subtitle",
                accepted: &["subtitle", "sub title"],
            },
            AliasGroup {
                canonical: "Description",
                accepted: &["description", "item description", "*description*"],
            },
            AliasGroup {
                canonical: "Condition ID",
                accepted: &["condition id", "condition", "conditionid", "*conditionid*"],
            },
            AliasGroup {
                canonical: "Pic URL",
                accepted: &["pic url", "picurl", "picture url", "image", "image url"],
            },
            AliasGroup {
                canonical: "Quantity",
                accepted: &["quantity", "qty", "*quantity*", "stock"],
            },
            AliasGroup {
                canonical: "Start Price",
                accepted: &["start price", "startprice", "*startprice*", "price"],
            },
            AliasGroup {
                canonical: "Buy It Now Price",
                accepted: &["buy it now price", "buyitnowprice", "bin price"],
            },
            AliasGroup {
                canonical: "Duration",
                accepted: &["duration", "*duration*", "listing duration"],
            },
            AliasGroup {
                canonical: "Format",
                accepted: &["format", "*format*", "listing format", "listing type"],
            },
            AliasGroup {
                canonical: "Location",
                accepted: &["location", "item location"],
            },
        ],
        required: vec!["Action", "Title", "Quantity", "Start Price"],
        recommended: vec![
            "Custom Label",
            "Category ID",
            "Condition ID",
            "Pic URL",
            "Description",
        ],
        fields: vec![
            FieldSpec {
                column: "Action",
                kind: FieldKind::Enum {
                    allowed: &["Add", "Revise", "End"],
                    synonyms: &[
                        ("create", "Add"),
                        ("new", "Add"),
                        ("update", "Revise"),
                        ("edit", "Revise"),
                        ("delete", "End"),
                        ("remove", "End"),
                    ],
                },
                code: "invalid_action",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Condition ID",
                kind: FieldKind::Enum {
                    allowed: &[
                        "1000", "1500", "2000", "2500", "3000", "4000", "5000", "6000", "7000",
                    ],
                    synonyms: &[
                        ("new", "1000"),
                        ("new other", "1500"),
                        ("refurbished", "2000"),
                        ("seller refurbished", "2500"),
                        ("used", "3000"),
                        ("very good", "4000"),
                        ("good", "5000"),
                        ("acceptable", "6000"),
                        ("for parts", "7000"),
                        ("for parts or not working", "7000"),
                    ],
                },
                code: "invalid_condition",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Quantity",
                kind: FieldKind::Integer,
                code: "invalid_quantity",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Start Price",
                kind: FieldKind::Money,
                code: "invalid_price",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Buy It Now Price",
                kind: FieldKind::Money,
                code: "invalid_price",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Duration",
                kind: FieldKind::Enum {
                    allowed: &["GTC", "Days_3", "Days_5", "Days_7", "Days_10", "Days_30"],
                    synonyms: &[
                        ("good till cancelled", "GTC"),
                        ("good 'til cancelled", "GTC"),
                        ("3 days", "Days_3"),
                        ("5 days", "Days_5"),
                        ("7 days", "Days_7"),
                        ("10 days", "Days_10"),
                        ("30 days", "Days_30"),
                    ],
                },
                code: "invalid_duration",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Format",
                kind: FieldKind::Enum {
                    allowed: &["FixedPrice", "Auction"],
                    synonyms: &[
                        ("fixed price", "FixedPrice"),
                        ("buy it now", "FixedPrice"),
                        ("chinese", "Auction"),
                    ],
                },
                code: "invalid_listing_format",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Pic URL",
                kind: FieldKind::Url,
                code: "invalid_image_url",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Title",
                kind: FieldKind::Text { max_len: 80 },
                code: "title_too_long",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Subtitle",
                kind: FieldKind::Text { max_len: 55 },
                code: "subtitle_too_long",
                severity: Severity::Warning,
            },
        ],
        grouping: Some(GroupingSpec {
            key_column: "Custom Label",
            option_name_columns: &[],
            option_value_columns: &[],
            shared_columns: &[],
            identifier_column: Some("Custom Label"),
            media_column: Some("Pic URL"),
            price_column: Some("Start Price"),
        }),
        rules: vec![
            RuleKind::RequiredColumns,
            RuleKind::RecommendedColumns,
            RuleKind::RequiredValues,
            RuleKind::FieldFormats,
            RuleKind::VariantGroups,
            RuleKind::IdentifierUniqueness,
        ],
        weights: vec![
            (IssueCategory::Structure, 0.25),
            (IssueCategory::Pricing, 0.20),
            (IssueCategory::Compliance, 0.15),
            (IssueCategory::Sku, 0.13),
            (IssueCategory::Inventory, 0.12),
            (IssueCategory::Images, 0.10),
            (IssueCategory::Seo, 0.05),
        ],
    }
}
