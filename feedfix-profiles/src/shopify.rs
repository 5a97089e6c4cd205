//! The Shopify-like profile.
//!
//! Multi-row products: rows sharing a `Handle` form one product, each row
//! one purchasable variant distinguished by up to three option columns.
//! Image-only continuation rows carry just the handle and an image URL.

use crate::{AliasGroup, FieldKind, FieldSpec, FormatRuleSet, GroupingSpec, RuleKind};
use feedfix_types::issue::Severity;
use feedfix_types::meta::IssueCategory;

const TRUTHY: &[&str] = &["true", "yes", "y", "t", "1"];
const FALSY: &[&str] = &["false", "no", "n", "f", "0"];

pub(crate) fn ruleset() -> FormatRuleSet {
    FormatRuleSet {
        format_id: "shopify",
        display_name: "Shopify product CSV",
        canonical_headers: vec![
            "Handle",
            "Title",
            "Body (HTML)",
            "Vendor",
            "Type",
            "Tags",
            "Published",
            "Option1 Name",
            "Option1 Value",
            "Option2 Name",
            "Option2 Value",
            "Option3 Name",
            "Option3 Value",
            "Variant SKU",
            "Variant Grams",
            "Variant Inventory Qty",
            "Variant Inventory Policy",
            "Variant Price",
            "Variant Compare At Price",
            "Variant Requires Shipping",
            "Variant Taxable",
            "Variant Barcode",
            "Image Src",
            "Image Position",
            "Image Alt Text",
            "SEO Title",
            "SEO Description",
            "Status",
        ],
        aliases: vec![
            AliasGroup {
                canonical: "Handle",
                accepted: &["handle", "product handle", "slug", "url handle"],
            },
            AliasGroup {
                canonical: "Title",
                accepted: &["title", "product title", "name", "product name"],
            },
            AliasGroup {
                canonical: "Body (HTML)",
                accepted: &["body (html)", "body", "description", "body html", "product description"],
            },
            AliasGroup {
                canonical: "Vendor",
                accepted: &["vendor", "brand", "manufacturer"],
            },
            AliasGroup {
                canonical: "Type",
                accepted: &["type", "product type", "category"],
            },
            AliasGroup {
                canonical: "Tags",
                accepted: &["tags", "tag", "keywords"],
            },
            AliasGroup {
                canonical: "Published",
                accepted: &["published", "visible", "active"],
            },
            AliasGroup {
                canonical: "Option1 Name",
                accepted: &["option1 name", "option 1 name"],
            },
            AliasGroup {
                canonical: "Option1 Value",
                accepted: &["option1 value", "option 1 value"],
            },
            AliasGroup {
                canonical: "Option2 Name",
                accepted: &["option2 name", "option 2 name"],
            },
            AliasGroup {
                canonical: "Option2 Value",
                accepted: &["option2 value", "option 2 value"],
            },
            AliasGroup {
                canonical: "Option3 Name",
                accepted: &["option3 name", "option 3 name"],
            },
            AliasGroup {
                canonical: "Option3 Value",
                accepted: &["option3 value", "option 3 value"],
            },
            AliasGroup {
                canonical: "Variant SKU",
                accepted: &["variant sku", "sku", "item sku", "sku code"],
            },
            AliasGroup {
                canonical: "Variant Grams",
                accepted: &["variant grams", "grams", "weight", "weight (g)"],
            },
            AliasGroup {
                canonical: "Variant Inventory Qty",
                accepted: &["variant inventory qty", "inventory qty", "quantity", "qty", "stock"],
            },
            AliasGroup {
                canonical: "Variant Inventory Policy",
                accepted: &["variant inventory policy", "inventory policy"],
            },
            AliasGroup {
                canonical: "Variant Price",
                accepted: &["variant price", "price", "unit price"],
            },
            AliasGroup {
                canonical: "Variant Compare At Price",
                accepted: &["variant compare at price", "compare at price", "compare price", "msrp"],
            },
            AliasGroup {
                canonical: "Variant Requires Shipping",
                accepted: &["variant requires shipping", "requires shipping"],
            },
            AliasGroup {
                canonical: "Variant Taxable",
                accepted: &["variant taxable", "taxable"],
            },
            AliasGroup {
                canonical: "Variant Barcode",
                accepted: &["variant barcode", "barcode", "upc", "ean", "gtin"],
            },
            AliasGroup {
                canonical: "Image Src",
                accepted: &["image src", "image", "image url", "img src", "picture"],
            },
            AliasGroup {
                canonical: "Image Position",
                accepted: &["image position", "image pos"],
            },
            AliasGroup {
                canonical: "Image Alt Text",
                accepted: &["image alt text", "image alt", "alt text"],
            },
            AliasGroup {
                canonical: "SEO Title",
                accepted: &["seo title", "meta title", "page title"],
            },
            AliasGroup {
                canonical: "SEO Description",
                accepted: &["seo description", "meta description", "page description"],
            },
            AliasGroup {
                canonical: "Status",
                accepted: &["status", "product status"],
            },
        ],
        required: vec!["Handle", "Title", "Variant Price"],
        recommended: vec![
            "Vendor",
            "Type",
            "Tags",
            "Variant SKU",
            "Variant Inventory Qty",
            "Image Src",
            "SEO Title",
            "SEO Description",
        ],
        fields: vec![
            FieldSpec {
                column: "Handle",
                kind: FieldKind::Handle,
                code: "invalid_handle",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Published",
                kind: FieldKind::Boolean {
                    canonical_true: "TRUE",
                    canonical_false: "FALSE",
                    truthy: TRUTHY,
                    falsy: FALSY,
                },
                code: "invalid_boolean",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Variant Requires Shipping",
                kind: FieldKind::Boolean {
                    canonical_true: "TRUE",
                    canonical_false: "FALSE",
                    truthy: TRUTHY,
                    falsy: FALSY,
                },
                code: "invalid_boolean",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Variant Taxable",
                kind: FieldKind::Boolean {
                    canonical_true: "TRUE",
                    canonical_false: "FALSE",
                    truthy: TRUTHY,
                    falsy: FALSY,
                },
                code: "invalid_boolean",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Variant Price",
                kind: FieldKind::Money,
                code: "invalid_price",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Variant Compare At Price",
                kind: FieldKind::Money,
                code: "invalid_price",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Variant Grams",
                kind: FieldKind::Integer,
                code: "invalid_weight",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Variant Inventory Qty",
                kind: FieldKind::Integer,
                code: "invalid_quantity",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Variant Inventory Policy",
                kind: FieldKind::Enum {
                    allowed: &["deny", "continue"],
                    synonyms: &[
                        ("block", "deny"),
                        ("stop", "deny"),
                        ("no", "deny"),
                        ("oversell", "continue"),
                        ("allow", "continue"),
                        ("yes", "continue"),
                    ],
                },
                code: "invalid_inventory_policy",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Status",
                kind: FieldKind::Enum {
                    allowed: &["active", "draft", "archived"],
                    synonyms: &[
                        ("published", "active"),
                        ("live", "active"),
                        ("enabled", "active"),
                        ("inactive", "draft"),
                        ("hidden", "draft"),
                        ("unpublished", "draft"),
                        ("archive", "archived"),
                    ],
                },
                code: "invalid_status",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Image Src",
                kind: FieldKind::Url,
                code: "invalid_image_url",
                severity: Severity::Error,
            },
            FieldSpec {
                column: "Title",
                kind: FieldKind::Text { max_len: 255 },
                code: "title_too_long",
                severity: Severity::Warning,
            },
            FieldSpec {
                column: "SEO Title",
                kind: FieldKind::Text { max_len: 70 },
                code: "seo_title_too_long",
                severity: Severity::Warning,
            },
            FieldSpec {
                column: "SEO Description",
                kind: FieldKind::Text { max_len: 320 },
                code: "seo_description_too_long",
                severity: Severity::Warning,
            },
            FieldSpec {
                column: "Tags",
                kind: FieldKind::Text { max_len: 255 },
                code: "tags_too_long",
                severity: Severity::Warning,
            },
        ],
        grouping: Some(GroupingSpec {
            key_column: "Handle",
            option_name_columns: &["Option1 Name", "Option2 Name", "Option3 Name"],
            option_value_columns: &["Option1 Value", "Option2 Value", "Option3 Value"],
            shared_columns: &["Title", "Vendor", "Type"],
            identifier_column: Some("Variant SKU"),
            media_column: Some("Image Src"),
            price_column: Some("Variant Price"),
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
            (IssueCategory::Structure, 0.20),
            (IssueCategory::Variant, 0.15),
            (IssueCategory::Pricing, 0.15),
            (IssueCategory::Inventory, 0.10),
            (IssueCategory::Sku, 0.10),
            (IssueCategory::Images, 0.10),
            (IssueCategory::Seo, 0.10),
            (IssueCategory::Attributes, 0.05),
            (IssueCategory::Compliance, 0.03),
            (IssueCategory::Tags, 0.02),
        ],
    }
}
