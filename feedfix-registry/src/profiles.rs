//! Bespoke per-profile metadata. Entries here win over the generic table
//! for their exact `"<format_id>/<name>"` code.

use feedfix_types::meta::{IssueCategory, IssueMeta};

pub static PROFILE_META: &[IssueMeta] = &[
    IssueMeta {
        code: "shopify/invalid_handle",
        category: IssueCategory::Structure,
        blocking: true,
        auto_fixable: false,
        title: "Invalid Shopify handle",
        explanation: "Shopify handles become the product URL (/products/<handle>) and group \
                      variant rows into one product. They may only contain lowercase \
                      letters, digits and hyphens; spaces and uppercase letters make the \
                      import fail or split the product.",
        rationale: "Rewriting a handle re-groups rows and changes the storefront URL, so \
                    feedfix suggests a slug but never applies it.",
        remedy: "Adopt the suggested slug on every row of the product, including image \
                 continuation rows.",
    },
    IssueMeta {
        code: "shopify/invalid_inventory_policy",
        category: IssueCategory::Inventory,
        blocking: true,
        auto_fixable: true,
        title: "Invalid inventory policy",
        explanation: "Shopify accepts exactly \"deny\" (stop selling at zero stock) or \
                      \"continue\" (allow overselling).",
        rationale: "Case variants and common synonyms map onto the two tokens without \
                    ambiguity.",
        remedy: "Run the auto-fix, or enter \"deny\" or \"continue\".",
    },
    IssueMeta {
        code: "shopify/duplicate_grouping_key",
        category: IssueCategory::Structure,
        blocking: true,
        auto_fixable: false,
        title: "Duplicate handle",
        explanation: "Rows sharing a handle are imported as one product. These rows share a \
                      handle but have no option values or distinct SKUs, so Shopify would \
                      collapse what look like separate products into one.",
        rationale: "Merging or re-keying needs catalog knowledge feedfix does not have.",
        remedy: "Give each product a unique handle, or add option values if the rows really \
                 are variants.",
    },
    IssueMeta {
        code: "ebay/title_too_long",
        category: IssueCategory::Compliance,
        blocking: true,
        auto_fixable: false,
        title: "Title over eBay's 80-character limit",
        explanation: "eBay rejects listings whose title exceeds 80 characters; this is a hard \
                      limit, not a search-ranking nicety.",
        rationale: "Truncating a title is editorial judgment, never a mechanical rewrite.",
        remedy: "Shorten the title to 80 characters or fewer.",
    },
    IssueMeta {
        code: "ebay/invalid_condition",
        category: IssueCategory::Compliance,
        blocking: true,
        auto_fixable: true,
        title: "Invalid eBay condition ID",
        explanation: "eBay conditions are numeric codes (1000 = New, 3000 = Used, 7000 = For \
                      parts or not working, …). Names are accepted in many seller tools but \
                      not in bulk uploads.",
        rationale: "The well-known condition names map onto their numeric codes without \
                    ambiguity.",
        remedy: "Run the auto-fix, or replace the name with its numeric code.",
    },
    IssueMeta {
        code: "ebay/duplicate_grouping_key",
        category: IssueCategory::Sku,
        blocking: true,
        auto_fixable: false,
        title: "Duplicate custom label",
        explanation: "Two rows carry the same custom label (seller SKU). Bulk revisions key \
                      on the label, so duplicates make later updates ambiguous.",
        rationale: "Which row is the real listing is a business question.",
        remedy: "Give each listing a unique custom label, or remove the duplicate row.",
    },
];
