//! Generic fallback metadata, keyed by code suffix.
//!
//! Every code any validator can emit must have an entry here; profiles
//! add bespoke copy on top in `profiles.rs`.

use feedfix_types::meta::{IssueCategory, IssueMeta};

pub static GENERIC_META: &[IssueMeta] = &[
    IssueMeta {
        code: "parse_error",
        category: IssueCategory::Structure,
        blocking: true,
        auto_fixable: false,
        title: "Row failed to parse",
        explanation: "The source file contains a row the CSV reader could not tokenize, \
                      usually a quoting problem or a row with the wrong number of cells.",
        rationale: "A row that cannot be read cannot be imported; the marketplace would \
                    silently lose the record or abort the upload.",
        remedy: "Open the file in a spreadsheet tool, fix the quoting or cell count on \
                 the reported line, and re-export.",
    },
    IssueMeta {
        code: "duplicate_header",
        category: IssueCategory::Structure,
        blocking: false,
        auto_fixable: false,
        title: "Duplicate column header",
        explanation: "Two input columns share the same name after trimming and case-folding. \
                      During parsing, values from the later column overwrite the earlier one.",
        rationale: "Overwritten cells are unrecoverable; the export tool that produced the \
                    file needs the duplicate removed at the source.",
        remedy: "Rename or remove one of the duplicate columns in the source export.",
    },
    IssueMeta {
        code: "ambiguous_header",
        category: IssueCategory::Structure,
        blocking: false,
        auto_fixable: false,
        title: "Ambiguous column mapping",
        explanation: "Two distinct input columns both map onto the same canonical field. The \
                      higher-priority spelling was used; the other column was kept verbatim.",
        rationale: "Feedfix cannot know which column is the source of truth, so it picks \
                    deterministically and preserves the loser rather than guessing.",
        remedy: "Remove or rename the redundant column so only one source maps to the field.",
    },
    IssueMeta {
        code: "missing_required_column",
        category: IssueCategory::Structure,
        blocking: true,
        auto_fixable: true,
        title: "Missing required column",
        explanation: "The target marketplace requires this column and no input header mapped \
                      onto it.",
        rationale: "The header itself can be added mechanically; the blank values it exposes \
                    still need real data, which only you can supply.",
        remedy: "Run the auto-fix to add the column, then fill the values before importing.",
    },
    IssueMeta {
        code: "missing_recommended_column",
        category: IssueCategory::Structure,
        blocking: false,
        auto_fixable: false,
        title: "Missing recommended column",
        explanation: "This column is not strictly required but listings import better with it \
                      (search ranking, richer product pages).",
        rationale: "Purely advisory; the import will succeed without it.",
        remedy: "Add the column to the source export if the data exists.",
    },
    IssueMeta {
        code: "missing_required_value",
        category: IssueCategory::Structure,
        blocking: true,
        auto_fixable: false,
        title: "Required value is blank",
        explanation: "A required column exists but this row leaves it empty.",
        rationale: "Inventing a business value (a title, a price) would silently corrupt the \
                    listing, so this is never auto-fixed.",
        remedy: "Fill in the missing value for the reported row.",
    },
    IssueMeta {
        code: "invalid_boolean",
        category: IssueCategory::Attributes,
        blocking: true,
        auto_fixable: true,
        title: "Unrecognized boolean token",
        explanation: "The field accepts exactly one truthy and one falsy token; this value is \
                      something else (\"yes\", \"1\", \"True\", …).",
        rationale: "Common spellings map onto the canonical pair without changing meaning, so \
                    normalization is safe. Unrecognizable tokens are left alone.",
        remedy: "Run the auto-fix, or replace the value with the canonical token by hand.",
    },
    IssueMeta {
        code: "invalid_price",
        category: IssueCategory::Pricing,
        blocking: true,
        auto_fixable: true,
        title: "Price is not a plain decimal",
        explanation: "Prices must be bare decimal numbers. Currency symbols, thousands \
                      separators and surrounding whitespace are rejected by bulk importers.",
        rationale: "Stripping symbols and separators never changes the amount, so cleanup is \
                    safe; the result is only written back if it parses as a finite number.",
        remedy: "Run the auto-fix, or re-export prices as plain numbers (e.g. 1299.00).",
    },
    IssueMeta {
        code: "invalid_quantity",
        category: IssueCategory::Inventory,
        blocking: true,
        auto_fixable: false,
        title: "Quantity is not a whole number",
        explanation: "Inventory quantities must be non-negative integers.",
        rationale: "Rounding or truncating a fractional quantity changes stock on hand, so \
                    this is never auto-fixed.",
        remedy: "Correct the quantity to a whole number.",
    },
    IssueMeta {
        code: "invalid_weight",
        category: IssueCategory::Shipping,
        blocking: true,
        auto_fixable: false,
        title: "Weight is not a whole number",
        explanation: "Weights are expected in integer grams.",
        rationale: "Unit conversion cannot be inferred from the cell alone (is \"1.2\" kg or \
                    g?), so no automatic rewrite is safe.",
        remedy: "Convert the weight to grams and enter it as a whole number.",
    },
    IssueMeta {
        code: "invalid_inventory_policy",
        category: IssueCategory::Inventory,
        blocking: true,
        auto_fixable: true,
        title: "Unrecognized inventory policy",
        explanation: "The inventory policy is a small closed vocabulary controlling whether \
                      buyers can purchase when stock runs out.",
        rationale: "Case differences and common synonyms map onto the vocabulary without \
                    ambiguity, so normalization is safe.",
        remedy: "Run the auto-fix, or pick one of the accepted tokens.",
    },
    IssueMeta {
        code: "invalid_status",
        category: IssueCategory::Compliance,
        blocking: true,
        auto_fixable: true,
        title: "Unrecognized product status",
        explanation: "Status must be one of the marketplace's listing states.",
        rationale: "Synonyms (\"live\", \"hidden\") map deterministically onto the accepted \
                    states.",
        remedy: "Run the auto-fix, or pick one of the accepted states.",
    },
    IssueMeta {
        code: "invalid_action",
        category: IssueCategory::Compliance,
        blocking: true,
        auto_fixable: true,
        title: "Unrecognized action",
        explanation: "The action column tells the marketplace what to do with the row (add, \
                      revise, end).",
        rationale: "Common synonyms (\"create\", \"update\", \"delete\") map deterministically \
                    onto the accepted verbs.",
        remedy: "Run the auto-fix, or pick one of the accepted verbs.",
    },
    IssueMeta {
        code: "invalid_condition",
        category: IssueCategory::Compliance,
        blocking: true,
        auto_fixable: true,
        title: "Unrecognized condition",
        explanation: "Condition must be one of the marketplace's numeric condition codes.",
        rationale: "Well-known condition names (\"New\", \"Used\") map onto their numeric \
                    codes without ambiguity.",
        remedy: "Run the auto-fix, or enter the numeric condition code directly.",
    },
    IssueMeta {
        code: "invalid_duration",
        category: IssueCategory::Compliance,
        blocking: true,
        auto_fixable: true,
        title: "Unrecognized listing duration",
        explanation: "Duration must be one of the marketplace's listing-duration tokens.",
        rationale: "Spellings like \"7 days\" map deterministically onto the token set.",
        remedy: "Run the auto-fix, or pick one of the accepted duration tokens.",
    },
    IssueMeta {
        code: "invalid_listing_format",
        category: IssueCategory::Compliance,
        blocking: true,
        auto_fixable: true,
        title: "Unrecognized listing format",
        explanation: "The listing format selects between fixed-price and auction selling.",
        rationale: "The accepted set is tiny and its common spellings are unambiguous.",
        remedy: "Run the auto-fix, or pick one of the accepted format tokens.",
    },
    IssueMeta {
        code: "invalid_image_url",
        category: IssueCategory::Images,
        blocking: true,
        auto_fixable: false,
        title: "Image reference is not an http(s) URL",
        explanation: "Image cells must hold an absolute http or https URL the marketplace can \
                      fetch.",
        rationale: "Guessing a scheme or a host for a bare path risks pointing at the wrong \
                    asset, so this is never auto-fixed.",
        remedy: "Replace the value with the image's full https URL.",
    },
    IssueMeta {
        code: "invalid_handle",
        category: IssueCategory::Structure,
        blocking: true,
        auto_fixable: false,
        title: "Grouping handle is not a valid slug",
        explanation: "Handles become URL slugs and group variant rows into one product; they \
                      may only contain lowercase letters, digits and hyphens.",
        rationale: "Rewriting a handle changes which rows form a product and breaks existing \
                    URLs, so it is suggested but never applied automatically.",
        remedy: "Adopt the suggested slug, applying the same change to every row of the \
                 product.",
    },
    IssueMeta {
        code: "title_too_long",
        category: IssueCategory::Seo,
        blocking: false,
        auto_fixable: false,
        title: "Title exceeds the length ceiling",
        explanation: "Over-long titles are truncated or down-ranked in search results.",
        rationale: "Shortening a title is editorial judgment, never a mechanical rewrite.",
        remedy: "Shorten the title below the ceiling, front-loading the key words.",
    },
    IssueMeta {
        code: "subtitle_too_long",
        category: IssueCategory::Seo,
        blocking: false,
        auto_fixable: false,
        title: "Subtitle exceeds the length ceiling",
        explanation: "The marketplace truncates subtitles over the limit.",
        rationale: "Shortening copy is editorial judgment.",
        remedy: "Shorten the subtitle below the ceiling.",
    },
    IssueMeta {
        code: "seo_title_too_long",
        category: IssueCategory::Seo,
        blocking: false,
        auto_fixable: false,
        title: "SEO title exceeds the length ceiling",
        explanation: "Search engines truncate page titles around 70 characters.",
        rationale: "Shortening copy is editorial judgment.",
        remedy: "Shorten the SEO title below the ceiling.",
    },
    IssueMeta {
        code: "seo_description_too_long",
        category: IssueCategory::Seo,
        blocking: false,
        auto_fixable: false,
        title: "SEO description exceeds the length ceiling",
        explanation: "Search engines truncate meta descriptions around 320 characters.",
        rationale: "Shortening copy is editorial judgment.",
        remedy: "Shorten the SEO description below the ceiling.",
    },
    IssueMeta {
        code: "tags_too_long",
        category: IssueCategory::Tags,
        blocking: false,
        auto_fixable: false,
        title: "Tag list exceeds the length ceiling",
        explanation: "The combined tag string is longer than the marketplace stores.",
        rationale: "Choosing which tags to drop is judgment, not mechanics.",
        remedy: "Trim the tag list to the most useful tags.",
    },
    IssueMeta {
        code: "duplicate_grouping_key",
        category: IssueCategory::Structure,
        blocking: true,
        auto_fixable: false,
        title: "Rows duplicate a grouping key",
        explanation: "Several rows share a grouping key but none carries option values or a \
                      distinct identifier, so they look like accidental duplicates rather \
                      than variants of one product.",
        rationale: "Deciding whether to merge the rows or re-key them needs knowledge of the \
                    catalog; picking for you could delete a real product.",
        remedy: "Merge genuine duplicates, or give each distinct product its own key.",
    },
    IssueMeta {
        code: "options_not_unique",
        category: IssueCategory::Variant,
        blocking: true,
        auto_fixable: false,
        title: "Variant option values collide",
        explanation: "Two variants of one product carry the same option-value combination \
                      (compared case-insensitively, trimmed). The marketplace cannot tell \
                      them apart.",
        rationale: "Which row holds the right price/stock for the combination is a business \
                    question; auto-dropping either would lose data.",
        remedy: "Give each variant a distinct option combination, or remove the duplicate \
                 row.",
    },
    IssueMeta {
        code: "option_order_gap",
        category: IssueCategory::Variant,
        blocking: true,
        auto_fixable: false,
        title: "Option columns are filled out of order",
        explanation: "A later option column is set while an earlier one is blank. Option \
                      columns form a hierarchy and must be filled left to right.",
        rationale: "Shifting values between option slots changes the option hierarchy, which \
                    is a catalog-modeling decision.",
        remedy: "Move the value into the first blank option column, or fill the earlier \
                 columns.",
    },
    IssueMeta {
        code: "missing_option_name",
        category: IssueCategory::Variant,
        blocking: true,
        auto_fixable: false,
        title: "Option values without an option name",
        explanation: "Rows of this product use an option value column but no row names the \
                      option (e.g. \"Color\").",
        rationale: "The option's name is business data feedfix cannot invent.",
        remedy: "Set the option name on the product's first row.",
    },
    IssueMeta {
        code: "inconsistent_shared_field",
        category: IssueCategory::Variant,
        blocking: false,
        auto_fixable: false,
        title: "Shared field differs across a product's rows",
        explanation: "A descriptive field expected to be identical across a product's rows \
                      (title, vendor, type) diverges from the first non-blank value.",
        rationale: "Most importers take the first row's value and ignore the rest, so this \
                    usually imports — just not the way the divergent row intended.",
        remedy: "Align the field across the product's rows.",
    },
    IssueMeta {
        code: "duplicate_sku_in_group",
        category: IssueCategory::Sku,
        blocking: true,
        auto_fixable: false,
        title: "Identifier reused within one product",
        explanation: "Two variants of the same product share an identifier (SKU). \
                      Marketplaces reject variant sets with duplicate identifiers.",
        rationale: "Which variant owns the identifier is a business question.",
        remedy: "Assign each variant its own identifier.",
    },
    IssueMeta {
        code: "duplicate_sku_across_products",
        category: IssueCategory::Sku,
        blocking: false,
        auto_fixable: false,
        title: "Identifier reused across products",
        explanation: "The same identifier appears under more than one product. Cross-product \
                      reuse is sometimes legitimate (re-listings, shared barcodes), so this \
                      is a warning rather than an error.",
        rationale: "Only you know whether the reuse is intentional.",
        remedy: "Review the duplicates; keep them only if the reuse is deliberate.",
    },
];
