//! Property tests: identical input always produces byte-identical output,
//! and the issue list upholds its ordering/uniqueness invariants.

use feedfix_canon::canonicalize;
use feedfix_profiles::ruleset;
use feedfix_types::table::RawTable;
use feedfix_validate::validate;
use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("tee".to_string()),
        Just("my shirt".to_string()),
        Just("TRUE".to_string()),
        Just("yes".to_string()),
        Just("maybe".to_string()),
        Just("9.99".to_string()),
        Just("$1,299.00".to_string()),
        Just("Red".to_string()),
        Just(" red ".to_string()),
        Just("deny".to_string()),
        Just("Deny".to_string()),
        Just("https://cdn.example.com/a.jpg".to_string()),
        Just("not a url".to_string()),
        "[a-zA-Z0-9 ]{0,12}",
    ]
}

fn arb_table() -> impl Strategy<Value = RawTable> {
    let pool = vec![
        "Handle",
        "Title",
        "Published",
        "Variant Price",
        "price",
        "Option1 Name",
        "Option1 Value",
        "Option2 Value",
        "Variant SKU",
        "Variant Inventory Policy",
        "Image Src",
        "Custom Notes",
    ];
    proptest::sample::subsequence(pool, 1..=8)
        .prop_flat_map(|headers| {
            let width = headers.len();
            let rows = prop::collection::vec(
                prop::collection::vec(arb_cell(), width..=width),
                0..6,
            );
            (Just(headers), rows)
        })
        .prop_map(|(headers, rows)| RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|values| {
                    headers
                        .iter()
                        .map(|h| h.to_string())
                        .zip(values)
                        .collect()
                })
                .collect(),
            parse_failures: vec![],
        })
}

proptest! {
    #[test]
    fn repeated_passes_are_byte_identical(table in arb_table()) {
        let rs = ruleset("shopify").expect("shopify");

        let (canon_a, diags_a) = canonicalize(&table, rs).expect("canonicalize");
        let (canon_b, diags_b) = canonicalize(&table, rs).expect("canonicalize");
        prop_assert_eq!(&canon_a, &canon_b);
        prop_assert_eq!(diags_a, diags_b);

        let issues_a = validate(&canon_a, rs).expect("validate");
        let issues_b = validate(&canon_a, rs).expect("validate");
        let json_a = serde_json::to_string(&issues_a).expect("serialize");
        let json_b = serde_json::to_string(&issues_b).expect("serialize");
        prop_assert_eq!(json_a, json_b);
    }

    #[test]
    fn issue_list_is_sorted_and_unique(table in arb_table()) {
        let rs = ruleset("shopify").expect("shopify");
        let (canon, _) = canonicalize(&table, rs).expect("canonicalize");
        let issues = validate(&canon, rs).expect("validate");

        // File-level first, then row order.
        let mut seen_row_level = false;
        let mut last_row = None;
        for issue in &issues {
            match issue.row {
                None => prop_assert!(!seen_row_level, "file-level issue after row-level"),
                Some(row) => {
                    if let Some(last) = last_row {
                        prop_assert!(row >= last, "rows out of order");
                    }
                    last_row = Some(row);
                    seen_row_level = true;
                }
            }
        }

        // Unique on (severity, code, row, column).
        let mut keys: Vec<_> = issues.iter().map(|i| i.dedup_key()).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), before, "duplicate issue tuple survived");
    }

    #[test]
    fn emitted_codes_are_all_declared(table in arb_table()) {
        let rs = ruleset("shopify").expect("shopify");
        let declared = feedfix_validate::emittable_codes(rs);
        let (canon, _) = canonicalize(&table, rs).expect("canonicalize");
        for issue in validate(&canon, rs).expect("validate") {
            prop_assert!(
                declared.contains(&issue.code),
                "code {} not declared emittable", issue.code
            );
        }
    }
}
