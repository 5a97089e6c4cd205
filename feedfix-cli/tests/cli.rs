use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn feedfix() -> Command {
    Command::cargo_bin("feedfix").expect("binary")
}

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write csv");
    path.to_string_lossy().to_string()
}

const CLEAN_CSV: &str = "\
Handle,Title,Variant Price,Published\n\
tee,Classic Tee,19.99,TRUE\n\
mug,Coffee Mug,9.50,FALSE\n";

const MESSY_CSV: &str = "\
Handle,Title,Variant Price,Published\n\
my shirt,Shirt,$1a299.00,yes\n";

const FIXABLE_CSV: &str = "\
Handle,Title,Variant Price,Published\n\
tee,Classic Tee,\"$1,299.00\",yes\n";

#[test]
fn check_clean_feed_exits_zero() {
    let temp = TempDir::new().expect("temp");
    let input = write_csv(&temp, "products.csv", CLEAN_CSV);

    feedfix()
        .current_dir(temp.path())
        .args(["check", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready: yes"));

    assert!(temp.path().join("feedfix-out/report.json").exists());
    assert!(temp.path().join("feedfix-out/report.md").exists());
}

#[test]
fn check_messy_feed_exits_two() {
    let temp = TempDir::new().expect("temp");
    let input = write_csv(&temp, "products.csv", MESSY_CSV);

    feedfix()
        .current_dir(temp.path())
        .args(["check", &input])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("ready: no"));
}

#[test]
fn fix_writes_corrected_feed_and_fixlog() {
    let temp = TempDir::new().expect("temp");
    let input = write_csv(&temp, "products.csv", FIXABLE_CSV);

    feedfix()
        .current_dir(temp.path())
        .args(["fix", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("normalized Published → TRUE"));

    let fixed = std::fs::read_to_string(temp.path().join("feedfix-out/fixed.csv"))
        .expect("fixed.csv");
    assert!(fixed.contains("TRUE"));
    assert!(fixed.contains("1299.00"));
    assert!(!fixed.contains('$'));
    assert!(temp.path().join("feedfix-out/fixlog.md").exists());
}

#[test]
fn fix_is_idempotent_through_the_cli() {
    let temp = TempDir::new().expect("temp");
    let input = write_csv(&temp, "products.csv", FIXABLE_CSV);

    feedfix()
        .current_dir(temp.path())
        .args(["fix", &input])
        .assert()
        .success();

    let fixed_path = temp.path().join("feedfix-out/fixed.csv");
    let first = std::fs::read_to_string(&fixed_path).expect("fixed.csv");

    // Fix the already-fixed file into a second location.
    feedfix()
        .current_dir(temp.path())
        .args([
            "fix",
            fixed_path.to_string_lossy().as_ref(),
            "--out-dir",
            "second-out",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("applied 0 fix(es)"));

    let second = std::fs::read_to_string(temp.path().join("second-out/fixed.csv"))
        .expect("second fixed.csv");
    assert_eq!(first, second);
}

#[test]
fn unknown_format_is_fatal() {
    let temp = TempDir::new().expect("temp");
    let input = write_csv(&temp, "products.csv", CLEAN_CSV);

    feedfix()
        .current_dir(temp.path())
        .args(["check", &input, "--format", "etsy"])
        .assert()
        .code(1);
}

#[test]
fn config_file_sets_the_default_format() {
    let temp = TempDir::new().expect("temp");
    std::fs::write(temp.path().join("feedfix.toml"), "format = \"ebay\"\n")
        .expect("write config");
    let input = write_csv(
        &temp,
        "listings.csv",
        "Action,Title,Quantity,Start Price\nAdd,Vintage radio,1,10.00\n",
    );

    feedfix()
        .current_dir(temp.path())
        .args(["check", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready: yes"));

    let report = std::fs::read_to_string(temp.path().join("feedfix-out/report.json"))
        .expect("report.json");
    assert!(report.contains("\"format\": \"ebay\""));
}

#[test]
fn explain_known_code() {
    feedfix()
        .args(["explain", "invalid_handle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("structure"))
        .stdout(predicate::str::contains("How to resolve:"));
}

#[test]
fn explain_profile_code_uses_bespoke_copy() {
    feedfix()
        .args(["explain", "ebay/title_too_long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80"));
}

#[test]
fn explain_unknown_code_exits_one() {
    feedfix()
        .args(["explain", "no_such_code"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown issue code"));
}

#[test]
fn list_checks_text_and_json() {
    feedfix()
        .args(["list-checks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid_boolean"));

    let output = feedfix()
        .args(["list-checks", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert!(parsed.as_array().is_some_and(|a| !a.is_empty()));
}

#[test]
fn formats_lists_builtin_profiles() {
    feedfix()
        .args(["formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shopify"))
        .stdout(predicate::str::contains("ebay"));
}
