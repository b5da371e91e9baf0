//! End-to-end tests for `relist classify`.

mod common;

use common::{fixture_path, run_relist};

#[test]
fn json_report_tags_each_line() {
    let input = fixture_path("steps.txt");
    let result = run_relist(
        &["classify", "--json", "--input", input.to_str().expect("utf-8 path")],
        "",
    );
    result.assert_success();

    let report: serde_json::Value = serde_json::from_str(&result.stdout).expect("json report");
    assert_eq!(report["schema_version"], 1);
    assert_eq!(report["leading_text"], "Steps to reproduce the crash:");
    let tags: Vec<&str> = report["lines"]
        .as_array()
        .expect("lines array")
        .iter()
        .map(|row| row["tag"].as_str().expect("tag"))
        .collect();
    assert_eq!(
        tags,
        vec!["leading", "element", "element", "unparsed", "element", "element"]
    );
    assert_eq!(report["lines"][4]["original_number"], "5");
    assert_eq!(report["warnings"][0]["kind"], "unparsed_line");
    assert_eq!(report["warnings"][0]["line"], 3);
}

#[test]
fn text_report_is_the_default() {
    let result = run_relist(&["classify"], "1. aaa\n2. bbb\n3. ccc\n4. ddd\n");
    result.assert_success();
    assert!(result.stdout.starts_with("leading text: <none>\n"));
    assert_eq!(result.stdout.matches("element").count(), 4);
    assert!(result.stdout.contains("threshold 0.000"));
}

#[test]
fn classification_failure_uses_exit_code() {
    let result = run_relist(&["classify", "--json"], "only\ntwo\nlines\n");
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.is_empty());
}
