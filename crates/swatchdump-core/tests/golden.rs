use std::fs;
use std::path::Path;

use swatchdump_core::{Report, decode_swatch_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str, input_name: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join(input_name);
    let expected = load_expected_report(dir);

    let mut actual = decode_swatch_file(&input).expect("decode swatch file");
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_aco_v1() {
    run_golden("tests/golden/aco_v1", "input.aco");
}

#[test]
fn golden_aco_v2() {
    run_golden("tests/golden/aco_v2", "input.aco");
}

#[test]
fn golden_ase_mixed() {
    run_golden("tests/golden/ase_mixed", "input.ase");
}

#[test]
fn golden_ase_mixed_skips_gray_only() {
    let report = load_expected_report("tests/golden/ase_mixed");
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].name.as_deref(), Some("Grey"));
    assert_eq!(report.declared_entries, 6);
    assert_eq!(report.non_color_blocks, 2);
}
