use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("swatchdump"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn fixture(case: &str, name: &str) -> std::path::PathBuf {
    repo_root().join("tests").join("golden").join(case).join(name)
}

#[test]
fn help_supports_export_and_convert() {
    cmd().arg("export").arg("--help").assert().success();
    cmd().arg("convert").arg("--help").assert().success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.aco");

    cmd()
        .arg("export")
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("palette.gpl");
    fs::write(&input, b"GIMP Palette").expect("write input");

    cmd()
        .arg("export")
        .arg(input)
        .assert()
        .failure()
        .stderr(contains("unsupported input format"));
}

#[test]
fn csv_export_writes_rows() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("colors.csv");

    cmd()
        .arg("export")
        .arg(fixture("aco_v2", "input.aco"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("OK:"));

    let csv = fs::read_to_string(&output).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Name,Model,C1,C2,C3,C4,Hex,RVB"));
    assert_eq!(lines.next(), Some("Gr,RGB,255,0,128,N/A,#FF0080,255-000-128"));
    assert_eq!(lines.next(), Some("Dusk Blue,RGB,16,32,48,N/A,#102030,016-032-048"));
    assert_eq!(lines.next(), None);
}

#[test]
fn csv_export_mixes_models() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("mixed.csv");

    cmd()
        .arg("export")
        .arg(fixture("ase_mixed", "input.ase"))
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success();

    let csv = fs::read_to_string(&output).expect("read csv");
    assert!(csv.contains("Ink,CMYK,50.0,25.0,0.0,100.0,N/A,N/A"));
    assert!(csv.contains("Clay,LAB,75.0,20.5,-10.0,N/A,N/A,N/A"));
    assert!(!csv.contains("Grey"));
}

#[test]
fn default_output_sits_next_to_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("Tollens.ase");
    fs::copy(fixture("ase_mixed", "input.ase"), &input).expect("copy fixture");

    cmd().arg("export").arg(&input).assert().success();

    assert!(temp.path().join("Tollens.csv").is_file());
}

#[test]
fn stdout_outputs_json() {
    let assert = cmd()
        .arg("export")
        .arg(fixture("ase_mixed", "input.ase"))
        .arg("--stdout")
        .arg("--format")
        .arg("json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["format"], "ase");
    assert_eq!(value["records"].as_array().map(Vec::len), Some(3));
}

#[test]
fn stdout_and_output_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("colors.csv");

    cmd()
        .arg("export")
        .arg(fixture("aco_v1", "input.aco"))
        .arg("--stdout")
        .arg("-o")
        .arg(output)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn output_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("palette.aco");
    fs::copy(fixture("aco_v1", "input.aco"), &input).expect("copy fixture");

    cmd()
        .arg("export")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("output path must differ from input"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("colors.csv");

    cmd()
        .arg("export")
        .arg(fixture("aco_v1", "input.aco"))
        .arg("-o")
        .arg(output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn list_skipped_outputs_reasons() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("colors.csv");

    cmd()
        .arg("export")
        .arg(fixture("ase_mixed", "input.ase"))
        .arg("-o")
        .arg(output)
        .arg("--list-skipped")
        .assert()
        .success()
        .stderr(contains("Skipped entries:").and(contains("unsupported color mode 'Gray'")));
}

#[test]
fn strict_fails_when_entries_skipped() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("colors.csv");

    cmd()
        .arg("export")
        .arg(fixture("aco_v1", "input.aco"))
        .arg("-o")
        .arg(output)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("1 entries skipped"));
}

#[test]
fn truncated_file_fails_without_output() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("broken.ase");
    let output = temp.path().join("broken.csv");
    let bytes = fs::read(fixture("ase_mixed", "input.ase")).expect("read fixture");
    fs::write(&input, &bytes[..bytes.len() - 3]).expect("write truncated");

    cmd()
        .arg("export")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("truncated"));
    assert!(!output.exists());
}

#[test]
fn csv_export_without_rendered_colors_keeps_header() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("cmyk_only.aco");
    let output = temp.path().join("cmyk_only.csv");
    fs::write(
        &input,
        [0, 1, 0, 1, 0, 2, 0, 1, 0, 2, 0, 3, 0, 4],
    )
    .expect("write input");

    cmd()
        .arg("export")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).expect("read csv");
    assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["Name,Model,C1,C2,C3,C4,Hex,RVB"]);
}

#[test]
fn summary_reports_declared_and_non_color_counts() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("mixed.csv");

    cmd()
        .arg("export")
        .arg(fixture("ase_mixed", "input.ase"))
        .arg("-o")
        .arg(output)
        .assert()
        .success()
        .stderr(contains("ASE 1.0: 6 declared, 3 colors, 1 skipped, 2 non-color blocks"));
}
