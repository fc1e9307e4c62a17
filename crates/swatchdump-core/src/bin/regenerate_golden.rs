//! Rewrite `tests/golden/*/expected_report.json` from the fixture inputs.
//!
//! Run from the workspace root. With `--check`, nothing is written and the
//! exit code is 1 when any stored report differs from a fresh decode.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use swatchdump_core::{SourceFormat, decode_swatch_file};

const GOLDEN_DIR: &str = "tests/golden";
const EXPECTED_NAME: &str = "expected_report.json";

fn main() -> ExitCode {
    let check = std::env::args().skip(1).any(|arg| arg == "--check");
    match run(Path::new(GOLDEN_DIR), check) {
        Ok(stale) if stale.is_empty() => ExitCode::SUCCESS,
        Ok(stale) => {
            for case in stale {
                eprintln!("stale: {}", case.display());
            }
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns the case directories whose stored report is out of date.
fn run(root: &Path, check: bool) -> Result<Vec<PathBuf>, String> {
    let mut stale = Vec::new();
    for case in case_dirs(root)? {
        let Some(input) = find_input(&case)? else {
            continue;
        };
        let fresh = render_report(&input)?;
        let expected = case.join(EXPECTED_NAME);
        let current = fs::read_to_string(&expected).unwrap_or_default();
        if current == fresh {
            continue;
        }
        if check {
            stale.push(case);
        } else {
            fs::write(&expected, fresh)
                .map_err(|err| format!("failed to write {}: {}", expected.display(), err))?;
            println!("updated {}", expected.display());
        }
    }
    Ok(stale)
}

fn case_dirs(root: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|err| format!("failed to read entry: {}", err))?
            .path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// The single `input.<aco|ase>` file of a case, if present.
fn find_input(case: &Path) -> Result<Option<PathBuf>, String> {
    let entries =
        fs::read_dir(case).map_err(|err| format!("failed to read {}: {}", case.display(), err))?;
    for entry in entries {
        let path = entry
            .map_err(|err| format!("failed to read entry: {}", err))?
            .path();
        let is_input = path.file_stem().is_some_and(|stem| stem == "input");
        if is_input && SourceFormat::from_extension(&path).is_some() {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn render_report(input: &Path) -> Result<String, String> {
    let report = decode_swatch_file(input)
        .map_err(|err| format!("decode failed for {}: {}", input.display(), err))?;
    let mut json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    json.push('\n');
    Ok(json)
}
