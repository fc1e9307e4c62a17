use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use swatchdump_core::Report;

#[derive(Parser, Debug)]
#[command(name = "swatchdump")]
#[command(version)]
#[command(
    about = "Export Adobe color swatch files (ACO / ASE) to CSV or JSON.",
    long_about = None,
    after_help = "Examples:\n  swatchdump export palette.aco\n  swatchdump export palette.ase -o colors.csv\n  swatchdump export palette.ase --format json --stdout --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a swatch file and write one row per color.
    #[command(alias = "convert")]
    Export {
        /// Path to a .aco or .ase file (a glob must match exactly one file)
        input: PathBuf,

        /// Output path (defaults to the input path with the format's extension)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Write the export to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any entry was skipped
        #[arg(long)]
        strict: bool,

        /// List skipped entries after decoding
        #[arg(long)]
        list_skipped: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

struct ExportOptions {
    output: Option<PathBuf>,
    stdout: bool,
    format: OutputFormat,
    pretty: bool,
    quiet: bool,
    strict: bool,
    list_skipped: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            stdout,
            format,
            pretty,
            quiet,
            strict,
            list_skipped,
        } => cmd_export(
            input,
            ExportOptions {
                output,
                stdout,
                format,
                pretty,
                quiet,
                strict,
                list_skipped,
            },
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_export(input: PathBuf, opts: ExportOptions) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;

    let output = if opts.stdout {
        None
    } else {
        let path = opts
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&resolved_input, opts.format));
        ensure_distinct_output(&path, &input_abs)?;
        Some(path)
    };

    let report = swatchdump_core::decode_swatch_file(&resolved_input)
        .context("swatch decoding failed")?;
    if !opts.quiet {
        eprintln!(
            "{} {}: {} declared, {} colors, {} skipped, {} non-color blocks",
            report.format.as_str(),
            report.format_version,
            report.declared_entries,
            report.records.len(),
            report.skipped.len(),
            report.non_color_blocks
        );
    }
    let body = render(&report, opts.format, opts.pretty)?;

    match output {
        None => print!("{}", body),
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&path, body)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            if !opts.quiet {
                eprintln!("OK: export written -> {}", path.display());
            }
        }
    }

    if opts.list_skipped && !opts.quiet {
        print_skipped(&report);
    }
    if opts.strict && !report.skipped.is_empty() {
        return Err(CliError::new(
            format!("{} entries skipped", report.skipped.len()),
            Some("use --list-skipped to inspect".to_string()),
        ));
    }
    Ok(())
}

fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(report)
            } else {
                serde_json::to_string(report)
            };
            json.context("JSON serialization failed").map_err(Into::into)
        }
        OutputFormat::Csv => render_csv(report).map_err(Into::into),
    }
}

fn render_csv(report: &Report) -> Result<String> {
    // Header written by hand so palettes with no rendered colors still get one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(swatchdump_core::COLUMNS)
        .context("CSV serialization failed")?;
    for row in swatchdump_core::to_rows(&report.records) {
        writer.serialize(row).context("CSV serialization failed")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("CSV flush failed: {}", err.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

fn print_skipped(report: &Report) {
    eprintln!("Skipped entries:");
    for entry in &report.skipped {
        eprintln!(
            "  #{} @ {}: {}{}",
            entry.index,
            entry.offset,
            entry.reason,
            entry
                .name
                .as_deref()
                .map(|name| format!(" ({})", name))
                .unwrap_or_default()
        );
    }
}

fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

fn ensure_distinct_output(output: &Path, input_abs: &Path) -> Result<(), CliError> {
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A missing parent is created later and cannot contain the input.
    let Ok(parent_abs) = fs::canonicalize(parent) else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid output path: {}", output.display()))?;
    if parent_abs.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .aco or .ase file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .aco or .ase file".to_string()),
        ));
    }
    if swatchdump_core::SourceFormat::from_extension(input).is_none() {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .aco or .ase file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected .aco or .ase".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single swatch file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
