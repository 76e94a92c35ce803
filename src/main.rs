//! structdiff command-line interface.
//!
//! Wires the library together: parse two files, compute the semantic diff
//! (or the side-by-side textual diff with `--text`), apply path filters,
//! and format the result.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use structdiff::{
    compare_documents, compare_text, filter_diff, format_diff, format_text_diff, DiffOptions,
    FilterConfig, FormatHint, OutputFormat, OutputOptions,
};

/// structdiff - structural diff for JSON and YAML
///
/// Compares two documents semantically, showing meaningful changes while
/// ignoring formatting. Equivalence rules (key order, array order,
/// whitespace, case) are individually selectable.
#[derive(Parser)]
#[command(name = "structdiff")]
#[command(version)]
#[command(about = "Structural diff for JSON and YAML", long_about = None)]
struct Cli {
    /// First file to compare
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second file to compare
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Show a side-by-side textual diff of the canonicalized documents
    /// instead of the semantic change list
    #[arg(long)]
    text: bool,

    /// Attach word-level detail to modified line pairs (textual mode)
    #[arg(long)]
    word_diff: bool,

    /// Ignore object key order in the canonical text form
    #[arg(long)]
    ignore_key_order: bool,

    /// Treat arrays as unordered
    #[arg(long)]
    ignore_array_order: bool,

    /// Ignore whitespace differences in strings
    #[arg(long)]
    ignore_whitespace: bool,

    /// Ignore case differences in strings
    #[arg(long)]
    ignore_case: bool,

    /// Path pattern to exclude from the result (repeatable)
    #[arg(long = "ignore", value_name = "PATTERN")]
    ignore_patterns: Vec<String>,

    /// Path pattern to restrict the result to (repeatable)
    #[arg(long = "only", value_name = "PATTERN")]
    only_patterns: Vec<String>,

    /// Maximum length for displayed values
    #[arg(long, default_value = "80")]
    max_value_length: usize,

    /// Verbose output (show progress)
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (only show changes, suppress summary)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.verbose {
        eprintln!("Reading {}...", cli.file1.display());
    }
    let left = fs::read_to_string(&cli.file1)
        .with_context(|| format!("Failed to read first file: {}", cli.file1.display()))?;

    if cli.verbose {
        eprintln!("Reading {}...", cli.file2.display());
    }
    let right = fs::read_to_string(&cli.file2)
        .with_context(|| format!("Failed to read second file: {}", cli.file2.display()))?;

    let options = DiffOptions {
        ignore_key_order: cli.ignore_key_order,
        ignore_array_order: cli.ignore_array_order,
        ignore_whitespace: cli.ignore_whitespace,
        ignore_case: cli.ignore_case,
        show_word_diff: cli.word_diff,
        ..Default::default()
    };

    let left_hint = hint_for(&cli.file1);
    let right_hint = hint_for(&cli.file2);
    let output_format: OutputFormat = cli.format.into();

    if cli.text {
        let result = compare_text(&left, &right, left_hint, right_hint, &options);
        let output =
            format_text_diff(&result, &output_format).context("Failed to format text diff")?;
        println!("{}", output);
        return Ok(if result.has_differences { 1 } else { 0 });
    }

    if cli.verbose {
        eprintln!("Computing diff...");
    }
    let mut diff = compare_documents(&left, &right, left_hint, right_hint, &options);

    if !cli.ignore_patterns.is_empty() || !cli.only_patterns.is_empty() {
        let mut filters = FilterConfig::new();
        for pattern in &cli.ignore_patterns {
            filters = filters.ignore(pattern);
        }
        for pattern in &cli.only_patterns {
            filters = filters.only(pattern);
        }
        diff = filter_diff(&diff, &filters);
    }

    let output_options = OutputOptions {
        max_value_length: cli.max_value_length,
    };
    let output =
        format_diff(&diff, &output_format, &output_options).context("Failed to format diff")?;

    if !cli.quiet {
        println!("{}", output);
    } else {
        for line in output.lines() {
            if !line.starts_with("Summary:") && !line.trim().is_empty() {
                println!("{}", line);
            }
        }
    }

    Ok(if diff.is_identical { 0 } else { 1 })
}

fn hint_for(path: &Path) -> FormatHint {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("json") => FormatHint::Json,
        Some("yaml") | Some("yml") => FormatHint::Yaml,
        _ => FormatHint::Auto,
    }
}
