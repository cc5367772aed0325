//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`FormatArg`] - `--format` values, convertible to [`OutputFormat`]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::format::OutputFormat;

/// Default output path. Its extension follows `--format` when left unchanged.
pub const DEFAULT_OUTPUT: &str = "chat.json";

/// Convert a plain-text chat export into structured JSON records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatfold")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatfold chat.txt
    chatfold chat.txt -o messages.json
    chatfold chat.txt --format csv
    chatfold chat.txt --config phrases.toml -v")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// TOML file with `system_phrases` / `media_extensions` overrides
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Output path with the extension adjusted when the default was kept.
    pub fn output_path(&self) -> PathBuf {
        if self.output.as_os_str() != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        self.output.with_extension(OutputFormat::from(self.format).extension())
    }

    /// Log filter directive used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// Pretty JSON array (default)
    #[default]
    Json,

    /// One JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}
