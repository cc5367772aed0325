//! Output format selection.
//!
//! # Example
//!
//! ```rust
//! use chatfold::format::{OutputFormat, to_format_string};
//! use chatfold::ChatParser;
//!
//! let records = ChatParser::new().parse_str("1/2/2023, 9:00 am - Al: hi");
//!
//! let json = to_format_string(&records, OutputFormat::Json)?;
//! assert!(json.starts_with("[\n  {\n    \"timestamp\": \"2023-02-01T09:00:00\""));
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok::<(), chatfold::ChatfoldError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatfoldError, Result};
use crate::message::MessageRecord;

/// Output format for parsed records.
///
/// - [`Json`](OutputFormat::Json) - pretty-printed array, the format viewers load
/// - [`Jsonl`](OutputFormat::Jsonl) - one record object per line
/// - [`Csv`](OutputFormat::Csv) - semicolon-separated table (feature `csv-output`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// JSON array of records
    #[default]
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatfoldError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, jsonl, csv"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The format needs a feature that is not enabled
/// - The file cannot be written
pub fn write_to_format(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => crate::output::write_json(records, path),
        OutputFormat::Jsonl => crate::output::write_jsonl(records, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(records, path),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(csv_disabled()),
    }
}

/// Converts records to a string in the specified format.
pub fn to_format_string(records: &[MessageRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => crate::output::to_json(records),
        OutputFormat::Jsonl => crate::output::to_jsonl(records),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(records),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(csv_disabled()),
    }
}

#[cfg(not(feature = "csv-output"))]
fn csv_disabled() -> ChatfoldError {
    ChatfoldError::invalid_format(
        "output",
        "Output format CSV requires the 'csv-output' feature to be enabled",
    )
}
