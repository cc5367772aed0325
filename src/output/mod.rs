//! Record writers.
//!
//! - [`write_json`] / [`to_json`] - pretty JSON array
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line
//! - [`write_csv`] / [`to_csv`] - semicolon CSV (requires `csv-output`)
//!
//! All writers keep the record order and the wire field order
//! `timestamp, sender, type, text, media`. Non-ASCII text is written as is.

#[cfg(feature = "csv-output")]
mod csv_writer;
mod json_writer;
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};
