//! # Chatfold
//!
//! Turns plain-text chat exports into an ordered list of structured
//! message records.
//!
//! ## Overview
//!
//! An export is a sequence of lines. Lines that start with a header like
//! `01/02/2023, 10:15 am - ` begin a new message; every other line continues
//! the message above it. Each finished message becomes a [`MessageRecord`]
//! with a normalized timestamp, an optional sender, a type
//! (`text`, `media` or `system`), its text and an optional attachment name.
//!
//! Parsing never fails on content: odd lines are dropped or folded into the
//! previous message, and timestamps that cannot be read are kept as a
//! marked fallback string. Only reading the input or writing the output can
//! return an error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatfold::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = ChatParser::new().parse("chat.txt".as_ref())?;
//!
//!     let stats = ParseStats::from_records(&records);
//!     println!("{} messages from {} people", stats.total, stats.senders.len());
//!
//!     write_json(&records, "chat.json")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Working with records
//!
//! ```rust
//! use chatfold::{ChatParser, MessageKind};
//!
//! let export = "\
//! 01/02/2023, 10:14 am - Messages and calls are end-to-end encrypted.
//! 01/02/2023, 10:15 am - Alice: Hello
//! 01/02/2023, 10:16 am - Bob: IMG-001.jpg (file attached)";
//!
//! for record in ChatParser::new().parse_str(export) {
//!     match &record.kind {
//!         MessageKind::Text { sender, text } => println!("{sender}: {text}"),
//!         MessageKind::Media { sender, filename, .. } => println!("{sender} sent {filename}"),
//!         MessageKind::System { text } => println!("* {text}"),
//!     }
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`], the entry point, and its lazy [`Records`](parser::Records) iterator
//! - [`parsing`] - line normalizer, header matcher, timestamp normalizer,
//!   sender resolver and the [`Assembler`](parsing::Assembler) state machine
//! - [`message`] - [`MessageRecord`], [`MessageKind`], [`MessageType`], [`MediaKind`]
//! - [`config`] - [`ParserConfig`] (system phrases, media extensions)
//! - [`decode`] - UTF-8 with whole-input Latin-1 fallback
//! - [`format`], [`output`] - JSON, JSONL and CSV writers
//! - [`stats`] - [`ParseStats`]
//! - [`error`] - [`ChatfoldError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod stats;

pub use config::ParserConfig;
pub use error::{ChatfoldError, Result};
pub use message::{MediaKind, MessageKind, MessageRecord, MessageType, Timestamp};
pub use parser::ChatParser;
pub use stats::ParseStats;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatfold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{ChatfoldError, Result};
    pub use crate::message::{MediaKind, MessageKind, MessageRecord, MessageType, Timestamp};
    pub use crate::parser::ChatParser;
    pub use crate::stats::ParseStats;

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
}
