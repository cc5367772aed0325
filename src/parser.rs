//! High-level entry point for parsing chat exports.
//!
//! [`ChatParser`] owns the configuration and hands lines to the
//! [`Assembler`]. Inputs can be a file path, raw bytes, a string, or any
//! iterator of lines.
//!
//! # Example
//!
//! ```rust
//! use chatfold::{ChatParser, MessageType};
//!
//! let export = "\
//! 01/02/2023, 10:14 am - Messages and calls are end-to-end encrypted.
//! 01/02/2023, 10:15 am - Alice: Hello
//! there
//! 01/02/2023, 10:16 am - Bob: IMG-001.jpg (file attached)";
//!
//! let records = ChatParser::new().parse_str(export);
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].message_type(), MessageType::System);
//! assert_eq!(records[1].text(), "Hello\nthere");
//! assert_eq!(records[2].media(), Some("IMG-001.jpg"));
//! ```
//!
//! # Lazy parsing
//!
//! [`ChatParser::records`] yields each record as soon as the next header
//! closes it. Stopping early still gives correct records for everything
//! consumed so far:
//!
//! ```rust
//! use chatfold::ChatParser;
//!
//! let parser = ChatParser::new();
//! let lines = ["1/2/2023, 9:00 am - Al: one", "1/2/2023, 9:01 am - Al: two"];
//!
//! let first: Vec<_> = parser.records(lines).take(1).collect();
//! assert_eq!(first[0].text(), "one");
//! ```

use std::fs;
use std::path::Path;

use crate::config::ParserConfig;
use crate::decode::{SourceEncoding, decode_export};
use crate::error::Result;
use crate::message::MessageRecord;
use crate::parsing::{Assembler, AssemblerState, SenderResolver};

/// Parser for plain-text chat exports.
#[derive(Debug, Clone)]
pub struct ChatParser {
    config: ParserConfig,
    resolver: SenderResolver,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let resolver = SenderResolver::new(&config);
        Self { config, resolver }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// Fails only if the file can't be read; undecodable UTF-8 falls back to
    /// Latin-1 and malformed lines degrade instead of erroring.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let (records, encoding) = self.parse_bytes(&bytes);
        tracing::debug!(
            path = %path.display(),
            %encoding,
            records = records.len(),
            "parsed export"
        );
        Ok(records)
    }

    /// Decodes and parses raw bytes, reporting the encoding that was used.
    pub fn parse_bytes(&self, bytes: &[u8]) -> (Vec<MessageRecord>, SourceEncoding) {
        let (content, encoding) = decode_export(bytes);
        (self.parse_str(&content), encoding)
    }

    /// Parses export text. Lines may end in `\n`, `\r\n` or `\r`.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        self.parse_lines(split_lines(content))
    }

    /// Parses an already split sequence of lines.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<MessageRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Assembler::new(&self.resolver).assemble(lines)
    }

    /// Returns a lazy iterator of records over `lines`.
    pub fn records<I, S>(&self, lines: I) -> Records<'_, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Records {
            lines: lines.into_iter(),
            assembler: Assembler::new(&self.resolver),
            state: AssemblerState::Idle,
            finished: false,
        }
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits on `\n`, `\r\n` and bare `\r`. The empty pieces this produces for
/// `\r\n` are skipped by the assembler like any blank line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\n', '\r'])
}

/// Lazy record iterator returned by [`ChatParser::records`].
pub struct Records<'p, I> {
    lines: I,
    assembler: Assembler<'p>,
    state: AssemblerState,
    finished: bool,
}

impl<I, S> Iterator for Records<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = MessageRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            let state = std::mem::take(&mut self.state);
            let (next, finished) = self.assembler.step(state, line.as_ref());
            self.state = next;
            if finished.is_some() {
                return finished;
            }
        }

        self.finished = true;
        Assembler::finish(std::mem::take(&mut self.state))
    }
}
