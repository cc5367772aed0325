//! Line classification and message assembly.
//!
//! The assembler is a two-state machine driven one line at a time:
//!
//! ```text
//!            header                    header
//!   Idle ─────────────▶ Open(record) ─────────────▶ Open(next)   (emit record)
//!    │                   │      ▲
//!    │ other line        │      │ other line: append to body
//!    ▼                   └──────┘
//!  (dropped)
//! ```
//!
//! The state is a plain value passed in and returned by [`Assembler::step`],
//! so the whole parse is a fold over the lines and any prefix of the input
//! yields a valid prefix of the result.

use crate::message::MessageRecord;

use super::boundary::match_boundary;
use super::normalize::normalize_line;
use super::resolver::{Resolution, SenderResolver};
use super::timestamp::{Timestamp, normalize_timestamp};

/// A record still collecting continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisional {
    timestamp: Timestamp,
    resolution: Resolution,
}

impl Provisional {
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Adds a continuation line, separated by a newline when the body
    /// already has text.
    fn append_line(&mut self, line: &str) {
        match &mut self.resolution {
            Resolution::Record(kind) => {
                let text = kind.text_mut();
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(line);
            }
            Resolution::Empty { sender } => {
                tracing::trace!(sender = %sender, "continuation of an empty message, ignored");
            }
        }
    }

    /// Turns the provisional record into its final form. Empty messages
    /// produce nothing.
    fn finalize(self) -> Option<MessageRecord> {
        match self.resolution {
            Resolution::Record(kind) => Some(MessageRecord::new(self.timestamp, kind)),
            Resolution::Empty { sender } => {
                tracing::debug!(sender = %sender, timestamp = %self.timestamp, "discarding empty message");
                None
            }
        }
    }
}

/// Assembler state between two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssemblerState {
    /// No header seen yet.
    #[default]
    Idle,
    /// A record is open and may still grow.
    Open(Provisional),
}

impl AssemblerState {
    pub fn is_open(&self) -> bool {
        matches!(self, AssemblerState::Open(_))
    }
}

/// Drives the line state machine with a borrowed [`SenderResolver`].
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'r> {
    resolver: &'r SenderResolver,
}

impl<'r> Assembler<'r> {
    pub fn new(resolver: &'r SenderResolver) -> Self {
        Self { resolver }
    }

    /// Feeds one raw line. Returns the next state and the record that the
    /// line finalized, if any.
    ///
    /// ```rust
    /// use chatfold::parsing::{Assembler, AssemblerState, SenderResolver};
    ///
    /// let resolver = SenderResolver::default();
    /// let assembler = Assembler::new(&resolver);
    ///
    /// let (state, done) = assembler.step(AssemblerState::Idle, "1/2/2023, 9:00 am - Al: Hi");
    /// assert!(done.is_none());
    /// let (state, done) = assembler.step(state, "there");
    /// assert!(done.is_none());
    ///
    /// let record = Assembler::finish(state).unwrap();
    /// assert_eq!(record.text(), "Hi\nthere");
    /// ```
    pub fn step(
        &self,
        state: AssemblerState,
        raw_line: &str,
    ) -> (AssemblerState, Option<MessageRecord>) {
        let line = normalize_line(raw_line);
        if line.is_empty() {
            return (state, None);
        }

        if let Some(header) = match_boundary(&line) {
            tracing::trace!(date = header.date, time = header.time, "message header");
            let finished = Self::finish(state);
            let next = Provisional {
                timestamp: normalize_timestamp(header.date, header.time, header.period),
                resolution: self.resolver.resolve(header.rest),
            };
            return (AssemblerState::Open(next), finished);
        }

        match state {
            AssemblerState::Idle => {
                tracing::debug!(line = %line, "dropping line before the first message header");
                (AssemblerState::Idle, None)
            }
            AssemblerState::Open(mut current) => {
                current.append_line(&line);
                (AssemblerState::Open(current), None)
            }
        }
    }

    /// Finalizes whatever is still open at the end of input.
    pub fn finish(state: AssemblerState) -> Option<MessageRecord> {
        match state {
            AssemblerState::Idle => None,
            AssemblerState::Open(current) => current.finalize(),
        }
    }

    /// Folds a whole line sequence into records.
    pub fn assemble<I, S>(&self, lines: I) -> Vec<MessageRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let state = lines
            .into_iter()
            .fold(AssemblerState::Idle, |state, line| {
                let (next, finished) = self.step(state, line.as_ref());
                records.extend(finished);
                next
            });
        records.extend(Self::finish(state));
        records
    }
}
