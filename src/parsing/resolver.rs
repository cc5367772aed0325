//! Sender, type and attachment resolution for header lines.
//!
//! Given the body after a header's `-` separator, [`SenderResolver`] decides
//! what kind of message it is. The checks run in a fixed order:
//!
//! 1. No colon at all: system notice.
//! 2. A configured system phrase anywhere in the body: system notice, even if
//!    there is a colon. `"Alice: I left the keys"` is therefore a system
//!    notice because it contains "left"; this mirrors how the exports have
//!    always been read and is kept on purpose.
//! 3. Split on the first colon into sender and rest.
//! 4. `name.ext (file attached)` with an allowed extension: media.
//! 5. Non-empty rest: text. Empty rest: [`Resolution::Empty`].

use crate::config::ParserConfig;
use crate::message::MessageKind;

/// Trailing marker of an attachment line.
pub const ATTACHMENT_MARKER: &str = "(file attached)";

const SENDER_SEPARATOR: char = ':';

/// Outcome of resolving a header body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record that will be emitted once finalized.
    Record(MessageKind),

    /// `Sender:` with nothing after it. Never emitted.
    Empty { sender: String },
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        matches!(self, Resolution::Empty { .. })
    }
}

/// Splits header bodies into sender, type, text and attachment.
///
/// Phrases and extensions are lowercased once at construction so each
/// lookup only lowercases the input.
///
/// # Example
///
/// ```rust
/// use chatfold::parsing::{Resolution, SenderResolver};
/// use chatfold::MessageKind;
///
/// let resolver = SenderResolver::default();
///
/// assert_eq!(
///     resolver.resolve("Alice: Hello"),
///     Resolution::Record(MessageKind::Text { sender: "Alice".into(), text: "Hello".into() })
/// );
/// assert_eq!(
///     resolver.resolve("Bob added Carol"),
///     Resolution::Record(MessageKind::System { text: "Bob added Carol".into() })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SenderResolver {
    system_phrases: Vec<String>,
    media_extensions: Vec<String>,
}

impl SenderResolver {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            system_phrases: config
                .system_phrases
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_lowercase())
                .collect(),
            media_extensions: config
                .media_extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Resolves the body of a header line. Total: every input gets an outcome.
    pub fn resolve(&self, body: &str) -> Resolution {
        let (sender, rest) = match body.split_once(SENDER_SEPARATOR) {
            Some(parts) if !self.is_system_event(body) => parts,
            _ => {
                return Resolution::Record(MessageKind::System {
                    text: body.trim().to_string(),
                });
            }
        };
        let sender = sender.trim().to_string();
        let rest = rest.trim();

        if let Some(filename) = self.attachment(rest) {
            return Resolution::Record(MessageKind::Media {
                sender,
                filename: filename.to_string(),
                caption: String::new(),
            });
        }

        if rest.is_empty() {
            Resolution::Empty { sender }
        } else {
            Resolution::Record(MessageKind::Text {
                sender,
                text: rest.to_string(),
            })
        }
    }

    /// Returns `true` if any configured phrase occurs in `body`, ignoring case.
    pub fn is_system_event(&self, body: &str) -> bool {
        if self.system_phrases.is_empty() {
            return false;
        }
        let lowered = body.to_lowercase();
        self.system_phrases
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    }

    /// Extracts the filename from `name (file attached)` when the extension
    /// is allowed. Unknown extensions return `None` so the line stays text.
    pub fn attachment<'a>(&self, rest: &'a str) -> Option<&'a str> {
        let rest = rest.trim_end();
        let split = rest.len().checked_sub(ATTACHMENT_MARKER.len())?;
        if !rest.is_char_boundary(split) || !rest[split..].eq_ignore_ascii_case(ATTACHMENT_MARKER) {
            return None;
        }

        let filename = rest[..split].trim();
        self.is_media_filename(filename).then_some(filename)
    }

    /// Checks the extension (after the last dot) against the allow-list.
    pub fn is_media_filename(&self, filename: &str) -> bool {
        let Some((_, extension)) = filename.rsplit_once('.') else {
            return false;
        };
        let extension = extension.to_lowercase();
        self.media_extensions.iter().any(|allowed| *allowed == extension)
    }
}

impl Default for SenderResolver {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}
