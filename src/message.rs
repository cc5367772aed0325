//! Message records produced by the parser.
//!
//! Every record has a [`Timestamp`] and a [`MessageKind`]. The kind is a
//! closed enum, so "system messages have no sender" and "only media records
//! carry a filename" are enforced by the types instead of by convention.
//!
//! # Wire format
//!
//! Records serialize as flat JSON objects with a fixed key order and explicit
//! nulls, which is what downstream renderers consume:
//!
//! ```
//! use chatfold::ChatParser;
//!
//! let records = ChatParser::new().parse_str("01/02/2023, 10:15 am - Alice: Hello");
//! let json = serde_json::to_string(&records[0])?;
//!
//! assert_eq!(
//!     json,
//!     r#"{"timestamp":"2023-02-01T10:15:00","sender":"Alice","type":"text","text":"Hello","media":null}"#
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::parsing::Timestamp;

/// The `type` tag of a record on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Authored text message
    Text,
    /// Authored message with an attached file
    Media,
    /// App-generated notice (encryption banner, member changes, ...)
    System,
}

impl MessageType {
    /// Returns the lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Media => "media",
            MessageType::System => "system",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a record is, with only the fields that make sense for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// A message typed by a participant.
    Text { sender: String, text: String },

    /// A file sent by a participant. `caption` starts empty and only fills
    /// up from continuation lines that follow the attachment header.
    Media {
        sender: String,
        filename: String,
        caption: String,
    },

    /// A notice generated by the app.
    System { text: String },
}

impl MessageKind {
    pub fn message_type(&self) -> MessageType {
        match self {
            MessageKind::Text { .. } => MessageType::Text,
            MessageKind::Media { .. } => MessageType::Media,
            MessageKind::System { .. } => MessageType::System,
        }
    }

    pub fn sender(&self) -> Option<&str> {
        match self {
            MessageKind::Text { sender, .. } | MessageKind::Media { sender, .. } => Some(sender),
            MessageKind::System { .. } => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            MessageKind::Text { text, .. } | MessageKind::System { text } => text,
            MessageKind::Media { caption, .. } => caption,
        }
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            MessageKind::Text { text, .. } | MessageKind::System { text } => text,
            MessageKind::Media { caption, .. } => caption,
        }
    }

    pub fn media(&self) -> Option<&str> {
        match self {
            MessageKind::Media { filename, .. } => Some(filename),
            MessageKind::Text { .. } | MessageKind::System { .. } => None,
        }
    }
}

/// Rendering family of an attachment, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    /// Anything else (documents, archives, unknown types)
    File,
}

impl MediaKind {
    /// Classifies a filename by its extension, case-insensitively.
    ///
    /// ```
    /// use chatfold::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_filename("IMG-001.JPG"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_filename("PTT-20230201.opus"), MediaKind::Audio);
    /// assert_eq!(MediaKind::from_filename("report.pdf"), MediaKind::File);
    /// ```
    pub fn from_filename(filename: &str) -> Self {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" => MediaKind::Image,
            "mp4" | "avi" | "mov" | "webm" => MediaKind::Video,
            "opus" | "mp3" | "m4a" | "ogg" | "wav" => MediaKind::Audio,
            _ => MediaKind::File,
        }
    }
}

/// One finalized message from a chat export.
///
/// # Example
///
/// ```
/// use chatfold::{ChatParser, MessageType};
///
/// let records = ChatParser::new().parse_str(
///     "01/02/2023, 10:15 am - Bob: IMG-001.jpg (file attached)",
/// );
///
/// let record = &records[0];
/// assert_eq!(record.message_type(), MessageType::Media);
/// assert_eq!(record.sender(), Some("Bob"));
/// assert_eq!(record.media(), Some("IMG-001.jpg"));
/// assert_eq!(record.text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "WireRecord", from = "WireRecord")]
pub struct MessageRecord {
    pub timestamp: Timestamp,
    pub kind: MessageKind,
}

impl MessageRecord {
    pub fn new(timestamp: impl Into<Timestamp>, kind: MessageKind) -> Self {
        Self {
            timestamp: timestamp.into(),
            kind,
        }
    }

    /// Returns the author, or `None` for system records.
    pub fn sender(&self) -> Option<&str> {
        self.kind.sender()
    }

    /// Returns the body text (the caption for media records).
    pub fn text(&self) -> &str {
        self.kind.text()
    }

    /// Returns the attachment filename for media records.
    pub fn media(&self) -> Option<&str> {
        self.kind.media()
    }

    pub fn message_type(&self) -> MessageType {
        self.kind.message_type()
    }

    /// Returns the attachment's rendering family for media records.
    pub fn media_kind(&self) -> Option<MediaKind> {
        self.media().map(MediaKind::from_filename)
    }

    pub fn is_system(&self) -> bool {
        matches!(self.kind, MessageKind::System { .. })
    }
}

/// Flat serde shape of a record. Field order is the JSON key order.
#[derive(Serialize, Deserialize)]
struct WireRecord {
    timestamp: Timestamp,
    sender: Option<String>,
    #[serde(rename = "type")]
    message_type: MessageType,
    #[serde(default)]
    text: String,
    media: Option<String>,
}

impl From<MessageRecord> for WireRecord {
    fn from(record: MessageRecord) -> Self {
        let message_type = record.message_type();
        let (sender, text, media) = match record.kind {
            MessageKind::Text { sender, text } => (Some(sender), text, None),
            MessageKind::Media {
                sender,
                filename,
                caption,
            } => (Some(sender), caption, Some(filename)),
            MessageKind::System { text } => (None, text, None),
        };

        Self {
            timestamp: record.timestamp,
            sender,
            message_type,
            text,
            media,
        }
    }
}

impl From<WireRecord> for MessageRecord {
    fn from(wire: WireRecord) -> Self {
        let kind = match (wire.message_type, wire.sender, wire.media) {
            (MessageType::System, _, _) | (_, None, _) => MessageKind::System { text: wire.text },
            (MessageType::Media, Some(sender), Some(filename)) => MessageKind::Media {
                sender,
                filename,
                caption: wire.text,
            },
            (_, Some(sender), _) => MessageKind::Text {
                sender,
                text: wire.text,
            },
        };

        Self {
            timestamp: wire.timestamp,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> Timestamp {
        NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
            .into()
    }

    #[test]
    fn test_text_accessors() {
        let record = MessageRecord::new(
            ts(),
            MessageKind::Text {
                sender: "Alice".into(),
                text: "Hello".into(),
            },
        );
        assert_eq!(record.sender(), Some("Alice"));
        assert_eq!(record.text(), "Hello");
        assert_eq!(record.media(), None);
        assert_eq!(record.media_kind(), None);
        assert_eq!(record.message_type(), MessageType::Text);
        assert!(!record.is_system());
    }

    #[test]
    fn test_system_has_no_sender() {
        let record = MessageRecord::new(
            ts(),
            MessageKind::System {
                text: "Alice created group \"Trip\"".into(),
            },
        );
        assert_eq!(record.sender(), None);
        assert!(record.is_system());
    }

    #[test]
    fn test_serializes_with_explicit_nulls_in_order() {
        let record = MessageRecord::new(ts(), MessageKind::System { text: "Hi".into() });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"2023-02-01T10:15:00","sender":null,"type":"system","text":"Hi","media":null}"#
        );
    }

    #[test]
    fn test_media_serialization() {
        let record = MessageRecord::new(
            ts(),
            MessageKind::Media {
                sender: "Bob".into(),
                filename: "VID-7.mp4".into(),
                caption: String::new(),
            },
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "media");
        assert_eq!(value["media"], "VID-7.mp4");
        assert_eq!(value["text"], "");
        assert_eq!(record.media_kind(), Some(MediaKind::Video));
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let record = MessageRecord::new(
            ts(),
            MessageKind::Text {
                sender: "Иван".into(),
                text: "Привет 👋".into(),
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("Иван"));
        assert!(json.contains("Привет 👋"));
    }

    #[test]
    fn test_deserialize_reads_back() {
        let record = MessageRecord::new(
            Timestamp::Invalid {
                date: "31/02/2023".into(),
                time: "10:00".into(),
                period: "am".into(),
            },
            MessageKind::Media {
                sender: "Bob".into(),
                filename: "a.pdf".into(),
                caption: "see page 2".into(),
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_media_without_filename_is_text() {
        let json = r#"{"timestamp":"2023-02-01T10:15:00","sender":"Bob","type":"media","text":"x","media":null}"#;
        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.message_type(), MessageType::Text);
    }

    #[test]
    fn test_media_kind_from_filename() {
        assert_eq!(MediaKind::from_filename("a.PNG"), MediaKind::Image);
        assert_eq!(MediaKind::from_filename("a.webm"), MediaKind::Video);
        assert_eq!(MediaKind::from_filename("a.wav"), MediaKind::Audio);
        assert_eq!(MediaKind::from_filename("a.docx"), MediaKind::File);
        assert_eq!(MediaKind::from_filename("noext"), MediaKind::File);
    }

    #[test]
    fn test_message_type_display() {
        assert_eq!(MessageType::Text.to_string(), "text");
        assert_eq!(MessageType::Media.as_str(), "media");
        assert_eq!(MessageType::System.to_string(), "system");
    }
}
