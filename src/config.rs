//! Parser configuration.
//!
//! Chat export vocabulary varies by app version and locale, so the two
//! word lists the parser relies on are data rather than code:
//!
//! - **System phrases**: substrings that mark a header line as an app
//!   event ("created group", "left", ...) even when it contains a colon.
//! - **Media extensions**: file types that turn a `name (file attached)`
//!   body into a media record.
//!
//! # Example
//!
//! ```rust
//! use chatfold::config::ParserConfig;
//! use chatfold::ChatParser;
//!
//! let config = ParserConfig::new()
//!     .add_system_phrase("pinned a message")
//!     .add_media_extension("heic");
//!
//! let parser = ChatParser::with_config(config);
//! ```
//!
//! The same settings can be loaded from TOML; missing keys keep their
//! defaults:
//!
//! ```rust
//! use chatfold::config::ParserConfig;
//!
//! let config = ParserConfig::from_toml_str(r#"media_extensions = ["jpg", "heic"]"#)?;
//! assert_eq!(config.media_extensions, ["jpg", "heic"]);
//! assert!(!config.system_phrases.is_empty());
//! # Ok::<(), chatfold::ChatfoldError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatfoldError, Result};

/// System-event phrases in the order they are checked.
pub const DEFAULT_SYSTEM_PHRASES: &[&str] = &[
    "Messages and calls are end-to-end encrypted",
    "created group",
    "added",
    "removed",
    "left",
    "changed the subject",
    "changed this group's icon",
    "You deleted this message",
    "This message was deleted",
];

/// Attachment extensions recognized as media (image, video, audio, document).
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "gif", "mp4", "avi", "mov", "opus", "mp3", "m4a", "pdf", "doc",
    "docx",
];

/// Configuration for the line classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Case-insensitive substrings that mark a header line as a system event.
    pub system_phrases: Vec<String>,

    /// Case-insensitive file extensions (without the dot) accepted as media.
    pub media_extensions: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            system_phrases: DEFAULT_SYSTEM_PHRASES.iter().map(|s| (*s).to_string()).collect(),
            media_extensions: DEFAULT_MEDIA_EXTENSIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ChatfoldError::config(e, None))
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ChatfoldError::config(e, Some(path.to_path_buf())))
    }

    /// Replaces the system phrase list.
    #[must_use]
    pub fn with_system_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.system_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one system phrase.
    #[must_use]
    pub fn add_system_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.system_phrases.push(phrase.into());
        self
    }

    /// Replaces the media extension allow-list.
    #[must_use]
    pub fn with_media_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one media extension. A leading dot is ignored.
    #[must_use]
    pub fn add_media_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.media_extensions
            .push(extension.trim_start_matches('.').to_string());
        self
    }
}
