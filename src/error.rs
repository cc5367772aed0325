//! Unified error types for chatfold.
//!
//! This module provides a single [`ChatfoldError`] enum that covers every
//! failure the library can report.
//!
//! # What can fail
//!
//! Parsing itself never fails: malformed timestamps degrade to a fallback
//! string, orphan lines are dropped and empty messages are discarded. Errors
//! only come from the stages around the parser:
//!
//! - **Reading input** (missing file, permission denied)
//! - **Loading configuration** (invalid TOML)
//! - **Writing output** (JSON/CSV serialization, disk errors)
//! - **Reading serialized records back** (unrecognized timestamp string)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatfold operations.
///
/// # Example
///
/// ```rust
/// use chatfold::error::Result;
/// use chatfold::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatfoldError>;

/// The error type for all chatfold operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatfoldError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The parser configuration could not be loaded.
    #[error("Invalid configuration{}: {source}", .path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Config {
        /// The configuration file, if the config came from disk
        path: Option<PathBuf>,
        /// The underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A serialized timestamp is neither ISO-8601 nor the fallback form.
    #[error("Invalid timestamp '{input}'. Expected YYYY-MM-DDTHH:MM:SS or 'Invalid timestamp: <date> <time> <period>'")]
    InvalidTimestamp {
        /// The string that failed to parse
        input: String,
    },

    /// A format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being identified (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

impl ChatfoldError {
    /// Creates a configuration error.
    pub fn config(source: toml::de::Error, path: Option<PathBuf>) -> Self {
        ChatfoldError::Config { path, source }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        ChatfoldError::InvalidTimestamp {
            input: input.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatfoldError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatfoldError::Io(_))
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, ChatfoldError::Config { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatfoldError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatfoldError::InvalidTimestamp { .. })
    }
}
