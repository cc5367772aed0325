//! The line classifier and its helpers.
//!
//! - [`normalize`] - per-line Unicode cleanup
//! - [`boundary`] - message header detection
//! - [`timestamp`] - date/time/period to ISO-8601
//! - [`resolver`] - sender, type and attachment resolution
//! - [`assembler`] - the state machine that folds lines into records

pub mod assembler;
pub mod boundary;
pub mod normalize;
pub mod resolver;
pub mod timestamp;

pub use assembler::{Assembler, AssemblerState, Provisional};
pub use boundary::{BODY_SEPARATOR, BoundaryMatch, DATE_SEPARATOR, decimal_digit, is_boundary, match_boundary};
pub use normalize::{is_line_space, normalize_line};
pub use resolver::{ATTACHMENT_MARKER, Resolution, SenderResolver};
pub use timestamp::{INVALID_TIMESTAMP_PREFIX, Timestamp, normalize_timestamp};
