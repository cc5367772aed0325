//! Input decoding.
//!
//! Exports are read as UTF-8. If the bytes are not valid UTF-8 anywhere, the
//! whole input is decoded as Latin-1 instead; the choice is made once per
//! input, never per line.

use std::borrow::Cow;
use std::fmt;

/// The encoding an input was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEncoding::Utf8 => write!(f, "UTF-8"),
            SourceEncoding::Latin1 => write!(f, "Latin-1"),
        }
    }
}

/// Decodes raw export bytes, borrowing when the input is already UTF-8.
///
/// A leading UTF-8 byte order mark is dropped.
///
/// ```rust
/// use chatfold::decode::{SourceEncoding, decode_export};
///
/// let (text, encoding) = decode_export("caf\u{e9}".as_bytes());
/// assert_eq!((text.as_ref(), encoding), ("caf\u{e9}", SourceEncoding::Utf8));
///
/// let (text, encoding) = decode_export(b"caf\xe9");
/// assert_eq!((text.as_ref(), encoding), ("caf\u{e9}", SourceEncoding::Latin1));
/// ```
pub fn decode_export(bytes: &[u8]) -> (Cow<'_, str>, SourceEncoding) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (
            Cow::Borrowed(text.strip_prefix('\u{FEFF}').unwrap_or(text)),
            SourceEncoding::Utf8,
        ),
        Err(err) => {
            tracing::info!(
                valid_up_to = err.valid_up_to(),
                "input is not valid UTF-8, decoding as Latin-1"
            );
            (
                Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
                SourceEncoding::Latin1,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_is_borrowed() {
        let (text, encoding) = decode_export("Привет".as_bytes());
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "Привет");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_bom_is_stripped() {
        let (text, _) = decode_export(b"\xEF\xBB\xBFhello");
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_latin1_fallback_is_whole_input() {
        // valid UTF-8 "é" followed by a lone Latin-1 byte
        let bytes = b"\xC3\xA9 and \xE9";
        let (text, encoding) = decode_export(bytes);
        assert_eq!(encoding, SourceEncoding::Latin1);
        assert_eq!(text, "\u{C3}\u{A9} and \u{E9}");
    }

    #[test]
    fn test_latin1_covers_every_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        let (text, encoding) = decode_export(&bytes);
        assert_eq!(encoding, SourceEncoding::Latin1);
        assert_eq!(text.chars().count(), 256);
    }

    #[test]
    fn test_encoding_display() {
        assert_eq!(SourceEncoding::Utf8.to_string(), "UTF-8");
        assert_eq!(SourceEncoding::Latin1.to_string(), "Latin-1");
    }
}
