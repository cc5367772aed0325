//! Per-line Unicode cleanup.
//!
//! Some exports put a narrow no-break space (U+202F) or a no-break space
//! (U+00A0) before `am`/`pm`. Left alone, those lines never match the header
//! shape and end up glued onto the previous message as body text, so every
//! line goes through [`normalize_line`] before classification.

use unicode_normalization::UnicodeNormalization;

/// U+202F, common between the clock reading and `am`/`pm`.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

/// U+00A0.
pub const NO_BREAK_SPACE: char = '\u{00A0}';

/// Whitespace as far as line handling is concerned: Unicode `White_Space`
/// plus the information separators U+001C..=U+001F.
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

/// Replaces no-break spaces with ASCII spaces, applies NFC and trims
/// everything [`is_line_space`] accepts.
///
/// The result is a fixed point: normalizing it again returns it unchanged.
///
/// # Example
///
/// ```rust
/// use chatfold::parsing::normalize_line;
///
/// let raw = "01/02/2023, 10:15\u{202F}am - Alice: Cafe\u{0301}\r\n";
/// assert_eq!(normalize_line(raw), "01/02/2023, 10:15 am - Alice: Caf\u{e9}");
/// ```
pub fn normalize_line(raw: &str) -> String {
    let composed: String = raw
        .chars()
        .map(|c| match c {
            NARROW_NO_BREAK_SPACE | NO_BREAK_SPACE => ' ',
            other => other,
        })
        .nfc()
        .collect();

    match composed.trim_matches(is_line_space) {
        trimmed if trimmed.len() == composed.len() => composed,
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_no_break_spaces() {
        assert_eq!(normalize_line("10:15\u{202F}pm"), "10:15 pm");
        assert_eq!(normalize_line("10:15\u{00A0}pm"), "10:15 pm");
    }

    #[test]
    fn test_composes_to_nfc() {
        assert_eq!(normalize_line("e\u{0301}"), "\u{e9}");
        assert_eq!(normalize_line("\u{e9}"), "\u{e9}");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_line("  hello world \r"), "hello world");
        assert_eq!(normalize_line("\u{202F}hello\u{00A0}"), "hello");
        assert_eq!(normalize_line("   "), "");
    }

    #[test]
    fn test_trims_information_separators() {
        assert_eq!(normalize_line("\u{1f}1/2/2023, 9:05 pm - Al: hi"), "1/2/2023, 9:05 pm - Al: hi");
        assert_eq!(normalize_line("\u{1c}\u{1d}hi\u{1e}"), "hi");
        assert!(is_line_space('\u{1e}'));
        assert!(!is_line_space('\u{1b}'));
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        assert_eq!(normalize_line("a  b\tc"), "a  b\tc");
    }

    #[test]
    fn test_is_idempotent() {
        let once = normalize_line(" 1/2/2023, 9:00\u{202F}AM - Zoe\u{0308}: hi\u{00A0}");
        assert_eq!(normalize_line(&once), once);
    }
}
