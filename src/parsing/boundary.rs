//! Message header detection.
//!
//! A header line has the shape
//!
//! ```text
//! D/M/YYYY, H:MM am - rest
//! ```
//!
//! with one or two digit day, month and hour, a four digit year, two digit
//! minutes and a case-insensitive `am`/`pm`. Digits may come from any
//! script with decimal digits (`٢`, `२`, fullwidth `２`), not only ASCII.
//! Whitespace after the comma is
//! required (any amount); whitespace around the period and the dash is
//! optional. Only the shape is checked here. Whether `31/02` is a real date is
//! decided later by [`normalize_timestamp`](super::normalize_timestamp).

/// Separates the date from the clock reading.
pub const DATE_SEPARATOR: char = ',';

/// Separates the time block from the message body.
pub const BODY_SEPARATOR: char = '-';

use super::normalize::is_line_space;

const DATE_FIELD_SEPARATOR: u8 = b'/';
const CLOCK_SEPARATOR: u8 = b':';

/// Code points of the digit zero of every Unicode decimal digit (`Nd`) run.
/// Each run is ten consecutive code points, zero through nine.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script, `None` for anything else.
///
/// ```rust
/// use chatfold::parsing::decimal_digit;
///
/// assert_eq!(decimal_digit('7'), Some(7));
/// assert_eq!(decimal_digit('\u{0662}'), Some(2)); // Arabic-Indic two
/// assert_eq!(decimal_digit('x'), None);
/// ```
pub fn decimal_digit(c: char) -> Option<u32> {
    let cp = u32::from(c);
    let run = DIGIT_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let value = cp - DIGIT_ZEROS[run];
    (value < 10).then_some(value)
}

/// The pieces of a matched header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryMatch<'a> {
    /// `D/M/YYYY` as written
    pub date: &'a str,
    /// `H:MM` as written
    pub time: &'a str,
    /// `am` or `pm` in the original case
    pub period: &'a str,
    /// Everything after the body separator
    pub rest: &'a str,
}

/// Matches a normalized line against the header shape.
///
/// Returns `None` for anything else; those lines are continuation text.
///
/// # Example
///
/// ```rust
/// use chatfold::parsing::match_boundary;
///
/// let m = match_boundary("01/02/2023, 10:15 am - Alice: Hello").unwrap();
/// assert_eq!((m.date, m.time, m.period), ("01/02/2023", "10:15", "am"));
/// assert_eq!(m.rest, "Alice: Hello");
///
/// assert!(match_boundary("Alice: 10:15 am - not a header").is_none());
/// ```
pub fn match_boundary(line: &str) -> Option<BoundaryMatch<'_>> {
    let mut scanner = Scanner::new(line);

    let date = scanner.capture(|s| {
        s.digits(1, 2)?;
        s.byte(DATE_FIELD_SEPARATOR)?;
        s.digits(1, 2)?;
        s.byte(DATE_FIELD_SEPARATOR)?;
        s.digits(4, 4)
    })?;

    scanner.literal(DATE_SEPARATOR)?;
    if scanner.whitespace() == 0 {
        return None;
    }

    let time = scanner.capture(|s| {
        s.digits(1, 2)?;
        s.byte(CLOCK_SEPARATOR)?;
        s.digits(2, 2)
    })?;

    scanner.whitespace();
    let period = scanner.capture(Scanner::period)?;

    scanner.whitespace();
    scanner.literal(BODY_SEPARATOR)?;
    scanner.whitespace();

    Some(BoundaryMatch {
        date,
        time,
        period,
        rest: scanner.remaining(),
    })
}

/// Returns `true` if the line has the header shape.
pub fn is_boundary(line: &str) -> bool {
    match_boundary(line).is_some()
}

/// Forward-only cursor over a line.
struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Runs `f` and returns the slice it consumed.
    fn capture(&mut self, f: impl FnOnce(&mut Self) -> Option<()>) -> Option<&'a str> {
        let start = self.pos;
        f(self)?;
        Some(&self.line[start..self.pos])
    }

    /// Consumes between `min` and `max` decimal digits.
    fn digits(&mut self, min: usize, max: usize) -> Option<()> {
        let (count, len) = self
            .remaining()
            .chars()
            .take(max)
            .take_while(|&c| decimal_digit(c).is_some())
            .fold((0, 0), |(count, len), c| (count + 1, len + c.len_utf8()));
        if count < min {
            return None;
        }
        self.pos += len;
        Some(())
    }

    fn byte(&mut self, expected: u8) -> Option<()> {
        (self.remaining().as_bytes().first() == Some(&expected)).then(|| self.pos += 1)
    }

    fn literal(&mut self, expected: char) -> Option<()> {
        self.remaining()
            .starts_with(expected)
            .then(|| self.pos += expected.len_utf8())
    }

    /// Consumes any run of whitespace and returns how many chars it was.
    fn whitespace(&mut self) -> usize {
        let mut count = 0;
        for c in self.remaining().chars().take_while(|&c| is_line_space(c)) {
            self.pos += c.len_utf8();
            count += 1;
        }
        count
    }

    /// `am` or `pm`, any case.
    fn period(&mut self) -> Option<()> {
        match self.remaining().as_bytes() {
            [first, second, ..]
                if matches!(first.to_ascii_lowercase(), b'a' | b'p')
                    && second.eq_ignore_ascii_case(&b'm') =>
            {
                self.pos += 2;
                Some(())
            }
            _ => None,
        }
    }
}
