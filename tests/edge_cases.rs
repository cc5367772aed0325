//! Edge cases: encodings, Unicode spacing, precedence rules, orphans and
//! empty messages.

use chatfold::decode::SourceEncoding;
use chatfold::parsing::{Assembler, AssemblerState, SenderResolver};
use chatfold::prelude::*;

fn parse(input: &str) -> Vec<MessageRecord> {
    ChatParser::new().parse_str(input)
}

// ============================================
// Encoding
// ============================================

#[test]
fn test_latin1_export_is_decoded_whole() {
    let bytes = b"01/02/2023, 10:15 am - Jos\xe9: Ol\xe1\nse\xf1or\n";
    let (records, encoding) = ChatParser::new().parse_bytes(bytes);

    assert_eq!(encoding, SourceEncoding::Latin1);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sender(), Some("José"));
    assert_eq!(records[0].text(), "Olá\nseñor");
}

#[test]
fn test_utf8_with_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("01/02/2023, 10:15 am - Alice: Hello".as_bytes());

    let (records, encoding) = ChatParser::new().parse_bytes(&bytes);
    assert_eq!(encoding, SourceEncoding::Utf8);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sender(), Some("Alice"));
}

// ============================================
// Unicode spacing and composition
// ============================================

#[test]
fn test_narrow_no_break_space_before_period() {
    let records = parse("01/02/2023, 10:15\u{202F}pm - Alice: Hello");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].timestamp.to_string(), "2023-02-01T22:15:00");
}

#[test]
fn test_no_break_space_everywhere() {
    let records = parse("01/02/2023,\u{00A0}10:15\u{00A0}am\u{00A0}-\u{00A0}Alice: Hello");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text(), "Hello");
}

#[test]
fn test_arabic_indic_digits_in_header() {
    let records = parse("١/٢/٢٠٢٣, 9:05 pm - Al: hi");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].timestamp.to_string(), "2023-02-01T21:05:00");
    assert_eq!(records[0].sender(), Some("Al"));
}

#[test]
fn test_leading_information_separator_is_trimmed() {
    let records = parse("\u{1f}1/2/2023, 9:05 pm - Al: hi\n\u{1c}more\u{1e}");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].timestamp.to_string(), "2023-02-01T21:05:00");
    assert_eq!(records[0].text(), "hi\nmore");
}

#[test]
fn test_decomposed_text_is_composed() {
    let records = parse("01/02/2023, 10:15 am - Zoe\u{0308}: Cafe\u{0301}");
    assert_eq!(records[0].sender(), Some("Zo\u{00EB}"));
    assert_eq!(records[0].text(), "Caf\u{00E9}");
}

#[test]
fn test_uppercase_period() {
    let records = parse("1/2/2023, 12:00 AM - Alice: midnight\n1/2/2023, 12:00 PM - Alice: noon");
    assert_eq!(records[0].timestamp.to_string(), "2023-02-01T00:00:00");
    assert_eq!(records[1].timestamp.to_string(), "2023-02-01T12:00:00");
}

// ============================================
// Header shape vs. calendar validity
// ============================================

#[test]
fn test_impossible_date_is_still_a_header() {
    let records = parse("01/02/2023, 10:15 am - Alice: one\n31/02/2023, 10:16 am - Bob: two");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text(), "one");
    assert_eq!(
        records[1].timestamp.to_string(),
        "Invalid timestamp: 31/02/2023 10:16 am"
    );
}

#[test]
fn test_month_thirteen_is_invalid() {
    let records = parse("13/13/2023, 10:15 am - Alice: Hi");
    assert!(!records[0].timestamp.is_valid());
}

#[test]
fn test_lookalike_lines_are_continuations() {
    let records = parse(
        "01/02/2023, 10:15 am - Alice: start\n\
         01/02/2023 10:15 am - no comma\n\
         [01/02/2023, 10:15 am] - bracketed\n\
         01/02/23, 10:15 am - short year\n\
         01/02/2023, 10:15 - no period\n\
         Bob: 01/02/2023, 10:15 am - embedded",
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text().lines().count(), 6);
    assert!(records[0].text().ends_with("Bob: 01/02/2023, 10:15 am - embedded"));
}

#[test]
fn test_colon_in_continuation_is_not_a_header() {
    let records = parse("01/02/2023, 10:15 am - Alice: list\nBob: not a sender");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text(), "list\nBob: not a sender");
}

// ============================================
// Resolver precedence
// ============================================

#[test]
fn test_system_phrase_beats_sender_split() {
    let records = parse("01/02/2023, 10:15 am - Alice: I left the keys at home");

    assert!(records[0].is_system());
    assert_eq!(records[0].sender(), None);
    assert_eq!(records[0].text(), "Alice: I left the keys at home");
}

#[test]
fn test_system_phrase_is_case_insensitive() {
    let records = parse("01/02/2023, 10:15 am - Bob: THIS MESSAGE WAS DELETED");
    assert!(records[0].is_system());
}

#[test]
fn test_unknown_attachment_extension_stays_text() {
    let records = parse("01/02/2023, 10:15 am - Bob: backup.zip (file attached)");
    assert_eq!(records[0].message_type(), MessageType::Text);
    assert_eq!(records[0].text(), "backup.zip (file attached)");
    assert_eq!(records[0].media(), None);
}

#[test]
fn test_attachment_marker_case_and_extension_case() {
    let records = parse("01/02/2023, 10:15 am - Bob: SCAN.PDF (File Attached)");
    assert_eq!(records[0].media(), Some("SCAN.PDF"));
    assert_eq!(records[0].text(), "");
}

#[test]
fn test_media_caption_from_continuation() {
    let records = parse("01/02/2023, 10:15 am - Bob: IMG-1.jpg (file attached)\nsunset!");
    assert_eq!(records[0].media(), Some("IMG-1.jpg"));
    assert_eq!(records[0].text(), "sunset!");
}

// ============================================
// Orphans and empty messages
// ============================================

#[test]
fn test_leading_orphans_are_dropped() {
    let records = parse("garbage before\n\n  \nmore\n01/02/2023, 10:15 am - Alice: Hello");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text(), "Hello");
}

#[test]
fn test_only_garbage_gives_nothing() {
    assert!(parse("no headers\nat all").is_empty());
    assert!(parse("").is_empty());
}

#[test]
fn test_empty_message_is_dropped_with_its_continuations() {
    let records = parse(
        "01/02/2023, 10:15 am - Alice:\n\
         stray line\n\
         01/02/2023, 10:16 am - Bob: Hi",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sender(), Some("Bob"));
}

#[test]
fn test_empty_message_at_end_of_input() {
    let records = parse("01/02/2023, 10:15 am - Alice: Hi\n01/02/2023, 10:16 am - Bob:   ");
    assert_eq!(records.len(), 1);
}

#[test]
fn test_blank_lines_inside_body_are_skipped() {
    let records = parse("01/02/2023, 10:15 am - Alice: a\n\n\nb");
    assert_eq!(records[0].text(), "a\nb");
}

#[test]
fn test_header_without_text_system() {
    let records = parse("01/02/2023, 10:15 am - ");
    // trailing space is trimmed before matching, leaving an empty body
    assert_eq!(records.len(), 1);
    assert!(records[0].is_system());
    assert_eq!(records[0].text(), "");
}

// ============================================
// Assembler as a fold
// ============================================

#[test]
fn test_early_stop_yields_prefix() {
    let lines = [
        "01/02/2023, 10:15 am - Alice: one",
        "cont",
        "01/02/2023, 10:16 am - Bob: two",
        "01/02/2023, 10:17 am - Carol: three",
    ];
    let full = ChatParser::new().parse_lines(lines);

    for n in 0..=lines.len() {
        let prefix = ChatParser::new().parse_lines(&lines[..n]);
        assert!(prefix.len() <= full.len());
        // every record but the last in-flight one is final
        if let Some((_, closed)) = prefix.split_last() {
            assert_eq!(closed, &full[..closed.len()]);
        }
    }
}

#[test]
fn test_step_by_step_transitions() {
    let resolver = SenderResolver::default();
    let assembler = Assembler::new(&resolver);

    let (state, out) = assembler.step(AssemblerState::Idle, "orphan");
    assert_eq!(state, AssemblerState::Idle);
    assert!(out.is_none());

    let (state, out) = assembler.step(state, "01/02/2023, 10:15 am - Alice: a");
    assert!(state.is_open());
    assert!(out.is_none());

    let (state, out) = assembler.step(state, "b");
    assert!(out.is_none());

    let (state, out) = assembler.step(state, "01/02/2023, 10:16 am - Bob: c");
    let closed = out.unwrap();
    assert_eq!(closed.text(), "a\nb");

    let last = Assembler::finish(state).unwrap();
    assert_eq!(last.sender(), Some("Bob"));
}
