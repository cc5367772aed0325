//! Summary statistics for a parse result.

use crate::message::{MessageKind, MessageRecord};

/// Per-type counts of a record sequence.
///
/// # Example
///
/// ```rust
/// use chatfold::{ChatParser, ParseStats};
///
/// let records = ChatParser::new().parse_str(
///     "1/2/2023, 9:00 am - Al: hi\n1/2/2023, 9:01 am - Bo: a.jpg (file attached)",
/// );
/// let stats = ParseStats::from_records(&records);
///
/// assert_eq!((stats.text, stats.media, stats.system), (1, 1, 0));
/// assert_eq!(stats.senders, ["Al", "Bo"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total: usize,
    pub text: usize,
    pub media: usize,
    pub system: usize,
    /// Records whose timestamp fell back to the raw header values
    pub invalid_timestamps: usize,
    /// Distinct senders in order of first appearance
    pub senders: Vec<String>,
}

impl ParseStats {
    pub fn from_records(records: &[MessageRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            match &record.kind {
                MessageKind::Text { .. } => stats.text += 1,
                MessageKind::Media { .. } => stats.media += 1,
                MessageKind::System { .. } => stats.system += 1,
            }
            if !record.timestamp.is_valid() {
                stats.invalid_timestamps += 1;
            }
            if let Some(sender) = record.sender() {
                if !stats.senders.iter().any(|s| s == sender) {
                    stats.senders.push(sender.to_string());
                }
            }
        }

        stats
    }

    /// Share of authored (non-system) records, in percent.
    pub fn authored_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.text + self.media) as f64 / self.total as f64 * 100.0
    }
}
