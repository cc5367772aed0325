//! CSV output writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::message::MessageRecord;

const HEADER: [&str; 5] = ["timestamp", "sender", "type", "text", "media"];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `timestamp`, `sender`, `type`, `text`, `media`
/// - Null sender/media: empty cell
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts records to a CSV string.
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    let csv = String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(csv)
}

fn write_records(records: &[MessageRecord], sink: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        let timestamp = record.timestamp.to_string();
        writer.write_record([
            timestamp.as_str(),
            record.sender().unwrap_or_default(),
            record.message_type().as_str(),
            record.text(),
            record.media().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
