//! The flat-file line codec.
//!
//! ```text
//! Alice;0123456789; 9999999999
//! Bob;
//! ```
//!
//! One record per line. The name is everything before the first `;`, taken
//! verbatim. Every following `;`-separated field is a phone number, trimmed of
//! surrounding whitespace. A record without phones is written with a bare
//! trailing `;`, and empty phone fields are ignored when reading so that form
//! reads back as a record with no phones. Names can never contain `;` or a
//! line break, so every record written here reads back unchanged.

use crate::error::Result;
use crate::model::Record;

pub const FIELD_SEPARATOR: char = ';';
pub const PHONE_SEPARATOR: &str = "; ";

/// Parses one line into a record. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Record>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let name = fields.next().unwrap_or_default();
    let mut record = Record::new(name)?;

    for field in fields.map(str::trim).filter(|f| !f.is_empty()) {
        record.add_phone(field)?;
    }

    Ok(Some(record))
}

/// Formats a record as a single line, including the trailing newline.
pub fn format_record(record: &Record) -> String {
    format!(
        "{}{}{}\n",
        record.name(),
        FIELD_SEPARATOR,
        record.joined_phones()
    )
}
