//! Plaintext CSV export and import
//!
//! One row per record, columns in persisted order (title, account, secret,
//! category, notes), comma-delimited with minimal double-quote quoting and
//! no header row.

use std::io::{Read, Write};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::error::{LockerError, LockerResult};
use crate::models::{Record, FIELD_COUNT};

/// Write records as CSV rows
pub fn write_records<W: Write>(records: &[Record], writer: W) -> LockerResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote(b'"')
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    for record in records {
        csv_writer.write_record(record.fields())?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Read records from CSV rows
///
/// Rows are mapped positionally; extra columns are ignored and a row with
/// fewer than five columns is rejected.
pub fn read_records<R: Read>(reader: R) -> LockerResult<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote(b'"')
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_index, row) in csv_reader.records().enumerate() {
        let row = row?;
        if row.len() < FIELD_COUNT {
            return Err(LockerError::Format(format!(
                "CSV row {} has {} fields, expected {}",
                row_index + 1,
                row.len(),
                FIELD_COUNT
            )));
        }

        records.push(Record::new(&row[0], &row[1], &row[2], &row[3], &row[4]));
    }

    Ok(records)
}

/// Encode records to an in-memory CSV buffer
pub fn encode(records: &[Record]) -> LockerResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(buffer)
}
