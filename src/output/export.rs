//! CSV export of matched pages
//!
//! Layout: header `URL,Title,Description,H1,Status`, then one row per
//! matched record. Absent fields are written as `N/A`. Quoting follows
//! RFC 4180 (handled by the `csv` crate).

use crate::record::PageRecord;
use crate::SieveError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column names, in row order
pub const CSV_HEADER: [&str; 5] = ["URL", "Title", "Description", "H1", "Status"];

/// Writes records as CSV to any writer
///
/// # Arguments
///
/// * `writer` - Destination
/// * `records` - Rows to write, in order
pub fn write_csv<W: Write>(writer: W, records: &[PageRecord]) -> Result<(), SieveError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADER)?;
    for record in records {
        out.write_record(record.cells())?;
    }
    out.flush()?;
    Ok(())
}

/// Writes records as CSV to a file, replacing any existing file
pub fn write_csv_file(path: &Path, records: &[PageRecord]) -> Result<(), SieveError> {
    let file = File::create(path)?;
    write_csv(file, records)?;
    tracing::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Renders records as an in-memory CSV string
pub fn to_csv_string(records: &[PageRecord]) -> Result<String, SieveError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    String::from_utf8(buffer)
        .map_err(|e| SieveError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
