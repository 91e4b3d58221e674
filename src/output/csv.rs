//! CSV output for every table the tool writes.

use crate::error::TableError;
use crate::models::OutputRecord;
use serde::Serialize;
use std::path::Path;

/// A row type with a fixed column layout.
pub trait TableRow: Serialize {
    /// Column names, in serialization order.
    const HEADERS: &'static [&'static str];
}

impl TableRow for OutputRecord {
    const HEADERS: &'static [&'static str] = &[
        "network_address",
        "subnet_mask",
        "cidr",
        "first_usable_ip",
        "last_usable_ip",
        "usable_ip_count",
        "included_ips",
    ];
}

/// Write rows to `path`, header first.
///
/// The header is written even when `rows` is empty.
pub fn write_rows<T: TableRow>(path: &Path, rows: &[T]) -> Result<(), TableError> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| TableError::csv(path, e))?;

    // -- header
    w.write_record(T::HEADERS)
        .map_err(|e| TableError::csv(path, e))?;
    for row in rows {
        w.serialize(row).map_err(|e| TableError::csv(path, e))?;
    }
    w.flush().map_err(|e| TableError::csv(path, csv::Error::from(e)))?;

    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write aggregate records.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<(), TableError> {
    write_rows(path, records)
}
