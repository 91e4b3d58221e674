//! CSV table readers.

use crate::error::TableError;
use std::fs::File;
use std::path::Path;

fn open_reader(path: &Path, has_headers: bool) -> Result<csv::Reader<File>, TableError> {
    let file = File::open(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(file))
}

/// Decode one field; bytes that are not UTF-8 become replacement characters.
fn lossy_field(record: &csv::ByteRecord, i: usize) -> String {
    record
        .get(i)
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .unwrap_or_default()
}

/// Read the first column of a CSV file, one cell per row.
///
/// Rows without any field yield an empty cell. The header row is skipped
/// when `has_headers` is set. Only the first field is decoded, so other
/// columns may hold any encoding.
pub fn read_first_column(path: &Path, has_headers: bool) -> Result<Vec<String>, TableError> {
    let mut reader = open_reader(path, has_headers)?;
    let mut cells = Vec::new();

    for record in reader.byte_records() {
        let record = record.map_err(|e| TableError::csv(path, e))?;
        cells.push(lossy_field(&record, 0));
    }

    log::info!("Read {} rows from {}", cells.len(), path.display());
    Ok(cells)
}

/// Read the named columns of a CSV file with a header row.
///
/// Each returned row holds the cells in the order of `columns`; short rows
/// are padded with empty cells.
pub fn read_columns(path: &Path, columns: &[&str]) -> Result<Vec<Vec<String>>, TableError> {
    let mut reader = open_reader(path, true)?;
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| TableError::csv(path, e))?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut indexes = Vec::with_capacity(columns.len());
    for column in columns {
        let i = headers
            .iter()
            .position(|h| h.trim() == *column)
            .ok_or_else(|| TableError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })?;
        indexes.push(i);
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| TableError::csv(path, e))?;
        rows.push(indexes.iter().map(|&i| lossy_field(&record, i)).collect());
    }

    log::info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read file hashes from a `.txt` (one per line) or `.csv` (first column).
///
/// Blank entries are dropped.
pub fn read_hash_list(path: &Path) -> Result<Vec<String>, TableError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let entries = match extension.as_deref() {
        Some("txt") => std::fs::read_to_string(path)
            .map_err(|source| TableError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .lines()
            .map(str::to_string)
            .collect(),
        Some("csv") => read_first_column(path, true)?,
        _ => {
            return Err(TableError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    Ok(entries
        .into_iter()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect())
}
