//! Spreadsheet-driven IPv4 utilities.
//!
//! The core groups loose IPv4 addresses by /24 and finds the smallest
//! aligned block covering each group. Around it sit a CSV reader and
//! writer, a row exploder and a file-hash reputation client.

pub mod cli;
pub mod config;
pub mod error;
pub mod explode;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod reputation;

use error::TableError;
use processing::{aggregate_cells, Aggregation, Containment};
use std::path::Path;

/// Read the first column of `input`, aggregate it and write the records.
///
/// An input without any valid address still produces an output file
/// holding only the header row.
pub fn run_aggregate(
    input: &Path,
    output: &Path,
    has_headers: bool,
    containment: Containment,
) -> Result<Aggregation, TableError> {
    log::info!("#Start run_aggregate() {}", input.display());
    let cells = input::read_first_column(input, has_headers)?;
    let aggregation = aggregate_cells(&cells[..], containment);
    output::write_records(output, &aggregation.records)?;
    Ok(aggregation)
}
