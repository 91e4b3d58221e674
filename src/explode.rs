//! Row exploding.
//!
//! Expands `network, mask, ip list` rows (the aggregate output layout)
//! into one row per listed address.

use crate::config::{EXPLODE_IPS_COLUMN, EXPLODE_MASK_COLUMN, EXPLODE_NETWORK_COLUMN};
use crate::error::TableError;
use crate::input::read_columns;
use crate::output::{write_rows, TableRow};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

/// Regex for dotted-quad candidates; octet ranges are not checked.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX
        .get_or_init(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("Invalid Regex"))
}

/// Column names read from the explode input.
#[derive(Debug, Clone)]
pub struct ExplodeColumns {
    pub network: String,
    pub mask: String,
    pub ips: String,
}

impl Default for ExplodeColumns {
    fn default() -> Self {
        ExplodeColumns {
            network: EXPLODE_NETWORK_COLUMN.to_string(),
            mask: EXPLODE_MASK_COLUMN.to_string(),
            ips: EXPLODE_IPS_COLUMN.to_string(),
        }
    }
}

/// One output row: the source network and mask with a single address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExplodedRow {
    pub network_address: String,
    pub subnet_mask: String,
    pub ip_address: String,
}

impl TableRow for ExplodedRow {
    const HEADERS: &'static [&'static str] = &["network_address", "subnet_mask", "ip_address"];
}

/// All dotted-quad substrings of `cell`, in order.
pub fn extract_ips(cell: &str) -> Vec<&str> {
    get_dotted_quad_regex()
        .find_iter(cell)
        .map(|m| m.as_str())
        .collect()
}

/// Expand one row; a cell with no addresses gives no rows.
pub fn explode_row(network: &str, mask: &str, ips: &str) -> Vec<ExplodedRow> {
    extract_ips(ips)
        .into_iter()
        .map(|ip| ExplodedRow {
            network_address: network.to_string(),
            subnet_mask: mask.to_string(),
            ip_address: ip.to_string(),
        })
        .collect()
}

/// Read `input`, explode every row and write the result to `output`.
///
/// Returns the number of rows written.
pub fn explode_file(
    input: &Path,
    output: &Path,
    columns: &ExplodeColumns,
) -> Result<usize, TableError> {
    let rows = read_columns(
        input,
        &[
            columns.network.as_str(),
            columns.mask.as_str(),
            columns.ips.as_str(),
        ],
    )?;

    let exploded: Vec<ExplodedRow> = rows
        .iter()
        .flat_map(|row| explode_row(&row[0], &row[1], &row[2]))
        .collect();

    log::info!(
        "Exploded {} rows into {} address rows",
        rows.len(),
        exploded.len()
    );
    write_rows(output, &exploded)?;
    Ok(exploded.len())
}
