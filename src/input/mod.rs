//! Tabular input.
//!
//! Spreadsheets arrive as CSV exports:
//! - [`csv`] - first-column and named-column readers

mod csv;

pub use self::csv::{read_columns, read_first_column, read_hash_list};
