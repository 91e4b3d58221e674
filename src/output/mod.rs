//! Output for aggregation, explode and lookup results.
//!
//! This module handles writing result tables:
//! - [`csv`] - CSV tables with fixed headers
//! - [`terminal`] - Terminal formatting and run summary

mod csv;
mod terminal;

pub use self::csv::{write_records, write_rows, TableRow};
pub use terminal::{format_field, print_summary, summary_lines};
