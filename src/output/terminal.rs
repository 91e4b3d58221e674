//! Terminal output utilities.
//!
//! Provides formatting helpers and the run summary printed after a batch.

use crate::processing::RunStats;
use colored::Colorize;
use std::path::Path;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Summary lines for an aggregation run.
pub fn summary_lines(stats: &RunStats, output: &Path) -> Vec<String> {
    vec![
        format!(
            "Processed {addresses} IP addresses from {cells} rows",
            addresses = stats.addresses,
            cells = stats.cells
        ),
        format!(
            "{groups} subnets, {rejected} invalid tokens dropped",
            groups = stats.groups,
            rejected = stats.rejected
        ),
        format!("Result saved to {}", output.display()),
    ]
}

/// Print the run summary to stdout.
pub fn print_summary(stats: &RunStats, output: &Path) {
    let lines = summary_lines(stats, output);
    let status = if stats.groups == 0 {
        "EMPTY".on_yellow()
    } else {
        "DONE".on_green()
    };
    for line in &lines {
        println!("#{status}# {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_summary_lines() {
        let stats = RunStats {
            cells: 3,
            addresses: 5,
            rejected: 1,
            groups: 2,
        };
        let lines = summary_lines(&stats, Path::new("out.csv"));
        assert_eq!(lines[0], "Processed 5 IP addresses from 3 rows");
        assert_eq!(lines[1], "2 subnets, 1 invalid tokens dropped");
        assert_eq!(lines[2], "Result saved to out.csv");
    }
}
