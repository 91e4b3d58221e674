//! Address aggregation pipeline.
//!
//! This module contains the aggregation logic, leaf first:
//! - [`split`] - validating and splitting raw cells into addresses
//! - [`grouping`] - bucketing addresses by /24
//! - [`optimal`] - finding the covering subnet of a group
//! - [`aggregate`] - turning subnet results into output records

pub mod aggregate;
pub mod grouping;
pub mod optimal;
pub mod split;

// Re-export public functions
pub use aggregate::{aggregate, aggregate_cells, to_record, Aggregation, RunStats};
pub use grouping::group_by_c_class;
pub use optimal::{find_optimal_subnet, initial_prefix, Containment, MIN_HOST_BITS};
pub use split::{is_valid_ip, parse_ip, split_cells, split_ips, SplitOutcome};
