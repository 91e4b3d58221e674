//! Result aggregation.
//!
//! Runs the full cells -> records pipeline and keeps run statistics.

use super::grouping::group_by_c_class;
use super::optimal::{find_optimal_subnet, Containment};
use super::split::split_cells;
use crate::models::{Group, OutputRecord, SubnetResult};

/// Counters for one aggregation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Cells read from the input column.
    pub cells: usize,
    /// Valid addresses, duplicates included.
    pub addresses: usize,
    /// Tokens dropped by the splitter.
    pub rejected: usize,
    /// C-class groups, one per output record.
    pub groups: usize,
}

/// Records in group order plus the counters of the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub records: Vec<OutputRecord>,
    pub stats: RunStats,
}

/// Format a subnet result as an output row.
pub fn to_record(result: &SubnetResult) -> OutputRecord {
    OutputRecord::from(result)
}

/// One record per group, in group order.
pub fn aggregate(groups: &[Group], containment: Containment) -> Vec<OutputRecord> {
    groups
        .iter()
        .map(|g| to_record(&find_optimal_subnet(g, containment)))
        .collect()
}

/// Split, group, and aggregate a column of raw cells.
pub fn aggregate_cells<S: AsRef<str>>(cells: &[S], containment: Containment) -> Aggregation {
    let split = split_cells(cells);
    let groups = group_by_c_class(&split.addresses);
    let records = aggregate(&groups, containment);

    let stats = RunStats {
        cells: cells.len(),
        addresses: split.addresses.len(),
        rejected: split.rejected,
        groups: groups.len(),
    };
    if split.rejected > 0 {
        log::info!("Dropped {} invalid address tokens", split.rejected);
    }
    if records.is_empty() {
        log::warn!("No valid IPv4 addresses in {} cells", cells.len());
    }

    Aggregation { records, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_cells() {
        let cells = [
            "10.0.0.1, 10.0.0.2",
            "192.168.1.7",
            "not-an-ip 10.0.0.2",
            "",
        ];
        let result = aggregate_cells(&cells, Containment::Block);

        assert_eq!(
            result.stats,
            RunStats {
                cells: 4,
                addresses: 4,
                rejected: 1,
                groups: 2,
            }
        );
        assert_eq!(result.records.len(), 2);

        let first = &result.records[0];
        assert_eq!(first.network_address, "10.0.0.0");
        assert_eq!(first.cidr, "/30");
        assert_eq!(first.usable_ip_count, 2);
        assert_eq!(first.included_ips, "10.0.0.1, 10.0.0.2, 10.0.0.2");

        let second = &result.records[1];
        assert_eq!(second.network_address, "192.168.1.7");
        assert_eq!(second.cidr, "/32");
    }

    #[test]
    fn test_aggregate_empty() {
        let cells: [&str; 2] = ["", "garbage"];
        let result = aggregate_cells(&cells, Containment::Block);
        assert!(result.records.is_empty());
        assert_eq!(result.stats.rejected, 1);
        assert_eq!(result.stats.groups, 0);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let cells = ["10.2.2.9;10.2.2.100", "10.2.3.1 10.2.2.1", "10.2.3.77"];
        assert_eq!(
            aggregate_cells(&cells, Containment::Block),
            aggregate_cells(&cells, Containment::Block)
        );
    }

    #[test]
    fn test_row_permutation_keeps_blocks() {
        let cells = ["10.2.2.9", "10.2.2.100", "10.2.3.1", "10.2.2.1", "10.2.3.77"];
        let reversed: Vec<&str> = cells.iter().rev().copied().collect();

        let key = |r: &OutputRecord| {
            (
                r.network_address.clone(),
                r.cidr.clone(),
                r.first_usable_ip.clone(),
                r.last_usable_ip.clone(),
            )
        };
        let mut a: Vec<_> = aggregate_cells(&cells, Containment::Block)
            .records
            .iter()
            .map(key)
            .collect();
        let mut b: Vec<_> = aggregate_cells(&reversed[..], Containment::Block)
            .records
            .iter()
            .map(key)
            .collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
