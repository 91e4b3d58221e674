//! Integration tests for ip-aggregation
//!
//! These tests verify the complete workflow from reading a CSV column to
//! writing aggregate records.

use ip_aggregation::{
    explode::{explode_file, ExplodeColumns},
    models::OutputRecord,
    processing::Containment,
    run_aggregate,
};
use std::path::Path;

fn read_records(path: &Path) -> Vec<OutputRecord> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open output");
    reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("Failed to parse output")
}

#[test]
fn test_full_workflow() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out.csv");

    let result = run_aggregate(
        Path::new("src/tests/test_data/ip_input_01.csv"),
        &output,
        true,
        Containment::Block,
    )
    .expect("Failed to aggregate");

    assert_eq!(result.stats.cells, 5);
    assert_eq!(result.stats.addresses, 8);
    assert_eq!(result.stats.rejected, 2);
    assert_eq!(result.stats.groups, 3);

    let records = read_records(&output);
    assert_eq!(records, result.records);

    // first-seen /24 order
    let networks: Vec<&str> = records.iter().map(|r| r.network_address.as_str()).collect();
    assert_eq!(networks, vec!["10.0.0.0", "192.168.1.7", "172.16.5.0"]);

    assert_eq!(records[0].cidr, "/30");
    assert_eq!(records[0].included_ips, "10.0.0.1, 10.0.0.2, 10.0.0.2, 10.0.0.1");

    assert_eq!(records[1].cidr, "/32");
    assert_eq!(records[1].usable_ip_count, 1);

    assert_eq!(records[2].subnet_mask, "255.255.255.0");
    assert_eq!(records[2].cidr, "/24");
    assert_eq!(records[2].first_usable_ip, "172.16.5.1");
    assert_eq!(records[2].last_usable_ip, "172.16.5.254");
    assert_eq!(records[2].usable_ip_count, 254);
    assert_eq!(records[2].included_ips, "172.16.5.200, 172.16.5.3, 172.16.5.130");
}

#[test]
fn test_output_is_byte_identical() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let input = Path::new("src/tests/test_data/ip_input_01.csv");

    run_aggregate(input, &first, true, Containment::Block).expect("Failed to aggregate");
    run_aggregate(input, &second, true, Containment::Block).expect("Failed to aggregate");

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn test_permuted_rows_keep_blocks() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");

    run_aggregate(
        Path::new("src/tests/test_data/ip_input_01.csv"),
        &a,
        true,
        Containment::Block,
    )
    .expect("Failed to aggregate");
    run_aggregate(
        Path::new("src/tests/test_data/ip_input_02_permuted.csv"),
        &b,
        true,
        Containment::Block,
    )
    .expect("Failed to aggregate");

    let blocks = |records: Vec<OutputRecord>| {
        let mut v: Vec<_> = records
            .into_iter()
            .map(|r| (r.network_address, r.cidr, r.first_usable_ip, r.last_usable_ip))
            .collect();
        v.sort();
        v
    };
    assert_eq!(blocks(read_records(&a)), blocks(read_records(&b)));
}

#[test]
fn test_empty_input_writes_header_only() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out.csv");

    let result = run_aggregate(
        Path::new("src/tests/test_data/ip_input_03_empty.csv"),
        &output,
        true,
        Containment::Block,
    )
    .expect("Empty input is not an error");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.rejected, 4);
    assert!(read_records(&output).is_empty());
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = run_aggregate(
        Path::new("src/tests/test_data/does_not_exist.csv"),
        &dir.path().join("out.csv"),
        true,
        Containment::Block,
    )
    .unwrap_err();
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn test_aggregate_then_explode() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let aggregated = dir.path().join("aggregated.csv");
    let exploded = dir.path().join("exploded.csv");

    run_aggregate(
        Path::new("src/tests/test_data/ip_input_01.csv"),
        &aggregated,
        true,
        Containment::Block,
    )
    .expect("Failed to aggregate");
    let count = explode_file(&aggregated, &exploded, &ExplodeColumns::default())
        .expect("Failed to explode");

    assert_eq!(count, 8, "one row per aggregated address");
    let text = std::fs::read_to_string(&exploded).unwrap();
    assert!(text.contains("172.16.5.0,255.255.255.0,172.16.5.130\n"));
}

#[test]
fn test_non_utf8_side_column_does_not_fail_batch() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    // comment column exported as GBK
    std::fs::write(&input, b"ips,comment\n10.0.0.1,\xB2\xE2\xCA\xD4\n10.0.0.2,ok\n").unwrap();

    let result =
        run_aggregate(&input, &output, true, Containment::Block).expect("Failed to aggregate");

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].cidr, "/30");
    assert_eq!(result.records[0].included_ips, "10.0.0.1, 10.0.0.2");
}
