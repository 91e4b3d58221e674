//! File-hash reputation lookups.
//!
//! - [`client`] - HTTP client for the report endpoint
//! - [`verdict`] - classification of a report

mod client;
mod verdict;

pub use client::{lookup_file, ReputationClient};
pub use verdict::{classify, LookupRow, Verdict};
