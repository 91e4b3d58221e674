//! Domain models for IP aggregation.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - aligned CIDR block with bit helpers
//! - [`Group`] - addresses sharing one /24
//! - [`SubnetResult`] and [`OutputRecord`] - covering block and its output row

mod group;
mod ipv4;
mod subnet;

// Re-export public types
pub use group::Group;
pub use ipv4::{
    bit_length, broadcast_addr, c_class_key, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH,
};
pub use subnet::{OutputRecord, SubnetResult};
