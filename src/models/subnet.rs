//! Subnet result and output record models.

use super::Ipv4;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Covering block computed for one address group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Network address of the block.
    pub network: Ipv4Addr,
    /// Dotted-decimal netmask.
    pub netmask: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
    /// First usable address.
    pub first_usable: Ipv4Addr,
    /// Last usable address.
    pub last_usable: Ipv4Addr,
    /// Number of usable addresses.
    pub usable_count: u64,
    /// Group members in group order, not de-duplicated.
    pub members: Vec<Ipv4Addr>,
}

impl SubnetResult {
    /// Host route for a lone address: /32, no network or broadcast exclusion.
    pub fn host_route(addr: Ipv4Addr) -> SubnetResult {
        SubnetResult {
            network: addr,
            netmask: Ipv4Addr::BROADCAST,
            prefix: 32,
            first_usable: addr,
            last_usable: addr,
            usable_count: 1,
            members: vec![addr],
        }
    }

    /// Result for a converged block of two or more members.
    pub fn from_block(block: Ipv4, members: Vec<Ipv4Addr>) -> SubnetResult {
        SubnetResult {
            network: block.lo(),
            netmask: block.netmask(),
            prefix: block.mask,
            first_usable: block.first_usable(),
            last_usable: block.last_usable(),
            usable_count: block.usable_hosts(),
            members,
        }
    }

    /// The block as an [`Ipv4`].
    pub fn block(&self) -> Ipv4 {
        Ipv4::enclosing(self.network, self.prefix)
    }
}

/// One row of the aggregate output table.
///
/// Field order is the column order of the written file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub network_address: String,
    pub subnet_mask: String,
    /// `/` followed by the prefix length.
    pub cidr: String,
    pub first_usable_ip: String,
    pub last_usable_ip: String,
    pub usable_ip_count: u64,
    /// Member addresses joined with `", "`.
    pub included_ips: String,
}

impl From<&SubnetResult> for OutputRecord {
    fn from(result: &SubnetResult) -> Self {
        OutputRecord {
            network_address: result.network.to_string(),
            subnet_mask: result.netmask.to_string(),
            cidr: format!("/{}", result.prefix),
            first_usable_ip: result.first_usable.to_string(),
            last_usable_ip: result.last_usable.to_string(),
            usable_ip_count: result.usable_count,
            included_ips: result.members.iter().join(", "),
        }
    }
}
