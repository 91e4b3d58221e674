//! Optimal covering subnet for an address group.
//!
//! Starts from a bit-length guess of the host bits needed to span the
//! group, then widens the block one bit at a time until it really
//! contains every member.

use crate::models::{bit_length, Group, Ipv4, SubnetResult, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Smallest number of host bits in a multi-member block.
pub const MIN_HOST_BITS: u8 = 2;

/// What "the block contains the group" means during the correction loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Containment {
    /// Members lie anywhere in the block, network and broadcast included.
    #[default]
    Block,
    /// Members lie strictly between network and broadcast address.
    Usable,
}

impl Containment {
    fn holds(self, block: &Ipv4, members: &[Ipv4Addr]) -> bool {
        match self {
            Containment::Block => members.iter().all(|&ip| block.contains(ip)),
            Containment::Usable => members.iter().all(|&ip| block.contains_usable(ip)),
        }
    }
}

/// Initial prefix guess for a group spanning `lo..=hi`.
pub fn initial_prefix(lo: Ipv4Addr, hi: Ipv4Addr) -> u8 {
    let range = u32::from(hi).wrapping_sub(u32::from(lo));
    let host_bits = bit_length(range).max(MIN_HOST_BITS);
    MAX_LENGTH - host_bits
}

/// Widen from `prefix` towards /0 until `containment` holds.
///
/// Bounded by the prefix range; /0 is returned if nothing narrower fits.
fn converge(lo: Ipv4Addr, prefix: u8, members: &[Ipv4Addr], containment: Containment) -> Ipv4 {
    for mask in (0..=prefix).rev() {
        let block = Ipv4::enclosing(lo, mask);
        if containment.holds(&block, members) {
            if mask != prefix {
                log::trace!("Widened /{prefix} to {block} to contain all members");
            }
            return block;
        }
    }
    Ipv4::enclosing(lo, 0)
}

/// Compute the covering subnet for one group.
///
/// A single-member group is a /32 host route with no network or
/// broadcast exclusion; larger groups get an aligned block of at least
/// /30 whose usable range excludes network and broadcast.
pub fn find_optimal_subnet(group: &Group, containment: Containment) -> SubnetResult {
    let members = group.members();
    if let [single] = members {
        return SubnetResult::host_route(*single);
    }

    let (lo, hi) = (group.lo(), group.hi());
    let prefix = initial_prefix(lo, hi);
    let block = converge(lo, prefix, members, containment);

    log::debug!(
        "Group {key}/24: {count} members {lo}..{hi} -> {block}",
        key = group.key(),
        count = members.len(),
    );
    SubnetResult::from_block(block, members.to_vec())
}
