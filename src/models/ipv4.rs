//! IPv4 address and CIDR block utilities.
//!
//! Provides [`Ipv4`] struct for representing an aligned CIDR block,
//! along with the bit helpers used by the subnet finder.

use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are clamped.
///
/// # Examples
/// ```
/// use ip_aggregation::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Number of bits needed to represent `value`; `bit_length(0) == 0`.
pub fn bit_length(value: u32) -> u8 {
    (u32::BITS - value.leading_zeros()) as u8
}

/// The /24 network enclosing `addr`, used as a grouping key.
pub fn c_class_key(addr: Ipv4Addr) -> Ipv4Addr {
    cut_addr(addr, 24)
}

/// Aligned IPv4 block: network address plus prefix length.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    /// The network address (host bits zeroed).
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Block of length `mask` that encloses `addr`.
    ///
    /// `addr` does not need to be the block base; host bits are cleared.
    pub fn enclosing(addr: Ipv4Addr, mask: u8) -> Ipv4 {
        let mask = mask.min(MAX_LENGTH);
        Ipv4 {
            addr: cut_addr(addr, mask),
            mask,
        }
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// Dotted-decimal netmask, e.g. `255.255.255.252` for a /30.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(get_cidr_mask(self.mask))
    }

    /// Number of addresses in the block, `2^(32 - mask)`.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Check if an address falls within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// Check if an address falls strictly between network and broadcast.
    pub fn contains_usable(&self, ip: Ipv4Addr) -> bool {
        self.lo() < ip && ip < self.hi()
    }

    /// First address after the network address.
    ///
    /// Wraps to the network itself for a /32.
    pub fn first_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()).wrapping_add(1))
    }

    /// Last address before the broadcast address.
    pub fn last_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.hi()).wrapping_sub(1))
    }

    /// Usable host count: block size minus network and broadcast.
    pub fn usable_hosts(&self) -> u64 {
        self.block_size().saturating_sub(2)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
