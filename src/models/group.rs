//! Address group sharing one /24 network.

use super::c_class_key;
use std::net::Ipv4Addr;

/// Non-empty, ordered collection of addresses sharing a /24.
///
/// Members keep insertion order; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    key: Ipv4Addr,
    members: Vec<Ipv4Addr>,
}

impl Group {
    /// Start a group from its first member.
    pub fn new(first: Ipv4Addr) -> Group {
        Group {
            key: c_class_key(first),
            members: vec![first],
        }
    }

    /// Add an address. Returns it back if it belongs to another /24.
    pub fn push(&mut self, addr: Ipv4Addr) -> Result<(), Ipv4Addr> {
        if c_class_key(addr) != self.key {
            return Err(addr);
        }
        self.members.push(addr);
        Ok(())
    }

    /// The /24 network this group is keyed by.
    pub fn key(&self) -> Ipv4Addr {
        self.key
    }

    pub fn members(&self) -> &[Ipv4Addr] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Never true: a group is created from its first member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Lowest member address.
    pub fn lo(&self) -> Ipv4Addr {
        self.members.iter().copied().min().unwrap_or(self.key)
    }

    /// Highest member address.
    pub fn hi(&self) -> Ipv4Addr {
        self.members.iter().copied().max().unwrap_or(self.key)
    }
}
