//! C-class grouping.
//!
//! Buckets addresses by their enclosing /24 in first-seen key order.

use crate::models::{c_class_key, Group};
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Group addresses by /24.
///
/// Groups come out in the order their key first appears in `addrs`; the
/// map is only an index into the ordered vector.
pub fn group_by_c_class(addrs: &[Ipv4Addr]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<Ipv4Addr, usize> = HashMap::new();

    for &addr in addrs {
        match index.get(&c_class_key(addr)) {
            Some(&i) => {
                let pushed = groups[i].push(addr);
                debug_assert!(pushed.is_ok(), "{addr} indexed under the wrong /24");
            }
            None => {
                index.insert(c_class_key(addr), groups.len());
                groups.push(Group::new(addr));
            }
        }
    }

    log::debug!(
        "Grouped {} addresses into {} C-class groups",
        addrs.len(),
        groups.len()
    );
    groups
}
