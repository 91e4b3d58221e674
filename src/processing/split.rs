//! Address validation and cell splitting.
//!
//! Turns free-text spreadsheet cells into typed [`Ipv4Addr`] values.

use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Regex matching any run of comma, semicolon or whitespace separators.
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[,;\s]+").expect("Invalid Regex"))
}

/// Valid addresses from one or more cells, plus the count of dropped tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Accepted addresses in input order, duplicates kept.
    pub addresses: Vec<Ipv4Addr>,
    /// Number of non-empty tokens that were not dotted-quad IPv4 addresses.
    pub rejected: usize,
}

impl SplitOutcome {
    /// Append another outcome, keeping order.
    pub fn extend(&mut self, other: SplitOutcome) {
        self.addresses.extend(other.addresses);
        self.rejected += other.rejected;
    }
}

/// Parse a token as a dotted-quad IPv4 address.
pub fn parse_ip(token: &str) -> Option<Ipv4Addr> {
    token.trim().parse::<Ipv4Addr>().ok()
}

/// Check if a token is a dotted-quad with every octet in 0..=255.
pub fn is_valid_ip(token: &str) -> bool {
    parse_ip(token).is_some()
}

/// Split a cell on `,`, `;` and whitespace and keep the valid addresses.
///
/// Invalid tokens are dropped and counted, never reported as errors.
pub fn split_ips(cell: &str) -> SplitOutcome {
    let mut outcome = SplitOutcome::default();
    for token in get_separator_regex()
        .split(cell)
        .filter(|t| !t.is_empty())
    {
        match parse_ip(token) {
            Some(addr) => outcome.addresses.push(addr),
            None => {
                log::debug!("Dropping invalid address token {token:?}");
                outcome.rejected += 1;
            }
        }
    }
    outcome
}

/// Split every cell of a column, in order.
pub fn split_cells<S: AsRef<str>>(cells: &[S]) -> SplitOutcome {
    let mut outcome = SplitOutcome::default();
    for cell in cells {
        outcome.extend(split_ips(cell.as_ref()));
    }
    outcome
}
