//! IPv4 address extraction from free-form text.

use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("ipv4 pattern is valid")
});

/// Every dotted-quad shaped token in `text`, in order of appearance.
///
/// Octets are not range-checked, so `999.1.1.1` is a candidate.
pub fn ipv4_candidates(text: &str) -> Vec<&str> {
    IPV4.find_iter(text).map(|m| m.as_str()).collect()
}

/// Candidates that are real IPv4 addresses.
pub fn ipv4_addresses(text: &str) -> Vec<Ipv4Addr> {
    IPV4.find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
