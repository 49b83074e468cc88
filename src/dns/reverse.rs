use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Zone suffix appended to every label.
///
/// IPv6 zones are conventionally rooted at `ip6.arpa.`; this tool has always
/// emitted `in-addr.arpa.` for both families and existing consumers rely on it.
pub const REVERSE_SUFFIX: &str = "in-addr.arpa.";

// Octets and bytes that take part in a label: the /24 and /64 network portions.
const IPV4_LABEL_OCTETS: usize = 3;
const IPV6_LABEL_BYTES: usize = 8;

pub fn reverse_label(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => ipv4_label(*v4),
        IpAddr::V6(v6) => ipv6_label(v6),
    }
}

/// Decimal octets of the /24 network in reverse order; the host octet is never emitted.
pub fn ipv4_label(ip: Ipv4Addr) -> String {
    ip.octets()[..IPV4_LABEL_OCTETS]
        .iter()
        .rev()
        .map(|octet| format!("{octet}."))
        .collect::<String>()
        + REVERSE_SUFFIX
}

/// Nibbles of the /64 network in reverse order, low nibble of each byte first.
pub fn ipv6_label(ip: &Ipv6Addr) -> String {
    ip.octets()[..IPV6_LABEL_BYTES]
        .iter()
        .rev()
        .map(|byte| format!("{:x}.{:x}.", byte & 0x0F, byte >> 4))
        .collect::<String>()
        + REVERSE_SUFFIX
}
