use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use super::error::PrefixError;
use super::types::AddressFamily;
use super::util::{bits_to_ip, family_of, ip_to_bits, prefix_mask};

/// A CIDR prefix whose address has every bit past `len` cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    network: IpAddr,
    len: u8,
}

impl Prefix {
    pub fn new(addr: IpAddr, len: u8) -> Result<Self, PrefixError> {
        let family = family_of(&addr);
        if len > family.bit_len() {
            return Err(PrefixError::invalid(
                &format!("{addr}/{len}"),
                format!("prefix length out of range for {family}"),
            ));
        }
        let bits = ip_to_bits(&addr) & prefix_mask(len, family.bit_len());
        Ok(Self {
            network: bits_to_ip(bits, family),
            len,
        })
    }

    pub const fn network(&self) -> IpAddr {
        self.network
    }

    pub const fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn family(&self) -> AddressFamily {
        family_of(&self.network)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.len)
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let token = input.trim();

        let Some((addr_str, len_str)) = token.split_once('/') else {
            let addr: IpAddr = token
                .parse()
                .map_err(|_| PrefixError::invalid(token, "not an IP address"))?;
            return Err(PrefixError::MissingPrefixLength {
                address: token.to_string(),
                suggestion: format!("{token}/{}", family_of(&addr).host_suffix()),
            });
        };

        let addr: IpAddr = addr_str
            .parse()
            .map_err(|_| PrefixError::invalid(token, format!("bad address {addr_str:?}")))?;
        let len = parse_len(len_str).ok_or_else(|| {
            PrefixError::invalid(token, format!("bad prefix length {len_str:?}"))
        })?;

        Self::new(addr, len).map_err(|_| {
            PrefixError::invalid(
                token,
                format!("prefix length {len} out of range for {}", family_of(&addr)),
            )
        })
    }
}

// Decimal digits only, no sign and no leading zeros.
fn parse_len(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}
