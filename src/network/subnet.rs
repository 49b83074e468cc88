use std::net::IpAddr;

use super::error::PrefixError;
use super::prefix::Prefix;
use super::types::AddressFamily;
use super::util::{bits_to_ip, ip_to_bits, prefix_mask};

/// Upper bound on zones a single prefix may expand into unless overridden.
pub const DEFAULT_MAX_BLOCKS: u128 = 1 << 24;

/// Number of split-boundary blocks covering `prefix`.
pub fn block_count(prefix: &Prefix) -> u128 {
    count_for(prefix.prefix_len(), prefix.family().split_boundary())
}

const fn count_for(len: u8, boundary: u8) -> u128 {
    if len < boundary {
        1 << (boundary - len)
    } else {
        1
    }
}

/// Network addresses of the boundary-aligned blocks inside a prefix, lowest first.
#[derive(Debug, Clone)]
pub struct Subnets {
    family: AddressFamily,
    base: u128,
    shift: u8,
    index: u128,
    count: u128,
}

impl Subnets {
    pub const fn remaining(&self) -> u128 {
        self.count - self.index
    }
}

impl Iterator for Subnets {
    type Item = IpAddr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let bits = self.base | (self.index << self.shift);
        self.index += 1;
        Some(bits_to_ip(bits, self.family))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        usize::try_from(self.remaining()).map_or((usize::MAX, None), |n| (n, Some(n)))
    }
}

pub fn split(prefix: &Prefix, max_blocks: u128) -> Result<Subnets, PrefixError> {
    let network = prefix.network();
    split_raw(
        ip_to_bits(&network),
        prefix.prefix_len(),
        prefix.family().bit_len(),
        max_blocks,
    )
}

/// Splits a raw `width`-bit value at its family's boundary.
///
/// Only 32 and 128 bit widths are meaningful; anything else is
/// reported as [`PrefixError::UnsupportedAddressFamily`].
pub fn split_raw(
    bits: u128,
    len: u8,
    width: u8,
    max_blocks: u128,
) -> Result<Subnets, PrefixError> {
    let family = AddressFamily::from_bit_len(width)?;
    if len > width {
        return Err(PrefixError::invalid(
            &format!("{}/{len}", bits_to_ip(bits, family)),
            format!("prefix length out of range for {family}"),
        ));
    }

    let boundary = family.split_boundary();
    let count = count_for(len, boundary);
    if count > max_blocks {
        return Err(PrefixError::TooManyBlocks {
            count,
            limit: max_blocks,
        });
    }

    Ok(Subnets {
        family,
        base: bits & prefix_mask(len, width),
        shift: width - boundary,
        index: 0,
        count,
    })
}
