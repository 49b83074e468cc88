use strum_macros::{Display, EnumIter};

use super::error::PrefixError;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, EnumIter, Hash)]
pub enum AddressFamily {
    #[strum(to_string = "IPv4")]
    V4,
    #[strum(to_string = "IPv6")]
    V6,
}

impl AddressFamily {
    pub const fn bit_len(self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }

    /// Prefix length reverse zones are delegated at: /24 for IPv4, /64 for IPv6.
    pub const fn split_boundary(self) -> u8 {
        match self {
            Self::V4 => 24,
            Self::V6 => 64,
        }
    }

    /// Length that turns a bare address into a single-host prefix.
    pub const fn host_suffix(self) -> &'static str {
        match self {
            Self::V4 => "32",
            Self::V6 => "128",
        }
    }

    pub const fn from_bit_len(bits: u8) -> Result<Self, PrefixError> {
        match bits {
            32 => Ok(Self::V4),
            128 => Ok(Self::V6),
            _ => Err(PrefixError::UnsupportedAddressFamily(bits)),
        }
    }
}
