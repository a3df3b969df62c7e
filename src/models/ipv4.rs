//! IPv4 network prefix in CIDR notation.
//!
//! Provides [`NetworkPrefix`], always held in canonical network form, along with
//! the mask arithmetic used for containment checks.

use crate::error::{AuditError, AuditResult};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use prefix_list_audit::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> AuditResult<u32> {
    if len > MAX_LENGTH {
        Err(AuditError::InvalidAddress(format!(
            "network length /{len} is too long"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// IPv4 network address plus mask length.
///
/// Equality and ordering follow the numeric network address, then the mask length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkPrefix {
    addr: Ipv4Addr,
    len: u8,
}

impl NetworkPrefix {
    /// The default route, `0.0.0.0/0`.
    pub const DEFAULT_ROUTE: NetworkPrefix = NetworkPrefix {
        addr: Ipv4Addr::UNSPECIFIED,
        len: 0,
    };

    /// Create a prefix from its parts, rejecting host bits set below the mask.
    pub fn from_parts(addr: Ipv4Addr, len: u8) -> AuditResult<NetworkPrefix> {
        let mask = get_cidr_mask(len)?;
        if u32::from(addr) & !mask != 0 {
            return Err(AuditError::InvalidAddress(format!(
                "{addr}/{len} has host bits set"
            )));
        }
        Ok(NetworkPrefix { addr, len })
    }

    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    pub fn parse(addr_cidr: &str) -> AuditResult<NetworkPrefix> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| AuditError::InvalidAddress(format!("{addr_cidr} is not a/len")))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| AuditError::InvalidAddress(format!("invalid address {addr}")))?;
        let len: u8 = len
            .parse()
            .map_err(|_| AuditError::InvalidAddress(format!("invalid mask length {len}")))?;
        NetworkPrefix::from_parts(addr, len)
    }

    /// The network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The mask length (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Numeric network address. Only meaningful for ordering.
    pub fn network_value(&self) -> u32 {
        u32::from(self.addr)
    }

    /// True if `other` is equal to or a subnet of `self`.
    pub fn contains(&self, other: &NetworkPrefix) -> bool {
        if other.len < self.len {
            return false;
        }
        // len <= 32 is guaranteed by construction
        let mask = get_cidr_mask(self.len).unwrap_or(u32::MAX);
        other.network_value() & mask == self.network_value()
    }

    pub fn is_default_route(&self) -> bool {
        *self == NetworkPrefix::DEFAULT_ROUTE
    }

    /// Full `a.b.c.d/len` text form.
    pub fn exploded(&self) -> String {
        self.to_string()
    }
}

impl FromStr for NetworkPrefix {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkPrefix::parse(s)
    }
}

impl Serialize for NetworkPrefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.exploded())
    }
}

impl<'de> Deserialize<'de> for NetworkPrefix {
    fn deserialize<D>(deserializer: D) -> Result<NetworkPrefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkPrefix::parse(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}
