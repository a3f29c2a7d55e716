//! IPv4 network values in CIDR notation.
//!
//! Provides [`Ipv4`], the canonical identity of a subnet, along with the
//! mask arithmetic needed to canonicalize it.

use crate::error::TopologyError;
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
/// use network_topology::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        return None;
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Some(mask as u32)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Some(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Some(Ipv4Addr::from((u32::from(addr) & mask) | !mask))
}

/// IPv4 address with a prefix length.
///
/// Ordering is by address, then mask. Equality is structural, so two values
/// only compare equal when both the address and the mask match; use
/// [`Ipv4::canonical`] before comparing networks.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Parse a CIDR string such as `"10.0.0.0/24"`.
    ///
    /// Host bits are kept as written; see [`Ipv4::canonical`].
    pub fn new(addr_cidr: &str) -> Result<Ipv4, TopologyError> {
        let malformed = |reason: String| TopologyError::MalformedCidr {
            cidr: addr_cidr.to_string(),
            reason,
        };

        let trimmed = addr_cidr.trim();
        let (addr, mask) = trimmed
            .split_once('/')
            .ok_or_else(|| malformed("expected address/prefix".to_string()))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| malformed(format!("invalid address '{addr}'")))?;
        // u8::from_str takes a leading '+'
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!("invalid prefix length '{mask}'")));
        }
        let mask: u8 = mask
            .parse()
            .map_err(|_| malformed(format!("invalid prefix length '{mask}'")))?;
        if mask > MAX_LENGTH {
            return Err(malformed(format!("prefix length {mask} is longer than 32")));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The network value with all host bits cleared.
    pub fn canonical(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        // mask is bounded by new() and by every constructor in this module
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// True when `addr` falls inside this network.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}
