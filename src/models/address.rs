//! IPv4 addresses as fixed-width bit values, and slash notation parsing.
//!
//! Provides [`BitAddress`], [`PrefixLength`] and [`Cidr`] along with
//! [`parse_address`] which turns `a.b.c.d[/p]` text into them.

use super::CidrError;
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A 32-bit IPv4 address, most significant bit first.
///
/// `Display` renders the 32 character bit string, e.g.
/// `11000000101010000001001101100100`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct BitAddress(u32);

impl BitAddress {
    pub const fn new(bits: u32) -> BitAddress {
        BitAddress(bits)
    }

    /// The raw address bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Parse a 32 character string of `'0'` and `'1'`.
    ///
    /// # Examples
    /// ```
    /// use cidr_brewer::models::BitAddress;
    /// let addr = BitAddress::from_bit_str("11000000101010000000000100000001").unwrap();
    /// assert_eq!(addr.pretty_decimal(), "192.168.1.1");
    /// ```
    pub fn from_bit_str(bits: &str) -> Result<BitAddress, CidrError> {
        if bits.len() != MAX_LENGTH as usize || !bits.chars().all(|c| c == '0' || c == '1') {
            return Err(CidrError::MalformedAddress(format!(
                "expected 32 binary digits, got '{bits}'"
            )));
        }
        u32::from_str_radix(bits, 2)
            .map(BitAddress)
            .map_err(|e| CidrError::MalformedAddress(format!("{bits}: {e}")))
    }

    /// The four octets in network byte order.
    pub fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Dotted decimal form, e.g. `200.23.16.92`.
    pub fn pretty_decimal(self) -> String {
        self.octets().iter().join(".")
    }

    /// Dotted binary form, e.g. `11001000.00010111.00010000.01011100`.
    pub fn pretty_binary(self) -> String {
        self.octets()
            .iter()
            .map(|octet| format!("{octet:08b}"))
            .join(".")
    }

    /// Number of set bits, the prefix length when `self` is a mask.
    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }
}

impl From<Ipv4Addr> for BitAddress {
    fn from(addr: Ipv4Addr) -> Self {
        BitAddress(u32::from(addr))
    }
}

impl From<BitAddress> for Ipv4Addr {
    fn from(addr: BitAddress) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl fmt::Display for BitAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

impl Serialize for BitAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.pretty_decimal())
    }
}

/// Number of leading network bits, always within `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Default, Copy, Clone, Hash, Serialize)]
#[serde(transparent)]
pub struct PrefixLength(u8);

impl PrefixLength {
    pub const MAX: PrefixLength = PrefixLength(MAX_LENGTH);

    pub fn new(len: u8) -> Result<PrefixLength, CidrError> {
        if len > MAX_LENGTH {
            Err(CidrError::InvalidPrefixLength(format!(
                "{len} is longer than {MAX_LENGTH}"
            )))
        } else {
            Ok(PrefixLength(len))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// This prefix shortened by `bits`, stopping at /0.
    pub const fn saturating_sub(self, bits: u8) -> PrefixLength {
        PrefixLength(self.0.saturating_sub(bits))
    }

    /// Number of host bits left after the prefix.
    pub const fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl TryFrom<u8> for PrefixLength {
    type Error = CidrError;

    fn try_from(len: u8) -> Result<Self, Self::Error> {
        PrefixLength::new(len)
    }
}

impl FromStr for PrefixLength {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len: u8 = Some(s)
            .filter(|s| is_decimal(s))
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| CidrError::InvalidPrefixLength(format!("'{s}' is not a number")))?;
        PrefixLength::new(len)
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty and ASCII digits only, so no sign.
fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split `a.b.c.d[/p]` into its address bits and optional prefix length.
///
/// # Examples
/// ```
/// use cidr_brewer::models::parse_address;
/// let (addr, prefix) = parse_address("192.168.19.100/26").unwrap();
/// assert_eq!(addr.to_string(), "11000000101010000001001101100100");
/// assert_eq!(prefix.unwrap().get(), 26);
/// ```
pub fn parse_address(text: &str) -> Result<(BitAddress, Option<PrefixLength>), CidrError> {
    let text = text.trim();
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() > 2 {
        return Err(CidrError::MalformedAddress(format!(
            "{text}: more than one '/'"
        )));
    }

    let octets: Vec<&str> = parts[0].split('.').collect();
    if octets.len() != 4 {
        return Err(CidrError::MalformedAddress(format!(
            "{text}: expected 4 octets, found {}",
            octets.len()
        )));
    }
    let mut bits: u32 = 0;
    for octet in octets {
        let value: u8 = Some(octet)
            .filter(|o| is_decimal(o))
            .and_then(|o| o.parse().ok())
            .ok_or_else(|| {
                CidrError::MalformedAddress(format!("{text}: invalid octet '{octet}'"))
            })?;
        bits = (bits << 8) | u32::from(value);
    }

    let prefix = match parts.get(1) {
        Some(len) => Some(len.parse::<PrefixLength>()?),
        None => None,
    };

    log::trace!("parse_address({text}) -> {bits:032b} {prefix:?}");
    Ok((BitAddress(bits), prefix))
}

/// An address as given on the command line, with its optional prefix.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address bits.
    pub addr: BitAddress,
    /// The prefix length, when given in slash notation.
    pub prefix: Option<PrefixLength>,
}

impl Cidr {
    /// Create a new [`Cidr`] from `a.b.c.d` or `a.b.c.d/p`.
    pub fn new(text: &str) -> Result<Cidr, CidrError> {
        let (addr, prefix) = parse_address(text)?;
        Ok(Cidr { addr, prefix })
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.prefix {
            Some(prefix) => write!(f, "{}/{}", self.addr.pretty_decimal(), prefix),
            None => write!(f, "{}", self.addr.pretty_decimal()),
        }
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
