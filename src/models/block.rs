//! One partition of a parent subnet.

use super::{BitAddress, PrefixLength};
use serde::Serialize;
use std::fmt;

/// A block carved out of a parent subnet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Block {
    /// Number of addresses in the block, a power of two.
    pub size: u64,
    /// First address of the block.
    pub base: BitAddress,
    /// Prefix length covering exactly `size` addresses.
    pub prefix: PrefixLength,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{} ({} addresses)",
            self.base.pretty_decimal(),
            self.prefix,
            self.size
        )
    }
}
