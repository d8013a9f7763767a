//! Smallest common subnet for two addresses.

use super::prefix::{is_reserved, network_id, subnet_mask};
use crate::models::{BitAddress, PrefixLength, MAX_LENGTH};

/// Longest prefix shared by `a` and `b` under which neither is reserved.
///
/// Scans from /31 down. Falls back to /0 when no length passes.
pub fn largest_shared_prefix(a: BitAddress, b: BitAddress) -> PrefixLength {
    let len = (0..MAX_LENGTH)
        .rev()
        .filter_map(|len| PrefixLength::new(len).ok())
        .find(|&len| {
            network_id(a, len) == network_id(b, len)
                && !is_reserved(a, len)
                && !is_reserved(b, len)
        })
        .unwrap_or_default();
    log::debug!("largest_shared_prefix({a}, {b}) = /{len}");
    len
}

/// Subnet mask of [`largest_shared_prefix`].
pub fn largest_subnet_mask(a: BitAddress, b: BitAddress) -> BitAddress {
    subnet_mask(largest_shared_prefix(a, b))
}
