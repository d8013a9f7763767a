//! Partitioning a subnet into blocks of unequal size.
//!
//! Blocks are packed largest first. Each block starts where the previous one
//! ended: the base is advanced by the previous block's size in the low bits,
//! while the top `len - 1` bits of the starting address stay fixed.

use super::prefix::subnet_mask;
use crate::models::{BitAddress, Block, CidrError, PrefixLength, MAX_LENGTH};
use itertools::Itertools;

/// Largest block, the whole IPv4 space.
const MAX_BLOCK_SIZE: u64 = 1 << MAX_LENGTH;

/// Prefix length covering exactly `size` addresses.
///
/// `size` must be a power of two from 2 up to 2^32.
pub fn block_prefix(size: u64) -> Result<PrefixLength, CidrError> {
    if size < 2 || size > MAX_BLOCK_SIZE || !size.is_power_of_two() {
        return Err(CidrError::InvalidBlockSize(size));
    }
    PrefixLength::new(MAX_LENGTH - size.trailing_zeros() as u8)
}

/// High bits kept fixed while packing under a /`len` parent, and the number
/// of addresses below them.
fn packing_window(len: PrefixLength) -> (u32, u64) {
    let fixed_len = len.saturating_sub(1);
    (subnet_mask(fixed_len).bits(), 1u64 << fixed_len.host_bits())
}

/// Base address of the block following one of `previous_size` at `previous_base`.
///
/// Returns `None` when advancing would carry into the fixed high bits.
pub fn next_block_base(
    previous_base: BitAddress,
    len: PrefixLength,
    previous_size: u64,
) -> Option<BitAddress> {
    let (fixed_mask, window) = packing_window(len);
    let offset = u64::from(previous_base.bits() & !fixed_mask) + previous_size;
    if offset >= window {
        return None;
    }
    Some(BitAddress::new(
        (previous_base.bits() & fixed_mask) | offset as u32,
    ))
}

/// Carve `block_sizes` out of the subnet starting at `base` with prefix `len`.
///
/// Sizes are validated up front, then emitted largest first. Duplicate sizes
/// each get their own block. No sizes gives no blocks.
///
/// # Examples
/// ```
/// use cidr_brewer::models::parse_address;
/// use cidr_brewer::processing::partition_blocks;
/// let (base, len) = parse_address("10.0.0.0/24").unwrap();
/// let blocks = partition_blocks(base, len.unwrap(), &[64, 128]).unwrap();
/// assert_eq!(blocks[0].to_string(), "10.0.0.0/25 (128 addresses)");
/// assert_eq!(blocks[1].to_string(), "10.0.0.128/26 (64 addresses)");
/// ```
pub fn partition_blocks(
    base: BitAddress,
    len: PrefixLength,
    block_sizes: &[u64],
) -> Result<Vec<Block>, CidrError> {
    let sizes = block_sizes
        .iter()
        .sorted_by(|a, b| b.cmp(a))
        .map(|&size| block_prefix(size).map(|prefix| (size, prefix)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut blocks = Vec::with_capacity(sizes.len());
    let mut previous_base = base;
    let mut previous_size = 0;
    for (size, prefix) in sizes {
        let block_base = next_block_base(previous_base, len, previous_size).ok_or(
            CidrError::BlocksExceedSpace {
                size,
                prefix: prefix.get(),
            },
        )?;
        if prefix < len {
            log::warn!(
                "Block of {size} addresses (/{prefix}) is larger than the parent /{len} subnet"
            );
        }

        let block = Block {
            size,
            base: block_base,
            prefix,
        };
        log::debug!("partition_blocks: {block}");
        blocks.push(block);

        previous_base = block_base;
        previous_size = size;
    }

    Ok(blocks)
}
