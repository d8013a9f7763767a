//! Report assembly.
//!
//! Turns the addresses given on the command line into report values that the
//! text and JSON writers render.

use super::blocks::partition_blocks;
use super::prefix::{
    broadcast_id, first_available, last_available, network_id, subnet_mask, subnet_size,
};
use super::supernet::largest_shared_prefix;
use crate::models::{BitAddress, Block, Cidr, CidrError, PrefixLength};
use serde::Serialize;

/// Network and host range of an address under a prefix length.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressDetails {
    pub prefix: PrefixLength,
    pub network_id: BitAddress,
    pub broadcast_id: BitAddress,
    pub first_available: BitAddress,
    pub last_available: BitAddress,
    pub subnet_size: i64,
}

impl AddressDetails {
    pub fn new(addr: BitAddress, len: PrefixLength) -> AddressDetails {
        AddressDetails {
            prefix: len,
            network_id: network_id(addr, len),
            broadcast_id: broadcast_id(addr, len),
            first_available: first_available(addr, len),
            last_available: last_available(addr, len),
            subnet_size: subnet_size(len),
        }
    }
}

/// One partitioned block with its own address details.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    #[serde(flatten)]
    pub block: Block,
    pub details: AddressDetails,
}

/// Everything shown for a single address in slash notation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SingleAddressReport {
    pub given: Cidr,
    pub subnet_mask: BitAddress,
    pub details: AddressDetails,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockReport>,
}

/// Everything shown for a pair of addresses.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressPairReport {
    pub given: [Cidr; 2],
    /// Only known when both addresses carry a prefix length.
    pub can_communicate: Option<bool>,
    pub shared_prefix: PrefixLength,
    pub shared_mask: BitAddress,
    /// Details of the first address under the shared prefix.
    pub details: AddressDetails,
}

/// Build the report for one address, optionally partitioned into blocks.
///
/// The address must be in slash notation. Blocks are packed starting from the
/// address as given.
pub fn single_address_report(
    addr_str: &str,
    block_sizes: Option<&[u64]>,
) -> Result<SingleAddressReport, CidrError> {
    let given = Cidr::new(addr_str)?;
    let len = given
        .prefix
        .ok_or_else(|| CidrError::MissingPrefixLength(given.to_string()))?;
    log::info!("single_address_report({given}) block_sizes={block_sizes:?}");

    let blocks = partition_blocks(given.addr, len, block_sizes.unwrap_or_default())?
        .into_iter()
        .map(|block| BlockReport {
            block,
            details: AddressDetails::new(block.base, block.prefix),
        })
        .collect();

    Ok(SingleAddressReport {
        given,
        subnet_mask: subnet_mask(len),
        details: AddressDetails::new(given.addr, len),
        blocks,
    })
}

/// Build the report comparing two addresses.
pub fn address_pair_report(first: &str, second: &str) -> Result<AddressPairReport, CidrError> {
    let a = Cidr::new(first)?;
    let b = Cidr::new(second)?;
    log::info!("address_pair_report({a}, {b})");

    let can_communicate = match (a.prefix, b.prefix) {
        (Some(len_a), Some(len_b)) => {
            Some(network_id(a.addr, len_a) == network_id(b.addr, len_b))
        }
        _ => None,
    };
    let shared_prefix = largest_shared_prefix(a.addr, b.addr);

    Ok(AddressPairReport {
        given: [a, b],
        can_communicate,
        shared_prefix,
        shared_mask: subnet_mask(shared_prefix),
        details: AddressDetails::new(a.addr, shared_prefix),
    })
}
