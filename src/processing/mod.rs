//! Subnet arithmetic.
//!
//! This module contains the algorithms over [`crate::models::BitAddress`]:
//! - [`prefix`] - Masks, network and broadcast IDs, usable range, subnet size
//! - [`supernet`] - Smallest common subnet of two addresses
//! - [`blocks`] - Partitioning a subnet into blocks, largest first
//! - [`report`] - Report values built from command line input

mod blocks;
mod prefix;
mod report;
mod supernet;

// Re-export public functions
pub use blocks::{block_prefix, next_block_base, partition_blocks};
pub use prefix::{
    broadcast_id, first_available, is_reserved, last_available, network_id, subnet_mask,
    subnet_size,
};
pub use report::{
    address_pair_report, single_address_report, AddressDetails, AddressPairReport, BlockReport,
    SingleAddressReport,
};
pub use supernet::{largest_shared_prefix, largest_subnet_mask};
