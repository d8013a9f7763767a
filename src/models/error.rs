//! Error type shared by the address codec and the subnet algorithms.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Malformed address: {0}")]
    MalformedAddress(String),

    #[error("Invalid prefix length: {0}")]
    InvalidPrefixLength(String),

    #[error("Invalid block size {0}: must be a power of two between 2 and 2^32")]
    InvalidBlockSize(u64),

    #[error("Block of size {size} (/{prefix}) does not fit in the remaining address space")]
    BlocksExceedSpace { size: u64, prefix: u8 },

    #[error("Missing prefix length for {0}, expected slash notation e.g. 192.168.1.10/24")]
    MissingPrefixLength(String),

    #[error("Block sizes can only be used with a single address")]
    BlockSizesWithTwoAddresses,
}
