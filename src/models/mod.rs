//! Domain models for CIDR arithmetic.
//!
//! This module contains the value types used throughout the crate:
//! - [`BitAddress`] - 32-bit IPv4 address with bit string and dotted forms
//! - [`PrefixLength`] - validated prefix length (0-32)
//! - [`Cidr`] - an address as given, with optional prefix
//! - [`Block`] - one partition of a subnet
//! - [`CidrError`] - errors raised while parsing or partitioning

mod address;
mod block;
mod error;

// Re-export public types
pub use address::{parse_address, BitAddress, Cidr, PrefixLength, MAX_LENGTH};
pub use block::Block;
pub use error::CidrError;
