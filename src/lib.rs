//! CIDR arithmetic for IPv4 addresses.
//!
//! Derives network and broadcast IDs, usable ranges and subnet sizes from an
//! address in slash notation, finds the smallest subnet two addresses share,
//! and partitions a subnet into blocks of unequal size.

pub mod cli;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use models::CidrError;
use output::{write_address_pair_report, write_json, write_single_address_report};
use processing::{address_pair_report, single_address_report};
use std::error::Error;
use std::io::Write;

pub use cli::Cli;

/// Build the report for the given addresses and write it to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), Box<dyn Error>> {
    match cli.addrs.as_slice() {
        [addr] => {
            let report = single_address_report(addr, cli.block_sizes.as_deref())?;
            if cli.json {
                write_json(out, &report)?;
            } else {
                write_single_address_report(out, &report)?;
            }
        }
        [first, second] => {
            if cli.block_sizes.is_some() {
                return Err(CidrError::BlockSizesWithTwoAddresses.into());
            }
            let report = address_pair_report(first, second)?;
            if cli.json {
                write_json(out, &report)?;
            } else {
                write_address_pair_report(out, &report)?;
            }
        }
        addrs => {
            return Err(format!("Expected one or two addresses, got {}", addrs.len()).into());
        }
    }
    Ok(())
}
