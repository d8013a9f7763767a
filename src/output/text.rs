//! Text report output.
//!
//! Writers take any [`Write`] so the binary can target stdout and tests can
//! capture into a buffer.

use super::terminal::{format_addr, heading, indent};
use crate::processing::{AddressDetails, AddressPairReport, BlockReport, SingleAddressReport};
use std::io::{self, Write};

/// Write network ID, broadcast ID, usable range and subnet size.
pub fn write_addr_details<W: Write>(
    out: &mut W,
    details: &AddressDetails,
    level: usize,
) -> io::Result<()> {
    let rows = [
        ("Network ID:", details.network_id, Some(details.prefix)),
        ("Broadcast ID:", details.broadcast_id, None),
        ("First Available Address:", details.first_available, None),
        ("Last Available Address:", details.last_available, None),
    ];
    for (label, addr, prefix) in rows {
        writeln!(out, "{}", heading(label, level))?;
        writeln!(out, "{}", format_addr(addr, prefix, level + 1))?;
    }
    writeln!(
        out,
        "{}",
        indent(
            &format!(
                "Subnet Size: 2^{} - 2 = {}",
                details.prefix.host_bits(),
                details.subnet_size
            ),
            level
        )
    )
}

/// Write each block, largest first, with its details one level in.
pub fn write_blocks<W: Write>(out: &mut W, blocks: &[BlockReport], level: usize) -> io::Result<()> {
    for (i, block_report) in blocks.iter().enumerate() {
        let block = &block_report.block;
        writeln!(out, "{}", heading(&format!("Block {}:", i + 1), level))?;
        writeln!(
            out,
            "{}",
            indent(
                &format!("Block Size: 2^{} = {}", block.prefix.host_bits(), block.size),
                level + 1
            )
        )?;
        write_addr_details(out, &block_report.details, level + 1)?;
    }
    Ok(())
}

/// Write the report for a single address.
pub fn write_single_address_report<W: Write>(
    out: &mut W,
    report: &SingleAddressReport,
) -> io::Result<()> {
    writeln!(out, "{}", heading("Given IP address:", 0))?;
    writeln!(out, "{}", format_addr(report.given.addr, report.given.prefix, 1))?;
    writeln!(out, "{}", heading("Subnet mask:", 0))?;
    writeln!(out, "{}", format_addr(report.subnet_mask, None, 1))?;
    write_addr_details(out, &report.details, 0)?;
    write_blocks(out, &report.blocks, 0)
}

/// Write the report comparing two addresses.
pub fn write_address_pair_report<W: Write>(
    out: &mut W,
    report: &AddressPairReport,
) -> io::Result<()> {
    writeln!(out, "{}", heading("Given IP addresses:", 0))?;
    for given in &report.given {
        writeln!(out, "{}", format_addr(given.addr, given.prefix, 1))?;
    }

    if let Some(can_communicate) = report.can_communicate {
        writeln!(out, "{}", heading("Can these IP addresses communicate?", 0))?;
        let answer = if can_communicate { "Yes" } else { "No" };
        writeln!(out, "{}", indent(answer, 1))?;
    }

    writeln!(
        out,
        "{}",
        heading("Largest subnet mask allowing communication:", 0)
    )?;
    let shared_bits = format!("{} bits", report.shared_mask.count_ones());
    writeln!(out, "{}", indent(&shared_bits, 1))?;
    writeln!(out, "{}", format_addr(report.shared_mask, None, 1))?;

    write_addr_details(out, &report.details, 0)
}
