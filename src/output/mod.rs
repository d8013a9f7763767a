//! Output formatting for reports.
//!
//! This module handles rendering report values:
//! - [`terminal`] - Indentation and address columns
//! - [`text`] - The human readable report
//! - [`json`] - The `--json` report

mod json;
mod terminal;
mod text;

pub use json::write_json;
pub use terminal::{format_addr, heading, indent, INDENT_WIDTH};
pub use text::{
    write_addr_details, write_address_pair_report, write_blocks, write_single_address_report,
};
