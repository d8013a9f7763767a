//! JSON report output.

use serde::Serialize;
use std::error::Error;
use std::io::Write;

/// Write any report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, report)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out)?;
    Ok(())
}
