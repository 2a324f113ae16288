use std::io::Write;

use tinyvm_core::{DisasmConfig, Result};
use tracing::debug;

use crate::disassembler::Disassembler;

/// Output format of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingFormat {
    /// `XX: MNEMONIC operands`
    #[default]
    Text,
    /// One JSON object per line.
    JsonLines,
}

/// Streams the listing of `code` to `out`, one line per instruction.
///
/// Lines decoded before a truncated instruction are written; the failing
/// instruction itself never is. Returns the number of lines written.
pub fn write_listing<W: Write>(
    code: &[u8],
    config: &DisasmConfig,
    format: ListingFormat,
    mut out: W,
) -> Result<usize> {
    let mut written = 0;
    for line in Disassembler::with_config(code, config) {
        let line = line?;
        match format {
            ListingFormat::Text => writeln!(out, "{line}")?,
            ListingFormat::JsonLines => {
                serde_json::to_writer(&mut out, &line).map_err(std::io::Error::from)?;
                writeln!(out)?;
            }
        }
        written += 1;
    }
    out.flush()?;
    debug!(lines = written, "listagem escrita");
    Ok(written)
}
