use std::env;
use std::io;

use tinyvm_core::DisasmConfig;
use tinyvm_disasm::{write_listing, ListingFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <BYTECODE_HEX>", args[0]);
        std::process::exit(1);
    }
    let program = tinyvm_core::utils::parse_hex_program(&args[1])?;

    write_listing(&program, &DisasmConfig::default(), ListingFormat::Text, io::stdout().lock())?;
    Ok(())
}
