//! TinyVM Disasm
//!
//! Linear-sweep disassembler for TinyVM bytecode. Every byte of the input is
//! covered by exactly one listing line; bytes outside the opcode table are
//! emitted as `DB` data.

pub mod instruction;
pub mod disassembler;
pub mod listing;

pub use disassembler::{disassemble, disassemble_to_strings, disassemble_with, DecodedLine, Disassembler};
pub use instruction::Instruction;
pub use listing::{write_listing, ListingFormat};
