use core::fmt;
use core::iter::FusedIterator;

use serde::Serialize;
use tinyvm_core::{utils::format_address, DisasmConfig, Result, TruncationPolicy};
use tracing::{debug, trace};

use crate::instruction::Instruction;

/// One line of the listing: the instruction address and its rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedLine {
    pub address: usize,
    pub instruction: Instruction,
    pub text: String,
}

impl DecodedLine {
    pub fn new(address: usize, instruction: Instruction) -> Self {
        Self {
            address,
            text: instruction.to_string(),
            instruction,
        }
    }
}

impl fmt::Display for DecodedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_address(self.address), self.text)
    }
}

/// Lazy linear sweep over a byte buffer.
///
/// Yields one [`DecodedLine`] per instruction in increasing address order and
/// stops once the program counter reaches the end of the buffer. After an
/// error nothing else is yielded.
#[derive(Debug, Clone)]
pub struct Disassembler<'a> {
    code: &'a [u8],
    pc: usize,
    policy: TruncationPolicy,
    failed: bool,
}

impl<'a> Disassembler<'a> {
    pub fn new(code: &'a [u8]) -> Self {
        Self::with_config(code, &DisasmConfig::default())
    }

    pub fn with_config(code: &'a [u8], config: &DisasmConfig) -> Self {
        Self {
            code,
            pc: config.start,
            policy: config.truncation,
            failed: false,
        }
    }

    /// Address of the next instruction to decode.
    pub fn pc(&self) -> usize {
        self.pc
    }
}

impl Iterator for Disassembler<'_> {
    type Item = Result<DecodedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pc >= self.code.len() {
            return None;
        }
        let address = self.pc;
        match Instruction::decode(self.code, address, self.policy) {
            Ok(instruction) => {
                self.pc += instruction.length();
                let line = DecodedLine::new(address, instruction);
                trace!(address, text = %line.text, "instrução decodificada");
                Some(Ok(line))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.code.len().saturating_sub(self.pc);
        // Every instruction is between 1 and 4 bytes long.
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Disassembler<'_> {}

/// Disassembles `code` from address 0, failing on a truncated instruction.
pub fn disassemble(code: &[u8]) -> Result<Vec<DecodedLine>> {
    disassemble_with(code, &DisasmConfig::default())
}

pub fn disassemble_with(code: &[u8], config: &DisasmConfig) -> Result<Vec<DecodedLine>> {
    debug!(len = code.len(), start = config.start, policy = ?config.truncation, "iniciando desmontagem");
    let lines = Disassembler::with_config(code, config).collect::<Result<Vec<_>>>()?;
    debug!(lines = lines.len(), "desmontagem concluída");
    Ok(lines)
}

/// Disassembles `code` into the `XX: MNEMONIC operands` text lines.
pub fn disassemble_to_strings(code: &[u8]) -> Result<Vec<String>> {
    Ok(disassemble(code)?.iter().map(DecodedLine::to_string).collect())
}
