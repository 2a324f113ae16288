use core::fmt;

use serde::Serialize;
use tinyvm_core::{Error, Opcode, Result, TruncationPolicy};
use tracing::warn;

/// Decoded instruction with its operand bytes in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Instruction {
    LoadImm { r: u8, imm: u8 },
    LoadAddr { r: u8, imm: u8, base: u8 },
    StoreAddr { off: u8, base: u8, src: u8 },
    Add { r1: u8, r2: u8, rd: u8 },
    Mod { r: u8, imm: u8, rd: u8 },
    Xor { r1: u8, r2: u8, rd: u8 },
    Inc { r: u8 },
    Cmp { r: u8, imm: u8 },
    Jmp { imm: u8 },
    Jnz { imm: u8 },
    LoadInd { rd: u8, rs: u8 },
    /// Byte outside the opcode table, emitted as raw data.
    Unknown { byte: u8 },
}

impl Instruction {
    /// Decodes the instruction starting at `pc`.
    ///
    /// Fails with `Error::OutOfBounds` when `pc` is not inside `code`.
    /// Operand bytes past the end of `code` are handled according to `policy`.
    pub fn decode(code: &[u8], pc: usize, policy: TruncationPolicy) -> Result<Self> {
        let Some(&byte) = code.get(pc) else {
            return Err(Error::OutOfBounds { address: pc, len: code.len() });
        };
        let Some(opcode) = Opcode::from_byte(byte) else {
            return Ok(Instruction::Unknown { byte });
        };

        let len = opcode.length();
        let available = code.len() - pc;
        if available < len {
            match policy {
                TruncationPolicy::Strict => {
                    return Err(Error::TruncatedInstruction {
                        address: pc,
                        opcode: byte,
                        expected: len,
                        available,
                    });
                }
                TruncationPolicy::ZeroFill => {
                    warn!(address = pc, opcode = byte, missing = len - available, "operandos ausentes lidos como 0");
                }
            }
        }

        let mut operands = [0u8; 3];
        let end = core::cmp::min(pc + len, code.len());
        let tail = &code[pc + 1..end];
        operands[..tail.len()].copy_from_slice(tail);
        let [a, b, c] = operands;

        Ok(match opcode {
            Opcode::LoadImm => Instruction::LoadImm { r: a, imm: b },
            Opcode::LoadAddr => Instruction::LoadAddr { r: a, imm: b, base: c },
            Opcode::StoreAddr => Instruction::StoreAddr { off: a, base: b, src: c },
            Opcode::Add => Instruction::Add { r1: a, r2: b, rd: c },
            Opcode::Mod => Instruction::Mod { r: a, imm: b, rd: c },
            Opcode::Xor => Instruction::Xor { r1: a, r2: b, rd: c },
            Opcode::Inc => Instruction::Inc { r: a },
            Opcode::Cmp => Instruction::Cmp { r: a, imm: b },
            Opcode::Jmp => Instruction::Jmp { imm: a },
            Opcode::Jnz => Instruction::Jnz { imm: a },
            Opcode::LoadInd => Instruction::LoadInd { rd: a, rs: b },
        })
    }

    /// Opcode of the instruction, `None` for raw bytes.
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Instruction::LoadImm { .. } => Some(Opcode::LoadImm),
            Instruction::LoadAddr { .. } => Some(Opcode::LoadAddr),
            Instruction::StoreAddr { .. } => Some(Opcode::StoreAddr),
            Instruction::Add { .. } => Some(Opcode::Add),
            Instruction::Mod { .. } => Some(Opcode::Mod),
            Instruction::Xor { .. } => Some(Opcode::Xor),
            Instruction::Inc { .. } => Some(Opcode::Inc),
            Instruction::Cmp { .. } => Some(Opcode::Cmp),
            Instruction::Jmp { .. } => Some(Opcode::Jmp),
            Instruction::Jnz { .. } => Some(Opcode::Jnz),
            Instruction::LoadInd { .. } => Some(Opcode::LoadInd),
            Instruction::Unknown { .. } => None,
        }
    }

    /// Number of bytes consumed, including the opcode byte.
    pub fn length(&self) -> usize {
        self.opcode().map_or(1, Opcode::length)
    }

    pub fn mnemonic(&self) -> &'static str {
        self.opcode().map_or("DB", Opcode::mnemonic)
    }

    /// Operand values in rendering order.
    pub fn operands(&self) -> Vec<u8> {
        match *self {
            Instruction::LoadImm { r, imm } => vec![r, imm],
            Instruction::LoadAddr { r, imm, base } => vec![r, imm, base],
            Instruction::StoreAddr { off, base, src } => vec![off, base, src],
            Instruction::Add { r1, r2, rd } | Instruction::Xor { r1, r2, rd } => vec![r1, r2, rd],
            Instruction::Mod { r, imm, rd } => vec![r, imm, rd],
            Instruction::Inc { r } => vec![r],
            Instruction::Cmp { r, imm } => vec![r, imm],
            Instruction::Jmp { imm } | Instruction::Jnz { imm } => vec![imm],
            Instruction::LoadInd { rd, rs } => vec![rd, rs],
            Instruction::Unknown { byte } => vec![byte],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.mnemonic();
        match *self {
            Instruction::LoadImm { r, imm } => write!(f, "{name} R{r}, {imm}"),
            Instruction::LoadAddr { r, imm, base } => write!(f, "{name} R{r}, {imm}, R{base}"),
            Instruction::StoreAddr { off, base, src } => write!(f, "{name} {off}, R{base}, R{src}"),
            Instruction::Add { r1, r2, rd } | Instruction::Xor { r1, r2, rd } => {
                write!(f, "{name} R{r1}, R{r2}, R{rd}")
            }
            Instruction::Mod { r, imm, rd } => write!(f, "{name} R{r}, {imm}, R{rd}"),
            Instruction::Inc { r } => write!(f, "{name} R{r}"),
            Instruction::Cmp { r, imm } => write!(f, "{name} R{r}, {imm}"),
            Instruction::Jmp { imm } | Instruction::Jnz { imm } => write!(f, "{name} {imm}"),
            Instruction::LoadInd { rd, rs } => write!(f, "{name} R{rd}, R{rs}"),
            Instruction::Unknown { byte } => write!(f, "{name} {byte}"),
        }
    }
}
