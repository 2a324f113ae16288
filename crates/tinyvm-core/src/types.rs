/*!
 * TinyVM Types
 *
 * Tipos comuns usados em toda a workspace TinyVM
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Programa de referência com 36 bytes, terminado pelo sentinela `0xFF`.
const REFERENCE_PROGRAM: [u8; 36] = [
    0x01, 0x00, 0x00, 0x08, 0x00, 0x18, 0x0A, 0x23, 0x02, 0x01,
    0x80, 0x00, 0x04, 0x01, 0x00, 0x01, 0x05, 0x01, 0x80, 0x01,
    0x0B, 0x02, 0x01, 0x06, 0x02, 0x00, 0x02, 0x03, 0x80, 0x00,
    0x02, 0x07, 0x00, 0x09, 0x03, 0xFF,
];

/// Sequência imutável de bytes de um programa
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Programa de referência usado pela linha de comando quando nenhuma entrada é dada
    pub fn reference() -> Self {
        Self::new(REFERENCE_PROGRAM.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte no endereço `pc`, se existir
    pub fn get(&self, pc: usize) -> Option<u8> {
        self.bytes.get(pc).copied()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for Program {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Program {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Program {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for Program {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

/// Opcodes definidos do conjunto de instruções
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Opcode {
    LoadImm,
    LoadAddr,
    StoreAddr,
    Add,
    Mod,
    Xor,
    Inc,
    Cmp,
    Jmp,
    Jnz,
    LoadInd,
}

impl Opcode {
    /// Todos os opcodes, em ordem de byte
    pub const ALL: [Opcode; 11] = [
        Opcode::LoadImm,
        Opcode::LoadAddr,
        Opcode::StoreAddr,
        Opcode::Add,
        Opcode::Mod,
        Opcode::Xor,
        Opcode::Inc,
        Opcode::Cmp,
        Opcode::Jmp,
        Opcode::Jnz,
        Opcode::LoadInd,
    ];

    /// Consulta a tabela de opcodes; `None` indica um byte desconhecido
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Opcode::LoadImm),
            0x02 => Some(Opcode::LoadAddr),
            0x03 => Some(Opcode::StoreAddr),
            0x04 => Some(Opcode::Add),
            0x05 => Some(Opcode::Mod),
            0x06 => Some(Opcode::Xor),
            0x07 => Some(Opcode::Inc),
            0x08 => Some(Opcode::Cmp),
            0x09 => Some(Opcode::Jmp),
            0x0A => Some(Opcode::Jnz),
            0x0B => Some(Opcode::LoadInd),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Opcode::LoadImm => 0x01,
            Opcode::LoadAddr => 0x02,
            Opcode::StoreAddr => 0x03,
            Opcode::Add => 0x04,
            Opcode::Mod => 0x05,
            Opcode::Xor => 0x06,
            Opcode::Inc => 0x07,
            Opcode::Cmp => 0x08,
            Opcode::Jmp => 0x09,
            Opcode::Jnz => 0x0A,
            Opcode::LoadInd => 0x0B,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LoadImm => "LOAD_IMM",
            Opcode::LoadAddr => "LOAD_ADDR",
            Opcode::StoreAddr => "STORE_ADDR",
            Opcode::Add => "ADD",
            Opcode::Mod => "MOD",
            Opcode::Xor => "XOR",
            Opcode::Inc => "INC",
            Opcode::Cmp => "CMP",
            Opcode::Jmp => "JMP",
            Opcode::Jnz => "JNZ",
            Opcode::LoadInd => "LOAD_IND",
        }
    }

    /// Tamanho da instrução em bytes, incluindo o próprio opcode
    pub fn length(self) -> usize {
        match self {
            Opcode::Inc | Opcode::Jmp | Opcode::Jnz => 2,
            Opcode::LoadImm | Opcode::Cmp | Opcode::LoadInd => 3,
            Opcode::LoadAddr | Opcode::StoreAddr | Opcode::Add | Opcode::Mod | Opcode::Xor => 4,
        }
    }

    pub fn operand_count(self) -> usize {
        self.length() - 1
    }

    /// Efeito da instrução em tempo de execução (apenas documentação)
    pub fn semantics(self) -> &'static str {
        match self {
            Opcode::LoadImm => "R[op1] <- op2",
            Opcode::LoadAddr => "R[op1] <- mem[R[op3] + op2]",
            Opcode::StoreAddr => "mem[R[op2] + op1] <- R[op3]",
            Opcode::Add => "R[op3] <- R[op1] + R[op2]",
            Opcode::Mod => "R[op3] <- R[op1] % op2",
            Opcode::Xor => "R[op3] <- R[op1] ^ R[op2]",
            Opcode::Inc => "R[op1] <- R[op1] + 1",
            Opcode::Cmp => "FLAG <- (R[op1] == op2)",
            Opcode::Jmp => "PC <- op1",
            Opcode::Jnz => "if FLAG != 0 then PC <- op1 else PC <- PC + 2",
            Opcode::LoadInd => "R[op1] <- mem[R[op2]]",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> std::result::Result<Self, Self::Error> {
        Opcode::from_byte(byte).ok_or(byte)
    }
}

/// Tamanho da instrução iniciada por `byte`; bytes desconhecidos ocupam 1
pub fn instruction_length(byte: u8) -> usize {
    Opcode::from_byte(byte).map_or(1, Opcode::length)
}
