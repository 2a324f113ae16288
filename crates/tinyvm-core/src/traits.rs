/*!
 * TinyVM Traits
 * 
 * Traits comuns usados em toda a workspace TinyVM
 */

use crate::error::Result;
use crate::types::Program;

/// Origem dos bytes de um programa
pub trait ProgramSource {
    /// Carrega o programa completo
    fn load(&self) -> Result<Program>;

    /// Descrição curta da origem, usada em logs
    fn describe(&self) -> String;
}

impl ProgramSource for Program {
    fn load(&self) -> Result<Program> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("programa em memória ({} bytes)", self.len())
    }
}
