use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Tratamento de uma instrução cujos operandos ultrapassam o fim do programa
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruncationPolicy {
    /// Falha com `Error::TruncatedInstruction`
    #[default]
    Strict,
    /// Lê os bytes ausentes como 0 e avança pelo tamanho completo da instrução
    ZeroFill,
}

/// Configuração da desmontagem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    /// Política para instruções truncadas no fim do programa
    pub truncation: TruncationPolicy,
    /// Program counter inicial
    pub start: usize,
}

impl DisasmConfig {
    pub fn with_truncation(mut self, truncation: TruncationPolicy) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Carrega a configuração de um documento JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Carrega a configuração de um arquivo JSON
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
