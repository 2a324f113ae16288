use thiserror::Error;

/// Erros comuns da biblioteca TinyVM
#[derive(Error, Debug)]
pub enum Error {
    /// Instrução cujos operandos ultrapassam o fim do programa
    #[error(
        "instrução truncada em {address:#04x}: opcode {opcode:#04x} exige {expected} bytes, restam {available}"
    )]
    TruncatedInstruction {
        address: usize,
        opcode: u8,
        expected: usize,
        available: usize,
    },

    /// Endereço fora dos limites do programa
    #[error("endereço {address:#04x} fora do programa de {len} bytes")]
    OutOfBounds { address: usize, len: usize },

    /// Literal de programa inválido
    #[error("Literal inválido: {0}")]
    InvalidLiteral(String),

    /// Erro de configuração
    #[error("Erro de configuração: {0}")]
    Config(String),

    /// Erro de entrada/saída
    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
