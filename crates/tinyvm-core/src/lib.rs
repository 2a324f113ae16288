/*!
 * TinyVM Core
 * 
 * Tipos e utilitários compartilhados para a workspace TinyVM
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;
pub mod config;
pub mod source;

// Re-exportações públicas
pub use error::{Error, Result};
pub use config::{DisasmConfig, TruncationPolicy};
pub use types::*;
