use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::traits::ProgramSource;
use crate::types::Program;
use crate::utils::{parse_hex_program, parse_program_literal};

/// Programa escrito como literal de lista
#[derive(Debug, Clone)]
pub struct LiteralSource(pub String);

impl ProgramSource for LiteralSource {
    fn load(&self) -> Result<Program> {
        parse_program_literal(&self.0)
    }

    fn describe(&self) -> String {
        "literal".to_string()
    }
}

/// Programa escrito como string hexadecimal
#[derive(Debug, Clone)]
pub struct HexSource(pub String);

impl ProgramSource for HexSource {
    fn load(&self) -> Result<Program> {
        parse_hex_program(&self.0)
    }

    fn describe(&self) -> String {
        "hex".to_string()
    }
}

/// Programa lido de um arquivo.
///
/// O conteúdo só é interpretado como literal de lista quando é UTF-8, contém
/// `[` ou algum token `0x..` e é um literal válido; caso contrário os bytes
/// crus do arquivo formam o programa.
#[derive(Debug, Clone)]
pub struct FileSource(pub PathBuf);

impl ProgramSource for FileSource {
    fn load(&self) -> Result<Program> {
        let raw = std::fs::read(&self.0)?;
        if let Some(text) = std::str::from_utf8(&raw).ok().filter(|t| looks_like_literal(t)) {
            if let Ok(program) = parse_program_literal(text) {
                debug!(path = %self.0.display(), "arquivo interpretado como literal");
                return Ok(program);
            }
        }
        debug!(path = %self.0.display(), "arquivo interpretado como binário");
        Ok(Program::from(raw))
    }

    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

/// Binários feitos só de dígitos ou espaços não devem virar literais
fn looks_like_literal(text: &str) -> bool {
    text.contains('[')
        || text
            .split(|c: char| c == ',' || c.is_whitespace())
            .any(|token| token.starts_with("0x") || token.starts_with("0X"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn literal_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[0x07, 0x02, 0x09, 0x00]").unwrap();
        let program = FileSource(file.path().to_path_buf()).load().unwrap();
        assert_eq!(program.as_bytes(), &[0x07, 0x02, 0x09, 0x00]);
    }

    #[test]
    fn binary_file_is_taken_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x01, 0x00, 0x00, 0xFF]).unwrap();
        let program = FileSource(file.path().to_path_buf()).load().unwrap();
        assert_eq!(program.as_bytes(), &[0x01, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn whitespace_only_binary_is_not_an_empty_literal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x0B, 0x09, 0x0A]).unwrap();
        let program = FileSource(file.path().to_path_buf()).load().unwrap();
        assert_eq!(program.as_bytes(), &[0x0B, 0x09, 0x0A]);
    }

    #[test]
    fn ascii_digit_binary_keeps_its_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"12").unwrap();
        let program = FileSource(file.path().to_path_buf()).load().unwrap();
        assert_eq!(program.as_bytes(), b"12");
    }

    #[test]
    fn bare_hex_tokens_are_a_literal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0x07 0x02").unwrap();
        let program = FileSource(file.path().to_path_buf()).load().unwrap();
        assert_eq!(program.as_bytes(), &[0x07, 0x02]);
    }

    #[test]
    fn in_memory_program_loads_itself() {
        let program = Program::reference();
        assert_eq!(program.load().unwrap(), program);
    }

    #[test]
    fn hex_source_decodes() {
        let program = HexSource("ff".into()).load().unwrap();
        assert_eq!(program.as_bytes(), &[0xFF]);
    }
}
