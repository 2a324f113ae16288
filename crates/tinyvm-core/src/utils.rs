/*!
 * TinyVM Utils
 *
 * Utilitários comuns usados em toda a workspace TinyVM
 */

use crate::error::{Error, Result};
use crate::types::Program;

/// Formata um endereço como dois dígitos hexadecimais maiúsculos
pub fn format_address(address: usize) -> String {
    format!("{:02X}", address)
}

/// Converte uma string hexadecimal contínua em programa
pub fn parse_hex_program(text: &str) -> Result<Program> {
    let compact: String = text.split_whitespace().collect();
    let hex_str = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(hex_str)
        .map(Program::from)
        .map_err(|e| Error::InvalidLiteral(format!("hex inválido: {e}")))
}

/// Converte um literal de lista (`program = [0x01, 0x00, ...]`) em programa.
///
/// Aceita valores hexadecimais com prefixo `0x` ou decimais, separados por
/// vírgulas e/ou espaços. Comentários iniciados por `#` são ignorados.
pub fn parse_program_literal(text: &str) -> Result<Program> {
    let body = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");

    let body = match body.split_once('=') {
        Some((name, rhs)) => {
            let name = name.trim();
            if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(Error::InvalidLiteral(format!("nome inválido: {name:?}")));
            }
            rhs
        }
        None => body.as_str(),
    };

    let body = body.trim();
    let body = body
        .strip_prefix('[')
        .and_then(|b| b.strip_suffix(']'))
        .unwrap_or(body);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_byte)
        .collect::<Result<Vec<u8>>>()
        .map(Program::from)
}

fn parse_byte(token: &str) -> Result<u8> {
    let (digits, radix) = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (token, 10),
    };
    u8::from_str_radix(digits, radix)
        .map_err(|_| Error::InvalidLiteral(format!("byte inválido: {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_address_as_two_upper_hex_digits() {
        assert_eq!(format_address(0), "00");
        assert_eq!(format_address(0x1b), "1B");
        assert_eq!(format_address(0x123), "123");
    }

    #[test]
    fn parses_reference_literal() {
        let literal = "program=[0x01, 0x00, 0x00, 0x08, 0x00, 0x18, 0x0A, 0x23, 0x02, 0x01, \n  \
                       0x80, 0x00, 0x04, 0x01, 0x00, 0x01, 0x05, 0x01, 0x80, 0x01, \n  \
                       0x0B, 0x02, 0x01, 0x06, 0x02, 0x00, 0x02, 0x03, 0x80, 0x00, \n  \
                       0x02, 0x07, 0x00, 0x09, 0x03, 0xFF]";
        assert_eq!(parse_program_literal(literal).unwrap(), Program::reference());
    }

    #[test]
    fn parses_bare_decimal_list_with_comments() {
        let program = parse_program_literal("7 2 # INC R2\n9, 0,").unwrap();
        assert_eq!(program.as_bytes(), &[7, 2, 9, 0]);
    }

    #[test]
    fn empty_list_is_empty_program() {
        assert!(parse_program_literal("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_values_above_a_byte() {
        let err = parse_program_literal("[0x01, 256]").unwrap_err();
        assert!(matches!(err, Error::InvalidLiteral(_)));
    }

    #[test]
    fn rejects_unbalanced_brackets() {
        assert!(parse_program_literal("[0x01, 0x02").is_err());
    }

    #[test]
    fn parses_hex_string() {
        let program = parse_hex_program("0x0702 0900").unwrap();
        assert_eq!(program.as_bytes(), &[0x07, 0x02, 0x09, 0x00]);
    }

    #[test]
    fn rejects_odd_length_hex() {
        assert!(matches!(parse_hex_program("070"), Err(Error::InvalidLiteral(_))));
    }
}
