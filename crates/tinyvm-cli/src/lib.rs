//! TinyVM CLI
//!
//! Argument handling and the listing driver behind the `tinyvm-disasm` binary.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tinyvm_core::source::{FileSource, HexSource, LiteralSource};
use tinyvm_core::traits::ProgramSource;
use tinyvm_core::{DisasmConfig, Program, TruncationPolicy};
use tinyvm_disasm::{write_listing, ListingFormat};
use tracing::info;

pub const USAGE: &str =
    "[--zero-fill] [--json] [--config FILE] [--hex HEX | --literal TEXT | FILE]";

/// Origem do programa escolhida na linha de comando
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Reference,
    Hex(String),
    Literal(String),
    File(PathBuf),
}

impl Input {
    pub fn source(&self) -> Box<dyn ProgramSource> {
        match self {
            Input::Reference => Box::new(Program::reference()),
            Input::Hex(text) => Box::new(HexSource(text.clone())),
            Input::Literal(text) => Box::new(LiteralSource(text.clone())),
            Input::File(path) => Box::new(FileSource(path.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub zero_fill: bool,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub input: Input,
}

/// Interpreta os argumentos (sem o nome do programa)
pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs {
        zero_fill: false,
        json: false,
        config: None,
        input: Input::Reference,
    };
    let mut input_set = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let input = match arg.as_str() {
            "--zero-fill" => {
                parsed.zero_fill = true;
                continue;
            }
            "--json" => {
                parsed.json = true;
                continue;
            }
            "--config" => {
                let path = args.next().context("--config exige um arquivo")?;
                parsed.config = Some(PathBuf::from(path));
                continue;
            }
            "--hex" => Input::Hex(args.next().context("--hex exige um valor")?),
            "--literal" => Input::Literal(args.next().context("--literal exige um valor")?),
            flag if flag.starts_with("--") => bail!("opção desconhecida: {flag}"),
            path => Input::File(PathBuf::from(path)),
        };
        if input_set {
            bail!("apenas uma entrada pode ser informada");
        }
        parsed.input = input;
        input_set = true;
    }
    Ok(parsed)
}

/// Carrega a configuração e o programa e escreve a listagem em `out`.
pub fn run<W: Write>(args: &CliArgs, out: W) -> Result<usize> {
    let mut config = match &args.config {
        Some(path) => DisasmConfig::from_json_file(path)
            .with_context(|| format!("falha ao carregar configuração {}", path.display()))?,
        None => DisasmConfig::default(),
    };
    if args.zero_fill {
        config.truncation = TruncationPolicy::ZeroFill;
    }

    let source = args.input.source();
    let program = source
        .load()
        .with_context(|| format!("falha ao carregar programa de {}", source.describe()))?;
    info!(origem = %source.describe(), bytes = program.len(), "programa carregado");

    let format = if args.json {
        ListingFormat::JsonLines
    } else {
        ListingFormat::Text
    };
    write_listing(&program, &config, format, out).context("falha ao desmontar programa")
}
