use std::env;
use std::io;

use anyhow::Result;
use tinyvm_cli::{parse_args, run, USAGE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = env::args();
    let bin = args.next().unwrap_or_else(|| "tinyvm-disasm".to_string());
    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Uso: {bin} {USAGE}");
            std::process::exit(1);
        }
    };

    run(&cli, io::stdout().lock())?;
    Ok(())
}
