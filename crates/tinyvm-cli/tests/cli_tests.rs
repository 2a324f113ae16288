use std::io::Write;

use tinyvm_cli::{parse_args, run, CliArgs, Input};

fn args(list: &[&str]) -> anyhow::Result<CliArgs> {
    parse_args(list.iter().map(|s| s.to_string()))
}

fn listing(cli: &CliArgs) -> String {
    let mut out = Vec::new();
    run(cli, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn no_arguments_uses_reference_program() {
    let cli = args(&[]).unwrap();
    assert_eq!(cli.input, Input::Reference);
    let out = listing(&cli);
    assert_eq!(out.lines().count(), 12);
    assert_eq!(out.lines().next(), Some("00: LOAD_IMM R0, 0"));
    assert_eq!(out.lines().last(), Some("23: DB 255"));
}

#[test]
fn hex_argument() {
    let cli = args(&["--hex", "07020900"]).unwrap();
    assert_eq!(listing(&cli), "00: INC R2\n02: JMP 0\n");
}

#[test]
fn literal_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "program = [0x01, 0x00, 0x00]").unwrap();
    let cli = args(&[file.path().to_str().unwrap()]).unwrap();
    assert_eq!(listing(&cli), "00: LOAD_IMM R0, 0\n");
}

#[test]
fn zero_fill_flag_overrides_strict_default() {
    let strict = args(&["--literal", "[1, 5]"]).unwrap();
    assert!(run(&strict, Vec::new()).is_err());

    let lenient = args(&["--zero-fill", "--literal", "[1, 5]"]).unwrap();
    assert_eq!(listing(&lenient), "00: LOAD_IMM R5, 0\n");
}

#[test]
fn config_file_selects_policy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "truncation": "zero-fill" }}"#).unwrap();
    let cli = args(&["--config", file.path().to_str().unwrap(), "--hex", "07"]).unwrap();
    assert_eq!(listing(&cli), "00: INC R0\n");
}

#[test]
fn json_output() {
    let cli = args(&["--json", "--hex", "ff"]).unwrap();
    let out = listing(&cli);
    let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(value["text"], "DB 255");
}

#[test]
fn rejects_bad_arguments() {
    assert!(args(&["--bogus"]).is_err());
    assert!(args(&["--hex"]).is_err());
    assert!(args(&["a.bin", "b.bin"]).is_err());
}

#[test]
fn missing_file_is_reported() {
    let cli = args(&["/nonexistent/program.bin"]).unwrap();
    let err = run(&cli, Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/program.bin"));
}

#[test]
fn raw_binary_of_whitespace_bytes_is_decoded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x0B, 0x09, 0x0A]).unwrap();
    let cli = args(&[file.path().to_str().unwrap()]).unwrap();
    assert_eq!(listing(&cli), "00: LOAD_IND R9, R10\n");
}

#[test]
fn raw_binary_of_ascii_digits_is_decoded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"12").unwrap();
    let cli = args(&[file.path().to_str().unwrap()]).unwrap();
    assert_eq!(listing(&cli), "00: DB 49\n01: DB 50\n");
}
