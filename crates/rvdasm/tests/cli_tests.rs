//! CLI tests for the rvdasm binary.
//!
//! These spawn the built binary against small object files written to
//! the temp directory and check the success and failure surfaces.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

mod fixture;

use fixture::{ObjectBuilder, STB_GLOBAL, STT_FUNC};

/// Get the path to the rvdasm binary.
fn rvdasm_bin() -> &'static str {
    env!("CARGO_BIN_EXE_rvdasm")
}

/// Run rvdasm with the given arguments.
fn run_rvdasm(args: &[&str]) -> Output {
    Command::new(rvdasm_bin())
        .args(args)
        .output()
        .expect("Failed to execute rvdasm")
}

/// A per-test temp path that won't collide across parallel tests.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rvdasm-test-{}-{}", std::process::id(), name))
}

fn sample_object() -> Vec<u8> {
    ObjectBuilder::new(0x100, &[0x00000013, 0x00000073])
        .symbol("main", 0x100, 8, (STB_GLOBAL << 4) | STT_FUNC, 1)
        .build()
}

#[test]
fn test_writes_listing_and_reports_path() {
    let input = temp_path("basic-in.o");
    let output = temp_path("basic-out.txt");
    fs::write(&input, sample_object()).unwrap();

    let result = run_rvdasm(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Wrote disassembly to"));
    assert!(stdout.contains(output.to_str().unwrap()));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with(".text\n"));
    assert!(written.contains("<main>:"));
    assert!(written.contains("\n\n.symtab\n"));

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn test_symbols_flag_prints_table() {
    let input = temp_path("symbols-in.o");
    fs::write(&input, sample_object()).unwrap();

    let result = run_rvdasm(&[input.to_str().unwrap(), "--symbols"]);
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.starts_with(".symtab\n"));
    assert!(stdout.contains("main"));

    fs::remove_file(&input).ok();
}

#[test]
fn test_missing_input_fails_with_context() {
    let result = run_rvdasm(&["/nonexistent/input.o", "/tmp/rvdasm-unused-out.txt"]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("failed to read binary"));
}

#[test]
fn test_non_elf_input_fails() {
    let input = temp_path("not-an-elf.o");
    fs::write(&input, b"definitely not an object file").unwrap();

    let result = run_rvdasm(&[input.to_str().unwrap(), "/tmp/rvdasm-unused-out.txt"]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("failed to parse ELF"));

    fs::remove_file(&input).ok();
}

#[test]
fn test_help() {
    let result = run_rvdasm(&["--help"]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("disassembler"));
    assert!(stdout.contains("--symbols"));
}
