//! rvdasm - a static disassembler for RV32I ELF object files.
//!
//! Usage:
//!   rvdasm <input> <output>       Write the .text listing and symtab dump
//!   rvdasm <input> --symbols      Print the symbol table to stdout

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use rvdasm_core::listing::{render_listing, render_symtab};
use rvdasm_disasm::Rv32Disassembler;
use rvdasm_formats::Elf32;
use std::fs;
use std::path::PathBuf;

use crate::output::FileOutput;

#[derive(Parser)]
#[command(name = "rvdasm")]
#[command(about = "A static disassembler for RV32I ELF object files", long_about = None)]
struct Cli {
    /// Path to the ELF object file
    input: PathBuf,

    /// Path of the text listing to write
    #[arg(required_unless_present = "symbols")]
    output: Option<PathBuf>,

    /// Print the symbol table to stdout instead of writing a listing
    #[arg(long)]
    symbols: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data = fs::read(&cli.input)
        .with_context(|| format!("failed to read binary: {}", cli.input.display()))?;
    let elf = Elf32::parse(&data).context("failed to parse ELF file")?;

    if cli.symbols {
        print!("{}", render_symtab(&elf.symbols));
        return Ok(());
    }

    let text = elf.section(".text")?.clone();
    let code = elf.section_data(&text)?;
    let mut symbols = elf.symbols;

    let disasm = Rv32Disassembler::new();
    let instructions = disasm
        .disassemble_section(code, text.sh_addr, &mut symbols)
        .context("failed to disassemble .text")?;

    let output = cli.output.context("an output path is required")?;
    let mut out = FileOutput::create(&output)
        .with_context(|| format!("couldn't open file \"{}\"", output.display()))?;
    let write_err = || format!("couldn't write to file \"{}\"", output.display());
    for line in render_listing(&instructions, &symbols).lines() {
        out.write_line(line).with_context(write_err)?;
    }
    out.new_line().with_context(write_err)?;
    for line in render_symtab(&symbols).lines() {
        out.write_line(line).with_context(write_err)?;
    }
    out.close()
        .with_context(|| format!("couldn't close file \"{}\"", output.display()))?;

    println!("Wrote disassembly to \"{}\"", output.display());
    Ok(())
}
