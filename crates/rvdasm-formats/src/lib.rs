//! # rvdasm-formats
//!
//! ELF32 parsing for the rvdasm disassembler: the file header fields
//! the tool consumes, the section header table, string tables, and the
//! `.symtab` symbol table.

pub mod elf;
pub mod error;

pub use elf::{Elf32, Elf32Header, SectionHeader, SymbolEntry};
pub use error::ParseError;
