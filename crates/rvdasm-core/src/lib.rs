//! # rvdasm-core
//!
//! Core abstractions for the rvdasm disassembler: symbols, the symbol
//! table with its synthetic-label allocator, decoded instructions, the
//! RV32 ABI register-name table, and the text renderers for the
//! listing and symbol-table dump.

pub mod instruction;
pub mod listing;
pub mod register;
pub mod symbol;

pub use instruction::Instruction;
pub use register::{abi_name, ABI_NAMES};
pub use symbol::{SectionIndex, Symbol, SymbolBinding, SymbolKind, SymbolTable, SymbolVisibility};
