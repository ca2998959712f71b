//! # rvdasm-disasm
//!
//! Instruction decoding for the rvdasm disassembler. The single
//! backend decodes the RV32I base integer instruction set (plus the M
//! multiply/divide group, `fence`/`fence.i`, and the CSR accesses) one
//! fixed-width 32-bit word at a time.

pub mod error;
pub mod riscv;

pub use error::DecodeError;
pub use riscv::Rv32Disassembler;
