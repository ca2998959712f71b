//! RV32I instruction decoder.
//!
//! Covers the base 32-bit integer instruction set together with the M
//! extension (multiply/divide), the fence instructions, and the Zicsr
//! CSR accesses. Compressed 16-bit instructions, floating point, and
//! atomics are out of scope; the stream advances a fixed four bytes
//! per instruction.

mod decoder;

pub use decoder::Rv32Disassembler;
