//! Decoded instruction representation.

/// A single decoded instruction: a mnemonic plus zero to three
/// rendered operands, produced per `.text` word and consumed by the
/// listing renderer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Address of this instruction inside `.text`.
    pub address: u32,
    /// Mnemonic string (e.g., "addi", "beq", "ecall").
    pub mnemonic: String,
    /// Operand text, already in display form (register names, decimal
    /// immediates, `imm(base)` memory references, labels).
    pub operands: Vec<String>,
}

impl Instruction {
    /// Creates an operand-less instruction.
    pub fn new(address: u32, mnemonic: impl Into<String>) -> Self {
        Self {
            address,
            mnemonic: mnemonic.into(),
            operands: Vec::new(),
        }
    }

    /// Sets the operands.
    pub fn with_operands(mut self, operands: Vec<String>) -> Self {
        self.operands = operands;
        self
    }
}
