//! Disassembly error types.

use thiserror::Error;

/// Error type for instruction decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Bit pattern absent from the decode tables. `format` names the
    /// instruction-format class the word claimed (`Risc-V` when the
    /// opcode itself is unknown), `pattern` the offending field's bits.
    #[error("invalid \"{format}\"-type instruction: {pattern}")]
    Unsupported {
        format: &'static str,
        pattern: String,
    },

    /// Instruction was truncated (not enough bytes).
    #[error("truncated instruction at {address:#x}: need {needed} bytes, have {available}")]
    Truncated {
        address: u32,
        needed: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Creates a new Unsupported error for a bit field of the given
    /// width, rendered in binary.
    pub fn unsupported(format: &'static str, bits: u32, width: usize) -> Self {
        Self::Unsupported {
            format,
            pattern: format!("{:0w$b}", bits, w = width),
        }
    }

    /// Creates a new Truncated error.
    pub fn truncated(address: u32, needed: usize, available: usize) -> Self {
        Self::Truncated {
            address,
            needed,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_zero_padded_binary() {
        let err = DecodeError::unsupported("I", 0b100, 3);
        assert_eq!(err.to_string(), "invalid \"I\"-type instruction: 100");

        let err = DecodeError::unsupported("Risc-V", 0x7f, 32);
        assert_eq!(
            err.to_string(),
            format!("invalid \"Risc-V\"-type instruction: {:032b}", 0x7f)
        );
    }
}
