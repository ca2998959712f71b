//! RV32I instruction decoder implementation.

use crate::DecodeError;
use rvdasm_core::{abi_name, Instruction, SymbolTable};

// Standard 32-bit opcodes (bits 6:0)
const OP_LUI: u32 = 0b0110111; // 0x37
const OP_AUIPC: u32 = 0b0010111; // 0x17
const OP_JAL: u32 = 0b1101111; // 0x6F
const OP_JALR: u32 = 0b1100111; // 0x67
const OP_BRANCH: u32 = 0b1100011; // 0x63
const OP_LOAD: u32 = 0b0000011; // 0x03
const OP_STORE: u32 = 0b0100011; // 0x23
const OP_IMM: u32 = 0b0010011; // 0x13
const OP_REG: u32 = 0b0110011; // 0x33
const OP_SYSTEM: u32 = 0b1110011; // 0x73
const OP_FENCE: u32 = 0b0001111; // 0x0F

// Full-word system encodings, matched before generic dispatch
const WORD_ECALL: u32 = 0x0000_0073;
const WORD_EBREAK: u32 = 0x0010_0073;

/// R-type mnemonics, selected by funct7 then funct3.
fn op_reg_mnemonic(funct7: u32, funct3: u32) -> Result<&'static str, DecodeError> {
    match funct7 {
        0b0000000 => match funct3 {
            0b000 => Ok("add"),
            0b001 => Ok("sll"),
            0b010 => Ok("slt"),
            0b011 => Ok("sltu"),
            0b100 => Ok("xor"),
            0b101 => Ok("srl"),
            0b110 => Ok("or"),
            0b111 => Ok("and"),
            _ => Err(DecodeError::unsupported("R", funct3, 3)),
        },
        0b0100000 => match funct3 {
            0b000 => Ok("sub"),
            0b101 => Ok("sra"),
            _ => Err(DecodeError::unsupported("R", funct3, 3)),
        },
        0b0000001 => match funct3 {
            0b000 => Ok("mul"),
            0b001 => Ok("mulh"),
            0b010 => Ok("mulhsu"),
            0b011 => Ok("mulhu"),
            0b100 => Ok("div"),
            0b101 => Ok("divu"),
            0b110 => Ok("rem"),
            0b111 => Ok("remu"),
            _ => Err(DecodeError::unsupported("R", funct3, 3)),
        },
        _ => Err(DecodeError::unsupported("R", funct7, 7)),
    }
}

/// I-type ALU mnemonics. Shifts are picked apart by funct7: slli
/// requires a zero funct7, and funct3 101 distinguishes srli from srai.
fn op_imm_mnemonic(funct3: u32, funct7: u32) -> Result<&'static str, DecodeError> {
    match funct3 {
        0b000 => Ok("addi"),
        0b001 => {
            if funct7 == 0 {
                Ok("slli")
            } else {
                Err(DecodeError::unsupported("I", funct7, 7))
            }
        }
        0b010 => Ok("slti"),
        0b011 => Ok("sltiu"),
        0b100 => Ok("xori"),
        0b101 => match funct7 {
            0b0000000 => Ok("srli"),
            0b0100000 => Ok("srai"),
            _ => Err(DecodeError::unsupported("I", funct7, 7)),
        },
        0b110 => Ok("ori"),
        0b111 => Ok("andi"),
        _ => Err(DecodeError::unsupported("I", funct3, 3)),
    }
}

/// Load mnemonics, by funct3.
fn load_mnemonic(funct3: u32) -> Result<&'static str, DecodeError> {
    match funct3 {
        0b000 => Ok("lb"),
        0b001 => Ok("lh"),
        0b010 => Ok("lw"),
        0b100 => Ok("lbu"),
        0b101 => Ok("lhu"),
        _ => Err(DecodeError::unsupported("I", funct3, 3)),
    }
}

/// CSR access mnemonics, by funct3.
fn csr_mnemonic(funct3: u32) -> Result<&'static str, DecodeError> {
    match funct3 {
        0b001 => Ok("csrrw"),
        0b010 => Ok("csrrs"),
        0b011 => Ok("csrrc"),
        0b101 => Ok("csrrwi"),
        0b110 => Ok("csrrsi"),
        0b111 => Ok("csrrci"),
        _ => Err(DecodeError::unsupported("I", funct3, 3)),
    }
}

/// Store mnemonics, by funct3.
fn store_mnemonic(funct3: u32) -> Result<&'static str, DecodeError> {
    match funct3 {
        0b000 => Ok("sb"),
        0b001 => Ok("sh"),
        0b010 => Ok("sw"),
        _ => Err(DecodeError::unsupported("S", funct3, 3)),
    }
}

/// Branch mnemonics, by funct3.
fn branch_mnemonic(funct3: u32) -> Result<&'static str, DecodeError> {
    match funct3 {
        0b000 => Ok("beq"),
        0b001 => Ok("bne"),
        0b100 => Ok("blt"),
        0b101 => Ok("bge"),
        0b110 => Ok("bltu"),
        0b111 => Ok("bgeu"),
        _ => Err(DecodeError::unsupported("B", funct3, 3)),
    }
}

/// Register operand text for a 5-bit field.
fn reg(id: u32) -> String {
    abi_name(id).to_string()
}

/// RV32I disassembler.
///
/// Decoding a word is a pure function of the word and its address;
/// branch and jump operands additionally consult (and extend) the
/// symbol table passed into each call, which is owned by the
/// surrounding disassembly run.
#[derive(Debug, Default)]
pub struct Rv32Disassembler;

impl Rv32Disassembler {
    /// Creates a new RV32I disassembler.
    pub fn new() -> Self {
        Self
    }

    /// Disassemble a whole code section at a fixed four bytes per
    /// instruction. A trailing partial word is a fatal truncation.
    pub fn disassemble_section(
        &self,
        bytes: &[u8],
        base_addr: u32,
        symbols: &mut SymbolTable,
    ) -> Result<Vec<Instruction>, DecodeError> {
        let tail = bytes.len() % 4;
        if tail != 0 {
            return Err(DecodeError::truncated(
                base_addr + (bytes.len() - tail) as u32,
                4,
                tail,
            ));
        }

        let mut instructions = Vec::with_capacity(bytes.len() / 4);
        for (i, window) in bytes.chunks_exact(4).enumerate() {
            let word = u32::from_le_bytes([window[0], window[1], window[2], window[3]]);
            let address = base_addr + (i * 4) as u32;
            instructions.push(self.decode(word, address, symbols)?);
        }

        Ok(instructions)
    }

    /// Decode a single instruction word at the given address.
    pub fn decode(
        &self,
        word: u32,
        address: u32,
        symbols: &mut SymbolTable,
    ) -> Result<Instruction, DecodeError> {
        if word == WORD_ECALL {
            return Ok(Instruction::new(address, "ecall"));
        }
        if word == WORD_EBREAK {
            return Ok(Instruction::new(address, "ebreak"));
        }

        match word & 0x7f {
            OP_REG => self.decode_op_reg(word, address),
            OP_IMM => self.decode_op_imm(word, address),
            OP_LOAD => self.decode_load(word, address),
            OP_STORE => self.decode_store(word, address),
            OP_BRANCH => self.decode_branch(word, address, symbols),
            OP_LUI | OP_AUIPC => self.decode_upper(word, address),
            OP_JAL => self.decode_jal(word, address, symbols),
            OP_JALR => self.decode_jalr(word, address),
            OP_SYSTEM => self.decode_csr(word, address),
            OP_FENCE => self.decode_fence(word, address),
            _ => Err(DecodeError::unsupported("Risc-V", word, 32)),
        }
    }

    /// Extract rd field (bits 11:7)
    fn rd(word: u32) -> u32 {
        (word >> 7) & 0x1f
    }

    /// Extract rs1 field (bits 19:15)
    fn rs1(word: u32) -> u32 {
        (word >> 15) & 0x1f
    }

    /// Extract rs2 field (bits 24:20)
    fn rs2(word: u32) -> u32 {
        (word >> 20) & 0x1f
    }

    /// Extract funct3 field (bits 14:12)
    fn funct3(word: u32) -> u32 {
        (word >> 12) & 0x7
    }

    /// Extract funct7 field (bits 31:25)
    fn funct7(word: u32) -> u32 {
        (word >> 25) & 0x7f
    }

    /// Extract the CSR number (bits 31:20)
    fn csr(word: u32) -> u32 {
        (word >> 20) & 0xfff
    }

    /// Extract the shift amount (low 5 bits of the I-immediate field)
    fn shamt(word: u32) -> u32 {
        (word >> 20) & 0x1f
    }

    /// Extract I-type immediate (sign-extended)
    fn imm_i(word: u32) -> i32 {
        (word as i32) >> 20
    }

    /// Extract S-type immediate (sign-extended)
    fn imm_s(word: u32) -> i32 {
        let imm11_5 = (word >> 25) & 0x7f;
        let imm4_0 = (word >> 7) & 0x1f;
        let imm = (imm11_5 << 5) | imm4_0;
        // Sign-extend from 12 bits
        ((imm as i32) << 20) >> 20
    }

    /// Extract B-type immediate (sign-extended)
    fn imm_b(word: u32) -> i32 {
        let imm12 = (word >> 31) & 1;
        let imm11 = (word >> 7) & 1;
        let imm10_5 = (word >> 25) & 0x3f;
        let imm4_1 = (word >> 8) & 0xf;
        let imm = (imm12 << 12) | (imm11 << 11) | (imm10_5 << 5) | (imm4_1 << 1);
        // Sign-extend from 13 bits
        ((imm as i32) << 19) >> 19
    }

    /// Extract U-type immediate (top 20 bits over 12 zero bits)
    fn imm_u(word: u32) -> i32 {
        (word & 0xffff_f000) as i32
    }

    /// Extract J-type immediate (sign-extended)
    fn imm_j(word: u32) -> i32 {
        let imm20 = (word >> 31) & 1;
        let imm19_12 = (word >> 12) & 0xff;
        let imm11 = (word >> 20) & 1;
        let imm10_1 = (word >> 21) & 0x3ff;
        let imm = (imm20 << 20) | (imm19_12 << 12) | (imm11 << 11) | (imm10_1 << 1);
        // Sign-extend from 21 bits
        ((imm as i32) << 11) >> 11
    }

    /// Decode register-register ALU and multiply/divide instructions.
    fn decode_op_reg(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = op_reg_mnemonic(Self::funct7(word), Self::funct3(word))?;

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            reg(Self::rd(word)),
            reg(Self::rs1(word)),
            reg(Self::rs2(word)),
        ]))
    }

    /// Decode I-type ALU instructions. Shifts render the unsigned
    /// 5-bit shift amount; everything else the signed I-immediate.
    fn decode_op_imm(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let funct3 = Self::funct3(word);
        let mnemonic = op_imm_mnemonic(funct3, Self::funct7(word))?;

        let value = if funct3 == 0b001 || funct3 == 0b101 {
            Self::shamt(word).to_string()
        } else {
            Self::imm_i(word).to_string()
        };

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            reg(Self::rd(word)),
            reg(Self::rs1(word)),
            value,
        ]))
    }

    /// Decode load instructions.
    fn decode_load(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = load_mnemonic(Self::funct3(word))?;

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            reg(Self::rd(word)),
            format!("{}({})", Self::imm_i(word), abi_name(Self::rs1(word))),
        ]))
    }

    /// Decode store instructions.
    fn decode_store(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = store_mnemonic(Self::funct3(word))?;

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            reg(Self::rs2(word)),
            format!("{}({})", Self::imm_s(word), abi_name(Self::rs1(word))),
        ]))
    }

    /// Decode branch instructions. The target operand is always a
    /// label. The +4 compensates the reference point the immediate is
    /// encoded against and is part of the output contract.
    fn decode_branch(
        &self,
        word: u32,
        address: u32,
        symbols: &mut SymbolTable,
    ) -> Result<Instruction, DecodeError> {
        let mnemonic = branch_mnemonic(Self::funct3(word))?;
        let target = address.wrapping_add(Self::imm_b(word) as u32).wrapping_add(4);
        let label = symbols.label_for(target);

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            reg(Self::rs1(word)),
            reg(Self::rs2(word)),
            label,
        ]))
    }

    /// Decode LUI and AUIPC.
    fn decode_upper(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = if word & 0x7f == OP_LUI { "lui" } else { "auipc" };

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            reg(Self::rd(word)),
            Self::imm_u(word).to_string(),
        ]))
    }

    /// Decode JAL. The target operand is always a label.
    fn decode_jal(
        &self,
        word: u32,
        address: u32,
        symbols: &mut SymbolTable,
    ) -> Result<Instruction, DecodeError> {
        let target = address.wrapping_add(Self::imm_j(word) as u32);
        let label = symbols.label_for(target);

        Ok(Instruction::new(address, "jal").with_operands(vec![reg(Self::rd(word)), label]))
    }

    /// Decode JALR.
    fn decode_jalr(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        Ok(Instruction::new(address, "jalr").with_operands(vec![
            reg(Self::rd(word)),
            reg(Self::rs1(word)),
            Self::imm_i(word).to_string(),
        ]))
    }

    /// Decode CSR accesses. The CSR number renders in decimal.
    fn decode_csr(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = csr_mnemonic(Self::funct3(word))?;

        Ok(Instruction::new(address, mnemonic).with_operands(vec![
            reg(Self::rd(word)),
            Self::csr(word).to_string(),
            reg(Self::rs1(word)),
        ]))
    }

    /// Decode fence instructions. funct3 001 selects fence.i; every
    /// other value renders the plain fence.
    fn decode_fence(&self, word: u32, address: u32) -> Result<Instruction, DecodeError> {
        let mnemonic = if Self::funct3(word) == 0b001 {
            "fence.i"
        } else {
            "fence"
        };

        Ok(Instruction::new(address, mnemonic))
    }
}
