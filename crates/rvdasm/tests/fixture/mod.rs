//! In-memory ELF32 object fixtures shared by the integration and CLI
//! tests.

#![allow(dead_code)]

pub const STB_LOCAL: u8 = 0;
pub const STB_GLOBAL: u8 = 1;

pub const STT_OBJECT: u8 = 1;
pub const STT_FUNC: u8 = 2;
pub const STT_FILE: u8 = 4;

const EHSIZE: usize = 52;

// shstrtab layout: "\0.text\0.symtab\0.strtab\0.shstrtab\0"
const SHSTRTAB: &[u8] = b"\0.text\0.symtab\0.strtab\0.shstrtab\0";
const NAME_TEXT: u32 = 1;
const NAME_SYMTAB: u32 = 7;
const NAME_STRTAB: u32 = 15;
const NAME_SHSTRTAB: u32 = 23;

/// Encode a B-type word from its fields.
pub fn branch_word(funct3: u32, rs1: u32, rs2: u32, offset: i32) -> u32 {
    let imm = offset as u32;
    let imm12 = (imm >> 12) & 1;
    let imm11 = (imm >> 11) & 1;
    let imm10_5 = (imm >> 5) & 0x3f;
    let imm4_1 = (imm >> 1) & 0xf;
    (imm12 << 31)
        | (imm10_5 << 25)
        | (rs2 << 20)
        | (rs1 << 15)
        | (funct3 << 12)
        | (imm4_1 << 8)
        | (imm11 << 7)
        | 0b1100011
}

struct SymbolSpec {
    name: String,
    value: u32,
    size: u32,
    info: u8,
    shndx: u16,
}

/// Builds a minimal relocatable ELF32 image: header, `.text`,
/// `.symtab` (with the leading null entry), `.strtab`, `.shstrtab`,
/// then the five section headers.
pub struct ObjectBuilder {
    text_addr: u32,
    text: Vec<u8>,
    symbols: Vec<SymbolSpec>,
}

impl ObjectBuilder {
    pub fn new(text_addr: u32, words: &[u32]) -> Self {
        let mut text = Vec::new();
        for word in words {
            text.extend_from_slice(&word.to_le_bytes());
        }
        Self {
            text_addr,
            text,
            symbols: Vec::new(),
        }
    }

    pub fn symbol(mut self, name: &str, value: u32, size: u32, info: u8, shndx: u16) -> Self {
        self.symbols.push(SymbolSpec {
            name: name.to_string(),
            value,
            size,
            info,
            shndx,
        });
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut strtab = vec![0u8];
        let mut name_offsets = Vec::new();
        for spec in &self.symbols {
            name_offsets.push(strtab.len() as u32);
            strtab.extend_from_slice(spec.name.as_bytes());
            strtab.push(0);
        }

        let mut symtab = Vec::new();
        push_sym(&mut symtab, 0, 0, 0, 0, 0);
        for (spec, &name) in self.symbols.iter().zip(&name_offsets) {
            push_sym(&mut symtab, name, spec.value, spec.size, spec.info, spec.shndx);
        }

        let text_off = EHSIZE as u32;
        let symtab_off = text_off + self.text.len() as u32;
        let strtab_off = symtab_off + symtab.len() as u32;
        let shstrtab_off = strtab_off + strtab.len() as u32;
        let shoff = shstrtab_off + SHSTRTAB.len() as u32;

        let mut data = vec![0u8; EHSIZE];
        data[0..4].copy_from_slice(&[0x7f, b'E', b'L', b'F']);
        // ELF32, little-endian
        data[4] = 1;
        data[5] = 1;
        data[32..36].copy_from_slice(&shoff.to_le_bytes());
        data[46..48].copy_from_slice(&40u16.to_le_bytes());
        data[48..50].copy_from_slice(&5u16.to_le_bytes());
        data[50..52].copy_from_slice(&4u16.to_le_bytes());

        data.extend_from_slice(&self.text);
        data.extend_from_slice(&symtab);
        data.extend_from_slice(&strtab);
        data.extend_from_slice(SHSTRTAB);

        push_shdr(&mut data, 0, 0, 0, 0, 0);
        push_shdr(
            &mut data,
            NAME_TEXT,
            1,
            self.text_addr,
            text_off,
            self.text.len() as u32,
        );
        push_shdr(&mut data, NAME_SYMTAB, 2, 0, symtab_off, symtab.len() as u32);
        push_shdr(&mut data, NAME_STRTAB, 3, 0, strtab_off, strtab.len() as u32);
        push_shdr(
            &mut data,
            NAME_SHSTRTAB,
            3,
            0,
            shstrtab_off,
            SHSTRTAB.len() as u32,
        );

        data
    }
}

fn push_sym(buf: &mut Vec<u8>, name: u32, value: u32, size: u32, info: u8, shndx: u16) {
    buf.extend_from_slice(&name.to_le_bytes());
    buf.extend_from_slice(&value.to_le_bytes());
    buf.extend_from_slice(&size.to_le_bytes());
    buf.push(info);
    buf.push(0);
    buf.extend_from_slice(&shndx.to_le_bytes());
}

fn push_shdr(buf: &mut Vec<u8>, name: u32, sh_type: u32, addr: u32, offset: u32, size: u32) {
    for field in [name, sh_type, 0, addr, offset, size, 0, 0, 0, 0] {
        buf.extend_from_slice(&field.to_le_bytes());
    }
}
