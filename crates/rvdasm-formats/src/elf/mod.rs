//! ELF32 object file parser.
//!
//! Parses the pieces of a relocatable RISC-V object this tool needs:
//! the file header, the section header table (with names resolved
//! through `.shstrtab`), and the `.symtab`/`.strtab` symbol table.

mod header;
mod section;
mod symbol;

pub use header::Elf32Header;
pub use section::SectionHeader;
pub use symbol::SymbolEntry;

use crate::ParseError;
use indexmap::IndexMap;
use rvdasm_core::SymbolTable;

/// A parsed ELF32 object file.
#[derive(Debug)]
pub struct Elf32<'a> {
    /// Raw bytes of the file.
    data: &'a [u8],
    /// Parsed header fields.
    pub header: Elf32Header,
    /// Sections by name, in section-header-table order.
    pub sections: IndexMap<String, SectionHeader>,
    /// The symbol table, in `.symtab` order.
    pub symbols: SymbolTable,
}

impl<'a> Elf32<'a> {
    /// Parse an ELF32 object from raw bytes.
    ///
    /// Header validation, section headers, and symbols are each parsed
    /// to completion before the next phase begins. Any structure that
    /// points outside the buffer is a fatal error.
    pub fn parse(data: &'a [u8]) -> Result<Self, ParseError> {
        let header = Elf32Header::parse(data)?;
        let sections = Self::parse_section_headers(data, &header)?;
        let symbols = Self::parse_symbols(data, &sections)?;

        Ok(Self {
            data,
            header,
            sections,
            symbols,
        })
    }

    fn parse_section_headers(
        data: &[u8],
        header: &Elf32Header,
    ) -> Result<IndexMap<String, SectionHeader>, ParseError> {
        // The section-name string table is found through its own
        // header, at e_shoff + e_shentsize * e_shstrndx.
        let shstr_off =
            header.e_shoff as usize + header.e_shentsize as usize * header.e_shstrndx as usize;
        if shstr_off + SectionHeader::SIZE > data.len() {
            return Err(ParseError::too_short(
                shstr_off + SectionHeader::SIZE,
                data.len(),
            ));
        }
        let shstrtab = SectionHeader::parse(&data[shstr_off..])?;
        let names = StringTable::new(section_window(data, &shstrtab)?);

        let mut sections = IndexMap::with_capacity(header.e_shnum as usize);
        let mut offset = header.e_shoff as usize;

        for _ in 0..header.e_shnum {
            if offset + SectionHeader::SIZE > data.len() {
                return Err(ParseError::too_short(
                    offset + SectionHeader::SIZE,
                    data.len(),
                ));
            }

            let mut section = SectionHeader::parse(&data[offset..])?;
            let name = names.get(section.sh_name as usize)?.to_string();
            section.set_name(name.clone());
            sections.insert(name, section);
            offset += SectionHeader::SIZE;
        }

        Ok(sections)
    }

    fn parse_symbols(
        data: &[u8],
        sections: &IndexMap<String, SectionHeader>,
    ) -> Result<SymbolTable, ParseError> {
        let symtab = sections
            .get(".symtab")
            .ok_or(ParseError::MissingSection(".symtab"))?;
        let strtab = sections
            .get(".strtab")
            .ok_or(ParseError::MissingSection(".strtab"))?;

        let strings = StringTable::new(section_window(data, strtab)?);
        let entries = section_window(data, symtab)?;

        let mut symbols = SymbolTable::new();
        for (i, window) in entries.chunks_exact(SymbolEntry::SIZE).enumerate() {
            let entry = SymbolEntry::parse(window)?;
            let name = strings.get(entry.st_name as usize)?.to_string();
            symbols.push(entry.to_symbol(i, name));
        }

        Ok(symbols)
    }

    /// Returns the named section, or a MissingSection error.
    pub fn section(&self, name: &'static str) -> Result<&SectionHeader, ParseError> {
        self.sections.get(name).ok_or(ParseError::MissingSection(name))
    }

    /// Returns the file bytes a section covers.
    pub fn section_data(&self, section: &SectionHeader) -> Result<&'a [u8], ParseError> {
        section_window(self.data, section)
    }
}

/// Bounds-checked view of a section's bytes.
fn section_window<'a>(data: &'a [u8], section: &SectionHeader) -> Result<&'a [u8], ParseError> {
    let start = section.sh_offset as usize;
    let end = start + section.sh_size as usize;
    if end > data.len() {
        return Err(ParseError::too_short(end, data.len()));
    }
    Ok(&data[start..end])
}

/// A string table of null-terminated names referenced by offset.
#[derive(Debug)]
struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn get(&self, offset: usize) -> Result<&'a str, ParseError> {
        if offset >= self.data.len() {
            return Err(ParseError::InvalidStringIndex {
                index: offset,
                size: self.data.len(),
            });
        }
        let remaining = &self.data[offset..];
        let end = remaining
            .iter()
            .position(|&b| b == 0)
            .ok_or(ParseError::InvalidStringIndex {
                index: offset,
                size: self.data.len(),
            })?;
        std::str::from_utf8(&remaining[..end]).map_err(|_| {
            ParseError::invalid_structure("string table", offset as u64, "name is not UTF-8")
        })
    }
}
