//! Symbol types and the shared symbol table.

use std::collections::HashMap;
use std::fmt;

/// A symbol from the binary's symbol table, or a synthetic label
/// manufactured for an unnamed branch/jump target.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    /// Ordinal position in the original `.symtab` (0 for synthetic labels).
    pub index: usize,
    /// Symbol name (may be empty for the null entry).
    pub name: String,
    /// Symbol value (address).
    pub value: u32,
    /// Symbol size.
    pub size: u32,
    /// Symbol type.
    pub kind: SymbolKind,
    /// Symbol binding.
    pub binding: SymbolBinding,
    /// Symbol visibility.
    pub visibility: SymbolVisibility,
    /// Section index this symbol is defined in.
    pub section_index: SectionIndex,
}

impl Symbol {
    /// Creates a synthetic label entry. Synthetic labels carry the
    /// FUNC type so the listing renders a header line at their address;
    /// every numeric field is zero.
    pub fn synthetic(name: String) -> Self {
        Self {
            index: 0,
            name,
            value: 0,
            size: 0,
            kind: SymbolKind::Function,
            binding: SymbolBinding::Local,
            visibility: SymbolVisibility::Default,
            section_index: SectionIndex::Undef,
        }
    }

    /// Returns true if this symbol is a function.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function)
    }
}

/// Symbol type/kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    /// No type (unspecified).
    None,
    /// Data object (variable, array, etc.).
    Object,
    /// Function or other executable code.
    Function,
    /// Section symbol.
    Section,
    /// File name symbol.
    File,
    /// Common data object.
    Common,
    /// Thread-local storage object.
    Tls,
    /// OS- and processor-reserved ranges.
    Loos,
    Hios,
    Loproc,
    SparcRegister,
    Hiproc,
    /// Other/unknown type.
    Other(u8),
}

impl SymbolKind {
    /// Returns the name used in the symbol-table dump.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "NOTYPE",
            Self::Object => "OBJECT",
            Self::Function => "FUNC",
            Self::Section => "SECTION",
            Self::File => "FILE",
            Self::Common => "COMMON",
            Self::Tls => "TLS",
            Self::Loos => "LOOS",
            Self::Hios => "HIOS",
            Self::Loproc => "LOPROC",
            Self::SparcRegister => "SPARC_REGISTER",
            Self::Hiproc => "HIPROC",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

/// Symbol binding (linkage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolBinding {
    /// Local symbol (not visible outside the object file).
    Local,
    /// Global symbol (visible to all object files).
    Global,
    /// Weak symbol (like global but can be overridden).
    Weak,
    /// OS- and processor-reserved ranges.
    Loos,
    Hios,
    Loproc,
    Hiproc,
    /// Other/unknown binding.
    Other(u8),
}

impl SymbolBinding {
    /// Returns the name used in the symbol-table dump.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Global => "GLOBAL",
            Self::Weak => "WEAK",
            Self::Loos => "LOOS",
            Self::Hios => "HIOS",
            Self::Loproc => "LOPROC",
            Self::Hiproc => "HIPROC",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

/// Symbol visibility, from the low bits of `st_other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolVisibility {
    Default,
    Internal,
    Hidden,
    Protected,
    Exported,
    Singleton,
    Eliminate,
    Other(u8),
}

impl SymbolVisibility {
    /// Returns the name used in the symbol-table dump.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Internal => "INTERNAL",
            Self::Hidden => "HIDDEN",
            Self::Protected => "PROTECTED",
            Self::Exported => "EXPORTED",
            Self::Singleton => "SINGLETON",
            Self::Eliminate => "ELIMINATE",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

/// Section index of a symbol: either one of the reserved values or an
/// ordinary section number, rendered literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionIndex {
    Undef,
    Loproc,
    After,
    AmdLcommon,
    Hiproc,
    Loos,
    Hios,
    Abs,
    Common,
    Hireserve,
    Ordinary(u16),
}

impl fmt::Display for SectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undef => f.pad("UNDEF"),
            Self::Loproc => f.pad("LOPROC"),
            Self::After => f.pad("AFTER"),
            Self::AmdLcommon => f.pad("AMD64_LCOMMON"),
            Self::Hiproc => f.pad("HIPROC"),
            Self::Loos => f.pad("LOOS"),
            Self::Hios => f.pad("HIOS"),
            Self::Abs => f.pad("ABS"),
            Self::Common => f.pad("COMMON"),
            Self::Hireserve => f.pad("HIRESERVE"),
            Self::Ordinary(n) => f.pad(&n.to_string()),
        }
    }
}

/// The symbol list shared by the symbol-table reader, the decoder, and
/// the listing renderer.
///
/// Real symbols and synthetic labels live in one list, in insertion
/// order. The address map points at the list entry a given address
/// resolves to; inserting a second entry for an address overwrites the
/// mapping (the later entry wins) without removing the earlier entry
/// from the list. The table is mutated only by the single disassembly
/// run that owns it.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_address: HashMap<u32, usize>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a symbol, mapping its value to the new entry.
    pub fn push(&mut self, symbol: Symbol) {
        self.by_address.insert(symbol.value, self.symbols.len());
        self.symbols.push(symbol);
    }

    /// Returns the symbol an address resolves to, if any.
    pub fn symbol_at(&self, address: u32) -> Option<&Symbol> {
        self.by_address.get(&address).map(|&idx| &self.symbols[idx])
    }

    /// Returns the symbol at `address` if it is a function (real or
    /// synthetic); the listing prints a header line for these.
    pub fn function_at(&self, address: u32) -> Option<&Symbol> {
        self.symbol_at(address).filter(|sym| sym.is_function())
    }

    /// Returns the display label for a branch/jump target, creating a
    /// memoized synthetic `L<address>` entry on first reference.
    pub fn label_for(&mut self, address: u32) -> String {
        if let Some(&idx) = self.by_address.get(&address) {
            return self.symbols[idx].name.clone();
        }
        let name = format!("L{}", address);
        self.by_address.insert(address, self.symbols.len());
        self.symbols.push(Symbol::synthetic(name.clone()));
        name
    }

    /// Iterates the symbols in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Number of entries, synthetic labels included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
