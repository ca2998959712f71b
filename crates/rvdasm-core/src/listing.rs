//! Listing and symbol-table rendering.
//!
//! Pure string renderers: the decode pass finishes before either block
//! is rendered, so every synthetic label is already in the symbol
//! table when header lines are emitted.

use crate::{Instruction, SymbolTable};

/// Renders the `.text` block: the section header line, one line per
/// instruction with the address in two columns, and a `<name>:` header
/// wherever the address carries a FUNC symbol (real or synthetic).
/// Ends with the block's trailing blank line.
pub fn render_listing(instructions: &[Instruction], symbols: &SymbolTable) -> String {
    let mut out = String::new();
    out.push_str(".text\n");

    for insn in instructions {
        if let Some(symbol) = symbols.function_at(insn.address) {
            out.push_str(&format!("{:08x}   <{}>:\n", insn.address, symbol.name));
        }

        out.push_str(&format!(
            "   {:05x}:\t   {:08x}:\t{:>7}\t",
            insn.address, insn.address, insn.mnemonic
        ));
        for (i, operand) in insn.operands.iter().enumerate() {
            if i > 0 {
                out.push_str(",\t");
            }
            out.push_str(operand);
        }
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Renders the `.symtab` block: the section header line, the
/// fixed-width column header, and one row per symbol in original
/// order. Rows whose name starts with `L` are suppressed: that prefix
/// is the synthetic-label convention, and it applies to real symbols
/// too.
pub fn render_symtab(symbols: &SymbolTable) -> String {
    let mut out = String::new();
    out.push_str(".symtab\n");
    out.push_str(&format!(
        "{} {:<15} {:>7} {:<8} {:<8} {:<8} {:>6} {}\n",
        "Symbol", "Value", "Size", "Type", "Bind", "Vis", "Index", "Name"
    ));

    for symbol in symbols.iter() {
        if symbol.name.starts_with('L') {
            continue;
        }
        out.push_str(&format!(
            "[{:4}] 0x{:<15X} {:5} {:<8} {:<8} {:<8} {:>6} {}\n",
            symbol.index,
            symbol.value,
            symbol.size,
            symbol.kind.name(),
            symbol.binding.name(),
            symbol.visibility.name(),
            symbol.section_index,
            symbol.name
        ));
    }

    out
}
