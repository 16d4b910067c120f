//! Single-level substitution of user-defined `\newcommand` macros.

use crate::tables::MacroTable;

/// Replace every literal occurrence of each macro name with its body.
///
/// Macros apply in the table's sorted-name order and bodies are inserted
/// verbatim: a body that itself contains another macro's name is not
/// expanded further (single-level substitution only). Names that never
/// occur in the buffer are no-ops.
pub fn substitute_macros(input: &str, macros: &MacroTable) -> String {
    let mut out = input.to_string();
    for (name, body) in macros.iter() {
        out = out.replace(name, body);
    }
    out
}
