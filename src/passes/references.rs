//! Cross-reference resolution for `\myeqno` and `\eqref` directives in
//! running text (labels inside equation environments are handled by the
//! math passes).

use crate::error::Result;
use crate::tables::LabelTable;
use once_cell::sync::Lazy;
use regex::Regex;

static MYEQNO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\myeqno\{\s*(.*?)\s*\}").unwrap());

static EQREF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\eqref\{\s*(.*?)\s*\}").unwrap());

/// Resolve every `\myeqno{label}` and `\eqref{label}` directive against the
/// label table. `\myeqno` renders as `Eq. (N)`, `\eqref` as a bare `(N)`.
/// A label missing from the table aborts the pass.
pub fn convert_references(input: &str, labels: &LabelTable) -> Result<String> {
    let resolved = resolve_directive(input, &MYEQNO, "Eq. ", labels)?;
    resolve_directive(&resolved, &EQREF, "", labels)
}

/// Two-phase substitution for one directive kind: first collect every
/// occurrence as the literal text it appears as, along with its
/// whitespace-trimmed label, then substitute each occurrence by that exact
/// literal. Rewriting one occurrence therefore cannot corrupt a different
/// occurrence that merely looks similar after a partial rewrite.
fn resolve_directive(
    input: &str,
    directive: &Regex,
    prefix: &str,
    labels: &LabelTable,
) -> Result<String> {
    let found: Vec<(String, String)> = directive
        .captures_iter(input)
        .map(|caps| (caps[0].to_string(), caps[1].to_string()))
        .collect();

    let mut out = input.to_string();
    for (literal, label) in found {
        let number = labels.resolve(&label)?;
        out = out.replacen(&literal, &format!("{prefix}({number})"), 1);
    }

    Ok(out)
}
