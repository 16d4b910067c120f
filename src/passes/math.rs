//! Math passes: inline math marking plus `equation` and `align`
//! environment conversion with label numbering.
//!
//! WordPress renders a math span when it starts with the `$latex ` marker,
//! so inline spans get the marker injected and environments are rewritten
//! into centered paragraphs around a `$latex \displaystyle ...$` body.
//! Equation numbers come from the label table; a block with no `\label` is
//! simply left unnumbered, while a label the table cannot resolve aborts
//! the pass.

use crate::error::Result;
use crate::tables::LabelTable;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static INLINE_MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(.*?)\$").unwrap());

static EQUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\begin\s*\{\s*equation\s*\}(.*?)\\end\s*\{\s*equation\s*\}").unwrap()
});

static ALIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\begin\s*\{\s*align\s*\}(.*?)\\end\s*\{\s*align\s*\}").unwrap()
});

static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\label\s*\{(.*?)\}").unwrap());

/// Prefix every inline `$...$` span with the WordPress renderer marker,
/// keeping the delimiters and inner content verbatim. Pairing is
/// non-greedy, left to right, within a line.
pub fn convert_inline_math(input: &str) -> String {
    INLINE_MATH.replace_all(input, "$$latex $1$$").into_owned()
}

/// Convert every `\begin{equation}...\end{equation}` block into a centered
/// display-math paragraph, numbering its first `\label{...}` (if any) from
/// the label table.
pub fn convert_equations(input: &str, labels: &LabelTable) -> Result<String> {
    convert_environment(input, &EQUATION, labels, false, |inner| {
        format!("<p align=\"center\">\n$latex \\displaystyle {inner} $</p>")
    })
}

/// Convert every `\begin{align}...\end{align}` block, numbering each of its
/// `\label{...}` references independently in order of appearance. The
/// rewritten paragraph nests an `aligned` sub-environment so multi-line
/// content keeps its alignment.
pub fn convert_aligned(input: &str, labels: &LabelTable) -> Result<String> {
    convert_environment(input, &ALIGN, labels, true, |inner| {
        format!("<p align=\"center\">\n$latex\n\\begin{{aligned}}\n{inner}\n\\end{{aligned}}\n$\n</p>")
    })
}

/// Process each environment block matched by `env` independently: number
/// its labels, then strip the begin/end markers and wrap the inner content
/// with `wrap`. Blocks match non-greedily, so each begin marker pairs with
/// the nearest following end marker.
fn convert_environment(
    input: &str,
    env: &Regex,
    labels: &LabelTable,
    number_all: bool,
    wrap: impl Fn(&str) -> String,
) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for found in env.find_iter(input) {
        let numbered = number_labels(found.as_str(), labels, number_all)?;
        // Numbering never touches the markers, so the block still matches.
        let inner = match env.captures(&numbered) {
            Some(caps) => caps[1].to_string(),
            None => numbered,
        };

        out.push_str(&input[last..found.start()]);
        out.push_str(&wrap(&inner));
        last = found.end();
    }

    out.push_str(&input[last..]);
    Ok(out)
}

/// Replace `\label{...}` references in one block with their assigned
/// numbers, formatted as a four-space indented parenthesized suffix.
///
/// With `number_all` set, every label is resolved to its own number in
/// first-to-last order, each replacement consuming exactly one occurrence;
/// otherwise only the first label is numbered. A block without labels is
/// returned unchanged.
fn number_labels(block: &str, labels: &LabelTable, number_all: bool) -> Result<String> {
    let found: Vec<String> = LABEL
        .captures_iter(block)
        .map(|caps| caps[1].to_string())
        .collect();

    let targets = if number_all { found.as_slice() } else { &found[..found.len().min(1)] };

    let mut out = block.to_string();
    for label in targets {
        let number = labels.resolve(label)?;
        let suffix = format!("    ({number})");
        out = LABEL.replacen(&out, 1, NoExpand(&suffix)).into_owned();
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn labels() -> LabelTable {
        LabelTable::from_entries([("eq:euler", "1"), ("eq:gauss", "2"), ("eq:stokes", "3")])
    }

    #[test]
    fn inline_math_keeps_delimiters() {
        assert_eq!(convert_inline_math("Let $x > 0$ hold."), "Let $latex x > 0$ hold.");
    }

    #[test]
    fn inline_math_pairs_left_to_right() {
        assert_eq!(convert_inline_math("$a$ and $b$"), "$latex a$ and $latex b$");
    }

    #[test]
    fn inline_math_ignores_unpaired_delimiter() {
        assert_eq!(convert_inline_math("costs $5"), "costs $5");
    }

    #[test]
    fn equation_with_label_gets_numbered() {
        let input = "\\begin{equation}\nE = mc^2 \\label{eq:euler}\n\\end{equation}";
        let out = convert_equations(input, &labels()).unwrap();

        assert_eq!(out, "<p align=\"center\">\n$latex \\displaystyle \nE = mc^2     (1)\n $</p>");
    }

    #[test]
    fn equation_without_label_is_wrapped_unnumbered() {
        let input = "\\begin{equation}a + b\\end{equation}";
        let out = convert_equations(input, &labels()).unwrap();

        assert_eq!(out, "<p align=\"center\">\n$latex \\displaystyle a + b $</p>");
    }

    #[test]
    fn equation_with_unresolvable_label_fails() {
        let input = "\\begin{equation}x \\label{eq:nope}\\end{equation}";
        let err = convert_equations(input, &labels()).unwrap_err();

        assert!(matches!(err, Error::UnresolvedLabel(label) if label == "eq:nope"));
    }

    #[test]
    fn equation_blocks_are_processed_independently() {
        let input = "\\begin{equation}a\\end{equation} mid \\begin{equation}b\\end{equation}";
        let out = convert_equations(input, &labels()).unwrap();

        assert_eq!(
            out,
            "<p align=\"center\">\n$latex \\displaystyle a $</p> mid \
             <p align=\"center\">\n$latex \\displaystyle b $</p>"
        );
    }

    #[test]
    fn equation_markers_tolerate_whitespace() {
        let input = "\\begin { equation }x\\end{ equation }";
        let out = convert_equations(input, &labels()).unwrap();

        assert_eq!(out, "<p align=\"center\">\n$latex \\displaystyle x $</p>");
    }

    #[test]
    fn align_numbers_each_label_in_order() {
        let input =
            "\\begin{align}a &= b \\label{eq:euler} \\\\\nc &= d \\label{eq:gauss}\\end{align}";
        let out = convert_aligned(input, &labels()).unwrap();

        assert_eq!(
            out,
            "<p align=\"center\">\n$latex\n\\begin{aligned}\na &= b     (1) \\\\\nc &= d     (2)\n\\end{aligned}\n$\n</p>"
        );
    }

    #[test]
    fn align_without_labels_is_wrapped_unnumbered() {
        let input = "\\begin{align}x &= y\\end{align}";
        let out = convert_aligned(input, &labels()).unwrap();

        assert_eq!(out, "<p align=\"center\">\n$latex\n\\begin{aligned}\nx &= y\n\\end{aligned}\n$\n</p>");
    }

    #[test]
    fn align_with_unresolvable_label_fails() {
        let input = "\\begin{align}x \\label{eq:missing}\\end{align}";
        assert!(convert_aligned(input, &labels()).is_err());
    }

    #[test]
    fn buffer_without_environments_is_untouched() {
        let input = "nothing mathematical here";
        assert_eq!(convert_equations(input, &labels()).unwrap(), input);
        assert_eq!(convert_aligned(input, &labels()).unwrap(), input);
    }
}
