//! Inline formatting: `{\em ...}`, `{\bf ...}`, and `\href{...}{...}`.

use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*\\em\s*(.*?)\s*\}").unwrap());

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*\\bf\s*(.*?)\s*\}").unwrap());

static HYPERLINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\href\s*\{(.*?)\}\{(.*?)\}").unwrap());

/// Rewrite the inline formatting directives: `{\em text}` → `<i>text</i>`,
/// `{\bf text}` → `<strong>text</strong>`, and `\href{url}{text}` →
/// `<a href="url">text</a>`. The three rewrites are independent and
/// order-insensitive; argument text is trimmed for emphasis and bold.
pub fn convert_formatting(input: &str) -> String {
    let out = EMPHASIS.replace_all(input, "<i>$1</i>");
    let out = BOLD.replace_all(&out, "<strong>$1</strong>");
    HYPERLINK.replace_all(&out, "<a href=\"$1\">$2</a>").into_owned()
}
