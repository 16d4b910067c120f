//! Structural passes: document-body extraction, title-element stripping,
//! and section headings.

use once_cell::sync::Lazy;
use regex::Regex;

static DOCUMENT_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\begin\s*\{\s*document\s*\}(.*)\\end\s*\{\s*document\s*\}").unwrap()
});

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\title\{.*\}").unwrap());

static AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\author\{.*\}").unwrap());

static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\\section\s*\{([\s\S]*?)\}").unwrap());

/// Extract the span between `\begin{document}` and `\end{document}`,
/// dropping the markers themselves. If either marker is missing the buffer
/// is returned unchanged.
///
/// The span match is greedy, so the last `\end{document}` in the buffer
/// terminates it. This pass is meant to run exactly once; a second run on
/// an already-extracted buffer is a no-op only because the markers are gone.
pub fn extract_body(input: &str) -> String {
    match DOCUMENT_BODY.captures(input) {
        Some(caps) => caps[1].to_string(),
        None => input.to_string(),
    }
}

/// Remove the first `\title{...}` and the first `\author{...}` declaration.
///
/// Known limitation: the argument match is greedy within its line, so a
/// line carrying further braced groups after the declaration loses
/// everything up to the line's last closing brace.
pub fn strip_title_elements(input: &str) -> String {
    let stripped = TITLE.replace(input, "");
    AUTHOR.replace(&stripped, "").into_owned()
}

/// Rewrite every `\section{...}` directive as a level-4 heading, keeping
/// the argument text verbatim.
pub fn convert_sections(input: &str) -> String {
    SECTION.replace_all(input, "<h4> $1 </h4>").into_owned()
}
