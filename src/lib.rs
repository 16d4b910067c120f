//! # latex2wordpress
//!
//! Converts a LaTeX article into simplified HTML suitable for pasting into
//! WordPress's rich-text editor. WordPress has no LaTeX compiler, so the
//! converter leans on the `.aux` file a normal LaTeX compilation writes:
//! the equation numbers assigned there are substituted for `\label` and
//! reference directives in the source.
//!
//! ## What gets rewritten
//!
//! - `\newcommand` macros: single-level literal substitution
//! - `$...$` spans: tagged with the `$latex ...$` renderer marker
//! - `\begin{equation}` / `\begin{align}` blocks: centered display-math
//!   paragraphs, numbered from the `.aux` file
//! - `\section{...}` → `<h4>`, `{\em ...}` → `<i>`, `{\bf ...}` →
//!   `<strong>`, `\href{url}{text}` → `<a href="url">text</a>`
//! - `\myeqno{label}` → `Eq. (N)`, `\eqref{label}` → `(N)`
//!
//! Everything else passes through untouched: this is a fixed set of
//! pattern rewrites over one working buffer, not a LaTeX parser.
//!
//! ## Quick start
//!
//! ```rust
//! use latex2wordpress::convert;
//!
//! let tex = r"\begin{document}\section{Intro} Let $x > 0$.\end{document}";
//! let html = convert(tex, "").unwrap();
//!
//! assert!(html.contains("<h4> Intro </h4>"));
//! assert!(html.contains("$latex x > 0$"));
//! ```
//!
//! For control over individual passes or output paths, use [`Converter`]
//! directly; the binary drives it one pass at a time with progress output.

pub mod converter;
pub mod error;
pub mod passes;
pub mod tables;

pub use converter::Converter;
pub use error::{Error, Result};
pub use tables::{LabelTable, MacroTable};

/// Run the full pipeline over in-memory sources and return the rewritten
/// document. `tex` is the LaTeX source, `aux` the `.aux` metadata text.
pub fn convert(tex: &str, aux: &str) -> Result<String> {
    let mut converter = Converter::new("document.tex", tex, aux);
    converter.run()?;
    Ok(converter.working().to_string())
}
