//! The document transformer: one working buffer, a fixed pass order.

use crate::error::Result;
use crate::passes;
use crate::tables::{LabelTable, MacroTable};
use std::fs;
use std::path::{Path, PathBuf};

/// Converts one LaTeX article into WordPress-ready HTML.
///
/// Holds the untouched source, the working buffer every pass rewrites
/// wholesale, and the macro/label tables built once at construction. The
/// pass methods must run in the order documented on [`Converter::run`]:
/// later passes assume earlier ones already normalized or removed their
/// constructs, and no pass is designed for re-invocation.
#[derive(Debug)]
pub struct Converter {
    source_name: PathBuf,
    original: String,
    working: String,
    macros: MacroTable,
    labels: LabelTable,
}

impl Converter {
    /// Build a converter from in-memory sources. `source_name` only feeds
    /// default output-path derivation; nothing is read from disk.
    pub fn new(source_name: impl Into<PathBuf>, tex: &str, aux: &str) -> Self {
        let original = tex.to_string();
        Self {
            source_name: source_name.into(),
            macros: MacroTable::from_source(&original),
            labels: LabelTable::from_aux(aux),
            working: original.clone(),
            original,
        }
    }

    /// Read the LaTeX source and its `.aux` companion from disk.
    pub fn from_files(tex_path: impl AsRef<Path>, aux_path: impl AsRef<Path>) -> Result<Self> {
        let tex = fs::read_to_string(&tex_path)?;
        let aux = fs::read_to_string(aux_path)?;
        Ok(Self::new(tex_path.as_ref(), &tex, &aux))
    }

    /// The source text as read, never modified.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The current state of the working buffer.
    pub fn working(&self) -> &str {
        &self.working
    }

    pub fn macros(&self) -> &MacroTable {
        &self.macros
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Reduce the buffer to the span between the document markers.
    pub fn extract_body(&mut self) {
        self.working = passes::extract_body(&self.working);
    }

    /// Substitute `\newcommand` macros throughout the buffer.
    pub fn substitute_macros(&mut self) {
        self.working = passes::substitute_macros(&self.working, &self.macros);
    }

    /// Drop the first `\title{...}` and `\author{...}` declarations.
    pub fn strip_title_elements(&mut self) {
        self.working = passes::strip_title_elements(&self.working);
    }

    /// Tag inline `$...$` spans with the WordPress renderer marker.
    pub fn convert_inline_math(&mut self) {
        self.working = passes::convert_inline_math(&self.working);
    }

    /// Number and wrap `equation` environments.
    pub fn convert_equations(&mut self) -> Result<()> {
        self.working = passes::convert_equations(&self.working, &self.labels)?;
        Ok(())
    }

    /// Number and wrap `align` environments.
    pub fn convert_aligned(&mut self) -> Result<()> {
        self.working = passes::convert_aligned(&self.working, &self.labels)?;
        Ok(())
    }

    /// Rewrite `\section{...}` directives as headings.
    pub fn convert_sections(&mut self) {
        self.working = passes::convert_sections(&self.working);
    }

    /// Resolve `\myeqno` and `\eqref` cross references.
    pub fn convert_references(&mut self) -> Result<()> {
        self.working = passes::convert_references(&self.working, &self.labels)?;
        Ok(())
    }

    /// Rewrite `{\em}`, `{\bf}`, and `\href` directives.
    pub fn convert_formatting(&mut self) {
        self.working = passes::convert_formatting(&self.working);
    }

    /// Run every pass in the supported order: body extraction, macro
    /// substitution, title stripping, inline math, equation environments,
    /// align environments, sections, cross references, formatting.
    ///
    /// Fail-fast: the first unresolved label aborts, leaving the buffer at
    /// whatever the last completed pass produced.
    pub fn run(&mut self) -> Result<()> {
        self.extract_body();
        self.substitute_macros();
        self.strip_title_elements();
        self.convert_inline_math();
        self.convert_equations()?;
        self.convert_aligned()?;
        self.convert_sections();
        self.convert_references()?;
        self.convert_formatting();
        Ok(())
    }

    /// Default output path: the source name with its stem suffixed, so
    /// `notes.tex` becomes `notes_wordpress.tex` next to the source.
    pub fn default_output_path(&self) -> PathBuf {
        let stem = self
            .source_name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.source_name.with_file_name(format!("{stem}_wordpress.tex"))
    }

    /// Write the working buffer verbatim to `path`, or to the derived
    /// default when none is given. Returns the path written.
    pub fn write_html(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_output_path());
        fs::write(&path, &self.working)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    const TEX: &str = r"\documentclass{article}
\newcommand{\R}{\mathbb{R}}
\title{Sample}
\author{Someone}
\begin{document}
\title{Sample}
\author{Someone}
\section{Intro}
Let $x \in \R$.
\begin{equation}
x^2 \ge 0 \label{eq:sq}
\end{equation}
By \eqref{eq:sq} and \myeqno{eq:sq}, {\bf done}.
\end{document}
";

    const AUX: &str = "\\relax\n\\newlabel{eq:sq}{{1}{1}}\n";

    #[test]
    fn run_applies_all_passes_in_order() {
        let mut converter = Converter::new("sample.tex", TEX, AUX);
        converter.run().unwrap();
        let out = converter.working();

        assert!(!out.contains("\\begin{document}"));
        assert!(!out.contains("\\title"));
        assert!(!out.contains("\\author"));
        assert!(out.contains("$latex x \\in \\mathbb{R}$"));
        assert!(out.contains("<h4> Intro </h4>"));
        assert!(out.contains("    (1)"));
        assert!(out.contains("$latex \\displaystyle"));
        assert!(out.contains("By (1) and Eq. (1)"));
        assert!(out.contains("<strong>done</strong>"));
        assert_eq!(converter.original(), TEX);
    }

    #[test]
    fn run_fails_on_unresolved_label() {
        let mut converter = Converter::new("sample.tex", TEX, "");
        let err = converter.run().unwrap_err();

        assert!(matches!(err, Error::UnresolvedLabel(label) if label == "eq:sq"));
    }

    #[test]
    fn pattern_misses_leave_buffer_unchanged() {
        let mut converter = Converter::new("plain.tex", "just prose, nothing else", "");
        converter.run().unwrap();

        assert_eq!(converter.working(), "just prose, nothing else");
    }

    #[test]
    fn derives_default_output_path() {
        let converter = Converter::new("/tmp/article.tex", "", "");
        assert_eq!(converter.default_output_path(), PathBuf::from("/tmp/article_wordpress.tex"));
    }

    #[test]
    fn writes_working_buffer_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("out.html");

        let converter = Converter::new("sample.tex", "content", "");
        let written = converter.write_html(Some(&out_path)).unwrap();

        assert_eq!(written, out_path);
        assert_eq!(fs::read_to_string(&out_path).unwrap(), "content");
    }

    #[test]
    fn failed_run_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.tex");
        let tex = "\\begin{document}\\begin{equation}x \\label{eq:nope}\\end{equation}\\end{document}";

        let mut converter = Converter::new(&source, tex, "");
        assert!(converter.run().is_err());

        assert!(!converter.default_output_path().exists());
    }

    #[test]
    fn writes_to_derived_path_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("notes.tex");

        let converter = Converter::new(&source, "content", "");
        let written = converter.write_html(None).unwrap();

        assert_eq!(written, dir.path().join("notes_wordpress.tex"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "content");
    }
}
