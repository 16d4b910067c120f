//! Macro and label tables built from the LaTeX source and its `.aux` file.
//!
//! Both tables are built once, before any pass runs, and are read-only
//! afterwards. The macro table comes from `\newcommand` declarations in the
//! source itself; the label table comes from the `\newlabel` entries the
//! LaTeX compiler writes to the `.aux` file, which is the only place
//! equation numbers exist once WordPress (with no LaTeX compiler of its
//! own) is the rendering target.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

static NEWCOMMAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\newcommand\{(\\\w+)\}\{(.*?)\}\n").unwrap());

static NEWLABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\newlabel\{(.*?)\}\{\{(.*?)\}").unwrap());

/// User-defined macros from `\newcommand{\name}{body}` declarations.
///
/// Keys keep the leading backslash (`\R`, not `R`); values are the raw
/// replacement bodies, unexpanded. Backed by a `BTreeMap` so substitution
/// order is deterministic (sorted by name). Declaring the same name twice
/// keeps the last body.
#[derive(Debug, Clone, Default)]
pub struct MacroTable(BTreeMap<String, String>);

impl MacroTable {
    /// Scan LaTeX source for `\newcommand` declarations. Bodies may span
    /// multiple lines; the closing brace must end its line.
    pub fn from_source(source: &str) -> Self {
        let mut map = BTreeMap::new();
        for caps in NEWCOMMAND.captures_iter(source) {
            map.insert(caps[1].to_string(), caps[2].to_string());
        }
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// The body a macro name maps to, if declared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Label identifier → assigned number, from `\newlabel` entries in the
/// `.aux` file produced by a prior LaTeX compilation.
#[derive(Debug, Clone, Default)]
pub struct LabelTable(HashMap<String, String>);

impl LabelTable {
    /// Scan `.aux` text for `\newlabel{label}{{number}...}` entries, taking
    /// the first brace-delimited field as the assigned number. Entries that
    /// do not match this shape produce no mapping.
    pub fn from_aux(aux: &str) -> Self {
        let mut map = HashMap::new();
        for caps in NEWLABEL.captures_iter(aux) {
            map.insert(caps[1].to_string(), caps[2].to_string());
        }
        Self(map)
    }

    /// Build a table from explicit entries, for embedding and tests.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The number assigned to `label`, if the `.aux` file defined one.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Like [`get`](Self::get), but a miss is [`Error::UnresolvedLabel`].
    /// Use this for labels the document actually references.
    pub fn resolve(&self, label: &str) -> Result<&str> {
        self.get(label)
            .ok_or_else(|| Error::UnresolvedLabel(label.to_string()))
    }
}
