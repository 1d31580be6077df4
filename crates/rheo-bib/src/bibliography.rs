//! Read-only bibliography store.

use crate::error::BibResult;
use crate::parse::parse_entries;
use crate::table::BibTable;
use crate::tree::TreeView;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// The bibliography shipped with the crate.
const BUNDLED_BIB: &str = include_str!("../data/models.bib");

/// One citation: a unique key, an entry type, and an ordered
/// field-name → field-value map. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationEntry {
    key: String,
    entry_type: String,
    fields: Vec<(String, String)>,
}

impl CitationEntry {
    pub(crate) fn new(key: String, entry_type: String, fields: Vec<(String, String)>) -> Self {
        Self {
            key,
            entry_type,
            fields,
        }
    }

    /// Citation key, e.g. `herschel_bulkley_1926`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// BibTeX entry type (`article`, `book`, ...), lowercased.
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    /// Field value by lowercased name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Fields in source order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Parsed, read-only collection of citation entries, uniqueness enforced
/// by citation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bibliography {
    entries: Vec<CitationEntry>,
}

impl Bibliography {
    /// Load and parse a BibTeX file.
    ///
    /// Any I/O or syntax failure is surfaced immediately; the store is
    /// never partially populated.
    pub fn load(path: impl AsRef<Path>) -> BibResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let bib = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            entries = bib.len(),
            "loaded bibliography"
        );
        Ok(bib)
    }

    /// Parse BibTeX text already in memory.
    pub fn parse(text: &str) -> BibResult<Self> {
        let entries = parse_entries(text)?;
        Ok(Self { entries })
    }

    /// The bibliography shipped with the crate (`data/models.bib`).
    pub fn bundled() -> BibResult<Self> {
        Self::parse(BUNDLED_BIB)
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[CitationEntry] {
        &self.entries
    }

    /// Look up an entry by citation key.
    pub fn get(&self, key: &str) -> Option<&CitationEntry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Citation keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CitationEntry::key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat table projection: row per citation, column per field.
    pub fn to_table(&self) -> BibTable {
        BibTable::from_bibliography(self)
    }

    /// Nested tree projection for interactive inspection.
    pub fn to_tree_view(&self) -> TreeView {
        TreeView::from_bibliography(self)
    }
}
