//! Nested tree projection of the bibliography.

use crate::bibliography::Bibliography;
use crate::error::BibResult;
use serde_json::{Map, Value};
use std::fmt;

/// Collapsible, human-browsable rendering of the bibliography: citation
/// key → {field: value}, backed by a JSON tree.
///
/// Presentation-only; other components must not treat this as a data
/// contract. Key and field order follow the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeView {
    root: Value,
}

impl TreeView {
    pub(crate) fn from_bibliography(bib: &Bibliography) -> Self {
        let mut root = Map::new();
        for entry in bib.entries() {
            let mut fields = Map::new();
            for (name, value) in entry.fields() {
                fields.insert(name.to_string(), Value::String(value.to_string()));
            }
            root.insert(entry.key().to_string(), Value::Object(fields));
        }
        Self {
            root: Value::Object(root),
        }
    }

    /// The underlying JSON tree.
    pub fn value(&self) -> &Value {
        &self.root
    }

    /// Pretty-printed JSON export of the tree.
    pub fn to_json_pretty(&self) -> BibResult<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Collapsed view: top-level citation keys with their field counts.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        if let Some(entries) = self.root.as_object() {
            for (key, fields) in entries {
                let count = fields.as_object().map_or(0, Map::len);
                out.push_str(&format!("▸ {key} ({count} fields)\n"));
            }
        }
        out
    }
}

impl fmt::Display for TreeView {
    /// Fully expanded rendering, one citation per block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(entries) = self.root.as_object() {
            for (key, fields) in entries {
                writeln!(f, "▾ {key}")?;
                if let Some(fields) = fields.as_object() {
                    for (name, value) in fields {
                        writeln!(f, "    {name}: {}", value.as_str().unwrap_or_default())?;
                    }
                }
            }
        }
        Ok(())
    }
}
