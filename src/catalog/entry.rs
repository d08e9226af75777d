//! Catalog entry types shared by the index, the search engine and the tools.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Whether an entry is a reusable component or a full page template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Component,
    Template,
}

impl EntryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Template => "template",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable unit of the catalog.
///
/// In the JSON document `kind` is spelled `type`. Any field not named here is
/// kept verbatim in `extra` for the documentation tools; it is never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        kind: EntryKind,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            category: category.into(),
            description: String::new(),
            keywords: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn is_template(&self) -> bool {
        self.kind == EntryKind::Template
    }

    /// Get a string field from the extra bag.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// Path of the page template file, if this entry has one.
    pub fn template_path(&self) -> Option<&str> {
        self.extra_str("templatePath")
    }
}

/// A catalog entry paired with its relevance for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CatalogEntry,
    pub score: f64,
}

impl<'a> ScoredEntry<'a> {
    pub fn id(&self) -> &'a str {
        &self.entry.id
    }
}
