//! JSON catalog documents
//!
//! The catalog tooling exports colour catalogs as:
//!
//! ```json
//! { "colors": [
//!     { "id": "EF-591", "code": "591", "manufacturer": "EF",
//!       "name": "Pale Ivory", "manufacturer_description": "",
//!       "synonyms": ["cream"], "tags": ["opaque"] }
//! ] }
//! ```
//!
//! Loading turns each entry into a [`CatalogRecord`]. Empty strings become
//! absent fields, and a missing code is recovered from the display-form `id`.

use crate::codes::extract_base_code;
use crate::error::Result;
use crate::types::CatalogRecord;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    colors: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    manufacturer: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "manufacturer_description")]
    description: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn trimmed_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

impl From<RawEntry> for CatalogRecord {
    fn from(raw: RawEntry) -> Self {
        let id = non_blank(raw.id);
        let code = non_blank(raw.code).or_else(|| {
            id.as_deref()
                .filter(|id| id.contains(crate::codes::CODE_SEPARATOR))
                .map(|id| extract_base_code(id).to_string())
                .filter(|code| !code.is_empty())
        });
        CatalogRecord {
            id,
            name: non_blank(raw.name),
            code,
            manufacturer: non_blank(raw.manufacturer),
            tags: trimmed_list(raw.tags),
            description: non_blank(raw.description),
            synonyms: trimmed_list(raw.synonyms),
        }
    }
}

/// A loaded catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogDocument {
    /// Records in file order
    pub records: Vec<CatalogRecord>,
}

impl CatalogDocument {
    /// Parse a catalog from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(content)?;
        Ok(CatalogDocument {
            records: raw.colors.into_iter().map(CatalogRecord::from).collect(),
        })
    }

    /// Read and parse a catalog file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let doc = Self::from_json_str(&content)?;
        tracing::debug!(
            target: "molten::catalog",
            path = %path.display(),
            records = doc.records.len(),
            "Loaded catalog document"
        );
        Ok(doc)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
