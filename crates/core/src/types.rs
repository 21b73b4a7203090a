//! Record types consumed by the query engine
//!
//! This module defines the plain data records the engine reads:
//! - CatalogRecord: one catalog item (a glass colour from a manufacturer)
//! - InventoryRecord: one inventory, purchase or sale entry against a code
//! - InventoryType: discriminates inventory entries
//! - SortKey: which field the sort engine orders by
//!
//! Records are supplied by the caller. The engine only reads and reorders
//! them; it never mutates or synthesizes records.

use crate::codes::generate_preferred_code;
use crate::traits::{Searchable, Sortable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure to parse one of the engine's small enums from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKindError {
    /// Which enum was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

// ============================================================================
// CatalogRecord
// ============================================================================

/// A catalog item as supplied by the persistence layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Opaque external identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Colour name
    #[serde(default)]
    pub name: Option<String>,

    /// Bare catalog code (no manufacturer prefix)
    #[serde(default)]
    pub code: Option<String>,

    /// Manufacturer name or short code
    #[serde(default)]
    pub manufacturer: Option<String>,

    /// Free-form tags, in display order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Manufacturer description text (not searched)
    #[serde(
        default,
        alias = "manufacturer_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Alternative colour names (not searched)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl CatalogRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Builder: set manufacturer
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Builder: set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set synonyms
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Manufacturer-prefixed code shown to users, e.g. `"Effetre-143"`
    ///
    /// A missing code is treated as empty.
    pub fn display_code(&self) -> String {
        generate_preferred_code(
            self.code.as_deref().unwrap_or(""),
            self.manufacturer.as_deref(),
        )
    }
}

impl Searchable for CatalogRecord {
    /// name, code, tags..., manufacturer
    fn searchable_text(&self) -> Vec<&str> {
        let mut text = Vec::with_capacity(self.tags.len() + 3);
        text.extend(self.name.as_deref());
        text.extend(self.code.as_deref());
        text.extend(self.tags.iter().map(String::as_str));
        text.extend(self.manufacturer.as_deref());
        text
    }
}

impl Sortable for CatalogRecord {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }
}

// ============================================================================
// InventoryType
// ============================================================================

/// Kind of inventory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryType {
    /// Stock on hand
    #[default]
    Inventory,
    /// Purchase record
    Buy,
    /// Sale record
    Sell,
}

impl InventoryType {
    /// All variants in declaration order
    pub const ALL: [InventoryType; 3] = [
        InventoryType::Inventory,
        InventoryType::Buy,
        InventoryType::Sell,
    ];

    /// Lowercase name used in serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryType::Inventory => "inventory",
            InventoryType::Buy => "buy",
            InventoryType::Sell => "sell",
        }
    }
}

impl fmt::Display for InventoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InventoryType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        InventoryType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseKindError {
                kind: "inventory type",
                value: s.to_string(),
            })
    }
}

// ============================================================================
// InventoryRecord
// ============================================================================

/// An inventory, purchase or sale entry recorded against a catalog code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Opaque external identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Catalog code this entry refers to (bare or display form)
    #[serde(default)]
    pub catalog_code: Option<String>,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Quantity (units are owned by the caller)
    #[serde(default)]
    pub count: f64,

    /// Entry kind
    #[serde(default, rename = "type")]
    pub item_type: InventoryType,
}

impl InventoryRecord {
    /// Create an entry of the given kind with a zero count
    pub fn new(item_type: InventoryType) -> Self {
        InventoryRecord {
            item_type,
            ..Default::default()
        }
    }

    /// Builder: set id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: set catalog code
    pub fn with_catalog_code(mut self, code: impl Into<String>) -> Self {
        self.catalog_code = Some(code.into());
        self
    }

    /// Builder: set notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builder: set count
    pub fn with_count(mut self, count: f64) -> Self {
        self.count = count;
        self
    }
}

impl Searchable for InventoryRecord {
    /// notes, catalog code
    fn searchable_text(&self) -> Vec<&str> {
        self.notes
            .as_deref()
            .into_iter()
            .chain(self.catalog_code.as_deref())
            .collect()
    }
}

// ============================================================================
// SortKey
// ============================================================================

/// Field the sort engine orders catalog records by
///
/// Sorting is always ascending and case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Colour name
    #[default]
    Name,
    /// Bare catalog code
    Code,
    /// Manufacturer, grouped by COE
    Manufacturer,
}

impl SortKey {
    /// Lowercase name used in serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Code => "code",
            SortKey::Manufacturer => "manufacturer",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "code" => Ok(SortKey::Code),
            "manufacturer" => Ok(SortKey::Manufacturer),
            _ => Err(ParseKindError {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}
