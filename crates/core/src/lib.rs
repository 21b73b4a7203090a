//! Core types for the Molten catalog query engine
//!
//! This crate defines the foundational pieces the search crate builds on:
//! - CatalogRecord / InventoryRecord: plain records supplied by the caller
//! - Searchable / Sortable: the narrow traits the engine reads records through
//! - Code resolution: display codes, base codes and lookup by code
//! - ManufacturerDirectory / CoeTable: known manufacturers and COE groups
//! - EngineConfig: optional `molten.toml` configuration
//! - CatalogDocument: JSON catalog loading
//! - MoltenError: error type for the fallible (file-facing) surfaces

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod codes;
pub mod config;
pub mod error;
pub mod manufacturer;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use catalog::CatalogDocument;
pub use codes::{extract_base_code, find_by_code, generate_preferred_code, LookupMode};
pub use config::{EngineConfig, CONFIG_FILE_NAME};
pub use error::{MoltenError, Result};
pub use manufacturer::{CoeTable, Manufacturer, ManufacturerDirectory};
pub use traits::{Searchable, Sortable};
pub use types::{CatalogRecord, InventoryRecord, InventoryType, ParseKindError, SortKey};
