//! Molten - catalog query engine for glass-working supply inventories
//!
//! Molten searches, sorts and resolves catalog and inventory records that a
//! caller has already loaded. It never persists anything and never mutates
//! the records it is given.
//!
//! # Quick Start
//!
//! ```
//! use molten::{CatalogQuery, CatalogRecord, QueryEngine, SortKey};
//!
//! let records = vec![
//!     CatalogRecord::new().with_name("Coral").with_code("143").with_manufacturer("Effetre"),
//!     CatalogRecord::new().with_name("Black").with_code("0101").with_manufacturer("Bullseye"),
//! ];
//!
//! let engine = QueryEngine::default();
//!
//! // Free-text search with AND semantics, sorted by COE group
//! let hits = engine.query(&records, &CatalogQuery::default().with_sort(SortKey::Manufacturer));
//! assert_eq!(hits[0].name.as_deref(), Some("Black"));
//!
//! // Display codes resolve back to records
//! let coral = engine.resolve_code(&records, "Effetre-143");
//! assert!(coral.is_some());
//! ```
//!
//! # Architecture
//!
//! - `molten-core`: records, traits, code resolution, manufacturer
//!   directory, configuration and catalog loading
//! - `molten-search`: tokenizer, matcher, sort engine and [`QueryEngine`]

pub use molten_core::*;
pub use molten_search::*;
