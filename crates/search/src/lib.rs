//! Search, filter and sort for Molten catalog records
//!
//! This crate provides:
//! - Query tokenizer (bare words and quoted phrases)
//! - AND-semantics substring matcher over `Searchable` records
//! - Sort engine over `Sortable` records (name, code, manufacturer by COE)
//! - QueryEngine facade composing filter → sort and code resolution
//!
//! # Usage
//!
//! ```
//! use molten_core::{CatalogRecord, SortKey};
//! use molten_search::{CatalogQuery, QueryEngine};
//!
//! let records = vec![
//!     CatalogRecord::new().with_name("Dark Red").with_manufacturer("Kugler"),
//!     CatalogRecord::new().with_name("Red Orange").with_manufacturer("Bullseye"),
//! ];
//!
//! let engine = QueryEngine::default();
//! let query = CatalogQuery::new("red").with_sort(SortKey::Manufacturer);
//! let hits = engine.query(&records, &query);
//! assert_eq!(hits[0].name.as_deref(), Some("Red Orange"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod matcher;
pub mod query;
pub mod sort;
pub mod tokenizer;

// Re-export commonly used types
pub use matcher::{
    filter_inventory_by_type, filter_with_query_string, search_catalog_items,
    search_inventory_items, TermSet, FIELD_JOINER,
};
pub use query::{CatalogQuery, QueryEngine};
pub use sort::{sort_catalog_items, RecordSortKey};
pub use tokenizer::parse_search_terms;
