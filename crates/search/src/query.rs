//! Query facade
//!
//! [`QueryEngine`] composes the three components the way a UI layer uses
//! them: filter by a free-text query, then order by a sort key, and
//! resolve typed or scanned codes against the same collection.
//!
//! The engine holds only immutable configuration (the COE table and lookup
//! mode), so one instance can be shared freely across threads.

use crate::matcher::TermSet;
use crate::sort::sort_catalog_items;
use molten_core::{
    find_by_code, CoeTable, EngineConfig, LookupMode, Result, Searchable, SortKey, Sortable,
};
use serde::{Deserialize, Serialize};

/// A search request: free text plus an optional sort order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Raw query text; empty matches everything
    #[serde(default)]
    pub text: String,
    /// Sort order; `None` keeps input order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

impl CatalogQuery {
    /// Create a query for the given text
    pub fn new(text: impl Into<String>) -> Self {
        CatalogQuery {
            text: text.into(),
            sort: None,
        }
    }

    /// Builder: set sort order
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }
}

/// Stateless search, sort and resolve over caller-supplied records
#[derive(Debug, Clone)]
pub struct QueryEngine {
    coe_table: CoeTable,
    lookup_mode: LookupMode,
    config: EngineConfig,
}

impl Default for QueryEngine {
    fn default() -> Self {
        QueryEngine {
            coe_table: CoeTable::builtin(),
            lookup_mode: LookupMode::Exact,
            config: EngineConfig::default(),
        }
    }
}

impl QueryEngine {
    /// Build an engine from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let lookup_mode = config.lookup_mode()?;
        let coe_table = config.coe_table();
        tracing::debug!(
            target: "molten::query",
            lookup = %lookup_mode,
            coe_keys = coe_table.len(),
            "Query engine configured"
        );
        Ok(QueryEngine {
            coe_table,
            lookup_mode,
            config,
        })
    }

    /// Builder: replace the COE table
    pub fn with_coe_table(mut self, coe_table: CoeTable) -> Self {
        self.coe_table = coe_table;
        self
    }

    /// Builder: replace the lookup mode
    pub fn with_lookup_mode(mut self, mode: LookupMode) -> Self {
        self.lookup_mode = mode;
        self
    }

    /// COE table used for manufacturer sorting
    pub fn coe_table(&self) -> &CoeTable {
        &self.coe_table
    }

    /// Code lookup mode
    pub fn lookup_mode(&self) -> LookupMode {
        self.lookup_mode
    }

    /// Configuration the engine was built from
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Filter records by a free-text query
    pub fn search<'a, T, I>(&self, records: I, query: &str) -> Vec<&'a T>
    where
        T: Searchable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let terms = TermSet::parse(query);
        let matched = terms.filter(records);
        tracing::debug!(
            target: "molten::query",
            terms = terms.len(),
            matched = matched.len(),
            "Search completed"
        );
        matched
    }

    /// Order records by `key`
    pub fn sort<'a, T, I>(&self, records: I, key: SortKey) -> Vec<&'a T>
    where
        T: Sortable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        sort_catalog_items(records, key, &self.coe_table)
    }

    /// Filter, then sort if the query asks for it
    pub fn query<'a, T, I>(&self, records: I, query: &CatalogQuery) -> Vec<&'a T>
    where
        T: Searchable + Sortable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let matched = self.search(records, &query.text);
        match query.sort {
            Some(key) => self.sort(matched, key),
            None => matched,
        }
    }

    /// Resolve a bare or display code to a record
    pub fn resolve_code<'a, T, I>(&self, records: I, code: &str) -> Option<&'a T>
    where
        T: Sortable + 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: Clone,
    {
        let found = find_by_code(records, code, self.lookup_mode);
        tracing::debug!(
            target: "molten::query",
            code = code,
            lookup = %self.lookup_mode,
            found = found.is_some(),
            "Code lookup"
        );
        found
    }
}
