//! AND-semantics record filtering
//!
//! A record matches a query iff every parsed term is a case-insensitive
//! substring of the record's searchable text. Matching is plain containment,
//! not word-boundary matching, so `"red"` matches `"bored"`.
//!
//! Filtering is stable and never reorders records.

use crate::tokenizer::parse_search_terms;
use molten_core::{CatalogRecord, InventoryRecord, InventoryType, Searchable};

/// Joiner placed between a record's searchable fields
///
/// A quoted phrase can only match across two fields when this joiner sits
/// between them in the phrase.
pub const FIELD_JOINER: &str = " ";

/// Parsed query, with terms lowercased once for matching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    /// Parse and lowercase a raw query
    pub fn parse(query: &str) -> Self {
        TermSet {
            terms: parse_search_terms(query)
                .into_iter()
                .map(|t| t.to_lowercase())
                .collect(),
        }
    }

    /// Lowercased terms in query order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True for an empty or whitespace-only query; such a query matches
    /// every record
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if every term occurs in the record's joined, lowercased text
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        let haystack = record.searchable_text().join(FIELD_JOINER).to_lowercase();
        self.terms.iter().all(|term| haystack.contains(term.as_str()))
    }

    /// Stable filter over borrowed records
    pub fn filter<'a, T, I>(&self, records: I) -> Vec<&'a T>
    where
        T: Searchable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        records.into_iter().filter(|r| self.matches(*r)).collect()
    }
}

/// Filter records by a free-text query
///
/// An empty or whitespace-only query returns every record in input order.
pub fn filter_with_query_string<'a, T, I>(records: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    TermSet::parse(query).filter(records)
}

/// Search catalog records (name, code, tags, manufacturer)
pub fn search_catalog_items<'a>(records: &'a [CatalogRecord], query: &str) -> Vec<&'a CatalogRecord> {
    filter_with_query_string(records, query)
}

/// Search inventory records (notes, catalog code)
pub fn search_inventory_items<'a>(
    records: &'a [InventoryRecord],
    query: &str,
) -> Vec<&'a InventoryRecord> {
    filter_with_query_string(records, query)
}

/// Keep inventory records of one kind, in input order
pub fn filter_inventory_by_type<'a, I>(records: I, item_type: InventoryType) -> Vec<&'a InventoryRecord>
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    records
        .into_iter()
        .filter(|r| r.item_type == item_type)
        .collect()
}
