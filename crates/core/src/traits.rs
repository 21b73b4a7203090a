//! Narrow record interfaces consumed by the query engine
//!
//! The engine never depends on a concrete record type. Anything that can
//! expose the few fields a component reads can be searched, sorted or
//! resolved:
//!
//! - [`Searchable`]: the text fields the search engine matches against
//! - [`Sortable`]: name, code and manufacturer for sorting and code lookup
//!
//! Both traits are implemented for references so that already-filtered
//! `Vec<&T>` results can be fed straight back into the engine.

/// A record the search engine can match a query against
pub trait Searchable {
    /// Text fields to match, in a fixed order
    ///
    /// The search engine joins these with a single space and lowercases the
    /// result once, so a quoted phrase can only span two fields when they
    /// are adjacent in this list.
    fn searchable_text(&self) -> Vec<&str>;
}

/// A record the sort engine and code resolver can read keys from
pub trait Sortable {
    /// Display name, if any
    fn name(&self) -> Option<&str>;

    /// Bare catalog code (no manufacturer prefix), if any
    fn code(&self) -> Option<&str>;

    /// Manufacturer name or short code, if any
    fn manufacturer(&self) -> Option<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn searchable_text(&self) -> Vec<&str> {
        (**self).searchable_text()
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn code(&self) -> Option<&str> {
        (**self).code()
    }

    fn manufacturer(&self) -> Option<&str> {
        (**self).manufacturer()
    }
}
