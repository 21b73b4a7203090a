//! Catalog sort engine
//!
//! Orders catalog records by name, code or manufacturer. Ordering is always
//! ascending, case-insensitive, and stable: records with equal keys keep
//! their input order. Input is never reordered in place; a new vector of
//! references is returned.
//!
//! Placement rules:
//! - Name / code: absent or blank values sort after every present value.
//! - Manufacturer: known COE groups ascending, then unknown manufacturers,
//!   then absent or blank manufacturers. Ties within a group break on the
//!   manufacturer name.

use molten_core::{CoeTable, SortKey, Sortable};
use std::cmp::Ordering;

/// Collation key for a name or code
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum TextKey {
    Present(String),
    Blank,
}

impl TextKey {
    fn from_field(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => TextKey::Present(v.to_lowercase()),
            _ => TextKey::Blank,
        }
    }
}

/// Collation key for a manufacturer
///
/// Variant order is the placement order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum ManufacturerKey {
    Known { coe: u32, name: String },
    Unknown { name: String },
    Missing,
}

impl ManufacturerKey {
    fn from_field(value: Option<&str>, coe_table: &CoeTable) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => {
                let name = v.to_lowercase();
                match coe_table.coe_for(v) {
                    Some(coe) => ManufacturerKey::Known { coe, name },
                    None => ManufacturerKey::Unknown { name },
                }
            }
            _ => ManufacturerKey::Missing,
        }
    }
}

/// Collation key for one record under one [`SortKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSortKey(KeyInner);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum KeyInner {
    Text(TextKey),
    Manufacturer(ManufacturerKey),
}

impl RecordSortKey {
    /// Build the key for a record
    pub fn new<T: Sortable + ?Sized>(record: &T, key: SortKey, coe_table: &CoeTable) -> Self {
        let inner = match key {
            SortKey::Name => KeyInner::Text(TextKey::from_field(record.name())),
            SortKey::Code => KeyInner::Text(TextKey::from_field(record.code())),
            SortKey::Manufacturer => KeyInner::Manufacturer(ManufacturerKey::from_field(
                record.manufacturer(),
                coe_table,
            )),
        };
        RecordSortKey(inner)
    }

    /// True if the sorted field is absent or blank
    pub fn is_blank(&self) -> bool {
        matches!(
            self.0,
            KeyInner::Text(TextKey::Blank) | KeyInner::Manufacturer(ManufacturerKey::Missing)
        )
    }
}

impl PartialOrd for RecordSortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordSortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Sort catalog records by `key`
///
/// Returns references in sorted order; the input is untouched. `coe_table`
/// is only consulted for [`SortKey::Manufacturer`].
pub fn sort_catalog_items<'a, T, I>(records: I, key: SortKey, coe_table: &CoeTable) -> Vec<&'a T>
where
    T: Sortable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut keyed: Vec<(RecordSortKey, &'a T)> = records
        .into_iter()
        .map(|r| (RecordSortKey::new(r, key, coe_table), r))
        .collect();
    // Vec::sort_by is stable
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, r)| r).collect()
}
