//! Manufacturer directory and COE table
//!
//! The directory lists every glass manufacturer the catalog tooling knows,
//! with its short catalog code, display name and COE (coefficient of
//! expansion). Glass from the same COE group can be worked together, so the
//! sort engine groups manufacturers by COE.
//!
//! The built-in directory is constructed once, on first use, and is
//! read-only afterwards. Callers that need a different table build their own
//! [`CoeTable`] and pass it in.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A known glass manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Short catalog code, e.g. `"EF"`
    pub code: String,
    /// Display name, e.g. `"Effetre/Vetrofond"`
    pub name: String,
    /// Coefficient of expansion group
    pub coe: u32,
    /// Other names the manufacturer is known by
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Manufacturer {
    /// Create a manufacturer entry without aliases
    pub fn new(code: impl Into<String>, name: impl Into<String>, coe: u32) -> Self {
        Manufacturer {
            code: code.into(),
            name: name.into(),
            coe,
            aliases: Vec::new(),
        }
    }

    /// Builder: add aliases
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Code, name and aliases
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        [self.code.as_str(), self.name.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }
}

/// Lookup key normalization: trimmed and lowercased
fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

// ============================================================================
// CoeTable
// ============================================================================

/// Mapping from manufacturer name or code to COE
///
/// The built-in table is shared read-only; [`CoeTable::builtin`] hands out
/// clones, so `insert` on one never affects another. Lookups trim the key
/// and ignore case. Manufacturers absent from the
/// table belong to the "unknown" group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoeTable {
    groups: FxHashMap<String, u32>,
}

impl CoeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table derived from the built-in manufacturer directory
    pub fn builtin() -> Self {
        DEFAULT_COE_TABLE.clone()
    }

    /// Build a table from `(manufacturer, coe)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut table = CoeTable::new();
        for (key, coe) in pairs {
            table.insert(key.as_ref(), coe);
        }
        table
    }

    /// Register or replace a key
    pub fn insert(&mut self, manufacturer: &str, coe: u32) {
        self.groups.insert(normalize(manufacturer), coe);
    }

    /// COE group for a manufacturer name or code
    pub fn coe_for(&self, manufacturer: &str) -> Option<u32> {
        self.groups.get(&normalize(manufacturer)).copied()
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if no keys are registered
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ============================================================================
// ManufacturerDirectory
// ============================================================================

/// Ordered list of known manufacturers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerDirectory {
    manufacturers: Vec<Manufacturer>,
}

impl ManufacturerDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in directory
    pub fn builtin() -> &'static ManufacturerDirectory {
        &DEFAULT_DIRECTORY
    }

    /// Add a manufacturer, replacing any entry with the same code
    pub fn insert(&mut self, manufacturer: Manufacturer) {
        let code = normalize(&manufacturer.code);
        match self
            .manufacturers
            .iter_mut()
            .find(|m| normalize(&m.code) == code)
        {
            Some(existing) => *existing = manufacturer,
            None => self.manufacturers.push(manufacturer),
        }
    }

    /// Builder: add a manufacturer
    pub fn with(mut self, manufacturer: Manufacturer) -> Self {
        self.insert(manufacturer);
        self
    }

    /// Find a manufacturer by code, name or alias (trimmed, case-insensitive)
    pub fn lookup(&self, key: &str) -> Option<&Manufacturer> {
        let key = normalize(key);
        self.manufacturers
            .iter()
            .find(|m| m.keys().any(|k| normalize(k) == key))
    }

    /// Display name for a short code, falling back to the input
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.lookup(code).map(|m| m.name.as_str()).unwrap_or(code)
    }

    /// All manufacturers, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Manufacturer> {
        self.manufacturers.iter()
    }

    /// Number of manufacturers
    pub fn len(&self) -> usize {
        self.manufacturers.len()
    }

    /// True if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.manufacturers.is_empty()
    }

    /// COE table covering every code, name and alias
    pub fn coe_table(&self) -> CoeTable {
        let mut table = CoeTable::new();
        for m in &self.manufacturers {
            for key in m.keys() {
                table.insert(key, m.coe);
            }
        }
        table
    }
}

static DEFAULT_DIRECTORY: Lazy<ManufacturerDirectory> = Lazy::new(|| {
    let entries = [
        Manufacturer::new("BB", "Boro Batch", 33),
        Manufacturer::new("BE", "Bullseye Glass", 90).with_aliases(["Bullseye"]),
        Manufacturer::new("CHB", "Chinese Boro", 33),
        Manufacturer::new("CIM", "Creation is Messy", 104),
        Manufacturer::new("DH", "Double Helix", 33),
        Manufacturer::new("DS", "Delphi Superior", 90),
        Manufacturer::new("EF", "Effetre/Vetrofond", 104).with_aliases(["Effetre", "Vetrofond"]),
        Manufacturer::new("GA", "Glass Alchemy", 33),
        Manufacturer::new("GAF", "Gaffer", 96),
        Manufacturer::new("GRE", "Greasy Glass", 33),
        Manufacturer::new("KUG", "Kugler", 104),
        Manufacturer::new("LUN", "Lunar Glass", 33),
        Manufacturer::new("MA", "Molten Aura Glass", 33),
        Manufacturer::new("MOM", "Momka Glass", 33),
        Manufacturer::new("OC", "Oceanside Glass", 96).with_aliases(["Oceanside"]),
        Manufacturer::new("OR", "Origin Glass", 33),
        Manufacturer::new("PAR", "Parramore Glass", 33),
        Manufacturer::new("PDX", "PDX Tubing Co", 33),
        Manufacturer::new("TAG", "Trautman Art Glass (TAG)", 33),
        Manufacturer::new("UST", "UST Glass", 33),
        Manufacturer::new("WM", "Wissmach Glass", 96).with_aliases(["Wissmach"]),
        Manufacturer::new("Y96", "Youghiogheny Glass", 96).with_aliases(["Youghiogheny"]),
    ];
    entries
        .into_iter()
        .fold(ManufacturerDirectory::new(), ManufacturerDirectory::with)
});

static DEFAULT_COE_TABLE: Lazy<CoeTable> = Lazy::new(|| DEFAULT_DIRECTORY.coe_table());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_coe_groups() {
        let table = CoeTable::builtin();
        assert_eq!(table.coe_for("Bullseye"), Some(90));
        assert_eq!(table.coe_for("Effetre"), Some(104));
        assert_eq!(table.coe_for("Kugler"), Some(104));
        assert_eq!(table.coe_for("Oceanside Glass"), Some(96));
        assert_eq!(table.coe_for("DH"), Some(33));
    }

    #[test]
    fn test_coe_lookup_ignores_case_and_padding() {
        let table = CoeTable::builtin();
        assert_eq!(table.coe_for("  bullseye "), Some(90));
        assert_eq!(table.coe_for("ef"), Some(104));
    }

    #[test]
    fn test_builtin_clone_is_independent() {
        let mut table = CoeTable::builtin();
        table.insert("Bullseye", 104);
        assert_eq!(table.coe_for("Bullseye"), Some(104));
        assert_eq!(CoeTable::builtin().coe_for("Bullseye"), Some(90));
    }

    #[test]
    fn test_unknown_manufacturer_has_no_group() {
        let table = CoeTable::builtin();
        assert_eq!(table.coe_for("Acme Glassworks"), None);
        assert_eq!(table.coe_for(""), None);
    }

    #[test]
    fn test_from_pairs_substitute_table() {
        let table = CoeTable::from_pairs([("Alpha", 33), ("Beta", 96)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.coe_for("alpha"), Some(33));
        assert_eq!(table.coe_for("Bullseye"), None);
    }

    #[test]
    fn test_insert_replaces_group() {
        let mut table = CoeTable::builtin();
        table.insert("Bullseye", 91);
        assert_eq!(table.coe_for("bullseye"), Some(91));
    }

    #[test]
    fn test_directory_lookup_by_any_key() {
        let dir = ManufacturerDirectory::builtin();
        assert_eq!(dir.lookup("EF").unwrap().name, "Effetre/Vetrofond");
        assert_eq!(dir.lookup("effetre").unwrap().code, "EF");
        assert_eq!(dir.lookup("Effetre/Vetrofond").unwrap().coe, 104);
        assert!(dir.lookup("nobody").is_none());
    }

    #[test]
    fn test_directory_display_name() {
        let dir = ManufacturerDirectory::builtin();
        assert_eq!(dir.display_name("BE"), "Bullseye Glass");
        assert_eq!(dir.display_name("ZZZ"), "ZZZ");
    }

    #[test]
    fn test_directory_insert_replaces_by_code() {
        let dir = ManufacturerDirectory::new()
            .with(Manufacturer::new("EF", "Effetre", 104))
            .with(Manufacturer::new("ef", "Effetre Glass", 104));
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.lookup("EF").unwrap().name, "Effetre Glass");
    }

    #[test]
    fn test_builtin_directory_codes_are_unique() {
        let dir = ManufacturerDirectory::builtin();
        let mut codes: Vec<_> = dir.iter().map(|m| m.code.to_lowercase()).collect();
        let total = codes.len();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert_eq!(total, 22);
    }
}
