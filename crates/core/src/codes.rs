//! Catalog code resolution
//!
//! Maps between a **bare code** (`"143"`) and a **display code**
//! (`"Effetre-143"`), and resolves a possibly-prefixed code typed or scanned
//! by a user against a collection of records.
//!
//! Lookups never fail loudly: a miss is `None`.

use crate::traits::Sortable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between manufacturer and bare code in a display code
pub const CODE_SEPARATOR: char = '-';

/// Build the display code for a record
///
/// A missing, empty or whitespace-only manufacturer leaves `code` untouched.
/// Otherwise the manufacturer is prefixed verbatim. `code` is not validated,
/// so an empty code yields `"{manufacturer}-"`.
///
/// # Example
///
/// ```
/// use molten_core::codes::generate_preferred_code;
///
/// assert_eq!(generate_preferred_code("143", Some("Effetre")), "Effetre-143");
/// assert_eq!(generate_preferred_code("143", Some("   ")), "143");
/// assert_eq!(generate_preferred_code("143", None), "143");
/// ```
pub fn generate_preferred_code(code: &str, manufacturer: Option<&str>) -> String {
    match manufacturer {
        Some(m) if !m.trim().is_empty() => format!("{}{}{}", m, CODE_SEPARATOR, code),
        _ => code.to_string(),
    }
}

/// Strip the manufacturer prefix from a display code
///
/// Splits at the first `-` only, so `"Effetre-Double-123"` yields
/// `"Double-123"`. Input without a `-` is returned unchanged.
///
/// # Example
///
/// ```
/// use molten_core::codes::extract_base_code;
///
/// assert_eq!(extract_base_code("Effetre-143"), "143");
/// assert_eq!(extract_base_code("143"), "143");
/// ```
pub fn extract_base_code(full_code: &str) -> &str {
    match full_code.split_once(CODE_SEPARATOR) {
        Some((_, base)) => base,
        None => full_code,
    }
}

// ============================================================================
// LookupMode
// ============================================================================

/// How [`find_by_code`] compares strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Verbatim comparison; `"effetre-143"` does not match manufacturer
    /// `"Effetre"`
    #[default]
    Exact,
    /// Every comparison ignores case
    CaseInsensitive,
}

impl LookupMode {
    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMode::Exact => "exact",
            LookupMode::CaseInsensitive => "case_insensitive",
        }
    }

    fn same(self, a: &str, b: &str) -> bool {
        match self {
            LookupMode::Exact => a == b,
            LookupMode::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }

    fn has_suffix(self, haystack: &str, suffix: &str) -> bool {
        match self {
            LookupMode::Exact => haystack.ends_with(suffix),
            LookupMode::CaseInsensitive => haystack
                .to_lowercase()
                .ends_with(&suffix.to_lowercase()),
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupMode {
    type Err = crate::types::ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(LookupMode::Exact),
            "case_insensitive" => Ok(LookupMode::CaseInsensitive),
            _ => Err(crate::types::ParseKindError {
                kind: "lookup mode",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Resolve a search code against a record collection
///
/// 1. The first record whose bare code equals `search_code` wins.
/// 2. Otherwise, if `search_code` contains `-`, it is split at the first `-`
///    into `(manufacturer, base)`. The first record whose manufacturer equals
///    `manufacturer` and whose code equals or ends with `base` wins. An empty
///    `base` only matches an empty code.
/// 3. Otherwise `None`.
///
/// With [`LookupMode::Exact`] every comparison is case-sensitive, so
/// `"effetre-143"` does not resolve against manufacturer `"Effetre"`.
pub fn find_by_code<'a, T, I>(records: I, search_code: &str, mode: LookupMode) -> Option<&'a T>
where
    T: Sortable + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();

    let exact = records
        .clone()
        .find(|r| r.code().is_some_and(|c| mode.same(c, search_code)));
    if exact.is_some() {
        return exact;
    }

    let (manufacturer, base) = search_code.split_once(CODE_SEPARATOR)?;
    records.into_iter().find(|r| {
        let manufacturer_matches = r.manufacturer().is_some_and(|m| mode.same(m, manufacturer));
        manufacturer_matches
            && r.code().is_some_and(|c| {
                mode.same(c, base) || (!base.is_empty() && mode.has_suffix(c, base))
            })
    })
}
