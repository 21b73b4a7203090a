//! Engine configuration via `molten.toml`
//!
//! Configuration is optional: every field has a default and an absent file
//! means "built-in manufacturer directory, exact code lookup". A caller that
//! wants to tune the engine points [`EngineConfig::from_file`] at a
//! `molten.toml`, or writes one with [`EngineConfig::write_default_if_missing`].

use crate::codes::LookupMode;
use crate::error::{MoltenError, Result};
use crate::manufacturer::{CoeTable, Manufacturer, ManufacturerDirectory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "molten.toml";

/// Engine configuration loaded from `molten.toml`.
///
/// # Example
///
/// ```toml
/// # Code lookup: "exact" (default) or "case_insensitive"
/// lookup = "exact"
///
/// [coe]
/// "Reichenbach" = 104
///
/// [[manufacturers]]
/// code = "NS"
/// name = "Northstar Glassworks"
/// coe = 33
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Code lookup mode: `"exact"` or `"case_insensitive"`.
    #[serde(default = "default_lookup_str")]
    pub lookup: String,
    /// Start from the built-in manufacturer directory.
    #[serde(default = "default_true")]
    pub builtin_manufacturers: bool,
    /// Extra manufacturers; an entry replaces a built-in one with the same code.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manufacturers: Vec<Manufacturer>,
    /// Direct COE overrides keyed by manufacturer name or code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub coe: BTreeMap<String, u32>,
}

fn default_lookup_str() -> String {
    LookupMode::Exact.as_str().to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookup: default_lookup_str(),
            builtin_manufacturers: true,
            manufacturers: Vec::new(),
            coe: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Parse the lookup string into a `LookupMode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"exact"` or `"case_insensitive"`.
    pub fn lookup_mode(&self) -> Result<LookupMode> {
        self.lookup.parse().map_err(|_| {
            MoltenError::invalid_config(format!(
                "Invalid lookup mode '{}' in {}. Expected \"exact\" or \"case_insensitive\".",
                self.lookup, CONFIG_FILE_NAME
            ))
        })
    }

    /// Builder: set lookup mode
    pub fn with_lookup_mode(mut self, mode: LookupMode) -> Self {
        self.lookup = mode.as_str().to_string();
        self
    }

    /// Builder: add a COE override
    pub fn with_coe(mut self, manufacturer: impl Into<String>, coe: u32) -> Self {
        self.coe.insert(manufacturer.into(), coe);
        self
    }

    /// Builder: add a manufacturer
    pub fn with_manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturers.push(manufacturer);
        self
    }

    /// Check every value the engine will read.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an unknown lookup mode, a zero COE, or a
    /// manufacturer with a blank code.
    pub fn validate(&self) -> Result<()> {
        self.lookup_mode()?;
        for m in &self.manufacturers {
            if m.code.trim().is_empty() {
                return Err(MoltenError::invalid_config(format!(
                    "Manufacturer '{}' has a blank code",
                    m.name
                )));
            }
            if m.coe == 0 {
                return Err(MoltenError::invalid_config(format!(
                    "Manufacturer '{}' has COE 0",
                    m.code
                )));
            }
        }
        if let Some((key, _)) = self.coe.iter().find(|(_, coe)| **coe == 0) {
            return Err(MoltenError::invalid_config(format!(
                "COE override for '{}' is 0",
                key
            )));
        }
        Ok(())
    }

    /// Manufacturer directory this config describes.
    pub fn directory(&self) -> ManufacturerDirectory {
        let base = if self.builtin_manufacturers {
            ManufacturerDirectory::builtin().clone()
        } else {
            ManufacturerDirectory::new()
        };
        self.manufacturers.iter().cloned().fold(base, ManufacturerDirectory::with)
    }

    /// COE table: the directory's table with the `[coe]` overrides applied.
    pub fn coe_table(&self) -> CoeTable {
        let mut table = self.directory().coe_table();
        for (key, coe) in &self.coe {
            table.insert(key, *coe);
        }
        table
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Molten catalog engine configuration
#
# Code lookup: "exact" (default) or "case_insensitive"
#   "exact"            = "effetre-143" does not resolve against "Effetre"
#   "case_insensitive" = manufacturer and code comparisons ignore case
lookup = "exact"

# Start from the built-in manufacturer directory (default: true)
builtin_manufacturers = true

# Direct COE overrides, keyed by manufacturer name or code.
# [coe]
# "Reichenbach" = 104

# Extra manufacturers. An entry replaces a built-in one with the same code.
# [[manufacturers]]
# code = "NS"
# name = "Northstar Glassworks"
# coe = 33
# aliases = ["Northstar"]
"#
    }

    /// Parse config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            target: "molten::config",
            path = %path.display(),
            lookup = %config.lookup,
            manufacturers = config.manufacturers.len(),
            coe_overrides = config.coe.len(),
            "Loaded engine config"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
