//! Error types for Molten
//!
//! The query paths (parse, filter, sort, resolve) never fail. Errors only
//! come from the ambient surfaces: reading configuration and loading catalog
//! documents. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use std::io;
use thiserror::Error;

/// Result type alias for Molten operations
pub type Result<T> = std::result::Result<T, MoltenError>;

/// Error types for Molten
#[derive(Debug, Error)]
pub enum MoltenError {
    /// I/O error (reading config or catalog files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error (JSON catalogs, TOML config)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration parsed but holds a value the engine cannot use
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MoltenError {
    /// Build an `InvalidConfig` error from any displayable message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        MoltenError::InvalidConfig(msg.into())
    }
}

impl From<serde_json::Error> for MoltenError {
    fn from(e: serde_json::Error) -> Self {
        MoltenError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for MoltenError {
    fn from(e: toml::de::Error) -> Self {
        MoltenError::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for MoltenError {
    fn from(e: toml::ser::Error) -> Self {
        MoltenError::Serialization(e.to_string())
    }
}
