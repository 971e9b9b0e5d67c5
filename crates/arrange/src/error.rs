//! Error types for Arrange operations.
//!
//! Building the registry cannot fail. Errors come from the edges: loading
//! configuration, looking up an unknown preset, exporting, and the
//! static-data checks performed by
//! [`LayoutConfigurations::validate`](crate::registry::LayoutConfigurations::validate).

use std::io;

use thiserror::Error;

/// Static-data invariant violations found by registry validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate layout configuration id `{0}`")]
    DuplicateId(String),

    #[error("Configurable option `{key}` of `{id}` is not one of its layout options")]
    UnknownConfigurableKey { id: String, key: String },

    #[error("Configurable option `{key}` is listed twice in `{id}`")]
    DuplicateConfigurableKey { id: String, key: String },

    #[error("Layout configuration `{0}` declares an empty configurable option list")]
    EmptyConfigurableOptions(String),
}

/// The main error type for Arrange operations.
#[derive(Debug, Error)]
pub enum ArrangeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown layout configuration `{0}`")]
    UnknownConfiguration(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Export error: {0}")]
    Export(String),
}
