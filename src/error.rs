//! Error handling for the brugen generation library.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias. It uses `thiserror`
//! for easy error handling and implements conversions from common error
//! types.
//!
//! Fatal conditions (a malformed collection, an HTTP method with no
//! registered tag) surface here; non-fatal conditions such as a route
//! without methods are handled inline with an informational message and
//! never become errors.

use thiserror::Error;

/// Result type for brugen generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for brugen generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Existing collection on disk could not be parsed
    #[error("error reading bruno collection: {0}")]
    CollectionParse(String),

    /// A fresh collection could not be created
    #[error("error creating bruno collection: {0}")]
    CollectionCreate(String),

    /// No tag variant is registered for an HTTP method
    #[error("unable to resolve tag for method {0}")]
    UnsupportedMethod(String),

    /// Route table export could not be interpreted
    #[error("route table error: {0}")]
    RouteTable(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new collection parse error
    pub fn collection_parse<S: Into<String>>(msg: S) -> Self {
        Self::CollectionParse(msg.into())
    }

    /// Create a new collection create error
    pub fn collection_create<S: Into<String>>(msg: S) -> Self {
        Self::CollectionCreate(msg.into())
    }

    /// Create a new route table error
    pub fn route_table<S: Into<String>>(msg: S) -> Self {
        Self::RouteTable(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
