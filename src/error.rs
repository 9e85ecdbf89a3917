//! Error types for mapforge
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for mapforge
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid field mapping \"{spec}\": the format is \"field:type\" like \"fragment.location:geo_point\"")]
    InvalidFieldMapping { spec: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Shape Tree Errors
    // ============================================================================
    #[error("Ambiguous field '{path}': used both as an object and as a value across sample documents")]
    AmbiguousField { path: String },

    #[error("Invalid document on line {line}: {message}")]
    InvalidDocument { line: usize, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid field mapping error
    pub fn invalid_field_mapping(spec: impl Into<String>) -> Self {
        Self::InvalidFieldMapping { spec: spec.into() }
    }

    /// Create an ambiguous field error
    pub fn ambiguous_field(path: impl Into<String>) -> Self {
        Self::AmbiguousField { path: path.into() }
    }

    /// Create an invalid document error
    pub fn invalid_document(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            line,
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error is the merge-time object/value conflict
    pub fn is_ambiguity(&self) -> bool {
        matches!(self, Error::AmbiguousField { .. })
    }
}

/// Result type alias for mapforge
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
