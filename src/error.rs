//! Error types for the Cadastre library.
//!
//! All fallible operations in this crate return [`Result`], whose error
//! type is the [`CadastreError`] enum. The search core itself is built
//! from total functions (missing coordinates, out-of-range offsets and
//! empty inputs are handled values, not errors); errors are reserved for
//! contract violations and the I/O edges.
//!
//! # Examples
//!
//! ```
//! use cadastre::error::{CadastreError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CadastreError::query("distance sort requires a center point"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Cadastre operations.
#[derive(Error, Debug)]
pub enum CadastreError {
    /// I/O errors (fixture files, CLI input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query-related errors (invalid filter combinations, bad sort requests)
    #[error("Query error: {0}")]
    Query(String),

    /// Geographic errors (out-of-range coordinates, degenerate boxes)
    #[error("Geo error: {0}")]
    Geo(String),

    /// Store-related errors (fixture loading, missing records)
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CadastreError.
pub type Result<T> = std::result::Result<T, CadastreError>;

impl CadastreError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        CadastreError::Query(msg.into())
    }

    /// Create a new geo error.
    pub fn geo<S: Into<String>>(msg: S) -> Self {
        CadastreError::Geo(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        CadastreError::Store(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        CadastreError::Store(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CadastreError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CadastreError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
