//! Error types for the registry layer

use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during registry operations
///
/// A missing registry file is not an error: `ensure` recreates it with a
/// header-only schema. Write failures always surface here; a failed append
/// never reports success.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// I/O error on the backing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed registry content or encoding failure
    #[error("Registry codec error: {0}")]
    Codec(#[from] csv::Error),

    /// A textual filter value outside its vocabulary.
    /// Rejected outright, never reinterpreted as a different filter.
    #[error("Invalid {field} filter value: {value}")]
    InvalidFilterValue { field: &'static str, value: String },

    /// Vocabulary parse error from the core crate
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] adscreen_core::CoreError),
}
