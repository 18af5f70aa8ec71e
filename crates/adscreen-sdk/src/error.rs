//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] adscreen_registry::RegistryError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
