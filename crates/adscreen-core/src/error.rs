//! Error types for ADSCREEN Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A textual label did not match any known vocabulary value.
    /// Unknown labels are rejected, never coerced to a nearby value.
    #[error("Unknown {kind} label: {value}")]
    UnknownLabel { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
