//! Configuration for the screening engine

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the registry file location
pub const REGISTRY_PATH_ENV: &str = "ADSCREEN_REGISTRY_PATH";

/// Default registry file, relative to the working directory
pub const DEFAULT_REGISTRY_PATH: &str = "dmt_registry.csv";

/// Engine configuration
///
/// Resolved once at startup and passed explicitly to the engine; the
/// evaluator and the filter engine never read the environment themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Registry file path
    pub registry_path: PathBuf,
}

impl ScreeningConfig {
    /// Create a configuration with the default registry location
    pub fn new() -> Self {
        Self {
            registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
        }
    }

    /// Set the registry file path
    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = path.into();
        self
    }

    /// Build from the process environment
    ///
    /// `ADSCREEN_REGISTRY_PATH` overrides the default registry location;
    /// unset or empty falls back to [`DEFAULT_REGISTRY_PATH`]. This is the
    /// only environment read in the workspace.
    pub fn from_env() -> Self {
        match env::var(REGISTRY_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self {
                registry_path: PathBuf::from(path),
            },
            _ => Self::new(),
        }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self::new()
    }
}
