//! ADSCREEN SDK
//!
//! High-level API for the presentation layer: evaluate a patient, persist
//! the outcome, query and export the registry.

pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use config::ScreeningConfig;
pub use engine::{FilteredView, ScreeningEngine};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use adscreen_core::{
    ApoeGenotype, CdrGlobal, ClinicalInput, DecisionRecord, Diagnosis, Recommendation,
};
pub use adscreen_registry::{
    AriaRisk, CsvRegistry, MemoryRegistry, RegistryEntry, RegistryFilter, RegistryStore,
    RegistrySummary,
};
