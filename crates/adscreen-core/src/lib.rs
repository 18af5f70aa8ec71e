//! ADSCREEN Core - clinical vocabulary and eligibility evaluation
//!
//! This crate provides the fundamental types used across the adscreen
//! workspace:
//! - Clinical vocabulary and the per-patient input record
//! - The eligibility criteria evaluator
//! - Decision record types
//! - Error types

pub mod error;
pub mod rules;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use rules::{evaluate, Criterion};
pub use types::{
    ApoeGenotype, CdrGlobal, ClinicalInput, DecisionRecord, Diagnosis, Recommendation,
};
