//! Data types for screening inputs and decisions

pub mod decision;
pub mod input;
pub mod vocab;

pub use decision::{DecisionRecord, Recommendation};
pub use input::ClinicalInput;
pub use vocab::{ApoeGenotype, CdrGlobal, Diagnosis};
