//! Append-only registry of screening evaluations
//!
//! This crate provides the durable side of the adscreen workspace:
//! - [`RegistryEntry`]: one evaluation flattened into a fixed-schema row
//! - [`RegistryStore`]: the storage trait, with CSV-file and in-memory
//!   backends
//! - [`RegistryFilter`] / [`RegistrySummary`]: pure filtering and aggregate
//!   counts over loaded rows
//! - [`export::write_csv`]: schema-stable export artifacts
//!
//! The registry is append-only: rows are never updated or deleted, and the
//! column set is created once and stays stable across releases.

pub mod entry;
pub mod error;
pub mod export;
pub mod filter;
pub mod schema;
pub mod store;

// Re-export main types
pub use entry::RegistryEntry;
pub use error::{RegistryError, RegistryResult};
pub use filter::{AriaRisk, RegistryFilter, RegistrySummary};
pub use store::{CsvRegistry, MemoryRegistry, RegistryStore};
