//! Screening engine facade
//!
//! Ties the pure evaluator to the registry: evaluate, persist, query,
//! export. One evaluation or registry operation completes fully before the
//! next begins; the registry file assumes a single active writer.

use crate::config::ScreeningConfig;
use crate::error::{Result, SdkError};
use adscreen_core::{evaluate, ClinicalInput, DecisionRecord};
use adscreen_registry::{
    export, CsvRegistry, RegistryEntry, RegistryFilter, RegistryStore, RegistrySummary,
};
use chrono::Local;
use tracing::info;

/// Timestamp format persisted with each entry (ISO-8601, seconds precision)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Filtered registry view
#[derive(Debug, Clone)]
pub struct FilteredView {
    /// Matching rows, in original registry order
    pub rows: Vec<RegistryEntry>,

    /// Counts over the filtered rows, not the full registry
    pub summary: RegistrySummary,
}

/// High-level facade over the evaluator and the registry
pub struct ScreeningEngine {
    config: ScreeningConfig,
    store: Box<dyn RegistryStore>,
}

impl std::fmt::Debug for ScreeningEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreeningEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ScreeningEngine {
    /// Create an engine backed by the CSV registry at the configured path
    pub fn new(config: ScreeningConfig) -> Result<Self> {
        if config.registry_path.as_os_str().is_empty() {
            return Err(SdkError::Config("registry path is empty".to_string()));
        }
        let store = Box::new(CsvRegistry::new(&config.registry_path));
        Ok(Self { config, store })
    }

    /// Create an engine over a custom store (tests, embedding)
    pub fn with_store(config: ScreeningConfig, store: Box<dyn RegistryStore>) -> Self {
        Self { config, store }
    }

    /// Engine configuration
    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Evaluate eligibility without persisting anything
    pub fn evaluate(&self, input: &ClinicalInput) -> DecisionRecord {
        evaluate(input)
    }

    /// Evaluate and append the outcome to the registry
    ///
    /// Stamps the entry with the current local time. Returns the persisted
    /// entry; on a write failure the error propagates and nothing is
    /// reported as saved.
    pub fn record(&self, patient_id: &str, input: &ClinicalInput) -> Result<RegistryEntry> {
        let decision = evaluate(input);
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let entry = RegistryEntry::new(patient_id, timestamp, input, &decision);
        self.store.append(&entry)?;
        info!(
            patient_id,
            recommendation = %decision.recommendation,
            "recorded screening evaluation"
        );
        Ok(entry)
    }

    /// Load the full registry, oldest first
    pub fn registry(&self) -> Result<Vec<RegistryEntry>> {
        Ok(self.store.load_all()?)
    }

    /// Load and filter the registry; counts cover the filtered subset
    pub fn query(&self, filter: &RegistryFilter) -> Result<FilteredView> {
        let rows = filter.apply(&self.store.load_all()?);
        let summary = RegistrySummary::of(&rows);
        Ok(FilteredView { rows, summary })
    }

    /// Single-row CSV artifact for download
    pub fn export_entry(&self, entry: &RegistryEntry) -> Result<Vec<u8>> {
        Ok(export::write_csv(std::slice::from_ref(entry))?)
    }

    /// CSV artifact for an arbitrary row set (filtered view or full registry)
    pub fn export_rows(&self, rows: &[RegistryEntry]) -> Result<Vec<u8>> {
        Ok(export::write_csv(rows)?)
    }
}
