//! Common test utilities for SDK integration tests

use adscreen_sdk::{
    CdrGlobal, ClinicalInput, Diagnosis, MemoryRegistry, ScreeningConfig, ScreeningEngine,
};

/// Patient passing every base criterion and both age windows
pub fn baseline_input() -> ClinicalInput {
    ClinicalInput::new(72, Diagnosis::MciProdromalAd, 25, CdrGlobal::One)
        .with_amyloid_positive(true)
        .with_caregiver(true)
}

/// Engine over an in-memory registry
pub fn memory_engine() -> ScreeningEngine {
    ScreeningEngine::with_store(ScreeningConfig::new(), Box::new(MemoryRegistry::new()))
}
