//! Per-patient clinical input record

use super::vocab::{ApoeGenotype, CdrGlobal, Diagnosis};
use serde::{Deserialize, Serialize};

/// Clinical input for one eligibility evaluation
///
/// Created per request by the presentation layer and discarded after use.
/// Fields arrive pre-validated (ranges and vocabularies constrained at the
/// input widgets); the evaluator performs no defensive validation and is
/// total over this documented domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    /// Age in years, 18–120
    pub age: u8,

    /// Diagnosis category
    pub diagnosis: Diagnosis,

    /// Mini-Mental State Examination score, 0–30
    pub mmse: u8,

    /// Clinical Dementia Rating, global score
    pub cdr_global: CdrGlobal,

    /// Amyloid pathology confirmed by biomarker
    pub amyloid_positive: bool,

    /// Caregiver available for the treatment period
    pub caregiver_available: bool,

    /// Microhemorrhage count on MRI
    pub microhemorrhage_count: u32,

    /// Cortical superficial siderosis present
    pub cortical_siderosis: bool,

    /// Ischemic lesion larger than 2 cm (recorded only, no criterion reads it)
    pub ischemic_lesion_gt2cm: bool,

    /// Fazekas leukoaraiosis grade, 0–3 (recorded only)
    pub fazekas_grade: u8,

    /// Ongoing oral anticoagulant therapy
    pub on_anticoagulants: bool,

    /// Stroke or TIA within the last 12 months
    pub recent_stroke_tia: bool,

    /// Active neoplasia
    pub active_neoplasia: bool,

    /// Active autoimmune disease or immunosuppression
    pub active_autoimmune: bool,

    /// Severe organ failure (cardiac, renal or hepatic)
    pub severe_organ_failure: bool,

    /// APOE genotyping performed
    pub apoe_test_done: bool,

    /// Genotype pair, present only when the test was performed
    pub apoe_genotype: Option<ApoeGenotype>,
}

impl ClinicalInput {
    /// Create an input with the mandatory assessments; every flag starts
    /// cleared and the optional genotype absent
    pub fn new(age: u8, diagnosis: Diagnosis, mmse: u8, cdr_global: CdrGlobal) -> Self {
        Self {
            age,
            diagnosis,
            mmse,
            cdr_global,
            amyloid_positive: false,
            caregiver_available: false,
            microhemorrhage_count: 0,
            cortical_siderosis: false,
            ischemic_lesion_gt2cm: false,
            fazekas_grade: 0,
            on_anticoagulants: false,
            recent_stroke_tia: false,
            active_neoplasia: false,
            active_autoimmune: false,
            severe_organ_failure: false,
            apoe_test_done: false,
            apoe_genotype: None,
        }
    }

    /// Set the amyloid biomarker status
    pub fn with_amyloid_positive(mut self, positive: bool) -> Self {
        self.amyloid_positive = positive;
        self
    }

    /// Set caregiver availability
    pub fn with_caregiver(mut self, available: bool) -> Self {
        self.caregiver_available = available;
        self
    }

    /// Set the MRI microhemorrhage count
    pub fn with_microhemorrhages(mut self, count: u32) -> Self {
        self.microhemorrhage_count = count;
        self
    }

    /// Set cortical siderosis presence
    pub fn with_cortical_siderosis(mut self, present: bool) -> Self {
        self.cortical_siderosis = present;
        self
    }

    /// Record an ischemic lesion larger than 2 cm
    pub fn with_ischemic_lesion_gt2cm(mut self, present: bool) -> Self {
        self.ischemic_lesion_gt2cm = present;
        self
    }

    /// Set the Fazekas grade
    pub fn with_fazekas_grade(mut self, grade: u8) -> Self {
        self.fazekas_grade = grade;
        self
    }

    /// Set ongoing anticoagulant therapy
    pub fn with_anticoagulants(mut self, ongoing: bool) -> Self {
        self.on_anticoagulants = ongoing;
        self
    }

    /// Set recent stroke/TIA history
    pub fn with_recent_stroke_tia(mut self, recent: bool) -> Self {
        self.recent_stroke_tia = recent;
        self
    }

    /// Set active neoplasia
    pub fn with_active_neoplasia(mut self, active: bool) -> Self {
        self.active_neoplasia = active;
        self
    }

    /// Set active autoimmune disease or immunosuppression
    pub fn with_active_autoimmune(mut self, active: bool) -> Self {
        self.active_autoimmune = active;
        self
    }

    /// Set severe organ failure
    pub fn with_severe_organ_failure(mut self, present: bool) -> Self {
        self.severe_organ_failure = present;
        self
    }

    /// Record an APOE genotyping result
    pub fn with_apoe_genotype(mut self, genotype: ApoeGenotype) -> Self {
        self.apoe_test_done = true;
        self.apoe_genotype = Some(genotype);
        self
    }
}
