//! Registry row type
//!
//! One [`RegistryEntry`] flattens a clinical input, its decision record and
//! the persist-time metadata (timestamp, patient id) into a fixed-order row.
//! Field order here IS the file schema; keep it aligned with
//! [`crate::schema::COLUMNS`].

use adscreen_core::{ApoeGenotype, CdrGlobal, ClinicalInput, DecisionRecord, Diagnosis, Recommendation};
use serde::{Deserialize, Serialize};

/// Separator between joined ineligibility reasons
pub const REASON_SEPARATOR: &str = "; ";

/// Yes/No encoding for recorded questionnaire answers
mod answer {
    use serde::de::{Deserializer, Error};
    use serde::ser::Serializer;
    use serde::Deserialize;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match String::deserialize(deserializer)?.as_str() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(D::Error::custom(format!("expected Yes/No, got {other:?}"))),
        }
    }
}

/// 0/1 encoding for derived decision flags
mod flag {
    use serde::de::{Deserializer, Error};
    use serde::ser::Serializer;
    use serde::Deserialize;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::custom(format!("expected 0/1 flag, got {other}"))),
        }
    }
}

/// One persisted evaluation
///
/// Created on explicit persist, never updated or deleted. Questionnaire
/// answers keep their Yes/No form, derived flags encode as 0/1, the optional
/// genotype becomes an empty field when absent, and the reasons list joins
/// into a single `"; "`-separated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Persist time, ISO-8601 with seconds precision
    pub timestamp: String,

    /// Free-text anonymized patient identifier
    pub patient_id: String,

    pub age: u8,
    pub diagnosis: Diagnosis,
    pub mmse: u8,
    pub cdr_global: CdrGlobal,
    #[serde(with = "answer")]
    pub amyloid_positive: bool,
    #[serde(with = "answer")]
    pub caregiver_available: bool,
    pub microhemorrhage_count: u32,
    #[serde(with = "answer")]
    pub cortical_siderosis: bool,
    #[serde(with = "answer")]
    pub ischemic_lesion_gt2cm: bool,
    pub fazekas_grade: u8,
    #[serde(with = "answer")]
    pub on_anticoagulants: bool,
    #[serde(with = "answer")]
    pub recent_stroke_tia: bool,
    #[serde(with = "answer")]
    pub active_neoplasia: bool,
    #[serde(with = "answer")]
    pub active_autoimmune: bool,
    #[serde(with = "answer")]
    pub severe_organ_failure: bool,
    #[serde(with = "answer")]
    pub apoe_test_done: bool,

    /// Empty field when the test was not performed
    pub apoe_genotype: Option<ApoeGenotype>,

    #[serde(with = "flag")]
    pub eligible_lecanemab: bool,
    #[serde(with = "flag")]
    pub eligible_donanemab: bool,
    #[serde(with = "flag")]
    pub high_aria_risk: bool,
    #[serde(with = "flag")]
    pub apoe_e4_carrier: bool,

    pub recommendation: Recommendation,

    /// Joined failure labels, in check order; empty when none
    pub ineligibility_reasons: String,
}

impl RegistryEntry {
    /// Flatten an input and its decision into one row
    pub fn new(
        patient_id: impl Into<String>,
        timestamp: impl Into<String>,
        input: &ClinicalInput,
        decision: &DecisionRecord,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            patient_id: patient_id.into(),
            age: input.age,
            diagnosis: input.diagnosis,
            mmse: input.mmse,
            cdr_global: input.cdr_global,
            amyloid_positive: input.amyloid_positive,
            caregiver_available: input.caregiver_available,
            microhemorrhage_count: input.microhemorrhage_count,
            cortical_siderosis: input.cortical_siderosis,
            ischemic_lesion_gt2cm: input.ischemic_lesion_gt2cm,
            fazekas_grade: input.fazekas_grade,
            on_anticoagulants: input.on_anticoagulants,
            recent_stroke_tia: input.recent_stroke_tia,
            active_neoplasia: input.active_neoplasia,
            active_autoimmune: input.active_autoimmune,
            severe_organ_failure: input.severe_organ_failure,
            apoe_test_done: input.apoe_test_done,
            apoe_genotype: input.apoe_genotype,
            eligible_lecanemab: decision.eligible_lecanemab,
            eligible_donanemab: decision.eligible_donanemab,
            high_aria_risk: decision.high_aria_risk,
            apoe_e4_carrier: decision.apoe_e4_carrier,
            recommendation: decision.recommendation,
            ineligibility_reasons: decision.ineligibility_reasons.join(REASON_SEPARATOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use adscreen_core::evaluate;

    fn sample_entry() -> RegistryEntry {
        let input = ClinicalInput::new(72, Diagnosis::MciProdromalAd, 25, CdrGlobal::One)
            .with_amyloid_positive(true)
            .with_caregiver(true)
            .with_apoe_genotype(ApoeGenotype::E3E4);
        let decision = evaluate(&input);
        RegistryEntry::new("PZ-001", "2026-08-06T10:15:00", &input, &decision)
    }

    #[test]
    fn test_field_order_matches_schema_columns() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_entry()).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, schema::COLUMNS.join(","));
    }

    #[test]
    fn test_flatten_joins_reasons_in_check_order() {
        let mut input = ClinicalInput::new(72, Diagnosis::Other, 15, CdrGlobal::One)
            .with_amyloid_positive(true)
            .with_caregiver(true);
        input.mmse = 15;
        let decision = evaluate(&input);
        let entry = RegistryEntry::new("PZ-002", "2026-08-06T10:16:00", &input, &decision);
        assert_eq!(
            entry.ineligibility_reasons,
            "Diagnosis not eligible (requires prodromal MCI or mild AD); MMSE < 20"
        );
    }

    #[test]
    fn test_absent_genotype_serializes_to_empty_field() {
        let input = ClinicalInput::new(70, Diagnosis::MildAd, 24, CdrGlobal::Half)
            .with_amyloid_positive(true)
            .with_caregiver(true);
        let decision = evaluate(&input);
        let entry = RegistryEntry::new("PZ-003", "2026-08-06T10:17:00", &input, &decision);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&entry).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let row = text.lines().nth(1).unwrap();
        // apoe_test_done No, apoe_genotype empty, then the 0/1 flags
        assert!(row.contains("No,,1,1"));
    }

    #[test]
    fn test_decision_flags_encode_as_integers() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_entry()).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let row = text.lines().nth(1).unwrap();
        // eligible both, high ARIA risk and carrier via ε3/ε4
        assert!(row.contains("1,1,1,1"));
        assert!(!row.contains("true"));
    }
}
