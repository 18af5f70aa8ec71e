//! Eligibility criteria evaluation
//!
//! Twelve base criteria (five inclusion, seven exclusion) are shared by both
//! therapies; each therapy adds its own age window, evaluated independently
//! of the other. Failing an age window alone produces no reason label, so a
//! patient can be ineligible with an empty reasons list.

use crate::types::{
    CdrGlobal, ClinicalInput, DecisionRecord, Diagnosis, Recommendation,
};
use std::ops::RangeInclusive;

/// Lecanemab age window, inclusive
pub const LECANEMAB_AGE: RangeInclusive<u8> = 50..=85;

/// Donanemab age window, inclusive
pub const DONANEMAB_AGE: RangeInclusive<u8> = 60..=85;

/// Highest microhemorrhage count compatible with treatment
pub const MAX_MICROHEMORRHAGES: u32 = 4;

/// One of the twelve base criteria shared by both therapies
///
/// Exclusion criteria are phrased positively: the criterion is met when the
/// excluding condition is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    // Inclusion
    DiagnosisEligible,
    MmseAtLeast20,
    CdrHalfOrOne,
    AmyloidConfirmed,
    CaregiverAvailable,

    // Exclusion
    NoAnticoagulants,
    MicrohemorrhagesWithinLimit,
    NoCorticalSiderosis,
    NoRecentStrokeTia,
    NoActiveNeoplasia,
    NoActiveAutoimmune,
    NoSevereOrganFailure,
}

impl Criterion {
    /// Fixed check order: inclusion criteria first, then exclusions.
    /// Reason labels are emitted in exactly this order.
    pub const CHECK_ORDER: [Criterion; 12] = [
        Criterion::DiagnosisEligible,
        Criterion::MmseAtLeast20,
        Criterion::CdrHalfOrOne,
        Criterion::AmyloidConfirmed,
        Criterion::CaregiverAvailable,
        Criterion::NoAnticoagulants,
        Criterion::MicrohemorrhagesWithinLimit,
        Criterion::NoCorticalSiderosis,
        Criterion::NoRecentStrokeTia,
        Criterion::NoActiveNeoplasia,
        Criterion::NoActiveAutoimmune,
        Criterion::NoSevereOrganFailure,
    ];

    /// Reason label recorded when the criterion is not met
    pub fn failure_label(&self) -> &'static str {
        match self {
            Criterion::DiagnosisEligible => {
                "Diagnosis not eligible (requires prodromal MCI or mild AD)"
            }
            Criterion::MmseAtLeast20 => "MMSE < 20",
            Criterion::CdrHalfOrOne => "CDR global not 0.5–1",
            Criterion::AmyloidConfirmed => "Amyloid status not confirmed",
            Criterion::CaregiverAvailable => "No caregiver available",
            Criterion::NoAnticoagulants => "Ongoing oral anticoagulant therapy",
            Criterion::MicrohemorrhagesWithinLimit => "> 4 microhemorrhages",
            Criterion::NoCorticalSiderosis => "Cortical siderosis present",
            Criterion::NoRecentStrokeTia => "Stroke/TIA within the last 12 months",
            Criterion::NoActiveNeoplasia => "Active neoplasia",
            Criterion::NoActiveAutoimmune => {
                "Active autoimmune disease / immunosuppression"
            }
            Criterion::NoSevereOrganFailure => {
                "Severe organ failure (cardiac/renal/hepatic)"
            }
        }
    }

    /// Whether the input satisfies this criterion
    pub fn is_met(&self, input: &ClinicalInput) -> bool {
        match self {
            Criterion::DiagnosisEligible => matches!(
                input.diagnosis,
                Diagnosis::MciProdromalAd | Diagnosis::MildAd
            ),
            Criterion::MmseAtLeast20 => input.mmse >= 20,
            Criterion::CdrHalfOrOne => {
                matches!(input.cdr_global, CdrGlobal::Half | CdrGlobal::One)
            }
            Criterion::AmyloidConfirmed => input.amyloid_positive,
            Criterion::CaregiverAvailable => input.caregiver_available,
            Criterion::NoAnticoagulants => !input.on_anticoagulants,
            Criterion::MicrohemorrhagesWithinLimit => {
                input.microhemorrhage_count <= MAX_MICROHEMORRHAGES
            }
            Criterion::NoCorticalSiderosis => !input.cortical_siderosis,
            Criterion::NoRecentStrokeTia => !input.recent_stroke_tia,
            Criterion::NoActiveNeoplasia => !input.active_neoplasia,
            Criterion::NoActiveAutoimmune => !input.active_autoimmune,
            Criterion::NoSevereOrganFailure => !input.severe_organ_failure,
        }
    }
}

/// Evaluate the full criteria set for one patient
///
/// Pure and total: no I/O, no side effects, an output for every input in
/// the documented domain.
pub fn evaluate(input: &ClinicalInput) -> DecisionRecord {
    let mut ineligibility_reasons = Vec::new();
    for criterion in Criterion::CHECK_ORDER {
        if !criterion.is_met(input) {
            ineligibility_reasons.push(criterion.failure_label().to_string());
        }
    }
    let base_ok = ineligibility_reasons.is_empty();

    let eligible_lecanemab = base_ok && LECANEMAB_AGE.contains(&input.age);
    let eligible_donanemab = base_ok && DONANEMAB_AGE.contains(&input.age);

    // A missing test defaults to the non-carrier branch, not to "unknown".
    let apoe_e4_carrier = input.apoe_test_done
        && input
            .apoe_genotype
            .map_or(false, |genotype| genotype.is_e4_carrier());

    // Independent of the <= 4 exclusion threshold: 1-4 microhemorrhages can
    // pass exclusion while still flagging elevated risk.
    let high_aria_risk = apoe_e4_carrier || input.microhemorrhage_count >= 1;

    let recommendation = match (eligible_lecanemab, eligible_donanemab) {
        (true, true) => Recommendation::Both,
        (true, false) => Recommendation::Lecanemab,
        (false, true) => Recommendation::Donanemab,
        (false, false) => Recommendation::None,
    };

    DecisionRecord {
        eligible_lecanemab,
        eligible_donanemab,
        high_aria_risk,
        apoe_e4_carrier,
        ineligibility_reasons,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApoeGenotype;

    /// Patient passing every base criterion: age 72, prodromal MCI, MMSE 25,
    /// CDR 1, amyloid confirmed, caregiver available, clean imaging and
    /// history, APOE not tested
    fn baseline() -> ClinicalInput {
        ClinicalInput::new(72, Diagnosis::MciProdromalAd, 25, CdrGlobal::One)
            .with_amyloid_positive(true)
            .with_caregiver(true)
    }

    #[test]
    fn test_baseline_eligible_for_both() {
        let decision = evaluate(&baseline());
        assert!(decision.eligible_lecanemab);
        assert!(decision.eligible_donanemab);
        assert!(!decision.high_aria_risk);
        assert!(!decision.apoe_e4_carrier);
        assert!(decision.ineligibility_reasons.is_empty());
        assert_eq!(decision.recommendation, Recommendation::Both);
    }

    #[test]
    fn test_age_55_passes_lecanemab_window_only() {
        let mut input = baseline();
        input.age = 55;
        let decision = evaluate(&input);
        assert!(decision.eligible_lecanemab);
        assert!(!decision.eligible_donanemab);
        assert_eq!(decision.recommendation, Recommendation::Lecanemab);
        // Age-window failure emits no reason text
        assert!(decision.ineligibility_reasons.is_empty());
    }

    #[test]
    fn test_age_window_boundaries() {
        for (age, lecanemab, donanemab) in [
            (49, false, false),
            (50, true, false),
            (59, true, false),
            (60, true, true),
            (85, true, true),
            (86, false, false),
        ] {
            let mut input = baseline();
            input.age = age;
            let decision = evaluate(&input);
            assert_eq!(decision.eligible_lecanemab, lecanemab, "age {}", age);
            assert_eq!(decision.eligible_donanemab, donanemab, "age {}", age);
        }
    }

    #[test]
    fn test_other_diagnosis_fails_both_with_reason() {
        let mut input = baseline();
        input.diagnosis = Diagnosis::Other;
        let decision = evaluate(&input);
        assert!(!decision.eligible_lecanemab);
        assert!(!decision.eligible_donanemab);
        assert!(decision
            .ineligibility_reasons
            .contains(&Criterion::DiagnosisEligible.failure_label().to_string()));
        assert_eq!(decision.recommendation, Recommendation::None);
    }

    #[test]
    fn test_low_mmse_single_reason() {
        let mut input = baseline();
        input.mmse = 15;
        let decision = evaluate(&input);
        assert!(!decision.eligible_lecanemab);
        assert!(!decision.eligible_donanemab);
        assert_eq!(decision.ineligibility_reasons, vec!["MMSE < 20".to_string()]);
        assert_eq!(decision.recommendation, Recommendation::None);
    }

    #[test]
    fn test_mmse_boundary_at_20() {
        let mut input = baseline();
        input.mmse = 20;
        assert!(evaluate(&input).eligible_lecanemab);
        input.mmse = 19;
        assert!(!evaluate(&input).eligible_lecanemab);
    }

    #[test]
    fn test_cdr_exact_set_membership() {
        for (cdr, eligible) in [
            (CdrGlobal::Zero, false),
            (CdrGlobal::Half, true),
            (CdrGlobal::One, true),
            (CdrGlobal::Two, false),
            (CdrGlobal::Three, false),
        ] {
            let mut input = baseline();
            input.cdr_global = cdr;
            assert_eq!(evaluate(&input).eligible_lecanemab, eligible, "CDR {}", cdr);
        }
    }

    #[test]
    fn test_microhemorrhage_boundary() {
        let mut input = baseline();
        input.microhemorrhage_count = 4;
        let decision = evaluate(&input);
        assert!(decision.eligible_lecanemab);
        assert!(!decision
            .ineligibility_reasons
            .iter()
            .any(|reason| reason.contains("microhemorrhages")));

        input.microhemorrhage_count = 5;
        let decision = evaluate(&input);
        assert!(!decision.eligible_lecanemab);
        assert_eq!(
            decision.ineligibility_reasons,
            vec!["> 4 microhemorrhages".to_string()]
        );
    }

    #[test]
    fn test_exclusion_eligible_but_high_aria_risk() {
        let input = baseline().with_microhemorrhages(2);
        let decision = evaluate(&input);
        assert!(decision.eligible_lecanemab);
        assert!(decision.eligible_donanemab);
        assert!(decision.high_aria_risk);
        assert!(!decision.apoe_e4_carrier);
    }

    #[test]
    fn test_apoe_carrier_truth_table() {
        for (genotype, carrier) in [
            (ApoeGenotype::E2E2, false),
            (ApoeGenotype::E2E3, false),
            (ApoeGenotype::E3E3, false),
            (ApoeGenotype::E2E4, true),
            (ApoeGenotype::E3E4, true),
            (ApoeGenotype::E4E4, true),
        ] {
            let input = baseline().with_apoe_genotype(genotype);
            let decision = evaluate(&input);
            assert_eq!(decision.apoe_e4_carrier, carrier, "genotype {}", genotype);
            assert_eq!(decision.high_aria_risk, carrier, "genotype {}", genotype);
        }
    }

    #[test]
    fn test_apoe_not_tested_defaults_to_non_carrier() {
        let decision = evaluate(&baseline());
        assert!(!decision.apoe_e4_carrier);
        assert!(!decision.high_aria_risk);
    }

    #[test]
    fn test_aria_risk_from_count_regardless_of_carrier() {
        let input = baseline()
            .with_microhemorrhages(1)
            .with_apoe_genotype(ApoeGenotype::E3E3);
        let decision = evaluate(&input);
        assert!(!decision.apoe_e4_carrier);
        assert!(decision.high_aria_risk);
    }

    #[test]
    fn test_all_exclusions_emit_in_check_order() {
        let mut input = baseline()
            .with_anticoagulants(true)
            .with_microhemorrhages(9)
            .with_cortical_siderosis(true)
            .with_recent_stroke_tia(true)
            .with_active_neoplasia(true)
            .with_active_autoimmune(true)
            .with_severe_organ_failure(true);
        input.mmse = 10;
        let decision = evaluate(&input);
        let expected: Vec<String> = [
            Criterion::MmseAtLeast20,
            Criterion::NoAnticoagulants,
            Criterion::MicrohemorrhagesWithinLimit,
            Criterion::NoCorticalSiderosis,
            Criterion::NoRecentStrokeTia,
            Criterion::NoActiveNeoplasia,
            Criterion::NoActiveAutoimmune,
            Criterion::NoSevereOrganFailure,
        ]
        .iter()
        .map(|criterion| criterion.failure_label().to_string())
        .collect();
        assert_eq!(decision.ineligibility_reasons, expected);
        assert_eq!(decision.recommendation, Recommendation::None);
    }

    #[test]
    fn test_recorded_only_fields_never_affect_decision() {
        let plain = evaluate(&baseline());
        let noisy = evaluate(
            &baseline()
                .with_ischemic_lesion_gt2cm(true)
                .with_fazekas_grade(3),
        );
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_recommendation_donanemab_unreachable_by_age_alone() {
        // The donanemab window is a strict subset of the lecanemab window,
        // so age can never select donanemab alone; the pairing is still
        // exhaustive over the two flags.
        for age in 18..=120 {
            let mut input = baseline();
            input.age = age;
            let decision = evaluate(&input);
            assert_ne!(decision.recommendation, Recommendation::Donanemab);
        }
    }
}
