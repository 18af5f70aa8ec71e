//! Fixed registry schema

/// UTF-8 byte-order mark written at the head of the registry file and of
/// every export artifact (spreadsheet tools use it to detect the encoding)
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Column order of the registry file
///
/// Created once when the file is first written and stable afterwards; every
/// appended row conforms to it regardless of absent optional fields. The
/// names match the [`crate::entry::RegistryEntry`] field order exactly.
pub const COLUMNS: [&str; 25] = [
    "timestamp",
    "patient_id",
    "age",
    "diagnosis",
    "mmse",
    "cdr_global",
    "amyloid_positive",
    "caregiver_available",
    "microhemorrhage_count",
    "cortical_siderosis",
    "ischemic_lesion_gt2cm",
    "fazekas_grade",
    "on_anticoagulants",
    "recent_stroke_tia",
    "active_neoplasia",
    "active_autoimmune",
    "severe_organ_failure",
    "apoe_test_done",
    "apoe_genotype",
    "eligible_lecanemab",
    "eligible_donanemab",
    "high_aria_risk",
    "apoe_e4_carrier",
    "recommendation",
    "ineligibility_reasons",
];
