//! Decision record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Therapy recommendation derived from the two eligibility flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Both therapies available
    #[serde(rename = "Both (weigh patient preference, logistics, ARIA risk)")]
    Both,

    /// Lecanemab only
    #[serde(rename = "Lecanemab")]
    Lecanemab,

    /// Donanemab only
    #[serde(rename = "Donanemab")]
    Donanemab,

    /// Neither therapy
    #[serde(rename = "None (see reasons)")]
    None,
}

impl Recommendation {
    /// Operator-facing label, as persisted in the registry
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Both => "Both (weigh patient preference, logistics, ARIA risk)",
            Recommendation::Lecanemab => "Lecanemab",
            Recommendation::Donanemab => "Donanemab",
            Recommendation::None => "None (see reasons)",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one eligibility evaluation
///
/// Derived by [`crate::rules::evaluate`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Eligible for lecanemab (base criteria and the 50–85 age window)
    pub eligible_lecanemab: bool,

    /// Eligible for donanemab (base criteria and the 60–85 age window)
    pub eligible_donanemab: bool,

    /// Elevated ARIA risk flag
    pub high_aria_risk: bool,

    /// At least one ε4 allele confirmed by genotyping
    pub apoe_e4_carrier: bool,

    /// Failure label for every unmet base criterion, in check order.
    /// Age-window failures contribute no entry here.
    pub ineligibility_reasons: Vec<String>,

    /// Recommended therapy
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_labels() {
        assert_eq!(Recommendation::Lecanemab.to_string(), "Lecanemab");
        assert_eq!(Recommendation::Donanemab.to_string(), "Donanemab");
        assert!(Recommendation::Both.to_string().starts_with("Both"));
        assert!(Recommendation::None.to_string().starts_with("None"));
    }

    #[test]
    fn test_recommendation_serde_uses_labels() {
        let json = serde_json::to_string(&Recommendation::None).unwrap();
        assert_eq!(json, "\"None (see reasons)\"");
        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Recommendation::None);
    }
}
