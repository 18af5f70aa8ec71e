//! Closed clinical vocabularies used by the screening criteria
//!
//! Every vocabulary is a closed enum: criteria check exact membership,
//! never numeric ranges, so values outside the enumerated sets are
//! unrepresentable.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diagnosis category at presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    /// Mild cognitive impairment, prodromal to Alzheimer's disease
    #[serde(rename = "MCI prodromal AD")]
    MciProdromalAd,

    /// Mild Alzheimer's disease
    #[serde(rename = "Mild AD")]
    MildAd,

    /// Any other diagnosis
    #[serde(rename = "Other")]
    Other,
}

impl Diagnosis {
    /// Human-readable label, as persisted in the registry
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::MciProdromalAd => "MCI prodromal AD",
            Diagnosis::MildAd => "Mild AD",
            Diagnosis::Other => "Other",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Diagnosis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MCI prodromal AD" => Ok(Diagnosis::MciProdromalAd),
            "Mild AD" => Ok(Diagnosis::MildAd),
            "Other" => Ok(Diagnosis::Other),
            other => Err(CoreError::UnknownLabel {
                kind: "diagnosis",
                value: other.to_string(),
            }),
        }
    }
}

/// Clinical Dementia Rating, global score
///
/// The staging scale has exactly five steps; criteria check set membership
/// on the steps, so this is an enum rather than a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CdrGlobal {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "0.5")]
    Half,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl CdrGlobal {
    /// Score label as recorded on the rating scale
    pub fn label(&self) -> &'static str {
        match self {
            CdrGlobal::Zero => "0",
            CdrGlobal::Half => "0.5",
            CdrGlobal::One => "1",
            CdrGlobal::Two => "2",
            CdrGlobal::Three => "3",
        }
    }
}

impl fmt::Display for CdrGlobal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CdrGlobal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(CdrGlobal::Zero),
            "0.5" => Ok(CdrGlobal::Half),
            "1" => Ok(CdrGlobal::One),
            "2" => Ok(CdrGlobal::Two),
            "3" => Ok(CdrGlobal::Three),
            other => Err(CoreError::UnknownLabel {
                kind: "CDR global",
                value: other.to_string(),
            }),
        }
    }
}

/// APOE genotype pair
///
/// Serialized with the epsilon glyphs; the registry codec must carry these
/// losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApoeGenotype {
    #[serde(rename = "ε2/ε2")]
    E2E2,
    #[serde(rename = "ε2/ε3")]
    E2E3,
    #[serde(rename = "ε3/ε3")]
    E3E3,
    #[serde(rename = "ε2/ε4")]
    E2E4,
    #[serde(rename = "ε3/ε4")]
    E3E4,
    #[serde(rename = "ε4/ε4")]
    E4E4,
}

impl ApoeGenotype {
    /// Whether the pair carries at least one ε4 allele
    pub fn is_e4_carrier(&self) -> bool {
        matches!(
            self,
            ApoeGenotype::E2E4 | ApoeGenotype::E3E4 | ApoeGenotype::E4E4
        )
    }

    /// Genotype label with epsilon glyphs
    pub fn label(&self) -> &'static str {
        match self {
            ApoeGenotype::E2E2 => "ε2/ε2",
            ApoeGenotype::E2E3 => "ε2/ε3",
            ApoeGenotype::E3E3 => "ε3/ε3",
            ApoeGenotype::E2E4 => "ε2/ε4",
            ApoeGenotype::E3E4 => "ε3/ε4",
            ApoeGenotype::E4E4 => "ε4/ε4",
        }
    }
}

impl fmt::Display for ApoeGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApoeGenotype {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ε2/ε2" => Ok(ApoeGenotype::E2E2),
            "ε2/ε3" => Ok(ApoeGenotype::E2E3),
            "ε3/ε3" => Ok(ApoeGenotype::E3E3),
            "ε2/ε4" => Ok(ApoeGenotype::E2E4),
            "ε3/ε4" => Ok(ApoeGenotype::E3E4),
            "ε4/ε4" => Ok(ApoeGenotype::E4E4),
            other => Err(CoreError::UnknownLabel {
                kind: "APOE genotype",
                value: other.to_string(),
            }),
        }
    }
}
