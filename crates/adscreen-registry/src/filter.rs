//! Filtering and aggregate summaries over the registry
//!
//! Filters are pure views: applying one never mutates the source table and
//! the matching subset keeps its original row order.

use crate::entry::RegistryEntry;
use crate::error::RegistryError;
use adscreen_core::Diagnosis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ARIA risk stratum for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AriaRisk {
    High,
    Low,
}

impl fmt::Display for AriaRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AriaRisk::High => "High",
            AriaRisk::Low => "Low",
        })
    }
}

impl FromStr for AriaRisk {
    type Err = RegistryError;

    /// Unknown values are rejected, never treated as a different stratum
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(AriaRisk::High),
            "Low" => Ok(AriaRisk::Low),
            other => Err(RegistryError::InvalidFilterValue {
                field: "aria_risk",
                value: other.to_string(),
            }),
        }
    }
}

/// Row filter over the registry
///
/// Every field defaults to "no constraint"; active constraints combine with
/// logical AND. An all-default filter matches every row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryFilter {
    /// Constrain lecanemab eligibility
    pub eligible_lecanemab: Option<bool>,

    /// Constrain donanemab eligibility
    pub eligible_donanemab: Option<bool>,

    /// Constrain the ARIA risk stratum
    pub aria_risk: Option<AriaRisk>,

    /// Accepted diagnoses; empty means no constraint
    pub diagnoses: Vec<Diagnosis>,

    /// Case-insensitive substring over patient id and ineligibility reasons
    pub text: Option<String>,
}

impl RegistryFilter {
    /// Create a filter with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain lecanemab eligibility
    pub fn with_eligible_lecanemab(mut self, eligible: bool) -> Self {
        self.eligible_lecanemab = Some(eligible);
        self
    }

    /// Constrain donanemab eligibility
    pub fn with_eligible_donanemab(mut self, eligible: bool) -> Self {
        self.eligible_donanemab = Some(eligible);
        self
    }

    /// Constrain the ARIA risk stratum
    pub fn with_aria_risk(mut self, risk: AriaRisk) -> Self {
        self.aria_risk = Some(risk);
        self
    }

    /// Add an accepted diagnosis
    pub fn with_diagnosis(mut self, diagnosis: Diagnosis) -> Self {
        self.diagnoses.push(diagnosis);
        self
    }

    /// Add an accepted diagnosis from its registry label.
    /// Unknown labels are rejected, never dropped or coerced.
    pub fn with_diagnosis_label(mut self, label: &str) -> Result<Self, RegistryError> {
        self.diagnoses.push(label.parse::<Diagnosis>()?);
        Ok(self)
    }

    /// Set the free-text search needle
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether a single row matches every active constraint
    pub fn matches(&self, entry: &RegistryEntry) -> bool {
        if let Some(expected) = self.eligible_lecanemab {
            if entry.eligible_lecanemab != expected {
                return false;
            }
        }

        if let Some(expected) = self.eligible_donanemab {
            if entry.eligible_donanemab != expected {
                return false;
            }
        }

        if let Some(risk) = self.aria_risk {
            if entry.high_aria_risk != (risk == AriaRisk::High) {
                return false;
            }
        }

        if !self.diagnoses.is_empty() && !self.diagnoses.contains(&entry.diagnosis) {
            return false;
        }

        if let Some(ref needle) = self.text {
            let haystack = format!(
                "{} {}",
                entry.patient_id, entry.ineligibility_reasons
            )
            .to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// Apply to a table, returning the matching subset in original order
    pub fn apply(&self, rows: &[RegistryEntry]) -> Vec<RegistryEntry> {
        rows.iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}

/// Aggregate counts over a set of rows
///
/// Computed over whatever subset it is given — for a filtered report, pass
/// the filtered rows, not the full registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrySummary {
    /// Row count
    pub total: usize,

    /// Rows eligible for lecanemab
    pub eligible_lecanemab: usize,

    /// Rows eligible for donanemab
    pub eligible_donanemab: usize,

    /// Rows flagged with elevated ARIA risk
    pub high_aria_risk: usize,
}

impl RegistrySummary {
    /// Count the given rows
    pub fn of(rows: &[RegistryEntry]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };
        for entry in rows {
            if entry.eligible_lecanemab {
                summary.eligible_lecanemab += 1;
            }
            if entry.eligible_donanemab {
                summary.eligible_donanemab += 1;
            }
            if entry.high_aria_risk {
                summary.high_aria_risk += 1;
            }
        }
        summary
    }
}
