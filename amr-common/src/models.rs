//! Core vocabulary and the AST row contract
//!
//! These types define the wire-level contract between the import/validation
//! pipeline, the interpretation engine, and the persistence collaborator.
//! Serde names match the upload vocabulary ("MIC", "DD", "S", "I", "R",
//! "CLSI", "EUCAST") so rows round-trip unchanged through JSON.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Clinical guideline body whose breakpoint tables drive interpretation.
///
/// CLSI and EUCAST publish independent tables; thresholds for the same
/// organism/antibiotic pair differ between them and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guideline {
    #[serde(rename = "CLSI")]
    Clsi,
    #[serde(rename = "EUCAST")]
    Eucast,
}

impl Guideline {
    /// Short name as it appears in uploads
    pub fn as_str(&self) -> &'static str {
        match self {
            Guideline::Clsi => "CLSI",
            Guideline::Eucast => "EUCAST",
        }
    }

    /// Versioned label of the reference table this guideline resolves to
    pub fn version_label(&self) -> &'static str {
        match self {
            Guideline::Clsi => "CLSI-2025",
            Guideline::Eucast => "EUCAST-2025",
        }
    }
}

impl FromStr for Guideline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CLSI" => Ok(Guideline::Clsi),
            "EUCAST" => Ok(Guideline::Eucast),
            other => Err(Error::UnsupportedGuideline(other.to_string())),
        }
    }
}

impl fmt::Display for Guideline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Susceptibility test method
///
/// MIC reports a concentration (lower = more susceptible); disk-diffusion
/// reports a zone diameter in millimeters (higher = more susceptible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "MIC")]
    Mic,
    #[serde(rename = "DD", alias = "disk-diffusion")]
    DiskDiffusion,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Mic => "MIC",
            Method::DiskDiffusion => "DD",
        }
    }

    /// Name of the row field that carries this method's measurement
    pub fn measurement_field(&self) -> &'static str {
        match self {
            Method::Mic => "mic_value",
            Method::DiskDiffusion => "zone_diameter",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MIC" => Ok(Method::Mic),
            "DD" | "DISK-DIFFUSION" => Ok(Method::DiskDiffusion),
            other => Err(Error::InvalidInput(format!(
                "method must be MIC or DD, got: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clinical susceptibility category
///
/// `Unknown` is an engine outcome (no breakpoint matched, or the value fell
/// in a threshold gap); laboratory-reported rows carry only S, I, or R.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "S")]
    Susceptible,
    #[serde(rename = "I")]
    Intermediate,
    #[serde(rename = "R")]
    Resistant,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Susceptible => "S",
            Category::Intermediate => "I",
            Category::Resistant => "R",
            Category::Unknown => "Unknown",
        }
    }

    /// True for a laboratory-reportable category (S, I, or R)
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "S" => Ok(Category::Susceptible),
            "I" => Ok(Category::Intermediate),
            "R" => Ok(Category::Resistant),
            other => Err(Error::InvalidInput(format!(
                "result must be S, I, or R, got: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated antimicrobial susceptibility test row, as handed to the
/// interpretation engine by the import/validation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstRow {
    pub sample_id: String,
    pub isolate_id: String,
    pub organism: String,
    pub antibiotic: String,

    /// Pre-existing laboratory-reported result; takes precedence over
    /// automated interpretation when present.
    #[serde(default)]
    pub result: Option<Category>,

    pub method: Method,

    /// Guideline declared on the row; falls back to the configured default
    /// when absent.
    #[serde(default)]
    pub guideline: Option<Guideline>,

    #[serde(default)]
    pub test_date: Option<NaiveDate>,

    /// Concentration, populated only for MIC rows
    #[serde(default)]
    pub mic_value: Option<f64>,

    /// Zone diameter in mm, populated only for disk-diffusion rows
    #[serde(default)]
    pub zone_diameter: Option<f64>,
}

impl AstRow {
    /// The measurement slot appropriate to this row's declared method
    pub fn measurement(&self) -> Option<f64> {
        match self.method {
            Method::Mic => self.mic_value,
            Method::DiskDiffusion => self.zone_diameter,
        }
    }
}

/// An AST row enriched with the engine's interpretation fields, in the shape
/// the persistence collaborator stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedRow {
    #[serde(flatten)]
    pub row: AstRow,

    /// True only when the engine supplied the category on this row
    pub auto_interpreted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreted_result: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation_guideline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation_confidence: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspected_mechanism: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation_notes: Option<String>,
}

impl InterpretedRow {
    /// Pass an input row through untouched (no automated interpretation)
    pub fn untouched(row: AstRow) -> Self {
        Self {
            row,
            auto_interpreted: false,
            interpreted_result: None,
            interpretation_guideline: None,
            interpretation_confidence: None,
            suspected_mechanism: None,
            interpretation_notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guideline_parses_case_insensitively() {
        assert_eq!("clsi".parse::<Guideline>().unwrap(), Guideline::Clsi);
        assert_eq!(" EUCAST ".parse::<Guideline>().unwrap(), Guideline::Eucast);
    }

    #[test]
    fn unrecognized_guideline_is_an_error() {
        let err = "BSAC".parse::<Guideline>().unwrap_err();
        assert!(err.to_string().contains("BSAC"));
    }

    #[test]
    fn method_accepts_both_spellings() {
        assert_eq!("DD".parse::<Method>().unwrap(), Method::DiskDiffusion);
        assert_eq!(
            "disk-diffusion".parse::<Method>().unwrap(),
            Method::DiskDiffusion
        );
        assert_eq!("mic".parse::<Method>().unwrap(), Method::Mic);
    }

    #[test]
    fn category_round_trips_through_serde() {
        let json = serde_json::to_string(&Category::Resistant).unwrap();
        assert_eq!(json, "\"R\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Resistant);
    }

    #[test]
    fn ast_row_measurement_follows_method() {
        let row = AstRow {
            sample_id: "S-001".into(),
            isolate_id: "ISO-001".into(),
            organism: "Escherichia coli".into(),
            antibiotic: "Ciprofloxacin".into(),
            result: None,
            method: Method::Mic,
            guideline: None,
            test_date: None,
            mic_value: Some(0.5),
            zone_diameter: None,
        };
        assert_eq!(row.measurement(), Some(0.5));

        let dd = AstRow {
            method: Method::DiskDiffusion,
            ..row
        };
        assert_eq!(dd.measurement(), None);
    }
}
