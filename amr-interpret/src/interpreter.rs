//! Breakpoint interpreter
//!
//! Matches an (organism, antibiotic) pair to the best breakpoint entry,
//! classifies the measurement against its thresholds, and attaches a
//! suspected resistance mechanism for resistant results.
//!
//! An `Interpreter` is an immutable value constructed from a guideline's
//! reference table and passed explicitly to call sites; there are no cached
//! module-level instances. Construction is cheap (a pointer to a static
//! table), so callers may build one per batch or share one freely.

use std::fmt;

use amr_common::{Category, Error, Guideline, Method, Result};
use serde::Serialize;
use tracing::debug;

use crate::breakpoints::{BreakpointTable, ThresholdSet};
use crate::mechanisms;
use crate::taxonomy;

/// Confidence attached to an interpretation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Confidence {
    /// Breakpoint matched and the classification is unambiguous
    High,
    /// A Moderate-confidence mechanism signature matched; a confirmatory
    /// laboratory test is recommended before acting on it
    ModerateConfirmatory,
    /// No classification was possible; the string says why
    NotClassified(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => f.write_str("High"),
            Confidence::ModerateConfirmatory => {
                f.write_str("Moderate - confirmatory test recommended")
            }
            Confidence::NotClassified(reason) => f.write_str(reason),
        }
    }
}

/// The engine's output for one measurement.
///
/// Constructed fresh per call and immutable; persistence is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub category: Category,
    /// Guideline version the classification was performed under
    pub guideline_used: &'static str,
    pub confidence: Confidence,
    /// Populated only when `category` is Resistant and a mechanism
    /// signature matched; advisory, never a confirmed finding
    pub suspected_mechanism: Option<&'static str>,
    /// Threshold triple the classification used, for traceability
    pub breakpoint_applied: Option<ThresholdSet>,
    /// Which measurement drove the decision, or why none could
    pub notes: String,
}

impl Interpretation {
    fn unclassified(guideline: Guideline, reason: &str, notes: String) -> Self {
        Self {
            category: Category::Unknown,
            guideline_used: guideline.version_label(),
            confidence: Confidence::NotClassified(reason.to_string()),
            suspected_mechanism: None,
            breakpoint_applied: None,
            notes,
        }
    }
}

/// Breakpoint interpretation engine for one guideline
#[derive(Debug, Clone, Copy)]
pub struct Interpreter {
    guideline: Guideline,
    table: &'static BreakpointTable,
}

impl Interpreter {
    /// Build an interpreter over the given guideline's reference table
    pub fn new(guideline: Guideline) -> Self {
        Self {
            guideline,
            table: BreakpointTable::for_guideline(guideline),
        }
    }

    pub fn guideline(&self) -> Guideline {
        self.guideline
    }

    /// Interpret a single measurement.
    ///
    /// Unmatched organism/antibiotic pairs and unsupported methods are
    /// expected outcomes and return `Category::Unknown` with an explanatory
    /// note, never an error. Errors are reserved for caller contract
    /// violations: empty organism or antibiotic, or a non-finite or
    /// negative measurement.
    pub fn interpret(
        &self,
        organism: &str,
        antibiotic: &str,
        method: Method,
        measurement: f64,
    ) -> Result<Interpretation> {
        if organism.trim().is_empty() {
            return Err(Error::InvalidInput("organism must be non-empty".into()));
        }
        if antibiotic.trim().is_empty() {
            return Err(Error::InvalidInput("antibiotic must be non-empty".into()));
        }
        if !measurement.is_finite() || measurement < 0.0 {
            return Err(Error::InvalidInput(format!(
                "{} must be a non-negative number, got: {}",
                method.measurement_field(),
                measurement
            )));
        }

        let normalized = taxonomy::normalize_organism(organism);

        let Some(entry) = self.table.find_entry(&normalized, antibiotic) else {
            debug!(organism, antibiotic, guideline = %self.guideline, "no breakpoint entry");
            return Ok(Interpretation::unclassified(
                self.guideline,
                "No breakpoint available",
                format!("No breakpoint found for {} - {}", organism, antibiotic),
            ));
        };

        let Some(thresholds) = entry.thresholds(method) else {
            return Ok(Interpretation::unclassified(
                self.guideline,
                "Method not supported for this breakpoint",
                format!(
                    "{} breakpoints not available for {} - {}",
                    method, entry.organism, entry.antibiotic
                ),
            ));
        };

        let category = thresholds.classify(method, measurement);

        // Mechanism inference is gated on a confirmed Resistant category.
        let mechanism = match category {
            Category::Resistant => mechanisms::infer_mechanism(&normalized, antibiotic),
            _ => None,
        };

        let confidence = match mechanism {
            Some(sig) if sig.confidence == mechanisms::MechanismConfidence::Moderate => {
                Confidence::ModerateConfirmatory
            }
            _ => Confidence::High,
        };

        debug!(
            organism,
            antibiotic,
            method = %method,
            measurement,
            category = %category,
            "interpreted measurement"
        );

        Ok(Interpretation {
            category,
            guideline_used: self.guideline.version_label(),
            confidence,
            suspected_mechanism: mechanism.map(|sig| sig.name),
            breakpoint_applied: Some(*thresholds),
            notes: format!("Based on {} value: {}", method, measurement),
        })
    }
}
