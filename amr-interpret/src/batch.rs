//! Batch interpretation driver
//!
//! Applies the interpreter across every row of an uploaded AST dataset.
//! Rows are independent: partial success is the norm, one malformed row
//! never aborts the batch, and each row carries a tagged outcome so the
//! caller can see exactly why a row was or was not interpreted.

use amr_common::{AstRow, Guideline, InterpretedRow};
use serde::Serialize;
use tracing::{info, warn};

use crate::interpreter::Interpreter;

/// Why a row ended up in its final state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail")]
pub enum RowOutcome {
    /// The engine supplied the interpretation
    Interpreted,
    /// The row already carried a valid laboratory-reported S/I/R result;
    /// automated interpretation never overwrites it
    AlreadyReported,
    /// The measurement slot required by the declared method was empty
    MissingMeasurement,
    /// Interpretation failed for this row; the batch continued
    Failed(String),
}

/// One row of batch output: the enriched row plus its outcome tag
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    #[serde(flatten)]
    pub row: InterpretedRow,
    #[serde(flatten)]
    pub outcome: RowOutcome,
}

/// Counts reported after a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub auto_interpreted: usize,
    pub already_reported: usize,
    pub missing_measurement: usize,
    pub failed: usize,
}

/// Result of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
    pub summary: BatchSummary,
}

/// Drives the interpreter across a whole dataset.
///
/// Holds one interpreter per guideline so per-row guideline declarations
/// resolve without re-reading reference data; rows without a declaration
/// use the configured default.
#[derive(Debug, Clone, Copy)]
pub struct BatchDriver {
    default_guideline: Guideline,
    clsi: Interpreter,
    eucast: Interpreter,
}

impl BatchDriver {
    pub fn new(default_guideline: Guideline) -> Self {
        Self {
            default_guideline,
            clsi: Interpreter::new(Guideline::Clsi),
            eucast: Interpreter::new(Guideline::Eucast),
        }
    }

    fn interpreter_for(&self, guideline: Guideline) -> &Interpreter {
        match guideline {
            Guideline::Clsi => &self.clsi,
            Guideline::Eucast => &self.eucast,
        }
    }

    /// Interpret every row of a dataset.
    ///
    /// Row order is preserved. Rows never influence each other, so the map
    /// is order-independent and safe to parallelize if a caller needs to.
    pub fn interpret_batch(&self, rows: Vec<AstRow>) -> BatchReport {
        let mut out = Vec::with_capacity(rows.len());
        let mut summary = BatchSummary {
            total: rows.len(),
            ..Default::default()
        };

        for row in rows {
            let batch_row = self.interpret_row(row);
            match batch_row.outcome {
                RowOutcome::Interpreted => summary.auto_interpreted += 1,
                RowOutcome::AlreadyReported => summary.already_reported += 1,
                RowOutcome::MissingMeasurement => summary.missing_measurement += 1,
                RowOutcome::Failed(_) => summary.failed += 1,
            }
            out.push(batch_row);
        }

        info!(
            total = summary.total,
            auto_interpreted = summary.auto_interpreted,
            already_reported = summary.already_reported,
            missing_measurement = summary.missing_measurement,
            failed = summary.failed,
            "batch interpretation complete"
        );

        BatchReport { rows: out, summary }
    }

    fn interpret_row(&self, row: AstRow) -> BatchRow {
        // An existing valid laboratory result always takes precedence.
        if row.result.is_some_and(|r| r.is_reportable()) {
            return BatchRow {
                row: InterpretedRow::untouched(row),
                outcome: RowOutcome::AlreadyReported,
            };
        }

        let Some(measurement) = row.measurement() else {
            return BatchRow {
                row: InterpretedRow::untouched(row),
                outcome: RowOutcome::MissingMeasurement,
            };
        };

        let guideline = row.guideline.unwrap_or(self.default_guideline);
        let interpreter = self.interpreter_for(guideline);

        match interpreter.interpret(&row.organism, &row.antibiotic, row.method, measurement) {
            Ok(interpretation) => {
                let mut enriched = InterpretedRow::untouched(row);
                // The computed category becomes the row's effective result.
                enriched.row.result = Some(interpretation.category);
                enriched.auto_interpreted = true;
                enriched.interpreted_result = Some(interpretation.category);
                enriched.interpretation_guideline =
                    Some(interpretation.guideline_used.to_string());
                enriched.interpretation_confidence =
                    Some(interpretation.confidence.to_string());
                enriched.suspected_mechanism = interpretation
                    .suspected_mechanism
                    .map(|name| name.to_string());
                enriched.interpretation_notes = Some(interpretation.notes);
                BatchRow {
                    row: enriched,
                    outcome: RowOutcome::Interpreted,
                }
            }
            Err(err) => {
                warn!(
                    isolate_id = %row.isolate_id,
                    antibiotic = %row.antibiotic,
                    error = %err,
                    "row interpretation failed"
                );
                let mut enriched = InterpretedRow::untouched(row);
                enriched.interpretation_notes =
                    Some(format!("Interpretation failed: {}", err));
                BatchRow {
                    row: enriched,
                    outcome: RowOutcome::Failed(err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amr_common::{Category, Method};

    fn row(isolate: &str, antibiotic: &str, mic: Option<f64>) -> AstRow {
        AstRow {
            sample_id: "S-001".into(),
            isolate_id: isolate.into(),
            organism: "Escherichia coli".into(),
            antibiotic: antibiotic.into(),
            result: None,
            method: Method::Mic,
            guideline: None,
            test_date: None,
            mic_value: mic,
            zone_diameter: None,
        }
    }

    #[test]
    fn existing_result_is_never_overwritten() {
        let driver = BatchDriver::new(Guideline::Clsi);
        let mut reported = row("ISO-1", "Ceftazidime", Some(16.0));
        reported.result = Some(Category::Susceptible);

        let report = driver.interpret_batch(vec![reported]);
        let out = &report.rows[0];
        assert_eq!(out.outcome, RowOutcome::AlreadyReported);
        assert!(!out.row.auto_interpreted);
        assert_eq!(out.row.row.result, Some(Category::Susceptible));
        assert_eq!(report.summary.already_reported, 1);
    }

    #[test]
    fn interpreted_category_becomes_effective_result() {
        let driver = BatchDriver::new(Guideline::Clsi);
        let report = driver.interpret_batch(vec![row("ISO-1", "Ceftazidime", Some(16.0))]);
        let out = &report.rows[0];
        assert_eq!(out.outcome, RowOutcome::Interpreted);
        assert!(out.row.auto_interpreted);
        assert_eq!(out.row.row.result, Some(Category::Resistant));
        assert_eq!(out.row.interpreted_result, Some(Category::Resistant));
        assert_eq!(out.row.suspected_mechanism.as_deref(), Some("ESBL"));
    }

    #[test]
    fn missing_measurement_is_skipped_not_fatal() {
        let driver = BatchDriver::new(Guideline::Clsi);
        let mut rows: Vec<AstRow> = (0..10)
            .map(|i| row(&format!("ISO-{}", i), "Ceftazidime", Some(2.0)))
            .collect();
        rows[4].mic_value = None;

        let report = driver.interpret_batch(rows);
        assert_eq!(report.summary.total, 10);
        assert_eq!(report.summary.auto_interpreted, 9);
        assert_eq!(report.summary.missing_measurement, 1);
        assert_eq!(report.summary.failed, 0);
        assert_eq!(report.rows[4].outcome, RowOutcome::MissingMeasurement);
    }

    #[test]
    fn malformed_row_fails_in_isolation() {
        let driver = BatchDriver::new(Guideline::Clsi);
        let bad = row("ISO-BAD", "Ceftazidime", Some(f64::NAN));
        let good = row("ISO-GOOD", "Ceftazidime", Some(2.0));
        let report = driver.interpret_batch(vec![bad, good]);

        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.auto_interpreted, 1);
        assert!(matches!(report.rows[0].outcome, RowOutcome::Failed(_)));
        assert!(report.rows[0]
            .row
            .interpretation_notes
            .as_deref()
            .unwrap()
            .starts_with("Interpretation failed"));
        assert_eq!(report.rows[1].outcome, RowOutcome::Interpreted);
    }

    #[test]
    fn row_guideline_overrides_default() {
        let driver = BatchDriver::new(Guideline::Clsi);
        let mut eucast_row = row("ISO-1", "Gentamicin", Some(8.0));
        eucast_row.guideline = Some(Guideline::Eucast);

        let report = driver.interpret_batch(vec![eucast_row]);
        let out = &report.rows[0];
        // EUCAST calls Enterobacteriaceae gentamicin R at >=8; CLSI would
        // call 8 Intermediate.
        assert_eq!(out.row.interpreted_result, Some(Category::Resistant));
        assert_eq!(
            out.row.interpretation_guideline.as_deref(),
            Some("EUCAST-2025")
        );
    }

    #[test]
    fn unknown_category_is_recorded_not_dropped() {
        let driver = BatchDriver::new(Guideline::Clsi);
        let report = driver.interpret_batch(vec![{
            let mut r = row("ISO-1", "UnheardOfDrug", Some(4.0));
            r.organism = "Unusual Organism".into();
            r
        }]);
        let out = &report.rows[0];
        assert_eq!(out.outcome, RowOutcome::Interpreted);
        assert_eq!(out.row.interpreted_result, Some(Category::Unknown));
        assert!(out
            .row
            .interpretation_notes
            .as_deref()
            .unwrap()
            .contains("No breakpoint found"));
    }
}
