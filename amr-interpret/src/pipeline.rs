//! Import/validation pipeline collaborator
//!
//! Validates raw uploaded AST rows (field presence, enumerated-value
//! domains, numeric and date formats, duplicate tests) and converts them to
//! typed [`AstRow`]s before the batch driver sees them. Spreadsheet parsing
//! itself lives upstream; this module receives already-parsed rows.

use std::collections::HashSet;
use std::fmt;

use amr_common::{AstRow, Category, Guideline, Method};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An AST row as parsed from an upload, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAstRow {
    #[serde(default)]
    pub sample_id: Option<String>,
    #[serde(default)]
    pub isolate_id: Option<String>,
    #[serde(default)]
    pub organism: Option<String>,
    #[serde(default)]
    pub antibiotic: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub guideline: Option<String>,
    #[serde(default)]
    pub test_date: Option<String>,
    #[serde(default)]
    pub mic_value: Option<f64>,
    #[serde(default)]
    pub zone_diameter: Option<f64>,
}

/// One validation problem, addressed to a 1-based data row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub row: usize,
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}: {}", self.row, self.field, self.message)
    }
}

/// Validate a parsed upload and produce typed rows.
///
/// All rows are checked and all problems reported together, so an upload
/// with several mistakes is corrected in one round trip. `known_sample_ids`
/// enables the referential check against the samples sheet when the caller
/// has it.
pub fn validate_rows(
    rows: &[RawAstRow],
    known_sample_ids: Option<&HashSet<String>>,
) -> Result<Vec<AstRow>, Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    let mut typed = Vec::with_capacity(rows.len());
    let mut seen_tests: HashSet<(String, String)> = HashSet::new();

    for (idx, raw) in rows.iter().enumerate() {
        let row_no = idx + 1;
        let mut push = |field: &'static str, message: String| {
            issues.push(ValidationIssue {
                row: row_no,
                field,
                message,
            })
        };

        let sample_id = required(&raw.sample_id, "sample_id", &mut push);
        let isolate_id = required(&raw.isolate_id, "isolate_id", &mut push);
        let organism = required(&raw.organism, "organism", &mut push);
        let antibiotic = required(&raw.antibiotic, "antibiotic", &mut push);

        let result = match trimmed(&raw.result) {
            None => None,
            Some(s) => match s.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    push("result", format!("must be S, I, or R, got: {}", s));
                    None
                }
            },
        };

        let method = match trimmed(&raw.method) {
            None => {
                push("method", "missing value".into());
                None
            }
            Some(s) => match s.parse::<Method>() {
                Ok(method) => Some(method),
                Err(_) => {
                    push("method", format!("must be DD or MIC, got: {}", s));
                    None
                }
            },
        };

        let guideline = match trimmed(&raw.guideline) {
            None => None,
            Some(s) => match s.parse::<Guideline>() {
                Ok(guideline) => Some(guideline),
                Err(_) => {
                    push("guideline", format!("must be CLSI or EUCAST, got: {}", s));
                    None
                }
            },
        };

        let test_date = match trimmed(&raw.test_date) {
            None => None,
            Some(s) => match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    push("test_date", format!("invalid date (use YYYY-MM-DD): {}", s));
                    None
                }
            },
        };

        if let Some(mic) = raw.mic_value {
            if !mic.is_finite() || mic < 0.0 {
                push("mic_value", format!("must be a non-negative number: {}", mic));
            }
        }
        if let Some(zone) = raw.zone_diameter {
            if !zone.is_finite() || zone < 0.0 {
                push(
                    "zone_diameter",
                    format!("must be a non-negative number: {}", zone),
                );
            }
        }

        if let (Some(isolate), Some(drug)) = (&isolate_id, &antibiotic) {
            if !seen_tests.insert((isolate.clone(), drug.clone())) {
                push(
                    "isolate_id",
                    format!("duplicate test: {} + {}", isolate, drug),
                );
            }
        }

        if let (Some(ids), Some(sample)) = (known_sample_ids, &sample_id) {
            if !ids.contains(sample) {
                push(
                    "sample_id",
                    format!("references non-existent sample: {}", sample),
                );
            }
        }

        if let (Some(sample_id), Some(isolate_id), Some(organism), Some(antibiotic), Some(method)) =
            (sample_id, isolate_id, organism, antibiotic, method)
        {
            typed.push(AstRow {
                sample_id,
                isolate_id,
                organism,
                antibiotic,
                result,
                method,
                guideline,
                test_date,
                mic_value: raw.mic_value,
                zone_diameter: raw.zone_diameter,
            });
        }
    }

    if issues.is_empty() {
        debug!(rows = typed.len(), "upload validation passed");
        Ok(typed)
    } else {
        debug!(issues = issues.len(), "upload validation failed");
        Err(issues)
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn required(
    value: &Option<String>,
    field: &'static str,
    push: &mut impl FnMut(&'static str, String),
) -> Option<String> {
    match trimmed(value) {
        Some(s) => Some(s),
        None => {
            push(field, "missing value".into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(isolate: &str, antibiotic: &str) -> RawAstRow {
        RawAstRow {
            sample_id: Some("S-001".into()),
            isolate_id: Some(isolate.into()),
            organism: Some("Escherichia coli".into()),
            antibiotic: Some(antibiotic.into()),
            result: None,
            method: Some("MIC".into()),
            guideline: Some("CLSI".into()),
            test_date: Some("2026-03-14".into()),
            mic_value: Some(4.0),
            zone_diameter: None,
        }
    }

    #[test]
    fn valid_rows_convert_to_typed_rows() {
        let rows = vec![raw("ISO-1", "Ceftazidime"), raw("ISO-1", "Gentamicin")];
        let typed = validate_rows(&rows, None).unwrap();
        assert_eq!(typed.len(), 2);
        assert_eq!(typed[0].method, Method::Mic);
        assert_eq!(typed[0].guideline, Some(Guideline::Clsi));
    }

    #[test]
    fn whitespace_is_stripped_before_validation() {
        let mut row = raw("ISO-1", "Ceftazidime");
        row.result = Some("  R ".into());
        row.method = Some(" mic ".into());
        let typed = validate_rows(&[row], None).unwrap();
        assert_eq!(typed[0].result, Some(Category::Resistant));
    }

    #[test]
    fn invalid_domains_are_all_reported() {
        let mut row = raw("ISO-1", "Ceftazidime");
        row.result = Some("X".into());
        row.method = Some("PCR".into());
        row.guideline = Some("BSAC".into());
        row.test_date = Some("14/03/2026".into());

        let issues = validate_rows(&[row], None).unwrap_err();
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert!(fields.contains(&"result"));
        assert!(fields.contains(&"method"));
        assert!(fields.contains(&"guideline"));
        assert!(fields.contains(&"test_date"));
    }

    #[test]
    fn missing_required_fields_are_flagged() {
        let row = RawAstRow {
            mic_value: Some(1.0),
            ..Default::default()
        };
        let issues = validate_rows(&[row], None).unwrap_err();
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        for field in ["sample_id", "isolate_id", "organism", "antibiotic", "method"] {
            assert!(fields.contains(&field), "expected issue for {}", field);
        }
    }

    #[test]
    fn duplicate_isolate_antibiotic_pairs_are_flagged() {
        let rows = vec![raw("ISO-1", "Ceftazidime"), raw("ISO-1", "Ceftazidime")];
        let issues = validate_rows(&rows, None).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, 2);
        assert!(issues[0].message.contains("duplicate test"));
    }

    #[test]
    fn orphan_sample_references_are_flagged() {
        let known: HashSet<String> = ["S-999".to_string()].into_iter().collect();
        let issues = validate_rows(&[raw("ISO-1", "Ceftazidime")], Some(&known)).unwrap_err();
        assert!(issues[0].message.contains("non-existent sample"));
    }

    #[test]
    fn negative_measurements_are_flagged() {
        let mut row = raw("ISO-1", "Ceftazidime");
        row.mic_value = Some(-2.0);
        let issues = validate_rows(&[row], None).unwrap_err();
        assert_eq!(issues[0].field, "mic_value");
    }

    #[test]
    fn blank_result_is_allowed() {
        let mut row = raw("ISO-1", "Ceftazidime");
        row.result = Some("   ".into());
        let typed = validate_rows(&[row], None).unwrap();
        assert_eq!(typed[0].result, None);
    }
}
