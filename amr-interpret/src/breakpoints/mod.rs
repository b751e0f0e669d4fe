//! Breakpoint reference tables
//!
//! Static threshold data mapping (organism-group, antibiotic) pairs to S/I/R
//! category thresholds per test method, one independent table per guideline
//! version. Tables are built once behind `Lazy` and immutable thereafter.
//! CLSI and EUCAST entries are never merged or defaulted into each other.

mod clsi;
mod eucast;

use std::fmt;

use amr_common::{Category, Guideline, Method};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::taxonomy::{self, OrganismPattern};

/// One threshold expression on the measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Threshold {
    /// Value at or below the bound ("<=8")
    AtMost(f64),
    /// Value at or above the bound (">=32")
    AtLeast(f64),
    /// Inclusive range ("8-16")
    Range(f64, f64),
    /// Single point value ("8")
    Point(f64),
}

impl Threshold {
    /// Whether a measurement satisfies this threshold expression
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Threshold::AtMost(bound) => value <= bound,
            Threshold::AtLeast(bound) => value >= bound,
            Threshold::Range(lo, hi) => lo <= value && value <= hi,
            Threshold::Point(point) => value == point,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Threshold::AtMost(bound) => write!(f, "<={}", bound),
            Threshold::AtLeast(bound) => write!(f, ">={}", bound),
            Threshold::Range(lo, hi) => write!(f, "{}-{}", lo, hi),
            Threshold::Point(point) => write!(f, "{}", point),
        }
    }
}

/// The S/I/R threshold triple for one method.
///
/// A missing tier means that category does not exist for the rule (some
/// drugs have no Intermediate tier). The triple is assumed to partition the
/// axis without overlap; the classifier applies it but never validates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdSet {
    pub susceptible: Option<Threshold>,
    pub intermediate: Option<Threshold>,
    pub resistant: Option<Threshold>,
}

impl ThresholdSet {
    /// Classify a measurement under this triple.
    ///
    /// Evaluation order is method-dependent and alarm-direction-first:
    /// MIC checks R then I then S (lower = more susceptible), disk-diffusion
    /// checks S then I then R (higher = more susceptible). First satisfied
    /// category wins; a value satisfying no tier classifies Unknown.
    pub fn classify(&self, method: Method, value: f64) -> Category {
        let order = match method {
            Method::Mic => [
                (self.resistant, Category::Resistant),
                (self.intermediate, Category::Intermediate),
                (self.susceptible, Category::Susceptible),
            ],
            Method::DiskDiffusion => [
                (self.susceptible, Category::Susceptible),
                (self.intermediate, Category::Intermediate),
                (self.resistant, Category::Resistant),
            ],
        };

        for (threshold, category) in order {
            if threshold.is_some_and(|t| t.contains(value)) {
                return category;
            }
        }
        Category::Unknown
    }
}

impl fmt::Display for ThresholdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_tier = |tier: Option<Threshold>| match tier {
            Some(t) => t.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "S:{} I:{} R:{}",
            fmt_tier(self.susceptible),
            fmt_tier(self.intermediate),
            fmt_tier(self.resistant)
        )
    }
}

/// The breakpoint rule for one (organism-group, antibiotic) pair
#[derive(Debug, Clone)]
pub struct BreakpointEntry {
    pub organism: OrganismPattern,
    pub antibiotic: &'static str,
    pub mic: Option<ThresholdSet>,
    pub disk: Option<ThresholdSet>,
}

impl BreakpointEntry {
    /// Threshold triple for the requested method, if defined
    pub fn thresholds(&self, method: Method) -> Option<&ThresholdSet> {
        match method {
            Method::Mic => self.mic.as_ref(),
            Method::DiskDiffusion => self.disk.as_ref(),
        }
    }
}

/// All breakpoint entries for one guideline version.
///
/// Declaration order is the matching tie-break: family-level entries are
/// declared before genus-level entries so a broader family rule is never
/// masked by a later, unrelated genus rule.
#[derive(Debug)]
pub struct BreakpointTable {
    guideline: Guideline,
    entries: Vec<BreakpointEntry>,
}

static CLSI_2025: Lazy<BreakpointTable> = Lazy::new(|| BreakpointTable {
    guideline: Guideline::Clsi,
    entries: clsi::entries(),
});

static EUCAST_2025: Lazy<BreakpointTable> = Lazy::new(|| BreakpointTable {
    guideline: Guideline::Eucast,
    entries: eucast::entries(),
});

impl BreakpointTable {
    /// The process-wide table for a guideline
    pub fn for_guideline(guideline: Guideline) -> &'static BreakpointTable {
        match guideline {
            Guideline::Clsi => &CLSI_2025,
            Guideline::Eucast => &EUCAST_2025,
        }
    }

    pub fn guideline(&self) -> Guideline {
        self.guideline
    }

    /// Find the first entry whose organism and antibiotic patterns both
    /// match. `organism` must already be normalized (see
    /// [`taxonomy::normalize_organism`]); antibiotic matching is
    /// case-insensitive substring containment.
    pub fn find_entry(&self, organism: &str, antibiotic: &str) -> Option<&BreakpointEntry> {
        self.entries.iter().find(|entry| {
            entry.organism.matches(organism)
                && taxonomy::name_contains(entry.antibiotic, antibiotic)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shorthand used by the data modules
pub(crate) fn tiers(
    susceptible: Option<Threshold>,
    intermediate: Option<Threshold>,
    resistant: Option<Threshold>,
) -> ThresholdSet {
    ThresholdSet {
        susceptible,
        intermediate,
        resistant,
    }
}
