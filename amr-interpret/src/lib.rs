//! # amr-interpret - Breakpoint Interpretation Engine
//!
//! Rule-based classification of antimicrobial susceptibility test results.
//! Converts a raw laboratory measurement (MIC concentration or disk-diffusion
//! zone diameter) into a clinical category (S/I/R) using organism- and
//! antibiotic-specific breakpoints from CLSI or EUCAST reference tables, and
//! infers a suspected resistance mechanism from resistant patterns.
//!
//! The engine is pure and stateless: reference tables are loaded once and
//! immutable for the process lifetime, and every interpretation allocates a
//! fresh result, so calls are safe from any number of threads.

pub mod batch;
pub mod breakpoints;
pub mod interpreter;
pub mod mechanisms;
pub mod pipeline;
pub mod taxonomy;

pub use batch::{BatchDriver, BatchReport, BatchRow, BatchSummary, RowOutcome};
pub use interpreter::{Confidence, Interpretation, Interpreter};
pub use mechanisms::{MechanismConfidence, MechanismSignature};
