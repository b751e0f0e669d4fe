//! # AMR Common Library
//!
//! Shared code for the AMR surveillance services including:
//! - Core vocabulary enums (Guideline, Method, Category)
//! - The AST row contract with the import/validation pipeline
//! - Common error types
//! - Configuration loading

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{AstRow, Category, Guideline, InterpretedRow, Method};
