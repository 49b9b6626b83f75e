//! Arithmetic Arranger
//!
//! Validates small batches of addition and subtraction problems and lays
//! them out in vertically aligned columns.
//!
//! This library provides:
//! - Problem tokenization and parsing
//! - Ordered batch validation with full diagnostics
//! - Column layout with optional answers
//! - Configuration and the command-line front end

pub mod arranger;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use arranger::{arrange, arrange_message};
pub use config::Config;
pub use error::ArrangeError;
pub use parser::{parse_problem, ParsedProblem};
pub use report::Report;
pub use validation::{validate_batch, Diagnostic, ValidationResult};
