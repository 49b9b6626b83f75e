//! Validation Engine
//!
//! Batch rule checking, separated from parsing and layout.

pub mod engine;

pub use engine::{
    validate_batch, Diagnostic, ValidationResult, MAX_OPERAND_DIGITS, MAX_PROBLEMS,
};
