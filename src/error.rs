//! Arrangement errors
//!
//! The messages are user-visible and returned verbatim by
//! [`crate::arrange_message`].

use serde::Serialize;
use thiserror::Error;

/// Reasons a batch of problems is rejected.
///
/// Variants are declared in the order the rules are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangeError {
    #[error("Error: Too many problems.")]
    TooManyProblems,

    #[error("Error: Problems must be '<number> <operator> <number>'.")]
    MalformedProblem,

    #[error("Error: Operator must be '+' or '-'.")]
    InvalidOperator,

    #[error("Error: Numbers must only contain digits.")]
    NonDigitNumber,

    #[error("Error: Numbers cannot be more than four digits.")]
    NumberTooLong,
}

impl ArrangeError {
    /// Stable identifier used in reports and logs
    pub fn kind(&self) -> &'static str {
        match self {
            ArrangeError::TooManyProblems => "too_many_problems",
            ArrangeError::MalformedProblem => "malformed_problem",
            ArrangeError::InvalidOperator => "invalid_operator",
            ArrangeError::NonDigitNumber => "non_digit_number",
            ArrangeError::NumberTooLong => "number_too_long",
        }
    }
}
