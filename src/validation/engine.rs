//! Validation Engine
//!
//! Batch rules, checked in a fixed precedence order:
//! batch size, problem shape, operators, then operands.
//!
//! Every violation is recorded, in that order, so the first diagnostic is
//! always the one a fail-fast caller reports.

use serde::Serialize;

use crate::error::ArrangeError;
use crate::parser::{self, ParsedProblem, RawProblem, Token, TokenKind};

/// Largest batch accepted in one call
pub const MAX_PROBLEMS: usize = 5;

/// Longest operand accepted, in digits
pub const MAX_OPERAND_DIGITS: usize = 4;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Zero-based index of the offending problem, `None` for batch-level rules
    pub problem: Option<usize>,
    pub error: ArrangeError,
    /// Offending token or problem text
    pub text: Option<String>,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        match (self.problem, &self.text) {
            (Some(index), Some(text)) => {
                format!("problem {}: {} ('{}')", index + 1, self.error, text)
            }
            (Some(index), None) => format!("problem {}: {}", index + 1, self.error),
            (None, _) => self.error.to_string(),
        }
    }
}

/// Result of validating a batch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
    problems: Vec<ParsedProblem>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, problem: Option<usize>, error: ArrangeError, text: Option<&str>) {
        self.diagnostics.push(Diagnostic {
            problem,
            error,
            text: text.map(str::to_string),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The error a fail-fast check reports
    pub fn first_error(&self) -> Option<ArrangeError> {
        self.diagnostics.first().map(|d| d.error)
    }

    /// Validated problems, or the highest-precedence error
    pub fn into_problems(self) -> Result<Vec<ParsedProblem>, ArrangeError> {
        match self.first_error() {
            Some(error) => Err(error),
            None => Ok(self.problems),
        }
    }
}

/// Validate a batch of problems
pub fn validate_batch<S: AsRef<str>>(problems: &[S]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if problems.len() > MAX_PROBLEMS {
        result.add(None, ArrangeError::TooManyProblems, None);
    }

    let mut raws: Vec<(usize, RawProblem)> = Vec::with_capacity(problems.len());
    for (index, problem) in problems.iter().enumerate() {
        let problem = problem.as_ref();
        match parser::parse_problem(problem) {
            Some(raw) => raws.push((index, raw)),
            None => result.add(
                Some(index),
                ArrangeError::MalformedProblem,
                Some(problem.trim()),
            ),
        }
    }

    for (index, raw) in &raws {
        if raw.operator.kind != TokenKind::Operator {
            result.add(
                Some(*index),
                ArrangeError::InvalidOperator,
                Some(raw.operator.text),
            );
        }
    }

    for (index, raw) in &raws {
        for token in raw.operands() {
            if let Some(error) = check_operand(&token) {
                result.add(Some(*index), error, Some(token.text));
            }
        }
    }

    if result.is_valid() {
        result.problems = raws
            .iter()
            .filter_map(|(_, raw)| ParsedProblem::from_raw(raw))
            .collect();
    } else {
        log::debug!(
            "Rejected batch of {} problems with {} diagnostics",
            problems.len(),
            result.diagnostics.len()
        );
    }

    result
}

/// Check a single operand token; digits are checked before length
fn check_operand(token: &Token) -> Option<ArrangeError> {
    if token.kind != TokenKind::Number {
        Some(ArrangeError::NonDigitNumber)
    } else if token.len() > MAX_OPERAND_DIGITS {
        Some(ArrangeError::NumberTooLong)
    } else {
        None
    }
}
