//! Problem Parser
//!
//! Tokenization and structural parsing of single problems.
//! Rule checking (operators, digits, lengths) happens in validation.

pub mod ast;
pub mod lexer;

pub use ast::{Operand, Operator, ParsedProblem, RawProblem, TOKENS_PER_PROBLEM};
pub use lexer::{tokenize_problem, Token, TokenKind};

/// Parse a single problem into its three tokens
///
/// Returns `None` when the problem does not split into exactly
/// left, operator and right.
pub fn parse_problem(problem: &str) -> Option<RawProblem<'_>> {
    let tokens = lexer::tokenize_problem(problem);
    RawProblem::from_tokens(&tokens)
}
