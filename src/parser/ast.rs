//! Problem Syntax Tree
//!
//! Minimal types for a problem before and after validation.
//! No validation logic lives here - pure data representation.

use std::fmt;

use crate::parser::lexer::{Token, TokenKind};

/// Number of tokens in a well-formed problem: left, operator, right
pub const TOKENS_PER_PROBLEM: usize = 3;

/// Arithmetic operator of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Map a token text to an operator, `None` for anything but "+" and "-"
    pub fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Apply the operator; subtraction may go negative
    pub fn apply(&self, left: u32, right: u32) -> i64 {
        let (left, right) = (i64::from(left), i64::from(right));
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The three tokens of a problem, not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawProblem<'a> {
    pub left: Token<'a>,
    pub operator: Token<'a>,
    pub right: Token<'a>,
}

impl<'a> RawProblem<'a> {
    /// Build a raw problem from exactly three tokens
    pub fn from_tokens(tokens: &[Token<'a>]) -> Option<Self> {
        match *tokens {
            [left, operator, right] => Some(Self {
                left,
                operator,
                right,
            }),
            _ => None,
        }
    }

    /// Both operand tokens, left first
    pub fn operands(&self) -> [Token<'a>; 2] {
        [self.left, self.right]
    }
}

/// A validated operand, keeping the text as written for layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub text: String,
    pub value: u32,
}

impl Operand {
    /// Convert a number token; `None` if the token is not a number
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Number {
            return None;
        }
        let value = token.text.parse::<u32>().ok()?;
        Some(Self {
            text: token.text.to_string(),
            value,
        })
    }

    /// Width of the operand as written
    pub fn width(&self) -> usize {
        self.text.len()
    }
}

/// A problem that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProblem {
    pub left: Operand,
    pub operator: Operator,
    pub right: Operand,
}

impl ParsedProblem {
    /// Convert a raw problem whose tokens are all well-typed
    pub fn from_raw(raw: &RawProblem) -> Option<Self> {
        Some(Self {
            left: Operand::from_token(&raw.left)?,
            operator: Operator::from_symbol(raw.operator.text)?,
            right: Operand::from_token(&raw.right)?,
        })
    }

    pub fn answer(&self) -> i64 {
        self.operator.apply(self.left.value, self.right.value)
    }
}
