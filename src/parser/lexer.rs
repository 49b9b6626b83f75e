//! Problem Lexer
//!
//! Splits a problem like "32 + 698" into whitespace-separated tokens and
//! classifies each one. Classification never fails: anything that is not a
//! number or a known operator is a `Word`, and deciding whether a word is an
//! error is left to validation.

/// Token types in a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Non-empty run of ASCII digits like "698"
    Number,
    /// "+" or "-"
    Operator,
    /// Anything else ("3a", "*", "-5")
    Word,
}

/// A token borrowing its text from the problem string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            kind: classify(text),
            text,
        }
    }

    /// Number of characters in the token as written
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Tokenize a single problem
///
/// Any Unicode whitespace separates tokens, and runs of whitespace count
/// as one separator.
pub fn tokenize_problem(problem: &str) -> Vec<Token<'_>> {
    problem.split_whitespace().map(Token::new).collect()
}

fn classify(text: &str) -> TokenKind {
    match text {
        "+" | "-" => TokenKind::Operator,
        t if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) => TokenKind::Number,
        _ => TokenKind::Word,
    }
}
