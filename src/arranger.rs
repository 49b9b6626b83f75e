//! Arranger entry points
//!
//! Validate, compute and lay out a batch in one call. Pure functions:
//! no I/O, no shared state.

use crate::error::ArrangeError;
use crate::layout;
use crate::validation::validate_batch;

/// Arrange a batch of problems vertically
///
/// Returns the formatted text, or the highest-precedence rule violation.
/// With `show_answers` a fourth line holds the computed results.
///
/// ```
/// let text = arithmetic_arranger::arrange(&["32 + 698", "3801 - 2"], true).unwrap();
/// assert_eq!(
///     text,
///     "   32      3801\n+ 698    -    2\n-----    ------\n  730      3799"
/// );
/// ```
pub fn arrange<S: AsRef<str>>(problems: &[S], show_answers: bool) -> Result<String, ArrangeError> {
    let parsed = validate_batch(problems).into_problems()?;
    log::trace!(
        "Arranging {} problems (answers: {})",
        parsed.len(),
        show_answers
    );
    Ok(layout::render(&parsed, show_answers))
}

/// Like [`arrange`], but failures become their user-visible message
pub fn arrange_message<S: AsRef<str>>(problems: &[S], show_answers: bool) -> String {
    arrange(problems, show_answers).unwrap_or_else(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrange_without_answers() {
        let text = arrange(&["3 + 855", "988 + 40"], false).unwrap();
        assert_eq!(text, "    3      988\n+ 855    +  40\n-----    -----");
    }

    #[test]
    fn test_arrange_accepts_owned_strings() {
        let problems = vec![String::from("1 + 1")];
        assert_eq!(arrange(&problems, true).unwrap(), "  1\n+ 1\n---\n  2");
    }

    #[test]
    fn test_arrange_message_on_error() {
        assert_eq!(
            arrange_message(&["3 / 855"], false),
            "Error: Operator must be '+' or '-'."
        );
    }

    #[test]
    fn test_arrange_message_on_success() {
        assert_eq!(arrange_message(&["11 - 1"], true), "  11\n-  1\n----\n  10");
    }
}
