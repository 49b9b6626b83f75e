//! Column Layout
//!
//! Each problem becomes a column of right-justified lines; columns are
//! joined line by line with a fixed gap.

use crate::parser::ParsedProblem;

/// Gap between neighbouring columns
pub const COLUMN_GAP: &str = "    ";

/// Extra width around the widest operand: operator plus one space
const OPERATOR_PADDING: usize = 2;

/// One problem laid out as fixed-width lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub width: usize,
    pub top: String,
    pub bottom: String,
    pub separator: String,
    pub answer: String,
}

impl Column {
    pub fn new(problem: &ParsedProblem) -> Self {
        let width = problem.left.width().max(problem.right.width()) + OPERATOR_PADDING;

        Self {
            width,
            top: format!("{:>width$}", problem.left.text),
            bottom: format!(
                "{}{:>rest$}",
                problem.operator.symbol(),
                problem.right.text,
                rest = width - 1
            ),
            separator: "-".repeat(width),
            answer: format!("{:>width$}", problem.answer()),
        }
    }
}

/// Render validated problems into the final text
///
/// No trailing newline. An empty batch still yields one (empty) line per row.
pub fn render(problems: &[ParsedProblem], show_answers: bool) -> String {
    let columns: Vec<Column> = problems.iter().map(Column::new).collect();

    let mut rows = vec![
        join_row(&columns, |c| &c.top),
        join_row(&columns, |c| &c.bottom),
        join_row(&columns, |c| &c.separator),
    ];
    if show_answers {
        rows.push(join_row(&columns, |c| &c.answer));
    }

    rows.join("\n")
}

fn join_row<'a>(columns: &'a [Column], line: impl Fn(&'a Column) -> &'a String) -> String {
    columns
        .iter()
        .map(|c| line(c).as_str())
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}
