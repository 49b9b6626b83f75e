//! Machine-readable arrangement report

use serde::Serialize;

use crate::error::ArrangeError;
use crate::layout;
use crate::validation::{validate_batch, Diagnostic};

/// Outcome of arranging one batch, serialized for `--format json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The error a fail-fast arrange call would return
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportError {
    pub kind: ArrangeError,
    pub message: String,
}

impl From<ArrangeError> for ReportError {
    fn from(kind: ArrangeError) -> Self {
        Self {
            kind,
            message: kind.to_string(),
        }
    }
}

impl Report {
    /// Validate and arrange, keeping every diagnostic
    pub fn from_batch<S: AsRef<str>>(problems: &[S], show_answers: bool) -> Self {
        let result = validate_batch(problems);
        let diagnostics = result.diagnostics.clone();

        match result.into_problems() {
            Ok(parsed) => Self {
                ok: true,
                output: Some(layout::render(&parsed, show_answers)),
                error: None,
                diagnostics,
            },
            Err(kind) => Self {
                ok: false,
                output: None,
                error: Some(kind.into()),
                diagnostics,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
