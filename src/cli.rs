//! Command-line front end
//!
//! Thin wrapper around the library: config, logging, arrange, print.

use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::{Config, OutputFormat};
use crate::report::Report;
use crate::{arrange, validate_batch};

/// Run the arranger binary
pub fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    if let Some(path) = &config.config_file {
        log::info!("Loaded config from {}", path.display());
    }
    log::debug!("Arranging {} problems", config.problems.len());

    let success = execute(&config, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Execute one invocation; returns whether the batch was accepted
pub fn execute(config: &Config, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    if config.format == OutputFormat::Json {
        let report = Report::from_batch(&config.problems, config.show_answers);
        writeln!(out, "{}", report.to_json()?)?;
        return Ok(report.ok);
    }

    if config.check {
        let result = validate_batch(&config.problems);
        for diagnostic in &result.diagnostics {
            writeln!(out, "{}", diagnostic.message())?;
        }
        if result.is_valid() {
            writeln!(out, "OK: {} problems", config.problems.len())?;
        }
        return Ok(result.is_valid());
    }

    match arrange(&config.problems, config.show_answers) {
        Ok(text) => {
            writeln!(out, "{}", text)?;
            Ok(true)
        }
        Err(e) => {
            log::debug!("Batch rejected: {}", e.kind());
            writeln!(err, "{}", e)?;
            Ok(false)
        }
    }
}

/// Initialize env_logger with the configured level; `RUST_LOG` takes precedence
fn init_logging(level: &str) {
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .parse_default_env()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(problems: &[&str]) -> Config {
        Config {
            problems: problems.iter().map(|p| p.to_string()).collect(),
            show_answers: false,
            check: false,
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
            config_file: None,
        }
    }

    fn run_execute(config: &Config) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = execute(config, &mut out, &mut err).expect("execute");
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_text_output() {
        let (ok, out, err) = run_execute(&config(&["1 + 2"]));
        assert!(ok);
        assert_eq!(out, "  1\n+ 2\n---\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_error_goes_to_stderr() {
        let (ok, out, err) = run_execute(&config(&["1 x 2"]));
        assert!(!ok);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Operator must be '+' or '-'.\n");
    }

    #[test]
    fn test_check_lists_all_diagnostics() {
        let mut cfg = config(&["3a + 5", "1 + 12345"]);
        cfg.check = true;
        let (ok, out, _) = run_execute(&cfg);

        assert!(!ok);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("problem 2: Error: Numbers cannot be more than four digits."));
    }

    #[test]
    fn test_check_valid_batch() {
        let mut cfg = config(&["1 + 2", "3 - 4"]);
        cfg.check = true;
        let (ok, out, _) = run_execute(&cfg);

        assert!(ok);
        assert_eq!(out, "OK: 2 problems\n");
    }

    #[test]
    fn test_json_output() {
        let mut cfg = config(&["1 + 2"]);
        cfg.format = OutputFormat::Json;
        cfg.show_answers = true;
        let (ok, out, _) = run_execute(&cfg);

        assert!(ok);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["output"], "  1\n+ 2\n---\n  3");
    }
}
