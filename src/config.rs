//! Configuration management for the arranger binary.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (explicit path or user config directory)
//! - Problem files

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments for the arranger
#[derive(Debug, Default, Parser)]
#[command(name = "arranger")]
#[command(about = "Arrange addition and subtraction problems in vertical columns")]
#[command(version)]
pub struct Args {
    /// Problems to arrange, one per argument (e.g. "32 + 698")
    pub problems: Vec<String>,

    /// File with one problem per line, appended after the positional problems
    #[arg(long, help = "Read problems from a file (blank and '#' lines skipped)")]
    pub input: Option<PathBuf>,

    /// Include the answer line
    #[arg(short = 'a', long, conflicts_with = "hide_answers")]
    pub show_answers: bool,

    /// Omit the answer line even if the config file enables it
    #[arg(long)]
    pub hide_answers: bool,

    /// Report every rule violation instead of arranging
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Explicit config file
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for the arranger
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the TOML config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub show_answers: Option<bool>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub problems: Vec<String>,
    pub show_answers: bool,
    pub check: bool,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that was actually loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, looking for a config
    /// file in the user config directory
    pub fn from_args(args: Args) -> Result<Self> {
        Self::resolve(args, default_config_path().as_deref())
    }

    /// Create configuration with an explicit fallback config location
    ///
    /// `--config` must exist; the fallback is skipped when missing.
    pub fn resolve(args: Args, fallback: Option<&Path>) -> Result<Self> {
        let config_file = match (&args.config, fallback) {
            (Some(explicit), _) => Some(explicit.clone()),
            (None, Some(path)) if path.is_file() => Some(path.to_path_buf()),
            _ => None,
        };

        let file = match &config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let mut problems = args.problems;
        if let Some(input) = &args.input {
            problems.extend(read_problem_file(input)?);
        }

        let show_answers = if args.show_answers {
            true
        } else if args.hide_answers {
            false
        } else {
            file.show_answers.unwrap_or(false)
        };

        Ok(Config {
            problems,
            show_answers,
            check: args.check,
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_file,
        })
    }
}

/// Default config file location: `<config dir>/arithmetic-arranger/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arithmetic-arranger").join("config.toml"))
}

/// Read problems from a file, one per line
pub fn read_problem_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read problem file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let args = Args {
            problems: vec!["1 + 2".to_string()],
            ..Default::default()
        };
        let config = Config::resolve(args, None).unwrap();

        assert_eq!(config.problems, vec!["1 + 2"]);
        assert!(!config.show_answers);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_missing_fallback_is_skipped() {
        let config =
            Config::resolve(Args::default(), Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/config.toml")),
            ..Default::default()
        };
        assert!(Config::resolve(args, None).is_err());
    }

    #[test]
    fn test_parse_cli_flags() {
        let args = Args::try_parse_from([
            "arranger",
            "-a",
            "--format",
            "json",
            "32 + 698",
            "3801 - 2",
        ])
        .unwrap();

        assert!(args.show_answers);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.problems, vec!["32 + 698", "3801 - 2"]);
    }

    #[test]
    fn test_show_and_hide_conflict() {
        assert!(Args::try_parse_from(["arranger", "-a", "--hide-answers"]).is_err());
    }
}
