use anyhow::Result;
use arithmetic_arranger::cli::run;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    run()
}
