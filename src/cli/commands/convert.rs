//! Convert numbers given on the command line or standard input

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Context;
use log::debug;
use numeral::ErrorCode;
use numeral::output::{ConversionResult, OutputMode, Target};

/// Convert every input and report the outcome as an exit code
///
/// Reads one input per line from stdin when `inputs` is empty. A failing
/// input does not stop the others.
pub fn convert(inputs: &[String], target: Target, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let lines = if inputs.is_empty() {
        debug!("reading inputs from stdin");
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read standard input")?
    } else {
        inputs.to_vec()
    };

    let mut failures = Vec::new();
    for line in &lines {
        let result = ConversionResult::convert(line, target);
        result.render(mode);
        if let Some(code) = result.error_code() {
            failures.push(code);
        }
    }

    debug!("converted {} input(s), {} failed", lines.len(), failures.len());
    Ok(exit_code(&failures))
}

/// Malformed input outranks an out-of-range value
fn exit_code(failures: &[ErrorCode]) -> ExitCode {
    let worst = if failures.contains(&ErrorCode::MalformedNumber) {
        ErrorCode::MalformedNumber
    } else if let Some(&code) = failures.first() {
        code
    } else {
        return ExitCode::SUCCESS;
    };
    ExitCode::from(worst.exit_code())
}
