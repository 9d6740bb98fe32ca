//! CLI definitions and entry point

use std::process::ExitCode;

use clap::Parser;

use super::commands;
use numeral::output::{OutputMode, Target};

/// numeral - Convert between Arabic and Roman numerals
#[derive(Parser, Debug)]
#[command(
    name = "numeral",
    version,
    about = "Convert between Arabic and Roman numerals",
    long_about = "Convert between Arabic and Roman numerals.\n\n\
                  Each input is either a decimal integer or a Roman numeral.\n\
                  Inputs are read from the arguments, or one per line from stdin.\n\
                  Exit status is 2 for malformed input and 3 for values outside 1..=3999."
)]
pub struct Cli {
    /// Numbers to convert (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub inputs: Vec<String>,

    /// Representation to print: arabic, roman, both
    #[arg(short, long, default_value = "both")]
    pub to: Target,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::convert(&cli.inputs, cli.to, output_mode)
}
