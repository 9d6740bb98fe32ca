//! Output formatting for human and JSON modes
//!
//! Each input produces one [`ConversionResult`], rendered either as plain
//! text or as one JSON object per line.

use colored::Colorize;
use serde::Serialize;

use crate::converter::{NumeralConverter, NumeralKind};
use crate::error::{Error, ErrorCode};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Which representation to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Integer value only
    Arabic,
    /// Roman numeral only
    Roman,
    /// Both, integer first
    #[default]
    Both,
}

impl Target {
    const fn wants_arabic(self) -> bool {
        matches!(self, Self::Arabic | Self::Both)
    }

    const fn wants_roman(self) -> bool {
        matches!(self, Self::Roman | Self::Both)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "arabic"),
            Self::Roman => write!(f, "roman"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arabic" => Ok(Self::Arabic),
            "roman" => Ok(Self::Roman),
            "both" => Ok(Self::Both),
            _ => Err(format!("Invalid target: {s}. Use: arabic, roman, both")),
        }
    }
}

/// Serializable error data for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorData {
    /// Error code string
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl From<&Error> for ErrorData {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code().as_str().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome of converting one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// The input as given (untrimmed)
    pub input: String,
    /// Notation the input was read as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<NumeralKind>,
    /// Integer value, when requested and available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic: Option<i64>,
    /// Roman numeral, when requested and available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roman: Option<String>,
    /// Failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorData>,
    #[serde(skip)]
    code: Option<ErrorCode>,
}

impl ConversionResult {
    /// Convert `input`, filling in the representations `target` asks for
    #[must_use]
    pub fn convert(input: &str, target: Target) -> Self {
        let mut result = Self {
            input: input.to_string(),
            source: None,
            arabic: None,
            roman: None,
            error: None,
            code: None,
        };

        let converter = match NumeralConverter::new(input) {
            Ok(converter) => converter,
            Err(err) => {
                result.fail(&err.into());
                return result;
            },
        };

        result.source = Some(converter.source());
        if target.wants_arabic() {
            result.arabic = Some(converter.to_arabic());
        }
        if target.wants_roman() {
            match converter.to_roman() {
                Ok(roman) => result.roman = Some(roman),
                Err(err) => result.fail(&err.into()),
            }
        }
        result
    }

    fn fail(&mut self, err: &Error) {
        self.code = Some(err.code());
        self.error = Some(ErrorData::from(err));
    }

    /// Kind of failure, or `None` if the conversion succeeded
    #[must_use]
    pub const fn error_code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Whether the conversion succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code.is_none()
    }

    /// Values printed on stdout in human mode
    #[must_use]
    pub fn human_line(&self) -> String {
        match (self.arabic, &self.roman) {
            (Some(arabic), Some(roman)) => format!("{arabic}\t{roman}"),
            (Some(arabic), None) => arabic.to_string(),
            (None, Some(roman)) => roman.clone(),
            (None, None) => String::new(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.error {
            Some(error) => {
                if self.arabic.is_some() {
                    println!("{}", self.human_line());
                }
                eprintln!("{} {:?}: {}", "error:".red().bold(), self.input.trim(), error.message);
            },
            None => println!("{}", self.human_line()),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string(self).unwrap_or_default());
    }
}
