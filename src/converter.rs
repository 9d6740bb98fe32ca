//! Arabic/Roman numeral converter
//!
//! The input is classified once, at construction. A decimal literal
//! (`-?[0-9]+`) is taken as Arabic and accepted whatever its sign or size;
//! anything else must be a Roman numeral. Only the integer is kept, and the
//! Roman form is derived from it on every request.

use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::{MalformedNumber, ValueOutOfBounds};
use crate::roman;

/// Notation an input was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralKind {
    /// Decimal digits, optionally negative
    Arabic,
    /// Roman numeral symbols
    Roman,
}

impl std::fmt::Display for NumeralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "arabic"),
            Self::Roman => write!(f, "roman"),
        }
    }
}

impl FromStr for NumeralKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arabic" => Ok(Self::Arabic),
            "roman" => Ok(Self::Roman),
            _ => Err(format!("Invalid numeral kind: {s}. Use: arabic, roman")),
        }
    }
}

/// An integer value read from Arabic or Roman notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumeralConverter {
    value: i64,
    kind: NumeralKind,
}

impl NumeralConverter {
    /// Read a number from `input`
    ///
    /// Leading and trailing whitespace is ignored. Arabic values are not
    /// range checked here; see [`Self::to_roman`].
    pub fn new(input: &str) -> Result<Self, MalformedNumber> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MalformedNumber::Empty);
        }

        if is_arabic_literal(trimmed) {
            let value = trimmed.parse::<i64>().map_err(|_| MalformedNumber::ArabicOverflow {
                literal: trimmed.to_string(),
            })?;
            debug!("read {trimmed:?} as arabic {value}");
            return Ok(Self {
                value,
                kind: NumeralKind::Arabic,
            });
        }

        let value = roman::parse(trimmed)?;
        debug!("read {trimmed:?} as roman {value}");
        Ok(Self {
            value,
            kind: NumeralKind::Roman,
        })
    }

    /// The integer value
    #[must_use]
    pub const fn to_arabic(&self) -> i64 {
        self.value
    }

    /// The canonical Roman numeral for the value
    ///
    /// Fails for values outside `1..=3999`.
    pub fn to_roman(&self) -> Result<String, ValueOutOfBounds> {
        roman::format(self.value)
    }

    /// Notation the input was written in
    #[must_use]
    pub const fn source(&self) -> NumeralKind {
        self.kind
    }
}

impl FromStr for NumeralConverter {
    type Err = MalformedNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<i64> for NumeralConverter {
    fn from(value: i64) -> Self {
        Self {
            value,
            kind: NumeralKind::Arabic,
        }
    }
}

/// Optional `-` followed by at least one ASCII digit
fn is_arabic_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
