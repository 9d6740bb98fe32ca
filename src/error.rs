//! Conversion errors
//!
//! Construction and rendering fail independently. Building a converter can
//! only produce [`MalformedNumber`]; asking for the Roman form can only
//! produce [`ValueOutOfBounds`]. [`Error`] unifies both for callers that
//! handle them in one place.

use thiserror::Error;

/// Reasons an input is neither a decimal integer nor a Roman numeral
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedNumber {
    /// Input was empty after trimming
    #[error("value must not be empty")]
    Empty,

    /// Decimal literal too large for the integer width
    #[error("integer literal does not fit in 64 bits: {literal}")]
    ArabicOverflow {
        /// The literal as given
        literal: String,
    },

    /// Character that is neither a digit literal nor a Roman symbol
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter {
        /// Offending character
        character: char,
        /// Zero-based character offset
        position: usize,
    },

    /// Fourth consecutive unit symbol within one place (`IIII`)
    #[error("too many '{symbol}'s in a row at position {position}")]
    TooManyRepeats {
        /// Repeated symbol
        symbol: char,
        /// Zero-based character offset of the fourth repeat
        position: usize,
    },

    /// Symbol that cannot follow what its place has read so far (`IIV`, `VX`)
    #[error("'{symbol}' cannot follow \"{after}\" at position {position}")]
    IllegalSequence {
        /// Offending symbol
        symbol: char,
        /// Symbols of the same place read before it
        after: String,
        /// Zero-based character offset
        position: usize,
    },

    /// Roman symbol that appears after its place has already ended (`IM`)
    #[error("'{symbol}' at position {position} is out of place order")]
    OutOfOrder {
        /// Offending symbol
        symbol: char,
        /// Zero-based character offset
        position: usize,
    },
}

impl MalformedNumber {
    /// Character offset the error points at, if it concerns one character
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Empty | Self::ArabicOverflow { .. } => None,
            Self::UnexpectedCharacter { position, .. }
            | Self::TooManyRepeats { position, .. }
            | Self::IllegalSequence { position, .. }
            | Self::OutOfOrder { position, .. } => Some(*position),
        }
    }
}

/// Value that has no Roman representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Roman numerals must be between 1 and 3999, inclusive (got {value})")]
pub struct ValueOutOfBounds {
    /// The value that was asked for
    pub value: i64,
}

/// Any conversion failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input could not be parsed
    #[error(transparent)]
    Malformed(#[from] MalformedNumber),

    /// Value could not be rendered as a Roman numeral
    #[error(transparent)]
    OutOfBounds(#[from] ValueOutOfBounds),
}

impl Error {
    /// Stable code identifying the failure kind
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Malformed(_) => ErrorCode::MalformedNumber,
            Self::OutOfBounds(_) => ErrorCode::ValueOutOfBounds,
        }
    }
}

/// Failure kinds, with their machine-readable names and process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input is not a valid number (exit 2)
    MalformedNumber,
    /// Value outside the Roman range (exit 3)
    ValueOutOfBounds,
}

impl ErrorCode {
    /// Process exit code for this failure kind
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::MalformedNumber => 2,
            Self::ValueOutOfBounds => 3,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedNumber => "MALFORMED_NUMBER",
            Self::ValueOutOfBounds => "VALUE_OUT_OF_BOUNDS",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
