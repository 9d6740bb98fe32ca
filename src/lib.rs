//! numeral - Conversion between Arabic integers and Roman numerals
//!
//! A [`NumeralConverter`] is built from a string holding either a decimal
//! integer or a Roman numeral. It keeps the integer value and renders the
//! canonical Roman form on demand.
//!
//! ```
//! use numeral::NumeralConverter;
//!
//! let n = NumeralConverter::new(" CCXLIX ").unwrap();
//! assert_eq!(n.to_arabic(), 249);
//!
//! let n = NumeralConverter::new("454").unwrap();
//! assert_eq!(n.to_roman().unwrap(), "CDLIV");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod converter;
pub mod error;
pub mod output;
pub mod roman;

pub use converter::{NumeralConverter, NumeralKind};
pub use error::{Error, ErrorCode, MalformedNumber, ValueOutOfBounds};
