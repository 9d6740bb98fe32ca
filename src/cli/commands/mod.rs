//! Command implementations

mod convert;

pub use convert::convert;
