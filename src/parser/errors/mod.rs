//! Threshold parse error handling
//!
//! This module provides the error types for threshold parsing:
//! - One error type per failing stage (scan, method, value)
//! - Categorized error codes for filtering and documentation
//! - Source ranges and hints for fixing the expression

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{
    ErrorKind, ParseError, ScanError, StraySymbol, UnknownMethodError, ValueParseError,
};
