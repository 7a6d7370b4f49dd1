//! Threshold expression parser
//!
//! ## Architecture
//!
//! ```text
//! Expression text
//!     ↓
//! Lexer (logos) → operator tokens, stray symbols, text runs
//!     ↓
//! Scanner → method text, Operator, value text (+ ranges)
//!     ↓
//! Method validator → AggregationMethod
//!     ↓
//! Builder → ThresholdExpression (or ParseError)
//! ```

mod builder;
pub mod errors;
mod lexer;
mod method;
mod scanner;

pub use builder::{parse_expression, parse_expressions};
pub use errors::{
    ErrorCode, ErrorKind, ParseError, ScanError, StraySymbol, UnknownMethodError, ValueParseError,
};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use method::validate_method;
pub use scanner::{Scanned, scan};
