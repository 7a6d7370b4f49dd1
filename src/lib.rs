//! # threshold-expr
//!
//! Parser for metric threshold expressions such as `count>20` or
//! `p(99.9)<500`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, scanner, method validator, builder, errors
//!   ↓
//! syntax    → ThresholdExpression, AggregationMethod, Operator
//!   ↓
//! base      → Primitives (TextRange, trimming)
//! ```
//!
//! ```
//! use threshold::{Operator, parse_expression};
//!
//! let expr = parse_expression("p(95) < 200").unwrap();
//! assert_eq!(expr.aggregation_method().as_str(), "p(95)");
//! assert_eq!(expr.operator(), Operator::Less);
//! assert_eq!(expr.value(), 200.0);
//!
//! let err = parse_expression("avg ! 200").unwrap_err();
//! assert_eq!(err.code().as_str(), "E0101");
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser)
// ============================================================================

/// Foundation types: TextRange, trimming helpers
pub mod base;

/// Syntax: typed threshold expressions
pub mod syntax;

/// Parser: lexer, scanner, method validation, errors
pub mod parser;

pub use parser::{
    ErrorCode, ErrorKind, ParseError, ScanError, UnknownMethodError, ValueParseError,
    parse_expression, parse_expressions, scan, validate_method,
};
pub use syntax::{AggregationMethod, Operator, Percentile, ThresholdExpression};

// Re-export foundation types
pub use base::{TextRange, TextSize};
