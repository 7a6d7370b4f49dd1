//! Threshold parse error types
//!
//! Each layer reports its own error kind:
//! - [`ScanError`] from the scanner
//! - [`UnknownMethodError`] from the method validator
//! - [`ValueParseError`] from value parsing
//!
//! The expression builder wraps whichever one occurred in a [`ParseError`]
//! carrying the full expression, the offending range and a hint.

use std::num::ParseFloatError;

use text_size::TextRange;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::syntax::{METHOD_NAMES, Operator};

/// No comparison operator was found in the expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized operator")]
pub struct ScanError {
    /// First lone `!` or `=`, which usually means a mistyped operator
    pub stray: Option<StraySymbol>,
}

/// A lone `!` or `=` found while scanning for an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraySymbol {
    pub symbol: char,
    pub range: TextRange,
}

impl StraySymbol {
    /// The operator the author most likely meant
    pub fn suggestion(&self) -> Option<Operator> {
        match self.symbol {
            '!' => Some(Operator::NotEq),
            '=' => Some(Operator::LooseEq),
            _ => None,
        }
    }
}

/// The aggregation method token is not a known method
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownMethodError {
    #[error("missing aggregation method")]
    Empty,

    #[error("unknown aggregation method `{token}`")]
    UnknownName { token: String },

    #[error("unknown aggregation method `{token}`: percentile expression is missing `)`")]
    UnclosedPercentile { token: String },

    #[error(
        "unknown aggregation method `{token}`: percentile argument `{argument}` is not a non-negative number"
    )]
    InvalidPercentile { token: String, argument: String },
}

impl UnknownMethodError {
    /// The offending token (empty for [`UnknownMethodError::Empty`])
    pub fn token(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::UnknownName { token }
            | Self::UnclosedPercentile { token }
            | Self::InvalidPercentile { token, .. } => token,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Empty => ErrorCode::E0201,
            Self::UnknownName { .. } => ErrorCode::E0202,
            Self::UnclosedPercentile { .. } => ErrorCode::E0203,
            Self::InvalidPercentile { .. } => ErrorCode::E0204,
        }
    }
}

/// The value token is not a finite numeric literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueParseError {
    #[error("missing threshold value")]
    Empty,

    #[error("threshold value `{token}` is not a numeric literal")]
    NotNumeric {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("threshold value `{token}` is not a finite number")]
    NotFinite { token: String },
}

impl ValueParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Empty => ErrorCode::E0301,
            Self::NotNumeric { .. } => ErrorCode::E0302,
            Self::NotFinite { .. } => ErrorCode::E0303,
        }
    }
}

/// Which stage of parsing failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethodError),

    #[error(transparent)]
    ValueParse(#[from] ValueParseError),
}

impl ErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Scan(_) => ErrorCode::E0101,
            Self::UnknownMethod(err) => err.code(),
            Self::ValueParse(err) => err.code(),
        }
    }

    /// Suggested fix for this failure
    pub fn hint(&self) -> String {
        match self {
            Self::Scan(ScanError { stray: Some(stray) }) => match stray.suggestion() {
                Some(op) => format!("`{}` is not an operator; did you mean `{}`?", stray.symbol, op),
                None => expected_operators(),
            },
            Self::Scan(ScanError { stray: None }) => expected_operators(),
            Self::UnknownMethod(UnknownMethodError::Empty) => {
                "start the expression with an aggregation method such as `count` or `p(95)`".to_string()
            }
            Self::UnknownMethod(UnknownMethodError::UnknownName { .. }) => format!(
                "expected one of {} or a percentile such as `p(95)`",
                quoted_list(METHOD_NAMES.iter().copied())
            ),
            Self::UnknownMethod(UnknownMethodError::UnclosedPercentile { .. }) => {
                "add `)` to close the percentile expression".to_string()
            }
            Self::UnknownMethod(UnknownMethodError::InvalidPercentile { .. }) => {
                "percentile argument must be a non-negative number such as `95` or `99.9`".to_string()
            }
            Self::ValueParse(ValueParseError::Empty) => {
                "add a numeric threshold after the operator".to_string()
            }
            Self::ValueParse(_) => {
                "threshold value must be a finite number such as `500` or `0.05`".to_string()
            }
        }
    }
}

fn expected_operators() -> String {
    format!(
        "expected one of {} between the method and the value",
        quoted_list(Operator::ALL.iter().map(Operator::as_str))
    )
}

fn quoted_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("`{item}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A failed parse of one threshold expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid threshold expression `{expression}`: {kind}")]
pub struct ParseError {
    /// The full expression as given
    pub expression: String,
    /// What went wrong
    pub kind: ErrorKind,
    /// Offending part of the expression
    pub range: TextRange,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl ParseError {
    /// Create an error with the default hint for its kind
    pub fn new(expression: impl Into<String>, kind: impl Into<ErrorKind>, range: TextRange) -> Self {
        let kind = kind.into();
        Self {
            expression: expression.into(),
            hint: Some(kind.hint()),
            kind,
            range,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Replace the hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// The text covered by [`ParseError::range`]
    pub fn offending_text(&self) -> &str {
        self.expression
            .get(std::ops::Range::<usize>::from(self.range))
            .unwrap_or_default()
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code(), self);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}
