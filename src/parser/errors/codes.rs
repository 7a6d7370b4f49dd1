//! Error code definitions for threshold diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Operator errors
//! - E02xx: Aggregation method errors
//! - E03xx: Threshold value errors

use std::fmt;

/// Error codes for threshold diagnostics
///
/// Each error code represents a specific failure mode, so configuration
/// tooling can filter and document them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Operator errors
    // =========================================================================
    /// No comparison operator in the expression
    E0101,

    // =========================================================================
    // E02xx: Aggregation method errors
    // =========================================================================
    /// Nothing before the operator
    E0201,
    /// Name is not a known method
    E0202,
    /// `p(` without its closing `)`
    E0203,
    /// Percentile argument is not a non-negative number
    E0204,

    // =========================================================================
    // E03xx: Threshold value errors
    // =========================================================================
    /// Nothing after the operator
    E0301,
    /// Value is not a numeric literal
    E0302,
    /// Value is infinite or NaN
    E0303,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E0101,
        ErrorCode::E0201,
        ErrorCode::E0202,
        ErrorCode::E0203,
        ErrorCode::E0204,
        ErrorCode::E0301,
        ErrorCode::E0302,
        ErrorCode::E0303,
    ];

    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "operator error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "method error",
            Self::E0301 | Self::E0302 | Self::E0303 => "value error",
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unrecognized operator",
            Self::E0201 => "missing aggregation method",
            Self::E0202 => "unknown aggregation method",
            Self::E0203 => "unclosed percentile expression",
            Self::E0204 => "invalid percentile argument",
            Self::E0301 => "missing threshold value",
            Self::E0302 => "invalid numeric literal",
            Self::E0303 => "non-finite threshold value",
        }
    }

    /// Check if this code belongs to the aggregation method category
    pub fn is_method_error(&self) -> bool {
        matches!(self, Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0101.as_str(), "E0101");
        assert_eq!(ErrorCode::E0203.as_str(), "E0203");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0302), "E0302");
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(ErrorCode::E0101.default_message(), "unrecognized operator");
        assert_eq!(ErrorCode::E0203.default_message(), "unclosed percentile expression");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::E0101.category_description(), "operator error");
        assert_eq!(ErrorCode::E0204.category_description(), "method error");
        assert_eq!(ErrorCode::E0303.category_description(), "value error");
    }

    #[test]
    fn test_is_method_error() {
        assert!(ErrorCode::E0202.is_method_error());
        assert!(!ErrorCode::E0101.is_method_error());
        assert!(!ErrorCode::E0301.is_method_error());
    }
}
