//! Aggregation method validation
//!
//! Accepts the named methods and `p(N)` with a non-negative integer or
//! decimal `N`. Percentile tokens are captured verbatim, never reformatted.

use super::errors::UnknownMethodError;
use crate::syntax::{AggregationMethod, Percentile};

/// Validate an aggregation method token.
///
/// Checked in order: exact method name, then `p(` + number + `)`. The first
/// rule that rejects the token ends validation.
pub fn validate_method(token: &str) -> Result<AggregationMethod, UnknownMethodError> {
    if token.is_empty() {
        return Err(UnknownMethodError::Empty);
    }

    if let Some(method) = AggregationMethod::from_name(token) {
        return Ok(method);
    }

    let Some(rest) = token.strip_prefix("p(") else {
        return Err(UnknownMethodError::UnknownName {
            token: token.to_string(),
        });
    };

    let Some(argument) = rest.strip_suffix(')') else {
        return Err(UnknownMethodError::UnclosedPercentile {
            token: token.to_string(),
        });
    };

    match percentile_rank(argument) {
        Some(rank) => Ok(AggregationMethod::Percentile(Percentile::new(token, rank))),
        None => Err(UnknownMethodError::InvalidPercentile {
            token: token.to_string(),
            argument: argument.to_string(),
        }),
    }
}

/// Parse `digits` or `digits.digits`, nothing else.
fn percentile_rank(argument: &str) -> Option<f64> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let well_formed = match argument.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(argument),
    };

    if !well_formed {
        return None;
    }
    argument.parse().ok()
}
