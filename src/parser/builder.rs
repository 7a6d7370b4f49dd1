//! Expression builder: scanner + method validator + value parsing.

use text_size::TextSize;
use tracing::{debug, trace};

use super::errors::{ParseError, ValueParseError};
use super::method::validate_method;
use super::scanner::scan;
use crate::base::range_of;
use crate::syntax::ThresholdExpression;

/// Parse one threshold expression such as `p(99.9)<500`.
///
/// Errors keep the full expression, the offending range and a hint.
pub fn parse_expression(input: &str) -> Result<ThresholdExpression, ParseError> {
    trace!(expression = input, "parsing threshold expression");

    let result = build(input);
    if let Err(err) = &result {
        debug!(
            expression = input,
            code = %err.code(),
            "rejected threshold expression: {}",
            err.kind
        );
    }
    result
}

fn build(input: &str) -> Result<ThresholdExpression, ParseError> {
    let scanned = scan(input).map_err(|err| {
        let range = err
            .stray
            .map(|stray| stray.range)
            .unwrap_or_else(|| range_of(input, TextSize::new(0)));
        ParseError::new(input, err, range)
    })?;

    let method = validate_method(scanned.method)
        .map_err(|err| ParseError::new(input, err, scanned.method_range))?;

    let value = parse_value(scanned.value)
        .map_err(|err| ParseError::new(input, err, scanned.value_range))?;

    Ok(ThresholdExpression::new(method, scanned.operator, value))
}

/// Parse a base-10 float literal, rejecting infinities and NaN.
fn parse_value(token: &str) -> Result<f64, ValueParseError> {
    if token.is_empty() {
        return Err(ValueParseError::Empty);
    }

    let value: f64 = token.parse().map_err(|source| ValueParseError::NotNumeric {
        token: token.to_string(),
        source,
    })?;

    if !value.is_finite() {
        return Err(ValueParseError::NotFinite {
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// Parse every expression in `inputs`, the way a configuration loader does.
///
/// Returns all expressions in input order, or every error if any failed.
pub fn parse_expressions<'a, I>(inputs: I) -> Result<Vec<ThresholdExpression>, Vec<ParseError>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut expressions = Vec::new();
    let mut errors = Vec::new();

    for input in inputs {
        match parse_expression(input) {
            Ok(expr) => expressions.push(expr),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(expressions)
    } else {
        debug!(
            "{} of {} threshold expressions rejected",
            errors.len(),
            errors.len() + expressions.len()
        );
        Err(errors)
    }
}
