//! The parsed threshold condition.

use std::fmt;
use std::str::FromStr;

use super::{AggregationMethod, Operator};
use crate::parser::{ParseError, parse_expression};

/// A single threshold condition, `<method><operator><value>`.
///
/// Built only by [`parse_expression`], so the value is always finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdExpression {
    aggregation_method: AggregationMethod,
    operator: Operator,
    value: f64,
}

impl ThresholdExpression {
    pub(crate) fn new(aggregation_method: AggregationMethod, operator: Operator, value: f64) -> Self {
        Self {
            aggregation_method,
            operator,
            value,
        }
    }

    pub fn aggregation_method(&self) -> &AggregationMethod {
        &self.aggregation_method
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Right-hand side of the comparison
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for ThresholdExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.aggregation_method, self.operator, self.value)
    }
}

impl FromStr for ThresholdExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression(s)
    }
}
