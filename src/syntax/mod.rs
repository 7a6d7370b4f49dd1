//! Typed threshold syntax: the values a successful parse produces.
//!
//! - [`ThresholdExpression`] - `<method><operator><value>`
//! - [`AggregationMethod`], [`Percentile`] - the reduction being compared
//! - [`Operator`] - the comparison symbol

mod expression;
mod method;
mod operator;
#[cfg(feature = "serde")]
mod serde_impl;

pub use expression::ThresholdExpression;
pub use method::{AggregationMethod, METHOD_NAMES, Percentile};
pub use operator::Operator;
