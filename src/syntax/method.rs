//! Aggregation methods a threshold can compare against.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use smol_str::SmolStr;

use crate::parser::{UnknownMethodError, validate_method};

/// Names of the non-parametrized aggregation methods
pub const METHOD_NAMES: &[&str] = &["count", "rate", "value", "avg", "min", "max", "med"];

/// The statistical reduction applied to a metric before comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AggregationMethod {
    Count,
    Rate,
    Value,
    Avg,
    Min,
    Max,
    Med,
    /// `p(N)`, the N-th percentile
    Percentile(Percentile),
}

impl AggregationMethod {
    /// Look up a non-parametrized method by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        let method = match name {
            "count" => Self::Count,
            "rate" => Self::Rate,
            "value" => Self::Value,
            "avg" => Self::Avg,
            "min" => Self::Min,
            "max" => Self::Max,
            "med" => Self::Med,
            _ => return None,
        };
        Some(method)
    }

    /// Canonical text of the method, exactly as it was written
    pub fn as_str(&self) -> &str {
        match self {
            Self::Count => "count",
            Self::Rate => "rate",
            Self::Value => "value",
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
            Self::Med => "med",
            Self::Percentile(p) => p.as_str(),
        }
    }

    pub fn is_percentile(&self) -> bool {
        matches!(self, Self::Percentile(_))
    }

    pub fn percentile(&self) -> Option<&Percentile> {
        match self {
            Self::Percentile(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationMethod {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_method(s)
    }
}

/// A validated `p(N)` method.
///
/// Keeps the token verbatim so `p(99)` and `p(99.0)` stay distinct; only
/// [`validate_method`] can build one.
#[derive(Debug, Clone)]
pub struct Percentile {
    token: SmolStr,
    rank: f64,
}

impl Percentile {
    pub(crate) fn new(token: &str, rank: f64) -> Self {
        Self {
            token: SmolStr::new(token),
            rank,
        }
    }

    /// The full token, e.g. `p(99.9)`
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// The captured argument text, e.g. `99.9`
    pub fn argument(&self) -> &str {
        &self.token.as_str()[2..self.token.len() - 1]
    }

    /// The numeric percentile rank, e.g. `99.9`
    pub fn rank(&self) -> f64 {
        self.rank
    }
}

// Equality follows the written token; the rank is derived from it.
impl PartialEq for Percentile {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Percentile {}

impl Hash for Percentile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
