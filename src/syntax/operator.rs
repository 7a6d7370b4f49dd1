//! Comparison operators accepted between method and value.

use std::fmt;
use std::str::FromStr;

use crate::parser::ScanError;

/// A comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `==`
    LooseEq,
    /// `===`
    StrictEq,
    /// `!=`
    NotEq,
}

impl Operator {
    /// Every operator, longest symbols ahead of their prefixes.
    pub const ALL: [Operator; 7] = [
        Operator::LessEq,
        Operator::GreaterEq,
        Operator::StrictEq,
        Operator::LooseEq,
        Operator::NotEq,
        Operator::Less,
        Operator::Greater,
    ];

    /// Get the operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::LooseEq => "==",
            Self::StrictEq => "===",
            Self::NotEq => "!=",
        }
    }

    /// Look up an operator by its exact symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or(ScanError { stray: None })
    }
}
