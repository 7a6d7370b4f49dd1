//! Serde support: every syntax type travels as its canonical string.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::{AggregationMethod, Operator, ThresholdExpression};

struct ParseVisitor<T>(PhantomData<T>, &'static str);

impl<T> Visitor<'_> for ParseVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.1)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }
}

macro_rules! impl_string_serde {
    ($ty:ty, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str(ParseVisitor(PhantomData, $expecting))
            }
        }
    };
}

impl_string_serde!(ThresholdExpression, "a threshold expression such as `p(95)<500`");
impl_string_serde!(AggregationMethod, "an aggregation method such as `avg` or `p(95)`");
impl_string_serde!(Operator, "a comparison operator");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_serializes_as_string() {
        let expr: ThresholdExpression = "p(95) < 200".parse().unwrap();
        assert_eq!(serde_json::to_string(&expr).unwrap(), "\"p(95)<200\"");
    }

    #[test]
    fn test_expression_list_deserializes() {
        let exprs: Vec<ThresholdExpression> =
            serde_json::from_str(r#"["count>20", "rate<0.05"]"#).unwrap();
        assert_eq!(exprs.len(), 2);
        assert_eq!(exprs[1].operator(), Operator::Less);
    }

    #[test]
    fn test_invalid_expression_fails_to_deserialize() {
        let err = serde_json::from_str::<ThresholdExpression>(r#""foo>20""#).unwrap_err();
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn test_method_and_operator_roundtrip() {
        let method: AggregationMethod = serde_json::from_str(r#""p(99.0)""#).unwrap();
        assert_eq!(method.as_str(), "p(99.0)");
        let op: Operator = serde_json::from_str(r#""===""#).unwrap();
        assert_eq!(op, Operator::StrictEq);
        assert_eq!(serde_json::to_string(&op).unwrap(), "\"===\"");
    }
}
