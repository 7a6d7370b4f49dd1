//! Parser Tests - Aggregation Methods

use rstest::rstest;
use threshold::{AggregationMethod, UnknownMethodError, validate_method};

// ============================================================================
// Accepted Methods
// ============================================================================

#[rstest]
#[case("count")]
#[case("rate")]
#[case("value")]
#[case("avg")]
#[case("min")]
#[case("max")]
#[case("med")]
fn test_named_methods(#[case] input: &str) {
    let method = validate_method(input).unwrap();
    assert_eq!(method.as_str(), input);
    assert!(!method.is_percentile());
}

#[rstest]
#[case("p(99)", 99.0)]
#[case("p(99.9)", 99.9)]
#[case("p(99.0)", 99.0)]
#[case("p(0)", 0.0)]
#[case("p(50.125)", 50.125)]
fn test_percentile_methods(#[case] input: &str, #[case] rank: f64) {
    let method = validate_method(input).unwrap();
    assert_eq!(method.as_str(), input);
    assert_eq!(method.percentile().unwrap().rank(), rank);

    // Validating the canonical form again changes nothing
    assert_eq!(validate_method(method.as_str()).unwrap(), method);
}

#[test]
fn test_percentile_text_is_preserved() {
    let whole = validate_method("p(99)").unwrap();
    let decimal = validate_method("p(99.0)").unwrap();
    assert_ne!(whole, decimal);
    assert_eq!(whole.to_string(), "p(99)");
    assert_eq!(decimal.to_string(), "p(99.0)");
}

#[test]
fn test_from_str_uses_validator() {
    let method: AggregationMethod = "p(95)".parse().unwrap();
    assert_eq!(method.percentile().unwrap().argument(), "95");
    assert!("p95".parse::<AggregationMethod>().is_err());
}

// ============================================================================
// Rejected Methods
// ============================================================================

#[rstest]
#[case("foo")]
#[case("COUNT")]
#[case("p")]
#[case("p99")]
#[case("percentile(99)")]
fn test_unknown_names(#[case] input: &str) {
    let err = validate_method(input).unwrap_err();
    assert_eq!(
        err,
        UnknownMethodError::UnknownName {
            token: input.to_string()
        }
    );
}

#[rstest]
#[case("p(99")]
#[case("p(")]
#[case("p(99.9")]
fn test_incomplete_percentiles(#[case] input: &str) {
    let err = validate_method(input).unwrap_err();
    assert!(matches!(err, UnknownMethodError::UnclosedPercentile { .. }));
    assert_eq!(err.token(), input);
}

#[rstest]
#[case("p(foo)")]
#[case("p()")]
#[case("p(-1)")]
#[case("p( 99)")]
#[case("p(99 )")]
#[case("p(9,5)")]
#[case("p(1e2)")]
fn test_invalid_percentile_arguments(#[case] input: &str) {
    let err = validate_method(input).unwrap_err();
    assert!(
        matches!(err, UnknownMethodError::InvalidPercentile { .. }),
        "unexpected error for {input}: {err:?}"
    );
}

#[test]
fn test_error_names_the_token() {
    let err = validate_method("foo").unwrap_err();
    assert_eq!(err.to_string(), "unknown aggregation method `foo`");
}
