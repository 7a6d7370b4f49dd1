//! Operator-boundary scanner
//!
//! Splits `<method><operator><value>` into its three parts. Only the split
//! is checked here; the method and value are validated by the builder.

use text_size::{TextRange, TextSize};

use super::errors::{ScanError, StraySymbol};
use super::lexer::Lexer;
use crate::base::{range_of, trimmed};
use crate::syntax::Operator;

/// The three parts of a threshold expression, as written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned<'a> {
    /// Trimmed text before the operator (may be empty)
    pub method: &'a str,
    pub operator: Operator,
    /// Trimmed text after the operator (may be empty)
    pub value: &'a str,
    pub method_range: TextRange,
    pub operator_range: TextRange,
    pub value_range: TextRange,
}

/// Split an expression at its first comparison operator.
///
/// Operators are matched longest-first, so `foo===bar` splits at `===`.
pub fn scan(input: &str) -> Result<Scanned<'_>, ScanError> {
    let mut stray = None;

    for token in Lexer::new(input) {
        if let Some(operator) = token.kind.operator() {
            let split = usize::from(token.offset);
            let after = split + token.text.len();

            let (method, method_range) = trimmed(&input[..split], TextSize::new(0));
            let (value, value_range) = trimmed(&input[after..], TextSize::new(after as u32));

            return Ok(Scanned {
                method,
                operator,
                value,
                method_range,
                operator_range: range_of(token.text, token.offset),
                value_range,
            });
        }

        if stray.is_none() && token.kind.is_stray_symbol() {
            stray = token.text.chars().next().map(|symbol| StraySymbol {
                symbol,
                range: range_of(token.text, token.offset),
            });
        }
    }

    Err(ScanError { stray })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    #[test]
    fn test_scan_simple() {
        let scanned = scan("count>20").unwrap();
        assert_eq!(scanned.method, "count");
        assert_eq!(scanned.operator, Operator::Greater);
        assert_eq!(scanned.value, "20");
    }

    #[test]
    fn test_scan_ranges_point_at_trimmed_tokens() {
        let scanned = scan("  avg  <=  12 ").unwrap();
        assert_eq!(scanned.method_range, range(2, 5));
        assert_eq!(scanned.operator_range, range(7, 9));
        assert_eq!(scanned.value_range, range(11, 13));
    }

    #[test]
    fn test_scan_first_operator_wins() {
        let scanned = scan("a<b>c").unwrap();
        assert_eq!(scanned.method, "a");
        assert_eq!(scanned.operator, Operator::Less);
        assert_eq!(scanned.value, "b>c");
    }

    #[test]
    fn test_scan_longest_match_leaves_remainder_in_value() {
        let scanned = scan("foo====bar").unwrap();
        assert_eq!(scanned.operator, Operator::StrictEq);
        assert_eq!(scanned.value, "=bar");
    }

    #[test]
    fn test_scan_allows_empty_sides() {
        let scanned = scan(" < ").unwrap();
        assert_eq!(scanned.method, "");
        assert_eq!(scanned.value, "");
        assert!(scanned.method_range.is_empty());
    }

    #[test]
    fn test_scan_records_first_stray_symbol() {
        let err = scan("a = b ! c").unwrap_err();
        let stray = err.stray.unwrap();
        assert_eq!(stray.symbol, '=');
        assert_eq!(stray.range, range(2, 3));
    }

    #[test]
    fn test_scan_without_operator() {
        assert_eq!(scan("count 20"), Err(ScanError { stray: None }));
        assert_eq!(scan(""), Err(ScanError { stray: None }));
    }
}
