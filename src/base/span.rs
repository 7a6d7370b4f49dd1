//! Range helpers over expression text.

use text_size::{TextRange, TextSize};

/// Range covering `text` when it starts at `offset`.
pub fn range_of(text: &str, offset: TextSize) -> TextRange {
    TextRange::at(offset, TextSize::of(text))
}

/// Trim surrounding whitespace from `text` that starts at `offset`.
///
/// Returns the trimmed slice together with its range in the enclosing
/// input. An all-whitespace slice yields an empty range at its end.
pub fn trimmed(text: &str, offset: TextSize) -> (&str, TextRange) {
    let leading = text.len() - text.trim_start().len();
    let inner = text.trim();
    let start = offset + TextSize::new(leading as u32);
    (inner, range_of(inner, start))
}
