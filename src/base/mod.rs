//! Foundation types for the threshold parser.
//!
//! - [`TextRange`], [`TextSize`] - Byte offsets into an expression
//! - [`trimmed`] - Whitespace trimming that keeps the trimmed range
//!
//! This module has NO dependencies on other crate modules.

mod span;

pub use span::{range_of, trimmed};
pub use text_size::{TextRange, TextSize};

// Re-export text-size for consumers that need the full API
pub use text_size;
