//! Fret IR - source positions.
//!
//! The small vocabulary a parsing engine and the diagnostic core agree on:
//! - [`Span`]: a byte range in the parsed text
//! - [`LineOffsetTable`]: byte offset to 1-based line/column lookup
//!
//! Every type is plain data (`Copy` where possible) so engines can capture
//! positions freely while matching.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod line_table;
mod span;

pub use line_table::{offset_to_line_col, LineOffsetTable};
pub use span::{Span, SpanError};
