use crate::geom::{Point, Range};

/// Errors raised by [`Grid`](crate::Grid) access and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A coordinate fell outside the grid extent.
    #[error("point {pos} is outside grid bounds {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },
    /// A text map row does not match the width of the first row.
    #[error("map row {row} has width {found}, expected {expected}")]
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A text map contains a character that is not a block symbol.
    #[error("map contains invalid symbol \u{201c}{ch}\u{201d} at {pos}")]
    InvalidSymbol { ch: char, pos: Point },
}
