use std::fmt;

use chiton_core::Point;

/// Errors returned by cheapest-path searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The searched range has zero width or height.
    EmptyGrid,
    /// A search endpoint lies outside the searched range.
    OutOfBounds(Point),
    /// The frontier emptied before the goal was settled.
    Unreachable { from: Point, to: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "cannot search an empty grid"),
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the grid"),
            Self::Unreachable { from, to } => write!(f, "no path from {from} to {to}"),
        }
    }
}

impl std::error::Error for PathError {}
