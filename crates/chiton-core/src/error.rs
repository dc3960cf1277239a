//! Errors raised while building or expanding a [`CostGrid`](crate::CostGrid).

use std::fmt;

use crate::geom::Point;

/// Errors that can occur when constructing a cost grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input is not a rectangular matrix of costs in `1..=9`, or the
    /// requested expansion cannot be built.
    InvalidGrid(InvalidGrid),
    /// The input has no rows or no columns.
    EmptyGrid,
}

/// The specific reason a grid was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGrid {
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in textual input is not a decimal digit.
    NotADigit { ch: char, pos: Point },
    /// A cost lies outside `1..=9`.
    CostOutOfRange { value: u32, pos: Point },
    /// An expansion factor of zero was requested.
    ZeroFactor,
    /// The grid dimensions do not fit in the coordinate type.
    TooLarge { width: usize, height: usize },
}

impl From<InvalidGrid> for GridError {
    fn from(e: InvalidGrid) -> Self {
        Self::InvalidGrid(e)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
            Self::EmptyGrid => write!(f, "empty grid: at least one row and one column required"),
        }
    }
}

impl fmt::Display for InvalidGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::NotADigit { ch, pos } => {
                write!(f, "character {ch:?} at {pos} is not a digit")
            }
            Self::CostOutOfRange { value, pos } => {
                write!(f, "cost {value} at {pos} is outside 1..=9")
            }
            Self::ZeroFactor => write!(f, "expansion factor must be at least 1"),
            Self::TooLarge { width, height } => {
                write!(f, "{width}x{height} exceeds the maximum grid size")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            Self::EmptyGrid => None,
        }
    }
}

impl std::error::Error for InvalidGrid {}
