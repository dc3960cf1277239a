//! The [`CostGrid`] type — an immutable matrix of per-cell traversal costs.
//!
//! Costs are single digits in `1..=9`. A grid is validated once, when it is
//! built, and never changes afterwards, so every other component may rely on
//! it being rectangular, non-empty and in range.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, InvalidGrid};
use crate::geom::{Point, Range};

/// Smallest cost a cell may carry.
pub const MIN_COST: u8 = 1;
/// Largest cost a cell may carry.
pub const MAX_COST: u8 = 9;

/// A rectangular grid of traversal costs stored row-major in one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostGrid {
    cells: Vec<u8>,
    width: i32,
    height: i32,
}

impl CostGrid {
    /// Build a grid from rows of costs.
    ///
    /// Every row must have the same width and every value must lie in
    /// `1..=9`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        check_dims(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(InvalidGrid::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                }
                .into());
            }
            for (x, &value) in row.iter().enumerate() {
                if !(MIN_COST..=MAX_COST).contains(&value) {
                    return Err(InvalidGrid::CostOutOfRange {
                        value: u32::from(value),
                        pos: Point::new(x as i32, y as i32),
                    }
                    .into());
                }
                cells.push(value);
            }
        }

        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Build a grid whose cells were produced by trusted code (already in
    /// range, `width * height` long).
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        debug_assert!(cells.iter().all(|v| (MIN_COST..=MAX_COST).contains(v)));
        Self {
            cells,
            width,
            height,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The rectangle covered by the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a constructed grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The top-left cell, where every path starts.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::ZERO
    }

    /// The bottom-right cell, where every path ends.
    #[inline]
    pub fn target(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Cost of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u8> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Row-major iterator over `(Point, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Sum of the costs of every cell entered along `path`.
    ///
    /// The first cell is where the walk starts and is not charged. Returns
    /// `None` if a step leaves the grid or is not a single orthogonal move.
    pub fn path_cost(&self, path: &[Point]) -> Option<u32> {
        let mut total = 0u32;
        for step in path.windows(2) {
            if !step[0].is_adjacent(step[1]) {
                return None;
            }
            total += u32::from(self.at(step[1])?);
        }
        if let Some(&first) = path.first() {
            self.at(first)?;
        }
        Some(total)
    }
}

fn check_dims(width: usize, height: usize) -> Result<(), GridError> {
    let fits = i32::try_from(width).is_ok()
        && i32::try_from(height).is_ok()
        && width.checked_mul(height).is_some_and(|n| i32::try_from(n).is_ok());
    if fits {
        Ok(())
    } else {
        Err(InvalidGrid::TooLarge { width, height }.into())
    }
}

pub(crate) fn checked_dims(width: usize, height: usize) -> Result<(i32, i32), GridError> {
    check_dims(width, height)?;
    Ok((width as i32, height as i32))
}

/// Parses one row per line, one digit per cell. Surrounding whitespace is
/// trimmed and blank lines are skipped.
impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let y = rows.len() as i32;
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    ch.to_digit(10).map(|d| d as u8).ok_or(InvalidGrid::NotADigit {
                        ch,
                        pos: Point::new(x as i32, y),
                    })
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        log::debug!("parsed {} rows of cost input", rows.len());
        Self::from_rows(&rows)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &v in row {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CostGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CostGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<u8>> as serde::Deserialize>::deserialize(deserializer)?;
        CostGrid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = CostGrid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,2,3],[4,5,6]]");
        let back: CostGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<CostGrid>("[[1,2],[3]]").is_err());
        assert!(serde_json::from_str::<CostGrid>("[[0]]").is_err());
    }
}
