//! Text rendering of grids and paths.

use std::collections::HashSet;
use std::fmt::Write;

use chiton_core::{CostGrid, Point};

/// Draw `grid` inside a `+---+` frame with `path` overlaid.
///
/// The first path cell is drawn as `s`, the last as `e` and the others as
/// `x`; every other cell shows its cost digit.
pub fn render_path(grid: &CostGrid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let start = path.first().copied();
    let end = path.last().copied();
    let border = format!("+{}+", "-".repeat(grid.width() as usize));

    let mut out = String::with_capacity((grid.width() as usize + 3) * (grid.height() as usize + 2));
    out.push_str(&border);
    out.push('\n');
    for (y, row) in grid.rows().enumerate() {
        out.push('|');
        for (x, &cost) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            let ch = if Some(p) == start {
                's'
            } else if Some(p) == end {
                'e'
            } else if on_path.contains(&p) {
                'x'
            } else {
                char::from(b'0' + cost)
            };
            out.push(ch);
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

/// Format points as a bracketed list, e.g. `[(0, 0), (0, 1)]`.
pub fn format_points(points: &[Point]) -> String {
    let mut out = String::from("[");
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{p}");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_path_markers() {
        let grid: CostGrid = "123\n456\n789".parse().unwrap();
        let path = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        assert_eq!(
            render_path(&grid, &path),
            "+---+\n|sx3|\n|4xx|\n|78e|\n+---+"
        );
    }

    #[test]
    fn single_cell_path_is_start() {
        let grid: CostGrid = "5".parse().unwrap();
        assert_eq!(render_path(&grid, &[Point::ZERO]), "+-+\n|s|\n+-+");
    }

    #[test]
    fn empty_path_shows_digits() {
        let grid: CostGrid = "12\n34".parse().unwrap();
        assert_eq!(render_path(&grid, &[]), "+--+\n|12|\n|34|\n+--+");
    }

    #[test]
    fn formats_point_lists() {
        assert_eq!(format_points(&[]), "[]");
        assert_eq!(
            format_points(&[Point::new(0, 0), Point::new(0, 1)]),
            "[(0, 0), (0, 1)]"
        );
    }
}
