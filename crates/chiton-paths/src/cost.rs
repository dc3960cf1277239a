//! Cheapest traversal of a [`CostGrid`] from its top-left to its
//! bottom-right cell.
//!
//! Entering a cell costs that cell's value, moves are orthogonal only and
//! the starting cell is free.

use std::fmt;
use std::str::FromStr;

use chiton_core::{CostGrid, MIN_COST, Point};

use crate::distance::manhattan;
use crate::error::PathError;
use crate::pathrange::{CheapestPath, PathRange, UNREACHABLE};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Estimate used to order the A* frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Manhattan distance times the cheapest possible step.
    #[default]
    Manhattan,
    /// Always zero, which turns A* into plain Dijkstra.
    Zero,
}

impl Heuristic {
    /// Every name accepted by [`FromStr`].
    pub const NAMES: [&'static str; 2] = ["manhattan", "zero"];
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("manhattan"),
            Self::Zero => f.write_str("zero"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "zero" | "none" | "dijkstra" => Ok(Self::Zero),
            other => Err(format!("unknown heuristic {other:?}")),
        }
    }
}

/// Exposes a [`CostGrid`] to the search algorithms.
#[derive(Debug, Clone, Copy)]
pub struct CostPather<'a> {
    grid: &'a CostGrid,
    heuristic: Heuristic,
}

impl<'a> CostPather<'a> {
    /// A pather over `grid` using the default Manhattan heuristic.
    pub fn new(grid: &'a CostGrid) -> Self {
        Self::with_heuristic(grid, Heuristic::default())
    }

    /// A pather over `grid` using `heuristic`.
    pub fn with_heuristic(grid: &'a CostGrid, heuristic: Heuristic) -> Self {
        Self { grid, heuristic }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'a CostGrid {
        self.grid
    }

    /// The configured heuristic.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Pather for CostPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&q| self.grid.contains(q)));
    }
}

impl WeightedPather for CostPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.grid.at(to).map_or(UNREACHABLE, i32::from)
    }
}

impl AstarPather for CostPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        match self.heuristic {
            Heuristic::Manhattan => manhattan(from, to) * i32::from(MIN_COST),
            Heuristic::Zero => 0,
        }
    }
}

/// Cheapest path from the top-left to the bottom-right cell of `grid`.
pub fn find_path(grid: &CostGrid) -> Result<CheapestPath, PathError> {
    find_path_with(grid, Heuristic::default())
}

/// Like [`find_path`], with an explicit heuristic.
pub fn find_path_with(grid: &CostGrid, heuristic: Heuristic) -> Result<CheapestPath, PathError> {
    let mut pr = PathRange::new(grid.bounds());
    pr.astar_path(
        &CostPather::with_heuristic(grid, heuristic),
        grid.origin(),
        grid.target(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

    fn example() -> CostGrid {
        EXAMPLE.parse().unwrap()
    }

    #[test]
    fn example_costs_forty() {
        let grid = example();
        let cp = find_path(&grid).unwrap();
        assert_eq!(cp.cost, 40);
        assert_eq!(cp.path.first(), Some(&grid.origin()));
        assert_eq!(cp.path.last(), Some(&grid.target()));
        assert_eq!(grid.path_cost(&cp.path), Some(40));
    }

    #[test]
    fn expanded_example_costs_315() {
        let grid = example().expand(5).unwrap();
        assert_eq!(grid.size(), Point::new(50, 50));
        let cp = find_path(&grid).unwrap();
        assert_eq!(cp.cost, 315);
        assert_eq!(grid.path_cost(&cp.path), Some(315));
    }

    #[test]
    fn heuristics_agree_on_cost() {
        let grid = example().expand(2).unwrap();
        let a = find_path_with(&grid, Heuristic::Manhattan).unwrap();
        let d = find_path_with(&grid, Heuristic::Zero).unwrap();
        assert_eq!(a.cost, d.cost);
    }

    #[test]
    fn single_cell_grid() {
        let grid: CostGrid = "7".parse().unwrap();
        let cp = find_path(&grid).unwrap();
        assert_eq!(cp.cost, 0);
        assert_eq!(cp.path, vec![Point::ZERO]);
    }

    #[test]
    fn single_row_and_column() {
        let row: CostGrid = "19191".parse().unwrap();
        assert_eq!(find_path(&row).unwrap().cost, 9 + 1 + 9 + 1);
        let col: CostGrid = "1\n2\n3".parse().unwrap();
        let cp = find_path(&col).unwrap();
        assert_eq!(cp.cost, 5);
        assert_eq!(cp.path, vec![Point::at(0, 0), Point::at(1, 0), Point::at(2, 0)]);
    }

    #[test]
    fn detours_when_cheaper() {
        // The direct row is expensive; dropping down and back up wins.
        let grid: CostGrid = "\
1991
1111"
            .parse()
            .unwrap();
        let cp = find_path(&grid).unwrap();
        assert_eq!(cp.cost, 4);
        assert!(!cp.path.contains(&Point::new(1, 0)));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let grid = example();
        let first = find_path(&grid).unwrap();
        for _ in 0..3 {
            assert_eq!(find_path(&grid).unwrap(), first);
        }
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid: CostGrid = "12\n34".parse().unwrap();
        let pather = CostPather::new(&grid);
        let mut buf = Vec::new();
        pather.neighbors(Point::ZERO, &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(pather.cost(Point::ZERO, Point::new(1, 1)), 4);
    }

    #[test]
    fn heuristic_names_parse() {
        for name in Heuristic::NAMES {
            let h: Heuristic = name.parse().unwrap();
            assert_eq!(h.to_string(), name);
        }
        assert_eq!("Dijkstra".parse::<Heuristic>(), Ok(Heuristic::Zero));
        assert_eq!(
            "euclid".parse::<Heuristic>(),
            Err(String::from("unknown heuristic \"euclid\""))
        );
    }
}
