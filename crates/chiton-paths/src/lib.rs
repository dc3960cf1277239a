//! Cheapest-path search over cost grids.
//!
//! This crate finds the minimum-cost orthogonal walk across a
//! [`CostGrid`](chiton_core::CostGrid), where entering a cell costs its value:
//!
//! A\* runs through [`PathRange::astar_path`], or [`find_path`] for the
//! top-left to bottom-right case. [`Heuristic::Zero`] turns it into plain
//! Dijkstra.
//!
//! [`PathRange`] owns and reuses the tentative-cost and predecessor table so
//! that repeated queries incur zero allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`CostPather`] implements all three for a cost grid.

mod astar;
mod cost;
mod distance;
mod error;
mod pathrange;
mod traits;

pub use cost::{CostPather, Heuristic, find_path, find_path_with};
pub use distance::manhattan;
pub use error::PathError;
pub use pathrange::{CheapestPath, PathRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
