//! **chiton-core** — cost grids for minimum-cost grid traversal.
//!
//! This crate provides the types shared by the search engine and its front
//! ends: geometry primitives, the immutable [`CostGrid`] and seed tiling
//! ([`expand`]) with the wrapping `1..=9` cost rule.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tiling;

pub use error::{GridError, InvalidGrid};
pub use geom::{Point, Range};
pub use grid::{CostGrid, MAX_COST, MIN_COST};
pub use tiling::{expand, wrapping_increment, wrapping_increment_by};
