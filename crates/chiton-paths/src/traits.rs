use chiton_core::Point;

/// Neighbor enumeration for a search space of grid points.
pub trait Pather {
    /// Append the points reachable in one move from `p` into `buf`. The
    /// caller clears `buf` before calling; points outside the searched range
    /// are skipped by the search.
    ///
    /// When several paths tie on cost, the search keeps the one reached
    /// through the earliest-listed neighbor.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose moves carry a positive cost.
pub trait WeightedPather: Pather {
    /// Cost charged for moving from `from` into the adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Pather with a lower bound on the remaining cost, for A*.
pub trait AstarPather: WeightedPather {
    /// Estimate of the cost from `from` to `to`. Must never overestimate
    /// (admissible) and must not drop by more than one move's cost per move
    /// (consistent), so that a settled node is final.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
