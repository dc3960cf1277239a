use chiton_core::{Point, Range};

/// The result of a successful cheapest-path search.
///
/// `path` runs from the start to the goal inclusive, one orthogonal step at a
/// time. `cost` is the sum of the costs of every cell entered, so the start
/// cell itself is never charged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheapestPath {
    pub cost: i32,
    pub path: Vec<Point>,
}

impl CheapestPath {
    /// Number of steps taken (one less than the number of cells visited).
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The first `n` cells of the path.
    pub fn head(&self, n: usize) -> &[Point] {
        &self.path[..n.min(self.path.len())]
    }

    /// The last `n` cells of the path.
    pub fn tail(&self, n: usize) -> &[Point] {
        &self.path[self.path.len().saturating_sub(n)..]
    }
}

// ---------------------------------------------------------------------------
// Internal node for the A* priority queue
// ---------------------------------------------------------------------------

/// Lifecycle of a cell during one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unvisited,
    /// Discovered with a finite cost, waiting in the open heap.
    Frontier,
    /// Popped with its final cost; never relaxed again.
    Settled,
}

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            state: NodeState::Unvisited,
        }
    }
}

/// Reference into the node array, ordered by `f` then by insertion order for
/// use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Tentative cost of a node that no search has reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Owner of the search tables for one grid rectangle.
///
/// `PathRange` holds the tentative-cost and predecessor table and a neighbor
/// scratch buffer, so repeated queries incur no allocations after the first
/// use. Every search takes `&mut self`: concurrent searches
/// need one `PathRange` each.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cheapest_path_round_trip() {
        let cp = CheapestPath {
            cost: 1,
            path: vec![Point::new(0, 0), Point::new(0, 1)],
        };
        let json = serde_json::to_string(&cp).unwrap();
        let back: CheapestPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cp);
    }
}
