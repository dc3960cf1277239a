use std::collections::BinaryHeap;

use chiton_core::Point;

use crate::PathRange;
use crate::error::PathError;
use crate::pathrange::{CheapestPath, NodeRef, NodeState, UNREACHABLE};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Returns the total cost together with the full path (including both
    /// endpoints). The cost of `from` itself is not counted. Among several
    /// optimal paths the one found first wins: the open heap breaks ties on
    /// `f` by insertion order and neighbors are pushed in the order the
    /// pather lists them.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<CheapestPath, PathError> {
        if self.rng.is_empty() {
            return Err(PathError::EmptyGrid);
        }
        let start_idx = self.idx(from).ok_or(PathError::OutOfBounds(from))?;
        let goal_idx = self.idx(to).ok_or(PathError::OutOfBounds(to))?;

        if start_idx == goal_idx {
            return Ok(CheapestPath {
                cost: 0,
                path: vec![from],
            });
        }

        // Bump generation to lazily reset every node to Unvisited.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.state = NodeState::Frontier;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.astar_nodes[start_idx].f,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut settled = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.astar_nodes[ci].generation != cur_gen
                || self.astar_nodes[ci].state != NodeState::Frontier
            {
                continue;
            }

            self.astar_nodes[ci].state = NodeState::Settled;
            settled += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.astar_nodes[ci].g;
            let current_point = self.point(ci);
            log::trace!("settled {current_point} at cost {current_g}");

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(pather.cost(current_point, np));

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if n.state == NodeState::Settled || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.f = tentative_g.saturating_add(pather.estimate(np, to));
                n.parent = ci;
                n.state = NodeState::Frontier;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::warn!("no path from {from} to {to} after settling {settled} nodes");
            return Err(PathError::Unreachable { from, to });
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();

        let cost = self.astar_nodes[goal_idx].g;
        log::debug!(
            "cheapest path {from} -> {to}: cost {cost}, {} steps, {settled} nodes settled",
            path.len() - 1
        );
        Ok(CheapestPath { cost, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::traits::{Pather, WeightedPather};
    use chiton_core::Range;

    /// Open 4-connected plane with unit costs and optional walls.
    struct Plane {
        walls: Vec<Point>,
    }

    impl Pather for Plane {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(p.neighbors_4().into_iter().filter(|q| !self.walls.contains(q)));
        }
    }

    impl WeightedPather for Plane {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    impl AstarPather for Plane {
        fn estimate(&self, from: Point, to: Point) -> i32 {
            manhattan(from, to)
        }
    }

    #[test]
    fn straight_line() {
        let mut pr = PathRange::new(Range::new(0, 0, 10, 1));
        let plane = Plane { walls: vec![] };
        let cp = pr
            .astar_path(&plane, Point::new(0, 0), Point::new(9, 0))
            .unwrap();
        assert_eq!(cp.cost, 9);
        assert_eq!(cp.path.len(), 10);
        assert_eq!(cp.path[0], Point::new(0, 0));
        assert_eq!(cp.path[9], Point::new(9, 0));
    }

    #[test]
    fn same_start_and_goal() {
        let mut pr = PathRange::new(Range::new(0, 0, 3, 3));
        let plane = Plane { walls: vec![] };
        let cp = pr
            .astar_path(&plane, Point::new(1, 1), Point::new(1, 1))
            .unwrap();
        assert_eq!(cp.cost, 0);
        assert_eq!(cp.path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn routes_around_wall() {
        let mut pr = PathRange::new(Range::new(0, 0, 3, 3));
        let plane = Plane {
            walls: vec![Point::new(1, 0), Point::new(1, 1)],
        };
        let cp = pr
            .astar_path(&plane, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(cp.cost, 6);
        assert!(cp.path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(!cp.path.iter().any(|p| plane.walls.contains(p)));
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        let mut pr = PathRange::new(Range::new(0, 0, 3, 3));
        let plane = Plane {
            walls: vec![Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)],
        };
        let err = pr
            .astar_path(&plane, Point::new(0, 0), Point::new(2, 2))
            .unwrap_err();
        assert_eq!(
            err,
            PathError::Unreachable {
                from: Point::new(0, 0),
                to: Point::new(2, 2),
            }
        );
    }

    #[test]
    fn empty_range_and_out_of_bounds() {
        let plane = Plane { walls: vec![] };
        let mut empty = PathRange::new(Range::new(0, 0, 0, 5));
        assert_eq!(
            empty.astar_path(&plane, Point::ZERO, Point::ZERO),
            Err(PathError::EmptyGrid)
        );

        let mut pr = PathRange::new(Range::new(0, 0, 3, 3));
        assert_eq!(
            pr.astar_path(&plane, Point::ZERO, Point::new(3, 0)),
            Err(PathError::OutOfBounds(Point::new(3, 0)))
        );
    }

    #[test]
    fn ties_follow_neighbor_order() {
        // Up, down, left, right: on an open plane the first-discovered branch
        // going down is settled before the one going right.
        let mut pr = PathRange::new(Range::new(0, 0, 2, 2));
        let plane = Plane { walls: vec![] };
        let cp = pr
            .astar_path(&plane, Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert_eq!(
            cp.path,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn reuse_across_searches() {
        let mut pr = PathRange::new(Range::new(0, 0, 8, 8));
        let plane = Plane { walls: vec![] };
        let a = pr
            .astar_path(&plane, Point::new(0, 0), Point::new(7, 7))
            .unwrap();
        let b = pr
            .astar_path(&plane, Point::new(7, 0), Point::new(0, 7))
            .unwrap();
        let a2 = pr
            .astar_path(&plane, Point::new(0, 0), Point::new(7, 7))
            .unwrap();
        assert_eq!(a.cost, 14);
        assert_eq!(b.cost, 14);
        assert_eq!(a, a2);
    }

    /// A row where every step costs more than half of `i32::MAX`.
    struct Steep;

    impl Pather for Steep {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(p.neighbors_4());
        }
    }

    impl WeightedPather for Steep {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            i32::MAX / 2 + 1
        }
    }

    impl AstarPather for Steep {
        fn estimate(&self, _from: Point, _to: Point) -> i32 {
            0
        }
    }

    #[test]
    fn cumulative_cost_saturates() {
        let mut pr = PathRange::new(Range::new(0, 0, 3, 1));
        let cp = pr
            .astar_path(&Steep, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(cp.cost, i32::MAX);
        assert_eq!(
            cp.path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }
}
