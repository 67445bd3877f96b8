use crate::cell::Cost;
use crate::frontier::{FrontierKey, PriorityFrontier};
use crate::solver::{GridSolver, Strategy};

/// Greedy best-first search: always expands the queued cell with the smallest Manhattan
/// distance to the end, oldest first among equals. A cell is queued once and keeps the
/// predecessor it was first found from, so the route is not necessarily the shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    type Frontier = PriorityFrontier;

    fn strategy(&self) -> Strategy {
        Strategy::Greedy
    }

    fn key(&self, _: Cost, h: Cost, _: Cost) -> FrontierKey {
        FrontierKey::new(h, 0)
    }
}
