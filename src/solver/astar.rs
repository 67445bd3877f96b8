use crate::cell::Cost;
use crate::frontier::{FrontierKey, PriorityFrontier};
use crate::solver::{GridSolver, Strategy};

/// A* with the Manhattan heuristic. Cells are ordered by g + h, preferring the smaller h when
/// totals tie, and a queued cell found again through a cheaper route is re-keyed in place. With
/// unit moves and a consistent heuristic the first route to the end is a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier;

    fn strategy(&self) -> Strategy {
        Strategy::AStar
    }

    fn key(&self, g: Cost, h: Cost, _: Cost) -> FrontierKey {
        FrontierKey::new(g.saturating_add(h), h)
    }

    fn decrease_key(&self) -> bool {
        true
    }
}
