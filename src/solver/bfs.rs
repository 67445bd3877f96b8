use num_traits::Zero;

use crate::cell::Cost;
use crate::frontier::{FifoFrontier, FrontierKey};
use crate::grid::Position;
use crate::solver::{GridSolver, Strategy};

/// Breadth-first search. Cells are expanded in discovery order, so the first time the end is
/// reached it is through a minimum-hop route.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier;

    fn strategy(&self) -> Strategy {
        Strategy::Bfs
    }

    /// Uninformed search, no estimate.
    fn heuristic(&self, _: &Position, _: &Position) -> Cost {
        Cost::zero()
    }

    fn key(&self, _: Cost, _: Cost, order: Cost) -> FrontierKey {
        FrontierKey::new(order, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::TraversalState;
    use crate::grid::Grid;
    use crate::solver::{Expansion, SearchObserver};
    use std::ops::ControlFlow;

    struct Order(Vec<Position>);

    impl SearchObserver for Order {
        fn on_expand(&mut self, _: &Grid, expansion: &Expansion) -> ControlFlow<()> {
            self.0.push(expansion.position);
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn expands_in_discovery_order() {
        let mut grid: Grid = "S.\n.E".parse().unwrap();
        let mut order = Order(Vec::new());
        let result = BfsSolver.solve_observed(&mut grid, &mut order).unwrap();
        let expected: Vec<Position> = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(order.0, expected);
        assert_eq!(result.visited_count, 4);
        let route = result.route().unwrap().positions();
        let expected: [Position; 3] = [(0, 0).into(), (1, 0).into(), (1, 1).into()];
        assert_eq!(route, expected.as_slice());
    }

    /// Asserts that the optimal 4 step solution is found around a central obstacle.
    #[test]
    fn solve_simple_problem() {
        let mut grid: Grid = "S..\n.#.\n..E".parse().unwrap();
        let result = BfsSolver.solve(&mut grid).unwrap();
        assert_eq!(result.path_length(), Some(4));
        assert!(result.route().unwrap().is_valid_on(&grid));
        let path_cells = grid
            .cells()
            .filter(|c| c.traversal_state() == TraversalState::Path)
            .count();
        assert_eq!(path_cells, 3);
    }

    #[test]
    fn hop_counts_are_recorded() {
        let mut grid: Grid = "S...\n##.#\n...E".parse().unwrap();
        BfsSolver.solve(&mut grid).unwrap();
        let g = |row, col| {
            grid.cell_at(Position::new(row, col))
                .unwrap()
                .distance_from_start()
        };
        assert_eq!(g(0, 3), 3);
        assert_eq!(g(1, 2), 3);
        assert_eq!(g(2, 3), 5);
        assert_eq!(g(2, 2), 4);
    }
}
