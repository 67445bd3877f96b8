use num_traits::Zero;

use crate::cell::Cost;
use crate::frontier::{FrontierKey, LifoFrontier};
use crate::grid::Position;
use crate::solver::{GridSolver, Strategy};

/// Depth-first search. Always follows the most recently discovered cell. Finds a route
/// whenever one exists, but not necessarily a short one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = LifoFrontier;

    fn strategy(&self) -> Strategy {
        Strategy::Dfs
    }

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
    use crate::grid::Grid;

    #[test]
    fn follows_latest_branch() {
        // The end sits right below the start, but the right-hand branch is pushed last and is
        // explored first, looping around to reach the end from the other side.
        let mut grid: Grid = "S.\n..\nE.".parse().unwrap();
        let result = DfsSolver.solve(&mut grid).unwrap();
        let route: Vec<Position> = result.route().unwrap().positions().to_vec();
        let expected: Vec<Position> = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(route, expected);
        assert_eq!(result.path_length(), Some(4));
        assert_eq!(result.visited_count, 5);
        assert!(result.route().unwrap().is_valid_on(&grid));
    }

    #[test]
    fn finds_route_through_maze() {
        let mut grid: Grid = "S#...\n.#.#.\n.#.#.\n...#E".parse().unwrap();
        let result = DfsSolver.solve(&mut grid).unwrap();
        assert!(result.route().unwrap().is_valid_on(&grid));
        assert!(result.visited_count > result.path_length().unwrap());
    }
}
