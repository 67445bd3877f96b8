//! # grid_search
//!
//! Route finding on a 4-connected grid with four interchangeable strategies:
//! [breadth-first search](solver::bfs::BfsSolver),
//! [depth-first search](solver::dfs::DfsSolver),
//! [greedy best-first search](solver::greedy::GreedySolver) and
//! [A*](solver::astar::AstarSolver). All of them share one engine loop and
//! differ only in their [frontier](frontier::Frontier) and in how they key it.
//!
//! The [Grid] owns every [Cell](cell::Cell). Searches mutate the cells' traversal
//! state and metrics in place so that an external renderer can observe them,
//! either after the run or step by step through a [SearchObserver].
//!
//! ```
//! use grid_search::{Grid, Position, Strategy};
//!
//! let mut grid: Grid = "S..\n.#.\n..E".parse().unwrap();
//! let result = Strategy::Bfs.run(&mut grid).unwrap();
//! assert_eq!(result.path_length(), Some(4));
//! assert_eq!(grid.start(), Some(Position::new(0, 0)));
//! ```
pub mod cell;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod path;
pub mod solver;

pub use cell::{Cell, Cost, Role, TraversalState, INFINITE};
pub use error::{Error, Result};
pub use grid::{Grid, Position};
pub use path::{reconstruct, Route};
pub use solver::{Expansion, Outcome, SearchObserver, SearchResult, Strategy};

/// Side length of [Grid::default].
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Inline capacity for neighbour lists; a cell has at most four orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
