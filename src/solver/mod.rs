use crate::cell::{Cost, TraversalState};
use crate::error::{Error, Result};
use crate::frontier::{Frontier, FrontierKey};
use crate::grid::{Grid, Position};
use crate::heuristic::manhattan;
use crate::path::{reconstruct, Route};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use log::{info, trace};
use num_traits::Zero;
use smallvec::SmallVec;
use std::ops::ControlFlow;
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use greedy::GreedySolver;

/// Report of a single expansion, handed to the [SearchObserver] after the expanded cell has
/// been marked visited and its neighbours have been queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    pub position: Position,
    /// 1-based index of this expansion within the run.
    pub step: usize,
    /// Cells that were queued or re-keyed while expanding `position`.
    pub discovered: SmallVec<[Position; N_SMALLVEC_SIZE]>,
}

/// Receives progress of a running search. This is the only point where a run yields, so it is
/// also where a caller can stop it.
pub trait SearchObserver {
    fn on_expand(&mut self, _grid: &Grid, _expansion: &Expansion) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
    fn on_finish(&mut self, _grid: &Grid, _result: &SearchResult) {}
}

impl SearchObserver for () {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(Route),
    /// The frontier ran dry before reaching the end.
    Unreachable,
    /// The observer stopped the run. The grid is left as it was at that point.
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub strategy: Strategy,
    /// Number of cells expanded, the end cell included when it was reached.
    pub visited_count: usize,
    pub outcome: Outcome,
}

impl SearchResult {
    pub fn route(&self) -> Option<&Route> {
        match &self.outcome {
            Outcome::Found(route) => Some(route),
            _ => None,
        }
    }
    /// Number of moves on the found route.
    pub fn path_length(&self) -> Option<usize> {
        self.route().map(Route::len)
    }
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }
}

/// A search strategy over a [Grid]. Implementors choose the frontier and how discovered cells
/// are keyed; [solve_observed](Self::solve_observed) provides the loop shared by all of them.
pub trait GridSolver {
    type Frontier: Frontier + Default;

    fn strategy(&self) -> Strategy;

    /// Estimate of the remaining cost from `p1` to the goal `p2`.
    fn heuristic(&self, p1: &Position, p2: &Position) -> Cost {
        manhattan(p1, p2)
    }

    /// Key under which a cell is queued given its cost `g`, its estimate `h` and the number of
    /// cells discovered before it in this run.
    fn key(&self, g: Cost, h: Cost, order: Cost) -> FrontierKey;

    /// Whether a queued cell that is reached again with a strictly smaller g gets a new
    /// predecessor and key.
    fn decrease_key(&self) -> bool {
        false
    }

    fn solve(&self, grid: &mut Grid) -> Result<SearchResult> {
        self.solve_observed(grid, &mut ())
    }

    /// Runs the search from the grid's start to its end. Search state left by earlier runs
    /// is cleared first; if the endpoints are invalid the grid is not touched at all.
    fn solve_observed<O: SearchObserver>(
        &self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> Result<SearchResult> {
        let (start, end) = grid.endpoints()?;
        let strategy = self.strategy();
        info!(
            "Running {} from {} to {} on a {}x{} grid",
            strategy,
            start,
            end,
            grid.rows(),
            grid.cols()
        );
        grid.reset_all();

        let mut frontier = Self::Frontier::default();
        let mut order = Cost::zero();
        let g = Cost::zero();
        let h = self.heuristic(&start, &end);
        let key = self.key(g, h, order);
        queue(grid, &mut frontier, start, None, g, h, key);

        let mut visited_count = 0;
        while let Some(current) = frontier.pop() {
            let cell = grid.cell_mut(current);
            cell.in_frontier = false;
            if cell.state == TraversalState::Visited {
                continue;
            }
            cell.state = TraversalState::Visited;
            let g = cell.g;
            visited_count += 1;

            let mut discovered = SmallVec::new();
            if current != end {
                for n in grid.neighborhood_points(&current) {
                    let new_g = g + 1;
                    let neighbour = grid.cell(n);
                    debug_assert_eq!(neighbour.in_frontier, frontier.contains(&n));
                    let enqueue = match neighbour.state {
                        TraversalState::Unvisited => true,
                        TraversalState::Frontier => self.decrease_key() && new_g < neighbour.g,
                        TraversalState::Visited | TraversalState::Path => false,
                    };
                    if !enqueue {
                        continue;
                    }
                    order += 1;
                    let h = self.heuristic(&n, &end);
                    let key = self.key(new_g, h, order);
                    queue(grid, &mut frontier, n, Some(current), new_g, h, key);
                    discovered.push(n);
                }
            }

            let expansion = Expansion {
                position: current,
                step: visited_count,
                discovered,
            };
            trace!(
                "{} expanded {} (step {}, {} queued)",
                strategy,
                current,
                visited_count,
                frontier.len()
            );
            let flow = observer.on_expand(grid, &expansion);
            if current == end {
                let route = reconstruct(grid)?;
                return Ok(finish(grid, observer, strategy, visited_count, Outcome::Found(route)));
            }
            if flow.is_break() {
                return Ok(finish(grid, observer, strategy, visited_count, Outcome::Cancelled));
            }
        }
        Ok(finish(grid, observer, strategy, visited_count, Outcome::Unreachable))
    }
}

fn queue<F: Frontier>(
    grid: &mut Grid,
    frontier: &mut F,
    pos: Position,
    predecessor: Option<Position>,
    g: Cost,
    h: Cost,
    key: FrontierKey,
) {
    let cell = grid.cell_mut(pos);
    cell.predecessor = predecessor;
    cell.g = g;
    cell.h = h;
    cell.key = key.primary;
    cell.in_frontier = true;
    cell.state = TraversalState::Frontier;
    frontier.push(pos, key);
}

fn finish<O: SearchObserver>(
    grid: &Grid,
    observer: &mut O,
    strategy: Strategy,
    visited_count: usize,
    outcome: Outcome,
) -> SearchResult {
    match &outcome {
        Outcome::Found(route) => info!(
            "{} found a path of length {} after {} expansions",
            strategy,
            route.len(),
            visited_count
        ),
        Outcome::Unreachable => info!(
            "{} exhausted the frontier after {} expansions, end is unreachable",
            strategy, visited_count
        ),
        Outcome::Cancelled => info!("{} cancelled after {} expansions", strategy, visited_count),
    }
    let result = SearchResult {
        strategy,
        visited_count,
        outcome,
    };
    observer.on_finish(grid, &result);
    result
}

/// The four strategies. This is the uniform entry point for callers that pick a strategy at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Greedy,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::Dfs, Strategy::Greedy, Strategy::AStar];

    /// The strategy after this one, wrapping around after A*.
    pub fn next(self) -> Strategy {
        match self {
            Strategy::Bfs => Strategy::Dfs,
            Strategy::Dfs => Strategy::Greedy,
            Strategy::Greedy => Strategy::AStar,
            Strategy::AStar => Strategy::Bfs,
        }
    }
    /// BFS and A* always return a minimum-hop route; DFS and greedy only some route.
    pub fn guarantees_shortest(self) -> bool {
        matches!(self, Strategy::Bfs | Strategy::AStar)
    }
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        }
    }

    pub fn run(self, grid: &mut Grid) -> Result<SearchResult> {
        self.run_observed(grid, &mut ())
    }
    pub fn run_observed<O: SearchObserver>(
        self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> Result<SearchResult> {
        match self {
            Strategy::Bfs => BfsSolver.solve_observed(grid, observer),
            Strategy::Dfs => DfsSolver.solve_observed(grid, observer),
            Strategy::Greedy => GreedySolver.solve_observed(grid, observer),
            Strategy::AStar => AstarSolver.solve_observed(grid, observer),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Strategy> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "greedy" | "best-first" => Ok(Strategy::Greedy),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(Error::UnknownStrategy(s.to_owned())),
        }
    }
}
