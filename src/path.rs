use crate::cell::TraversalState;
use crate::error::{Error, Result};
use crate::grid::{Grid, Position};
use itertools::Itertools;
use log::warn;

/// An ordered sequence of positions from the start cell to the end cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    positions: Vec<Position>,
}

impl Route {
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
    /// Number of moves, one less than the number of positions.
    pub fn len(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
    /// True for a route without any move.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn first(&self) -> Option<Position> {
        self.positions.first().copied()
    }
    pub fn last(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    /// Checks that the route can be walked on `grid`: consecutive positions are orthogonally
    /// adjacent, no position is a barrier or out of bounds and no position repeats.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.positions.iter().all(|p| grid.can_move_to(*p))
            && self
                .positions
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.is_adjacent(b))
            && self.positions.iter().all_unique()
    }
}

/// Walks predecessor links from the end cell back to the start cell and marks every cell in
/// between as [TraversalState::Path]. The walk is bounded by the number of cells, so a cyclic
/// chain is reported instead of looping forever. A chain that ends anywhere but the current
/// start cell, which happens when roles were edited after the search, is reported as
/// [Error::BrokenChain] and nothing is marked.
pub fn reconstruct(grid: &mut Grid) -> Result<Route> {
    let end = grid.end().ok_or(Error::InvalidEndpoints)?;
    let mut positions = vec![end];
    let mut current = end;
    while let Some(prev) = grid.cell(current).predecessor() {
        if positions.len() > grid.len() {
            warn!("Predecessor chain from {} does not terminate", end);
            return Err(Error::BrokenChain { at: current });
        }
        positions.push(prev);
        current = prev;
    }
    if grid.start() != Some(current) {
        warn!("Predecessor chain from {} ends at {}, which is not the start", end, current);
        return Err(Error::BrokenChain { at: current });
    }
    positions.reverse();
    if let [_, between @ .., _] = positions.as_slice() {
        for pos in between {
            grid.cell_mut(*pos).state = TraversalState::Path;
        }
    }
    Ok(Route { positions })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(grid: &mut Grid, from: (i32, i32), to: (i32, i32)) {
        grid.cell_mut(to.into()).predecessor = Some(from.into());
    }

    #[test]
    fn walks_chain_and_marks_intermediate_cells() {
        let mut grid: Grid = "S..\n..E".parse().unwrap();
        link(&mut grid, (0, 0), (0, 1));
        link(&mut grid, (0, 1), (0, 2));
        link(&mut grid, (0, 2), (1, 2));
        let route = reconstruct(&mut grid).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.first(), Some(Position::new(0, 0)));
        assert_eq!(route.last(), Some(Position::new(1, 2)));
        assert!(route.is_valid_on(&grid));
        assert_eq!(grid.to_string(), "S**\n..E\n");
        assert_ne!(
            grid.cell_at(Position::new(1, 2)).unwrap().traversal_state(),
            TraversalState::Path
        );
    }

    #[test]
    fn chain_not_ending_at_start_is_broken() {
        let mut grid: Grid = "S..\n..E".parse().unwrap();
        link(&mut grid, (0, 1), (0, 2));
        link(&mut grid, (0, 2), (1, 2));
        assert_eq!(
            reconstruct(&mut grid),
            Err(Error::BrokenChain {
                at: Position::new(0, 1)
            })
        );
        assert!(grid
            .cells()
            .all(|c| c.traversal_state() != TraversalState::Path));
    }

    #[test]
    fn cyclic_chain_is_broken() {
        let mut grid: Grid = "S..\n..E".parse().unwrap();
        link(&mut grid, (0, 2), (1, 2));
        link(&mut grid, (1, 2), (0, 2));
        assert!(matches!(
            reconstruct(&mut grid),
            Err(Error::BrokenChain { .. })
        ));
    }

    #[test]
    fn missing_end_is_invalid() {
        let mut grid: Grid = "S..".parse().unwrap();
        assert_eq!(reconstruct(&mut grid), Err(Error::InvalidEndpoints));
    }

    #[test]
    fn validity_rejects_jumps_barriers_and_repeats() {
        let grid: Grid = "S#.\n...".parse().unwrap();
        let route = |v: &[(i32, i32)]| Route {
            positions: v.iter().map(|&p| p.into()).collect(),
        };
        assert!(route(&[(0, 0), (1, 0), (1, 1)]).is_valid_on(&grid));
        assert!(!route(&[(0, 0), (1, 1)]).is_valid_on(&grid));
        assert!(!route(&[(0, 0), (0, 1), (0, 2)]).is_valid_on(&grid));
        assert!(!route(&[(0, 0), (1, 0), (0, 0)]).is_valid_on(&grid));
    }
}
