use thiserror::Error;

use crate::grid::Position;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Start or end is unset, or both name the same cell.
    #[error("search needs distinct start and end cells")]
    InvalidEndpoints,

    #[error("position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// The predecessor walk did not lead back to the start cell.
    #[error("predecessor chain broken at {at}")]
    BrokenChain { at: Position },

    #[error("unexpected character {found:?} at row {row}, column {col}")]
    ParseMap { row: usize, col: usize, found: char },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map contains no cells")]
    EmptyMap,

    #[error("unknown search strategy {0:?}, expected one of bfs, dfs, greedy, astar")]
    UnknownStrategy(String),
}
