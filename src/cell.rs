use crate::grid::Position;

/// Integer cost type used for g, h and frontier keys. Every move costs one.
pub type Cost = u32;
/// Sentinel for a metric that has not been assigned during the current run.
pub const INFINITE: Cost = Cost::MAX;

/// What a cell is, as placed by the editor. Searches never change a role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
}

/// How far a search got with a cell. Independent of [Role].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalState {
    #[default]
    Unvisited,
    Frontier,
    Visited,
    Path,
}

/// A single grid position together with its role, traversal state and search metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    pub(crate) role: Role,
    pub(crate) state: TraversalState,
    pub(crate) predecessor: Option<Position>,
    pub(crate) g: Cost,
    pub(crate) h: Cost,
    pub(crate) key: Cost,
    pub(crate) in_frontier: bool,
}

impl Cell {
    pub(crate) fn new(position: Position) -> Cell {
        Cell {
            position,
            role: Role::Empty,
            state: TraversalState::Unvisited,
            predecessor: None,
            g: INFINITE,
            h: INFINITE,
            key: INFINITE,
            in_frontier: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn traversal_state(&self) -> TraversalState {
        self.state
    }
    /// The cell this one was reached from in the last search, if any.
    pub fn predecessor(&self) -> Option<Position> {
        self.predecessor
    }
    /// Cost from the start (g). [INFINITE] until the cell is discovered.
    pub fn distance_from_start(&self) -> Cost {
        self.g
    }
    /// Heuristic estimate to the end (h). [INFINITE] until the cell is discovered.
    pub fn heuristic(&self) -> Cost {
        self.h
    }
    /// The primary key this cell was last queued under.
    pub fn priority_key(&self) -> Cost {
        self.key
    }
    pub fn in_frontier(&self) -> bool {
        self.in_frontier
    }

    pub fn is_barrier(&self) -> bool {
        self.role == Role::Barrier
    }
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }
    pub fn is_end(&self) -> bool {
        self.role == Role::End
    }

    /// Clears search state. Barriers are left as they are and no role ever changes.
    pub(crate) fn reset(&mut self) {
        if self.is_barrier() {
            return;
        }
        self.state = TraversalState::Unvisited;
        self.predecessor = None;
        self.g = INFINITE;
        self.h = INFINITE;
        self.key = INFINITE;
        self.in_frontier = false;
    }
}
