use crate::cell::{Cell, Role, TraversalState};
use crate::error::{Error, Result};
use crate::{DEFAULT_GRID_SIZE, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{Grid as _, SimpleGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// A (row, col) coordinate. Rows grow downwards. Positions outside a grid can be represented
/// and are rejected with [Error::OutOfBounds] when used to address a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }
    /// The four orthogonal neighbours in search order: down, up, right, left.
    /// The order is part of the tie-breaking behaviour of every strategy.
    pub fn neumann_neighborhood(&self) -> [Position; 4] {
        [
            Position::new(self.row + 1, self.col),
            Position::new(self.row - 1, self.col),
            Position::new(self.row, self.col + 1),
            Position::new(self.row, self.col - 1),
        ]
    }
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Position {
        Position::new(row, col)
    }
}

/// Columns run along x and rows along y.
impl From<Position> for Point {
    fn from(pos: Position) -> Point {
        Point::new(pos.col, pos.row)
    }
}

impl From<Point> for Position {
    fn from(point: Point) -> Position {
        Position::new(point.y, point.x)
    }
}

/// [Grid] owns every [Cell] in a row-major [SimpleGrid] and keeps track of where the start
/// and end roles currently are. Adjacency is never stored: it is derived from the barrier roles
/// each time it is asked for, so editing roles between runs can not leave stale edges behind.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleGrid<Cell>,
    start: Option<Position>,
    end: Option<Position>,
}

impl PartialEq for Grid {
    fn eq(&self, other: &Grid) -> bool {
        self.cells.width == other.cells.width
            && self.cells.height == other.cells.height
            && self.cells.values == other.cells.values
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Grid {}

impl Default for Grid {
    fn default() -> Grid {
        Grid::square(DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Grid {
        let mut cells = SimpleGrid::new(cols, rows, Cell::new(Position::new(0, 0)));
        for row in 0..rows {
            for col in 0..cols {
                let pos = Position::new(row as i32, col as i32);
                cells.set_point(pos.into(), Cell::new(pos));
            }
        }
        Grid {
            cells,
            start: None,
            end: None,
        }
    }
    pub fn square(size: usize) -> Grid {
        Grid::new(size, size)
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }
    pub fn cols(&self) -> usize {
        self.cells.width()
    }
    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.values.is_empty()
    }
    pub fn start(&self) -> Option<Position> {
        self.start
    }
    pub fn end(&self) -> Option<Position> {
        self.end
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values.iter()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.cells.point_in_bounds(pos.into())
    }
    /// Row-major index of a position.
    pub fn index_of(&self, pos: Position) -> Result<usize> {
        if self.in_bounds(pos) {
            Ok(self.ix(pos))
        } else {
            Err(Error::OutOfBounds {
                position: pos,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
    pub fn cell_at(&self, pos: Position) -> Result<&Cell> {
        self.index_of(pos).map(|ix| &self.cells.values[ix])
    }

    fn ix(&self, pos: Position) -> usize {
        self.cells.get_ix_point(&pos.into())
    }
    /// Only called with positions that have already been bounds checked.
    pub(crate) fn cell(&self, pos: Position) -> &Cell {
        &self.cells.values[self.ix(pos)]
    }
    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let ix = self.ix(pos);
        &mut self.cells.values[ix]
    }

    pub fn can_move_to(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.cell(pos).is_barrier()
    }

    /// The in-bounds, non-barrier orthogonal neighbours of `pos`, ordered down, up, right, left.
    pub fn neighbors(&self, pos: Position) -> Result<SmallVec<[Position; N_SMALLVEC_SIZE]>> {
        self.index_of(pos)?;
        Ok(self.neighborhood_points(&pos))
    }
    pub(crate) fn neighborhood_points(
        &self,
        pos: &Position,
    ) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    /// Start and end positions, provided both are set and distinct.
    pub fn endpoints(&self) -> Result<(Position, Position)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start != end => Ok((start, end)),
            _ => Err(Error::InvalidEndpoints),
        }
    }

    /// Clears the search state of every cell. Roles and barriers are unaffected.
    pub fn reset_all(&mut self) {
        debug!("Resetting search state of {} cells", self.len());
        self.cells.values.iter_mut().for_each(Cell::reset);
    }

    /// Assigns a role, keeping the single start and single end bookkeeping consistent. A
    /// previous start (or end) elsewhere becomes empty; an endpoint overwritten by another role
    /// is unset.
    pub fn set_role(&mut self, pos: Position, role: Role) -> Result<()> {
        self.index_of(pos)?;
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
        match role {
            Role::Start => {
                if let Some(old) = self.start.replace(pos) {
                    self.cell_mut(old).role = Role::Empty;
                }
            }
            Role::End => {
                if let Some(old) = self.end.replace(pos) {
                    self.cell_mut(old).role = Role::Empty;
                }
            }
            Role::Empty | Role::Barrier => {}
        }
        let cell = self.cell_mut(pos);
        // Barriers are skipped by reset, so drop the old role first.
        cell.role = Role::Empty;
        cell.reset();
        cell.role = role;
        debug!("Cell {} is now {:?}", pos, role);
        Ok(())
    }
    pub fn set_start(&mut self, pos: Position) -> Result<()> {
        self.set_role(pos, Role::Start)
    }
    pub fn set_end(&mut self, pos: Position) -> Result<()> {
        self.set_role(pos, Role::End)
    }
    pub fn set_barrier(&mut self, pos: Position) -> Result<()> {
        self.set_role(pos, Role::Barrier)
    }
    pub fn clear(&mut self, pos: Position) -> Result<()> {
        self.set_role(pos, Role::Empty)
    }

    /// Click-style placement: the first placement sets the start, the next one the end and
    /// every later one a barrier. Placing onto the current start or end does nothing. Returns
    /// the role that was placed, if any.
    pub fn place(&mut self, pos: Position) -> Result<Option<Role>> {
        self.index_of(pos)?;
        if self.start == Some(pos) || self.end == Some(pos) {
            return Ok(None);
        }
        let role = if self.start.is_none() {
            Role::Start
        } else if self.end.is_none() {
            Role::End
        } else {
            Role::Barrier
        };
        self.set_role(pos, role)?;
        Ok(Some(role))
    }

    /// Generates a [UnionFind] structure over cell indices and links up open neighbours.
    pub fn connected_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.len());
        for cell in self.cells().filter(|c| !c.is_barrier()) {
            let point = cell.position();
            // Down and right suffice: every edge is seen from one of its ends.
            for p in [
                Position::new(point.row + 1, point.col),
                Position::new(point.row, point.col + 1),
            ] {
                if self.can_move_to(p) {
                    components.union(self.ix(point), self.ix(p));
                }
            }
        }
        components
    }
    /// Checks if `a` and `b` are open and on the same connected component.
    pub fn reachable(&self, a: Position, b: Position) -> Result<bool> {
        let (a_ix, b_ix) = (self.index_of(a)?, self.index_of(b)?);
        if self.cells.values[a_ix].is_barrier() || self.cells.values[b_ix].is_barrier() {
            return Ok(false);
        }
        Ok(self.connected_components().equiv(a_ix, b_ix))
    }
    /// Number of open cells connected to `pos`, including itself. Zero for a barrier.
    pub fn component_size(&self, pos: Position) -> Result<usize> {
        let ix = self.index_of(pos)?;
        if self.cells.values[ix].is_barrier() {
            return Ok(0);
        }
        let labels = self.connected_components().into_labeling();
        Ok(labels.iter().filter(|&&label| label == labels[ix]).count())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.values.chunks(self.cols().max(1)) {
            let line: String = row
                .iter()
                .map(|cell| match (cell.role(), cell.traversal_state()) {
                    (Role::Start, _) => 'S',
                    (Role::End, _) => 'E',
                    (Role::Barrier, _) => '#',
                    (Role::Empty, TraversalState::Unvisited) => '.',
                    (Role::Empty, TraversalState::Frontier) => 'o',
                    (Role::Empty, TraversalState::Visited) => 'x',
                    (Role::Empty, TraversalState::Path) => '*',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses a map with one line per row: `.` empty, `#` barrier, `S` start, `E` end.
/// Blank lines before the first row and after the last one are ignored; a blank line in between
/// is an empty row and fails as [Error::RaggedMap].
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Grid> {
        let lines: Vec<&str> = s.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|line| !line.is_empty());
        let last = lines.iter().rposition(|line| !line.is_empty());
        let lines = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(Error::EmptyMap),
        };
        let cols = lines[0].chars().count();
        let mut grid = Grid::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(Error::RaggedMap {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                let role = match c {
                    '.' => continue,
                    '#' => Role::Barrier,
                    'S' if grid.start.is_none() => Role::Start,
                    'E' if grid.end.is_none() => Role::End,
                    found => return Err(Error::ParseMap { row, col, found }),
                };
                grid.set_role(pos, role)?;
            }
        }
        Ok(grid)
    }
}
