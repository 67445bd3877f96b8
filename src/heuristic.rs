use crate::cell::Cost;
use crate::grid::Position;
use grid_util::point::Point;

/// Largest coordinate magnitude for which [Point::manhattan_distance] can not overflow `i32`.
const POINT_RANGE: u32 = i32::MAX as u32 / 4;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two positions.
/// Admissible and consistent for unit-cost moves on a 4-neighbourhood. Distances too large for
/// [Cost] saturate at [INFINITE](crate::INFINITE).
pub fn manhattan(a: &Position, b: &Position) -> Cost {
    let in_range = [a.row, a.col, b.row, b.col]
        .iter()
        .all(|c| c.unsigned_abs() <= POINT_RANGE);
    if in_range {
        Point::from(*a).manhattan_distance(&Point::from(*b)) as Cost
    } else {
        a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
    }
}
