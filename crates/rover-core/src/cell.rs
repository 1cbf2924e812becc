//! The [`Cell`] coordinate type.

use crate::direction::Direction;
use smallvec::SmallVec;
use std::fmt;

/// A grid coordinate `(row, col)`.
///
/// Rows grow southwards and columns grow eastwards, so `(0, 0)` is the
/// north-west corner of a terrain. Coordinates are signed: a rover standing
/// on the border of a terrain can name (and probe) the cell beyond it,
/// which senses as [`OffGrid`](crate::TerrainKind::OffGrid).
///
/// Ordering is row-major, matching the canonical ordering of
/// `TerrainGrid` and the order in which reports list cells.
///
/// # Examples
///
/// ```
/// use rover_core::{Cell, Direction};
///
/// let c = Cell::new(2, 3);
/// assert_eq!(c.neighbour(Direction::North), Cell::new(1, 3));
/// assert_eq!(c.neighbour(Direction::West), Cell::new(2, 2));
/// assert_eq!(c.manhattan(Cell::new(0, 0)), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (north to south).
    pub row: i32,
    /// Column index (west to east).
    pub col: i32,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent cell one step in `direction`.
    ///
    /// Saturates at the `i32` limits; terrains are bounded well inside them.
    pub fn neighbour(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// The four neighbours in the given direction order.
    pub fn neighbours_in(self, order: &[Direction]) -> SmallVec<[(Direction, Cell); 4]> {
        order.iter().map(|&d| (d, self.neighbour(d))).collect()
    }

    /// The direction leading from `self` to an orthogonally adjacent `other`.
    ///
    /// Returns `None` if the cells are not 4-adjacent.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbour(d) == other)
    }

    /// Returns `true` if `other` is one orthogonal step away.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan (L1) distance: the move count on an obstacle-free grid.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn neighbours_follow_order() {
        let c = Cell::new(1, 1);
        let n = c.neighbours_in(&Direction::ALL);
        assert_eq!(
            n.as_slice(),
            &[
                (Direction::North, Cell::new(0, 1)),
                (Direction::East, Cell::new(1, 2)),
                (Direction::South, Cell::new(2, 1)),
                (Direction::West, Cell::new(1, 0)),
            ]
        );
    }

    #[test]
    fn neighbour_may_leave_positive_quadrant() {
        let c = Cell::new(0, 0);
        assert_eq!(c.neighbour(Direction::North), Cell::new(-1, 0));
        assert_eq!(c.neighbour(Direction::West), Cell::new(0, -1));
    }

    #[test]
    fn direction_to_adjacent_and_distant() {
        let c = Cell::new(3, 3);
        assert_eq!(c.direction_to(Cell::new(3, 4)), Some(Direction::East));
        assert_eq!(c.direction_to(Cell::new(2, 3)), Some(Direction::North));
        assert_eq!(c.direction_to(Cell::new(4, 4)), None);
        assert_eq!(c.direction_to(c), None);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn display_format() {
        assert_eq!(Cell::new(-1, 4).to_string(), "(-1, 4)");
    }

    proptest! {
        #[test]
        fn step_and_step_back_is_identity(
            r in -1000i32..1000,
            c in -1000i32..1000,
            d in 0usize..4,
        ) {
            let dir = Direction::ALL[d];
            let start = Cell::new(r, c);
            let there = start.neighbour(dir);
            prop_assert!(start.is_adjacent(there));
            prop_assert_eq!(there.neighbour(dir.opposite()), start);
            prop_assert_eq!(start.direction_to(there), Some(dir));
        }
    }
}
