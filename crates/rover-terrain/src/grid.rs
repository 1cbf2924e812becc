//! Bounded rectangular terrain with per-cell `Open`/`Obstacle` kinds.

use crate::error::TerrainError;
use rover_core::{Cell, Sensor, TerrainKind};

/// A two-dimensional terrain of `rows * cols` cells.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`, stored row-major. Every in-bounds cell is either
/// [`TerrainKind::Open`] or [`TerrainKind::Obstacle`]; anything outside
/// the bounds is [`TerrainKind::OffGrid`].
///
/// A terrain is mutable only while it is being assembled. Explorers borrow
/// it immutably (as a [`Sensor`]) for the duration of a run.
///
/// # Examples
///
/// ```
/// use rover_core::{Cell, Sensor, TerrainKind};
/// use rover_terrain::TerrainGrid;
///
/// let grid = TerrainGrid::new(3, 4)
///     .unwrap()
///     .with_obstacles([Cell::new(1, 1)])
///     .unwrap();
/// assert_eq!(grid.cell_count(), 12);
/// assert_eq!(grid.probe(Cell::new(1, 1)), TerrainKind::Obstacle);
/// assert_eq!(grid.probe(Cell::new(0, 0)), TerrainKind::Open);
/// assert_eq!(grid.probe(Cell::new(-1, 0)), TerrainKind::OffGrid);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    rows: u32,
    cols: u32,
    cells: Vec<TerrainKind>,
}

impl TerrainGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-`Open` terrain with `rows * cols` cells.
    ///
    /// Returns `Err(TerrainError::EmptyGrid)` if either dimension is 0, or
    /// `Err(TerrainError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, TerrainError> {
        Self::check_dims(rows, cols)?;
        let n = (rows as usize) * (cols as usize);
        Ok(Self {
            rows,
            cols,
            cells: vec![TerrainKind::Open; n],
        })
    }

    /// Create a terrain from row-major cell kinds.
    ///
    /// Rejects a vector whose length is not `rows * cols`, and any cell that
    /// is not `Open` or `Obstacle`.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<TerrainKind>) -> Result<Self, TerrainError> {
        Self::check_dims(rows, cols)?;
        let expected = (rows as usize) * (cols as usize);
        if cells.len() != expected {
            return Err(TerrainError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        if let Some(i) = cells.iter().position(|k| !k.is_ground_truth()) {
            return Err(TerrainError::InvalidTerrain {
                cell: Self::cell_at_rank(cols, i),
                kind: cells[i],
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Mark every listed cell as an obstacle.
    pub fn with_obstacles(
        mut self,
        obstacles: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, TerrainError> {
        for cell in obstacles {
            self.set(cell, TerrainKind::Obstacle)?;
        }
        Ok(self)
    }

    fn check_dims(rows: u32, cols: u32) -> Result<(), TerrainError> {
        if rows == 0 || cols == 0 {
            return Err(TerrainError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(TerrainError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(TerrainError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    fn cell_at_rank(cols: u32, rank: usize) -> Cell {
        let cols = cols as usize;
        Cell::new((rank / cols) as i32, (rank % cols) as i32)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if `cell` lies within the bounds.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.rows
            && (cell.col as u32) < self.cols
    }

    /// Position of `cell` in row-major order, or `None` if out of bounds.
    pub fn canonical_rank(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.cols as usize + cell.col as usize)
        } else {
            None
        }
    }

    /// Terrain kind at `cell`; [`TerrainKind::OffGrid`] outside the bounds.
    pub fn kind_at(&self, cell: Cell) -> TerrainKind {
        self.canonical_rank(cell)
            .map_or(TerrainKind::OffGrid, |i| self.cells[i])
    }

    /// Overwrite the kind of an in-bounds cell.
    pub fn set(&mut self, cell: Cell, kind: TerrainKind) -> Result<(), TerrainError> {
        if !kind.is_ground_truth() {
            return Err(TerrainError::InvalidTerrain { cell, kind });
        }
        let i = self
            .canonical_rank(cell)
            .ok_or(TerrainError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })?;
        self.cells[i] = kind;
        Ok(())
    }

    /// All cells in row-major order: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Self::cell_at_rank(cols, i))
    }

    /// All `Open` cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.canonical_ordering()
            .zip(self.cells.iter())
            .filter(|(_, k)| k.is_traversable())
            .map(|(c, _)| c)
    }

    /// Number of `Open` cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_traversable()).count()
    }
}

impl Sensor for TerrainGrid {
    fn probe(&self, cell: Cell) -> TerrainKind {
        self.kind_at(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_empty() {
        assert_eq!(TerrainGrid::new(0, 5), Err(TerrainError::EmptyGrid));
        assert_eq!(TerrainGrid::new(5, 0), Err(TerrainError::EmptyGrid));
    }

    #[test]
    fn new_rejects_oversized_dimension() {
        let err = TerrainGrid::new(TerrainGrid::MAX_DIM + 1, 1).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::DimensionTooLarge { name: "rows", .. }
        ));
    }

    #[test]
    fn new_is_all_open() {
        let g = TerrainGrid::new(2, 3).unwrap();
        assert_eq!(g.cell_count(), 6);
        assert_eq!(g.open_count(), 6);
    }

    #[test]
    fn from_cells_rejects_length_mismatch() {
        let err = TerrainGrid::from_cells(2, 2, vec![TerrainKind::Open; 3]).unwrap_err();
        assert_eq!(
            err,
            TerrainError::CellCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn from_cells_rejects_unknown_and_off_grid() {
        let mut cells = vec![TerrainKind::Open; 4];
        cells[3] = TerrainKind::Unknown;
        let err = TerrainGrid::from_cells(2, 2, cells).unwrap_err();
        assert_eq!(
            err,
            TerrainError::InvalidTerrain {
                cell: c(1, 1),
                kind: TerrainKind::Unknown
            }
        );

        let mut cells = vec![TerrainKind::Open; 4];
        cells[1] = TerrainKind::OffGrid;
        assert!(TerrainGrid::from_cells(2, 2, cells).is_err());
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut g = TerrainGrid::new(2, 2).unwrap();
        let err = g.set(c(2, 0), TerrainKind::Obstacle).unwrap_err();
        assert!(matches!(err, TerrainError::CellOutOfBounds { .. }));
        assert!(g.set(c(-1, 0), TerrainKind::Obstacle).is_err());
    }

    #[test]
    fn set_rejects_non_ground_truth() {
        let mut g = TerrainGrid::new(2, 2).unwrap();
        assert!(g.set(c(0, 0), TerrainKind::OffGrid).is_err());
        assert!(g.set(c(0, 0), TerrainKind::Unknown).is_err());
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn kind_at_reports_off_grid_outside() {
        let g = TerrainGrid::new(3, 3).unwrap();
        assert_eq!(g.kind_at(c(-1, 1)), TerrainKind::OffGrid);
        assert_eq!(g.kind_at(c(1, -1)), TerrainKind::OffGrid);
        assert_eq!(g.kind_at(c(3, 0)), TerrainKind::OffGrid);
        assert_eq!(g.kind_at(c(0, 3)), TerrainKind::OffGrid);
        assert_eq!(g.kind_at(c(2, 2)), TerrainKind::Open);
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let g = TerrainGrid::new(2, 2).unwrap();
        let cells: Vec<Cell> = g.canonical_ordering().collect();
        assert_eq!(cells, vec![c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(g.canonical_rank(*cell), Some(i));
        }
    }

    #[test]
    fn open_cells_skips_obstacles() {
        let g = TerrainGrid::new(2, 2)
            .unwrap()
            .with_obstacles([c(0, 1)])
            .unwrap();
        let open: Vec<Cell> = g.open_cells().collect();
        assert_eq!(open, vec![c(0, 0), c(1, 0), c(1, 1)]);
        assert_eq!(g.open_count(), 3);
    }

    // ── Sensor ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn probe_is_deterministic(
            rows in 1u32..8,
            cols in 1u32..8,
            r in -2i32..10,
            col in -2i32..10,
            blocked in proptest::collection::vec(any::<bool>(), 64),
        ) {
            let cells: Vec<TerrainKind> = (0..(rows * cols) as usize)
                .map(|i| if blocked[i] { TerrainKind::Obstacle } else { TerrainKind::Open })
                .collect();
            let g = TerrainGrid::from_cells(rows, cols, cells).unwrap();
            let cell = c(r, col);
            let first = g.probe(cell);
            prop_assert_ne!(first, TerrainKind::Unknown);
            for _ in 0..3 {
                prop_assert_eq!(g.probe(cell), first);
            }
            prop_assert_eq!(first == TerrainKind::OffGrid, !g.contains(cell));
        }
    }
}
