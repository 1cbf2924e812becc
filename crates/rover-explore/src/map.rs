//! The rover's evolving knowledge of the terrain.
//!
//! A [`MapModel`] starts with every cell `Unknown` and grows monotonically:
//! a kind, once recorded, never changes for the rest of the run. It is
//! created by an explorer at the start of a run, mutated only by that
//! explorer, and handed out read-only once the run returns.

use crate::error::ExploreError;
use indexmap::{IndexMap, IndexSet};
use rover_core::{Cell, TerrainKind};

/// Per-run map of sensed cells, visited cells, and battery bookkeeping.
///
/// Recorded cells and visited cells both keep their insertion order, so two
/// runs over the same input can be compared element by element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapModel {
    home: Cell,
    position: Cell,
    known: IndexMap<Cell, TerrainKind>,
    visited: IndexSet<Cell>,
    battery: Option<u32>,
}

impl MapModel {
    /// Empty map for a run starting at `home`. `battery` is `None` for
    /// unbounded runs.
    pub(crate) fn new(home: Cell, battery: Option<u32>) -> Self {
        Self {
            home,
            position: home,
            known: IndexMap::new(),
            visited: IndexSet::new(),
            battery,
        }
    }

    /// The cell the run started from.
    pub fn home(&self) -> Cell {
        self.home
    }

    /// The rover's current cell.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Remaining battery, `None` for unbounded runs.
    pub fn battery_remaining(&self) -> Option<u32> {
        self.battery
    }

    /// Recorded kind of `cell`, or [`TerrainKind::Unknown`].
    pub fn kind(&self, cell: Cell) -> TerrainKind {
        self.known.get(&cell).copied().unwrap_or_default()
    }

    /// Returns `true` if `cell` has been sensed.
    pub fn is_known(&self, cell: Cell) -> bool {
        self.known.contains_key(&cell)
    }

    /// Returns `true` if the rover has stood on `cell`.
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Recorded cells and their kinds, in discovery order.
    pub fn known_cells(&self) -> impl Iterator<Item = (Cell, TerrainKind)> + '_ {
        self.known.iter().map(|(&c, &k)| (c, k))
    }

    /// Number of recorded cells (all kinds, including `OffGrid`).
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// Number of recorded cells of the given kind.
    pub fn count_of(&self, kind: TerrainKind) -> usize {
        self.known.values().filter(|&&k| k == kind).count()
    }

    /// Visited cells in first-visit order. `home` is always first.
    pub fn visited_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.visited.iter().copied()
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Recorded `Open` cells the rover has not stood on, in discovery order.
    pub fn frontier(&self) -> impl Iterator<Item = Cell> + '_ {
        self.known
            .iter()
            .filter(|(c, k)| k.is_traversable() && !self.visited.contains(*c))
            .map(|(&c, _)| c)
    }

    /// Position of `cell` in discovery order.
    pub fn discovery_rank(&self, cell: Cell) -> Option<usize> {
        self.known.get_index_of(&cell)
    }

    /// Record a sensed kind.
    ///
    /// Returns `Ok(true)` if the cell was new, `Ok(false)` if it was already
    /// recorded with the same kind.
    pub(crate) fn record(&mut self, cell: Cell, kind: TerrainKind) -> Result<bool, ExploreError> {
        match self.known.get(&cell) {
            Some(&recorded) if recorded == kind => Ok(false),
            Some(&recorded) => Err(ExploreError::KnowledgeConflict {
                cell,
                recorded,
                observed: kind,
            }),
            None if kind.is_known() => {
                self.known.insert(cell, kind);
                Ok(true)
            }
            None => Err(ExploreError::KnowledgeConflict {
                cell,
                recorded: TerrainKind::Unknown,
                observed: kind,
            }),
        }
    }

    /// Move the rover onto `cell`, which must be recorded `Open`.
    pub(crate) fn occupy(&mut self, cell: Cell) -> Result<(), ExploreError> {
        if !self.kind(cell).is_traversable() {
            return Err(ExploreError::IllegalMove {
                from: self.position,
                to: cell,
                reason: "destination is not known open terrain",
            });
        }
        self.position = cell;
        self.visited.insert(cell);
        Ok(())
    }

    /// Spend one unit of battery for a move. No-op for unbounded runs.
    pub(crate) fn drain_battery(&mut self) -> Result<(), ExploreError> {
        if let Some(b) = self.battery {
            let left = b.checked_sub(1).ok_or(ExploreError::NegativeBattery {
                position: self.position,
            })?;
            self.battery = Some(left);
        }
        Ok(())
    }

    /// Snapshot of the recorded in-grid cells as a dense rectangle.
    ///
    /// Covers the bounding box of every recorded `Open` cell. Obstacles
    /// inside the box are filled in and those outside it are dropped, as are
    /// `OffGrid` records. Cells inside the box that were never sensed read
    /// as `Unknown`.
    pub fn to_dense(&self) -> DenseMap {
        let mut open = self
            .known
            .iter()
            .filter(|(_, k)| k.is_traversable())
            .map(|(&c, _)| c);

        let Some(first) = open.next() else {
            return DenseMap::empty();
        };
        let (mut min_r, mut max_r) = (first.row, first.row);
        let (mut min_c, mut max_c) = (first.col, first.col);
        for c in open {
            min_r = min_r.min(c.row);
            max_r = max_r.max(c.row);
            min_c = min_c.min(c.col);
            max_c = max_c.max(c.col);
        }

        let rows = (max_r - min_r + 1) as usize;
        let cols = (max_c - min_c + 1) as usize;
        let mut cells = vec![TerrainKind::Unknown; rows * cols];
        for (&c, &k) in &self.known {
            let inside = (min_r..=max_r).contains(&c.row) && (min_c..=max_c).contains(&c.col);
            if k.is_ground_truth() && inside {
                let i = (c.row - min_r) as usize * cols + (c.col - min_c) as usize;
                cells[i] = k;
            }
        }

        DenseMap {
            origin: Cell::new(min_r, min_c),
            rows,
            cols,
            cells,
        }
    }
}

/// Row-major rectangle of terrain kinds exported from a [`MapModel`].
///
/// Coordinates passed to [`get`](Self::get) are relative to
/// [`origin`](Self::origin); [`kind_at`](Self::kind_at) takes absolute cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseMap {
    origin: Cell,
    rows: usize,
    cols: usize,
    cells: Vec<TerrainKind>,
}

impl DenseMap {
    fn empty() -> Self {
        Self {
            origin: Cell::new(0, 0),
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// Absolute coordinate of the top-left entry.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if nothing in-grid was recorded.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Kind at relative position `(row, col)`, `None` outside the rectangle.
    pub fn get(&self, row: usize, col: usize) -> Option<TerrainKind> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Kind at absolute `cell`, `None` outside the rectangle.
    pub fn kind_at(&self, cell: Cell) -> Option<TerrainKind> {
        let r = usize::try_from(cell.row - self.origin.row).ok()?;
        let c = usize::try_from(cell.col - self.origin.col).ok()?;
        self.get(r, c)
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[TerrainKind]> + '_ {
        self.cells.chunks(self.cols.max(1))
    }
}
