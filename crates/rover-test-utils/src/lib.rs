//! Test utilities for Rover development.
//!
//! Provides terrain fixtures ([`grid_from_ascii`], [`random_terrain`]) and
//! a [`RecordingSensor`] that logs every probe an explorer makes.
//!
//! Fixture builders panic on malformed input: they are only ever called
//! from tests, where a panic with a clear message is the useful outcome.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rover_core::{Cell, Sensor, TerrainKind};
use rover_terrain::TerrainGrid;

/// Build a grid from rows of ASCII art.
///
/// `.` and `H` are open, `X` and `#` are obstacles. All rows must have the
/// same width.
///
/// ```
/// let grid = rover_test_utils::grid_from_ascii(&[
///     "H.X",
///     "...",
/// ]);
/// assert_eq!(grid.open_count(), 5);
/// ```
pub fn grid_from_ascii(rows: &[&str]) -> TerrainGrid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut cells = Vec::with_capacity(height * width);
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            width,
            "row {r} is {:?}, expected width {width}",
            line
        );
        for (c, ch) in line.chars().enumerate() {
            let kind = match ch {
                '.' | 'H' => TerrainKind::Open,
                'X' | '#' => TerrainKind::Obstacle,
                other => panic!("unexpected terrain character {other:?} at ({r}, {c})"),
            };
            cells.push(kind);
        }
    }
    match TerrainGrid::from_cells(height as u32, width as u32, cells) {
        Ok(grid) => grid,
        Err(e) => panic!("invalid ASCII grid: {e}"),
    }
}

/// Position of the first `marker` character in ASCII rows, row-major.
pub fn find_marker(rows: &[&str], marker: char) -> Option<Cell> {
    rows.iter().enumerate().find_map(|(r, line)| {
        line.chars()
            .position(|ch| ch == marker)
            .map(|c| Cell::new(r as i32, c as i32))
    })
}

/// Seeded random terrain.
///
/// Each cell is an obstacle with probability `obstacle_permille / 1000`.
/// The same arguments always produce the same grid.
pub fn random_terrain(rows: u32, cols: u32, obstacle_permille: u32, seed: u64) -> TerrainGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (0..u64::from(rows) * u64::from(cols))
        .map(|_| {
            if rng.next_u32() % 1000 < obstacle_permille {
                TerrainKind::Obstacle
            } else {
                TerrainKind::Open
            }
        })
        .collect();
    match TerrainGrid::from_cells(rows, cols, cells) {
        Ok(grid) => grid,
        Err(e) => panic!("invalid random terrain {rows}x{cols}: {e}"),
    }
}

/// Sensor wrapper that records every probed cell in order.
///
/// Lets tests check which cells an explorer looked at without changing
/// what it sees.
pub struct RecordingSensor<S> {
    inner: S,
    probes: RefCell<Vec<Cell>>,
}

impl<S: Sensor> RecordingSensor<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            probes: RefCell::new(Vec::new()),
        }
    }

    /// Every probed cell so far, in call order.
    pub fn probes(&self) -> Vec<Cell> {
        self.probes.borrow().clone()
    }

    pub fn probe_count(&self) -> usize {
        self.probes.borrow().len()
    }

    /// Forget recorded probes.
    pub fn clear(&self) {
        self.probes.borrow_mut().clear();
    }
}

impl<S: Sensor> Sensor for RecordingSensor<S> {
    fn probe(&self, cell: Cell) -> TerrainKind {
        self.probes.borrow_mut().push(cell);
        self.inner.probe(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_grid_reads_row_major() {
        let rows = ["..X", "H.."];
        let g = grid_from_ascii(&rows);
        assert_eq!((g.rows(), g.cols()), (2, 3));
        assert_eq!(g.kind_at(Cell::new(0, 2)), TerrainKind::Obstacle);
        assert_eq!(g.kind_at(Cell::new(1, 0)), TerrainKind::Open);
        assert_eq!(find_marker(&rows, 'H'), Some(Cell::new(1, 0)));
        assert_eq!(find_marker(&rows, 'Z'), None);
    }

    #[test]
    #[should_panic(expected = "expected width")]
    fn ragged_ascii_grid_panics() {
        grid_from_ascii(&["...", ".."]);
    }

    #[test]
    fn random_terrain_is_seeded() {
        let a = random_terrain(12, 9, 250, 7);
        let b = random_terrain(12, 9, 250, 7);
        let c = random_terrain(12, 9, 250, 8);
        let kinds = |g: &TerrainGrid| {
            g.canonical_ordering()
                .map(|c| g.kind_at(c))
                .collect::<Vec<_>>()
        };
        assert_eq!(kinds(&a), kinds(&b));
        assert_ne!(kinds(&a), kinds(&c));
    }

    #[test]
    fn random_terrain_extremes() {
        assert_eq!(random_terrain(5, 5, 0, 1).open_count(), 25);
        assert_eq!(random_terrain(5, 5, 1000, 1).open_count(), 0);
    }

    #[test]
    fn recording_sensor_passes_through() {
        let g = grid_from_ascii(&[".X"]);
        let s = RecordingSensor::new(&g);
        assert_eq!(s.probe(Cell::new(0, 1)), TerrainKind::Obstacle);
        assert_eq!(s.probe(Cell::new(0, 2)), TerrainKind::OffGrid);
        assert_eq!(s.probes(), vec![Cell::new(0, 1), Cell::new(0, 2)]);
        s.clear();
        assert_eq!(s.probe_count(), 0);
    }
}
