//! Error types for terrain construction.

use rover_core::{Cell, TerrainKind};
use std::fmt;

/// Errors arising from terrain construction or modification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerrainError {
    /// Attempted to construct a terrain with zero rows or columns.
    EmptyGrid,
    /// A dimension exceeds the maximum representable coordinate.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// The supplied cell vector does not match `rows * cols`.
    CellCountMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A cell kind that cannot appear in ground truth.
    InvalidTerrain {
        /// The offending cell.
        cell: Cell,
        /// The rejected kind (`Unknown` or `OffGrid`).
        kind: TerrainKind,
    },
    /// A cell lies outside the terrain bounds.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Number of rows in the terrain.
        rows: u32,
        /// Number of columns in the terrain.
        cols: u32,
    },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "terrain must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::InvalidTerrain { cell, kind } => {
                write!(f, "cell {cell} cannot hold {kind} terrain")
            }
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl std::error::Error for TerrainError {}
