//! The sensing abstraction used by every explorer.

use crate::cell::Cell;
use crate::terrain::TerrainKind;

/// Read-only access to ground truth, one cell at a time.
///
/// Explorers never look at a terrain directly; they call `probe` and
/// record the answer in their own map. Implementations must be pure:
/// probing has no side effect on the caller's map, and probing the same
/// cell twice returns the same kind.
///
/// Implementations return [`TerrainKind::Open`], [`TerrainKind::Obstacle`],
/// or [`TerrainKind::OffGrid`], never [`TerrainKind::Unknown`].
pub trait Sensor {
    /// Sense the terrain kind of `cell`.
    fn probe(&self, cell: Cell) -> TerrainKind;
}

impl<S: Sensor + ?Sized> Sensor for &S {
    fn probe(&self, cell: Cell) -> TerrainKind {
        (**self).probe(cell)
    }
}
