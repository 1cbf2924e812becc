//! Terrain classification.

use std::fmt;

/// Classification of a single cell.
///
/// Ground truth only ever holds [`Open`](Self::Open) and
/// [`Obstacle`](Self::Obstacle); [`OffGrid`](Self::OffGrid) is what a sensor
/// reports beyond the terrain's bounds. [`Unknown`](Self::Unknown) exists
/// only in a rover's map, for cells it has not sensed yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    /// Not sensed yet.
    #[default]
    Unknown,
    /// Traversable ground.
    Open,
    /// Impassable cell inside the terrain.
    Obstacle,
    /// Outside the terrain bounds.
    OffGrid,
}

impl TerrainKind {
    /// Returns `true` only for [`Open`](Self::Open).
    pub fn is_traversable(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns `true` for anything except [`Unknown`](Self::Unknown).
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns `true` for kinds that may appear in a terrain grid cell.
    pub fn is_ground_truth(self) -> bool {
        matches!(self, Self::Open | Self::Obstacle)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Open => write!(f, "open"),
            Self::Obstacle => write!(f, "obstacle"),
            Self::OffGrid => write!(f, "off-grid"),
        }
    }
}
