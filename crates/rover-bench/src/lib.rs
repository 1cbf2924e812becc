//! Benchmark terrain profiles for the Rover exploration engine.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 20% obstacles
//! - [`stress_profile`]: 316x316 grid (~100K cells), 20% obstacles
//!
//! Both place home at the grid centre and clear it, so every profile is a
//! valid start for either explorer.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rover_core::{Cell, TerrainKind};
use rover_terrain::{TerrainError, TerrainGrid};
use rover_test_utils::random_terrain;

/// A terrain and the cell to start exploring from.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Ground truth.
    pub grid: TerrainGrid,
    /// Start cell, always `Open`.
    pub home: Cell,
}

/// 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> Result<Profile, TerrainError> {
    scattered_profile(100, 100, 200, seed)
}

/// 316x316 grid (~100K cells). Same density as [`reference_profile`].
pub fn stress_profile(seed: u64) -> Result<Profile, TerrainError> {
    scattered_profile(316, 316, 200, seed)
}

/// Grid with obstacles scattered at `obstacle_permille / 1000` density.
///
/// Deterministic in `seed`, and identical to
/// [`random_terrain`](rover_test_utils::random_terrain) apart from the
/// centre cell, which is always cleared for home.
pub fn scattered_profile(
    rows: u32,
    cols: u32,
    obstacle_permille: u32,
    seed: u64,
) -> Result<Profile, TerrainError> {
    let mut grid = random_terrain(rows, cols, obstacle_permille, seed);
    let home = Cell::new((rows / 2) as i32, (cols / 2) as i32);
    grid.set(home, TerrainKind::Open)?;
    Ok(Profile { grid, home })
}
