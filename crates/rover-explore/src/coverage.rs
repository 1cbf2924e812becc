//! Post-run coverage analysis against ground truth.
//!
//! The analyzer is the only place in this crate that looks at the full
//! [`TerrainGrid`]. Explorers never see it except through a
//! [`Sensor`](rover_core::Sensor).

use crate::map::MapModel;
use crate::metrics::ExploreMetrics;
use indexmap::IndexSet;
use rover_core::Cell;
use rover_terrain::{reachable_from, TerrainGrid};

/// Fraction of `reachable` cells found in `visited`.
///
/// An empty reachable set counts as fully covered.
pub fn coverage_ratio<'a>(
    visited: impl IntoIterator<Item = &'a Cell>,
    reachable: &IndexSet<Cell>,
) -> f64 {
    if reachable.is_empty() {
        return 1.0;
    }
    let hit = visited
        .into_iter()
        .filter(|c| reachable.contains(*c))
        .count();
    hit as f64 / reachable.len() as f64
}

/// Summary of how much of the reachable terrain a run covered.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorationReport {
    /// The run's start cell.
    pub home: Cell,
    /// `Open` cells reachable from home in ground truth.
    pub reachable_count: usize,
    /// Cells the rover stood on.
    pub visited_count: usize,
    /// `visited / reachable`, in `[0, 1]`.
    pub coverage_ratio: f64,
    /// Reachable cells never visited, in row-major order.
    pub unvisited_reachable: Vec<Cell>,
    /// `Open` cells cut off from home, in row-major order.
    pub unreachable_open: Vec<Cell>,
    /// Cells recorded in the map, including `OffGrid` neighbours.
    pub known_count: usize,
    /// Counters from the run.
    pub metrics: ExploreMetrics,
}

impl ExplorationReport {
    /// Returns `true` if every reachable cell was visited.
    pub fn is_complete(&self) -> bool {
        self.unvisited_reachable.is_empty()
    }
}

/// Builds [`ExplorationReport`]s from finished maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoverageAnalyzer;

impl CoverageAnalyzer {
    /// Compare `map` with ground truth. Neither input is modified.
    pub fn analyze(
        map: &MapModel,
        grid: &TerrainGrid,
        metrics: ExploreMetrics,
    ) -> ExplorationReport {
        let home = map.home();
        let reachable = reachable_from(grid, home);

        let mut unvisited_reachable = Vec::new();
        let mut unreachable_open = Vec::new();
        for cell in grid.open_cells() {
            if !reachable.contains(&cell) {
                unreachable_open.push(cell);
            } else if !map.is_visited(cell) {
                unvisited_reachable.push(cell);
            }
        }

        let visited: Vec<Cell> = map.visited_cells().collect();
        ExplorationReport {
            home,
            reachable_count: reachable.len(),
            visited_count: visited.len(),
            coverage_ratio: coverage_ratio(&visited, &reachable),
            unvisited_reachable,
            unreachable_open,
            known_count: map.known_count(),
            metrics,
        }
    }
}
