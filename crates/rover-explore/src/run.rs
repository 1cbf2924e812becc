//! Entry points and the result of a finished run.

use crate::battery::BatteryExplorer;
use crate::config::{ExploreConfig, DEFAULT_BATTERY};
use crate::coverage::{CoverageAnalyzer, ExplorationReport};
use crate::dfs::DfsExplorer;
use crate::error::ExploreError;
use crate::map::MapModel;
use crate::metrics::ExploreMetrics;
use crate::trail::Step;
use rover_core::Cell;
use rover_terrain::TerrainGrid;

/// Everything an explorer hands back when a run completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorationRun {
    /// The finished map, with the rover at home.
    pub map: MapModel,
    /// Counters collected during the run.
    pub metrics: ExploreMetrics,
    /// Every move in order. Empty when trail recording is disabled.
    pub trail: Vec<Step>,
}

impl ExplorationRun {
    /// Coverage of this run against the ground truth it was sensed from.
    pub fn report(&self, grid: &TerrainGrid) -> ExplorationReport {
        CoverageAnalyzer::analyze(&self.map, grid, self.metrics.clone())
    }

    fn into_parts(self, grid: &TerrainGrid) -> (MapModel, ExplorationReport) {
        let report = self.report(grid);
        (self.map, report)
    }
}

/// Map everything reachable from `home` with no battery limit.
pub fn explore_unbounded(
    grid: &TerrainGrid,
    home: Cell,
) -> Result<(MapModel, ExplorationReport), ExploreError> {
    explore_unbounded_with_config(grid, home, &ExploreConfig::default())
}

/// [`explore_unbounded`] with an explicit configuration.
pub fn explore_unbounded_with_config(
    grid: &TerrainGrid,
    home: Cell,
    config: &ExploreConfig,
) -> Result<(MapModel, ExplorationReport), ExploreError> {
    let run = DfsExplorer::new(grid, config).run(home)?;
    Ok(run.into_parts(grid))
}

/// Explore from `home` with `battery` units, always returning home.
pub fn explore_with_battery(
    grid: &TerrainGrid,
    home: Cell,
    battery: u32,
) -> Result<(MapModel, ExplorationReport), ExploreError> {
    explore_with_battery_with_config(grid, home, battery, &ExploreConfig::default())
}

/// [`explore_with_battery`] with an explicit configuration.
pub fn explore_with_battery_with_config(
    grid: &TerrainGrid,
    home: Cell,
    battery: u32,
    config: &ExploreConfig,
) -> Result<(MapModel, ExplorationReport), ExploreError> {
    let run = BatteryExplorer::new(grid, config).run(home, battery)?;
    Ok(run.into_parts(grid))
}

/// [`explore_with_battery`] with a full [`DEFAULT_BATTERY`] charge.
pub fn explore_with_default_battery(
    grid: &TerrainGrid,
    home: Cell,
) -> Result<(MapModel, ExplorationReport), ExploreError> {
    explore_with_battery(grid, home, DEFAULT_BATTERY)
}
