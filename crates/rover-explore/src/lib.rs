//! Exploration algorithms for the Rover engine.
//!
//! Two explorers share one movement layer:
//!
//! - [`DfsExplorer`] maps the whole reachable component with unbounded
//!   battery, backtracking along the edges it arrived by.
//! - [`BatteryExplorer`] spends one unit per move and never commits to a
//!   move it could not walk back from, sweeping outward by distance from
//!   home.
//!
//! Both build a [`MapModel`] from local sensing alone. The
//! [`CoverageAnalyzer`] compares the finished map with ground truth.
//!
//! The `explore_*` functions bundle a run and its report for callers that
//! hold a [`TerrainGrid`](rover_terrain::TerrainGrid). Callers with only a
//! [`Sensor`](rover_core::Sensor) use the explorers directly.
//!
//! Runs emit `tracing` events at `debug` (start and finish) and `trace`
//! (every move, every rejected frontier cell). Installing a subscriber is
//! up to the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod battery;
pub mod config;
pub mod coverage;
pub mod dfs;
pub mod error;
pub mod map;
pub mod metrics;
pub mod navigation;
pub(crate) mod rover;
pub mod run;
pub mod trail;

pub use battery::BatteryExplorer;
pub use config::{ConfigError, ExploreConfig, ReturnPlanner, DEFAULT_BATTERY};
pub use coverage::{coverage_ratio, CoverageAnalyzer, ExplorationReport};
pub use dfs::DfsExplorer;
pub use error::ExploreError;
pub use map::{DenseMap, MapModel};
pub use metrics::ExploreMetrics;
pub use navigation::{DistanceField, KnownBfs};
pub use run::{
    explore_unbounded, explore_unbounded_with_config, explore_with_battery,
    explore_with_battery_with_config, explore_with_default_battery, ExplorationRun,
};
pub use trail::{Step, StepKind};
