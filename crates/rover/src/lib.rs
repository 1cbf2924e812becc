//! Rover: map an unknown grid from local sensing, with or without a battery.
//!
//! This is the facade crate that re-exports the public API from the Rover
//! sub-crates. For most users, adding `rover` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rover::prelude::*;
//!
//! // 5x5 field with one boulder in the middle.
//! let grid = TerrainGrid::new(5, 5)
//!     .unwrap()
//!     .with_obstacles([Cell::new(2, 2)])
//!     .unwrap();
//!
//! // Unbounded: everything reachable gets mapped.
//! let (map, report) = explore_unbounded(&grid, Cell::new(0, 0)).unwrap();
//! assert_eq!(report.coverage_ratio, 1.0);
//! assert_eq!(map.kind(Cell::new(2, 2)), TerrainKind::Obstacle);
//!
//! // Four units of battery: the rover comes back, but sees much less.
//! let (map, report) = explore_with_battery(&grid, Cell::new(0, 0), 4).unwrap();
//! assert_eq!(map.position(), Cell::new(0, 0));
//! assert_eq!(map.battery_remaining(), Some(0));
//! assert!(!report.unvisited_reachable.is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rover-core` | Cells, directions, terrain kinds, the `Sensor` trait |
//! | [`terrain`] | `rover-terrain` | Ground-truth grids and flood-fill reachability |
//! | [`explore`] | `rover-explore` | Map model, explorers, coverage reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`rover-core`).
///
/// [`types::Cell`], [`types::Direction`], [`types::TerrainKind`], and the
/// [`types::Sensor`] trait explorers learn the world through.
pub use rover_core as types;

/// Ground truth (`rover-terrain`).
///
/// [`terrain::TerrainGrid`] and the [`terrain::reachable_from`] oracle.
pub use rover_terrain as terrain;

/// Exploration (`rover-explore`).
///
/// [`explore::DfsExplorer`], [`explore::BatteryExplorer`], the
/// [`explore::MapModel`] they build, and [`explore::CoverageAnalyzer`].
pub use rover_explore as explore;

/// Common imports for typical Rover usage.
///
/// ```rust
/// use rover::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use rover_core::{Cell, Direction, Sensor, TerrainKind};

    // Terrain
    pub use rover_terrain::{TerrainError, TerrainGrid};

    // Exploration
    pub use rover_explore::{
        explore_unbounded, explore_with_battery, explore_with_default_battery, BatteryExplorer,
        DfsExplorer, ExplorationReport, ExplorationRun, ExploreConfig, MapModel, ReturnPlanner,
    };

    // Errors
    pub use rover_explore::{ConfigError, ExploreError};
}
