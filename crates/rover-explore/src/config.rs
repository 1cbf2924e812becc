//! Exploration configuration, validation, and error types.
//!
//! [`ExploreConfig`] is passed by reference to both explorers. Explorers
//! call [`validate()`](ExploreConfig::validate) before touching the sensor,
//! so a bad configuration never produces a partial map.

use rover_core::Direction;
use std::error::Error;
use std::fmt;

/// Battery capacity used by [`explore_with_default_battery`](crate::explore_with_default_battery).
pub const DEFAULT_BATTERY: u32 = 20;

// ── ReturnPlanner ──────────────────────────────────────────────────

/// How the battery explorer obtains known-map distances back to home.
///
/// Both strategies yield the same distances and therefore the same runs;
/// they differ only in cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReturnPlanner {
    /// Keep a distance field from home and relax it breadth-first each
    /// time a new `Open` cell is recorded.
    #[default]
    Incremental,
    /// Run a fresh breadth-first search from home whenever distances are
    /// needed.
    Rebuild,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ExploreConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `direction_order` is not a permutation of the four directions.
    DuplicateDirection {
        /// The first direction listed twice.
        duplicate: Direction,
        /// The first direction not listed at all.
        missing: Direction,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDirection { duplicate, missing } => write!(
                f,
                "direction_order lists {duplicate} twice and omits {missing}"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── ExploreConfig ──────────────────────────────────────────────────

/// Tunables shared by the depth-first and battery-constrained explorers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExploreConfig {
    /// Priority among neighbours when several are eligible. Also the order
    /// in which neighbours are probed. Default: North, East, South, West.
    pub direction_order: [Direction; 4],
    /// Distance-to-home strategy for the battery explorer. Unbounded runs
    /// always use [`ReturnPlanner::Incremental`].
    /// Default: [`ReturnPlanner::Incremental`].
    pub return_planner: ReturnPlanner,
    /// Record every move in the run's trail. Default: `true`.
    pub record_trail: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            direction_order: Direction::ALL,
            return_planner: ReturnPlanner::Incremental,
            record_trail: true,
        }
    }
}

impl ExploreConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = [false; 4];
        let mut duplicate = None;
        for d in self.direction_order {
            let slot = &mut seen[d as usize];
            if *slot && duplicate.is_none() {
                duplicate = Some(d);
            }
            *slot = true;
        }
        if let Some(duplicate) = duplicate {
            let missing = Direction::ALL
                .into_iter()
                .find(|d| !seen[*d as usize])
                .unwrap_or(duplicate);
            return Err(ConfigError::DuplicateDirection { duplicate, missing });
        }
        Ok(())
    }
}
