//! Battery-constrained explorer.
//!
//! Explores in layers: every decision round picks the affordable frontier
//! cell closest to home, so the rover sweeps rings of increasing radius
//! instead of chasing one branch to the end. A frontier cell is affordable
//! when the walk to it plus the known way back fits in the remaining
//! battery. When nothing is affordable the rover retreats one step toward
//! home and looks again, which shortens every walk it might still take.
//!
//! Each individual move is checked again by the rover itself, so a planning
//! error surfaces as [`ExploreError::ReturnInfeasible`] rather than as a
//! stranded rover.

use crate::config::ExploreConfig;
use crate::error::ExploreError;
use crate::navigation::KnownBfs;
use crate::rover::Rover;
use crate::trail::StepKind;
use crate::ExplorationRun;
use rover_core::{Cell, Sensor};
use tracing::{debug, trace};

/// What the rover does next.
enum Plan {
    /// No slack left: walk straight home and stop.
    GoHome,
    /// Walk this path to a frontier target.
    Visit(Vec<Cell>),
    /// Nothing affordable from here: one step toward home.
    Retreat(Cell),
    /// At home with nothing affordable.
    Done,
}

/// Explorer that always keeps enough battery to get home.
///
/// # Examples
///
/// ```
/// use rover_core::Cell;
/// use rover_explore::{BatteryExplorer, ExploreConfig};
/// use rover_terrain::TerrainGrid;
///
/// let grid = TerrainGrid::new(5, 5).unwrap();
/// let config = ExploreConfig::default();
/// let run = BatteryExplorer::new(&grid, &config).run(Cell::new(0, 0), 4).unwrap();
/// assert_eq!(run.map.position(), Cell::new(0, 0));
/// assert_eq!(run.map.battery_remaining(), Some(0));
/// ```
pub struct BatteryExplorer<'a, S: Sensor + ?Sized> {
    sensor: &'a S,
    config: &'a ExploreConfig,
}

impl<'a, S: Sensor + ?Sized> BatteryExplorer<'a, S> {
    /// Bind an explorer to a sensor and configuration.
    pub fn new(sensor: &'a S, config: &'a ExploreConfig) -> Self {
        Self { sensor, config }
    }

    /// Explore from `home` with `battery` units of energy, one per move.
    ///
    /// The returned map always has the rover at `home`.
    pub fn run(&self, home: Cell, battery: u32) -> Result<ExplorationRun, ExploreError> {
        let mut rover = Rover::launch(self.sensor, self.config, home, Some(battery))?;
        debug!(%home, battery, "starting battery-constrained exploration");

        loop {
            let (plan, rejected) = plan_round(&rover)?;
            rover.metrics_mut().rejected_candidates += rejected;
            match plan {
                Plan::GoHome => {
                    rover.return_home()?;
                    break;
                }
                Plan::Visit(path) => {
                    for cell in path {
                        let kind = if rover.map().is_visited(cell) {
                            StepKind::Transit
                        } else {
                            StepKind::Forward
                        };
                        rover.step(cell, kind)?;
                    }
                }
                Plan::Retreat(cell) => {
                    rover.step(cell, StepKind::Return)?;
                    rover.metrics_mut().retreats += 1;
                }
                Plan::Done => break,
            }
        }

        let run = rover.finish();
        debug!(
            %home,
            battery_left = ?run.map.battery_remaining(),
            visited = run.map.visited_count(),
            moves = run.metrics.moves,
            retreats = run.metrics.retreats,
            rejected = run.metrics.rejected_candidates,
            "battery-constrained exploration finished"
        );
        Ok(run)
    }
}

/// Decide the next action from the rover's current state.
///
/// Also returns how many frontier cells were rejected as out of range.
fn plan_round<S: Sensor + ?Sized>(rover: &Rover<'_, S>) -> Result<(Plan, u64), ExploreError> {
    let map = rover.map();
    let order = &rover.config().direction_order;
    let here = rover.position();
    let home = map.home();
    let Some(battery) = map.battery_remaining() else {
        return Ok((Plan::Done, 0));
    };

    let field = rover.home_field();
    let here_home = field.distance(here).ok_or(ExploreError::IllegalMove {
        from: here,
        to: home,
        reason: "no known path home",
    })?;
    if battery == here_home {
        return Ok((Plan::GoHome, 0));
    }

    let travel = KnownBfs::run(map, here, order);
    let mut rejected = 0;
    let mut best: Option<((u32, u32, usize), Cell)> = None;
    for cell in map.frontier() {
        let (Some(t), Some(h)) = (travel.distance(cell), field.distance(cell)) else {
            continue;
        };
        if t + h > battery {
            trace!(%cell, travel = t, home_distance = h, battery, "frontier cell out of range");
            rejected += 1;
            continue;
        }
        let key = (h, t, map.discovery_rank(cell).unwrap_or(usize::MAX));
        if best.is_none_or(|(k, _)| key < k) {
            best = Some((key, cell));
        }
    }

    if let Some((_, target)) = best {
        let path = travel.path_to(target).ok_or(ExploreError::IllegalMove {
            from: here,
            to: target,
            reason: "no known path to frontier target",
        })?;
        return Ok((Plan::Visit(path), rejected));
    }

    if here == home {
        return Ok((Plan::Done, rejected));
    }
    let next = field
        .path_home(map, here, order)
        .and_then(|path| path.first().copied())
        .ok_or(ExploreError::IllegalMove {
            from: here,
            to: home,
            reason: "no known path home",
        })?;
    Ok((Plan::Retreat(next), rejected))
}
