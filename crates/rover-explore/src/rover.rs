//! Movement and sensing shared by both explorers.
//!
//! [`Rover`] owns the map for one run and is the only place that probes the
//! sensor, spends battery, or changes position. Every move goes through
//! [`Rover::step`], which enforces adjacency, the known-`Open` destination
//! rule, and (for battery runs) the return-feasibility check.

use crate::config::{ExploreConfig, ReturnPlanner};
use crate::error::ExploreError;
use crate::map::MapModel;
use crate::metrics::ExploreMetrics;
use crate::navigation::{DistanceField, HomeDistance};
use crate::trail::{Step, StepKind};
use crate::ExplorationRun;
use rover_core::{Cell, Sensor, TerrainKind};
use std::borrow::Cow;
use tracing::trace;

pub(crate) struct Rover<'a, S: Sensor + ?Sized> {
    sensor: &'a S,
    config: &'a ExploreConfig,
    map: MapModel,
    home_distance: HomeDistance,
    metrics: ExploreMetrics,
    trail: Vec<Step>,
}

impl<'a, S: Sensor + ?Sized> Rover<'a, S> {
    /// Validate the configuration, probe `home`, and place the rover on it.
    ///
    /// Fails with [`ExploreError::InvalidStart`] if home is not `Open`.
    pub(crate) fn launch(
        sensor: &'a S,
        config: &'a ExploreConfig,
        home: Cell,
        battery: Option<u32>,
    ) -> Result<Self, ExploreError> {
        config.validate()?;

        let kind = sensor.probe(home);
        if kind != TerrainKind::Open {
            return Err(ExploreError::InvalidStart { cell: home, kind });
        }

        // Unbounded runs only read distances for the trail, so a full
        // rebuild per move would buy nothing.
        let planner = match battery {
            Some(_) => config.return_planner,
            None => ReturnPlanner::Incremental,
        };
        let mut rover = Self {
            sensor,
            config,
            map: MapModel::new(home, battery),
            home_distance: HomeDistance::new(planner, home),
            metrics: ExploreMetrics {
                probes: 1,
                ..ExploreMetrics::default()
            },
            trail: Vec::new(),
        };
        rover.map.record(home, kind)?;
        rover.map.occupy(home)?;
        rover.survey()?;
        Ok(rover)
    }

    pub(crate) fn map(&self) -> &MapModel {
        &self.map
    }

    pub(crate) fn config(&self) -> &ExploreConfig {
        self.config
    }

    pub(crate) fn position(&self) -> Cell {
        self.map.position()
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut ExploreMetrics {
        &mut self.metrics
    }

    /// Distances to home consistent with the current map.
    pub(crate) fn home_field(&self) -> Cow<'_, DistanceField> {
        self.home_distance
            .field(&self.map, &self.config.direction_order)
    }

    /// Probe every neighbour of the current cell that is not yet recorded.
    fn survey(&mut self) -> Result<(), ExploreError> {
        let here = self.map.position();
        for (_, nb) in here.neighbours_in(&self.config.direction_order) {
            if self.map.is_known(nb) {
                continue;
            }
            let kind = self.sensor.probe(nb);
            self.metrics.probes += 1;
            self.map.record(nb, kind)?;
            if kind.is_traversable() {
                self.home_distance
                    .on_open_recorded(&self.map, nb, &self.config.direction_order);
            }
        }
        Ok(())
    }

    /// Move one cell to `to` and survey on arrival.
    pub(crate) fn step(&mut self, to: Cell, kind: StepKind) -> Result<(), ExploreError> {
        let from = self.map.position();
        if !from.is_adjacent(to) {
            return Err(ExploreError::IllegalMove {
                from,
                to,
                reason: "destination is not adjacent",
            });
        }
        if kind == StepKind::Forward && self.map.is_visited(to) {
            return Err(ExploreError::IllegalMove {
                from,
                to,
                reason: "forward move into a visited cell",
            });
        }
        if !self.map.kind(to).is_traversable() {
            return Err(ExploreError::IllegalMove {
                from,
                to,
                reason: "destination is not known open terrain",
            });
        }

        let return_distance = self.home_field().distance(to);
        if let Some(battery) = self.map.battery_remaining() {
            let battery_after = battery
                .checked_sub(1)
                .ok_or(ExploreError::NegativeBattery { position: from })?;
            if return_distance.is_none_or(|d| battery_after < d) {
                return Err(ExploreError::ReturnInfeasible {
                    from,
                    to,
                    battery_after,
                    distance: return_distance,
                });
            }
        }

        self.map.drain_battery()?;
        self.map.occupy(to)?;

        self.metrics.moves += 1;
        match kind {
            StepKind::Forward => self.metrics.forward_moves += 1,
            StepKind::Backtrack => self.metrics.backtrack_moves += 1,
            StepKind::Transit => self.metrics.transit_moves += 1,
            StepKind::Return => self.metrics.return_moves += 1,
        }

        let battery_after = self.map.battery_remaining();
        trace!(%from, %to, ?kind, ?battery_after, ?return_distance, "move");
        if self.config.record_trail {
            self.trail.push(Step {
                from,
                to,
                kind,
                battery_after,
                return_distance,
            });
        }

        self.survey()
    }

    /// Walk the shortest known path home.
    pub(crate) fn return_home(&mut self) -> Result<(), ExploreError> {
        let here = self.map.position();
        let path = self
            .home_field()
            .path_home(&self.map, here, &self.config.direction_order)
            .ok_or(ExploreError::IllegalMove {
                from: here,
                to: self.map.home(),
                reason: "no known path home",
            })?;
        for cell in path {
            self.step(cell, StepKind::Return)?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> ExplorationRun {
        ExplorationRun {
            map: self.map,
            metrics: self.metrics,
            trail: self.trail,
        }
    }
}
