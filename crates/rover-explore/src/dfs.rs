//! Unbounded-battery depth-first explorer.
//!
//! Maps every `Open` cell reachable from home by walking an explicit stack
//! of frames instead of recursing, so grid size never limits stack depth.
//! The rover only ever moves to adjacent cells: it advances into the first
//! unvisited `Open` neighbour in direction order, and when a cell has none
//! left it retraces the edge it arrived by. The run ends back at home.

use crate::config::ExploreConfig;
use crate::error::ExploreError;
use crate::rover::Rover;
use crate::trail::StepKind;
use crate::ExplorationRun;
use rover_core::{Cell, Sensor};
use tracing::debug;

/// One level of the depth-first stack.
#[derive(Clone, Copy, Debug)]
struct Frame {
    cell: Cell,
    /// Index into the direction order of the next neighbour to try.
    next: usize,
}

/// Depth-first explorer with no battery limit.
///
/// # Examples
///
/// ```
/// use rover_core::Cell;
/// use rover_explore::{DfsExplorer, ExploreConfig};
/// use rover_terrain::TerrainGrid;
///
/// let grid = TerrainGrid::new(3, 3).unwrap();
/// let config = ExploreConfig::default();
/// let run = DfsExplorer::new(&grid, &config).run(Cell::new(1, 1)).unwrap();
/// assert_eq!(run.map.visited_count(), 9);
/// assert_eq!(run.map.position(), Cell::new(1, 1));
/// ```
pub struct DfsExplorer<'a, S: Sensor + ?Sized> {
    sensor: &'a S,
    config: &'a ExploreConfig,
}

impl<'a, S: Sensor + ?Sized> DfsExplorer<'a, S> {
    /// Bind an explorer to a sensor and configuration.
    pub fn new(sensor: &'a S, config: &'a ExploreConfig) -> Self {
        Self { sensor, config }
    }

    /// Explore from `home` until every reachable `Open` cell is visited.
    pub fn run(&self, home: Cell) -> Result<ExplorationRun, ExploreError> {
        let mut rover = Rover::launch(self.sensor, self.config, home, None)?;
        debug!(%home, "starting depth-first exploration");

        let order = rover.config().direction_order;
        let mut stack = vec![Frame { cell: home, next: 0 }];
        rover.metrics_mut().max_stack_depth = 1;

        while let Some(top) = stack.last_mut() {
            if top.next < order.len() {
                let nb = top.cell.neighbour(order[top.next]);
                top.next += 1;

                let map = rover.map();
                if map.kind(nb).is_traversable() && !map.is_visited(nb) {
                    rover.step(nb, StepKind::Forward)?;
                    stack.push(Frame { cell: nb, next: 0 });
                    let depth = stack.len();
                    let metrics = rover.metrics_mut();
                    metrics.max_stack_depth = metrics.max_stack_depth.max(depth);
                }
            } else {
                stack.pop();
                if let Some(parent) = stack.last() {
                    rover.step(parent.cell, StepKind::Backtrack)?;
                }
            }
        }

        let run = rover.finish();
        debug!(
            %home,
            visited = run.map.visited_count(),
            known = run.map.known_count(),
            moves = run.metrics.moves,
            max_depth = run.metrics.max_stack_depth,
            "depth-first exploration finished"
        );
        Ok(run)
    }
}
