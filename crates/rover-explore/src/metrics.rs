//! Per-run counters.
//!
//! [`ExploreMetrics`] is filled in by the explorer as the run progresses and
//! returned with the finished map. Consumers (reports, benchmarks, logs)
//! read it once the run is over.

/// Counters collected during a single exploration run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExploreMetrics {
    /// Total moves made. Equals battery consumed in battery runs.
    pub moves: u64,
    /// Moves onto a cell not visited before.
    pub forward_moves: u64,
    /// Depth-first moves retracing the edge used to arrive.
    pub backtrack_moves: u64,
    /// Battery-mode moves through already visited cells toward a target.
    pub transit_moves: u64,
    /// Moves toward home: retreats and the final walk back.
    pub return_moves: u64,
    /// Retreat steps taken because no frontier cell was affordable.
    pub retreats: u64,
    /// Sensor probes issued, including the initial probe of home.
    pub probes: u64,
    /// Frontier candidates skipped because the return budget could not
    /// cover them. A cell skipped over several rounds is counted each time.
    pub rejected_candidates: u64,
    /// Deepest depth-first stack reached (1 = only home).
    pub max_stack_depth: usize,
}
