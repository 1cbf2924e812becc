//! The ordered log of moves made during a run.

use rover_core::Cell;

/// Why a move was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Onto a cell not visited before.
    Forward,
    /// Depth-first retreat along the edge used to arrive.
    Backtrack,
    /// Through an already visited cell on the way to a frontier target.
    Transit,
    /// Toward home, either a retreat or the final walk back.
    Return,
}

/// A single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Cell the move started from.
    pub from: Cell,
    /// Cell the move ended on.
    pub to: Cell,
    /// Why the move was made.
    pub kind: StepKind,
    /// Battery left after the move, `None` for unbounded runs.
    pub battery_after: Option<u32>,
    /// Known-map distance from `to` back home at the time of the move.
    pub return_distance: Option<u32>,
}

impl Step {
    /// Slack between remaining battery and the known way home.
    ///
    /// `None` for unbounded runs or when no path home was known.
    pub fn slack(&self) -> Option<i64> {
        Some(i64::from(self.battery_after?) - i64::from(self.return_distance?))
    }
}
