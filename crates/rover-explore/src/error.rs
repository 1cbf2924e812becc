//! Error types for exploration runs.
//!
//! Two families live here. [`ExploreError::InvalidStart`] and
//! [`ExploreError::Config`] are precondition failures a driver can act on.
//! The remaining variants are internal faults: they mean an explorer broke
//! one of its own invariants, and a run that reports one is a bug, never a
//! condition to retry or paper over.

use crate::config::ConfigError;
use rover_core::{Cell, TerrainKind};
use std::error::Error;
use std::fmt;

/// Errors from an exploration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExploreError {
    /// The start cell is not `Open` in ground truth. Raised before any
    /// traversal; no partial map is produced.
    InvalidStart {
        /// The requested home cell.
        cell: Cell,
        /// What the sensor reported for it.
        kind: TerrainKind,
    },
    /// The exploration configuration failed validation.
    Config(ConfigError),
    /// A move was attempted with an empty battery.
    NegativeBattery {
        /// Where the rover was standing.
        position: Cell,
    },
    /// A move would have left less energy than the known way home needs.
    ReturnInfeasible {
        /// Cell the move started from.
        from: Cell,
        /// Cell the move targeted.
        to: Cell,
        /// Battery that would remain after the move.
        battery_after: u32,
        /// Known distance from `to` back home, `None` if no known path.
        distance: Option<u32>,
    },
    /// A sensed kind disagrees with what the map already recorded.
    KnowledgeConflict {
        /// The cell in question.
        cell: Cell,
        /// The kind already in the map.
        recorded: TerrainKind,
        /// The conflicting kind.
        observed: TerrainKind,
    },
    /// A move that the movement rules forbid.
    IllegalMove {
        /// Cell the move started from.
        from: Cell,
        /// Cell the move targeted.
        to: Cell,
        /// Which rule was broken.
        reason: &'static str,
    },
}

impl ExploreError {
    /// Returns `true` for variants that signal a broken explorer invariant
    /// rather than a bad precondition.
    pub fn is_internal_fault(&self) -> bool {
        !matches!(self, Self::InvalidStart { .. } | Self::Config(_))
    }
}

impl fmt::Display for ExploreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart { cell, kind } => {
                write!(f, "start cell {cell} is {kind}, expected open terrain")
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::NegativeBattery { position } => {
                write!(f, "battery exhausted at {position} before reaching home")
            }
            Self::ReturnInfeasible {
                from,
                to,
                battery_after,
                distance,
            } => {
                write!(
                    f,
                    "move {from} -> {to} leaves {battery_after} units but the way home needs "
                )?;
                match distance {
                    Some(d) => write!(f, "{d}"),
                    None => write!(f, "an unknown path"),
                }
            }
            Self::KnowledgeConflict {
                cell,
                recorded,
                observed,
            } => write!(
                f,
                "cell {cell} recorded as {recorded} but sensed as {observed}"
            ),
            Self::IllegalMove { from, to, reason } => {
                write!(f, "illegal move {from} -> {to}: {reason}")
            }
        }
    }
}

impl Error for ExploreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ExploreError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
