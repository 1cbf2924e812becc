//! Ground-truth terrain for Rover simulations.
//!
//! A [`TerrainGrid`] is the bounded, immutable world an exploration run takes
//! place in. Explorers never read it directly: they go through the
//! [`Sensor`](rover_core::Sensor) implementation, which reports cells outside
//! the bounds as [`OffGrid`](rover_core::TerrainKind::OffGrid).
//!
//! The [`reachability`] module computes the flood-fill oracle that coverage
//! reports compare a finished run against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod reachability;

pub use error::TerrainError;
pub use grid::TerrainGrid;
pub use reachability::{is_reachable, reachable_from};
