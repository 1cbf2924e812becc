//! Core types and traits for the Rover exploration engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the terrain, exploration, and
//! reporting crates: grid cells, movement directions, terrain kinds, and
//! the [`Sensor`] trait through which every explorer learns about the
//! world.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod terrain;
pub mod traits;

pub use cell::Cell;
pub use direction::Direction;
pub use terrain::TerrainKind;
pub use traits::Sensor;
