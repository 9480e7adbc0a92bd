//! **blockpath-core** — grid geometry and typed terrain storage.
//!
//! This crate provides the foundational types used by the *blockpath*
//! pathfinder: integer geometry primitives, terrain blocks carrying a
//! collidability flag, and a bounds-checked 2D [`Grid`] of blocks.

pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use terrain::Block;
