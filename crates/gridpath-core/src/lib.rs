//! **gridpath-core**: grid pathfinding engine (core types).
//!
//! This crate provides the foundational types used across the *gridpath*
//! workspace: grid positions, cells, the value-type grid with its editing
//! primitives, configuration defaults, validation errors and the
//! cancellation context used by replay playback.

pub mod cell;
pub mod config;
pub mod context;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use config::{GridConfig, MazeConfig, PlaybackConfig};
pub use context::Context;
pub use error::GridError;
pub use geom::Pos;
pub use grid::{Grid, GridIter};
