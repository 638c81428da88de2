//! Random maze generation for gridpath grids.

pub mod mapgen;

pub use mapgen::{DEFAULT_WALL_PROBABILITY, MazeError, MazeGen, generate_maze};
