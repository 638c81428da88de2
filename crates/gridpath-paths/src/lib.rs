//! Search strategies for gridpath grids.
//!
//! This crate implements the four interchangeable strategies of the engine
//! on 4-connected, unit-cost grids:
//!
//! - **BFS** ([`SearchSpace::bfs`]): FIFO frontier, shortest in edge count
//! - **DFS** ([`SearchSpace::dfs`]): LIFO frontier, any path
//! - **Dijkstra** ([`SearchSpace::dijkstra`]): distance-ordered settling
//! - **A\*** ([`SearchSpace::astar`]): `f = g + h` ordering, Manhattan `h`
//!
//! Every run happens inside a [`SearchSpace`], which owns a private copy of
//! the grid together with the run-scoped state (visited flags, distances,
//! predecessors, A* scores). [`run_search`] is the one-call entry point.
//!
//! # Tie-breaking
//!
//! Neighbors are always expanded north, south, west, east. Dijkstra settles
//! equal distances first-in first-out; A* pops equal `f` last-in first-out.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod result;
mod space;
mod traits;

#[cfg(test)]
mod properties;

pub use algorithm::{Algorithm, ParseAlgorithmError, run_search};
pub use distance::manhattan;
pub use result::{Outcome, SearchResult};
pub use space::{NodeState, Score, SearchSpace, UNREACHABLE};
pub use traits::{AstarPather, Pather};
