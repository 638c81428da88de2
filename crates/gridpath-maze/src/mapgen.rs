//! Random wall generation.
//!
//! Each cell other than the start and target independently becomes a wall
//! with a fixed probability. Nothing guarantees that the target stays
//! reachable; searches report such layouts as unreachable.

use std::fmt;

use gridpath_core::{Cell, Grid, MazeConfig};
use rand::{Rng, RngExt};

/// Default chance for a cell to become a wall.
pub const DEFAULT_WALL_PROBABILITY: f64 = MazeConfig::DEFAULT_WALL_PROBABILITY;

/// Errors raised by maze generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MazeError {
    /// The wall probability is not within `[0, 1]`.
    InvalidProbability(f64),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability(p) => {
                write!(f, "wall probability must be within [0, 1], got {p}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

fn check_probability(p: f64) -> Result<(), MazeError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(MazeError::InvalidProbability(p))
    }
}

/// Maze generator operating on a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Replace the wall layout: every non-endpoint cell becomes a wall with
    /// chance `probability` and empty otherwise. Previous walls are
    /// discarded.
    ///
    /// Returns the number of walls placed.
    pub fn random_walls(&mut self, probability: f64) -> Result<usize, MazeError> {
        place_walls(&mut self.grid, probability, &mut self.rng)
    }

    /// Apply [`random_walls`](Self::random_walls) with the configured
    /// probability.
    pub fn generate(&mut self, cfg: &MazeConfig) -> Result<usize, MazeError> {
        self.random_walls(cfg.wall_probability)
    }

    /// Consume the generator, returning the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Return a copy of `grid` with a fresh random wall layout. The start and
/// target stay where they are.
pub fn generate_maze<R: Rng>(
    grid: &Grid,
    wall_probability: f64,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut maze = grid.clone();
    place_walls(&mut maze, wall_probability, rng)?;
    Ok(maze)
}

fn place_walls<R: Rng>(grid: &mut Grid, probability: f64, rng: &mut R) -> Result<usize, MazeError> {
    check_probability(probability)?;
    grid.map_cells(|_, _| {
        let r: f64 = rng.random();
        if r < probability { Cell::Wall } else { Cell::Empty }
    });
    let walls = grid.wall_count();
    log::debug!(
        "maze: {walls} walls on a {}x{} grid (p = {probability})",
        grid.rows(),
        grid.cols()
    );
    Ok(walls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{GridConfig, Pos};
    use gridpath_paths::{Algorithm, run_search};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn base() -> Grid {
        Grid::from_config(&GridConfig::default()).unwrap()
    }

    #[test]
    fn endpoints_survive() {
        let g = base();
        let mut rng = StdRng::seed_from_u64(7);
        let maze = generate_maze(&g, 1.0, &mut rng).unwrap();
        assert_eq!(maze.wall_count(), g.len() - 2);
        assert_eq!(maze.at(g.start()), Some(Cell::Start));
        assert_eq!(maze.at(g.target()), Some(Cell::Target));
        // the source grid is untouched
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn zero_probability_clears_walls() {
        let mut g = base();
        g.set_wall(Pos::new(0, 0), true).unwrap();
        let mut mg = MazeGen::with_grid(g, StdRng::seed_from_u64(1));
        assert_eq!(mg.random_walls(0.0), Ok(0));
        assert_eq!(mg.into_grid().wall_count(), 0);
    }

    #[test]
    fn default_density_is_roughly_a_quarter() {
        let mut mg = MazeGen::with_grid(base(), StdRng::seed_from_u64(42));
        let walls = mg.generate(&MazeConfig::default()).unwrap();
        let ratio = walls as f64 / (mg.grid.len() - 2) as f64;
        assert!((0.15..0.35).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn same_seed_same_maze() {
        let g = base();
        let a = generate_maze(&g, 0.25, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generate_maze(&g, 0.25, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_probability_is_rejected() {
        let g = base();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_maze(&g, 1.5, &mut rng),
            Err(MazeError::InvalidProbability(1.5))
        );
        assert!(generate_maze(&g, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn searches_handle_any_generated_maze() {
        let g = base();
        for seed in 0..20 {
            let maze = generate_maze(&g, 0.45, &mut StdRng::seed_from_u64(seed)).unwrap();
            let bfs = run_search(&maze, maze.start(), maze.target(), Algorithm::Bfs).unwrap();
            for a in Algorithm::ALL {
                let r = run_search(&maze, maze.start(), maze.target(), a).unwrap();
                assert_eq!(r.is_found(), bfs.is_found(), "seed {seed} {a}");
            }
        }
    }
}
