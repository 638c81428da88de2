use gridpath_core::{Grid, Pos};

use crate::distance::manhattan;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`, in the order they
    /// should be expanded. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with an admissible heuristic, required by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(Grid::neighbors(self, p).filter(|&n| !self.is_wall(n)));
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_pather_skips_walls() {
        let g = Grid::from_ascii("S#\n.T").unwrap();
        let mut buf = Vec::new();
        Pather::neighbors(&g, Pos::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Pos::new(1, 0)]);
        assert_eq!(g.estimate(Pos::new(0, 0), Pos::new(1, 1)), 2);
    }
}
