use gridpath_core::{GridError, Pos};

use crate::SearchSpace;
use crate::algorithm::Algorithm;
use crate::result::SearchResult;
use crate::traits::Pather;

impl SearchSpace {
    /// Depth-first search from `start` to `target`.
    ///
    /// A cell may be pushed several times but is settled only the first time
    /// it is popped; its predecessor is the cell that pushed that entry. The
    /// resulting path is generally not the shortest.
    pub fn dfs(&mut self, start: Pos, target: Pos) -> Result<SearchResult, GridError> {
        let (si, ti) = self.prepare(start, target)?;

        // (cell, cell that pushed it)
        let mut stack: Vec<(usize, Option<usize>)> = vec![(si, None)];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some((ci, parent)) = stack.pop() {
            if self.nodes[ci].visited {
                continue;
            }
            let depth = parent.map_or(0, |pi| self.nodes[pi].distance + 1);
            let n = &mut self.nodes[ci];
            n.visited = true;
            n.distance = depth;
            n.previous = parent;
            self.record(ci);
            if ci == ti {
                break;
            }

            nbuf.clear();
            Pather::neighbors(&self.grid, self.grid.pos(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                if !self.nodes[ni].visited {
                    stack.push((ni, Some(ci)));
                }
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(Algorithm::Dfs, start, target))
    }
}
