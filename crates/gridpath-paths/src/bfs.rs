use std::collections::VecDeque;

use gridpath_core::{GridError, Pos};

use crate::SearchSpace;
use crate::algorithm::Algorithm;
use crate::result::SearchResult;
use crate::traits::Pather;

impl SearchSpace {
    /// Breadth-first search from `start` to `target`.
    ///
    /// Cells are marked visited when enqueued, so each cell enters the queue
    /// at most once. The visitation order is the dequeue order and the path
    /// is shortest in edge count.
    pub fn bfs(&mut self, start: Pos, target: Pos) -> Result<SearchResult, GridError> {
        let (si, ti) = self.prepare(start, target)?;

        let mut queue: VecDeque<usize> = VecDeque::new();
        let sn = &mut self.nodes[si];
        sn.visited = true;
        sn.distance = 0;
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            self.record(ci);
            if ci == ti {
                break;
            }

            let cp = self.grid.pos(ci);
            let next_dist = self.nodes[ci].distance + 1;

            nbuf.clear();
            Pather::neighbors(&self.grid, cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.visited {
                    continue;
                }
                n.visited = true;
                n.distance = next_dist;
                n.previous = Some(ci);
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(Algorithm::Bfs, start, target))
    }
}
