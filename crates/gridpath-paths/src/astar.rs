use std::collections::BinaryHeap;

use gridpath_core::{GridError, Pos};

use crate::SearchSpace;
use crate::algorithm::Algorithm;
use crate::result::SearchResult;
use crate::space::{NodeRef, Score};
use crate::traits::{AstarPather, Pather};

impl SearchSpace {
    /// A* search from `start` to `target` with the Manhattan heuristic.
    ///
    /// The open cell with the smallest `f = g + h` is expanded next; among
    /// equal `f` the most recently queued cell wins, which keeps the search
    /// heading toward the target on open ground. This is last-in first-out,
    /// unlike the queue-order ties of [`dijkstra`](Self::dijkstra). A cell improved while
    /// already open is re-queued and its older entry is discarded when
    /// popped, so each cell is expanded at most once.
    pub fn astar(&mut self, start: Pos, target: Pos) -> Result<SearchResult, GridError> {
        let (si, ti) = self.prepare(start, target)?;

        let h = self.grid.estimate(start, target);
        self.scores[si] = Score { g: 0, h, f: h };
        self.nodes[si].distance = 0;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let tie = u64::MAX - self.next_seq();
        open.push(NodeRef {
            idx: si,
            key: h,
            tie,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Skip stale entries.
            if self.nodes[ci].visited || current.key != self.scores[ci].f {
                continue;
            }
            self.nodes[ci].visited = true;
            self.record(ci);
            if ci == ti {
                break;
            }

            let current_point = self.grid.pos(ci);
            let tentative_g = self.scores[ci].g + 1;

            nbuf.clear();
            Pather::neighbors(&self.grid, current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                if tentative_g >= self.scores[ni].g {
                    continue;
                }
                let h = self.grid.estimate(np, target);
                let f = tentative_g + h;
                self.scores[ni] = Score {
                    g: tentative_g,
                    h,
                    f,
                };
                let n = &mut self.nodes[ni];
                n.distance = tentative_g;
                n.previous = Some(ci);
                let tie = u64::MAX - self.next_seq();
                open.push(NodeRef { idx: ni, key: f, tie });
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(Algorithm::AStar, start, target))
    }
}
