use std::collections::BinaryHeap;

use gridpath_core::{GridError, Pos};

use crate::SearchSpace;
use crate::algorithm::Algorithm;
use crate::result::SearchResult;
use crate::space::NodeRef;
use crate::traits::Pather;

impl SearchSpace {
    /// Uniform-cost (Dijkstra) search from `start` to `target`.
    ///
    /// Every step costs 1. The unsettled cell with the smallest distance is
    /// settled next; equal distances are settled in the order they were
    /// queued. When the queue runs dry every remaining cell is at infinite
    /// distance and the search stops.
    pub fn dijkstra(&mut self, start: Pos, target: Pos) -> Result<SearchResult, GridError> {
        let (si, ti) = self.prepare(start, target)?;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        self.nodes[si].distance = 0;
        let tie = self.next_seq();
        open.push(NodeRef {
            idx: si,
            key: 0,
            tie,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = self.nodes[ci];
            // Skip stale entries.
            if cn.visited || current.key != cn.distance {
                continue;
            }
            self.nodes[ci].visited = true;
            self.record(ci);
            if ci == ti {
                break;
            }

            let candidate = cn.distance + 1;
            nbuf.clear();
            Pather::neighbors(&self.grid, self.grid.pos(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.visited || candidate >= n.distance {
                    continue;
                }
                n.distance = candidate;
                n.previous = Some(ci);
                let tie = self.next_seq();
                open.push(NodeRef {
                    idx: ni,
                    key: candidate,
                    tie,
                });
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(Algorithm::Dijkstra, start, target))
    }
}
