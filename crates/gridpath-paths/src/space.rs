use gridpath_core::{Grid, GridError, Pos};

use crate::algorithm::Algorithm;
use crate::result::SearchResult;

/// Sentinel distance meaning "not reached" (+infinity).
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-cell search state for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    /// Settled (BFS: discovered) during the run.
    pub visited: bool,
    /// Best known distance from the start, [`UNREACHABLE`] if none.
    pub distance: i32,
    /// Flat index of the predecessor on the best known path.
    pub previous: Option<usize>,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            visited: false,
            distance: UNREACHABLE,
            previous: None,
        }
    }
}

/// A* scores of one cell. `g` is [`UNREACHABLE`] until the cell is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub g: i32,
    pub h: i32,
    pub f: i32,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
        }
    }
}

// ---------------------------------------------------------------------------
// Heap entry for Dijkstra / A*
// ---------------------------------------------------------------------------

/// Reference into the node array, ordered for use in `BinaryHeap`.
///
/// Smallest `key` pops first; among equal keys, smallest `tie` pops first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: i32,
    pub(crate) tie: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// The working copy of a grid plus all run-scoped search state.
///
/// `SearchSpace` owns a private clone of the caller's grid, so a search never
/// touches the caller's layout. Predecessors are flat indices rather than
/// references: cloning a space yields a copy whose `previous` links point
/// into the copy.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    pub(crate) grid: Grid,
    pub(crate) nodes: Vec<NodeState>,
    // A* auxiliary scores, keyed by flat index.
    pub(crate) scores: Vec<Score>,
    // settle order of the current run
    pub(crate) order: Vec<Pos>,
    pub(crate) nbuf: Vec<Pos>,
    pub(crate) seq: u64,
}

impl SearchSpace {
    /// Create a search space over a private copy of `grid`.
    pub fn new(grid: &Grid) -> Self {
        let len = grid.len();
        Self {
            grid: grid.clone(),
            nodes: vec![NodeState::default(); len],
            scores: vec![Score::default(); len],
            order: Vec::new(),
            nbuf: Vec::with_capacity(4),
            seq: 0,
        }
    }

    /// The grid snapshot being searched.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Search state of `p` after the last run, `None` if out of bounds.
    pub fn node(&self, p: Pos) -> Option<NodeState> {
        self.grid.idx(p).map(|i| self.nodes[i])
    }

    /// A* scores of `p` after the last run. `None` unless the last run was
    /// A* and reached `p`.
    pub fn score(&self, p: Pos) -> Option<Score> {
        let s = self.scores[self.grid.idx(p)?];
        (s.g != UNREACHABLE).then_some(s)
    }

    /// Run `algorithm` from `start` to `target`.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        start: Pos,
        target: Pos,
    ) -> Result<SearchResult, GridError> {
        let result = match algorithm {
            Algorithm::Bfs => self.bfs(start, target),
            Algorithm::Dfs => self.dfs(start, target),
            Algorithm::Dijkstra => self.dijkstra(start, target),
            Algorithm::AStar => self.astar(start, target),
        }?;
        log::debug!(
            "{algorithm} {start} -> {target}: settled {} cells, {:?}",
            result.visited.len(),
            result.outcome()
        );
        Ok(result)
    }

    /// Follow `previous` links back from `p` and return the chain in
    /// start-to-`p` order. An unreached `p` yields `[p]`.
    pub fn path_to(&self, p: Pos) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut cur = self.grid.idx(p);
        while let Some(ci) = cur {
            path.push(self.grid.pos(ci));
            cur = self.nodes[ci].previous;
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Run helpers
    // -----------------------------------------------------------------------

    /// Validate the endpoints and reset all run state.
    pub(crate) fn prepare(&mut self, start: Pos, target: Pos) -> Result<(usize, usize), GridError> {
        let endpoints = self.grid.validate_endpoints(start, target)?;
        self.nodes.fill(NodeState::default());
        self.scores.fill(Score::default());
        self.order.clear();
        self.seq = 0;
        Ok(endpoints)
    }

    /// Append `idx` to the visitation order.
    #[inline]
    pub(crate) fn record(&mut self, idx: usize) {
        let p = self.grid.pos(idx);
        self.order.push(p);
    }

    /// Monotonic counter for heap tie-breaking.
    #[inline]
    pub(crate) fn next_seq(&mut self) -> u64 {
        let s = self.seq;
        self.seq += 1;
        s
    }

    /// Package the run into a [`SearchResult`].
    pub(crate) fn finish(&mut self, algorithm: Algorithm, start: Pos, target: Pos) -> SearchResult {
        SearchResult {
            algorithm,
            start,
            target,
            visited: std::mem::take(&mut self.order),
            path: self.path_to(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ref_orders_by_key_then_tie() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, key: 5, tie: 0 });
        heap.push(NodeRef { idx: 1, key: 3, tie: 9 });
        heap.push(NodeRef { idx: 2, key: 3, tie: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn fresh_space_has_no_state() {
        let g = Grid::new(2, 3, Pos::new(0, 0), Pos::new(1, 2)).unwrap();
        let space = SearchSpace::new(&g);
        assert_eq!(space.node(Pos::new(1, 1)), Some(NodeState::default()));
        assert_eq!(space.node(Pos::new(2, 0)), None);
        assert_eq!(space.score(Pos::new(0, 0)), None);
        assert_eq!(space.path_to(Pos::new(1, 2)), vec![Pos::new(1, 2)]);
    }

    #[test]
    fn clone_relinks_previous_into_copy() {
        let g = Grid::new(1, 4, Pos::new(0, 0), Pos::new(0, 3)).unwrap();
        let mut space = SearchSpace::new(&g);
        space.bfs(g.start(), g.target()).unwrap();
        let mut copy = space.clone();
        // Rewiring the copy leaves the original chain intact.
        copy.nodes[3].previous = None;
        assert_eq!(copy.path_to(Pos::new(0, 3)), vec![Pos::new(0, 3)]);
        assert_eq!(space.path_to(Pos::new(0, 3)).len(), 4);
    }

    #[test]
    fn prepare_resets_between_runs() {
        let g = Grid::new(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        let mut space = SearchSpace::new(&g);
        let first = space.astar(g.start(), g.target()).unwrap();
        let second = space.astar(g.start(), g.target()).unwrap();
        assert_eq!(first, second);
        space.bfs(g.start(), g.target()).unwrap();
        assert_eq!(space.score(Pos::new(0, 0)), None);
    }
}
