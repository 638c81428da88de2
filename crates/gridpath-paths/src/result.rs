use gridpath_core::Pos;

use crate::algorithm::Algorithm;

/// Whether a search connected the start to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The path reaches back to the start; `steps` is its edge count.
    Found { steps: usize },
    /// The target was never settled.
    Unreachable,
}

/// The output of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub start: Pos,
    pub target: Pos,
    /// Cells in the order they were settled.
    pub visited: Vec<Pos>,
    /// Start to target inclusive when found; the target alone otherwise.
    pub path: Vec<Pos>,
}

impl SearchResult {
    /// Whether the path runs from the start to the target.
    pub fn is_found(&self) -> bool {
        self.path.first() == Some(&self.start) && self.path.last() == Some(&self.target)
    }

    pub fn outcome(&self) -> Outcome {
        match self.path_len() {
            Some(steps) => Outcome::Found { steps },
            None => Outcome::Unreachable,
        }
    }

    /// Edge count of the path, `None` if the target is unreachable.
    pub fn path_len(&self) -> Option<usize> {
        self.is_found().then(|| self.path.len() - 1)
    }

    /// Number of settled cells.
    #[inline]
    pub fn settled(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(path: Vec<Pos>) -> SearchResult {
        SearchResult {
            algorithm: Algorithm::Bfs,
            start: Pos::new(0, 0),
            target: Pos::new(0, 2),
            visited: Vec::new(),
            path,
        }
    }

    #[test]
    fn degenerate_path_is_unreachable() {
        let r = result(vec![Pos::new(0, 2)]);
        assert!(!r.is_found());
        assert_eq!(r.outcome(), Outcome::Unreachable);
        assert_eq!(result(Vec::new()).path_len(), None);
    }

    #[test]
    fn rooted_path_is_found() {
        let r = result(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(r.outcome(), Outcome::Found { steps: 2 });
    }
}
