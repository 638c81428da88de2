//! [`Replay`]: the lazy event sequence of one search result.

use std::sync::Arc;
use std::time::Duration;

use gridpath_core::{Context, Pos};
use gridpath_paths::SearchResult;

use crate::error::ReplayError;
use crate::event::{EventKind, ReplayEvent, offset};

/// A finite, restartable sequence of timed replay events.
///
/// Visit `i` fires at `i × speed`; path cell `j` fires at
/// `(visited.len() + j) × speed`. Events are produced on demand, in
/// non-decreasing time order, and the sequence ends early once its
/// [`Context`] is cancelled.
#[derive(Debug, Clone)]
pub struct Replay {
    visited: Arc<[Pos]>,
    path: Arc<[Pos]>,
    speed: Duration,
    ctx: Context,
    cursor: usize,
}

impl Replay {
    /// Create a standalone replay with its own context.
    pub fn new(visited: Vec<Pos>, path: Vec<Pos>, speed: Duration) -> Result<Self, ReplayError> {
        Self::with_context(visited, path, speed, Context::new())
    }

    /// Create a replay of a search result.
    pub fn from_result(result: &SearchResult, speed: Duration) -> Result<Self, ReplayError> {
        Self::new(result.visited.clone(), result.path.clone(), speed)
    }

    pub(crate) fn with_context(
        visited: Vec<Pos>,
        path: Vec<Pos>,
        speed: Duration,
        ctx: Context,
    ) -> Result<Self, ReplayError> {
        if speed.is_zero() {
            return Err(ReplayError::ZeroSpeed);
        }
        Ok(Self {
            visited: visited.into(),
            path: path.into(),
            speed,
            ctx,
            cursor: 0,
        })
    }

    /// Total number of events.
    #[inline]
    pub fn len(&self) -> usize {
        self.visited.len() + self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Virtual time at which the last event has fired and playback is over.
    pub fn duration(&self) -> Duration {
        offset(self.speed, self.len())
    }

    /// The `n`-th event, ignoring the cursor and cancellation.
    pub fn event(&self, n: usize) -> Option<ReplayEvent> {
        let v = self.visited.len();
        let (pos, kind) = if n < v {
            (self.visited[n], EventKind::Visit { index: n })
        } else {
            let j = n - v;
            (*self.path.get(j)?, EventKind::Path { index: j })
        };
        Some(ReplayEvent {
            at: offset(self.speed, n),
            pos,
            kind,
        })
    }

    /// Rewind to the first event.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// The cancellation context this replay observes.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn is_cancelled(&self) -> bool {
        self.ctx.is_done()
    }
}

impl Iterator for Replay {
    type Item = ReplayEvent;

    fn next(&mut self) -> Option<ReplayEvent> {
        if self.ctx.is_done() {
            return None;
        }
        let e = self.event(self.cursor)?;
        self.cursor += 1;
        Some(e)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len().saturating_sub(self.cursor);
        (0, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Grid;
    use gridpath_paths::{Algorithm, run_search};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn timeline_follows_visit_then_path() {
        let visited = vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)];
        let path = vec![Pos::new(0, 0), Pos::new(0, 2)];
        let replay = Replay::new(visited, path, ms(10)).unwrap();
        let events: Vec<ReplayEvent> = replay.collect();
        let times: Vec<Duration> = events.iter().map(|e| e.at).collect();
        assert_eq!(times, vec![ms(0), ms(10), ms(20), ms(30), ms(40)]);
        assert_eq!(events[2].kind, EventKind::Visit { index: 2 });
        assert_eq!(events[3].kind, EventKind::Path { index: 0 });
        assert_eq!(events[4].pos, Pos::new(0, 2));
        assert_eq!(events.iter().filter(|e| e.is_path()).count(), 2);
    }

    #[test]
    fn duration_and_random_access() {
        let replay = Replay::new(vec![Pos::ZERO; 4], vec![Pos::ZERO; 3], ms(5)).unwrap();
        assert_eq!(replay.len(), 7);
        assert_eq!(replay.duration(), ms(35));
        assert_eq!(replay.event(6).map(|e| e.at), Some(ms(30)));
        assert_eq!(replay.event(7), None);
    }

    #[test]
    fn restart_replays_the_same_events() {
        let g = Grid::new(3, 4, Pos::new(0, 0), Pos::new(2, 3)).unwrap();
        let result = run_search(&g, g.start(), g.target(), Algorithm::Dijkstra).unwrap();
        let mut replay = Replay::from_result(&result, ms(1)).unwrap();
        let first: Vec<ReplayEvent> = replay.by_ref().collect();
        assert_eq!(first.len(), result.visited.len() + result.path.len());
        assert_eq!(replay.next(), None);
        replay.restart();
        let second: Vec<ReplayEvent> = replay.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn cancelled_replay_stops() {
        let mut replay = Replay::new(vec![Pos::ZERO; 3], Vec::new(), ms(1)).unwrap();
        assert!(replay.next().is_some());
        replay.context().cancel();
        assert!(replay.is_cancelled());
        assert_eq!(replay.next(), None);
    }

    #[test]
    fn zero_speed_is_rejected() {
        assert!(matches!(
            Replay::new(Vec::new(), Vec::new(), Duration::ZERO),
            Err(ReplayError::ZeroSpeed)
        ));
    }
}
