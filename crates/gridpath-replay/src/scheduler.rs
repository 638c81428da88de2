//! [`Scheduler`] owns the replay in flight and cancels it when a new one
//! starts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use gridpath_core::{Context, Pos};

use crate::error::ReplayError;
use crate::event::EventKind;
use crate::replay::Replay;

/// Single owner of the currently scheduled replay.
///
/// Every call to [`schedule`](Self::schedule) or [`play`](Self::play)
/// cancels the previous replay before the new one is created, so events of
/// an older run never surface after a newer run has started. Dropping the
/// scheduler cancels whatever is still in flight.
#[derive(Debug, Default)]
pub struct Scheduler {
    current: Option<Run>,
    runs: u64,
}

/// The replay most recently scheduled.
#[derive(Debug)]
struct Run {
    ctx: Context,
    // set by the playback thread after its last event
    finished: Arc<AtomicBool>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of replays scheduled so far.
    #[inline]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Whether the last replay still has events to deliver.
    ///
    /// A replay started with [`play`](Self::play) stops being active once
    /// its thread has fired every event. One returned by
    /// [`schedule`](Self::schedule) is drained by the caller, so it stays
    /// active until cancelled or superseded.
    pub fn is_active(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|run| !run.ctx.is_done() && !run.finished.load(Ordering::Acquire))
    }

    /// Cancel the replay in flight, if any.
    pub fn cancel(&mut self) {
        if let Some(run) = self.current.take() {
            run.ctx.cancel();
            log::debug!("replay #{} cancelled", self.runs);
        }
    }

    /// Cancel the previous replay and return the event sequence of a new
    /// one, to be drained by the caller at its own pace.
    ///
    /// A zero `speed` is rejected and leaves the previous replay running.
    pub fn schedule(
        &mut self,
        visited: Vec<Pos>,
        path: Vec<Pos>,
        speed: Duration,
    ) -> Result<Replay, ReplayError> {
        self.begin(visited, path, speed).map(|(replay, _)| replay)
    }

    /// Cancel the previous replay and play a new one on a background thread.
    ///
    /// The thread sleeps until each event's virtual time and then calls
    /// `on_visit(pos, index)` or `on_path(pos)`. Callbacks run under the
    /// replay's cancellation lock, so none of them starts after the replay
    /// has been cancelled; a callback must not cancel its own replay.
    pub fn play<V, P>(
        &mut self,
        visited: Vec<Pos>,
        path: Vec<Pos>,
        speed: Duration,
        on_visit: V,
        on_path: P,
    ) -> Result<Playback, ReplayError>
    where
        V: FnMut(Pos, usize) + Send + 'static,
        P: FnMut(Pos) + Send + 'static,
    {
        let (replay, finished) = self.begin(visited, path, speed)?;
        let ctx = replay.context().clone();
        let run = self.runs;
        let handle = thread::Builder::new()
            .name(format!("gridpath-replay-{run}"))
            .spawn(move || {
                let fired = drive(replay, on_visit, on_path);
                finished.store(true, Ordering::Release);
                fired
            })
            .map_err(|e| {
                self.cancel();
                ReplayError::Spawn(e)
            })?;
        Ok(Playback { ctx, handle })
    }

    /// Cancel the previous replay and register a new one, returning its
    /// event sequence and completion flag.
    fn begin(
        &mut self,
        visited: Vec<Pos>,
        path: Vec<Pos>,
        speed: Duration,
    ) -> Result<(Replay, Arc<AtomicBool>), ReplayError> {
        if speed.is_zero() {
            return Err(ReplayError::ZeroSpeed);
        }
        self.cancel();
        let ctx = Context::new();
        let replay = Replay::with_context(visited, path, speed, ctx.clone())?;
        let finished = Arc::new(AtomicBool::new(false));
        self.current = Some(Run {
            ctx,
            finished: Arc::clone(&finished),
        });
        self.runs += 1;
        log::debug!(
            "replay #{} scheduled: {} events over {:?}",
            self.runs,
            replay.len(),
            replay.duration()
        );
        Ok((replay, finished))
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Fire every event of `replay` at its virtual time. Returns the number of
/// events fired.
fn drive<V, P>(replay: Replay, mut on_visit: V, mut on_path: P) -> usize
where
    V: FnMut(Pos, usize),
    P: FnMut(Pos),
{
    let origin = Instant::now();
    let ctx = replay.context().clone();
    let mut fired = 0;

    for event in replay {
        if ctx.wait_until(origin + event.at) {
            break;
        }
        let done = ctx.run_unless_done(|| match event.kind {
            EventKind::Visit { index } => on_visit(event.pos, index),
            EventKind::Path { .. } => on_path(event.pos),
        });
        if done.is_none() {
            break;
        }
        log::trace!("replay event {:?} at {:?}", event.kind, event.at);
        fired += 1;
    }

    fired
}

/// Handle to a replay playing on a background thread.
#[derive(Debug)]
pub struct Playback {
    ctx: Context,
    handle: JoinHandle<usize>,
}

impl Playback {
    /// Stop this playback. No callback starts after this returns.
    pub fn cancel(&self) {
        self.ctx.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.ctx.is_done()
    }

    /// Whether the playback thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the playback thread and return the number of events fired.
    ///
    /// A panic raised by a callback is resumed on the calling thread.
    pub fn join(self) -> usize {
        match self.handle.join() {
            Ok(fired) => fired,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
