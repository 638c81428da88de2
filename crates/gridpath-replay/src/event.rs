use std::time::Duration;

use gridpath_core::Pos;

/// Which stream an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The `index`-th settled cell.
    Visit { index: usize },
    /// The `index`-th cell of the path.
    Path { index: usize },
}

/// One timed replay event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayEvent {
    /// Virtual time, measured from the start of the replay.
    pub at: Duration,
    pub pos: Pos,
    pub kind: EventKind,
}

impl ReplayEvent {
    #[inline]
    pub fn is_visit(&self) -> bool {
        matches!(self.kind, EventKind::Visit { .. })
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        matches!(self.kind, EventKind::Path { .. })
    }
}

/// Virtual time of the `slot`-th event at the given per-step `speed`.
#[inline]
pub(crate) fn offset(speed: Duration, slot: usize) -> Duration {
    speed.saturating_mul(u32::try_from(slot).unwrap_or(u32::MAX))
}
