//! Replay scheduling for gridpath search results.
//!
//! A finished search is turned into a timeline of [`ReplayEvent`]s: one
//! visit event per settled cell, then one path event per path cell, spaced
//! `speed` apart. The timeline can be pulled lazily as a [`Replay`]
//! iterator, or played in real time by a [`Scheduler`] on a background
//! thread that invokes caller-supplied callbacks.
//!
//! Starting a new replay through the same [`Scheduler`] cancels the
//! previous one; no event of a cancelled replay fires afterward.

mod error;
mod event;
mod replay;
mod scheduler;

pub use error::ReplayError;
pub use event::{EventKind, ReplayEvent};
pub use replay::Replay;
pub use scheduler::{Playback, Scheduler};
