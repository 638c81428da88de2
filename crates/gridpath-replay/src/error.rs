use std::fmt;
use std::io;

/// Errors raised when scheduling a replay.
#[derive(Debug)]
pub enum ReplayError {
    /// The per-step speed must be positive.
    ZeroSpeed,
    /// The playback thread could not be started.
    Spawn(io::Error),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSpeed => f.write_str("replay speed must be positive"),
            Self::Spawn(e) => write!(f, "failed to start playback thread: {e}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ZeroSpeed => None,
            Self::Spawn(e) => Some(e),
        }
    }
}
