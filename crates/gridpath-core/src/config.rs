//! Configuration structs with the visualizer's defaults.

use std::time::Duration;

use crate::error::GridError;
use crate::geom::Pos;
use crate::grid::Grid;

/// Dimensions and endpoints of a fresh grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Pos,
    pub target: Pos,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 40,
            start: Pos::new(10, 8),
            target: Pos::new(10, 30),
        }
    }
}

impl Grid {
    /// Create an empty grid from configuration.
    pub fn from_config(cfg: &GridConfig) -> Result<Self, GridError> {
        Self::new(cfg.rows, cfg.cols, cfg.start, cfg.target)
    }
}

/// Replay speed as exposed by the speed slider.
///
/// Higher slider values play faster: each replay step waits
/// `70 - slider` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    pub slider: u32,
}

impl PlaybackConfig {
    pub const MIN_SLIDER: u32 = 10;
    pub const MAX_SLIDER: u32 = 60;
    const DELAY_BASE_MS: u32 = 70;

    /// A config with the slider clamped into `[MIN_SLIDER, MAX_SLIDER]`.
    pub fn with_slider(slider: u32) -> Self {
        Self {
            slider: slider.clamp(Self::MIN_SLIDER, Self::MAX_SLIDER),
        }
    }

    /// Delay between consecutive replay events.
    pub fn delay(&self) -> Duration {
        let slider = self.slider.clamp(Self::MIN_SLIDER, Self::MAX_SLIDER);
        Duration::from_millis(u64::from(Self::DELAY_BASE_MS - slider))
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { slider: 15 }
    }
}

/// Random maze parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Chance for each non-endpoint cell to become a wall.
    pub wall_probability: f64,
}

impl MazeConfig {
    pub const DEFAULT_WALL_PROBABILITY: f64 = 0.25;
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall_probability: Self::DEFAULT_WALL_PROBABILITY,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_config_round_trip() {
        let cfg = GridConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_ascii("S#\n.T").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
