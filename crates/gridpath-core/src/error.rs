//! Configuration errors rejected before any search starts.

use std::fmt;

use crate::geom::Pos;

/// Errors raised when a grid or a pair of endpoints is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no cells.
    EmptyDimensions { rows: i32, cols: i32 },
    /// A position lies outside `[0, rows) × [0, cols)`.
    OutOfBounds { pos: Pos, rows: i32, cols: i32 },
    /// Start and target are the same cell.
    SameEndpoints(Pos),
    /// A start or target position is a wall.
    WallEndpoint(Pos),
    /// The start or target cell cannot be edited as a wall.
    EndpointCell(Pos),
    /// The cell buffer does not hold `rows × cols` cells.
    CellCount { expected: usize, found: usize },
    /// An ASCII row differs in width from the first row.
    RaggedRow { row: i32 },
    /// An ASCII layout contains a character other than `.#ST`.
    InvalidGlyph { ch: char, pos: Pos },
    /// An ASCII layout lacks the `S` or `T` marker.
    MissingEndpoint(char),
    /// An ASCII layout has a second `S` or `T` marker.
    DuplicateEndpoint(Pos),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {pos} is outside the {rows}x{cols} grid")
            }
            Self::SameEndpoints(pos) => write!(f, "start and target are both at {pos}"),
            Self::WallEndpoint(pos) => write!(f, "endpoint {pos} is a wall"),
            Self::EndpointCell(pos) => write!(f, "cell {pos} is the start or target"),
            Self::CellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            Self::RaggedRow { row } => write!(f, "row {row} has a different width"),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingEndpoint(ch) => write!(f, "layout has no \u{201c}{ch}\u{201d} cell"),
            Self::DuplicateEndpoint(pos) => write!(f, "second endpoint marker at {pos}"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_position() {
        let e = GridError::OutOfBounds {
            pos: Pos::new(4, 9),
            rows: 3,
            cols: 3,
        };
        assert_eq!(e.to_string(), "position (4, 9) is outside the 3x3 grid");
        assert_eq!(
            GridError::SameEndpoints(Pos::new(1, 1)).to_string(),
            "start and target are both at (1, 1)"
        );
    }
}
