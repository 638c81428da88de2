//! The [`Cell`] type: the persistent layout state of one grid position.

/// What occupies a grid position.
///
/// Start, target and wall are variants of one enum, so a cell can never be
/// both a wall and an endpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    Target,
}

impl Cell {
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    #[inline]
    pub const fn is_target(self) -> bool {
        matches!(self, Self::Target)
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !self.is_wall()
    }

    /// Whether this cell is the start or the target.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::Target)
    }

    /// ASCII glyph used by text renderings and test fixtures.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Target => 'T',
        }
    }
}
