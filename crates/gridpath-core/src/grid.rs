//! The [`Grid`] type: a rectangular array of [`Cell`]s with one start and
//! one target.
//!
//! A `Grid` is a plain value: cloning it yields a fully independent copy, so
//! every search can work on its own snapshot without observing edits made to
//! the original.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::Pos;

/// A `rows × cols` grid stored row-major in a flat buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Pos,
    target: Pos,
}

impl Grid {
    /// Create an empty grid with the given endpoints.
    ///
    /// Fails if either dimension is not positive, if an endpoint lies outside
    /// the grid, or if both endpoints coincide.
    pub fn new(rows: i32, cols: i32, start: Pos, target: Pos) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let mut grid = Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows as usize * cols as usize],
            start,
            target,
        };
        let si = grid.checked_idx(start)?;
        let ti = grid.checked_idx(target)?;
        if si == ti {
            return Err(GridError::SameEndpoints(start));
        }
        grid.cells[si] = Cell::Start;
        grid.cells[ti] = Cell::Target;
        Ok(grid)
    }

    /// Parse a grid from ASCII rows: `.` empty, `#` wall, `S` start,
    /// `T` target. Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        let mut start = None;
        let mut target = None;
        for (r, line) in lines.iter().enumerate() {
            let row = r as i32;
            if line.chars().count() as i32 != cols {
                return Err(GridError::RaggedRow { row });
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(row, c as i32);
                let cell = match ch {
                    '.' => Cell::Empty,
                    '#' => Cell::Wall,
                    'S' => Cell::Start,
                    'T' => Cell::Target,
                    _ => return Err(GridError::InvalidGlyph { ch, pos }),
                };
                let slot = match cell {
                    Cell::Start => Some(&mut start),
                    Cell::Target => Some(&mut target),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if slot.is_some() {
                        return Err(GridError::DuplicateEndpoint(pos));
                    }
                    *slot = Some(pos);
                }
                cells.push(cell);
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            start: start.ok_or(GridError::MissingEndpoint('S'))?,
            target: target.ok_or(GridError::MissingEndpoint('T'))?,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Pos {
        self.target
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Convert a position to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is a wall. Out-of-bounds positions are not walls.
    #[inline]
    pub fn is_wall(&self, p: Pos) -> bool {
        self.at(p).is_some_and(Cell::is_wall)
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    /// In-bounds axis-aligned neighbours of `p` in north, south, west, east
    /// order. Walls are included; callers filter them.
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }

    /// Row-major iterator over `(Pos, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            next: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check a pair of search endpoints: both inside the grid, distinct and
    /// not walls. Returns their flat indices.
    pub fn validate_endpoints(&self, start: Pos, target: Pos) -> Result<(usize, usize), GridError> {
        let si = self.checked_idx(start)?;
        let ti = self.checked_idx(target)?;
        if si == ti {
            return Err(GridError::SameEndpoints(start));
        }
        for (i, p) in [(si, start), (ti, target)] {
            if self.cells[i].is_wall() {
                return Err(GridError::WallEndpoint(p));
            }
        }
        Ok((si, ti))
    }

    fn checked_idx(&self, pos: Pos) -> Result<usize, GridError> {
        self.idx(pos).ok_or(GridError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Make `p` a wall or clear it. Endpoints cannot be walled.
    pub fn set_wall(&mut self, p: Pos, wall: bool) -> Result<(), GridError> {
        let i = self.checked_idx(p)?;
        if self.cells[i].is_endpoint() {
            return Err(GridError::EndpointCell(p));
        }
        self.cells[i] = if wall { Cell::Wall } else { Cell::Empty };
        Ok(())
    }

    /// Flip the wall state of `p`, returning the new state.
    pub fn toggle_wall(&mut self, p: Pos) -> Result<bool, GridError> {
        let wall = !self.is_wall(p);
        self.set_wall(p, wall)?;
        Ok(wall)
    }

    /// Relocate the start. A wall at `p` is replaced; the target cannot be
    /// overwritten.
    pub fn move_start(&mut self, p: Pos) -> Result<(), GridError> {
        let to = self.checked_idx(p)?;
        if p == self.target {
            return Err(GridError::SameEndpoints(p));
        }
        let from = self.checked_idx(self.start)?;
        self.cells[from] = Cell::Empty;
        self.cells[to] = Cell::Start;
        self.start = p;
        Ok(())
    }

    /// Relocate the target. A wall at `p` is replaced; the start cannot be
    /// overwritten.
    pub fn move_target(&mut self, p: Pos) -> Result<(), GridError> {
        let to = self.checked_idx(p)?;
        if p == self.start {
            return Err(GridError::SameEndpoints(p));
        }
        let from = self.checked_idx(self.target)?;
        self.cells[from] = Cell::Empty;
        self.cells[to] = Cell::Target;
        self.target = p;
        Ok(())
    }

    /// Remove every wall, keeping the endpoints where they are.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut().filter(|c| c.is_wall()) {
            *c = Cell::Empty;
        }
    }

    /// Apply `f` to every non-endpoint cell, replacing each with the return
    /// value. Endpoints are left untouched whatever `f` returns.
    pub fn map_cells<F: FnMut(Pos, Cell) -> Cell>(&mut self, mut f: F) {
        let cols = self.cols as usize;
        for (i, c) in self.cells.iter_mut().enumerate() {
            if c.is_endpoint() {
                continue;
            }
            let p = Pos::new((i / cols) as i32, (i % cols) as i32);
            let next = f(p, *c);
            if !next.is_endpoint() {
                *c = next;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Unchecked wire form of a [`Grid`]; converted with validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Pos,
    target: Pos,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(raw: GridRepr) -> Result<Self, GridError> {
        let GridRepr {
            rows,
            cols,
            cells,
            start,
            target,
        } = raw;
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        let grid = Self {
            rows,
            cols,
            cells,
            start,
            target,
        };
        let si = grid.checked_idx(start)?;
        let ti = grid.checked_idx(target)?;
        if si == ti {
            return Err(GridError::SameEndpoints(start));
        }
        for (i, c) in grid.cells.iter().enumerate() {
            let stray = (c.is_start() && i != si) || (c.is_target() && i != ti);
            if stray {
                return Err(GridError::DuplicateEndpoint(grid.pos(i)));
            }
        }
        if !grid.cells[si].is_start() {
            return Err(GridError::MissingEndpoint('S'));
        }
        if !grid.cells[ti].is_target() {
            return Err(GridError::MissingEndpoint('T'));
        }
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Pos, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    next: usize,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Pos, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cell = *self.grid.cells.get(self.next)?;
        let p = self.grid.pos(self.next);
        self.next += 1;
        Some((p, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.cells.len().saturating_sub(self.next);
        (n, Some(n))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    fn json(cells: &str, start: (i32, i32), target: (i32, i32)) -> String {
        format!(
            r#"{{"rows":1,"cols":3,"cells":{cells},"start":{{"row":{},"col":{}}},"target":{{"row":{},"col":{}}}}}"#,
            start.0, start.1, target.0, target.1
        )
    }

    fn parse(s: &str) -> Result<Grid, serde_json::Error> {
        serde_json::from_str(s)
    }

    #[test]
    fn well_formed_grid_deserializes() {
        let g = parse(&json(r#"["Start","Wall","Target"]"#, (0, 0), (0, 2))).unwrap();
        assert_eq!(g, Grid::from_ascii("S#T").unwrap());
    }

    #[test]
    fn malformed_grids_are_rejected() {
        let bad = [
            json("[]", (0, 0), (0, 2)),
            json(r#"["Wall","Empty","Target"]"#, (0, 0), (0, 2)),
            json(r#"["Start","Start","Target"]"#, (0, 0), (0, 2)),
            json(r#"["Start","Empty","Target"]"#, (0, 0), (0, 5)),
            json(r#"["Start","Empty","Target"]"#, (0, 2), (0, 2)),
        ];
        for s in &bad {
            assert!(parse(s).is_err(), "{s}");
        }
    }

    #[test]
    fn rejection_names_the_problem() {
        let err = parse(&json("[]", (0, 0), (0, 2))).unwrap_err();
        assert!(err.to_string().contains("expected 3 cells, found 0"), "{err}");
    }
}
