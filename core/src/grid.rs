//! Cell storage for 1D rows and 2D toroidal grids.
//!
//! Both types hold binary cell states (`0` or `1`) and are validated on
//! construction, so the simulation code never has to check cell values.

use itertools::Itertools;
use std::fmt;
use std::ops::Index;

use crate::errors::{ConstructionError, ConstructionResult};
use crate::math::wrap_offset;

/// Position of a cell in a grid, as `(h, w)` (row index first).
pub type Pos = (usize, usize);

/// Offsets of the eight cells surrounding the center of a Moore
/// neighborhood, in row-major order.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Checks that every cell state is `0` or `1`.
fn check_binary(cells: &[u8]) -> ConstructionResult<()> {
    match cells.iter().position(|&value| value > 1) {
        Some(index) => Err(ConstructionError::NonBinaryCell {
            index,
            value: cells[index],
        }),
        None => Ok(()),
    }
}

/// Returns the number of cells in a grid, or an error if it overflows.
fn cell_count(height: usize, width: usize) -> ConstructionResult<usize> {
    height
        .checked_mul(width)
        .ok_or(ConstructionError::TooLarge { height, width })
}

/// One generation of a 1D automaton: a fixed-length sequence of binary cell
/// states with cyclic indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<u8>,
}
impl Row {
    /// Creates a row from cell states, rejecting an empty row or non-binary
    /// states.
    pub fn new(cells: Vec<u8>) -> ConstructionResult<Self> {
        if cells.is_empty() {
            return Err(ConstructionError::EmptyRow);
        }
        check_binary(&cells)?;
        Ok(Self { cells })
    }
    /// Creates a row containing a single live cell in the middle, the usual
    /// starting condition for drawing an elementary automaton.
    pub fn single_center(len: usize) -> ConstructionResult<Self> {
        if len == 0 {
            return Err(ConstructionError::EmptyRow);
        }
        let mut cells = vec![0; len];
        cells[len / 2] = 1;
        Ok(Self { cells })
    }
    /// Creates a row from cells that are already known to be valid.
    pub(crate) fn from_valid(cells: Vec<u8>) -> Self {
        debug_assert!(!cells.is_empty() && cells.iter().all(|&c| c <= 1));
        Self { cells }
    }

    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// Always returns `false`; rows are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
    /// Returns the cell states.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
    /// Consumes the row, returning the cell states.
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }
    /// Returns the state of the cell `offset` places away from `index`,
    /// wrapping around the ends of the row.
    pub fn get_wrapped(&self, index: usize, offset: isize) -> u8 {
        self.cells[wrap_offset(index, offset, self.len())]
    }
    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}
impl Index<usize> for Row {
    type Output = u8;
    fn index(&self, index: usize) -> &u8 {
        &self.cells[index]
    }
}
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", if cell != 0 { '#' } else { '.' })?;
        }
        Ok(())
    }
}

/// One generation of a 2D automaton: a rectangular array of binary cell
/// states, stored row-major in a flat `Vec`. Both axes wrap around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    data: Vec<u8>,
}
impl Grid {
    /// Creates a grid from a list of rows, rejecting an empty or ragged grid
    /// and non-binary states.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> ConstructionResult<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(ConstructionError::EmptyGrid);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(ConstructionError::EmptyGridRow);
        }
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != width) {
            return Err(ConstructionError::Ragged {
                row,
                expected: width,
                got: r.len(),
            });
        }
        Self::from_flat(height, width, rows.into_iter().flatten().collect())
    }
    /// Creates a grid from flat row-major data.
    pub fn from_flat(height: usize, width: usize, data: Vec<u8>) -> ConstructionResult<Self> {
        if height == 0 {
            return Err(ConstructionError::EmptyGrid);
        }
        if width == 0 {
            return Err(ConstructionError::EmptyGridRow);
        }
        let expected = cell_count(height, width)?;
        if data.len() != expected {
            return Err(ConstructionError::WrongFlatLength {
                expected,
                got: data.len(),
            });
        }
        check_binary(&data)?;
        Ok(Self {
            height,
            width,
            data,
        })
    }
    /// Creates a grid with every cell dead.
    pub fn empty(height: usize, width: usize) -> ConstructionResult<Self> {
        if height == 0 {
            return Err(ConstructionError::EmptyGrid);
        }
        if width == 0 {
            return Err(ConstructionError::EmptyGridRow);
        }
        Self::from_flat(height, width, vec![0; cell_count(height, width)?])
    }
    /// Creates a dead grid with the given cells alive, rejecting positions
    /// outside the grid.
    pub fn with_live_cells(
        height: usize,
        width: usize,
        live: impl IntoIterator<Item = Pos>,
    ) -> ConstructionResult<Self> {
        let mut ret = Self::empty(height, width)?;
        for pos in live {
            if pos.0 >= height || pos.1 >= width {
                return Err(ConstructionError::OutOfBounds {
                    pos,
                    size: ret.size(),
                });
            }
            let idx = ret.flatten_idx(pos);
            ret.data[idx] = 1;
        }
        Ok(ret)
    }
    /// Creates a grid from data that is already known to be valid.
    pub(crate) fn from_valid(height: usize, width: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(height * width, data.len());
        Self {
            height,
            width,
            data,
        }
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }
    /// Returns the flat row-major cell data.
    pub fn flat_data(&self) -> &[u8] {
        &self.data
    }
    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks(self.width)
    }
    /// Returns an iterator over all cells in row-major order, enumerated by
    /// their positions.
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (self.unflatten_idx(idx), cell))
    }
    /// Returns the state of the cell at `(h + dh, w + dw)`, wrapping around
    /// both axes.
    pub fn get_wrapped(&self, (h, w): Pos, (dh, dw): (isize, isize)) -> u8 {
        let pos = (
            wrap_offset(h, dh, self.height),
            wrap_offset(w, dw, self.width),
        );
        self[pos]
    }
    /// Returns the number of live cells among the eight toroidal neighbors of
    /// `pos`.
    ///
    /// On grids narrower than three cells the same cell may be counted more
    /// than once, exactly as the wrap-around arithmetic dictates.
    pub fn live_neighbors(&self, pos: Pos) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter(|&&offset| self.get_wrapped(pos, offset) != 0)
            .count()
    }
    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.data.iter().filter(|&&c| c != 0).count()
    }

    fn flatten_idx(&self, (h, w): Pos) -> usize {
        assert!(
            h < self.height && w < self.width,
            "Position {:?} is outside grid of size {:?}",
            (h, w),
            self.size(),
        );
        h * self.width + w
    }
    fn unflatten_idx(&self, idx: usize) -> Pos {
        (idx / self.width, idx % self.width)
    }
}
impl Index<Pos> for Grid {
    type Output = u8;
    fn index(&self, pos: Pos) -> &u8 {
        &self.data[self.flatten_idx(pos)]
    }
}
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell != 0 { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Returns the positions of every cell whose state differs between `prev`
/// and `next`, in row-major order.
///
/// This is all a renderer needs to redraw one generation incrementally.
pub fn changed_cells(prev: &Grid, next: &Grid) -> ConstructionResult<Vec<Pos>> {
    if prev.size() != next.size() {
        return Err(ConstructionError::SizeMismatch(prev.size(), next.size()));
    }
    Ok(diff_same_size(prev, next))
}

/// Like `changed_cells()`, but for grids already known to be the same size.
pub(crate) fn diff_same_size(prev: &Grid, next: &Grid) -> Vec<Pos> {
    debug_assert_eq!(prev.size(), next.size());
    prev.data
        .iter()
        .zip(&next.data)
        .positions(|(a, b)| a != b)
        .map(|idx| prev.unflatten_idx(idx))
        .collect()
}
