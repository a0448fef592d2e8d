// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The opponent field.
//!
//! A `Grid` is a rectangular `rows × cols` table of cells, each either
//! `Cell::Open` or `Cell::Blocked`. Cell `(0, 0)` is the start and
//! `(rows - 1, cols - 1)` is the goal. Blocked cells are stored in a row-major
//! bitset, which keeps the field compact and makes the per-cell lookups in the
//! counters' inner loops a single bit test.
//!
//! Grids are built once, either from an explicit table (`Grid::from_rows`),
//! through a `GridBuilder`, by parsing the literal representation
//! (`str::parse`), or by the random generator. They are never mutated after
//! construction.

use crate::{
    complexity::Complexity,
    index::{ColIndex, RowIndex},
    loading::{GridLoader, GridLoaderError},
};
use fixedbitset::FixedBitSet;

#[inline(always)]
fn flatten_index(num_cols: usize, row: usize, col: usize) -> usize {
    row * num_cols + col
}

/// The state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// The cell may be entered.
    #[default]
    Open,
    /// The cell is occupied by an opponent and may not be entered.
    Blocked,
}

impl Cell {
    /// The literal symbol for an open cell.
    pub const OPEN_SYMBOL: char = '.';
    /// The literal symbol for a blocked cell.
    pub const BLOCKED_SYMBOL: char = 'X';

    /// Parses a cell from its default literal symbol.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use touchline_model::grid::Cell;
    /// assert_eq!(Cell::from_symbol('.'), Some(Cell::Open));
    /// assert_eq!(Cell::from_symbol('X'), Some(Cell::Blocked));
    /// assert_eq!(Cell::from_symbol('?'), None);
    /// ```
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::OPEN_SYMBOL => Some(Cell::Open),
            Self::BLOCKED_SYMBOL => Some(Cell::Blocked),
            _ => None,
        }
    }

    /// Returns the default literal symbol of the cell.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Open => Self::OPEN_SYMBOL,
            Cell::Blocked => Self::BLOCKED_SYMBOL,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        matches!(self, Cell::Blocked)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell coordinate on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: RowIndex,
    pub col: ColIndex,
}

impl Position {
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row: RowIndex::new(row),
            col: ColIndex::new(col),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row.get(), self.col.get())
    }
}

/// The reasons a table of cells does not describe a valid field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedGridError {
    /// The table has no rows.
    NoRows,
    /// The table has rows but they contain no cells.
    NoColumns,
    /// A row's length differs from the length of the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for MalformedGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRows => write!(f, "grid has no rows"),
            Self::NoColumns => write!(f, "grid has no columns"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells but the first row has {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for MalformedGridError {}

/// The error type for grid construction and checked queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A queried coordinate lies outside the field.
    OutOfBounds {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },
    /// The cell table does not describe a rectangular, non-empty field.
    Malformed(MalformedGridError),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                num_rows,
                num_cols,
            } => write!(
                f,
                "cell ({}, {}) is out of bounds for a {}x{} grid",
                row, col, num_rows, num_cols
            ),
            Self::Malformed(e) => write!(f, "Malformed grid: {}", e),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::OutOfBounds { .. } => None,
        }
    }
}

impl From<MalformedGridError> for GridError {
    fn from(e: MalformedGridError) -> Self {
        Self::Malformed(e)
    }
}

#[inline]
fn validate_dimensions(num_rows: usize, num_cols: usize) -> Result<(), MalformedGridError> {
    if num_rows == 0 {
        return Err(MalformedGridError::NoRows);
    }
    if num_cols == 0 {
        return Err(MalformedGridError::NoColumns);
    }
    Ok(())
}

/// The immutable opponent field.
///
/// Holds:
/// - `num_rows`, `num_cols`: the dimensions, both at least 1.
/// - `blocked`: a bitset of length `num_rows * num_cols`, bit
///   `row * num_cols + col` set iff that cell is blocked.
///
/// Construction:
/// - `Grid::from_rows`, `Grid::open`, `GridBuilder::build`, `str::parse`, or
///   `generator::generate_random_grid`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    num_rows: usize,
    num_cols: usize,
    blocked: FixedBitSet, // len = num_rows * num_cols
}

impl Grid {
    /// Creates a field of the given size with every cell open.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Malformed` if either dimension is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use touchline_model::grid::Grid;
    /// let grid = Grid::open(3, 4).unwrap();
    /// assert_eq!(grid.num_cells(), 12);
    /// assert_eq!(grid.num_blocked(), 0);
    /// ```
    pub fn open(num_rows: usize, num_cols: usize) -> Result<Self, GridError> {
        validate_dimensions(num_rows, num_cols)?;
        Ok(Self {
            num_rows,
            num_cols,
            blocked: FixedBitSet::with_capacity(num_rows * num_cols),
        })
    }

    /// Creates a field from an explicit table of cells, one slice per row.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Malformed` if the table is empty, its rows are
    /// empty, or the rows differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use touchline_model::grid::{Cell, Grid};
    /// use Cell::{Blocked as X, Open as O};
    ///
    /// let grid = Grid::from_rows(&[[O, O, X], [X, O, O]]).unwrap();
    /// assert_eq!(grid.num_rows(), 2);
    /// assert_eq!(grid.num_cols(), 3);
    /// assert_eq!(grid.cell_state(0, 2), Ok(Cell::Blocked));
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[Cell]>,
    {
        Self::from_table(rows).map_err(GridError::from)
    }

    pub(crate) fn from_table<R>(rows: &[R]) -> Result<Self, MalformedGridError>
    where
        R: AsRef<[Cell]>,
    {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.as_ref().len());
        validate_dimensions(num_rows, num_cols)?;

        let mut blocked = FixedBitSet::with_capacity(num_rows * num_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_cols {
                return Err(MalformedGridError::RaggedRow {
                    row: i,
                    expected: num_cols,
                    found: row.len(),
                });
            }

            for (j, cell) in row.iter().enumerate() {
                if cell.is_blocked() {
                    blocked.insert(flatten_index(num_cols, i, j));
                }
            }
        }

        Ok(Self {
            num_rows,
            num_cols,
            blocked,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_rows * self.num_cols
    }

    /// Returns the number of blocked cells.
    #[inline]
    pub fn num_blocked(&self) -> usize {
        self.blocked.count_ones(..)
    }

    /// Returns the number of moves every start-to-goal path takes,
    /// `rows + cols - 2`.
    #[inline]
    pub fn path_length(&self) -> usize {
        self.num_rows + self.num_cols - 2
    }

    /// Returns the start coordinate, always `(0, 0)`.
    #[inline]
    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    /// Returns the goal coordinate, `(rows - 1, cols - 1)`.
    #[inline]
    pub fn goal(&self) -> Position {
        Position::new(self.num_rows - 1, self.num_cols - 1)
    }

    /// Returns `true` if both the start and the goal are open.
    #[inline]
    pub fn endpoints_open(&self) -> bool {
        !self.blocked.contains(0) && !self.blocked.contains(self.num_cells() - 1)
    }

    /// Returns the state of cell `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if `row >= num_rows()` or `col >= num_cols()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use touchline_model::grid::{Cell, Grid, GridError};
    /// let grid: Grid = "..\nX.".parse().unwrap();
    /// assert_eq!(grid.cell_state(1, 0), Ok(Cell::Blocked));
    /// assert!(matches!(grid.cell_state(2, 0), Err(GridError::OutOfBounds { .. })));
    /// ```
    pub fn cell_state(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            });
        }
        Ok(self.cell_at_flat(flatten_index(self.num_cols, row, col)))
    }

    /// Returns the state of the cell at the typed coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in `0..num_rows()` or `col` is not in `0..num_cols()`.
    #[inline]
    pub fn cell(&self, row: RowIndex, col: ColIndex) -> Cell {
        let (r, c) = (row.get(), col.get());
        assert!(
            r < self.num_rows && c < self.num_cols,
            "called `Grid::cell` with a coordinate out of bounds: the size is {}x{} but the coordinate is ({}, {})",
            self.num_rows,
            self.num_cols,
            r,
            c
        );

        self.cell_at_flat(flatten_index(self.num_cols, r, c))
    }

    /// Returns the state of the cell at the typed coordinate without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `row` is in `0..num_rows()` and `col` is in
    /// `0..num_cols()`. Undefined behavior may occur if this precondition is violated.
    #[inline]
    pub unsafe fn cell_unchecked(&self, row: RowIndex, col: ColIndex) -> Cell {
        let (r, c) = (row.get(), col.get());
        debug_assert!(
            r < self.num_rows && c < self.num_cols,
            "called `Grid::cell_unchecked` with a coordinate out of bounds: the size is {}x{} but the coordinate is ({}, {})",
            self.num_rows,
            self.num_cols,
            r,
            c
        );

        if unsafe { self.blocked.contains_unchecked(flatten_index(self.num_cols, r, c)) } {
            Cell::Blocked
        } else {
            Cell::Open
        }
    }

    /// Returns `true` if `(row, col)` lies inside the field and is open.
    ///
    /// Coordinates outside the field are reported as not open rather than
    /// as an error, which is the question a path simulation asks after each move.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.num_rows
            && col < self.num_cols
            && !self.blocked.contains(flatten_index(self.num_cols, row, col))
    }

    /// Returns an iterator over the coordinates of all blocked cells in row-major order.
    pub fn blocked_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let num_cols = self.num_cols;
        self.blocked
            .ones()
            .map(move |flat| Position::new(flat / num_cols, flat % num_cols))
    }

    /// Returns the search-space size of the tabulation strategy on this field.
    #[inline]
    pub fn tabulation_complexity(&self) -> Complexity {
        Complexity::tabulation(self.num_rows, self.num_cols)
    }

    /// Returns the search-space size of the enumeration strategy on this field.
    #[inline]
    pub fn enumeration_complexity(&self) -> Complexity {
        Complexity::enumeration(self.num_rows, self.num_cols)
    }

    #[inline(always)]
    fn cell_at_flat(&self, flat: usize) -> Cell {
        if self.blocked.contains(flat) {
            Cell::Blocked
        } else {
            Cell::Open
        }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("num_rows", &self.num_rows)
            .field("num_cols", &self.num_cols)
            .field("num_blocked", &self.num_blocked())
            .finish()
    }
}

/// Renders the literal representation, one line per row.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.num_rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.num_cols {
                write!(
                    f,
                    "{}",
                    self.cell_at_flat(flatten_index(self.num_cols, row, col))
                )?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Grid {
    type Err = GridLoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridLoader::new().from_str(s)
    }
}

/// A mutable field under construction.
///
/// All cells start open. Dimensions are validated by `build`, so a builder for
/// a zero-sized field can exist but never produces a `Grid`.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    num_rows: usize,
    num_cols: usize,
    blocked: FixedBitSet,
}

impl GridBuilder {
    /// Creates a builder for a `num_rows × num_cols` field with every cell open.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use touchline_model::grid::{Cell, GridBuilder};
    /// let mut builder = GridBuilder::new(2, 2);
    /// builder.block(0, 1).block(1, 0);
    /// let grid = builder.build().unwrap();
    /// assert_eq!(grid.num_blocked(), 2);
    /// assert_eq!(grid.to_string(), ".X\nX.");
    /// ```
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            blocked: FixedBitSet::with_capacity(num_rows * num_cols),
        }
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Sets the state of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in `0..num_rows()` or `col` is not in `0..num_cols()`.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> &mut Self {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "called `GridBuilder::set_cell` with a coordinate out of bounds: the size is {}x{} but the coordinate is ({}, {})",
            self.num_rows,
            self.num_cols,
            row,
            col
        );

        self.blocked
            .set(flatten_index(self.num_cols, row, col), cell.is_blocked());
        self
    }

    /// Marks cell `(row, col)` as blocked.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn block(&mut self, row: usize, col: usize) -> &mut Self {
        self.set_cell(row, col, Cell::Blocked)
    }

    /// Marks cell `(row, col)` as open.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn unblock(&mut self, row: usize, col: usize) -> &mut Self {
        self.set_cell(row, col, Cell::Open)
    }

    /// Marks the cell with row-major index `flat` as blocked.
    #[inline]
    pub(crate) fn block_flat(&mut self, flat: usize) -> &mut Self {
        debug_assert!(
            flat < self.num_rows * self.num_cols,
            "called `GridBuilder::block_flat` with index out of bounds: the len is {} but the index is {}",
            self.num_rows * self.num_cols,
            flat
        );

        self.blocked.insert(flat);
        self
    }

    /// Consumes the builder and returns the validated field.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Malformed` if either dimension is zero.
    pub fn build(self) -> Result<Grid, GridError> {
        validate_dimensions(self.num_rows, self.num_cols)?;
        Ok(Grid {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            blocked: self.blocked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Cell::{Blocked as X, Open as O};

    #[test]
    fn test_flatten_index_is_row_major() {
        assert_eq!(flatten_index(4, 0, 0), 0);
        assert_eq!(flatten_index(4, 0, 3), 3);
        assert_eq!(flatten_index(4, 2, 1), 9);
    }

    #[test]
    fn test_cell_symbol_roundtrip() {
        for cell in [O, X] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(format!("{}", X), "X");
    }

    #[test]
    fn test_from_rows_rejects_empty_table() {
        let rows: [[Cell; 0]; 0] = [];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::Malformed(MalformedGridError::NoRows))
        );
    }

    #[test]
    fn test_from_rows_rejects_empty_rows() {
        let rows: [Vec<Cell>; 2] = [vec![], vec![]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::Malformed(MalformedGridError::NoColumns))
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = [vec![O, O, O], vec![O, O], vec![O, O, O]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::Malformed(MalformedGridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }))
        );
    }

    #[test]
    fn test_open_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::open(0, 3),
            Err(GridError::Malformed(MalformedGridError::NoRows))
        ));
        assert!(matches!(
            Grid::open(3, 0),
            Err(GridError::Malformed(MalformedGridError::NoColumns))
        ));
    }

    #[test]
    fn test_cell_state_reports_cells_and_bounds() {
        let grid = Grid::from_rows(&[[O, X], [O, O], [X, O]]).unwrap();
        assert_eq!(grid.cell_state(0, 1), Ok(X));
        assert_eq!(grid.cell_state(2, 0), Ok(X));
        assert_eq!(grid.cell_state(1, 1), Ok(O));
        assert_eq!(
            grid.cell_state(3, 0),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                num_rows: 3,
                num_cols: 2
            })
        );
        assert!(grid.cell_state(0, 2).is_err());
    }

    #[test]
    fn test_column_overflow_does_not_alias_next_row() {
        // (0, 2) would flatten onto (1, 0) in a 2-column grid.
        let grid = Grid::from_rows(&[[O, O], [X, O]]).unwrap();
        assert!(!grid.is_open(0, 2));
        assert!(grid.cell_state(0, 2).is_err());
    }

    #[test]
    fn test_typed_cell_access_matches_checked_access() {
        let grid = Grid::from_rows(&[[O, X, O], [X, O, O]]).unwrap();
        for r in 0..2 {
            for c in 0..3 {
                let typed = grid.cell(RowIndex::new(r), ColIndex::new(c));
                let unchecked = unsafe { grid.cell_unchecked(RowIndex::new(r), ColIndex::new(c)) };
                assert_eq!(Ok(typed), grid.cell_state(r, c));
                assert_eq!(typed, unchecked);
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_typed_cell_access_panics_out_of_bounds() {
        let grid = Grid::open(2, 2).unwrap();
        let _ = grid.cell(RowIndex::new(0), ColIndex::new(2));
    }

    #[test]
    fn test_endpoints_and_path_length() {
        let grid = Grid::open(3, 5).unwrap();
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.goal(), Position::new(2, 4));
        assert_eq!(grid.path_length(), 6);
        assert!(grid.endpoints_open());

        let blocked_goal = Grid::from_rows(&[[O, O], [O, X]]).unwrap();
        assert!(!blocked_goal.endpoints_open());

        let single = Grid::from_rows(&[[X]]).unwrap();
        assert_eq!(single.path_length(), 0);
        assert!(!single.endpoints_open());
    }

    #[test]
    fn test_blocked_positions_in_row_major_order() {
        let grid = Grid::from_rows(&[[O, X, X], [X, O, O]]).unwrap();
        let positions: Vec<Position> = grid.blocked_positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0)
            ]
        );
        assert_eq!(grid.num_blocked(), 3);
    }

    #[test]
    fn test_display_renders_literal() {
        let grid = Grid::from_rows(&[[O, X, O], [O, O, X]]).unwrap();
        assert_eq!(grid.to_string(), ".X.\n..X");
    }

    #[test]
    fn test_builder_set_and_unblock() {
        let mut builder = GridBuilder::new(2, 3);
        builder.block(0, 2).block(1, 1).unblock(0, 2);
        let grid = builder.build().unwrap();
        assert_eq!(grid.num_blocked(), 1);
        assert_eq!(grid.cell_state(1, 1), Ok(X));
        assert_eq!(grid.cell_state(0, 2), Ok(O));
    }

    #[test]
    fn test_builder_rejects_zero_dimensions() {
        assert!(GridBuilder::new(0, 0).build().is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_builder_panics_on_out_of_bounds() {
        GridBuilder::new(2, 2).block(2, 0);
    }

    #[test]
    fn test_grid_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
