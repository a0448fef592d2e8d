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

//! Plain tabulation counters.
//!
//! Both functions return the same count. `count_paths_dp` keeps the whole
//! `rows × cols` table, `count_paths_dp_rolling` only the row being filled,
//! overwriting in place: before cell `(r, c)` is folded, `ways[c]` still holds
//! the count of the cell above and `ways[c - 1]` already holds the count of the
//! cell to the left.
//!
//! A cell whose count leaves the range of `C` is stored as `None` and every
//! cell it feeds into becomes `None` as well. A cell has at least as many
//! paths as any open cell that feeds into it, so the goal ends up `None`
//! exactly when its own count does not fit. Overflowing cells that cannot
//! reach the goal never cause an error.

use touchline_core::num::count::PathCount;
use touchline_model::{
    grid::Grid,
    index::{ColIndex, RowIndex},
};
use touchline_search::result::CountError;

/// Returns `true` if `(row, col)` is blocked.
///
/// # Safety
///
/// The caller must ensure that `row < grid.num_rows()` and `col < grid.num_cols()`.
#[inline(always)]
unsafe fn is_blocked_unchecked(grid: &Grid, row: usize, col: usize) -> bool {
    unsafe {
        grid.cell_unchecked(RowIndex::new(row), ColIndex::new(col))
            .is_blocked()
    }
}

/// Sums two cell counts. `None` marks a count that no longer fits.
#[inline(always)]
fn add_counts<C>(above: &Option<C>, left: &Option<C>) -> Option<C>
where
    C: PathCount,
{
    match (above, left) {
        (Some(above), Some(left)) => above.checked_add(left),
        _ => None,
    }
}

/// Prepares `ways` for the first row of `grid`.
///
/// The buffer is sized to the column count and seeded with a single way into
/// the start cell, as if arriving from a virtual row above it.
#[inline]
pub(crate) fn seed_row<C>(grid: &Grid, ways: &mut Vec<Option<C>>)
where
    C: PathCount,
{
    ways.clear();
    ways.resize(grid.num_cols(), Some(C::zero()));
    ways[0] = Some(C::one());
}

/// Folds cell `(row, col)` into the rolling row buffer.
///
/// # Panics
///
/// In debug builds, panics if `(row, col)` is outside the field or `ways` is
/// shorter than the column count.
#[inline(always)]
pub(crate) fn fold_cell<C>(grid: &Grid, row: usize, col: usize, ways: &mut [Option<C>])
where
    C: PathCount,
{
    debug_assert!(
        col < ways.len(),
        "called `fold_cell` with column out of bounds: the len is {} but the index is {}",
        ways.len(),
        col
    );

    if unsafe { is_blocked_unchecked(grid, row, col) } {
        ways[col] = Some(C::zero());
    } else if col > 0 {
        let count = add_counts(&ways[col], &ways[col - 1]);
        ways[col] = count;
    }
}

/// Takes the goal count out of a fully folded row.
#[inline]
pub(crate) fn take_goal<C>(ways: &mut [Option<C>]) -> Result<C, CountError> {
    ways.last_mut()
        .and_then(Option::take)
        .ok_or(CountError::Overflow)
}

/// Counts the monotonic paths of `grid` with a full `rows × cols` table.
///
/// Returns `Ok(0)` if the start or the goal is blocked.
///
/// # Errors
///
/// Returns `CountError::Overflow` if the number of paths to the goal does not
/// fit into `C`. Never fails for `num_bigint::BigUint`.
///
/// # Examples
///
/// ```rust
/// # use touchline_dp::tabulation::count_paths_dp;
/// # use touchline_model::grid::Grid;
/// let grid: Grid = ".X.\n...\n...".parse().unwrap();
/// assert_eq!(count_paths_dp::<u32>(&grid), Ok(3));
/// ```
pub fn count_paths_dp<C>(grid: &Grid) -> Result<C, CountError>
where
    C: PathCount,
{
    if !grid.endpoints_open() {
        return Ok(C::zero());
    }

    let (num_rows, num_cols) = (grid.num_rows(), grid.num_cols());
    let mut table = vec![Some(C::zero()); num_rows * num_cols];
    let zero = Some(C::zero());

    for row in 0..num_rows {
        for col in 0..num_cols {
            if unsafe { is_blocked_unchecked(grid, row, col) } {
                continue;
            }

            let flat = row * num_cols + col;
            if flat == 0 {
                table[0] = Some(C::one());
                continue;
            }

            let from_above = if row > 0 { &table[flat - num_cols] } else { &zero };
            let from_left = if col > 0 { &table[flat - 1] } else { &zero };
            let count = add_counts(from_above, from_left);
            table[flat] = count;
        }
    }

    take_goal(&mut table)
}

/// Counts the monotonic paths of `grid` keeping a single row of counts.
///
/// Same result as `count_paths_dp` in `Θ(cols)` memory.
///
/// # Errors
///
/// Returns `CountError::Overflow` if the number of paths to the goal does not
/// fit into `C`.
///
/// # Examples
///
/// ```rust
/// # use touchline_dp::tabulation::count_paths_dp_rolling;
/// # use touchline_model::grid::Grid;
/// let grid = Grid::open(10, 10).unwrap();
/// assert_eq!(count_paths_dp_rolling::<u64>(&grid), Ok(48_620));
/// ```
pub fn count_paths_dp_rolling<C>(grid: &Grid) -> Result<C, CountError>
where
    C: PathCount,
{
    if !grid.endpoints_open() {
        return Ok(C::zero());
    }

    let mut ways = Vec::with_capacity(grid.num_cols());
    seed_row(grid, &mut ways);
    for row in 0..grid.num_rows() {
        for col in 0..grid.num_cols() {
            fold_cell(grid, row, col, &mut ways);
        }
    }

    take_goal(&mut ways)
}
