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

use crate::{
    moves::{MAX_MOVES, MoveSequence},
    simulate::simulate,
};
use touchline_core::num::count::PathCount;
use touchline_model::grid::Grid;
use touchline_search::result::CountError;

/// Returns the candidate length for `grid`, or an error if it cannot be enumerated.
#[inline]
pub(crate) fn candidate_length(grid: &Grid) -> Result<usize, CountError> {
    let moves = grid.path_length();
    if moves > MAX_MOVES {
        return Err(CountError::TooManyMoves {
            moves,
            max: MAX_MOVES,
        });
    }
    Ok(moves)
}

/// Counts the monotonic paths of `grid` by simulating all `2^(r + c - 2)`
/// candidate move sequences.
///
/// Returns `Ok(0)` if the start or the goal is blocked.
///
/// # Errors
///
/// Returns `CountError::TooManyMoves` if a path needs more than `MAX_MOVES`
/// moves and `CountError::Overflow` if the count does not fit into `C`.
///
/// # Examples
///
/// ```rust
/// # use touchline_exhaustive::enumeration::count_paths_exhaustive;
/// # use touchline_model::grid::Grid;
/// let grid: Grid = "...\n.X.\n...".parse().unwrap();
/// assert_eq!(count_paths_exhaustive::<u32>(&grid), Ok(2));
/// ```
pub fn count_paths_exhaustive<C>(grid: &Grid) -> Result<C, CountError>
where
    C: PathCount,
{
    let moves = candidate_length(grid)?;
    if !grid.endpoints_open() {
        return Ok(C::zero());
    }

    let mut count = C::zero();
    for candidate in MoveSequence::enumerate(moves) {
        if simulate(grid, &candidate).is_path() {
            count = count
                .checked_add(&C::one())
                .ok_or(CountError::Overflow)?;
        }
    }
    Ok(count)
}
