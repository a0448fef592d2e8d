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

use crate::moves::{Move, MoveSequence};
use touchline_model::{
    grid::{Grid, Position},
    index::{ColIndex, RowIndex},
};

/// How a candidate move sequence ends when walked from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// Every move stayed on open cells and the last one ended on the goal.
    ReachedGoal,
    /// Move number `moves` (1-based) left the field.
    OutOfBounds { moves: usize },
    /// After `moves` moves the walk stood on the opponent at `position`.
    /// `moves == 0` means the start itself is blocked.
    Blocked { moves: usize, position: Position },
    /// Every move stayed on open cells but the walk stopped at `position`.
    WrongEndpoint { position: Position },
}

impl SimulationOutcome {
    #[inline]
    pub fn is_path(&self) -> bool {
        matches!(self, SimulationOutcome::ReachedGoal)
    }

    /// Returns the number of moves applied before the walk ended.
    #[inline]
    pub fn moves_applied(&self, sequence: &MoveSequence) -> usize {
        match self {
            SimulationOutcome::OutOfBounds { moves } | SimulationOutcome::Blocked { moves, .. } => {
                *moves
            }
            SimulationOutcome::ReachedGoal | SimulationOutcome::WrongEndpoint { .. } => {
                sequence.len()
            }
        }
    }
}

impl std::fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationOutcome::ReachedGoal => write!(f, "reached goal"),
            SimulationOutcome::OutOfBounds { moves } => {
                write!(f, "left the field on move {}", moves)
            }
            SimulationOutcome::Blocked { moves, position } => {
                write!(f, "ran into opponent at {} after {} moves", position, moves)
            }
            SimulationOutcome::WrongEndpoint { position } => {
                write!(f, "stopped at {} instead of the goal", position)
            }
        }
    }
}

/// Walks `sequence` from the start of `grid` and reports how it ends.
///
/// The walk stops at the first move that leaves the field or enters a blocked
/// cell. A sequence of the wrong length is not rejected up front; it simply
/// ends somewhere other than the goal or runs off the field.
///
/// # Examples
///
/// ```rust
/// # use touchline_exhaustive::moves::{Move, MoveSequence};
/// # use touchline_exhaustive::simulate::{simulate, SimulationOutcome};
/// # use touchline_model::grid::{Grid, Position};
/// let grid: Grid = ".X\n..".parse().unwrap();
/// let down_right = MoveSequence::from_moves(&[Move::Down, Move::Right]).unwrap();
/// let right_down = MoveSequence::from_moves(&[Move::Right, Move::Down]).unwrap();
///
/// assert_eq!(simulate(&grid, &down_right), SimulationOutcome::ReachedGoal);
/// assert_eq!(
///     simulate(&grid, &right_down),
///     SimulationOutcome::Blocked { moves: 1, position: Position::new(0, 1) }
/// );
/// ```
pub fn simulate(grid: &Grid, sequence: &MoveSequence) -> SimulationOutcome {
    let (num_rows, num_cols) = (grid.num_rows(), grid.num_cols());
    let (mut row, mut col) = (0usize, 0usize);

    if unsafe { is_blocked_unchecked(grid, row, col) } {
        return SimulationOutcome::Blocked {
            moves: 0,
            position: Position::new(row, col),
        };
    }

    for (k, m) in sequence.iter().enumerate() {
        match m {
            Move::Right => col += 1,
            Move::Down => row += 1,
        }

        if row >= num_rows || col >= num_cols {
            return SimulationOutcome::OutOfBounds { moves: k + 1 };
        }

        if unsafe { is_blocked_unchecked(grid, row, col) } {
            return SimulationOutcome::Blocked {
                moves: k + 1,
                position: Position::new(row, col),
            };
        }
    }

    if row == num_rows - 1 && col == num_cols - 1 {
        SimulationOutcome::ReachedGoal
    } else {
        SimulationOutcome::WrongEndpoint {
            position: Position::new(row, col),
        }
    }
}

/// # Safety
///
/// The caller must ensure that `(row, col)` lies inside `grid`.
#[inline(always)]
unsafe fn is_blocked_unchecked(grid: &Grid, row: usize, col: usize) -> bool {
    unsafe {
        grid.cell_unchecked(RowIndex::new(row), ColIndex::new(col))
            .is_blocked()
    }
}
