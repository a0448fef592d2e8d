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

//! # Touchline DP
//!
//! Counts the monotonic paths of an opponent field by tabulation. The number
//! of ways to reach an open cell is the number of ways to reach the cell above
//! it plus the number of ways to reach the cell to its left; blocked cells are
//! reached in zero ways. One pass in row-major order fills the table in
//! `Θ(rows · cols)` time.
//!
//! Counts are generic over `PathCount`. Use `num_bigint::BigUint` for exact
//! counts on large fields; a fixed-width type reports `CountError::Overflow`
//! once the number of paths to the goal leaves its range.
//!
//! ## Modules
//!
//! - `tabulation`: The plain functions `count_paths_dp` (full table) and
//!   `count_paths_dp_rolling` (one row buffer).
//! - `counter`: `DpCounter`, the monitored `PathCounter` implementation.
//!
//! ## Usage
//!
//! ```rust
//! use touchline_dp::tabulation::count_paths_dp;
//! use touchline_model::grid::Grid;
//!
//! let grid: Grid = "...\n...\n...".parse().unwrap();
//! assert_eq!(count_paths_dp::<u64>(&grid), Ok(6));
//! ```

pub mod counter;
pub mod tabulation;
