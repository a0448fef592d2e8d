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

//! # Touchline Model
//!
//! **The playing field for the Opponent Avoidance Problem.**
//!
//! A player starts in the top-left corner of a rectangular field and may only
//! move down or right; some cells are occupied by opponents and may not be
//! entered. This crate defines that field and the ways to obtain one. It is
//! the data interchange layer between the producers of fields (literals,
//! files, the random generator) and the counters in `touchline_dp` and
//! `touchline_exhaustive`.
//!
//! ## Architecture
//!
//! * **`index`**: strongly typed `RowIndex` / `ColIndex` wrappers.
//! * **`grid`**: `Cell`, the immutable `Grid`, and the mutable `GridBuilder`.
//! * **`loading`**: `GridLoader`, which parses the `.`/`X` literal representation.
//! * **`generator`**: `GridGenerator`, random fields with an exact number of opponents.
//! * **`complexity`**: log-space search-space sizes for the two counting strategies.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: ragged or empty fields are rejected at construction, so a
//!     counter never sees a malformed grid.
//! 2.  **Read-Only**: a built `Grid` has no mutators and is `Send + Sync`; it can
//!     be handed to several counters at once.
//! 3.  **Explicit Randomness**: the generator takes the random source as a
//!     parameter instead of reaching for a global.

pub mod complexity;
pub mod generator;
pub mod grid;
pub mod index;
pub mod loading;
