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

//! # Touchline Exhaustive
//!
//! Counts the monotonic paths of an opponent field by trying every candidate.
//! A path on an `r × c` field takes exactly `n = r + c - 2` moves, so every
//! `n`-bit mask describes one candidate sequence of rights and downs. Each
//! candidate is walked from the start; it counts if it never leaves the field,
//! never enters an opponent's cell, and stops on the goal. The work grows as
//! `Θ(2^n · n)`, which makes this counter a reference for small fields and a
//! baseline for runtime comparisons rather than a practical tool.
//!
//! ## Modules
//!
//! - `moves`: `Move` and the bit-packed `MoveSequence`.
//! - `simulate`: Walking one candidate and classifying how it ends.
//! - `enumeration`: The plain function `count_paths_exhaustive`.
//! - `counter`: `ExhaustiveCounter`, the monitored `PathCounter` implementation.

pub mod counter;
pub mod enumeration;
pub mod moves;
pub mod simulate;
