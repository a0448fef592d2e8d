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

//! # Touchline Search
//!
//! The shared vocabulary of the path counters: the `PathCounter` trait they
//! implement, the `CountOutcome` they return, the `CountStatistics` they
//! collect, and the `SearchMonitor`s that observe and stop them.
//!
//! ## Modules
//!
//! - `counter`: The `PathCounter` trait.
//! - `monitor`: Lifecycle hooks, time limits, interrupts, logging and composition.
//! - `result`: `CountResult`, `TerminationReason`, `CountOutcome` and `CountError`.
//! - `stats`: Counters for steps, simulated moves, prunings and paths found.

pub mod counter;
pub mod monitor;
pub mod result;
pub mod stats;
