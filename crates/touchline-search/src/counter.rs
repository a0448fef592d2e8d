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
    monitor::{no_op::NoOpMonitor, search_monitor::SearchMonitor},
    result::CountOutcome,
};
use touchline_core::num::count::PathCount;
use touchline_model::{complexity::Complexity, grid::Grid};

/// A strategy that counts the monotonic paths of a field.
///
/// Implementors must call `on_enter_search` once before any work,
/// `on_step` followed by `search_command` for every unit of work, and
/// `on_exit_search` once before returning. A `Terminate` command is honored
/// before the next unit of work starts.
///
/// Counters may keep scratch buffers between calls, hence `&mut self`; the
/// field itself is only read.
pub trait PathCounter<C>
where
    C: PathCount,
{
    /// Returns the name of the counter.
    fn name(&self) -> &str;

    /// Returns the theoretical amount of work this counter performs on `grid`.
    fn complexity(&self, grid: &Grid) -> Complexity;

    /// Counts the paths of `grid`, reporting to and obeying `monitor`.
    fn count_monitored(&mut self, grid: &Grid, monitor: &mut dyn SearchMonitor)
    -> CountOutcome<C>;

    /// Counts the paths of `grid` without observation or limits.
    #[inline]
    fn count(&mut self, grid: &Grid) -> CountOutcome<C> {
        let mut monitor = NoOpMonitor::new();
        self.count_monitored(grid, &mut monitor)
    }
}

impl<C> std::fmt::Debug for dyn PathCounter<C> + '_
where
    C: PathCount,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathCounter({})", self.name())
    }
}

impl<C> std::fmt::Display for dyn PathCounter<C> + '_
where
    C: PathCount,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathCounter({})", self.name())
    }
}
