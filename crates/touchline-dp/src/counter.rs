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

use crate::tabulation::{fold_cell, seed_row, take_goal};
use std::time::Instant;
use touchline_core::num::count::PathCount;
use touchline_model::{complexity::Complexity, grid::Grid};
use touchline_search::{
    counter::PathCounter,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::{CountOutcome, CountResult},
    stats::CountStatistics,
};

/// The tabulation strategy as a monitored `PathCounter`.
///
/// One step is one folded cell. The row buffer survives between calls, so
/// counting many fields with the same counter allocates only when a wider
/// field comes along. An aborted count reports `CountResult::Unknown`: a
/// partially filled table says nothing about the goal.
#[derive(Debug, Clone)]
pub struct DpCounter<C> {
    ways: Vec<Option<C>>,
}

impl<C> Default for DpCounter<C> {
    fn default() -> Self {
        Self { ways: Vec::new() }
    }
}

impl<C> DpCounter<C>
where
    C: PathCount,
{
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter whose buffer fits fields up to `num_cols` columns wide.
    #[inline]
    pub fn with_capacity(num_cols: usize) -> Self {
        Self {
            ways: Vec::with_capacity(num_cols),
        }
    }

    #[inline]
    fn finish(
        &self,
        monitor: &mut dyn SearchMonitor,
        mut stats: CountStatistics,
        start_time: Instant,
        result: Result<C, Option<String>>,
    ) -> CountOutcome<C> {
        stats.set_total_time(start_time.elapsed());
        if let Ok(count) = &result {
            stats.paths_found = count.to_u64().unwrap_or(u64::MAX);
        }
        monitor.on_exit_search(&stats);

        match result {
            Ok(count) => CountOutcome::completed(count, stats),
            Err(Some(reason)) => CountOutcome::aborted(CountResult::Unknown, reason, stats),
            Err(None) => CountOutcome::overflowed(stats),
        }
    }
}

impl<C> PathCounter<C> for DpCounter<C>
where
    C: PathCount,
{
    fn name(&self) -> &str {
        "DpCounter"
    }

    fn complexity(&self, grid: &Grid) -> Complexity {
        grid.tabulation_complexity()
    }

    fn count_monitored(
        &mut self,
        grid: &Grid,
        monitor: &mut dyn SearchMonitor,
    ) -> CountOutcome<C> {
        let start_time = Instant::now();
        let mut stats = CountStatistics::default();
        monitor.on_enter_search(grid);

        if !grid.endpoints_open() {
            return self.finish(monitor, stats, start_time, Ok(C::zero()));
        }

        seed_row(grid, &mut self.ways);
        for row in 0..grid.num_rows() {
            for col in 0..grid.num_cols() {
                monitor.on_step();
                stats.on_step();

                if let SearchCommand::Terminate(msg) = monitor.search_command() {
                    return self.finish(monitor, stats, start_time, Err(Some(msg)));
                }

                fold_cell(grid, row, col, &mut self.ways);
            }
        }

        let result = take_goal(&mut self.ways).map_err(|_| None);
        self.finish(monitor, stats, start_time, result)
    }
}
