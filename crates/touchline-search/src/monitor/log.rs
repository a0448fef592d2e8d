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
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::CountStatistics,
};
use std::time::{Duration, Instant};
use touchline_model::grid::Grid;

/// Emits a progress table through `log::info!` while a count runs.
///
/// The clock is only read when `(steps & clock_check_mask) == 0`, and a line
/// is written at most once per `log_interval`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    paths_found: u64,
    lines_logged: u64,
}

/// The default clock check mask, one clock read every 4,096 steps.
pub const DEFAULT_LOG_CLOCK_CHECK_MASK: u64 = 4095;

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            steps: 0,
            paths_found: 0,
            lines_logged: 0,
        }
    }

    /// Creates a monitor that logs at most once per `log_interval`, reading
    /// the clock every 4,096 steps.
    #[inline]
    pub fn with_log_interval(log_interval: Duration) -> Self {
        Self::new(log_interval, DEFAULT_LOG_CLOCK_CHECK_MASK)
    }

    /// Returns the number of progress lines written since the last `on_enter_search`.
    #[inline]
    pub fn lines_logged(&self) -> u64 {
        self.lines_logged
    }

    #[inline(always)]
    fn log_header(&self, grid: &Grid) {
        log::info!(
            "counting paths on {}x{} grid ({} blocked)",
            grid.num_rows(),
            grid.num_cols(),
            grid.num_blocked()
        );
        log::info!("{:<9} | {:<16} | {:<16}", "Elapsed", "Steps", "Paths");
        log::info!("{}", "-".repeat(47));
    }

    #[inline(always)]
    fn log_line(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);

        log::info!(
            "{:<9} | {:<16} | {:<16}",
            elapsed_field,
            self.steps,
            self.paths_found
        );

        self.last_log_time = now;
        self.lines_logged += 1;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::with_log_interval(Duration::from_secs(1))
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, grid: &Grid) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.paths_found = 0;
        self.lines_logged = 0;
        self.log_header(grid);
    }

    fn on_exit_search(&mut self, statistics: &CountStatistics) {
        log::info!("{}", "-".repeat(47));
        log::info!(
            "Count finished: {} paths, {} steps, {} prunings in {:.4}s",
            statistics.paths_found,
            statistics.steps,
            statistics.prunings(),
            statistics.time_total.as_secs_f64()
        );
    }

    #[inline(always)]
    fn on_path_found(&mut self) {
        self.paths_found = self.paths_found.wrapping_add(1);
    }

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line();
        }
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
