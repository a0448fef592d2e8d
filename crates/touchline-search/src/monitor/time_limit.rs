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

//! # Time Limit Monitor
//!
//! Enforces a wall-clock budget on a count. Reading the clock on every step
//! would dominate the cost of a cheap step, so the monitor only compares the
//! elapsed time when `(steps & clock_check_mask) == 0`. The default mask
//! `0x3FFF` reads the clock once every 16,384 steps; a mask of `0` reads it
//! on every step.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use touchline_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
//! use touchline_search::monitor::time_limit::TimeLimitMonitor;
//!
//! let mut monitor = TimeLimitMonitor::new(Duration::from_secs(5));
//! monitor.on_step();
//! assert_eq!(monitor.search_command(), SearchCommand::Continue);
//! ```

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::CountStatistics,
};
use std::time::{Duration, Instant};
use touchline_model::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    clock_check_mask: u64,
    steps: u64,
    time_limit: Duration,
    start_time: Instant,
}

impl TimeLimitMonitor {
    /// Check every 16,384 steps (2^14).
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3FFF;

    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_STEP_CLOCK_CHECK_MASK)
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: Instant::now(),
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _grid: &Grid) {
        self.start_time = Instant::now();
        self.steps = 0;
    }

    fn on_exit_search(&mut self, _statistics: &CountStatistics) {}

    fn on_path_found(&mut self) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if (self.steps & self.clock_check_mask) == 0 && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_monitor_with_limit(ms: u64) -> TimeLimitMonitor {
        TimeLimitMonitor::new(Duration::from_millis(ms))
    }

    #[test]
    fn test_default_mask_is_power_of_two_minus_one() {
        assert_eq!(TimeLimitMonitor::DEFAULT_STEP_CLOCK_CHECK_MASK, 0x3FFF);
        assert_eq!(new_monitor_with_limit(1).clock_check_mask, 0x3FFF);
    }

    #[test]
    fn test_terminates_after_time_limit_when_mask_condition_met() {
        let mut mon = new_monitor_with_limit(10);
        mon.start_time = Instant::now() - Duration::from_millis(50);
        mon.steps = 0;
        match mon.search_command() {
            SearchCommand::Terminate(msg) => {
                assert!(msg.contains("time limit"), "unexpected message: {msg}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_skips_clock_when_mask_condition_not_met() {
        let mut mon = new_monitor_with_limit(1);
        mon.start_time = Instant::now() - Duration::from_millis(50);
        mon.steps = 1; // 1 & 0x3FFF != 0
        assert_eq!(mon.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_mask_zero_always_checks() {
        let mut mon = TimeLimitMonitor::with_clock_check_mask(Duration::from_millis(1), 0);
        mon.start_time = Instant::now() - Duration::from_millis(50);
        mon.steps = 12345;
        assert!(matches!(mon.search_command(), SearchCommand::Terminate(_)));
    }

    #[test]
    fn test_continues_before_time_limit() {
        let mut mon = new_monitor_with_limit(60_000);
        mon.steps = 0;
        assert_eq!(mon.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_on_step_wraps() {
        let mut mon = new_monitor_with_limit(1000);
        mon.on_step();
        assert_eq!(mon.steps, 1);
        mon.steps = u64::MAX;
        mon.on_step();
        assert_eq!(mon.steps, 0);
    }

    #[test]
    fn test_enter_search_restarts_clock_and_steps() {
        let grid = Grid::open(3, 3).unwrap();
        let mut mon = TimeLimitMonitor::with_clock_check_mask(Duration::from_secs(60), 0);
        mon.start_time = Instant::now() - Duration::from_secs(120);
        mon.steps = 77;
        mon.on_enter_search(&grid);
        assert_eq!(mon.steps, 0);
        assert_eq!(mon.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_mask_condition_triggers_every_2_pow_k_steps() {
        let mut mon = TimeLimitMonitor::with_clock_check_mask(Duration::from_millis(1), 0x3);
        mon.start_time = Instant::now() - Duration::from_millis(50);

        for s in [0u64, 4, 8, 12] {
            mon.steps = s;
            assert!(
                matches!(mon.search_command(), SearchCommand::Terminate(_)),
                "expected a clock check at steps={s}"
            );
        }
        for s in [1u64, 2, 3, 5, 6, 7] {
            mon.steps = s;
            assert_eq!(mon.search_command(), SearchCommand::Continue, "steps={s}");
        }
    }
}
