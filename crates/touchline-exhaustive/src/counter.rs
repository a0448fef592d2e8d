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
    enumeration::candidate_length,
    moves::MoveSequence,
    simulate::{SimulationOutcome, simulate},
};
use std::time::Instant;
use touchline_core::num::count::PathCount;
use touchline_model::{complexity::Complexity, grid::Grid};
use touchline_search::{
    counter::PathCounter,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::{CountOutcome, CountResult},
    stats::CountStatistics,
};

/// The enumeration strategy as a monitored `PathCounter`.
///
/// One step is one candidate sequence. When a monitor stops the count, the
/// paths found so far are reported as `CountResult::LowerBound`. Fields whose
/// paths are too long to enumerate end immediately as aborted with
/// `CountResult::Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveCounter;

impl ExhaustiveCounter {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

/// One enumeration run over a single field.
struct EnumerationSession<'a, 'm, C> {
    grid: &'a Grid,
    monitor: &'m mut dyn SearchMonitor,
    count: C,
    stats: CountStatistics,
    start_time: Instant,
}

impl<'a, 'm, C> EnumerationSession<'a, 'm, C>
where
    C: PathCount,
{
    fn new(grid: &'a Grid, monitor: &'m mut dyn SearchMonitor) -> Self {
        Self {
            grid,
            monitor,
            count: C::zero(),
            stats: CountStatistics::default(),
            start_time: Instant::now(),
        }
    }

    fn run(mut self) -> CountOutcome<C> {
        self.monitor.on_enter_search(self.grid);

        let moves = match candidate_length(self.grid) {
            Ok(moves) => moves,
            Err(e) => {
                return self.finish(|_, stats| {
                    CountOutcome::aborted(CountResult::Unknown, e.to_string(), stats)
                });
            }
        };

        if !self.grid.endpoints_open() {
            return self.finish(|_, stats| CountOutcome::completed(C::zero(), stats));
        }

        for candidate in MoveSequence::enumerate(moves) {
            self.monitor.on_step();
            self.stats.on_step();

            if let SearchCommand::Terminate(msg) = self.monitor.search_command() {
                return self.finish(|count, stats| {
                    CountOutcome::aborted(CountResult::LowerBound(count), msg, stats)
                });
            }

            if !self.process_candidate(&candidate) {
                return self.finish(|_, stats| CountOutcome::overflowed(stats));
            }
        }

        self.finish(CountOutcome::completed)
    }

    /// Simulates one candidate and records the outcome. Returns `false` if the
    /// running count overflowed.
    #[inline(always)]
    fn process_candidate(&mut self, candidate: &MoveSequence) -> bool {
        let outcome = simulate(self.grid, candidate);
        self.stats
            .on_moves_simulated(outcome.moves_applied(candidate) as u64);

        match outcome {
            SimulationOutcome::ReachedGoal => {
                match self.count.checked_add(&C::one()) {
                    Some(next) => self.count = next,
                    None => return false,
                }
                self.stats.on_path_found();
                self.monitor.on_path_found();
            }
            SimulationOutcome::OutOfBounds { .. } => self.stats.on_pruning_out_of_bounds(),
            SimulationOutcome::Blocked { .. } => self.stats.on_pruning_blocked(),
            SimulationOutcome::WrongEndpoint { .. } => self.stats.on_pruning_wrong_endpoint(),
        }
        true
    }

    #[inline]
    fn finish<F>(mut self, build: F) -> CountOutcome<C>
    where
        F: FnOnce(C, CountStatistics) -> CountOutcome<C>,
    {
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        build(self.count, self.stats)
    }
}

impl<C> PathCounter<C> for ExhaustiveCounter
where
    C: PathCount,
{
    fn name(&self) -> &str {
        "ExhaustiveCounter"
    }

    fn complexity(&self, grid: &Grid) -> Complexity {
        grid.enumeration_complexity()
    }

    fn count_monitored(
        &mut self,
        grid: &Grid,
        monitor: &mut dyn SearchMonitor,
    ) -> CountOutcome<C> {
        EnumerationSession::new(grid, monitor).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;
    use touchline_search::{
        monitor::{interrupt::InterruptMonitor, time_limit::TimeLimitMonitor},
        result::TerminationReason,
    };

    /// Stops the count once more than `limit` steps have been taken.
    struct StepLimit {
        limit: u64,
        steps: u64,
        exits: usize,
    }

    impl SearchMonitor for StepLimit {
        fn name(&self) -> &str {
            "StepLimit"
        }
        fn on_enter_search(&mut self, _grid: &Grid) {}
        fn on_exit_search(&mut self, _statistics: &CountStatistics) {
            self.exits += 1;
        }
        fn on_path_found(&mut self) {}
        fn on_step(&mut self) {
            self.steps += 1;
        }
        fn search_command(&self) -> SearchCommand {
            if self.steps > self.limit {
                SearchCommand::Terminate("step limit".to_string())
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn test_statistics_classify_every_candidate() {
        // 3x3 with the centre blocked: 16 candidates, 2 paths.
        let grid: Grid = "...\n.X.\n...".parse().unwrap();
        let outcome: CountOutcome<u64> = ExhaustiveCounter::new().count(&grid);
        let stats = &outcome.statistics;

        assert_eq!(outcome.result, CountResult::Exact(2));
        assert_eq!(outcome.reason, TerminationReason::Completed);
        assert_eq!(stats.steps, 16);
        assert_eq!(stats.paths_found, 2);
        assert_eq!(stats.paths_found + stats.prunings(), 16);
        assert!(stats.prunings_blocked > 0);
        assert!(stats.prunings_out_of_bounds > 0);
    }

    #[test]
    fn test_step_limit_reports_lower_bound() {
        // Open 3x3: candidates 0..8 contain the paths 0b011, 0b101 and 0b110.
        let grid = Grid::open(3, 3).unwrap();
        let mut monitor = StepLimit {
            limit: 8,
            steps: 0,
            exits: 0,
        };
        let outcome: CountOutcome<u64> =
            ExhaustiveCounter::new().count_monitored(&grid, &mut monitor);

        assert_eq!(outcome.result, CountResult::LowerBound(3));
        assert_eq!(
            outcome.reason,
            TerminationReason::Aborted("step limit".to_string())
        );
        assert_eq!(outcome.statistics.steps, 9);
        assert_eq!(monitor.exits, 1);
    }

    #[test]
    fn test_expired_time_limit_aborts_on_first_check() {
        let grid = Grid::open(12, 12).unwrap();
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::ZERO, 0);
        let outcome: CountOutcome<u64> =
            ExhaustiveCounter::new().count_monitored(&grid, &mut monitor);

        assert_eq!(outcome.result, CountResult::LowerBound(0));
        assert!(outcome.is_aborted());
        assert_eq!(outcome.statistics.steps, 1);
    }

    #[test]
    fn test_interrupt_before_start() {
        let flag = AtomicBool::new(true);
        let mut monitor = InterruptMonitor::new(&flag);
        let grid = Grid::open(4, 4).unwrap();
        let outcome: CountOutcome<u32> =
            ExhaustiveCounter::new().count_monitored(&grid, &mut monitor);
        assert!(matches!(outcome.reason, TerminationReason::Aborted(_)));
    }

    #[test]
    fn test_too_many_moves_aborts_without_steps() {
        let grid = Grid::open(40, 40).unwrap();
        let outcome: CountOutcome<u64> = ExhaustiveCounter::new().count(&grid);
        assert_eq!(outcome.result, CountResult::Unknown);
        assert!(outcome.is_aborted());
        assert_eq!(outcome.statistics.steps, 0);
    }

    #[test]
    fn test_overflow_is_reported() {
        let grid = Grid::open(7, 7).unwrap();
        let outcome: CountOutcome<u8> = ExhaustiveCounter::new().count(&grid);
        assert_eq!(outcome.result, CountResult::Unknown);
        assert_eq!(outcome.reason, TerminationReason::Overflow);
        assert_eq!(outcome.statistics.paths_found, 255);
    }

    #[test]
    fn test_blocked_goal_completes_with_zero() {
        let grid: Grid = "..\n.X".parse().unwrap();
        let outcome: CountOutcome<u64> = ExhaustiveCounter::new().count(&grid);
        assert_eq!(outcome.result, CountResult::Exact(0));
        assert_eq!(outcome.statistics.steps, 0);
    }

    #[test]
    fn test_complexity_is_enumeration() {
        let grid = Grid::open(3, 3).unwrap();
        let c = PathCounter::<u64>::complexity(&ExhaustiveCounter::new(), &grid);
        assert!((c.raw() - 64f64.log10()).abs() < 1e-12);
    }
}
