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

//! # Runtime Harness
//!
//! Runs a `PathCounter` over random square fields of increasing side length
//! and records how long each run took. Every run gets a freshly generated
//! field from one seeded random stream, so a harness with a fixed seed always
//! measures the same sequence of fields.
//!
//! Each run is logged at `info` level as
//! `Grid size: {n}x{n}, Paths: {p}, Elapsed time: {t:.4}s`. A time limit and
//! a progress interval attach a `TimeLimitMonitor` and a `LogMonitor` to every
//! run, stacked in a `CompositeMonitor`.
//!
//! Counts on the default tabulation sizes reach about `1e58`, so measure with
//! `num_bigint::BigUint` unless the sizes are small.
//!
//! ## Usage
//!
//! ```rust
//! use num_bigint::BigUint;
//! use touchline_bench::harness::RuntimeHarness;
//! use touchline_dp::counter::DpCounter;
//!
//! let harness = RuntimeHarness::builder()
//!     .sizes([4, 8, 16])
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let samples = harness.measure(&mut DpCounter::<BigUint>::new()).unwrap();
//! assert_eq!(samples.len(), 3);
//! assert_eq!(samples[2].instance_size, 256);
//! ```

use crate::error::HarnessError;
use rand::{SeedableRng, rngs::StdRng};
use std::time::{Duration, Instant};
use touchline_core::num::count::PathCount;
use touchline_model::{
    complexity::Complexity,
    generator::{DEFAULT_BLOCKED_RATIO, GeneratorError, GridGenerator},
    grid::Grid,
};
use touchline_search::{
    counter::PathCounter,
    monitor::{composite::CompositeMonitor, log::LogMonitor, time_limit::TimeLimitMonitor},
    result::{CountResult, TerminationReason},
};

/// Side lengths suited to the tabulation counter.
pub const DEFAULT_TABULATION_SIZES: [usize; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Side lengths suited to the enumeration counter.
pub const DEFAULT_ENUMERATION_SIZES: [usize; 11] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// The seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// One timed run of a counter on one random field.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSample<C> {
    /// The side length `n` of the `n × n` field.
    pub side: usize,
    /// The instance size `n · n`.
    pub instance_size: usize,
    pub result: CountResult<C>,
    pub reason: TerminationReason,
    /// Wall-clock time of the count, excluding field generation.
    pub elapsed: Duration,
    /// The theoretical work of the counter on this field.
    pub complexity: Complexity,
}

impl<C> RuntimeSample<C> {
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }
}

impl<C> std::fmt::Display for RuntimeSample<C>
where
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Grid size: {}x{}, Paths: {}, Elapsed time: {:.4}s",
            self.side,
            self.side,
            self.result,
            self.elapsed_secs()
        )
    }
}

/// A configured runtime measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeHarness {
    sizes: Vec<usize>,
    generator: GridGenerator,
    repetitions: usize,
    time_limit: Option<Duration>,
    progress_interval: Option<Duration>,
    seed: u64,
    stop_after_abort: bool,
}

impl RuntimeHarness {
    #[inline]
    pub fn builder() -> RuntimeHarnessBuilder {
        RuntimeHarnessBuilder::new()
    }

    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    #[inline]
    pub fn blocked_ratio(&self) -> f64 {
        self.generator.blocked_ratio()
    }

    #[inline]
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn progress_interval(&self) -> Option<Duration> {
        self.progress_interval
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs `counter` on `repetitions` random fields per configured size, in
    /// the configured order.
    ///
    /// With `stop_after_abort` set, the first aborted run ends the
    /// measurement; the aborted sample is still returned.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Generator` if a field of one of the sizes
    /// cannot be generated.
    pub fn measure<C, P>(&self, counter: &mut P) -> Result<Vec<RuntimeSample<C>>, HarnessError>
    where
        C: PathCount,
        P: PathCounter<C> + ?Sized,
    {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut samples = Vec::with_capacity(self.sizes.len() * self.repetitions);

        log::debug!(
            "measuring {} on sizes {:?} (ratio {}, {} repetitions, seed {})",
            counter.name(),
            self.sizes,
            self.blocked_ratio(),
            self.repetitions,
            self.seed
        );

        'sizes: for &side in &self.sizes {
            for _ in 0..self.repetitions {
                let grid = self.generator.generate(side, &mut rng)?;
                let sample = self.run_once(counter, &grid, side);
                log::info!("{}", sample);

                let aborted = sample.is_aborted();
                samples.push(sample);
                if aborted && self.stop_after_abort {
                    log::warn!(
                        "{} aborted on {}x{} grid, skipping the remaining sizes",
                        counter.name(),
                        side,
                        side
                    );
                    break 'sizes;
                }
            }
        }

        Ok(samples)
    }

    fn run_once<C, P>(&self, counter: &mut P, grid: &Grid, side: usize) -> RuntimeSample<C>
    where
        C: PathCount,
        P: PathCounter<C> + ?Sized,
    {
        let complexity = counter.complexity(grid);
        log::debug!(
            "{} on {}x{} grid, estimated work {}",
            counter.name(),
            side,
            side,
            complexity
        );

        let mut monitor = CompositeMonitor::with_capacity(2);
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        if let Some(interval) = self.progress_interval {
            monitor.add_monitor(LogMonitor::with_log_interval(interval));
        }

        let start_time = Instant::now();
        let outcome = if monitor.is_empty() {
            counter.count(grid)
        } else {
            counter.count_monitored(grid, &mut monitor)
        };
        let elapsed = start_time.elapsed();

        RuntimeSample {
            side,
            instance_size: side * side,
            result: outcome.result,
            reason: outcome.reason,
            elapsed,
            complexity,
        }
    }
}

/// Builder for `RuntimeHarness`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeHarnessBuilder {
    sizes: Vec<usize>,
    blocked_ratio: f64,
    repetitions: usize,
    time_limit: Option<Duration>,
    progress_interval: Option<Duration>,
    seed: u64,
    stop_after_abort: bool,
}

impl Default for RuntimeHarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeHarnessBuilder {
    /// Creates a builder with the tabulation sizes, the default blocked
    /// ratio, one repetition, no time limit, no progress logging and
    /// `DEFAULT_SEED`.
    #[inline]
    pub fn new() -> Self {
        Self {
            sizes: DEFAULT_TABULATION_SIZES.to_vec(),
            blocked_ratio: DEFAULT_BLOCKED_RATIO,
            repetitions: 1,
            time_limit: None,
            progress_interval: None,
            seed: DEFAULT_SEED,
            stop_after_abort: true,
        }
    }

    /// Sets the side lengths to measure, in order.
    #[inline]
    pub fn sizes<I>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Uses `DEFAULT_ENUMERATION_SIZES`.
    #[inline]
    pub fn enumeration_sizes(self) -> Self {
        self.sizes(DEFAULT_ENUMERATION_SIZES)
    }

    /// Uses `DEFAULT_TABULATION_SIZES`.
    #[inline]
    pub fn tabulation_sizes(self) -> Self {
        self.sizes(DEFAULT_TABULATION_SIZES)
    }

    #[inline]
    pub fn blocked_ratio(mut self, blocked_ratio: f64) -> Self {
        self.blocked_ratio = blocked_ratio;
        self
    }

    /// Sets how many random fields are measured per size.
    #[inline]
    pub fn repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Limits every single run to `time_limit`.
    #[inline]
    pub fn time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Logs a progress line at most once per `interval` during every run.
    #[inline]
    pub fn progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether an aborted run ends the measurement.
    #[inline]
    pub fn stop_after_abort(mut self, stop_after_abort: bool) -> Self {
        self.stop_after_abort = stop_after_abort;
        self
    }

    /// Validates the configuration and builds the harness.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Generator` for an invalid blocked ratio or a
    /// side length of zero.
    pub fn build(self) -> Result<RuntimeHarness, HarnessError> {
        let generator = GridGenerator::new().with_blocked_ratio(self.blocked_ratio)?;
        if self.sizes.contains(&0) {
            return Err(GeneratorError::InvalidSize.into());
        }

        Ok(RuntimeHarness {
            sizes: self.sizes,
            generator,
            repetitions: self.repetitions,
            time_limit: self.time_limit,
            progress_interval: self.progress_interval,
            seed: self.seed,
            stop_after_abort: self.stop_after_abort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use touchline_dp::counter::DpCounter;
    use touchline_exhaustive::counter::ExhaustiveCounter;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_builder_defaults() {
        let harness = RuntimeHarness::builder().build().unwrap();
        assert_eq!(harness.sizes(), &DEFAULT_TABULATION_SIZES);
        assert_eq!(harness.blocked_ratio(), DEFAULT_BLOCKED_RATIO);
        assert_eq!(harness.repetitions(), 1);
        assert_eq!(harness.time_limit(), None);
        assert_eq!(harness.progress_interval(), None);
        assert_eq!(harness.seed(), DEFAULT_SEED);

        let harness = RuntimeHarness::builder().enumeration_sizes().build().unwrap();
        assert_eq!(harness.sizes(), &DEFAULT_ENUMERATION_SIZES);
    }

    #[test]
    fn test_builder_rejects_invalid_configuration() {
        assert!(matches!(
            RuntimeHarness::builder().blocked_ratio(2.0).build(),
            Err(HarnessError::Generator(GeneratorError::InvalidBlockedRatio(_)))
        ));
        assert_eq!(
            RuntimeHarness::builder().sizes([3, 0]).build(),
            Err(HarnessError::Generator(GeneratorError::InvalidSize))
        );
    }

    #[test]
    fn test_measures_open_fields_exactly() {
        init_logger();
        let harness = RuntimeHarness::builder()
            .sizes([1, 2, 3, 5])
            .blocked_ratio(0.0)
            .build()
            .unwrap();
        let samples = harness.measure(&mut DpCounter::<u64>::new()).unwrap();

        let counts: Vec<CountResult<u64>> = samples.iter().map(|s| s.result).collect();
        assert_eq!(
            counts,
            vec![
                CountResult::Exact(1),
                CountResult::Exact(2),
                CountResult::Exact(6),
                CountResult::Exact(70)
            ]
        );
        let instance_sizes: Vec<usize> = samples.iter().map(|s| s.instance_size).collect();
        assert_eq!(instance_sizes, vec![1, 4, 9, 25]);
        assert!((samples[3].complexity.raw() - 25f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_default_sizes_are_counted_exactly() {
        init_logger();
        let harness = RuntimeHarness::builder().build().unwrap();
        let samples = harness.measure(&mut DpCounter::<BigUint>::new()).unwrap();

        assert_eq!(samples.len(), DEFAULT_TABULATION_SIZES.len());
        for sample in &samples {
            assert_eq!(sample.reason, TerminationReason::Completed, "side {}", sample.side);
            assert!(sample.result.exact().is_some());
        }
    }

    #[test]
    fn test_progress_and_time_limit_share_each_run() {
        init_logger();
        let harness = RuntimeHarness::builder()
            .sizes([2, 3, 4, 5])
            .time_limit(Duration::from_secs(60))
            .progress_interval(Duration::ZERO)
            .seed(5)
            .build()
            .unwrap();
        assert_eq!(harness.progress_interval(), Some(Duration::ZERO));

        let dp = harness.measure(&mut DpCounter::<u64>::new()).unwrap();
        let ex: Vec<RuntimeSample<u64>> = harness.measure(&mut ExhaustiveCounter::new()).unwrap();
        assert_eq!(dp.len(), 4);
        for (a, b) in dp.iter().zip(&ex) {
            assert_eq!(a.reason, TerminationReason::Completed);
            assert_eq!(a.result, b.result, "side {}", a.side);
        }
    }

    #[test]
    fn test_progress_logging_does_not_hide_the_time_limit() {
        let harness = RuntimeHarness::builder()
            .sizes([9])
            .time_limit(Duration::ZERO)
            .progress_interval(Duration::from_secs(3600))
            .build()
            .unwrap();
        let samples: Vec<RuntimeSample<u64>> =
            harness.measure(&mut ExhaustiveCounter::new()).unwrap();
        assert!(samples[0].is_aborted());
    }

    #[test]
    fn test_repetitions_and_seed_reproduce_fields() {
        let harness = RuntimeHarness::builder()
            .sizes([6, 9])
            .repetitions(3)
            .seed(7)
            .build()
            .unwrap();
        let first = harness.measure(&mut DpCounter::<u64>::new()).unwrap();
        let second = harness.measure(&mut DpCounter::<u64>::new()).unwrap();

        assert_eq!(first.len(), 6);
        let results = |s: &[RuntimeSample<u64>]| s.iter().map(|x| x.result).collect::<Vec<_>>();
        assert_eq!(results(&first), results(&second));
    }

    #[test]
    fn test_counters_agree_on_same_seed() {
        let harness = RuntimeHarness::builder()
            .sizes([2, 3, 4, 5, 6, 7])
            .seed(3)
            .build()
            .unwrap();
        let dp = harness.measure(&mut DpCounter::<u64>::new()).unwrap();
        let ex: Vec<RuntimeSample<u64>> = harness.measure(&mut ExhaustiveCounter::new()).unwrap();

        for (a, b) in dp.iter().zip(&ex) {
            assert_eq!(a.result, b.result, "side {}", a.side);
            assert!(b.complexity > a.complexity || a.side <= 2);
        }
    }

    #[test]
    fn test_abort_stops_the_measurement() {
        init_logger();
        // A zero budget is noticed at the first clock check, step 16,384.
        // Side 2 finishes before that, side 9 (65,536 candidates) does not.
        let harness = RuntimeHarness::builder()
            .sizes([2, 9, 10])
            .time_limit(Duration::ZERO)
            .build()
            .unwrap();
        let samples: Vec<RuntimeSample<u64>> =
            harness.measure(&mut ExhaustiveCounter::new()).unwrap();

        assert_eq!(samples.len(), 2);
        assert!(!samples[0].is_aborted());
        assert!(samples[1].is_aborted());
        assert!(matches!(samples[1].result, CountResult::LowerBound(_)));
    }

    #[test]
    fn test_abort_can_be_ignored() {
        let harness = RuntimeHarness::builder()
            .sizes([9, 9, 2])
            .time_limit(Duration::ZERO)
            .stop_after_abort(false)
            .build()
            .unwrap();
        let samples: Vec<RuntimeSample<u64>> =
            harness.measure(&mut ExhaustiveCounter::new()).unwrap();
        assert_eq!(samples.len(), 3);
        assert!(!samples[2].is_aborted());
    }

    #[test]
    fn test_sample_line_format() {
        let sample = RuntimeSample {
            side: 8,
            instance_size: 64,
            result: CountResult::Exact(102u64),
            reason: TerminationReason::Completed,
            elapsed: Duration::from_micros(12_345),
            complexity: Complexity::tabulation(8, 8),
        };
        assert_eq!(
            sample.to_string(),
            "Grid size: 8x8, Paths: 102, Elapsed time: 0.0123s"
        );
    }
}
