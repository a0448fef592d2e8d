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

use crate::error::HarnessError;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::Rng;
use std::time::Duration;
use touchline_core::num::count::PathCount;
use touchline_dp::{counter::DpCounter, tabulation::count_paths_dp};
use touchline_exhaustive::counter::ExhaustiveCounter;
use touchline_model::{generator::GridGenerator, grid::Grid};
use touchline_search::{
    counter::PathCounter,
    monitor::{composite::CompositeMonitor, time_limit::TimeLimitMonitor},
    result::CountOutcome,
};

/// The outcomes of both counters on the same field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossCheck<C> {
    pub tabulation: CountOutcome<C>,
    pub enumeration: CountOutcome<C>,
}

impl<C> CrossCheck<C>
where
    C: PathCount,
{
    /// Returns whether the two exact counts match, or `None` if either
    /// counter did not produce an exact count.
    #[inline]
    pub fn agree(&self) -> Option<bool> {
        match (self.tabulation.count(), self.enumeration.count()) {
            (Some(a), Some(b)) => Some(a == b),
            _ => None,
        }
    }
}

/// Counts the paths of `grid` with both counters at once, one scoped thread
/// each. Both threads read the same field.
///
/// # Examples
///
/// ```rust
/// # use touchline_bench::analysis::cross_check;
/// # use touchline_model::grid::Grid;
/// let grid: Grid = "...\n.X.\n...".parse().unwrap();
/// let check = cross_check::<u64>(&grid);
/// assert_eq!(check.agree(), Some(true));
/// assert_eq!(check.tabulation.count(), Some(2));
/// ```
pub fn cross_check<C>(grid: &Grid) -> CrossCheck<C>
where
    C: PathCount,
{
    run_cross_check(grid, None)
}

/// Like `cross_check`, but the enumeration counter stops after `time_limit`.
pub fn cross_check_with_time_limit<C>(grid: &Grid, time_limit: Duration) -> CrossCheck<C>
where
    C: PathCount,
{
    run_cross_check(grid, Some(time_limit))
}

fn run_cross_check<C>(grid: &Grid, time_limit: Option<Duration>) -> CrossCheck<C>
where
    C: PathCount,
{
    std::thread::scope(|scope| {
        let tabulation = scope.spawn(|| DpCounter::<C>::new().count(grid));
        let enumeration = scope.spawn(move || {
            let mut monitor = CompositeMonitor::new();
            if let Some(limit) = time_limit {
                monitor.add_monitor(TimeLimitMonitor::new(limit));
            }
            ExhaustiveCounter::new().count_monitored(grid, &mut monitor)
        });

        let tabulation = tabulation
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        let enumeration = enumeration
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));

        log::debug!(
            "cross check on {}x{} grid: tabulation {}, enumeration {}",
            grid.num_rows(),
            grid.num_cols(),
            tabulation.result,
            enumeration.result
        );

        CrossCheck {
            tabulation,
            enumeration,
        }
    })
}

/// Averages the tabulated path count over `samples` random `n × n` fields.
///
/// Every field is counted exactly before it is converted to `f64`. Returns
/// `0.0` for zero samples.
///
/// # Errors
///
/// Returns `HarnessError::Generator` if the fields cannot be generated.
pub fn mean_path_count<R>(
    n: usize,
    blocked_ratio: f64,
    samples: usize,
    rng: &mut R,
) -> Result<f64, HarnessError>
where
    R: Rng + ?Sized,
{
    let generator = GridGenerator::new().with_blocked_ratio(blocked_ratio)?;
    if samples == 0 {
        return Ok(0.0);
    }

    let mut total = 0f64;
    for _ in 0..samples {
        let grid = generator.generate(n, rng)?;
        let count = count_paths_dp::<BigUint>(&grid)?;
        total += count.to_f64().unwrap_or(f64::INFINITY);
    }
    Ok(total / samples as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use touchline_model::generator::{DEFAULT_BLOCKED_RATIO, GeneratorError, generate_random_grid};
    use touchline_search::result::CountResult;

    #[test]
    fn test_counters_agree_on_random_fields() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for n in 1..=8 {
            for _ in 0..4 {
                let grid = generate_random_grid(n, DEFAULT_BLOCKED_RATIO, &mut rng).unwrap();
                let check = cross_check::<u64>(&grid);
                assert_eq!(check.agree(), Some(true), "disagreement on\n{}", grid);
            }
        }
    }

    #[test]
    fn test_unenumerable_field_cannot_be_compared() {
        let grid = Grid::open(40, 40).unwrap();
        let check = cross_check::<u128>(&grid);
        assert!(check.tabulation.is_exact());
        assert_eq!(check.enumeration.result, CountResult::Unknown);
        assert_eq!(check.agree(), None);
    }

    #[test]
    fn test_time_limited_enumeration_yields_lower_bound() {
        let grid = Grid::open(10, 10).unwrap();
        let check = cross_check_with_time_limit::<u64>(&grid, Duration::ZERO);
        assert_eq!(check.tabulation.count(), Some(48_620));
        assert!(matches!(check.enumeration.result, CountResult::LowerBound(_)));
        assert_eq!(check.agree(), None);
    }

    #[test]
    fn test_mean_on_two_by_two_has_no_opponents() {
        // floor(4 * 0.2) = 0 opponents, always two paths.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(mean_path_count(2, 0.2, 25, &mut rng), Ok(2.0));
        assert_eq!(mean_path_count(2, 0.2, 0, &mut rng), Ok(0.0));
    }

    #[test]
    fn test_mean_path_count_grows_with_side_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let means: Vec<f64> = (2..=7)
            .map(|n| mean_path_count(n, DEFAULT_BLOCKED_RATIO, 400, &mut rng).unwrap())
            .collect();
        for pair in means.windows(2) {
            assert!(pair[1] > pair[0], "means not increasing: {:?}", means);
        }
    }

    #[test]
    fn test_mean_on_hundred_fields_is_finite() {
        // Some fields of this size exceed u128.
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mean = mean_path_count(100, DEFAULT_BLOCKED_RATIO, 3, &mut rng).unwrap();
        assert!(mean.is_finite());
        assert!(mean >= 0.0);
        assert!(mean < 2.3e58);
    }

    #[test]
    fn test_mean_rejects_invalid_ratio() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            mean_path_count(5, -1.0, 10, &mut rng),
            Err(HarnessError::Generator(GeneratorError::InvalidBlockedRatio(_)))
        ));
    }
}
