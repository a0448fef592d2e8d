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

use crate::stats::CountStatistics;
use touchline_core::num::count::PathCount;

/// The error type for the plain counting functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    /// The number of paths does not fit into the count type.
    Overflow,
    /// The field needs more moves per path than a candidate mask can hold.
    TooManyMoves { moves: usize, max: usize },
}

impl std::fmt::Display for CountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountError::Overflow => write!(f, "Path count overflows the count type"),
            CountError::TooManyMoves { moves, max } => write!(
                f,
                "Paths of {} moves cannot be enumerated: at most {} moves are supported",
                moves, max
            ),
        }
    }
}

impl std::error::Error for CountError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountResult<C> {
    /// Every path has been counted.
    Exact(C),
    /// The count stopped early; at least this many paths exist.
    LowerBound(C),
    /// The count stopped without a usable number.
    Unknown,
}

impl<C> CountResult<C>
where
    C: Clone,
{
    /// Returns the count if it is exact.
    #[inline]
    pub fn exact(&self) -> Option<C> {
        match self {
            CountResult::Exact(c) => Some(c.clone()),
            _ => None,
        }
    }

    /// Returns the best known lower bound on the number of paths.
    #[inline]
    pub fn lower_bound(&self) -> Option<C> {
        match self {
            CountResult::Exact(c) | CountResult::LowerBound(c) => Some(c.clone()),
            CountResult::Unknown => None,
        }
    }
}

impl<C> std::fmt::Display for CountResult<C>
where
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountResult::Exact(c) => write!(f, "{}", c),
            CountResult::LowerBound(c) => write!(f, ">= {}", c),
            CountResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The counter finished and the result is exact.
    Completed,
    /// The count exceeded the capacity of the count type.
    Overflow,
    /// A monitor stopped the count. The string carries the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "Completed"),
            TerminationReason::Overflow => write!(f, "Overflow"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Everything a monitored count reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountOutcome<C> {
    pub result: CountResult<C>,
    pub reason: TerminationReason,
    pub statistics: CountStatistics,
}

impl<C> CountOutcome<C>
where
    C: PathCount,
{
    #[inline]
    pub fn new(
        result: CountResult<C>,
        reason: TerminationReason,
        statistics: CountStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn completed(count: C, statistics: CountStatistics) -> Self {
        Self::new(
            CountResult::Exact(count),
            TerminationReason::Completed,
            statistics,
        )
    }

    #[inline]
    pub fn overflowed(statistics: CountStatistics) -> Self {
        Self::new(CountResult::Unknown, TerminationReason::Overflow, statistics)
    }

    #[inline]
    pub fn aborted(result: CountResult<C>, reason: String, statistics: CountStatistics) -> Self {
        Self::new(result, TerminationReason::Aborted(reason), statistics)
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self.result, CountResult::Exact(_))
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }

    /// Returns the exact count, if the count completed.
    #[inline]
    pub fn count(&self) -> Option<C> {
        self.result.exact()
    }
}

impl<C> std::fmt::Display for CountOutcome<C>
where
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Paths: {} ({}) in {:.4}s",
            self.result,
            self.reason,
            self.statistics.time_total.as_secs_f64()
        )
    }
}
