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

use std::time::Duration;
use touchline_core::num::ops::SaturatingAddVal;

/// Statistics collected while counting paths.
///
/// The tabulation counter counts one step per table cell. The enumeration
/// counter counts one step per candidate move sequence and records why each
/// rejected candidate was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountStatistics {
    /// Total work units processed.
    pub steps: u64,
    /// Total single moves applied while simulating candidates.
    pub moves_simulated: u64,
    /// Candidates rejected for leaving the field.
    pub prunings_out_of_bounds: u64,
    /// Candidates rejected for entering an opponent's cell.
    pub prunings_blocked: u64,
    /// Candidates that stayed on open cells but ended away from the goal.
    pub prunings_wrong_endpoint: u64,
    /// Total valid paths found.
    pub paths_found: u64,
    /// Total time spent counting.
    pub time_total: Duration,
}

impl CountStatistics {
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add_val(1);
    }

    #[inline]
    pub fn on_moves_simulated(&mut self, moves: u64) {
        self.moves_simulated = self.moves_simulated.saturating_add_val(moves);
    }

    #[inline]
    pub fn on_pruning_out_of_bounds(&mut self) {
        self.prunings_out_of_bounds = self.prunings_out_of_bounds.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_blocked(&mut self) {
        self.prunings_blocked = self.prunings_blocked.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_wrong_endpoint(&mut self) {
        self.prunings_wrong_endpoint = self.prunings_wrong_endpoint.saturating_add_val(1);
    }

    #[inline]
    pub fn on_path_found(&mut self) {
        self.paths_found = self.paths_found.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the total number of rejected candidates.
    #[inline]
    pub fn prunings(&self) -> u64 {
        self.prunings_out_of_bounds
            .saturating_add_val(self.prunings_blocked)
            .saturating_add_val(self.prunings_wrong_endpoint)
    }
}

impl std::fmt::Display for CountStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Path Count Statistics:")?;
        writeln!(f, "  Steps:                   {}", self.steps)?;
        writeln!(f, "  Moves simulated:         {}", self.moves_simulated)?;
        writeln!(f, "  Prunings (out of bounds):{}", self.prunings_out_of_bounds)?;
        writeln!(f, "  Prunings (blocked):      {}", self.prunings_blocked)?;
        writeln!(f, "  Prunings (wrong end):    {}", self.prunings_wrong_endpoint)?;
        writeln!(f, "  Paths found:             {}", self.paths_found)?;
        writeln!(f, "  Total time:              {:.2?}", self.time_total)?;
        Ok(())
    }
}
