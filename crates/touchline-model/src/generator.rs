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

//! # Random Field Generator
//!
//! Produces square `n × n` fields with an exact number of opponents. The
//! number of blocked cells is `floor(n² · blocked_ratio)` and the positions are
//! an exact sample without replacement from every cell except the start and
//! the goal, so two fields generated with the same parameters always carry the
//! same number of opponents and both endpoints are always open.
//!
//! The random source is a parameter. Pass a seeded `StdRng` (or any other
//! `Rng`) to reproduce a field exactly; the generator itself keeps no state
//! between calls.
//!
//! ## Usage
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use touchline_model::generator::generate_random_grid;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let grid = generate_random_grid(10, 0.2, &mut rng).unwrap();
//! assert_eq!(grid.num_blocked(), 20);
//! assert!(grid.endpoints_open());
//! ```

use crate::grid::{Grid, GridBuilder};
use rand::Rng;

/// The blocked ratio used by the benchmark programs.
pub const DEFAULT_BLOCKED_RATIO: f64 = 0.20;

/// The error type for random field generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorError {
    /// The side length must be at least 1.
    InvalidSize,
    /// The blocked ratio must be a number in `[0, 1]`.
    InvalidBlockedRatio(f64),
    /// More opponents were requested than there are cells besides start and goal.
    TooManyBlocked { requested: usize, available: usize },
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize => write!(f, "Grid side length must be at least 1"),
            Self::InvalidBlockedRatio(r) => {
                write!(f, "Blocked ratio {} is not a number in [0, 1]", r)
            }
            Self::TooManyBlocked {
                requested,
                available,
            } => write!(
                f,
                "Cannot block {} cells: only {} cells besides start and goal exist",
                requested, available
            ),
        }
    }
}

impl std::error::Error for GeneratorError {}

#[inline]
fn validate_blocked_ratio(blocked_ratio: f64) -> Result<f64, GeneratorError> {
    if (0.0..=1.0).contains(&blocked_ratio) {
        Ok(blocked_ratio)
    } else {
        Err(GeneratorError::InvalidBlockedRatio(blocked_ratio))
    }
}

/// Returns the number of cells a `n × n` field blocks at `blocked_ratio`,
/// `floor(n² · blocked_ratio)`.
#[inline]
pub fn blocked_cell_count(n: usize, blocked_ratio: f64) -> usize {
    ((n * n) as f64 * blocked_ratio).floor() as usize
}

/// Returns the number of cells eligible for blocking, all except start and goal.
#[inline]
fn candidate_cell_count(n: usize) -> usize {
    match n {
        0 => 0,
        // Start and goal coincide.
        1 => 0,
        _ => n * n - 2,
    }
}

/// Configuration for random field generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGenerator {
    blocked_ratio: f64,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self {
            blocked_ratio: DEFAULT_BLOCKED_RATIO,
        }
    }
}

impl GridGenerator {
    /// Creates a generator with `DEFAULT_BLOCKED_RATIO`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fraction of cells to block.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidBlockedRatio` if the ratio is NaN or outside `[0, 1]`.
    #[inline]
    pub fn with_blocked_ratio(mut self, blocked_ratio: f64) -> Result<Self, GeneratorError> {
        self.blocked_ratio = validate_blocked_ratio(blocked_ratio)?;
        Ok(self)
    }

    #[inline]
    pub fn blocked_ratio(&self) -> f64 {
        self.blocked_ratio
    }

    /// Generates an `n × n` field.
    ///
    /// Cells are numbered row-major. Start is cell `0` and goal is cell
    /// `n² - 1`, so the candidates are exactly the cells `1..n² - 1` and a
    /// sampled candidate index `k` maps to cell `k + 1`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidSize` for `n == 0` and
    /// `GeneratorError::TooManyBlocked` if `floor(n² · ratio)` exceeds the
    /// number of cells besides start and goal.
    pub fn generate<R>(&self, n: usize, rng: &mut R) -> Result<Grid, GeneratorError>
    where
        R: Rng + ?Sized,
    {
        if n == 0 {
            return Err(GeneratorError::InvalidSize);
        }

        let requested = blocked_cell_count(n, self.blocked_ratio);
        let available = candidate_cell_count(n);
        if requested > available {
            return Err(GeneratorError::TooManyBlocked {
                requested,
                available,
            });
        }

        let mut builder = GridBuilder::new(n, n);
        for candidate in rand::seq::index::sample(rng, available, requested) {
            builder.block_flat(candidate + 1);
        }

        log::trace!(
            "generated {}x{} grid with {} blocked cells (ratio {})",
            n,
            n,
            requested,
            self.blocked_ratio
        );

        builder
            .build()
            .map_err(|_| GeneratorError::InvalidSize)
    }
}

/// Generates an `n × n` field with `floor(n² · blocked_ratio)` opponents.
///
/// # Errors
///
/// See `GridGenerator::generate`; additionally returns
/// `GeneratorError::InvalidBlockedRatio` for a ratio outside `[0, 1]`.
#[inline]
pub fn generate_random_grid<R>(
    n: usize,
    blocked_ratio: f64,
    rng: &mut R,
) -> Result<Grid, GeneratorError>
where
    R: Rng + ?Sized,
{
    GridGenerator::new()
        .with_blocked_ratio(blocked_ratio)?
        .generate(n, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_blocked_cell_count_floors() {
        assert_eq!(blocked_cell_count(10, 0.2), 20);
        assert_eq!(blocked_cell_count(3, 0.2), 1); // 1.8
        assert_eq!(blocked_cell_count(2, 0.2), 0); // 0.8
        assert_eq!(blocked_cell_count(7, 0.0), 0);
    }

    #[test]
    fn test_rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_random_grid(0, 0.2, &mut rng),
            Err(GeneratorError::InvalidSize)
        );
    }

    #[test]
    fn test_rejects_invalid_ratio() {
        assert!(matches!(
            GridGenerator::new().with_blocked_ratio(1.5),
            Err(GeneratorError::InvalidBlockedRatio(_))
        ));
        assert!(matches!(
            GridGenerator::new().with_blocked_ratio(-0.1),
            Err(GeneratorError::InvalidBlockedRatio(_))
        ));
        assert!(matches!(
            GridGenerator::new().with_blocked_ratio(f64::NAN),
            Err(GeneratorError::InvalidBlockedRatio(_))
        ));
    }

    #[test]
    fn test_rejects_more_blocks_than_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_random_grid(3, 1.0, &mut rng),
            Err(GeneratorError::TooManyBlocked {
                requested: 9,
                available: 7
            })
        );
        assert_eq!(
            generate_random_grid(1, 1.0, &mut rng),
            Err(GeneratorError::TooManyBlocked {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_single_cell_field_is_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate_random_grid(1, 0.5, &mut rng).unwrap();
        assert_eq!(grid.num_cells(), 1);
        assert_eq!(grid.num_blocked(), 0);
        assert!(grid.endpoints_open());
    }

    #[test]
    fn test_exact_count_and_open_endpoints_across_sizes_and_ratios() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in 2..=16 {
            for ratio in [0.0, 0.1, 0.2, 0.35, 0.5, 0.8] {
                let expected = blocked_cell_count(n, ratio);
                if expected > n * n - 2 {
                    continue;
                }
                let grid = generate_random_grid(n, ratio, &mut rng).unwrap();
                assert_eq!(grid.num_blocked(), expected, "n={n}, ratio={ratio}");
                assert!(grid.endpoints_open(), "n={n}, ratio={ratio}");
                assert!(!grid.blocked_positions().any(|p| p == grid.start() || p == grid.goal()));
            }
        }
    }

    #[test]
    fn test_fully_blocked_interior_when_ratio_allows() {
        // 2x2 at ratio 0.5 blocks both off-diagonal cells.
        let mut rng = StdRng::seed_from_u64(11);
        let grid = generate_random_grid(2, 0.5, &mut rng).unwrap();
        let positions: Vec<Position> = grid.blocked_positions().collect();
        assert_eq!(positions, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = generate_random_grid(12, 0.2, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_random_grid(12, 0.2, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_is_stateless_between_calls() {
        let generator = GridGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);
        let first = generator.generate(9, &mut rng).unwrap();
        let second = generator.generate(9, &mut rng).unwrap();
        assert_eq!(first.num_blocked(), second.num_blocked());
        assert_eq!(generator.blocked_ratio(), DEFAULT_BLOCKED_RATIO);
    }

    #[test]
    fn test_accepts_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(1);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let grid = GridGenerator::new().generate(5, dyn_rng).unwrap();
        assert_eq!(grid.num_blocked(), 5);
    }
}
