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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use num_bigint::BigUint;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;
use touchline_bench::harness::{DEFAULT_ENUMERATION_SIZES, DEFAULT_TABULATION_SIZES};
use touchline_dp::{
    counter::DpCounter,
    tabulation::{count_paths_dp, count_paths_dp_rolling},
};
use touchline_exhaustive::enumeration::count_paths_exhaustive;
use touchline_model::{
    generator::{DEFAULT_BLOCKED_RATIO, generate_random_grid},
    grid::Grid,
};
use touchline_search::counter::PathCounter;

const SEED: u64 = 0xB0A7;

fn random_grid(side: usize, rng: &mut StdRng) -> Grid {
    generate_random_grid(side, DEFAULT_BLOCKED_RATIO, rng)
        .unwrap_or_else(|e| panic!("Failed to generate {}x{} grid: {}", side, side, e))
}

fn bench_tabulation(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("tabulation");
    let mut counter = DpCounter::<BigUint>::with_capacity(100);

    for side in DEFAULT_TABULATION_SIZES {
        let grid = random_grid(side, &mut rng);
        let paths = count_paths_dp::<BigUint>(&grid)
            .unwrap_or_else(|e| panic!("Failed to count {}x{} grid: {}", side, side, e));
        log::info!("tabulation {}x{}: {} paths", side, side, paths);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("full_table", side), &grid, |b, g| {
            b.iter(|| count_paths_dp::<BigUint>(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("rolling_row", side), &grid, |b, g| {
            b.iter(|| count_paths_dp_rolling::<BigUint>(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("monitored", side), &grid, |b, g| {
            b.iter(|| counter.count(black_box(g)))
        });
    }

    group.finish();
}

fn bench_enumeration(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("enumeration");
    group.sample_size(10);

    for side in DEFAULT_ENUMERATION_SIZES {
        let grid = random_grid(side, &mut rng);
        if let Err(e) = count_paths_exhaustive::<u64>(&grid) {
            panic!("Failed to enumerate {}x{} grid: {}", side, side, e);
        }
        let candidates = 1u64 << grid.path_length();
        group.throughput(Throughput::Elements(candidates));

        group.bench_with_input(BenchmarkId::new("bit_masks", side), &grid, |b, g| {
            b.iter(|| count_paths_exhaustive::<u64>(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tabulation, bench_enumeration);
criterion_main!(benches);
