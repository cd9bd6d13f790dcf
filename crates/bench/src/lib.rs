use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Inputs up to this length count as "small" for runtime presets.
pub const SMALL_INPUT_LIMIT: usize = 500;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= SMALL_INPUT_LIMIT {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, min: i32, max: i32) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(min..=max)).collect()
}

/// Ascending `0..len` with roughly one percent of positions swapped.
pub fn nearly_sorted<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    let mut data: Vec<i32> = (0..len).map(|i| i as i32).collect();
    if len < 2 {
        return data;
    }
    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}
