//! Unthrottled timing of the plain kernels.
//!
//! These numbers are the only ones ever reported; animated runs are dominated
//! by pacing waits and say nothing about algorithm cost.

use std::hint::black_box;
use std::time::{Duration, Instant};

use sort::{SortAlgorithm, algorithm_name, all_algorithms, sort_i32};

use crate::report::RaceReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceResult {
    pub algorithm: SortAlgorithm,
    pub elapsed: Duration,
    /// Nanoseconds on the wall clock, the finest tick available.
    pub ticks: u64,
}

impl RaceResult {
    pub fn new(algorithm: SortAlgorithm, elapsed: Duration) -> Self {
        Self {
            algorithm,
            elapsed,
            ticks: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        algorithm_name(self.algorithm)
    }
}

/// Times `algorithm` on a fresh copy of `input`.
pub fn measure(algorithm: SortAlgorithm, input: &[i32]) -> RaceResult {
    let mut values = input.to_vec();
    let start = Instant::now();
    sort_i32(algorithm, &mut values);
    let elapsed = start.elapsed();
    black_box(&values);
    debug_assert!(sort::is_sorted_non_decreasing(&values));

    let result = RaceResult::new(algorithm, elapsed);
    tracing::trace!(algorithm = result.name(), len = input.len(), ?elapsed, "measured");
    result
}

/// Times every kernel back to back on the calling thread.
pub fn measure_all(input: &[i32], animated: bool) -> RaceReport {
    let results = all_algorithms()
        .iter()
        .map(|&algorithm| measure(algorithm, input))
        .collect();
    RaceReport::new(results, animated)
}
