mod algorithms;

pub use algorithms::common::{is_sorted_non_decreasing, midpoint};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    InsertionSort,
    QuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::QuickSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "Bubble",
        SortAlgorithm::InsertionSort => "Insertion",
        SortAlgorithm::QuickSort => "QuickSort",
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

/// Sorts `data` in place into non-decreasing order.
///
/// The kernels never allocate and are deterministic for a given input order.
pub fn sort_i32(algo: SortAlgorithm, data: &mut [i32]) {
    match algo {
        SortAlgorithm::BubbleSort => algorithms::bubble_sort::sort(data),
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data),
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(data),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[i32]) {
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort_i32(algo, &mut actual);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn small_scenario() {
        for &algo in all_algorithms() {
            let mut data = [5, 3, 1, 4, 2];
            sort_i32(algo, &mut data);
            assert_eq!(data, [1, 2, 3, 4, 5], "algorithm={algo}");
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![2, 1],
            vec![1, 2],
            vec![7, 7, 7, 7],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i32::MIN, 1, i32::MAX, 0, i32::MAX - 1, -2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x1DE0_2026);
        let data: Vec<i32> = (0..300).map(|_| rng.random_range(1..=1000)).collect();
        for &algo in all_algorithms() {
            let mut once = data.clone();
            sort_i32(algo, &mut once);
            let mut twice = once.clone();
            sort_i32(algo, &mut twice);
            assert_eq!(once, twice, "algorithm={algo}");
            assert!(is_sorted_non_decreasing(&twice));
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 1024] {
            let data: Vec<i32> = (0..size).map(|_| rng.random::<i32>()).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 500, 1024] {
            let data: Vec<i32> = (0..size).map(|_| rng.random_range(0..16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn midpoint_floors_toward_lo() {
        assert_eq!(midpoint(0, 0), 0);
        assert_eq!(midpoint(0, 1), 0);
        assert_eq!(midpoint(3, 8), 5);
        assert_eq!(midpoint(usize::MAX - 2, usize::MAX), usize::MAX - 1);
    }

    #[test]
    fn sortedness_helper() {
        assert!(is_sorted_non_decreasing(&[]));
        assert!(is_sorted_non_decreasing(&[1, 1, 2]));
        assert!(!is_sorted_non_decreasing(&[2, 1]));
    }
}
