use super::common;

pub fn sort(data: &mut [i32]) {
    if data.len() > 1 {
        quick_sort_range(data, 0, data.len() - 1);
    }
}

/// Sorts `data[lo..=hi]`, left partition first.
///
/// The pivot is always the value at the midpoint index, so crafted inputs can
/// drive this quadratic. That pivot rule is what the race measures.
fn quick_sort_range(data: &mut [i32], lo: usize, hi: usize) {
    let pivot = data[common::midpoint(lo, hi)];
    let mut left = lo;
    let mut right = hi;

    while left <= right {
        while data[left] < pivot {
            left += 1;
        }
        while data[right] > pivot {
            right -= 1;
        }
        if left <= right {
            data.swap(left, right);
            left += 1;
            match right.checked_sub(1) {
                Some(next) => right = next,
                // Right cursor crossed index 0; the left cursor is already past it.
                None => break,
            }
        }
    }

    if lo < right {
        quick_sort_range(data, lo, right);
    }
    if left < hi {
        quick_sort_range(data, left, hi);
    }
}
