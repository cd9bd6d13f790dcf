use sort::midpoint;

use crate::cancel::Cancelled;
use crate::progress::{Highlight, ProgressObserver};

use super::Pacer;

/// Iterative form of the recursive kernel.
///
/// Pending `(lo, hi)` ranges sit on an explicit stack with the right
/// partition pushed first, so ranges are visited in the same depth-first,
/// left-before-right order as the recursion.
pub(super) async fn sort<O: ProgressObserver>(
    values: &mut [i32],
    pacer: &mut Pacer<O>,
) -> Result<(), Cancelled> {
    let mut ranges = Vec::new();
    if values.len() > 1 {
        ranges.push((0, values.len() - 1));
    }

    while let Some((lo, hi)) = ranges.pop() {
        let pivot = values[midpoint(lo, hi)];
        let mut left = lo;
        let mut right = hi;

        while left <= right {
            while values[left] < pivot {
                left += 1;
                pacer.step(values, Highlight::Pair(left, right)).await?;
            }
            while values[right] > pivot {
                right -= 1;
                pacer.step(values, Highlight::Pair(left, right)).await?;
            }
            if left <= right {
                values.swap(left, right);
                pacer.step(values, Highlight::Pair(left, right)).await?;
                left += 1;
                match right.checked_sub(1) {
                    Some(next) => right = next,
                    None => break,
                }
            }
        }

        if left < hi {
            ranges.push((left, hi));
        }
        if lo < right {
            ranges.push((lo, right));
        }
    }
    Ok(())
}
