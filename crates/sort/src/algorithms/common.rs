#[inline]
pub fn midpoint(lo: usize, hi: usize) -> usize {
    lo + ((hi - lo) >> 1)
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
