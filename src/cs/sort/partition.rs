//! Single-pass Lomuto partition.
//!
//! The pivot value is parked in the last slot of the range while one
//! left-to-right scan moves every strictly smaller element to the front.
//! Elements equal to or greater than the pivot keep whatever order the scan
//! leaves them in; there is no second pass.

use super::swap::swap;

/// Partitions the whole of `seq` around the value at `pivot_index` and
/// returns the pivot's final position.
///
/// Every element before the returned index is strictly less than the pivot.
/// An already ascending slice, or a slice of identical values, is left
/// unchanged.
///
/// # Panics
///
/// Panics if `pivot_index` is out of bounds (including for an empty slice).
///
/// # Examples
///
/// ```
/// use kselect::partition;
///
/// let mut nums = [5, 4, 1, 2, 3];
/// assert_eq!(partition(&mut nums, 2), 0);
/// assert_eq!(nums[0], 1);
/// ```
pub fn partition<T: Ord>(seq: &mut [T], pivot_index: usize) -> usize {
    let last = seq.len() - 1;
    swap(seq, pivot_index, last);

    let mut boundary = 0;
    for j in 0..last {
        if seq[j] < seq[last] {
            swap(seq, boundary, j);
            boundary += 1;
        }
    }
    swap(seq, boundary, last);
    boundary
}

/// Partitions the inclusive range `[lo, hi]` of `seq` around the value at
/// `pivot_index` using the same scheme as [`partition`].
///
/// `pivot_index` and the returned position are absolute indices into `seq`.
/// Elements outside the range are never touched.
///
/// # Panics
///
/// Panics if `lo > hi`, `hi` is out of bounds, or `pivot_index` lies outside
/// `[lo, hi]`.
pub fn partition_range<T: Ord>(seq: &mut [T], lo: usize, hi: usize, pivot_index: usize) -> usize {
    assert!(
        lo <= pivot_index && pivot_index <= hi,
        "pivot index {pivot_index} outside range [{lo}, {hi}]"
    );
    lo + partition(&mut seq[lo..=hi], pivot_index - lo)
}
