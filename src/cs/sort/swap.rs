/// Exchanges the elements at positions `i` and `j` of `seq` in place.
///
/// Swapping a position with itself leaves the slice unchanged.
///
/// # Panics
///
/// Panics if either index is out of bounds.
///
/// # Examples
///
/// ```
/// use kselect::swap;
///
/// let mut nums = [1, 2, 3, 4, 5];
/// swap(&mut nums, 0, 1);
/// assert_eq!(nums, [2, 1, 3, 4, 5]);
/// ```
#[inline]
pub fn swap<T>(seq: &mut [T], i: usize, j: usize) {
    seq.swap(i, j);
}
