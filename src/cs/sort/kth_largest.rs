//! k-th largest and k-th smallest selection on top of quickselect.
//!
//! Both families separate two outcomes:
//! - `Err(Error::InvalidArgument)` when the sequence or rank is missing or the
//!   rank is not an integer. Nothing is mutated.
//! - `Ok(None)` when the rank is a well-formed integer outside `[0, len)`,
//!   including every rank of an empty sequence.

use super::quickselect::{select_nth, PivotPolicy};
use super::rank::IntoRank;
use crate::error::{Error, Result};

fn checked_rank(k: i64, len: usize) -> Option<usize> {
    let rank = usize::try_from(k).ok().filter(|&k| k < len);
    if rank.is_none() {
        log::debug!("rank {k} out of range for sequence of length {len}");
    }
    rank
}

/// Returns the value that would sit at index `k` if `seq` were sorted in
/// descending order, so `k = 0` is the maximum. Duplicates count
/// individually toward the rank.
///
/// `seq` is partially reordered in place. Pivots are chosen at random; see
/// [`kth_largest_with`] to pick a policy.
///
/// # Examples
///
/// ```
/// use kselect::{kth_largest, Error};
///
/// let mut nums = vec![2, 4, 1, 0, 3];
/// assert_eq!(kth_largest(&mut nums, 0), Ok(Some(4)));
/// assert_eq!(kth_largest(&mut nums, 4), Ok(Some(0)));
/// assert_eq!(kth_largest(&mut nums, -1), Ok(None));
/// assert!(matches!(kth_largest(&mut nums, 1.1), Err(Error::InvalidArgument(_))));
/// ```
pub fn kth_largest<T, K>(seq: &mut [T], k: K) -> Result<Option<T>>
where
    T: Ord + Clone,
    K: IntoRank,
{
    kth_largest_with(seq, k, PivotPolicy::default())
}

/// [`kth_largest`] with an explicit pivot policy.
pub fn kth_largest_with<T, K>(seq: &mut [T], k: K, policy: PivotPolicy) -> Result<Option<T>>
where
    T: Ord + Clone,
    K: IntoRank,
{
    let k = k.into_rank()?;
    let len = seq.len();
    Ok(checked_rank(k, len).and_then(|k| select_nth(seq, len - 1 - k, policy).cloned()))
}

/// [`kth_largest`] for callers whose sequence may be absent.
///
/// A missing sequence is an [`Error::InvalidArgument`], checked before the
/// rank.
pub fn kth_largest_in<T, K>(seq: Option<&mut [T]>, k: K) -> Result<Option<T>>
where
    T: Ord + Clone,
    K: IntoRank,
{
    let seq = seq.ok_or_else(|| Error::invalid("sequence is missing"))?;
    kth_largest(seq, k)
}

/// Returns the value that would sit at index `k` if `seq` were sorted in
/// ascending order, so `k = 0` is the minimum.
///
/// Same validation and out-of-range rules as [`kth_largest`].
pub fn kth_smallest<T, K>(seq: &mut [T], k: K) -> Result<Option<T>>
where
    T: Ord + Clone,
    K: IntoRank,
{
    kth_smallest_with(seq, k, PivotPolicy::default())
}

/// [`kth_smallest`] with an explicit pivot policy.
pub fn kth_smallest_with<T, K>(seq: &mut [T], k: K, policy: PivotPolicy) -> Result<Option<T>>
where
    T: Ord + Clone,
    K: IntoRank,
{
    let k = k.into_rank()?;
    let len = seq.len();
    Ok(checked_rank(k, len).and_then(|k| select_nth(seq, k, policy).cloned()))
}
