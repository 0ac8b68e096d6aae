use std::cmp::Ordering;

use rand::{rngs::ThreadRng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::partition::partition_range;

/// How the quickselect driver chooses a pivot inside its active range.
///
/// The choice never changes the selected value, only the expected running
/// time: fixed positions degrade to O(n²) on adversarial (e.g. already
/// sorted) input, random pivots give expected O(n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPolicy {
    /// Last element of the active range.
    Last,
    /// First element of the active range.
    First,
    /// Midpoint of the active range.
    Middle,
    /// Uniformly random position, drawn from the thread-local generator.
    #[default]
    Random,
    /// Uniformly random position from a ChaCha stream seeded with the given
    /// value, so repeated runs partition identically.
    Seeded(u64),
}

enum Picker {
    Last,
    First,
    Middle,
    Random(ThreadRng),
    Seeded(ChaCha8Rng),
}

impl From<PivotPolicy> for Picker {
    fn from(policy: PivotPolicy) -> Self {
        match policy {
            PivotPolicy::Last => Picker::Last,
            PivotPolicy::First => Picker::First,
            PivotPolicy::Middle => Picker::Middle,
            PivotPolicy::Random => Picker::Random(rand::thread_rng()),
            PivotPolicy::Seeded(seed) => Picker::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Picker {
    fn pick(&mut self, lo: usize, hi: usize) -> usize {
        match self {
            Picker::Last => hi,
            Picker::First => lo,
            Picker::Middle => lo + (hi - lo) / 2,
            Picker::Random(rng) => rng.gen_range(lo..=hi),
            Picker::Seeded(rng) => rng.gen_range(lo..=hi),
        }
    }
}

/// Moves the `n`-th smallest element (0-indexed) of `seq` to position `n`
/// and returns a reference to it, or `None` if `n >= seq.len()`.
///
/// The slice is reordered in place by repeated Lomuto partitions of a
/// shrinking range. On return every element before `n` is `<=` the selected
/// value and every element after it is `>=`.
///
/// # Examples
///
/// ```
/// use kselect::{select_nth, PivotPolicy};
///
/// let mut nums = [7, 1, 3, 4, 6, 2, 5];
/// assert_eq!(select_nth(&mut nums, 3, PivotPolicy::Middle), Some(&4));
/// assert_eq!(nums[3], 4);
/// ```
pub fn select_nth<T: Ord>(seq: &mut [T], n: usize, policy: PivotPolicy) -> Option<&T> {
    if n >= seq.len() {
        return None;
    }

    let mut picker = Picker::from(policy);
    let (mut lo, mut hi) = (0, seq.len() - 1);
    let mut rounds = 0usize;
    loop {
        let pivot = partition_range(seq, lo, hi, picker.pick(lo, hi));
        rounds += 1;
        match n.cmp(&pivot) {
            Ordering::Equal => break,
            // lo <= n < pivot, so pivot >= 1
            Ordering::Less => hi = pivot - 1,
            Ordering::Greater => lo = pivot + 1,
        }
        log::trace!("pivot landed at {pivot}, narrowing to [{lo}, {hi}]");
    }

    log::debug!(
        "selected order statistic {} of {} after {} partition rounds",
        n,
        seq.len(),
        rounds
    );
    Some(&seq[n])
}
