//! Reservoir sampling into a fixed destination.
//!
//! [`copy_sampled`] draws `k = destination.len()` items uniformly without
//! replacement from a source of any finite length, reading it once. Randomness
//! comes through the [`RandomSource`] port:
//!
//! - [`SplitMixSource`]: seeded and deterministic, for reproducible runs
//! - `RngSource`: any `rand::Rng` (feature `rand`)

use crate::result::CopyResult;
use crate::view::SequenceViewMut;

// =============================================================================
// RandomSource port
// =============================================================================

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`.
    ///
    /// Callers in this crate never pass `bound == 0`.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

// =============================================================================
// SplitMixSource
// =============================================================================

/// Deterministic generator based on `SplitMix64`.
///
/// The same seed always yields the same sequence, which makes sampled output
/// reproducible in tests.
///
/// # Examples
///
/// ```rust
/// use seqview::sample::{RandomSource, SplitMixSource};
///
/// let mut first = SplitMixSource::new(7);
/// let mut second = SplitMixSource::new(7);
/// assert_eq!(first.next_below(100), second.next_below(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMixSource {
    state: u64,
}

impl SplitMixSource {
    const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a generator from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next 64 random bits.
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GOLDEN_GAMMA);
        let mut mixed = self.state;
        mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        mixed ^ (mixed >> 31)
    }
}

impl RandomSource for SplitMixSource {
    #[allow(clippy::cast_possible_truncation)]
    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        // Multiply-shift keeps the result below `bound` without a modulo.
        ((u128::from(self.next_u64()) * bound as u128) >> 64) as usize
    }
}

// =============================================================================
// RngSource
// =============================================================================

/// Adapts any [`rand::Rng`] to [`RandomSource`].
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqview::sample::{RandomSource, RngSource};
///
/// let mut source = RngSource(StdRng::seed_from_u64(1));
/// assert!(source.next_below(10) < 10);
/// ```
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand::Rng> RandomSource for RngSource<R> {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.0.random_range(0..bound)
    }
}

// =============================================================================
// Sampling
// =============================================================================

/// Fills `destination` with a uniform random sample of `source`.
///
/// The first `k` items fill the destination. Every later item, the `i`-th
/// seen counting from zero, replaces a random slot with probability
/// `k / (i + 1)`. The result reports how many items were seen and
/// `min(k, seen)` slots written. A source shorter than `k` is copied in
/// order and leaves the remaining slots untouched.
///
/// # Examples
///
/// ```rust
/// use seqview::sample::{copy_sampled, SplitMixSource};
/// use seqview::view::SequenceViewMut;
///
/// let mut picked = [0; 3];
/// let result = copy_sampled(1..=100, &mut SequenceViewMut::new(&mut picked), &mut SplitMixSource::new(42));
/// assert_eq!(result.source_offset, 100);
/// assert_eq!(result.destination_offset, 3);
/// assert!(picked.iter().all(|value| (1..=100).contains(value)));
/// ```
pub fn copy_sampled<T, I, R>(source: I, destination: &mut SequenceViewMut<'_, T>, random: &mut R) -> CopyResult
where
    I: IntoIterator<Item = T>,
    R: RandomSource + ?Sized,
{
    let slots = destination.as_mut_slice();
    let capacity = slots.len();
    let mut seen = 0;

    for item in source {
        if seen < capacity {
            slots[seen] = item;
        } else {
            let candidate = random.next_below(seen + 1);
            if candidate < capacity {
                slots[candidate] = item;
            }
        }
        seen += 1;
    }

    let written = seen.min(capacity);
    trace_event!(
        operation = "copy_sampled",
        source_offset = seen,
        destination_offset = written,
        "sampling finished"
    );
    CopyResult::new(seen, written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Always picks the same index.
    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn next_below(&mut self, bound: usize) -> usize {
            self.0.min(bound - 1)
        }
    }

    #[rstest]
    fn test_short_source_is_copied_in_order() {
        let mut slots = [0; 5];
        let result = copy_sampled([4, 5], &mut SequenceViewMut::new(&mut slots), &mut Fixed(0));
        assert_eq!(result, CopyResult::new(2, 2));
        assert_eq!(slots, [4, 5, 0, 0, 0]);
    }

    #[rstest]
    fn test_replacement_uses_drawn_index() {
        let mut slots = [0; 2];
        copy_sampled([1, 2, 3, 4], &mut SequenceViewMut::new(&mut slots), &mut Fixed(1));
        assert_eq!(slots, [1, 4]);
    }

    #[rstest]
    fn test_out_of_reservoir_draw_skips_item() {
        let mut slots = [0; 2];
        copy_sampled([1, 2, 3], &mut SequenceViewMut::new(&mut slots), &mut Fixed(2));
        assert_eq!(slots, [1, 2]);
    }

    #[rstest]
    fn test_empty_destination_still_counts_source() {
        let mut slots: [i32; 0] = [];
        let result = copy_sampled(0..10, &mut SequenceViewMut::new(&mut slots), &mut SplitMixSource::new(1));
        assert_eq!(result, CopyResult::new(10, 0));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(17)]
    #[case(usize::MAX)]
    fn test_split_mix_stays_below_bound(#[case] bound: usize) {
        let mut source = SplitMixSource::new(99);
        for _ in 0..1_000 {
            assert!(source.next_below(bound) < bound);
        }
    }
}
