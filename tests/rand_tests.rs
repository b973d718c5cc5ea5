#![cfg(feature = "rand")]
//! Sampling with `rand` generators.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use seqview::sample::{RandomSource, RngSource, copy_sampled};
use seqview::view::SequenceViewMut;

#[rstest]
#[case(1)]
#[case(3)]
#[case(1_000)]
fn test_rng_source_stays_below_bound(#[case] bound: usize) {
    let mut source = RngSource(StdRng::seed_from_u64(17));
    for _ in 0..500 {
        assert!(source.next_below(bound) < bound);
    }
}

#[rstest]
fn test_seeded_rng_sample_is_reproducible() {
    let sample = |seed: u64| {
        let mut picked = [0; 5];
        copy_sampled(0..100, &mut SequenceViewMut::new(&mut picked), &mut RngSource(StdRng::seed_from_u64(seed)));
        picked
    };
    assert_eq!(sample(9), sample(9));
}

#[rstest]
fn test_thread_rng_fills_destination() {
    let mut picked = [0; 3];
    let result = copy_sampled(0..10, &mut SequenceViewMut::new(&mut picked), &mut RngSource(rand::rng()));
    assert_eq!(result.destination_offset, 3);
    assert!(picked.iter().all(|value| (0..10).contains(value)));
}
