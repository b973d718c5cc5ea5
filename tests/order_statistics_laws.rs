//! Property-based tests for partial sort and nth-element selection.

use proptest::prelude::*;
use seqview::compare::NaturalOrder;
use seqview::order::{item_at, partial_sort};
use seqview::view::SequenceViewMut;

fn values_and_rank() -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(-50i32..50, 1..60).prop_flat_map(|values| {
        let length = values.len();
        (Just(values), 0..length)
    })
}

// =============================================================================
// Partial Sort Law
// Description: The first k are the k smallest in order; the rest are ≥ them
// =============================================================================

proptest! {
    #[test]
    fn prop_partial_sort_places_smallest_in_order(
        values in prop::collection::vec(-50i32..50, 0..60),
        fraction in 0.0f64..=1.0
    ) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let k = ((values.len() as f64) * fraction) as usize;
        let mut sorted = values.clone();
        sorted.sort_unstable();

        let mut result = values.clone();
        partial_sort(&mut SequenceViewMut::new(&mut result), k, &NaturalOrder).unwrap();

        prop_assert_eq!(&result[..k], &sorted[..k]);
        if k > 0 {
            prop_assert!(result[k..].iter().all(|value| *value >= result[k - 1]));
        }
        let mut permutation = result.clone();
        permutation.sort_unstable();
        prop_assert_eq!(permutation, sorted);
    }
}

// =============================================================================
// Selection Law
// Description: item_at returns the element of that rank, partitioned around it
// =============================================================================

proptest! {
    #[test]
    fn prop_item_at_matches_sorted_rank((values, index) in values_and_rank()) {
        let mut sorted = values.clone();
        sorted.sort_unstable();

        let mut result = values.clone();
        let selected = *item_at(&mut SequenceViewMut::new(&mut result), index, &NaturalOrder).unwrap();

        prop_assert_eq!(selected, sorted[index]);
        prop_assert_eq!(result[index], selected);
        prop_assert!(result[..index].iter().all(|value| *value <= selected));
        prop_assert!(result[index + 1..].iter().all(|value| *value >= selected));
    }
}
