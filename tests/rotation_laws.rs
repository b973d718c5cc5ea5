//! Property-based tests for rotation copies.

use proptest::prelude::*;
use seqview::rotate::copy_rotated_left;
use seqview::view::{SequenceView, SequenceViewMut};

fn rotated(values: &[i32], shift: isize) -> Vec<i32> {
    let mut output = vec![0; values.len()];
    let result = copy_rotated_left(SequenceView::new(values), &mut SequenceViewMut::new(&mut output), shift);
    assert_eq!(result.destination_offset, values.len());
    output
}

// =============================================================================
// Identity Law
// Description: Shifting by zero or by the length is a plain copy
// =============================================================================

proptest! {
    #[test]
    fn prop_zero_and_full_shift_are_identity(values in prop::collection::vec(any::<i32>(), 1..40)) {
        #[allow(clippy::cast_possible_wrap)]
        let length = values.len() as isize;

        prop_assert_eq!(rotated(&values, 0), values.clone());
        prop_assert_eq!(rotated(&values, length), values.clone());
        prop_assert_eq!(rotated(&values, -length), values);
    }
}

// =============================================================================
// Inverse Law
// Description: Rotating by s and then by length - s restores the order
// =============================================================================

proptest! {
    #[test]
    fn prop_rotation_inverse(values in prop::collection::vec(any::<i32>(), 1..40), shift in -100isize..100) {
        #[allow(clippy::cast_possible_wrap)]
        let length = values.len() as isize;
        let once = rotated(&values, shift);

        prop_assert_eq!(rotated(&once, length - shift), values.clone());
        prop_assert_eq!(rotated(&once, -shift), values);
    }
}

// =============================================================================
// Model Law
// Description: Agrees with slice::rotate_left for any shift
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_rotate_left(values in prop::collection::vec(any::<i32>(), 1..40), shift in -100isize..100) {
        let mut model = values.clone();
        model.rotate_left(shift.rem_euclid(values.len().try_into().unwrap()).try_into().unwrap());

        prop_assert_eq!(rotated(&values, shift), model);
    }
}
