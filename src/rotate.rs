//! Copying a view as if it were rotated.
//!
//! The source is split at the normalized shift `s`. The tail `[s, n)` is
//! copied first and the front `[0, s)` after it, until the destination fills.
//!
//! # Source offset
//!
//! The returned `source_offset` is the source position the next element
//! would have been read from:
//!
//! | Elements written                | `source_offset`         |
//! |---------------------------------|-------------------------|
//! | `0`                             | `0`                     |
//! | fewer than the tail (`n - s`)   | `s + written`           |
//! | the tail and part of the front  | `written - (n - s)`     |
//! | all `n`                         | `n`                     |
//!
//! A destination that holds exactly the tail therefore reports `0`, the start
//! of the front segment.

use crate::result::CopyResult;
use crate::view::{SequenceView, SequenceViewMut};

/// Normalizes a signed left shift into `[0, length)`.
///
/// Negative shifts rotate right. `length` must be non-zero.
const fn normalize_shift(shift: isize, length: usize) -> usize {
    let magnitude = shift.unsigned_abs() % length;
    if shift >= 0 || magnitude == 0 {
        magnitude
    } else {
        length - magnitude
    }
}

/// Copies `source` rotated left by `shift` into `destination`.
///
/// A negative `shift` rotates right. Shifts of any magnitude are reduced
/// modulo the source length, so shifting by the length is a plain copy. The
/// copy stops when the destination is full.
///
/// # Examples
///
/// ```rust
/// use seqview::rotate::copy_rotated_left;
/// use seqview::view::{SequenceView, SequenceViewMut};
///
/// let source = [1, 2, 3, 4, 5];
/// let mut output = [0; 5];
/// let result = copy_rotated_left(SequenceView::new(&source), &mut SequenceViewMut::new(&mut output), 2);
/// assert_eq!(output, [3, 4, 5, 1, 2]);
/// assert_eq!(result.source_offset, 5);
///
/// let mut output = [0; 5];
/// copy_rotated_left(SequenceView::new(&source), &mut SequenceViewMut::new(&mut output), -1);
/// assert_eq!(output, [5, 1, 2, 3, 4]);
/// ```
pub fn copy_rotated_left<T: Clone>(
    source: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    shift: isize,
) -> CopyResult {
    let items = source.as_slice();
    let length = items.len();
    if length == 0 {
        return CopyResult::new(0, 0);
    }

    let split = normalize_shift(shift, length);
    let (front, tail) = items.split_at(split);
    let slots = destination.as_mut_slice();
    let written = slots.len().min(length);

    for (slot, item) in slots.iter_mut().zip(tail.iter().chain(front)) {
        slot.clone_from(item);
    }

    let source_offset = if written == length || written == 0 {
        written
    } else if written < tail.len() {
        split + written
    } else {
        written - tail.len()
    };

    trace_event!(
        operation = "copy_rotated_left",
        shift = split,
        source_offset,
        destination_offset = written,
        "rotation copy finished"
    );
    CopyResult::new(source_offset, written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 0)]
    #[case(2, 5, 2)]
    #[case(7, 5, 2)]
    #[case(-1, 5, 4)]
    #[case(-5, 5, 0)]
    #[case(-12, 5, 3)]
    #[case(isize::MIN, 4, 0)]
    fn test_normalize_shift(#[case] shift: isize, #[case] length: usize, #[case] expected: usize) {
        assert_eq!(normalize_shift(shift, length), expected);
    }

    #[rstest]
    // Part of the tail.
    #[case(2, 2, &[3, 4], 4)]
    // Exactly the tail.
    #[case(2, 3, &[3, 4, 5], 0)]
    // The tail and part of the front.
    #[case(2, 4, &[3, 4, 5, 1], 1)]
    // Everything.
    #[case(2, 5, &[3, 4, 5, 1, 2], 5)]
    // No room at all resets to the front.
    #[case(2, 0, &[], 0)]
    fn test_partial_destinations(
        #[case] shift: isize,
        #[case] capacity: usize,
        #[case] expected: &[i32],
        #[case] source_offset: usize,
    ) {
        let source = [1, 2, 3, 4, 5];
        let mut output = vec![0; capacity];
        let result = copy_rotated_left(SequenceView::new(&source), &mut SequenceViewMut::new(&mut output), shift);
        assert_eq!(output, expected);
        assert_eq!(result, CopyResult::new(source_offset, capacity));
    }

    #[rstest]
    fn test_empty_source() {
        let source: [i32; 0] = [];
        let mut output = [9; 3];
        let result = copy_rotated_left(SequenceView::new(&source), &mut SequenceViewMut::new(&mut output), 3);
        assert_eq!(result, CopyResult::new(0, 0));
        assert_eq!(output, [9; 3]);
    }

    #[rstest]
    fn test_larger_destination_keeps_extra_slots() {
        let source = [1, 2, 3];
        let mut output = [0; 5];
        let result = copy_rotated_left(SequenceView::new(&source), &mut SequenceViewMut::new(&mut output), 1);
        assert_eq!(output, [2, 3, 1, 0, 0]);
        assert_eq!(result, CopyResult::new(3, 3));
    }
}
