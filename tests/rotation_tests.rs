//! Integration tests for rotation copies.

use rstest::rstest;
use seqview::result::CopyResult;
use seqview::rotate::copy_rotated_left;
use seqview::view::{SequenceView, SequenceViewMut};

fn rotate(source: &[i32], shift: isize, capacity: usize) -> (Vec<i32>, CopyResult) {
    let mut output = vec![0; capacity];
    let result = copy_rotated_left(SequenceView::new(source), &mut SequenceViewMut::new(&mut output), shift);
    output.truncate(result.destination_offset);
    (output, result)
}

#[rstest]
#[case(0, &[1, 2, 3, 4])]
#[case(1, &[2, 3, 4, 1])]
#[case(4, &[1, 2, 3, 4])]
#[case(9, &[2, 3, 4, 1])]
#[case(-1, &[4, 1, 2, 3])]
#[case(-6, &[3, 4, 1, 2])]
fn test_full_rotation(#[case] shift: isize, #[case] expected: &[i32]) {
    let (output, result) = rotate(&[1, 2, 3, 4], shift, 4);
    assert_eq!(output, expected);
    assert_eq!(result, CopyResult::new(4, 4));
}

#[rstest]
fn test_destination_smaller_than_tail() {
    let (output, result) = rotate(&[1, 2, 3, 4, 5, 6], 2, 3);
    assert_eq!(output, vec![3, 4, 5]);
    assert_eq!(result.source_offset, 5);
}

#[rstest]
fn test_destination_exactly_the_tail_wraps_to_front() {
    let (output, result) = rotate(&[1, 2, 3, 4, 5, 6], 2, 4);
    assert_eq!(output, vec![3, 4, 5, 6]);
    assert_eq!(result.source_offset, 0);
}

#[rstest]
fn test_destination_partially_covers_front() {
    let (output, result) = rotate(&[1, 2, 3, 4, 5, 6], 4, 3);
    assert_eq!(output, vec![5, 6, 1]);
    assert_eq!(result.source_offset, 1);
}

#[rstest]
fn test_empty_destination_resets_to_front() {
    let (output, result) = rotate(&[1, 2, 3], 2, 0);
    assert!(output.is_empty());
    assert_eq!(result, CopyResult::new(0, 0));
}

#[rstest]
fn test_rotating_a_window() {
    let values = [0, 1, 2, 3, 0];
    let mut output = [0; 3];
    copy_rotated_left(
        SequenceView::with_range(&values, 1, 3).unwrap(),
        &mut SequenceViewMut::new(&mut output),
        -1,
    );
    assert_eq!(output, [3, 1, 2]);
}
