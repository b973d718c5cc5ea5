//! Integration tests for distinct / unique compaction.

use rstest::rstest;
use seqview::compaction::{add_distinct, copy_distinct, distinct_in_place, remove_duplicates};
use seqview::compare::{EquivalentWhenEqual, NaturalEquality, NaturalOrder};
use seqview::result::CopyResult;
use seqview::view::{ExpandableView, SequenceView, SequenceViewMut};

#[rstest]
#[case(&[], 4, &[], 0)]
#[case(&[1, 1, 1], 4, &[1], 3)]
#[case(&[1, 2, 2, 3], 4, &[1, 2, 3], 4)]
#[case(&[1, 2, 2, 3], 2, &[1, 2], 3)]
#[case(&[1, 1, 2, 2, 3, 3], 1, &[1], 2)]
fn test_copy_distinct(
    #[case] source: &[i32],
    #[case] capacity: usize,
    #[case] expected: &[i32],
    #[case] source_offset: usize,
) {
    let mut output = vec![0; capacity];
    let result = copy_distinct(
        SequenceView::new(source),
        &mut SequenceViewMut::new(&mut output),
        &NaturalEquality,
    );
    assert_eq!(result, CopyResult::new(source_offset, expected.len()));
    assert_eq!(&output[..expected.len()], expected);
}

#[rstest]
fn test_add_distinct_appends_to_window() {
    let mut output = vec![-1, -2];
    let mut destination = ExpandableView::with_range(&mut output, 0, 1).unwrap();
    let result = add_distinct(
        SequenceView::new(&[4, 4, 5]),
        &mut destination,
        &EquivalentWhenEqual(NaturalOrder),
    );
    assert_eq!(result, CopyResult::new(3, 2));
    assert_eq!(output, vec![-1, 4, 5, -2]);
}

#[rstest]
fn test_distinct_in_place_keeps_every_element() {
    let mut values = [1, 1, 2, 2, 2, 3];
    let kept = distinct_in_place(&mut SequenceViewMut::new(&mut values), &NaturalEquality);
    assert_eq!(kept, 3);
    assert_eq!(&values[..3], &[1, 2, 3]);

    let mut all = values.to_vec();
    all.sort_unstable();
    assert_eq!(all, vec![1, 1, 2, 2, 2, 3]);
}

#[rstest]
fn test_remove_duplicates_shrinks_container() {
    let mut values = vec![3, 3, 3];
    let mut view = ExpandableView::new(&mut values);
    assert_eq!(remove_duplicates(&mut view, &NaturalEquality), 2);
    assert_eq!(view.len(), 1);
    assert_eq!(values, vec![3]);
}

#[rstest]
fn test_custom_equivalence_groups_by_tens() {
    let source = [10, 15, 19, 20, 31, 35];
    let mut output = Vec::new();
    add_distinct(
        SequenceView::new(&source),
        &mut ExpandableView::at_end(&mut output),
        &|left: &i32, right: &i32| left / 10 == right / 10,
    );
    assert_eq!(output, vec![10, 20, 31]);
}
