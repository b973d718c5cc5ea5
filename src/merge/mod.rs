//! Merge and set operations over sorted views.
//!
//! Every operation in this module is one instantiation of a single ordered
//! two-source walk (see [`MergeOperation`] for the per-operation table). Each
//! comes in two destination modes:
//!
//! - `copy_*` writes into a fixed [`SequenceViewMut`] and stops the moment it
//!   is full. The returned [`CopyTwoSourcesResult`] records both source cursors,
//!   so the call can be resumed with views re-based at those offsets.
//! - `add_*` appends to an [`ExpandableView`] and runs until the operation has
//!   nothing more to emit.
//!
//! # Preconditions
//!
//! Both sources must be sorted ascending under the comparator. The set
//! operations additionally expect each source to be free of duplicates. When a
//! source does contain duplicates the walk consumes ties one-for-one (one
//! element from each side per step), which follows merge semantics rather than
//! mathematical set semantics; run [`add_distinct`](crate::compaction::add_distinct)
//! first if that is not what you want.
//!
//! # Termination
//!
//! | Operation             | first source runs out | second source runs out |
//! |-----------------------|-----------------------|------------------------|
//! | merge, union          | copy rest of second   | copy rest of first     |
//! | symmetric difference  | copy rest of second   | copy rest of first     |
//! | difference            | stop                  | copy rest of first     |
//! | intersection          | stop                  | stop                   |
//!
//! # Examples
//!
//! ```rust
//! use seqview::compare::NaturalOrder;
//! use seqview::merge::{add_union, copy_difference};
//! use seqview::view::{ExpandableView, SequenceView, SequenceViewMut};
//!
//! let first = [1, 2, 3];
//! let empty: [i32; 0] = [];
//! let mut output = [0; 2];
//!
//! // The destination fills after two elements.
//! let result = copy_difference(
//!     SequenceView::new(&first),
//!     SequenceView::new(&empty),
//!     &mut SequenceViewMut::new(&mut output),
//!     &NaturalOrder,
//! );
//! assert_eq!((result.source_offset1, result.source_offset2, result.destination_offset), (2, 0, 2));
//! assert_eq!(output, [1, 2]);
//!
//! let mut grown = Vec::new();
//! let result = add_union(
//!     SequenceView::new(&[1, 3, 5]),
//!     SequenceView::new(&[2, 3]),
//!     &mut ExpandableView::at_end(&mut grown),
//!     &NaturalOrder,
//! );
//! assert_eq!(result.destination_offset, 4);
//! assert_eq!(grown, vec![1, 2, 3, 5]);
//! ```

mod engine;
mod policy;

pub use policy::MergeOperation;

use crate::compare::Comparator;
use crate::result::CopyTwoSourcesResult;
use crate::view::{ExpandableView, GrowableContainer, SequenceView, SequenceViewMut};

pub(crate) use engine::{FixedSink, GrowableSink, Sink};

// =============================================================================
// Generic entry points
// =============================================================================

/// Runs any [`MergeOperation`] into a fixed destination.
///
/// The named `copy_*` functions are shorthands for this.
pub fn copy_two_sources<T, C>(
    operation: MergeOperation,
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    engine::copy_with(operation, source1, source2, destination, comparator)
}

/// Runs any [`MergeOperation`] to completion into a growable destination.
///
/// The named `add_*` functions are shorthands for this.
pub fn add_two_sources<T, C, G>(
    operation: MergeOperation,
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut ExpandableView<'_, G>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
    G: GrowableContainer<Item = T>,
{
    engine::add_with(operation, source1, source2, destination, comparator)
}

// =============================================================================
// Merge
// =============================================================================

/// Stable merge of two sorted sources into a fixed destination.
///
/// On equal keys the element from `source1` is written first.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::merge::copy_merged;
/// use seqview::view::{SequenceView, SequenceViewMut};
///
/// let mut output = [0; 5];
/// let result = copy_merged(
///     SequenceView::new(&[1, 3, 5]),
///     SequenceView::new(&[2, 3]),
///     &mut SequenceViewMut::new(&mut output),
///     &NaturalOrder,
/// );
/// assert_eq!(usize::from(result), 5);
/// assert_eq!(output, [1, 2, 3, 3, 5]);
/// ```
pub fn copy_merged<T, C>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    engine::copy_with(MergeOperation::Merge, source1, source2, destination, comparator)
}

/// Stable merge of two sorted sources, appended to a growable destination.
pub fn add_merged<T, C, G>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut ExpandableView<'_, G>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
    G: GrowableContainer<Item = T>,
{
    engine::add_with(MergeOperation::Merge, source1, source2, destination, comparator)
}

// =============================================================================
// Union
// =============================================================================

/// Sorted union of two sorted sets into a fixed destination.
///
/// Elements present in both sources are written once (the `source1` copy).
pub fn copy_union<T, C>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    engine::copy_with(MergeOperation::Union, source1, source2, destination, comparator)
}

/// Sorted union of two sorted sets, appended to a growable destination.
pub fn add_union<T, C, G>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut ExpandableView<'_, G>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
    G: GrowableContainer<Item = T>,
{
    engine::add_with(MergeOperation::Union, source1, source2, destination, comparator)
}

// =============================================================================
// Intersection
// =============================================================================

/// Sorted intersection of two sorted sets into a fixed destination.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::merge::copy_intersection;
/// use seqview::view::{SequenceView, SequenceViewMut};
///
/// let mut output = [0; 3];
/// let written: usize = copy_intersection(
///     SequenceView::new(&[1, 2, 3, 4, 5]),
///     SequenceView::new(&[3, 4, 5, 6, 7]),
///     &mut SequenceViewMut::new(&mut output),
///     &NaturalOrder,
/// )
/// .into();
/// assert_eq!(&output[..written], &[3, 4, 5]);
/// ```
pub fn copy_intersection<T, C>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    engine::copy_with(MergeOperation::Intersection, source1, source2, destination, comparator)
}

/// Sorted intersection of two sorted sets, appended to a growable destination.
pub fn add_intersection<T, C, G>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut ExpandableView<'_, G>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
    G: GrowableContainer<Item = T>,
{
    engine::add_with(MergeOperation::Intersection, source1, source2, destination, comparator)
}

// =============================================================================
// Difference
// =============================================================================

/// Elements of `source1` absent from `source2`, into a fixed destination.
pub fn copy_difference<T, C>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    engine::copy_with(MergeOperation::Difference, source1, source2, destination, comparator)
}

/// Elements of `source1` absent from `source2`, appended to a growable destination.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::merge::add_difference;
/// use seqview::view::{ExpandableView, SequenceView};
///
/// let mut output = vec![];
/// add_difference(
///     SequenceView::new(&[1, 3, 5]),
///     SequenceView::new(&[2, 3]),
///     &mut ExpandableView::at_end(&mut output),
///     &NaturalOrder,
/// );
/// assert_eq!(output, vec![1, 5]);
/// ```
pub fn add_difference<T, C, G>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut ExpandableView<'_, G>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
    G: GrowableContainer<Item = T>,
{
    engine::add_with(MergeOperation::Difference, source1, source2, destination, comparator)
}

// =============================================================================
// Symmetric difference
// =============================================================================

/// Elements present in exactly one of two sorted sets, into a fixed destination.
pub fn copy_symmetric_difference<T, C>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    engine::copy_with(
        MergeOperation::SymmetricDifference,
        source1,
        source2,
        destination,
        comparator,
    )
}

/// Elements present in exactly one of two sorted sets, appended to a growable
/// destination.
pub fn add_symmetric_difference<T, C, G>(
    source1: SequenceView<'_, T>,
    source2: SequenceView<'_, T>,
    destination: &mut ExpandableView<'_, G>,
    comparator: &C,
) -> CopyTwoSourcesResult
where
    T: Clone,
    C: Comparator<T> + ?Sized,
    G: GrowableContainer<Item = T>,
{
    engine::add_with(
        MergeOperation::SymmetricDifference,
        source1,
        source2,
        destination,
        comparator,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{NaturalOrder, Reversed};
    use rstest::rstest;

    #[rstest]
    fn test_copy_can_be_resumed_from_returned_offsets() {
        let first = [1, 4, 6, 9];
        let second = [2, 4, 7];
        let mut output = [0; 6];

        let mut head = [0; 3];
        let partial = copy_union(
            SequenceView::new(&first),
            SequenceView::new(&second),
            &mut SequenceViewMut::new(&mut head),
            &NaturalOrder,
        );
        output[..3].copy_from_slice(&head);

        let rest = copy_union(
            SequenceView::new(&first).skip(partial.source_offset1).unwrap(),
            SequenceView::new(&second).skip(partial.source_offset2).unwrap(),
            &mut SequenceViewMut::with_range(&mut output, 3, 3).unwrap(),
            &NaturalOrder,
        );

        assert_eq!(partial.destination_offset + rest.destination_offset, 6);
        assert_eq!(output, [1, 2, 4, 6, 7, 9]);
    }

    #[rstest]
    fn test_descending_inputs_with_reversed_comparator() {
        let mut output = vec![];
        add_intersection(
            SequenceView::new(&[9, 5, 3, 1]),
            SequenceView::new(&[7, 5, 1]),
            &mut ExpandableView::at_end(&mut output),
            &Reversed(NaturalOrder),
        );
        assert_eq!(output, vec![5, 1]);
    }

    #[rstest]
    fn test_generic_entry_point_matches_named_function() {
        let mut named = vec![];
        let mut generic = vec![];
        let first = [1, 3, 5];
        let second = [2, 3];
        add_symmetric_difference(
            SequenceView::new(&first),
            SequenceView::new(&second),
            &mut ExpandableView::at_end(&mut named),
            &NaturalOrder,
        );
        add_two_sources(
            MergeOperation::SymmetricDifference,
            SequenceView::new(&first),
            SequenceView::new(&second),
            &mut ExpandableView::at_end(&mut generic),
            &NaturalOrder,
        );
        assert_eq!(named, generic);
    }
}
