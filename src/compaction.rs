//! Removal of adjacent duplicates from sorted ranges (distinct / unique).
//!
//! The scan keeps the first element of every run of equivalent elements and
//! skips the rest. On a sorted range this leaves each distinct value exactly
//! once, in first-occurrence order.
//!
//! # Resuming a bounded copy
//!
//! [`copy_distinct`] keeps scanning after its last write until the run that
//! element started has ended. The reported source offset therefore always
//! sits on a run boundary, never in the middle of a run, and a follow-up call
//! on the re-based source continues without writing a duplicate.
//!
//! # Examples
//!
//! ```rust
//! use seqview::compaction::copy_distinct;
//! use seqview::compare::NaturalEquality;
//! use seqview::view::{SequenceView, SequenceViewMut};
//!
//! let source = [1, 1, 2, 2, 2, 3, 4, 4];
//! let mut output = [0; 2];
//! let result = copy_distinct(
//!     SequenceView::new(&source),
//!     &mut SequenceViewMut::new(&mut output),
//!     &NaturalEquality,
//! );
//! assert_eq!(output, [1, 2]);
//! // The run of 2s was skipped entirely before stopping.
//! assert_eq!(result.source_offset, 5);
//! ```

use crate::compare::Equivalence;
use crate::merge::{FixedSink, GrowableSink, Sink};
use crate::result::CopyResult;
use crate::view::{ExpandableView, GrowableContainer, SequenceView, SequenceViewMut};

/// Emits run heads into `sink` until it is full; returns the source position
/// reached, which is always a run boundary.
fn scan_runs<T, E, S>(source: &[T], sink: &mut S, equivalence: &E) -> usize
where
    E: Equivalence<T> + ?Sized,
    S: Sink<T>,
{
    let mut read = 0;
    while read < source.len() && sink.has_room() {
        let kept = read;
        sink.emit(&source[kept]);
        read += 1;
        while read < source.len() && equivalence.equivalent(&source[kept], &source[read]) {
            read += 1;
        }
    }
    read
}

/// Copies the first element of every run into a fixed destination.
///
/// Stops when the destination is full; `source_offset` then points at the
/// start of the first run that was not copied.
pub fn copy_distinct<T, E>(
    source: SequenceView<'_, T>,
    destination: &mut SequenceViewMut<'_, T>,
    equivalence: &E,
) -> CopyResult
where
    T: Clone,
    E: Equivalence<T> + ?Sized,
{
    let mut sink = FixedSink::new(destination.as_mut_slice());
    let source_offset = scan_runs(source.as_slice(), &mut sink, equivalence);
    let result = CopyResult::new(source_offset, sink.written());
    trace_event!(
        operation = "distinct",
        mode = "copy",
        source_offset = result.source_offset,
        destination_offset = result.destination_offset,
        "compaction finished"
    );
    result
}

/// Appends the first element of every run to a growable destination.
///
/// # Examples
///
/// ```rust
/// use seqview::compaction::add_distinct;
/// use seqview::compare::NaturalEquality;
/// use seqview::view::{ExpandableView, SequenceView};
///
/// let mut output = vec![0];
/// let result = add_distinct(
///     SequenceView::new(&[1, 1, 2, 3, 3]),
///     &mut ExpandableView::at_end(&mut output),
///     &NaturalEquality,
/// );
/// assert_eq!(result.destination_offset, 3);
/// assert_eq!(output, vec![0, 1, 2, 3]);
/// ```
pub fn add_distinct<T, E, G>(
    source: SequenceView<'_, T>,
    destination: &mut ExpandableView<'_, G>,
    equivalence: &E,
) -> CopyResult
where
    T: Clone,
    E: Equivalence<T> + ?Sized,
    G: GrowableContainer<Item = T>,
{
    let mut sink = GrowableSink::with_capacity(source.len());
    let source_offset = scan_runs(source.as_slice(), &mut sink, equivalence);
    let appended = sink.flush_into(destination);
    let result = CopyResult::new(source_offset, appended);
    trace_event!(
        operation = "distinct",
        mode = "add",
        source_offset = result.source_offset,
        destination_offset = result.destination_offset,
        "compaction finished"
    );
    result
}

/// Moves the first element of every run to the front of the view.
///
/// Returns the number of elements kept. Elements after that position are left
/// in unspecified order.
///
/// # Examples
///
/// ```rust
/// use seqview::compaction::distinct_in_place;
/// use seqview::compare::NaturalEquality;
/// use seqview::view::SequenceViewMut;
///
/// let mut values = [1, 1, 2, 3, 3, 3];
/// let kept = distinct_in_place(&mut SequenceViewMut::new(&mut values), &NaturalEquality);
/// assert_eq!(&values[..kept], &[1, 2, 3]);
/// ```
pub fn distinct_in_place<T, E>(view: &mut SequenceViewMut<'_, T>, equivalence: &E) -> usize
where
    E: Equivalence<T> + ?Sized,
{
    let items = view.as_mut_slice();
    if items.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..items.len() {
        if !equivalence.equivalent(&items[write - 1], &items[read]) {
            items.swap(write, read);
            write += 1;
        }
    }
    trace_event!(
        operation = "distinct",
        mode = "in_place",
        kept = write,
        "compaction finished"
    );
    write
}

/// Removes adjacent duplicates from a growable view, shrinking it and its
/// container. Returns the number of elements removed.
///
/// # Examples
///
/// ```rust
/// use seqview::compaction::remove_duplicates;
/// use seqview::compare::NaturalEquality;
/// use seqview::view::ExpandableView;
///
/// let mut values = vec![9, 1, 1, 2, 2, 9];
/// let mut view = ExpandableView::with_range(&mut values, 1, 4).unwrap();
/// let removed = remove_duplicates(&mut view, &NaturalEquality);
/// assert_eq!(removed, 2);
/// assert_eq!(values, vec![9, 1, 2, 9]);
/// ```
pub fn remove_duplicates<E, G>(view: &mut ExpandableView<'_, G>, equivalence: &E) -> usize
where
    G: GrowableContainer,
    E: Equivalence<G::Item> + ?Sized,
{
    let kept = distinct_in_place(&mut view.as_view_mut(), equivalence);
    let removed = view.len() - kept;
    view.truncate(kept);
    removed
}
