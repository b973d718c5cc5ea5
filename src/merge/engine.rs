//! The ordered two-source walk shared by merge and the set operations.

use super::policy::{Advance, Emit, MergeOperation};
use crate::compare::Comparator;
use crate::result::CopyTwoSourcesResult;
use crate::view::{ExpandableView, GrowableContainer, SequenceView, SequenceViewMut};

/// Where the walk writes its output.
///
/// The walk asks `has_room` before every step, so a fixed destination stops it
/// the moment it is full and a growable one never does.
pub(crate) trait Sink<T> {
    fn has_room(&self) -> bool;

    fn emit(&mut self, item: &T);

    fn written(&self) -> usize;
}

/// Writes into the slots of a fixed-length window.
pub(crate) struct FixedSink<'s, T> {
    slots: &'s mut [T],
    written: usize,
}

impl<'s, T> FixedSink<'s, T> {
    pub(crate) const fn new(slots: &'s mut [T]) -> Self {
        Self { slots, written: 0 }
    }
}

impl<T: Clone> Sink<T> for FixedSink<'_, T> {
    #[inline]
    fn has_room(&self) -> bool {
        self.written < self.slots.len()
    }

    #[inline]
    fn emit(&mut self, item: &T) {
        self.slots[self.written] = item.clone();
        self.written += 1;
    }

    #[inline]
    fn written(&self) -> usize {
        self.written
    }
}

/// Stages output for a growable destination and appends it in one edit.
pub(crate) struct GrowableSink<T> {
    staged: Vec<T>,
}

impl<T> GrowableSink<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            staged: Vec::with_capacity(capacity),
        }
    }

    /// Appends everything staged to `destination`.
    pub(crate) fn flush_into<C>(self, destination: &mut ExpandableView<'_, C>) -> usize
    where
        C: GrowableContainer<Item = T>,
    {
        destination.extend_from_iter(self.staged)
    }
}

impl<T: Clone> Sink<T> for GrowableSink<T> {
    #[inline]
    fn has_room(&self) -> bool {
        true
    }

    #[inline]
    fn emit(&mut self, item: &T) {
        self.staged.push(item.clone());
    }

    #[inline]
    fn written(&self) -> usize {
        self.staged.len()
    }
}

/// Runs `operation` over two sorted slices, returning the final cursors.
///
/// Stops when the sink is full, when the operation has nothing left to emit,
/// or when both sources are exhausted.
pub(crate) fn walk<T, C, S>(
    operation: MergeOperation,
    first: &[T],
    second: &[T],
    sink: &mut S,
    comparator: &C,
) -> (usize, usize)
where
    C: Comparator<T> + ?Sized,
    S: Sink<T>,
{
    let mut first_index = 0;
    let mut second_index = 0;

    while first_index < first.len() && second_index < second.len() {
        if !sink.has_room() {
            return (first_index, second_index);
        }
        let step = operation.step(comparator.compare(&first[first_index], &second[second_index]));
        match step.emit {
            Emit::Nothing => {}
            Emit::First => sink.emit(&first[first_index]),
            Emit::Second => sink.emit(&second[second_index]),
        }
        match step.advance {
            Advance::First => first_index += 1,
            Advance::Second => second_index += 1,
            Advance::Both => {
                first_index += 1;
                second_index += 1;
            }
        }
    }

    if operation.drains_first() {
        while first_index < first.len() && sink.has_room() {
            sink.emit(&first[first_index]);
            first_index += 1;
        }
    }
    if operation.drains_second() {
        while second_index < second.len() && sink.has_room() {
            sink.emit(&second[second_index]);
            second_index += 1;
        }
    }

    (first_index, second_index)
}

/// Runs `operation` into a fixed destination.
pub(crate) fn copy_with<T, C>(
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
    let mut sink = FixedSink::new(destination.as_mut_slice());
    let (first_index, second_index) = walk(
        operation,
        source1.as_slice(),
        source2.as_slice(),
        &mut sink,
        comparator,
    );
    let result = CopyTwoSourcesResult::new(first_index, second_index, sink.written());
    trace_event!(
        operation = operation.name(),
        mode = "copy",
        source_offset1 = result.source_offset1,
        source_offset2 = result.source_offset2,
        destination_offset = result.destination_offset,
        "two-source walk finished"
    );
    result
}

/// Runs `operation` to completion, appending to a growable destination.
pub(crate) fn add_with<T, C, G>(
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
    let mut sink = GrowableSink::with_capacity(source1.len() + source2.len());
    let (first_index, second_index) = walk(
        operation,
        source1.as_slice(),
        source2.as_slice(),
        &mut sink,
        comparator,
    );
    let appended = sink.flush_into(destination);
    let result = CopyTwoSourcesResult::new(first_index, second_index, appended);
    trace_event!(
        operation = operation.name(),
        mode = "add",
        source_offset1 = result.source_offset1,
        source_offset2 = result.source_offset2,
        destination_offset = result.destination_offset,
        "two-source walk finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;
    use rstest::rstest;

    fn run(operation: MergeOperation, first: &[i32], second: &[i32], capacity: usize) -> (Vec<i32>, (usize, usize)) {
        let mut slots = vec![0; capacity];
        let mut sink = FixedSink::new(&mut slots);
        let cursors = walk(operation, first, second, &mut sink, &NaturalOrder);
        let written = sink.written();
        slots.truncate(written);
        (slots, cursors)
    }

    #[rstest]
    fn test_merge_keeps_ties_stable() {
        let first = [(1, 'a'), (2, 'a')];
        let second = [(1, 'b'), (2, 'b')];
        let by_key = |left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0);
        let mut slots = vec![(0, ' '); 4];
        let mut sink = FixedSink::new(&mut slots);
        walk(MergeOperation::Merge, &first, &second, &mut sink, &by_key);
        assert_eq!(slots, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }

    #[rstest]
    fn test_full_sink_stops_before_comparing() {
        let (output, cursors) = run(MergeOperation::Intersection, &[1, 2, 3], &[2, 3], 1);
        assert_eq!(output, vec![2]);
        assert_eq!(cursors, (2, 1));
    }

    #[rstest]
    fn test_intersection_stops_when_either_source_runs_out() {
        let (output, cursors) = run(MergeOperation::Intersection, &[1, 5, 6, 7], &[5], 10);
        assert_eq!(output, vec![5]);
        assert_eq!(cursors, (2, 1));
    }

    #[rstest]
    fn test_difference_ignores_leftover_second_source() {
        let (output, cursors) = run(MergeOperation::Difference, &[1], &[2, 3, 4], 10);
        assert_eq!(output, vec![1]);
        assert_eq!(cursors, (1, 0));
    }

    #[rstest]
    fn test_growable_sink_never_fills() {
        let mut sink = GrowableSink::with_capacity(0);
        let cursors = walk(MergeOperation::Union, &[1, 3], &[2, 3, 4], &mut sink, &NaturalOrder);
        assert_eq!(cursors, (2, 3));
        assert_eq!(sink.written(), 4);
    }
}
