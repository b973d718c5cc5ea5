//! Single-source copies: plain and partitioned.

use crate::result::{CopyPartitionedResult, CopyResult};
use crate::view::{SequenceView, SequenceViewMut};

/// Copies elements from the front of `source` until either side runs out.
///
/// # Examples
///
/// ```rust
/// use seqview::partition::copy;
/// use seqview::view::{SequenceView, SequenceViewMut};
///
/// let mut output = [0; 2];
/// let result = copy(SequenceView::new(&[1, 2, 3]), &mut SequenceViewMut::new(&mut output));
/// assert_eq!(output, [1, 2]);
/// assert_eq!((result.source_offset, result.destination_offset), (2, 2));
/// ```
pub fn copy<T: Clone>(source: SequenceView<'_, T>, destination: &mut SequenceViewMut<'_, T>) -> CopyResult {
    let items = source.as_slice();
    let slots = destination.as_mut_slice();
    let count = items.len().min(slots.len());
    slots[..count].clone_from_slice(&items[..count]);
    CopyResult::new(count, count)
}

/// Routes each element to `matching` when `predicate` holds and to `rest`
/// otherwise, preserving relative order on both sides.
///
/// Stops before the first element whose destination is already full, so
/// `source_offset` is always a point the copy can resume from.
///
/// # Examples
///
/// ```rust
/// use seqview::partition::copy_partitioned;
/// use seqview::view::{SequenceView, SequenceViewMut};
///
/// let source = [1, 2, 3, 4, 5, 6];
/// let mut even = [0; 3];
/// let mut odd = [0; 1];
/// let result = copy_partitioned(
///     SequenceView::new(&source),
///     &mut SequenceViewMut::new(&mut even),
///     &mut SequenceViewMut::new(&mut odd),
///     |value: &i32| value % 2 == 0,
/// );
/// // 3 is odd and `odd` is already full.
/// assert_eq!(result.source_offset, 2);
/// assert_eq!(even[0], 2);
/// assert_eq!(odd, [1]);
/// ```
pub fn copy_partitioned<T, P>(
    source: SequenceView<'_, T>,
    matching: &mut SequenceViewMut<'_, T>,
    rest: &mut SequenceViewMut<'_, T>,
    mut predicate: P,
) -> CopyPartitionedResult
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let matching_slots = matching.as_mut_slice();
    let rest_slots = rest.as_mut_slice();
    let mut matched = 0;
    let mut rejected = 0;
    let mut read = 0;

    for item in source.iter() {
        if predicate(item) {
            let Some(slot) = matching_slots.get_mut(matched) else {
                break;
            };
            slot.clone_from(item);
            matched += 1;
        } else {
            let Some(slot) = rest_slots.get_mut(rejected) else {
                break;
            };
            slot.clone_from(item);
            rejected += 1;
        }
        read += 1;
    }

    trace_event!(
        operation = "copy_partitioned",
        source_offset = read,
        destination_offset1 = matched,
        destination_offset2 = rejected,
        "partition copy finished"
    );
    CopyPartitionedResult::new(read, matched, rejected)
}
