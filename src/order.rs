//! Order statistics: partial sort and single-rank selection.
//!
//! | Operation        | Result                                             | Complexity   |
//! |------------------|----------------------------------------------------|--------------|
//! | [`partial_sort`] | the `k` smallest, sorted, in front                 | O(n log k)   |
//! | [`item_at`]      | the element of rank `index` at `index`, partitioned| O(n) average |
//!
//! Pass [`Reversed`](crate::compare::Reversed) to select the largest elements
//! instead.

use crate::compare::Comparator;
use crate::error::SequenceError;
use crate::view::SequenceViewMut;

// =============================================================================
// Binary max-heap helpers
// =============================================================================

/// Restores the max-heap property below `root`, considering `heap[..end]`.
fn sift_down<T, C>(heap: &mut [T], mut root: usize, end: usize, comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let larger = if right < end && comparator.less(&heap[left], &heap[right]) {
            right
        } else {
            left
        };
        if !comparator.less(&heap[root], &heap[larger]) {
            return;
        }
        heap.swap(root, larger);
        root = larger;
    }
}

fn build_max_heap<T, C>(heap: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    let length = heap.len();
    for root in (0..length / 2).rev() {
        sift_down(heap, root, length, comparator);
    }
}

/// Turns a max-heap into an ascending run.
fn sort_heap<T, C>(heap: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    for end in (1..heap.len()).rev() {
        heap.swap(0, end);
        sift_down(heap, 0, end, comparator);
    }
}

// =============================================================================
// Public operations
// =============================================================================

/// Places the `k` smallest elements, in ascending order, at the front of the
/// view.
///
/// Elements from position `k` on are left in unspecified order, but every one
/// of them compares greater than or equal to the element at `k - 1`.
///
/// A max-heap of the first `k` elements is built, every later element smaller
/// than the heap maximum replaces it, and the heap is finally sorted in place.
/// `k == 0` does nothing; `k == len` is a full heap sort.
///
/// # Errors
///
/// [`SequenceError::InvalidArgument`] if `k` exceeds the view length. The view
/// is untouched in that case.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::{NaturalOrder, Reversed};
/// use seqview::order::partial_sort;
/// use seqview::view::SequenceViewMut;
///
/// let mut values = [9, 4, 7, 1, 8, 2];
/// partial_sort(&mut SequenceViewMut::new(&mut values), 3, &NaturalOrder).unwrap();
/// assert_eq!(&values[..3], &[1, 2, 4]);
///
/// let mut values = [9, 4, 7, 1, 8, 2];
/// partial_sort(&mut SequenceViewMut::new(&mut values), 2, &Reversed(NaturalOrder)).unwrap();
/// assert_eq!(&values[..2], &[9, 8]);
/// ```
pub fn partial_sort<T, C>(view: &mut SequenceViewMut<'_, T>, k: usize, comparator: &C) -> Result<(), SequenceError>
where
    C: Comparator<T> + ?Sized,
{
    let items = view.as_mut_slice();
    if k > items.len() {
        return Err(SequenceError::invalid_argument(
            "partial_sort",
            "k",
            k,
            "must not exceed",
            items.len(),
        ));
    }
    if k == 0 {
        return Ok(());
    }

    let (heap, rest) = items.split_at_mut(k);
    build_max_heap(heap, comparator);
    for candidate in rest.iter_mut() {
        if comparator.less(candidate, &heap[0]) {
            std::mem::swap(candidate, &mut heap[0]);
            sift_down(heap, 0, k, comparator);
        }
    }
    sort_heap(heap, comparator);

    trace_event!(
        operation = "partial_sort",
        k,
        length = k + rest.len(),
        "partial sort finished"
    );
    Ok(())
}

/// Moves the element that would sit at `index` in fully sorted order to
/// `index`, and returns it.
///
/// Afterwards every element before `index` compares less than or equal to it
/// and every element after compares greater than or equal to it. Neither
/// side is sorted.
///
/// # Errors
///
/// [`SequenceError::InvalidArgument`] if `index >= view.len()` (including any
/// index on an empty view). The view is untouched in that case.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalOrder;
/// use seqview::order::item_at;
/// use seqview::view::SequenceViewMut;
///
/// let mut values = [8, 5, 12, 1, 7];
/// let median = *item_at(&mut SequenceViewMut::new(&mut values), 2, &NaturalOrder).unwrap();
/// assert_eq!(median, 7);
/// assert_eq!(values[2], 7);
/// assert!(values[..2].iter().all(|value| *value <= 7));
/// assert!(values[3..].iter().all(|value| *value >= 7));
/// ```
pub fn item_at<'v, T, C>(
    view: &'v mut SequenceViewMut<'_, T>,
    index: usize,
    comparator: &C,
) -> Result<&'v T, SequenceError>
where
    C: Comparator<T> + ?Sized,
{
    let items = view.as_mut_slice();
    if index >= items.len() {
        return Err(SequenceError::invalid_argument(
            "item_at",
            "index",
            index,
            "must be less than",
            items.len(),
        ));
    }
    let (_, nth, _) = items.select_nth_unstable_by(index, |left, right| comparator.compare(left, right));
    trace_event!(operation = "item_at", index, "selection finished");
    Ok(nth)
}
