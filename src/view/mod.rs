//! Bounded windows over random-access containers.
//!
//! A view is an `offset`/`count` window into storage it does not own. Three
//! capability levels exist:
//!
//! - [`SequenceView`]: read-only. `Copy`, so any number of views may alias the
//!   same container.
//! - [`SequenceViewMut`]: elements can be written in place, the length is fixed.
//! - [`ExpandableView`]: the window can grow and shrink; edits are written
//!   through to the host container's length.
//!
//! All three keep `offset + count <= container length` at all times. Positions
//! passed to a view are relative to its window.
//!
//! # Aliasing
//!
//! Read-only views freely share a container. Comparing two windows of the same
//! container compares them element by element; only an identical region
//! (same storage, same offset, same count) short-circuits. A mutable or
//! expandable view holds an exclusive borrow, so the borrow checker rules out
//! observing a container through a stale window after it has been resized.
//!
//! # Examples
//!
//! ```rust
//! use seqview::view::{ExpandableView, SequenceView, SequenceViewMut};
//!
//! let mut values = vec![5, 1, 4, 2, 3];
//!
//! let window = SequenceView::with_range(&values, 1, 3).unwrap();
//! assert_eq!(window.as_slice(), &[1, 4, 2]);
//!
//! let mut in_place = SequenceViewMut::with_range(&mut values, 0, 2).unwrap();
//! in_place.swap(0, 1).unwrap();
//! assert_eq!(values, vec![1, 5, 4, 2, 3]);
//!
//! let mut growable = ExpandableView::with_range(&mut values, 0, 2).unwrap();
//! growable.push(9);
//! assert_eq!(growable.len(), 3);
//! assert_eq!(values, vec![1, 5, 9, 4, 2, 3]);
//! ```

mod container;
mod expandable;
mod mutable;
mod read_only;

pub use container::GrowableContainer;
pub use expandable::ExpandableView;
pub use mutable::SequenceViewMut;
pub use read_only::SequenceView;
pub use read_only::SequenceViewIterator;

use crate::error::SequenceError;

/// Validates an `offset`/`count` window against a container length.
///
/// The offset may equal the length (an empty window at the end).
pub(crate) fn check_window(
    operation: &'static str,
    container_length: usize,
    offset: usize,
    count: usize,
) -> Result<(), SequenceError> {
    if offset > container_length {
        return Err(SequenceError::out_of_range(
            operation,
            "offset",
            offset,
            container_length,
        ));
    }
    let available = container_length - offset;
    if count > available {
        return Err(SequenceError::invalid_argument(
            operation,
            "count",
            count,
            "must not exceed",
            available,
        ));
    }
    Ok(())
}

/// Validates an element position against a window length.
#[inline]
pub(crate) fn check_index(
    operation: &'static str,
    index: usize,
    count: usize,
) -> Result<(), SequenceError> {
    if index < count {
        Ok(())
    } else {
        Err(SequenceError::out_of_range(operation, "index", index, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 0, 5)]
    #[case(5, 5, 0)]
    #[case(5, 2, 3)]
    #[case(0, 0, 0)]
    fn test_check_window_accepts(#[case] length: usize, #[case] offset: usize, #[case] count: usize) {
        assert!(check_window("test", length, offset, count).is_ok());
    }

    #[rstest]
    fn test_check_window_offset_is_out_of_range() {
        let error = check_window("test", 3, 4, 0).unwrap_err();
        assert!(matches!(error, SequenceError::OutOfRange(_)));
    }

    #[rstest]
    fn test_check_window_count_is_invalid_argument() {
        let error = check_window("test", 3, 1, 3).unwrap_err();
        assert!(matches!(error, SequenceError::InvalidArgument(_)));
    }

    #[rstest]
    fn test_check_index() {
        assert!(check_index("test", 0, 1).is_ok());
        assert!(check_index("test", 1, 1).is_err());
    }
}
