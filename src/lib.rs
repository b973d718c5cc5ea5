//! # seqview
//!
//! Ordered algorithms over bounded, alias-aware views of mutable sequences.
//!
//! ## Overview
//!
//! Callers cut a view out of their container and hand it, together with a
//! comparator, to an algorithm. The algorithm either mutates the view in place
//! or returns a result record telling how far every input and output was
//! consumed.
//!
//! - **Views**: [`SequenceView`](view::SequenceView),
//!   [`SequenceViewMut`](view::SequenceViewMut),
//!   [`ExpandableView`](view::ExpandableView)
//! - **Comparators**: [`Comparator`](compare::Comparator) and
//!   [`Equivalence`](compare::Equivalence) with natural, closure, strict-weak,
//!   key and reversed adapters
//! - **Merge and set operations**: merge, union, intersection, difference and
//!   symmetric difference, each into a fixed destination (`copy_*`) or a
//!   growable one (`add_*`)
//! - **Compaction**: distinct / unique over sorted ranges
//! - **Order statistics**: partial sort and nth element
//! - **Search**: equal-range, subsequence search, lexicographic comparison,
//!   ordered subset tests
//! - **Rotation, partition and sampling copies**
//!
//! ## Feature Flags
//!
//! - `smallvec`: expandable views over `smallvec::SmallVec`
//! - `rand`: use any `rand::Rng` as the sampling source
//! - `serde`: serialize the result records
//! - `tracing`: emit `trace` events when algorithms terminate
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqview::prelude::*;
//!
//! let first = [1, 3, 5];
//! let second = [2, 3];
//! let mut output = [0; 4];
//!
//! let result = copy_symmetric_difference(
//!     SequenceView::new(&first),
//!     SequenceView::new(&second),
//!     &mut SequenceViewMut::new(&mut output),
//!     &NaturalOrder,
//! );
//! assert_eq!(result.destination_offset, 3);
//! assert_eq!(&output[..3], &[1, 2, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing` trace event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($argument)*);
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports the views, comparators, result records and every algorithm.
///
/// # Usage
///
/// ```rust
/// use seqview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compaction::*;
    pub use crate::compare::*;
    pub use crate::error::*;
    pub use crate::merge::*;
    pub use crate::order::*;
    pub use crate::partition::*;
    pub use crate::result::*;
    pub use crate::rotate::*;
    pub use crate::sample::*;
    pub use crate::search::*;
    pub use crate::view::*;
}

pub mod compaction;
pub mod compare;
pub mod error;
pub mod merge;
pub mod order;
pub mod partition;
pub mod result;
pub mod rotate;
pub mod sample;
pub mod search;
pub mod view;
