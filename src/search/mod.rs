//! Searching and comparing views.
//!
//! - [`bounds`]: binary search for the equal-range of a value in a sorted view.
//! - [`subsequence`]: first occurrence of one view inside another.
//! - [`lexicographic`]: mismatch position, three-way comparison and equality.
//! - [`subset`]: ordered subset test over two sorted sets.

pub mod bounds;
pub mod lexicographic;
pub mod subsequence;
pub mod subset;

pub use bounds::{lower_and_upper_bound, lower_bound, upper_bound};
pub use lexicographic::{are_equal, compare_to, mismatch};
pub use subsequence::{contains_sequence, find_sequence, index_of_sequence};
pub use subset::{is_subset, is_subset_until};
