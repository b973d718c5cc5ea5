//! First-occurrence search for a subsequence.

use crate::compare::Equivalence;
use crate::result::FindResult;
use crate::view::SequenceView;

/// Finds the first alignment at which every element of `needle` is
/// equivalent to the corresponding element of `haystack`.
///
/// An empty needle is found at index `0`. When there is no match the result
/// has `exists == false` and `index == haystack.len()`.
///
/// # Examples
///
/// ```rust
/// use seqview::compare::NaturalEquality;
/// use seqview::search::find_sequence;
/// use seqview::view::SequenceView;
///
/// let text = [3, 1, 4, 1, 5, 9];
/// let found = find_sequence(SequenceView::new(&text), SequenceView::new(&[1, 5]), &NaturalEquality);
/// assert!(found.exists);
/// assert_eq!(found.index, 3);
///
/// let missing = find_sequence(SequenceView::new(&text), SequenceView::new(&[2]), &NaturalEquality);
/// assert!(!missing.exists);
/// assert_eq!(missing.index, text.len());
/// ```
pub fn find_sequence<T, E>(haystack: SequenceView<'_, T>, needle: SequenceView<'_, T>, equivalence: &E) -> FindResult
where
    E: Equivalence<T> + ?Sized,
{
    let haystack = haystack.as_slice();
    let needle = needle.as_slice();
    if needle.len() > haystack.len() {
        return FindResult::not_found(haystack.len());
    }

    (0..=haystack.len() - needle.len())
        .find(|&start| {
            haystack[start..start + needle.len()]
                .iter()
                .zip(needle)
                .all(|(left, right)| equivalence.equivalent(left, right))
        })
        .map_or_else(|| FindResult::not_found(haystack.len()), FindResult::found)
}

/// Index of the first occurrence of `needle`, if any.
pub fn index_of_sequence<T, E>(
    haystack: SequenceView<'_, T>,
    needle: SequenceView<'_, T>,
    equivalence: &E,
) -> Option<usize>
where
    E: Equivalence<T> + ?Sized,
{
    find_sequence(haystack, needle, equivalence).to_option()
}

/// Whether `needle` occurs anywhere in `haystack`.
pub fn contains_sequence<T, E>(haystack: SequenceView<'_, T>, needle: SequenceView<'_, T>, equivalence: &E) -> bool
where
    E: Equivalence<T> + ?Sized,
{
    find_sequence(haystack, needle, equivalence).exists
}
