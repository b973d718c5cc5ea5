//! Result records returned by the algorithms.
//!
//! Every record is a plain value describing how far each input and output was
//! consumed when an operation stopped. Offsets are relative to the views that
//! were passed in, so a caller can resume an interrupted copy by re-basing its
//! views at the returned offsets.

/// Progress of a single-source copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct CopyResult {
    /// Position reached in the source.
    pub source_offset: usize,
    /// Number of destination slots written (or elements appended).
    pub destination_offset: usize,
}

impl CopyResult {
    /// Creates a new record.
    pub const fn new(source_offset: usize, destination_offset: usize) -> Self {
        Self {
            source_offset,
            destination_offset,
        }
    }
}

/// Progress of a two-source copy (merge and set operations).
///
/// Converts into `usize` for call sites that only need the number of
/// elements written.
///
/// # Examples
///
/// ```rust
/// use seqview::result::CopyTwoSourcesResult;
///
/// let result = CopyTwoSourcesResult::new(2, 1, 3);
/// let written: usize = result.into();
/// assert_eq!(written, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct CopyTwoSourcesResult {
    /// Position reached in the first source.
    pub source_offset1: usize,
    /// Position reached in the second source.
    pub source_offset2: usize,
    /// Number of destination slots written (or elements appended).
    pub destination_offset: usize,
}

impl CopyTwoSourcesResult {
    /// Creates a new record.
    pub const fn new(source_offset1: usize, source_offset2: usize, destination_offset: usize) -> Self {
        Self {
            source_offset1,
            source_offset2,
            destination_offset,
        }
    }
}

impl From<CopyTwoSourcesResult> for usize {
    #[inline]
    fn from(result: CopyTwoSourcesResult) -> Self {
        result.destination_offset
    }
}

/// Progress of a copy that splits one source across two destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct CopyPartitionedResult {
    /// Position reached in the source.
    pub source_offset: usize,
    /// Slots written in the destination receiving matching elements.
    pub destination_offset1: usize,
    /// Slots written in the destination receiving the remaining elements.
    pub destination_offset2: usize,
}

impl CopyPartitionedResult {
    /// Creates a new record.
    pub const fn new(source_offset: usize, destination_offset1: usize, destination_offset2: usize) -> Self {
        Self {
            source_offset,
            destination_offset1,
            destination_offset2,
        }
    }
}

/// Outcome of a search.
///
/// `index` is always meaningful: when nothing was found it equals the length
/// of the searched range, and `exists` tells "found at the end" apart from
/// "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct FindResult {
    /// Position of the match, or the searched length.
    pub index: usize,
    /// Whether a match exists.
    pub exists: bool,
}

impl FindResult {
    /// A match at `index`.
    pub const fn found(index: usize) -> Self {
        Self {
            index,
            exists: true,
        }
    }

    /// No match in a range of `length` elements.
    pub const fn not_found(length: usize) -> Self {
        Self {
            index: length,
            exists: false,
        }
    }

    /// Returns the index as an `Option`.
    #[must_use]
    pub const fn to_option(self) -> Option<usize> {
        if self.exists { Some(self.index) } else { None }
    }
}

/// Outcome of an ordered subset test.
///
/// On failure `index` is the position in the candidate subset of the first
/// element that was not found; on success it equals the subset length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct SubsetResult {
    /// Failure point, or the subset length on success.
    pub index: usize,
    /// Whether every element was found.
    pub success: bool,
}

/// The equal-range of a value in a sorted range.
///
/// `lower_bound..upper_bound` is the run of elements equal to the value. An
/// empty run still marks where the value would be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct LowerAndUpperBoundResult {
    /// First position not less than the value.
    pub lower_bound: usize,
    /// First position greater than the value.
    pub upper_bound: usize,
}

impl LowerAndUpperBoundResult {
    /// Number of elements equal to the value.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.upper_bound - self.lower_bound
    }

    /// Returns `true` if no element equals the value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.upper_bound == self.lower_bound
    }

    /// The equal-range as a `Range`.
    #[must_use]
    pub const fn as_range(&self) -> std::ops::Range<usize> {
        self.lower_bound..self.upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_two_sources_result_converts_to_destination_offset() {
        let written: usize = CopyTwoSourcesResult::new(4, 2, 5).into();
        assert_eq!(written, 5);
    }

    #[rstest]
    #[case(FindResult::found(3), Some(3))]
    #[case(FindResult::not_found(3), None)]
    fn test_find_result_to_option(#[case] result: FindResult, #[case] expected: Option<usize>) {
        assert_eq!(result.to_option(), expected);
    }

    #[rstest]
    fn test_not_found_points_past_end() {
        let result = FindResult::not_found(7);
        assert_eq!(result.index, 7);
        assert!(!result.exists);
    }

    #[rstest]
    fn test_bounds_length() {
        let bounds = LowerAndUpperBoundResult {
            lower_bound: 2,
            upper_bound: 5,
        };
        assert_eq!(bounds.len(), 3);
        assert!(!bounds.is_empty());
        assert_eq!(bounds.as_range(), 2..5);
    }
}
