//! Error types for views and the algorithms that run over them.
//!
//! Two failure families exist, so callers can tell a bad count from a bad
//! position:
//!
//! - [`InvalidArgumentError`]: a count, `k`, rank or window length that the
//!   input cannot satisfy.
//! - [`OutOfRangeError`]: an index or offset outside the addressable range.
//!
//! Both are raised before any element is moved. A fixed destination that fills
//! up is not an error; it is reported through the result records in
//! [`crate::result`].

/// A count-like argument that the input cannot satisfy.
///
/// # Examples
///
/// ```rust
/// use seqview::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "partial_sort",
///     parameter: "k",
///     value: 7,
///     requirement: "must not exceed",
///     limit: 5,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "partial_sort: k = 7 must not exceed 5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// The value that was supplied.
    pub value: usize,
    /// How `value` must relate to `limit`, e.g. `"must be less than"`.
    pub requirement: &'static str,
    /// The bound the value broke.
    pub limit: usize,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: {} = {} {} {}",
            self.operation, self.parameter, self.value, self.requirement, self.limit
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// A position outside `[0, length]` (offsets) or `[0, length)` (element access).
///
/// # Examples
///
/// ```rust
/// use seqview::error::OutOfRangeError;
///
/// let error = OutOfRangeError {
///     operation: "SequenceView::at",
///     parameter: "index",
///     index: 4,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "SequenceView::at: index 4 is out of range for length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The operation that rejected the position.
    pub operation: &'static str,
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// The position that was supplied.
    pub index: usize,
    /// The length the position was checked against.
    pub length: usize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: {} {} is out of range for length {}",
            self.operation, self.parameter, self.index, self.length
        )
    }
}

impl std::error::Error for OutOfRangeError {}

/// Unified error type for every fallible operation in this crate.
///
/// # Examples
///
/// ```rust
/// use seqview::error::SequenceError;
/// use seqview::view::SequenceView;
///
/// let items = [1, 2, 3];
/// let error = SequenceView::with_range(&items, 4, 0).unwrap_err();
/// assert!(matches!(error, SequenceError::OutOfRange(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A count or rank the input cannot satisfy.
    InvalidArgument(InvalidArgumentError),
    /// A position outside the addressable range.
    OutOfRange(OutOfRangeError),
}

impl SequenceError {
    pub(crate) const fn invalid_argument(
        operation: &'static str,
        parameter: &'static str,
        value: usize,
        requirement: &'static str,
        limit: usize,
    ) -> Self {
        Self::InvalidArgument(InvalidArgumentError {
            operation,
            parameter,
            value,
            requirement,
            limit,
        })
    }

    pub(crate) const fn out_of_range(
        operation: &'static str,
        parameter: &'static str,
        index: usize,
        length: usize,
    ) -> Self {
        Self::OutOfRange(OutOfRangeError {
            operation,
            parameter,
            index,
            length,
        })
    }

    /// Returns the name of the operation that raised the error.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument(error) => error.operation,
            Self::OutOfRange(error) => error.operation,
        }
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::OutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::OutOfRange(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SequenceError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<OutOfRangeError> for SequenceError {
    fn from(error: OutOfRangeError) -> Self {
        Self::OutOfRange(error)
    }
}
