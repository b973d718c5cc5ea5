//! Inclusion and tie-break policy of the ordered two-source walk.

use std::cmp::Ordering;

/// Which element (if any) a step writes to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emit {
    Nothing,
    First,
    Second,
}

/// Which cursors a step advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    First,
    Second,
    Both,
}

/// One step of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) emit: Emit,
    pub(crate) advance: Advance,
}

impl Step {
    const fn new(emit: Emit, advance: Advance) -> Self {
        Self { emit, advance }
    }
}

/// The operations driven by the ordered two-source walk.
///
/// | Operation             | first < second | tie                 | first > second |
/// |-----------------------|----------------|---------------------|----------------|
/// | `Merge`               | emit 1, i++    | emit 1, i++         | emit 2, j++    |
/// | `Union`               | emit 1, i++    | emit 1, i++, j++    | emit 2, j++    |
/// | `Intersection`        | i++            | emit 1, i++, j++    | j++            |
/// | `Difference`          | emit 1, i++    | i++, j++            | j++            |
/// | `SymmetricDifference` | emit 1, i++    | i++, j++            | emit 2, j++    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOperation {
    /// Stable merge keeping every element of both sources.
    Merge,
    /// Elements of either source, ties emitted once.
    Union,
    /// Elements present in both sources.
    Intersection,
    /// Elements of the first source absent from the second.
    Difference,
    /// Elements present in exactly one source.
    SymmetricDifference,
}

impl MergeOperation {
    /// The step taken after comparing `first[i]` with `second[j]`.
    pub(crate) const fn step(self, ordering: Ordering) -> Step {
        match (self, ordering) {
            (Self::Intersection, Ordering::Less) => Step::new(Emit::Nothing, Advance::First),
            (_, Ordering::Less) => Step::new(Emit::First, Advance::First),
            (Self::Merge, Ordering::Equal) => Step::new(Emit::First, Advance::First),
            (Self::Union | Self::Intersection, Ordering::Equal) => {
                Step::new(Emit::First, Advance::Both)
            }
            (Self::Difference | Self::SymmetricDifference, Ordering::Equal) => {
                Step::new(Emit::Nothing, Advance::Both)
            }
            (Self::Merge | Self::Union | Self::SymmetricDifference, Ordering::Greater) => {
                Step::new(Emit::Second, Advance::Second)
            }
            (Self::Intersection | Self::Difference, Ordering::Greater) => {
                Step::new(Emit::Nothing, Advance::Second)
            }
        }
    }

    /// Whether leftovers of the first source are copied once the second runs out.
    pub(crate) const fn drains_first(self) -> bool {
        !matches!(self, Self::Intersection)
    }

    /// Whether leftovers of the second source are copied once the first runs out.
    pub(crate) const fn drains_second(self) -> bool {
        matches!(self, Self::Merge | Self::Union | Self::SymmetricDifference)
    }

    /// Operation name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Difference => "difference",
            Self::SymmetricDifference => "symmetric_difference",
        }
    }
}
