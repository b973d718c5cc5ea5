//! Comparator adapter.
//!
//! Every ordered algorithm in this crate calls a [`Comparator`]; every
//! equality-based algorithm calls an [`Equivalence`]. Both traits accept the
//! usual ways of spelling an ordering:
//!
//! | Spelling                           | Adapter                  |
//! |------------------------------------|--------------------------|
//! | natural `Ord` ordering             | [`NaturalOrder`]         |
//! | three-way `Fn(&T, &T) -> Ordering` | the closure itself       |
//! | strict-weak `Fn(&T, &T) -> bool`   | [`LessThan`]             |
//! | ordering by an extracted key       | [`ByKey`]                |
//! | descending                         | [`Reversed`]             |
//! | natural `PartialEq` equality       | [`NaturalEquality`]      |
//! | `Fn(&T, &T) -> bool` equality      | the closure itself       |
//! | "compares `Equal`"                 | [`EquivalentWhenEqual`]  |
//!
//! A comparator must be a strict weak ordering; with anything else the
//! ordered algorithms produce unspecified (but memory-safe) results.
//!
//! # Examples
//!
//! ```rust
//! use seqview::compare::{ByKey, Comparator, LessThan, NaturalOrder, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//! assert_eq!(LessThan(|a: &i32, b: &i32| a < b).compare(&2, &2), Ordering::Equal);
//! assert_eq!(ByKey(|pair: &(i32, &str)| pair.0).compare(&(1, "b"), &(1, "a")), Ordering::Equal);
//! ```

use std::cmp::Ordering;

/// A three-way ordering over `T`.
pub trait Comparator<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` orders strictly before `right`.
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// The natural ordering of `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Adapts a strict-weak "less than" predicate into a three-way comparator.
///
/// Elements are equivalent when neither is less than the other.
#[derive(Debug, Clone, Copy)]
pub struct LessThan<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for LessThan<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        if (self.0)(left, right) {
            Ordering::Less
        } else if (self.0)(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        (self.0)(left, right)
    }
}

/// Orders elements by a key extracted with the wrapped function.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left).cmp(&(self.0)(right))
    }
}

/// Flips the wrapped comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// An equivalence relation over `T`.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if the two elements are equivalent.
    fn equivalent(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Natural `PartialEq` equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEquality;

impl<T: PartialEq + ?Sized> Equivalence<T> for NaturalEquality {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Treats elements as equivalent when the wrapped comparator says `Equal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquivalentWhenEqual<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Equivalence<T> for EquivalentWhenEqual<C> {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        self.0.compare(left, right) == Ordering::Equal
    }
}
