//! Ordering with absent values sorting last.
//!
//! [`compare`] orders optional values so that two absent values are equal and
//! an absent value is greater than any present one.  This is the reverse of
//! the derived `Ord` for [`Option`], which puts `None` first.
//!
//! The tree itself compares keys only through [`Ord`], so storing
//! [`NullsLast`] keys in an [`AvlSet`](crate::AvlSet) applies the policy at
//! every comparison made by search, insertion and removal.

use std::cmp::Ordering;

/// Compares two optional values, treating an absent value as the maximum.
///
/// # Examples
/// ```
/// use avl_index::order::compare;
/// use std::cmp::Ordering::*;
///
/// assert_eq!(compare::<u8>(None, None), Equal);
/// assert_eq!(compare(None, Some(&1)), Greater);
/// assert_eq!(compare(Some(&1), None), Less);
/// assert_eq!(compare(Some(&1), Some(&2)), Less);
/// ```
pub fn compare<T: Ord + ?Sized>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// An optional key ordered by [`compare`]: `NullsLast(None)` sorts after every
/// present value.
///
/// # Examples
/// ```
/// use avl_index::order::NullsLast;
/// use avl_index::AvlSet;
///
/// let s = AvlSet::from([NullsLast(None), NullsLast(Some(2)), NullsLast(Some(1))]);
/// assert_eq!(s.last(), Some(&NullsLast(None)));
/// assert_eq!(s.first(), Some(&NullsLast(Some(1))));
/// ```
#[derive(Debug, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NullsLast<T>(pub Option<T>);

impl<T> NullsLast<T> {
    /// Wraps a present value.
    pub fn some(v: T) -> Self {
        NullsLast(Some(v))
    }

    /// The absent value.
    pub fn none() -> Self {
        NullsLast(None)
    }

    /// Unwraps into the underlying option.
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> From<Option<T>> for NullsLast<T> {
    fn from(v: Option<T>) -> Self {
        NullsLast(v)
    }
}

impl<T: Ord> PartialEq for NullsLast<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for NullsLast<T> {}

impl<T: Ord> PartialOrd for NullsLast<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for NullsLast<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.0.as_ref(), other.0.as_ref())
    }
}
