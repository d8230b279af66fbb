use super::{chk, find, ins, rm, Node, OptNode};
use crate::InvariantError;
use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

/// A sorted set of unique values, stored in an AVL tree.
///
/// [AVL trees](https://en.wikipedia.org/wiki/AVL_tree) keep the heights of
/// sibling subtrees within one of each other, so [`add`](#method.add),
/// [`remove`](#method.remove) and [`contains`](#method.contains) take
/// O(log n) time.  Each node exclusively owns its children.
///
/// The set is not synchronized.  Sharing one between threads requires
/// external locking.
///
/// # Examples
/// ```
/// use avl_index::AvlSet;
///
/// let mut s = AvlSet::new();
/// s.add(10);
/// s.add(20);
/// s.add(30);
///
/// // the ascending inserts were rotated into a balanced tree
/// let root = s.root().unwrap();
/// assert_eq!(root.key(), &20);
/// assert_eq!(root.balance_factor(), 0);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    len: usize,
    root: OptNode<T>,
}

impl<T> AvlSet<T> {
    /// Creates a new, empty set.
    /// # Examples
    /// ```
    /// use avl_index::AvlSet;
    /// let s: AvlSet<u32> = AvlSet::new();
    /// assert!(s.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlSet { len: 0, root: None }
    }

    /// Drops all elements from the set.
    pub fn clear(&mut self) {
        tracing::debug!(len = self.len, "clearing set");
        self.len = 0;
        self.root = None;
    }

    /// Returns true if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](#method.len).
    pub fn size(&self) -> usize {
        self.len
    }

    /// Height of the tree, or -1 when empty.
    pub fn height(&self) -> i8 {
        super::height(&self.root)
    }

    /// Returns the root of the tree for inspection.
    ///
    /// # Examples
    /// ```
    /// use avl_index::AvlSet;
    ///
    /// let s = AvlSet::from([30, 10, 20]);
    /// let root = s.root().unwrap();
    /// assert_eq!(root.key(), &20);
    /// assert_eq!(root.left().map(|n| *n.key()), Some(10));
    /// assert_eq!(root.right().map(|n| *n.key()), Some(30));
    /// assert_eq!(root.height(), 1);
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the root slot of the tree for direct manipulation.
    ///
    /// This is a testing and diagnostics escape hatch.  The set's invariants
    /// (ordering, uniqueness, cached heights, balance and the element count)
    /// only hold while all mutation goes through [`add`](#method.add) and
    /// [`remove`](#method.remove).  After editing the tree by hand, the caller
    /// is responsible for restoring them; [`check`](#method.check) reports any
    /// that are broken.
    pub fn root_mut(&mut self) -> &mut OptNode<T> {
        &mut self.root
    }

    /// Overwrites the element count.
    ///
    /// Escape hatch companion of [`root_mut`](#method.root_mut); the count is
    /// not validated against the tree.  A count below the number of stored
    /// elements saturates at zero on [`remove`](#method.remove).
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Returns the least element of the set.
    pub fn first(&self) -> Option<&T> {
        let mut n = self.root.as_deref()?;
        while let Some(lf) = n.left.as_deref() {
            n = lf;
        }
        Some(&n.key)
    }

    /// Returns the greatest element of the set.
    pub fn last(&self) -> Option<&T> {
        let mut n = self.root.as_deref()?;
        while let Some(rt) = n.right.as_deref() {
            n = rt;
        }
        Some(&n.key)
    }

    /// Creates an iterator over the elements in ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_index::AvlSet;
    ///
    /// let s = AvlSet::from([3, 1, 2]);
    /// assert!(s.iter().copied().eq([1, 2, 3]));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut work = Vec::new();
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            work.push(n);
            curr = n.left.as_deref();
        }

        Iter {
            work,
            len: self.len,
        }
    }

    /// Applies f to each element of the set in ascending order.
    ///
    /// This is an in-order traversal without the iterator's work stack.
    pub fn for_each<'a, F: FnMut(&'a T)>(&'a self, mut f: F) {
        if let Some(n) = self.root.as_deref() {
            n.for_each(&mut f);
        }
    }
}

impl<T: Ord> AvlSet<T> {
    /// Adds a value to the set.
    ///
    /// Returns true if the value was inserted.  If an equal element is already
    /// present, the set is left unchanged, `value` is dropped and false is
    /// returned.
    ///
    /// # Examples
    /// ```
    /// use avl_index::AvlSet;
    ///
    /// let mut s = AvlSet::new();
    /// assert!(s.add(7));
    /// assert!(!s.add(7));
    /// assert_eq!(s.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let inserted = ins(&mut self.root, value);
        self.len += inserted as usize;
        inserted
    }

    /// Adds each element of the iterator, in iteration order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for v in values {
            self.add(v);
        }
    }

    /// Removes the element equal to `value` and returns it.
    ///
    /// A missing value is not an error: `None` is returned and the set is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use avl_index::AvlSet;
    ///
    /// let mut s = AvlSet::from([1, 2, 3]);
    /// assert_eq!(s.remove(&2), Some(2));
    /// assert_eq!(s.remove(&2), None);
    /// assert_eq!(s.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = rm(&mut self.root, value);
        self.len = self.len.saturating_sub(removed.is_some() as usize);
        removed
    }

    /// Tests if the set contains an element equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the element equal to `value`, if present.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find(&self.root, value)
    }

    /// Verifies the tree's invariants.
    ///
    /// Checks that keys ascend strictly in order, that every cached height and
    /// balance factor matches the children, that every node is balanced and
    /// that [`len`](#method.len) equals the number of reachable nodes.  The
    /// first violation found is returned.
    ///
    /// The check always succeeds unless the tree was edited through
    /// [`root_mut`](#method.root_mut) or [`set_len`](#method.set_len).
    pub fn check(&self) -> Result<(), InvariantError> {
        let res = chk(&self.root, None).and_then(|(reachable, _)| {
            if reachable == self.len {
                Ok(())
            } else {
                Err(InvariantError::LenMismatch {
                    len: self.len,
                    reachable,
                })
            }
        });

        if let Err(e) = &res {
            tracing::debug!(error = %e, "invariant check failed");
        }

        res
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for AvlSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("AvlSet(EMPTY)"),
            // use Node's Debug formatter
            Some(n) => f.write_fmt(format_args!("AvlSet(#{}, {:?})", self.len, n)),
        }
    }
}

impl<T: PartialEq> PartialEq for AvlSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlSet<T> {}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = AvlSet::new();
        s.add_all(iter);
        s
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlSet<T> {
    fn from(vs: [T; N]) -> Self {
        AvlSet::from_iter(vs)
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the elements of an [`AvlSet`].
pub struct Iter<'a, T> {
    // nodes whose key and right subtree are still to be visited
    work: Vec<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.work.pop()?;

        let mut curr = n.right.as_deref();
        while let Some(m) = curr {
            self.work.push(m);
            curr = m.left.as_deref();
        }

        self.len = self.len.saturating_sub(1);
        Some(&n.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(feature = "serde")]
impl<T: serde::ser::Serialize> serde::ser::Serialize for AvlSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for v in self {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Deserialize<'de> for AvlSet<T>
where
    T: serde::de::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_seq(crate::serde_support::SetVisitor::new())
    }
}
