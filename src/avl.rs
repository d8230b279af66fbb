#![warn(missing_docs)]
use std::borrow::Borrow;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};

use crate::InvariantError;

mod avl_set;
pub use avl_set::{AvlSet, Iter};

/// An owned, possibly empty subtree.
pub type OptNode<T> = Option<Box<Node<T>>>;

/// A node of an [`AvlSet`].
///
/// Nodes are exposed for inspection: tests and diagnostics can walk the tree
/// through [`AvlSet::root`] and read each node's cached height and balance
/// factor.  The mutators on this type exist for the same purpose and are an
/// escape hatch.  The set only guarantees its invariants when every mutation
/// goes through its own methods; a tree edited by hand can be validated with
/// [`AvlSet::check`].
pub struct Node<T> {
    key: T,
    height: i8,
    bal: i8,
    left: OptNode<T>,
    right: OptNode<T>,
}

impl<T> Node<T> {
    /// Creates a leaf node: no children, height 0 and balance factor 0.
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 0,
            bal: 0,
            left: None,
            right: None,
        }
    }

    /// The element stored in this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// The left subtree, holding the lesser elements.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right subtree, holding the greater elements.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted here.  A leaf has height 0.
    pub fn height(&self) -> i8 {
        self.height
    }

    /// Cached balance factor: left height minus right height.
    pub fn balance_factor(&self) -> i8 {
        self.bal
    }

    /// Mutable access to the stored element.
    ///
    /// Changing the element's ordering relative to its neighbours breaks the
    /// search-tree ordering of the set.
    pub fn key_mut(&mut self) -> &mut T {
        &mut self.key
    }

    /// Mutable access to the left child slot.
    ///
    /// The cached height and balance factor of this node are not updated.
    pub fn left_mut(&mut self) -> &mut OptNode<T> {
        &mut self.left
    }

    /// Mutable access to the right child slot.
    ///
    /// The cached height and balance factor of this node are not updated.
    pub fn right_mut(&mut self) -> &mut OptNode<T> {
        &mut self.right
    }

    /// Overwrites the cached height.
    pub fn set_height(&mut self, height: i8) {
        self.height = height;
    }

    /// Overwrites the cached balance factor.
    pub fn set_balance_factor(&mut self, bal: i8) {
        self.bal = bal;
    }

    // Recomputes height and balance factor from the children's cached
    // heights.  Only this node is updated, never its descendants.
    fn update(&mut self) {
        let lf = height(&self.left);
        let rt = height(&self.right);
        self.bal = lf.saturating_sub(rt);
        self.height = lf.max(rt).saturating_add(1);
    }

    fn for_each<'a, F: FnMut(&'a T)>(&'a self, f: &mut F) {
        if let Some(lf) = self.left.as_deref() {
            lf.for_each(f);
        }

        f(&self.key);

        if let Some(rt) = self.right.as_deref() {
            rt.for_each(f);
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            key: self.key.clone(),
            height: self.height,
            bal: self.bal,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "(ht: {} bf: {} {:?} ",
            self.height, self.bal, self.key
        ))?;

        match &self.left {
            None => f.write_str(".")?,
            Some(lf) => lf.fmt(f)?,
        }

        f.write_str(" ")?;

        match &self.right {
            None => f.write_str(".")?,
            Some(rt) => rt.fmt(f)?,
        }

        f.write_str(")")
    }
}

// Height of a possibly empty subtree; the empty tree has height -1.
//
// AVL trees are at most ~1.44 * log2(n) tall, so i8 cannot overflow for any
// tree that fits in memory.
fn height<T>(opt_node: &OptNode<T>) -> i8 {
    opt_node.as_ref().map_or(-1, |n| n.height)
}

fn rot_lf<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    // We want the following transformation:
    //    a(x, b(y, z)))   =>   b(a(x, y), z)
    // x and z retain the same parents.

    let mut b = match a.right.take() {
        Some(b) => b,
        None => return a,
    };

    a.right = b.left.take();
    a.update();

    b.left = Some(a);
    b.update();
    b
}

fn rot_rt<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    // We want the following transformation:
    //    a(b(x, y), z)   =>   b(x, a(y, z))
    // x and z retain the same parents.

    let mut b = match a.left.take() {
        Some(b) => b,
        None => return a,
    };

    a.left = b.right.take();
    a.update();

    b.right = Some(a);
    b.update();
    b
}

fn rot_lf_rt<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    //    a(b(x, c(y, z)), w)   =>   c(b(x, y), a(z, w))
    a.left = a.left.take().map(rot_lf);
    rot_rt(a)
}

fn rot_rt_lf<T>(mut a: Box<Node<T>>) -> Box<Node<T>> {
    //    a(x, b(c(y, z), w))   =>   c(a(x, y), b(z, w))
    a.right = a.right.take().map(rot_rt);
    rot_lf(a)
}

// Refreshes the cached height and balance factor of the subtree root and
// applies at most one (single or double) rotation.  Returns the new root.
//
// Only the root of the subtree is examined: callers must invoke this on every
// node of a mutation path, bottom-up, right after its child slot is assigned.
fn rebalance<T>(opt_node: OptNode<T>) -> OptNode<T> {
    let mut n = opt_node?;
    n.update();

    let n = if n.bal < -1 {
        if n.right.as_ref().map_or(0, |r| r.bal) > 0 {
            tracing::trace!(height = n.height, "right-left rotation");
            rot_rt_lf(n)
        } else {
            tracing::trace!(height = n.height, "left rotation");
            rot_lf(n)
        }
    } else if n.bal > 1 {
        if n.left.as_ref().map_or(0, |l| l.bal) < 0 {
            tracing::trace!(height = n.height, "left-right rotation");
            rot_lf_rt(n)
        } else {
            tracing::trace!(height = n.height, "right rotation");
            rot_rt(n)
        }
    } else {
        n
    };

    Some(n)
}

// Inserts key below root unless an equal key is already present.  Returns
// whether the tree changed.  Every ancestor of the new leaf is rebalanced as
// the recursion unwinds.
fn ins<T: Ord>(root: &mut OptNode<T>, key: T) -> bool {
    let inserted = match root.as_deref_mut() {
        None => {
            *root = Some(Box::new(Node::new(key)));
            return true; // *** EARLY RETURN ***
        }

        Some(n) => match key.cmp(&n.key) {
            Less => ins(&mut n.left, key),
            Greater => ins(&mut n.right, key),
            Equal => false,
        },
    };

    if inserted {
        *root = rebalance(root.take());
    }

    inserted
}

// Detaches the rightmost node of the subtree at n, i.e. its maximum.  The
// detached node's left subtree takes its place and the path down to it is
// rebalanced.  Returns the remaining subtree and the detached node.
fn rm_rightmost<T>(mut n: Box<Node<T>>) -> (OptNode<T>, Box<Node<T>>) {
    match n.right.take() {
        None => (n.left.take(), n),
        Some(rt) => {
            let (rest, max) = rm_rightmost(rt);
            n.right = rest;
            (rebalance(Some(n)), max)
        }
    }
}

// Unlinks n and returns its replacement along with its key: nothing for a
// leaf, the only child for a node with one child, or the in-order
// predecessor for a node with two children.  The replacement is not
// rebalanced here.
fn unlink<T>(mut n: Box<Node<T>>) -> (OptNode<T>, T) {
    let replacement = match (n.left.take(), n.right.take()) {
        (None, None) => None,
        (None, rt @ Some(_)) => rt,
        (lf @ Some(_), None) => lf,
        (Some(lf), rt @ Some(_)) => {
            let (lf, mut pred) = rm_rightmost(lf);
            pred.left = lf;
            pred.right = rt;
            Some(pred)
        }
    };

    let Node { key, .. } = *n;
    (replacement, key)
}

// Removes the element equal to key from the subtree at root and returns it.
fn rm<T, Q>(root: &mut OptNode<T>, key: &Q) -> Option<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let n = root.as_deref_mut()?;

    let removed = match key.cmp(n.key.borrow()) {
        Less => rm(&mut n.left, key)?,
        Greater => rm(&mut n.right, key)?,
        Equal => {
            let (replacement, old_key) = unlink(root.take()?);
            *root = replacement;
            old_key
        }
    };

    *root = rebalance(root.take());
    Some(removed)
}

fn find<'a, T, Q>(mut curr: &'a OptNode<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    while let Some(n) = curr {
        match key.cmp(n.key.borrow()) {
            Less => curr = &n.left,
            Equal => return Some(&n.key),
            Greater => curr = &n.right,
        }
    }

    None
}

// Validates the subtree at opt_node.  `greatest` is the largest key seen so
// far in an in-order walk; every key here must exceed it.  Returns the number
// of nodes and the largest key of the subtree (or `greatest` if empty).
fn chk<'a, T: Ord>(
    opt_node: &'a OptNode<T>,
    greatest: Option<&'a T>,
) -> Result<(usize, Option<&'a T>), InvariantError> {
    let n = match opt_node.as_deref() {
        None => return Ok((0, greatest)),
        Some(n) => n,
    };

    // are our left descendents okay, and all less than us?
    let (lf_len, greatest) = chk(&n.left, greatest)?;
    if greatest.is_some_and(|k| k >= &n.key) {
        return Err(InvariantError::OutOfOrder);
    }

    // do we know our height and balance?
    // widened: cached heights may hold any value after hand edits
    let lf_ht = i16::from(height(&n.left));
    let rt_ht = i16::from(height(&n.right));
    let actual = lf_ht.max(rt_ht) + 1;
    if i16::from(n.height) != actual {
        return Err(InvariantError::StaleHeight {
            cached: n.height,
            actual,
        });
    }

    let actual = lf_ht - rt_ht;
    if i16::from(n.bal) != actual {
        return Err(InvariantError::StaleBalance {
            cached: n.bal,
            actual,
        });
    }

    // are we balanced?
    if !(-1..=1).contains(&actual) {
        return Err(InvariantError::Unbalanced { balance: actual });
    }

    // are our right descendents okay?
    let (rt_len, greatest) = chk(&n.right, Some(&n.key))?;

    Ok((lf_len + rt_len + 1, greatest))
}
