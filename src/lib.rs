//! # An ordered set backed by an AVL tree
//!
//! `avl-index` provides [`AvlSet`], an in-memory ordered set of unique
//! elements.  The set is a self-balancing binary search tree: after every
//! insertion or removal, each node on the path back to the root has its cached
//! height and balance factor refreshed and, if its subtrees differ in height
//! by more than one, is restored with a single or double rotation.  Search,
//! insertion and deletion are O(log n).
//!
//! The tree can be inspected node by node through [`AvlSet::root`], which is
//! mainly useful for tests and diagnostics, and validated with
//! [`AvlSet::check`].
//!
//! The [`order`] module provides an ordering policy for optional keys in which
//! an absent key sorts after every present one.
//!
//! Enable the `serde` feature for `Serialize`/`Deserialize` support.

mod avl;
pub use avl::AvlSet;
pub use avl::Iter;
pub use avl::Node;
pub use avl::OptNode;

mod error;
pub use error::InvariantError;

pub mod order;

#[cfg(feature = "serde")]
mod serde_support;
