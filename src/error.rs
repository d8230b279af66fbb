use thiserror::Error;

/// A broken invariant found by [`AvlSet::check`](crate::AvlSet::check).
///
/// The set's own operations never produce these.  They indicate a tree that
/// was edited through the escape-hatch accessors, or an `Ord` implementation
/// that is not a total order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// An in-order walk found a key not strictly greater than its predecessor.
    #[error("keys are not in strictly ascending order")]
    OutOfOrder,

    /// A node's cached height does not match its children.
    #[error("cached height {cached} does not match actual height {actual}")]
    StaleHeight {
        /// Height stored in the node.
        cached: i8,
        /// Height computed from the children's cached heights.
        actual: i16,
    },

    /// A node's cached balance factor does not match its children.
    #[error("cached balance factor {cached} does not match actual {actual}")]
    StaleBalance {
        /// Balance factor stored in the node.
        cached: i8,
        /// Balance factor computed from the children's cached heights.
        actual: i16,
    },

    /// A node's subtrees differ in height by more than one.
    #[error("node is out of balance (balance factor {balance})")]
    Unbalanced {
        /// The offending balance factor.
        balance: i16,
    },

    /// The element count disagrees with the number of reachable nodes.
    #[error("set length {len} but {reachable} nodes are reachable")]
    LenMismatch {
        /// The set's element count.
        len: usize,
        /// Nodes reachable from the root.
        reachable: usize,
    },
}
