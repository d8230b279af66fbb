use avl_index::{AvlSet, Node};
use proptest::prelude::*;

#[allow(dead_code)]
pub(super) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(
    mut i: I,
    mut j: J,
) where
    I::Item: std::fmt::Debug + Eq, // same inferred for J::Item
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

// Walks every node and asserts |left height - right height| <= 1, computing
// heights from scratch rather than trusting the cache.  Returns the height.
#[allow(dead_code)]
pub(super) fn assert_balanced<T>(n: Option<&Node<T>>) -> i32 {
    match n {
        None => -1,
        Some(n) => {
            let lf = assert_balanced(n.left());
            let rt = assert_balanced(n.right());
            assert!((lf - rt).abs() <= 1);
            assert_eq!(i32::from(n.height()), lf.max(rt) + 1);
            assert_eq!(i32::from(n.balance_factor()), lf - rt);
            lf.max(rt) + 1
        }
    }
}

#[allow(dead_code)]
pub(super) fn count_nodes<T>(n: Option<&Node<T>>) -> usize {
    n.map_or(0, |n| count_nodes(n.left()) + 1 + count_nodes(n.right()))
}

#[allow(dead_code)]
pub(super) fn chk_set<T: Ord + std::fmt::Debug>(s: &AvlSet<T>) {
    s.check().unwrap();
    assert_balanced(s.root());
    assert_eq!(count_nodes(s.root()), s.len());
    assert!(s.iter().zip(s.iter().skip(1)).all(|(a, b)| a < b));
}

#[allow(dead_code)]
pub(super) type U16Seq = Vec<u16>;

#[allow(dead_code)]
pub(super) fn u16_seq() -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0u16..1024u16, 0..512)
}

#[allow(dead_code)]
pub(super) fn string_seq() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,2}", 0..512)
}

// (is_add, value) pairs; values drawn from a small range so removes hit
#[allow(dead_code)]
pub(super) fn ops() -> impl Strategy<Value = Vec<(bool, u8)>> {
    prop::collection::vec((any::<bool>(), 0u8..64), 0..512)
}
