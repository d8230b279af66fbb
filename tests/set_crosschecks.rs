use avl_index::AvlSet;
use proptest::prelude::*;
use std::collections::BTreeSet as StdSet;

mod common;
use common::*;

#[derive(Clone, Debug)]
struct Sets<T> {
    avl_set: AvlSet<T>,
    std_set: StdSet<T>,
}

impl<T> Sets<T>
where
    T: Clone + Ord + std::fmt::Debug,
{
    fn new(v: Vec<T>) -> Sets<T> {
        Sets {
            avl_set: AvlSet::from_iter(v.clone()),
            std_set: StdSet::from_iter(v),
        }
    }

    fn chk(&self) {
        assert_eq!(self.avl_set.len(), self.std_set.len());
        assert_eq_iters(self.avl_set.iter(), self.std_set.iter());
        assert_eq!(self.avl_set.first(), self.std_set.first());
        assert_eq!(self.avl_set.last(), self.std_set.last());
        chk_set(&self.avl_set);
    }
}

fn check_new(v: U16Seq) {
    Sets::new(v).chk();
}

fn check_extend(u: U16Seq, v: U16Seq) {
    let mut s = Sets::new(u);
    s.avl_set.extend(v.clone());
    s.std_set.extend(v);
    s.chk();
}

fn check_remove(u: U16Seq, v: U16Seq) {
    let mut s = Sets::new(u);
    for x in v.iter() {
        assert_eq!(s.avl_set.remove(x), s.std_set.take(x));
    }
    s.chk();
}

fn check_ops(ops: Vec<(bool, u8)>) {
    let mut s = Sets::new(Vec::new());
    for (is_add, x) in ops {
        if is_add {
            assert_eq!(s.avl_set.add(x), s.std_set.insert(x));
        } else {
            assert_eq!(s.avl_set.remove(&x), s.std_set.take(&x));
        }
        s.avl_set.check().unwrap();
    }
    s.chk();
}

fn check_strings(u: Vec<String>, v: Vec<String>) {
    let mut s = Sets::new(u);
    for x in v.iter() {
        assert_eq!(s.avl_set.contains(x.as_str()), s.std_set.contains(x));
        assert_eq!(s.avl_set.remove(x.as_str()), s.std_set.take(x));
    }
    s.chk();
}

fn check_eq(u: U16Seq) {
    let fwd = AvlSet::from_iter(u.iter().copied());
    let rev = AvlSet::from_iter(u.iter().rev().copied());
    assert_eq!(fwd, rev);

    let mut rev = rev;
    if let Some(&x) = u.first() {
        rev.remove(&x);
        assert_ne!(fwd, rev);
    }
}

proptest! {
    #[test]
    fn test_new(v in u16_seq()) {
        check_new(v);
    }

    #[test]
    fn test_extend(u in u16_seq(), v in u16_seq()) {
        check_extend(u, v);
    }

    #[test]
    fn test_remove(u in u16_seq(), v in u16_seq()) {
        check_remove(u, v);
    }

    #[test]
    fn test_ops(ops in ops()) {
        check_ops(ops);
    }

    #[test]
    fn test_strings(u in string_seq(), v in string_seq()) {
        check_strings(u, v);
    }

    #[test]
    fn test_eq(u in u16_seq()) {
        check_eq(u);
    }
}

#[test]
fn test_remove_regr1() {
    check_remove(vec![1, 2, 3, 4, 5, 6, 7], vec![4, 2, 6, 1]);
}
