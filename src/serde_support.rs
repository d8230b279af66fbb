use crate::AvlSet;
use serde::de::{SeqAccess, Visitor};
use std::fmt::Formatter;
use std::marker::PhantomData;

// Builds a set from a sequence by repeated `add`; duplicates collapse.
pub(crate) struct SetVisitor<T> {
    marker: PhantomData<fn() -> AvlSet<T>>,
}

impl<T> SetVisitor<T> {
    pub(crate) fn new() -> Self {
        SetVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for SetVisitor<T>
where
    T: serde::de::Deserialize<'de> + Ord,
{
    type Value = AvlSet<T>;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str("avl_index::AvlSet")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = AvlSet::new();
        while let Some(v) = seq.next_element()? {
            set.add(v);
        }
        Ok(set)
    }
}
