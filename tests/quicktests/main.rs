use quickcheck::{Arbitrary, Gen};

use hash_bst::Hashable;

mod hash;
mod tree;

/// An enum for the various kinds of "things" to do to a hash-ordered tree in a quicktest.
#[derive(Clone, Debug)]
pub enum Op {
    /// Insert the string into the tree
    Insert(String),
    /// Insert the integer into the tree, it is its own hash
    InsertInt(i32),
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(String::arbitrary(g)),
            1 => Op::InsertInt(i32::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

impl Op {
    /// Turns the operation into the boxed value it inserts.
    pub fn into_value(self) -> Box<dyn Hashable> {
        match self {
            Op::Insert(s) => Box::new(s),
            Op::InsertInt(x) => Box::new(x),
        }
    }
}
