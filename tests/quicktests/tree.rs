use hash_bst::{hash_bytes, Hashable, Hashed, Tree};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Builds a tree out of the values the operations insert.
fn do_ops(ops: Vec<Op>) -> Tree<Box<dyn Hashable>> {
    ops.into_iter().map(Op::into_value).collect()
}

#[quickcheck]
fn traversal_is_non_decreasing(ops: Vec<Op>) -> bool {
    let tree = do_ops(ops);
    let mut hashes = Vec::new();
    tree.traverse(|v| hashes.push(v.hash()));

    hashes.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn nothing_dropped(ops: Vec<Op>) -> bool {
    let count = ops.len();
    let tree = do_ops(ops);
    let mut visits = 0;
    tree.traverse(|_| visits += 1);

    visits == count && tree.len() == count
}

#[quickcheck]
fn stored_hash_matches_value(xs: Vec<String>) -> bool {
    let tree: Tree<String> = xs.into_iter().collect();

    tree.iter_hashed()
        .all(|(hash, s)| hash == hash_bytes(s.as_bytes()))
}

#[quickcheck]
fn early_stop_is_prefix(xs: Vec<i32>, n: usize) -> bool {
    let tree: Tree<i32> = xs.into_iter().collect();
    let mut full = Vec::new();
    tree.traverse(|x| full.push(*x));

    let n = n % (full.len() + 1);
    let prefix: Vec<i32> = tree.iter().take(n).copied().collect();
    prefix[..] == full[..n]
}

#[quickcheck]
fn ties_in_insertion_order(hashes: Vec<u8>) -> bool {
    let tree: Tree<Hashed<usize>> = hashes
        .iter()
        .enumerate()
        .map(|(i, &h)| Hashed::new(i, i32::from(h % 4)))
        .collect();

    let visited: Vec<(i32, usize)> = tree.iter().map(|h| (h.hash(), *h.value())).collect();
    visited.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn strings_scenario() {
    let tree = ["abc", "xyz", "123", "456"]
        .iter()
        .fold(Tree::new(), |tree, s| tree.insert(s.to_string()));

    let mut out = Vec::new();
    tree.traverse(|s| out.push(s.clone()));
    assert_eq!(out, ["123", "456", "abc", "xyz"]);
}

#[test]
fn integer_scenario() {
    let tree = Tree::new()
        .insert(Hashed::new("a", 5))
        .insert(Hashed::new("b", 3))
        .insert(Hashed::new("c", 3))
        .insert(Hashed::new("d", 8));

    let out: Vec<_> = tree.iter_hashed().map(|(h, v)| (h, *v.value())).collect();
    assert_eq!(out, [(3, "b"), (3, "c"), (5, "a"), (8, "d")]);
}

#[test]
fn empty_tree_never_visits() {
    let tree: Tree<String> = Tree::default();
    tree.traverse(|_| panic!("visited an empty tree"));
}
