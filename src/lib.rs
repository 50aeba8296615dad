//! A Binary Search Tree that orders its values by an integer hash rather than by comparing the
//! values themselves, mostly for educational purposes.
//!
//! ## Hash-ordered trees
//!
//! A regular BST needs its keys to be `Ord`. The tree in this crate instead asks every value for
//! an `i32` through the [`Hashable`][hash::Hashable] trait and sorts by that. This makes it
//! possible to store values that have no natural ordering, or values of completely different
//! types behind a `Box<dyn Hashable>`. The invariant every `Node` keeps is:
//!
//! 1. All the `Node`s in its left subtree have a hash strictly less than its own hash.
//! 2. All the `Node`s in its right subtree have a hash greater than *or equal to* its own hash.
//!
//! > Note the asymmetry. Values with equal hashes are never merged, they pile up to the right
//! > and so an in-order traversal returns them in the order they were inserted.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree visits the values
//! in ascending hash order. The tree doesn't balance itself, so its height is only `O(lg N)` if
//! the hashes arrive in a friendly order and `O(N)` in the worst case.
//!
//! ## Hashing bytes
//!
//! [`hash_bytes`][hash::hash_bytes] is a deliberately simple hash for byte sequences (and
//! therefore strings). It is deterministic and cheap but makes no attempt at avoiding
//! collisions.
//!
//! # Examples
//!
//! ```
//! use hash_bst::{Hashable, Tree};
//!
//! let mut tree: Tree<Box<dyn Hashable>> = Tree::new();
//! tree.push(Box::new("abc"));
//! tree.push(Box::new(12i32));
//!
//! let hashes: Vec<i32> = tree.iter().map(|v| v.hash()).collect();
//! assert_eq!(hashes, [12, 0x0063_6261]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod hash;
pub mod tree;

pub use hash::{hash_bytes, Hashable, Hashed};
pub use tree::Tree;
