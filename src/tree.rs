//! A BST ordered by [`Hashable::hash`] instead of by the values themselves.
//!
//! Each value is hashed once, when it is inserted, and the hash is stored next to it. Values
//! with a hash strictly less than a node's hash go into that node's left subtree and everything
//! else, including equal hashes, goes right. That means duplicate hashes are kept (not merged)
//! and come back out of a traversal in the order they were inserted.
//!
//! The tree doesn't balance itself. Inserting values in ascending hash order builds what is
//! effectively a linked list, so insertion, traversal and drop are all written iteratively.
//!
//! # Examples
//!
//! ```
//! use hash_bst::tree::Tree;
//!
//! let tree = Tree::new()
//!     .insert("abc")
//!     .insert("xyz")
//!     .insert("123")
//!     .insert("456");
//!
//! let mut seen = Vec::new();
//! tree.traverse(|s| seen.push(*s));
//!
//! // Sorted by hash, not alphabetically.
//! assert_eq!(seen, ["123", "456", "abc", "xyz"]);
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::hash::Hashable;

/// A Binary Search Tree keyed by the hash of its values. It supports inserting values and
/// visiting them in ascending hash order.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

/// A stored value along with the hash it had when inserted.
struct Node<T> {
    left: Link<T>,
    hash: i32,
    value: T,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(hash: i32, value: T) -> Box<Self> {
        Box::new(Self {
            left: None,
            hash,
            value,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Dropping a `Box<Node>` would recurse once per level, which overflows the stack for a
        // skewed tree. Detach the children first so every node is dropped as a leaf.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted into this tree yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are in this tree. An empty tree has a height of 0 and a tree with a single
    /// value has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }

        height
    }

    /// Returns an iterator over the values in ascending hash order. Values with equal hashes
    /// are yielded in the order they were inserted.
    ///
    /// Unlike [`traverse`][Self::traverse] this can be stopped early without visiting the rest
    /// of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_bst::tree::Tree;
    ///
    /// let tree: Tree<i32> = vec![5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().take(2).collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Same order as [`iter`][Self::iter] but each value comes with the hash it was stored under.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_bst::tree::Tree;
    ///
    /// let tree = Tree::new().insert("abc");
    ///
    /// assert_eq!(tree.iter_hashed().next(), Some((0x0063_6261, &"abc")));
    /// ```
    pub fn iter_hashed(&self) -> IterHashed<'_, T> {
        IterHashed(self.iter())
    }

    /// Visits every value in the tree, left subtree first, then the node, then the right
    /// subtree. `visitor` is called exactly once per stored value, in ascending hash order, and
    /// never for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_bst::hash::Hashed;
    /// use hash_bst::tree::Tree;
    ///
    /// let tree = Tree::new()
    ///     .insert(Hashed::new('a', 5))
    ///     .insert(Hashed::new('b', 3))
    ///     .insert(Hashed::new('c', 3))
    ///     .insert(Hashed::new('d', 8));
    ///
    /// let mut order = String::new();
    /// tree.traverse(|h| order.push(*h.value()));
    ///
    /// // 'b' and 'c' share a hash so they keep their insertion order.
    /// assert_eq!(order, "bcad");
    /// ```
    pub fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor);
    }
}

impl<T> Tree<T>
where
    T: Hashable,
{
    /// Returns a tree containing everything in this tree plus `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_bst::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn insert(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Inserts `value` in place. A value whose hash is strictly less than a node's goes to that
    /// node's left, anything else goes to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.push(String::from("abc"));
    /// tree.push(String::from("abc"));
    ///
    /// // Equal hashes aren't merged.
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        let hash = value.hash();
        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if hash < node.hash {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        log::trace!("inserting hash {} at depth {}", hash, depth);
        *link = Some(Node::new_boxed(hash, value));
        self.len += 1;
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Hashable,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Hashable,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(node)
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An in-order iterator over a [`Tree`] yielding each value's stored hash with it. Created by
/// [`Tree::iter_hashed`].
#[derive(Clone)]
pub struct IterHashed<'a, T>(Iter<'a, T>);

impl<'a, T> Iterator for IterHashed<'a, T> {
    type Item = (i32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_node().map(|node| (node.hash, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for IterHashed<'a, T> {}
