//! The "hashable" capability and a simple hash over byte sequences.
//!
//! A [`Tree`][crate::tree::Tree] doesn't compare its values with each other. Instead,
//! every value produces an `i32` through [`Hashable::hash`] and the tree orders by that.
//! Byte-like values (strings, byte slices) get their hash from [`hash_bytes`] but any
//! other derivation is fine too - integers, for example, are their own hash.
//!
//! # Examples
//!
//! ```
//! use hash_bst::hash::{hash_bytes, Hashable, Hashed};
//!
//! assert_eq!(hash_bytes(b""), 0);
//! assert_eq!("abc".hash(), 0x0063_6261);
//!
//! // Integers hash to themselves.
//! assert_eq!(42i32.hash(), 42);
//!
//! // Anything can be given an explicit hash.
//! let pinned = Hashed::new(vec![1.5, 2.5], -7);
//! assert_eq!(pinned.hash(), -7);
//! ```

use std::rc::Rc;

/// A value that can produce a deterministic 32 bit integer from its content.
pub trait Hashable {
    /// The hash used to order this value. Calling this twice on the same value must give the
    /// same result.
    fn hash(&self) -> i32;
}

/// Hashes a byte sequence by XORing every byte into a 32 bit word. The byte at position `i` is
/// shifted left by `(i % 4) * 8` bits first so a single byte can land in any of the four lanes:
///
/// ```text
/// i % 4 == 0: 00 00 00 bb
/// i % 4 == 1: 00 00 bb 00
/// i % 4 == 2: 00 bb 00 00
/// i % 4 == 3: bb 00 00 00
/// ```
///
/// This is not collision resistant. Permuting whole 4-byte blocks, for instance, gives the same
/// hash. It's only meant as an ordering key.
///
/// # Examples
///
/// ```
/// use hash_bst::hash::hash_bytes;
///
/// assert_eq!(hash_bytes(&[0x01, 0x00, 0x00, 0x00]), 0x0000_0001);
/// assert_eq!(hash_bytes(&[0x00, 0x01, 0x00, 0x00]), 0x0000_0100);
///
/// // The fifth byte wraps around to the lowest lane again.
/// assert_eq!(hash_bytes(&[0x01, 0x00, 0x00, 0x00, 0x01]), 0);
/// ```
pub fn hash_bytes(bytes: &[u8]) -> i32 {
    let value = bytes.iter().enumerate().fold(0u32, |value, (idx, &byte)| {
        let shift_amount = (idx % 4) * 8;
        value ^ (u32::from(byte) << shift_amount)
    });

    // Reinterpret the bits, a set top bit makes the hash negative.
    value as i32
}

impl Hashable for str {
    fn hash(&self) -> i32 {
        hash_bytes(self.as_bytes())
    }
}

impl Hashable for String {
    fn hash(&self) -> i32 {
        self.as_str().hash()
    }
}

impl Hashable for [u8] {
    fn hash(&self) -> i32 {
        hash_bytes(self)
    }
}

impl Hashable for Vec<u8> {
    fn hash(&self) -> i32 {
        hash_bytes(self)
    }
}

impl Hashable for i32 {
    fn hash(&self) -> i32 {
        *self
    }
}

impl<T> Hashable for &T
where
    T: Hashable + ?Sized,
{
    fn hash(&self) -> i32 {
        (**self).hash()
    }
}

impl<T> Hashable for Box<T>
where
    T: Hashable + ?Sized,
{
    fn hash(&self) -> i32 {
        (**self).hash()
    }
}

impl<T> Hashable for Rc<T>
where
    T: Hashable + ?Sized,
{
    fn hash(&self) -> i32 {
        (**self).hash()
    }
}

/// Pairs a value with a hash chosen by the caller. Useful when the value has no [`Hashable`]
/// implementation of its own, or when the ordering key comes from somewhere else entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hashed<T> {
    value: T,
    hash: i32,
}

impl<T> Hashed<T> {
    /// Wraps `value` so that it hashes to `hash`.
    pub fn new(value: T, hash: i32) -> Self {
        Self { value, hash }
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the value, dropping the hash.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Hashable for Hashed<T> {
    fn hash(&self) -> i32 {
        self.hash
    }
}
