//! Inserts strings into a hash-ordered tree and prints them back in hash order.
//!
//! ```text
//! cargo run --example strings -- abc xyz 123 456
//! ```

use hash_bst::{Hashable, Tree};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = ["abc", "xyz", "123", "456"].iter().map(|s| s.to_string()).collect();
    }

    let tree: Tree<String> = args.into_iter().collect();
    tree.traverse(|s| println!("val {} | hash {}", s, s.hash()));
}
