//! `rb_tree` is an ordered key collection based on a red-black tree.
//!
//! It fully implements the insertion and deletion functionality of a red-black tree,
//! ensuring that each modification operation requires at most O(logN) time complexity.
//!
//! Nodes live in a vector and refer to each other by [`NodeIndex`], with slot 0
//! reserved for the shared black nil sentinel. This keeps parent links free of
//! shared ownership, makes dropping a tree a single deallocation pass and
//! lets [`RbTree`] be `Send` and `Sync` whenever its keys are.
//!
//! # Example
//!
//! ```rust
//! use rb_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.to_sorted_vec(tree.len()), (1..=9).collect::<Vec<_>>());
//!
//! let node = tree.find(&4).unwrap();
//! assert_eq!(tree.erase(node), 4);
//! assert_eq!(tree.min().and_then(|n| tree.key(n)), Some(&1));
//! assert_eq!(tree.max().and_then(|n| tree.key(n)), Some(&9));
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize a tree together with its node layout.
//! - `graphviz`: dump a tree as a DOT graph with [`RbTree::draw`].

#[cfg(feature = "graphviz")]
mod draw;
mod error;
mod index;
mod iter;
mod node;
mod rbtree;


pub use error::Error;
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use iter::{IntoIter, Iter};
pub use node::Color;
pub use rbtree::RbTree;
