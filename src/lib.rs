//! This crate exposes a handful of hand-built containers, ending in a Binary Search Tree (BST)
//! whose algorithms are all iterative, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Although the structure is recursive, none of the algorithms in [`BinarySearchTree`] are.
//! Descents follow a cursor down the tree and traversals keep their pending work on an explicit
//! [`Stack`] or [`Queue`]. Those, in turn, are thin views over the singly-linked [`LinkedList`],
//! which also backs the chained [`HashTable`].
//!
//! ## Rendering
//!
//! [`BinarySearchTree::pretty`] draws the tree level by level:
//!
//! ```
//! use iterbst::BinarySearchTree;
//!
//! let tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
//! print!("{}", tree.pretty());
//! ```
//!
//! ```text
//!            8
//!           / \
//!          /   \
//!         /     \
//!        /       \
//!       /         \
//!      3           10
//!     / \           \
//!    /   \           \
//!   1     6           14
//!        / \         /
//!       4  7        13
//! ```
//!
//! ## Logging
//!
//! Structural changes and rejected accesses emit [`tracing`] events at the `trace` and `debug`
//! levels. The crate never installs a subscriber itself.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod error;
pub mod hash_table;
pub mod linked_list;
pub mod pretty;
pub mod queue;
pub mod stack;

#[cfg(test)]
mod test;

pub use bst::BinarySearchTree;
pub use error::{Error, Result};
pub use hash_table::HashTable;
pub use linked_list::LinkedList;
pub use pretty::Pretty;
pub use queue::Queue;
pub use stack::Stack;
