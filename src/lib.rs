//! This crate exposes an unbalanced Binary Search Tree (BST) over `i32` keys
//! with an explicit lifecycle: build it, populate it, query it, walk it, and
//! tear it down.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and find stored records. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` stores a value and has at most two child
//! `Node`s. The invariants this tree keeps are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less
//!    than **or equal to** its own value. Duplicates are allowed and always
//!    route left.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    strictly greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The tree never rebalances itself, so inserting values in sorted order
//! degenerates it into a list. Everything that walks the tree (traversals,
//! teardown, `height`) therefore uses an explicit stack or queue instead of
//! recursion.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [10, 5, 15, 1, 20] {
//!     tree.insert(value).unwrap();
//! }
//!
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.to_string(), "[10, 5, 1, 15, 20]");
//!
//! let found = tree.find(|value, target| value == target, 15);
//! assert_eq!(found.map(|node| node.value()), Some(15));
//!
//! let mut buffer = vec![None; tree.size()];
//! let written = tree.collect_bfs(&mut buffer).unwrap();
//! let values: Vec<_> = buffer[..written].iter().flatten().map(|n| n.value()).collect();
//! assert_eq!(values, [10, 5, 15, 1, 20]);
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traverse;
pub mod tree;

pub use error::{AllocationError, CapacityError};
pub use traverse::{LevelOrder, PreOrder};
pub use tree::{Node, Tree};
