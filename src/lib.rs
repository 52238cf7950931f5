//! This crate exposes a linked Binary Search Tree (BST) with on-demand
//! rebalancing, mostly for educational and benchmarking purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores some sort of
//! payload value and will sometimes have child `Node`s. The most important
//! invariant of the tree in this crate is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    strictly less than its own value; everything else - equal values
//!    included - lives in its right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` comparisons (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`), so
//! the shape of the tree is everything: items inserted in sorted order
//! degenerate into a linked list with `O(N)` searches, while the same items
//! after [`rebalance`][linked::Tree::rebalance] are searchable in `O(lg N)`.
//! Unlike an AVL or red-black tree, nothing here rebalances automatically -
//! diagnosing the shape ([`is_balanced`][linked::Tree::is_balanced]) and
//! fixing it are explicit operations, which is exactly what makes the tree
//! useful for comparing search costs against linear scans.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod linked;
