//! A generic ordered set backed by an AVL-balanced binary search tree.
//!
//! A [`BalancedTree`] stores unique values of any type implementing [`Ord`].
//! After every insert and remove the heights of the two subtrees of every node
//! differ by at most one, bounding the depth of the tree (and therefore the
//! cost of each operation and the recursion depth of the structural
//! algorithms) to `O(log n)`.
//!
//! ```
//! use baltree::BalancedTree;
//!
//! let mut t = BalancedTree::new();
//! for v in [10, 20, 30, 40, 50, 25] {
//!     t.insert(v);
//! }
//!
//! assert!(t.contains(&30));
//! assert!(!t.contains(&35));
//!
//! // Duplicates are not stored.
//! assert!(!t.insert(10));
//!
//! assert!(t.remove(&30));
//! assert_eq!(
//!     t.in_order().copied().collect::<Vec<_>>(),
//!     [10, 20, 25, 40, 50]
//! );
//!
//! // The root is always yielded first by a pre-order traversal.
//! assert_eq!(t.pre_order().next(), Some(&40));
//! ```
//!
//! The shape of the tree can be rendered for debugging with
//! [`BalancedTree::render()`], showing the cached height and balance factor of
//! each node.
//!
//! The tree is not synchronised; callers sharing a tree across threads must
//! serialise access externally.

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs, missing_debug_implementations)]

mod iter;
mod node;
mod render;
mod tree;

#[cfg(test)]
mod test_utils;

pub use iter::*;
pub use render::TreeView;
pub use tree::BalancedTree;
