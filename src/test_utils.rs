use std::fmt::Debug;

use proptest::prelude::*;

use crate::node::{balance, height, Node};

/// Values are drawn from a small domain to encourage operations acting on the
/// same value.
pub(crate) const VALUE_MAX: u16 = 64;

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(u16),
    Remove(u16),
    Contains(u16),
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..VALUE_MAX).prop_map(Op::Insert),
        (0..VALUE_MAX).prop_map(Op::Remove),
        (0..VALUE_MAX).prop_map(Op::Contains),
    ]
}

/// Assert the BST and AVL properties of the subtree rooted at `root`, ensuring
/// it is well-formed.
pub(crate) fn validate_subtree<T>(root: &Node<T>)
where
    T: Ord + Debug,
{
    // Perform a pre-order traversal of the tree, carrying the exclusive
    // bounds inherited from each ancestor.
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = vec![(root, None, None)];
    while let Some((n, lower, upper)) = stack.pop() {
        // Invariant 1: every value in the left subtree is strictly less than
        // this node, every value in the right subtree strictly greater.
        assert!(
            lower.map(|v| v < n.value()).unwrap_or(true),
            "node {:?} not above lower bound {:?}",
            n.value(),
            lower,
        );
        assert!(
            upper.map(|v| v > n.value()).unwrap_or(true),
            "node {:?} not below upper bound {:?}",
            n.value(),
            upper,
        );

        // Prepare to visit the children
        if let Some(l) = n.left() {
            stack.push((l, lower, Some(n.value())));
        }
        if let Some(r) = n.right() {
            stack.push((r, Some(n.value()), upper));
        }

        // Invariant 2: the height of this node is always +1 of the maximum
        // child height, with absent children at height 0.
        let want_height = 1 + height(n.left()).max(height(n.right()));
        assert_eq!(
            n.height(),
            want_height,
            "expect node {:?} to have height {}, has {}",
            n.value(),
            want_height,
            n.height(),
        );

        // Invariant 3: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = balance(n);
        assert!(
            balance.abs() <= 1,
            "balance={balance}, node={:?}",
            n.value()
        );
    }
}

/// The worst-case height of an AVL tree holding `n` values.
pub(crate) fn max_avl_height(n: usize) -> u8 {
    (1.44 * ((n + 2) as f64).log2()).ceil() as u8
}
