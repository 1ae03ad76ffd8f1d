use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator over the values of a [`BalancedTree`] in ascending order.
///
/// Created by [`BalancedTree::in_order()`] and [`BalancedTree::iter()`].
///
/// [`BalancedTree`]: crate::BalancedTree
/// [`BalancedTree::in_order()`]: crate::BalancedTree::in_order
/// [`BalancedTree::iter()`]: crate::BalancedTree::iter
#[derive(Debug, Clone)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v.value())
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}
