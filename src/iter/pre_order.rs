use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator yielding each node's value before the values of its left and
/// then right subtrees.
///
/// Created by [`BalancedTree::pre_order()`].
///
/// [`BalancedTree::pre_order()`]: crate::BalancedTree::pre_order
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // The left child is pushed last so it is visited first.
        self.stack.extend(v.right().into_iter().chain(v.left()));

        Some(v.value())
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}
