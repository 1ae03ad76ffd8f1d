use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator yielding the values of each node's left and then right
/// subtrees before the node's own value.
///
/// Created by [`BalancedTree::post_order()`].
///
/// [`BalancedTree::post_order()`]: crate::BalancedTree::post_order
#[derive(Debug, Clone)]
pub struct PostOrder<'a, T> {
    /// Nodes pending a visit, paired with a flag set once the node's children
    /// have been scheduled ahead of it.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|v| (v, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, expanded) = self.stack.pop()?;
            if expanded {
                return Some(v.value());
            }

            // Revisit "v" once both subtrees have been yielded, left first.
            self.stack.push((v, true));
            if let Some(right) = v.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = v.left() {
                self.stack.push((left, false));
            }
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}
