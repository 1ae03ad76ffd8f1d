use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Consumes a [`BalancedTree`], yielding its values in ascending order.
///
/// The tree is dismantled as it is walked: each node is freed once its value
/// is yielded, and any values not consumed are dropped with the iterator.
///
/// Created by the [`IntoIterator`] impl of [`BalancedTree`].
///
/// [`BalancedTree`]: crate::BalancedTree
#[derive(Debug)]
pub struct IntoIter<T> {
    /// Detached nodes awaiting their turn, minimum on top. Each has already
    /// had its left subtree pushed above it.
    pending: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut this = Self { pending: vec![] };
        this.detach_left_spine(root);
        this
    }

    /// Walk down the left edge of `link`, detaching each node from its left
    /// child and stacking it.
    fn detach_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut n) = link {
            link = n.take_left();
            self.pending.push(n);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut n = self.pending.pop()?;

        // Every value in the right subtree sorts between "n" and the next
        // pending node.
        let right = n.take_right();
        self.detach_left_spine(right);

        Some(n.into_value())
    }
}

impl<T> FusedIterator for IntoIter<T> {}
