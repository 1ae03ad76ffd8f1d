use std::{borrow::Borrow, cmp::Ordering, fmt::Debug};

use crate::{
    iter::{InOrder, IntoIter, PostOrder, PreOrder},
    node::{self, find_max, find_min, Link},
    render::TreeView,
};

/// An ordered set of unique values, stored in an AVL-balanced binary search
/// tree.
///
/// For every node, the heights of its two subtrees differ by at most one, so
/// the tree height (and the cost of [`insert()`], [`remove()`] and
/// [`contains()`]) is bounded by `O(log n)`.
///
/// Values are ordered by their [`Ord`] implementation, which must be a total
/// order. If it is not, the ordering and balance of the tree is unspecified
/// (but memory safe).
///
/// [`insert()`]: BalancedTree::insert
/// [`remove()`]: BalancedTree::remove
/// [`contains()`]: BalancedTree::contains
#[derive(Clone)]
pub struct BalancedTree<T>(Link<T>);

impl<T> Default for BalancedTree<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> BalancedTree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the number of values in the tree.
    ///
    /// The tree does not track its size, so this visits every node.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// Returns the height of the tree, counted in nodes along the longest
    /// root-to-leaf path. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(self.0.as_deref()) as usize
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Returns the minimum value in the tree, if any.
    pub fn first(&self) -> Option<&T> {
        self.0.as_deref().map(|v| find_min(v).value())
    }

    /// Returns the maximum value in the tree, if any.
    pub fn last(&self) -> Option<&T> {
        self.0.as_deref().map(|v| find_max(v).value())
    }

    /// Iterate over the values in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order()
    }

    /// Iterate over the values in ascending order (left subtree, node, right
    /// subtree).
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.0.as_deref())
    }

    /// Iterate over the values with each node visited before its left and
    /// then right subtrees.
    ///
    /// The first value yielded is the root of the tree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.0.as_deref())
    }

    /// Iterate over the values with each node visited after its left and then
    /// right subtrees.
    ///
    /// The last value yielded is the root of the tree.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.0.as_deref())
    }

    /// Returns a [`TreeView`] that renders the shape of the tree, one node per
    /// line.
    pub fn render(&self) -> TreeView<'_, T> {
        TreeView::new(self.0.as_deref())
    }
}

impl<T> BalancedTree<T>
where
    T: Ord,
{
    /// Insert `value` into the tree.
    ///
    /// Returns true if the value was inserted, or false if an equal value is
    /// already present, in which case the tree is left unchanged and `value`
    /// is dropped.
    pub fn insert(&mut self, value: T) -> bool {
        node::insert(&mut self.0, value)
    }

    /// Remove the value equal to `value` from the tree.
    ///
    /// Returns true if a value was removed, or false if no equal value is
    /// present (a no-op).
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Remove and return the value equal to `value`, if any.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::remove(&mut self.0, value)
    }

    /// Returns true if a value equal to `value` is stored in the tree.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ptr = self.0.as_deref();

        while let Some(n) = ptr {
            ptr = match value.cmp(n.value().borrow()) {
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
                Ordering::Equal => return true,
            };
        }

        false
    }
}

impl<T> Debug for BalancedTree<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for BalancedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}

impl<'a, T> IntoIterator for &'a BalancedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for BalancedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for BalancedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}
