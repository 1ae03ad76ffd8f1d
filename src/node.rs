use std::{borrow::Borrow, cmp::Ordering};

use log::trace;

/// An optional, exclusively owned subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Link<T>,
    right: Link<T>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an absent child a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Returns the height of `n`, or 0 if there is no node.
pub(crate) fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x.right.take().expect("rotate left without a right child");
    std::mem::swap(x, &mut p);

    // The demoted node is recomputed before the new subtree root that now
    // owns it.
    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);

    trace!("rotated left, subtree height {}", x.height);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().expect("rotate right without a left child");
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);

    trace!("rotated right, subtree height {}", y.height);
}

/// Recompute the height of `n` and restore the AVL balance of the subtree
/// rooted at it, rotating as necessary.
///
/// The sign of the heavy child's own balance factor selects between a single
/// rotation (LL / RR) and a double rotation (LR / RL).
///
/// Both children of `n` must already be balanced with correct heights.
fn rebalance<T>(n: &mut Box<Node<T>>) {
    update_height(n);

    match balance(n) {
        // Left-heavy
        2.. => {
            if n.left().map(balance).unwrap_or_default() < 0 {
                // Left-right: straighten the left child first.
                if let Some(l) = n.left.as_mut() {
                    rotate_left(l);
                }
            }
            rotate_right(n);
        }
        // Right-heavy
        ..=-2 => {
            if n.right().map(balance).unwrap_or_default() > 0 {
                // Right-left: straighten the right child first.
                if let Some(r) = n.right.as_mut() {
                    rotate_right(r);
                }
            }
            rotate_left(n);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Insert `value` into the subtree at `link`, rebalancing every node on the
/// path back up to `link`.
///
/// Returns false (and drops `value`) if an equal value is already stored.
pub(crate) fn insert<T>(link: &mut Link<T>, value: T) -> bool
where
    T: Ord,
{
    let node = match link {
        Some(v) => v,
        None => {
            *link = Some(Box::new(Node::new(value)));
            return true;
        }
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => insert(&mut node.left, value),
        Ordering::Greater => insert(&mut node.right, value),
        Ordering::Equal => false,
    };

    if inserted {
        rebalance(node);
    }

    inserted
}

/// Remove the value equal to `value` from the subtree at `link`, returning it.
///
/// Every node on the path back up to `link` is rebalanced. Returns [`None`]
/// without modifying the tree if no such value exists.
pub(crate) fn remove<T, Q>(link: &mut Link<T>, value: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = link.as_mut()?;

    let removed = match value.cmp(node.value.borrow()) {
        Ordering::Less => remove(&mut node.left, value)?,
        Ordering::Greater => remove(&mut node.right, value)?,
        Ordering::Equal => return unlink(link),
    };

    if let Some(node) = link.as_mut() {
        rebalance(node);
    }

    Some(removed)
}

/// Detach the node at `link`, replacing it with a balanced subtree built from
/// its children, and return its value.
fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let mut old = link.take()?;

    // This node may have 0, 1 or 2 child node(s).
    //
    // Without a right child, the left child (if any) replaces the node
    // directly. Otherwise the in-order successor (the minimum of the right
    // subtree) is detached and relinked in its place, adopting both the
    // original left subtree and what remains of the right subtree.
    *link = match old.take_right() {
        None => {
            trace!("unlinked node without right child");
            old.take_left()
        }
        Some(right) => {
            let (mut successor, rest) = remove_min(right);

            // Invariant: the minimum node has no left child, and its right
            // child was spliced into the remainder by remove_min().
            debug_assert!(successor.left.is_none());
            debug_assert!(successor.right.is_none());

            successor.left = old.take_left();
            successor.right = rest;
            rebalance(&mut successor);

            trace!("relocated successor, subtree height {}", successor.height);
            Some(successor)
        }
    };

    Some(old.into_value())
}

/// Detach the node holding the minimum value of the subtree rooted at `root`.
///
/// Returns the detached node and the remaining subtree, in which the detached
/// node's right child (if any) takes its place and every ancestor on the left
/// edge has been rebalanced.
fn remove_min<T>(mut root: Box<Node<T>>) -> (Box<Node<T>>, Link<T>) {
    match root.take_left() {
        Some(left) => {
            let (min, rest) = remove_min(left);
            root.left = rest;
            rebalance(&mut root);
            (min, Some(root))
        }
        None => {
            // "root" is the end of the left edge.
            let rest = root.take_right();
            (root, rest)
        }
    }
}

/// Descend the left edge of `n`, returning the node holding the minimum value.
pub(crate) fn find_min<T>(mut n: &Node<T>) -> &Node<T> {
    while let Some(v) = n.left() {
        n = v;
    }
    n
}

/// Descend the right edge of `n`, returning the node holding the maximum value.
pub(crate) fn find_max<T>(mut n: &Node<T>) -> &Node<T> {
    while let Some(v) = n.right() {
        n = v;
    }
    n
}
