use std::fmt::{self, Display};

use crate::node::{balance, Node};

/// Branch drawn before a left child.
const LEFT_BRANCH: &str = "├──";
/// Branch drawn before a right child, or the root.
const RIGHT_BRANCH: &str = "└──";

/// A textual, indented view of the shape of a [`BalancedTree`].
///
/// Each node is rendered on its own line with its cached height and balance
/// factor, children indented below their parent (left before right):
///
/// ```text
/// └──30 (h:3, b:0)
///     ├──20 (h:2, b:0)
///     │   ├──10 (h:1, b:0)
///     │   └──25 (h:1, b:0)
///     └──40 (h:2, b:-1)
///         └──50 (h:1, b:0)
/// ```
///
/// An empty tree renders as an empty string.
///
/// Created by [`BalancedTree::render()`].
///
/// [`BalancedTree`]: crate::BalancedTree
/// [`BalancedTree::render()`]: crate::BalancedTree::render
#[derive(Debug)]
pub struct TreeView<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> TreeView<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
}

/// A node pending rendering, and the indentation prefix it is drawn with.
struct Frame<'a, T> {
    node: &'a Node<T>,
    prefix: String,
    is_left: bool,
}

impl<T> Display for TreeView<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = self
            .root
            .map(|node| Frame {
                node,
                prefix: String::new(),
                is_left: false,
            })
            .into_iter()
            .collect::<Vec<_>>();

        while let Some(Frame {
            node,
            prefix,
            is_left,
        }) = stack.pop()
        {
            let branch = if is_left { LEFT_BRANCH } else { RIGHT_BRANCH };
            writeln!(
                f,
                "{prefix}{branch}{} (h:{}, b:{})",
                node.value(),
                node.height(),
                balance(node)
            )?;

            let child_prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });

            // The left child is pushed last so it is drawn first.
            if let Some(right) = node.right() {
                stack.push(Frame {
                    node: right,
                    prefix: child_prefix.clone(),
                    is_left: false,
                });
            }
            if let Some(left) = node.left() {
                stack.push(Frame {
                    node: left,
                    prefix: child_prefix,
                    is_left: true,
                });
            }
        }

        Ok(())
    }
}
