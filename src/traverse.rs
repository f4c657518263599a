//! Lazy traversals over a [`Tree`](crate::Tree) or any subtree of it.
//!
//! Both iterators hold their pending nodes in an explicit container instead
//! of recursing, so walking a degenerate (list shaped) tree costs heap, not
//! call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::Node;

/// Pre-order traversal: a node, then its left subtree, then its right subtree.
///
/// # Examples
///
/// ```
/// use ordered_tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.try_extend([10, 5, 15, 1, 20]).unwrap();
///
/// let values: Vec<_> = tree.pre_order().map(|node| node.value()).collect();
/// assert_eq!(values, [10, 5, 1, 15, 20]);
/// ```
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl FusedIterator for PreOrder<'_> {}

/// Level-order (breadth-first) traversal: the root, then every node at depth
/// 1 from left to right, then depth 2, and so on.
///
/// # Examples
///
/// ```
/// use ordered_tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.try_extend([10, 5, 15, 1, 20]).unwrap();
///
/// let values: Vec<_> = tree.level_order().map(|node| node.value()).collect();
/// assert_eq!(values, [10, 5, 15, 1, 20]);
/// ```
#[derive(Clone, Debug)]
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

impl FusedIterator for LevelOrder<'_> {}
