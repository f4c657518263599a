//! The tree itself: ownership, insertion, search, bounded collection and
//! teardown.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{CapacityError, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(|value, target| value == target, 1).is_none());
//!
//! tree.insert(1).unwrap();
//! tree.insert(1).unwrap();
//!
//! // Duplicates are kept.
//! assert_eq!(tree.size(), 2);
//!
//! // Collecting needs room for every node.
//! let mut buffer = [None; 1];
//! assert_eq!(
//!     tree.collect_dfs(&mut buffer),
//!     Err(CapacityError { capacity: 1, size: 2 })
//! );
//!
//! tree.clear();
//! assert_eq!(tree.size(), 0);
//! ```

use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, warn};

use crate::error::{AllocationError, CapacityError};
use crate::traverse::{LevelOrder, PreOrder};

/// An exclusively owned child slot. `None` marks the empty spot at the bottom
/// of a subtree.
type Link = Option<Box<Node>>;

/// A single value in a [`Tree`] along with the two subtrees hanging off it.
///
/// `Node`s are only ever handed out as shared references borrowed from the
/// tree, so they can't outlive a [`Tree::clear`].
pub struct Node {
    value: i32,
    left: Link,
    right: Link,
}

impl Node {
    /// Allocates a leaf holding `value` without aborting when the allocator
    /// comes back empty.
    fn try_new_boxed(value: i32) -> Result<Box<Self>, AllocationError> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node` holds an `i32` so its layout is never zero sized.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        if ptr.is_null() {
            warn!(bytes = layout.size(), "node allocation failed");
            return Err(AllocationError {
                bytes: layout.size(),
            });
        }

        // SAFETY: `ptr` is non-null, properly aligned and sized for a `Node` because it came from
        // the global allocator with `Node`'s layout. It is initialized by `write` before `Box`
        // takes ownership, and `Box` frees it with that same allocator and layout.
        unsafe {
            ptr.write(Node {
                value,
                left: None,
                right: None,
            });
            Ok(Box::from_raw(ptr))
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The root of the left subtree. Every value in it is `<=` this node's value.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree. Every value in it is `>` this node's value.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Walks the subtree rooted at this node in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(Some(self))
    }

    /// Walks the subtree rooted at this node in level order.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(Some(self))
    }
}

/// An unbalanced Binary Search Tree over `i32` values.
///
/// Values equal to a node's value are stored in its left subtree so inserting
/// never fails on duplicates. There is no deletion: nodes live until the
/// whole tree is [cleared](Tree::clear) or dropped.
#[derive(Default)]
pub struct Tree {
    root: Link,
    /// Always equal to the number of nodes reachable from `root`.
    size: usize,
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Node {
    /// Only names the children's values so formatting a node never descends into its subtrees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Lists every node of a tree in pre-order for [`Tree`]'s `Debug` output.
struct DebugNodes<'a>(PreOrder<'a>);

impl fmt::Debug for DebugNodes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("nodes", &DebugNodes(self.pre_order()))
            .finish()
    }
}

impl fmt::Display for Tree {
    /// Writes the values in pre-order, e.g. `[10, 5, 1, 15, 20]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.pre_order().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node.value)?;
        }
        f.write_str("]")
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Puts the tree back into the state [`Tree::new`] produces.
    ///
    /// The tree is expected to be empty already; re-initializing a populated
    /// tree is a logic error caught in debug builds. Use [`Tree::clear`] to
    /// empty a populated tree.
    pub fn init(&mut self) {
        debug_assert!(
            self.is_empty(),
            "re-initializing a tree holding {} nodes",
            self.size
        );
        self.clear();
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`Tree::size`].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node, if the tree has one.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts a new node holding `value`.
    ///
    /// Starting at the root, values less than or equal to a node's value go
    /// left and greater values go right until an empty slot is found, where
    /// the new node is attached as a leaf.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if memory for the node can't be obtained.
    /// In that case the tree and its size are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), 2);
    /// assert_eq!(root.left().map(|n| n.value()), Some(1));
    /// // The duplicate 2 ends up as the right child of 1.
    /// assert_eq!(root.left().and_then(|n| n.right()).map(|n| n.value()), Some(2));
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i32) -> Result<(), AllocationError> {
        // Allocate before touching the tree so a failure leaves it untouched.
        let node = Node::try_new_boxed(value)?;

        let mut slot = &mut self.root;
        while let Some(current) = slot {
            slot = if value <= current.value {
                &mut current.left
            } else {
                &mut current.right
            };
        }
        *slot = Some(node);
        self.size += 1;

        Ok(())
    }

    /// Inserts every value from `values` in order, stopping at the first
    /// failure. Values inserted before the failure stay in the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`AllocationError`] hit.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), AllocationError>
    where
        I: IntoIterator<Item = i32>,
    {
        values.into_iter().try_for_each(|value| self.insert(value))
    }

    /// Returns the first node, in pre-order, for which `predicate(node_value,
    /// target)` is true. If no node matches (or the tree is empty), `None` is
    /// returned.
    ///
    /// The predicate is arbitrary, so this never prunes using the ordering of
    /// the tree and may visit every node. See [`Tree::contains`] for an
    /// ordered lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.try_extend([10, 5, 15]).unwrap();
    ///
    /// let found = tree.find(|value, target| value == target, 15);
    /// assert_eq!(found.map(|node| node.value()), Some(15));
    ///
    /// // Predicates don't need to be equality checks.
    /// let found = tree.find(|value, target| value < target, 8);
    /// assert_eq!(found.map(|node| node.value()), Some(5));
    ///
    /// assert!(tree.find(|value, target| value == target, 99).is_none());
    /// ```
    #[instrument(level = "trace", skip(self, predicate))]
    pub fn find<F>(&self, predicate: F, target: i32) -> Option<&Node>
    where
        F: Fn(i32, i32) -> bool,
    {
        self.pre_order().find(|node| predicate(node.value, target))
    }

    /// Whether some node holds `value`. Unlike [`Tree::find`] this follows the
    /// ordering of the tree, so it only visits one path from the root.
    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Number of levels in the tree. An empty tree has a height of 0 and a
    /// lone root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Walks the whole tree in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    /// Walks the whole tree in level order.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root())
    }

    /// Writes a reference to every node, in pre-order, into the front of
    /// `buffer` and returns how many were written (always [`Tree::size`]).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `buffer` has fewer slots than the tree has
    /// nodes. The buffer's contents are unspecified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.try_extend([10, 5, 15, 1, 20]).unwrap();
    ///
    /// let mut buffer = [None; 8];
    /// let written = tree.collect_dfs(&mut buffer).unwrap();
    ///
    /// let values: Vec<_> = buffer[..written].iter().flatten().map(|n| n.value()).collect();
    /// assert_eq!(values, [10, 5, 1, 15, 20]);
    /// ```
    #[instrument(level = "trace", skip_all, fields(capacity = buffer.len(), size = self.size))]
    pub fn collect_dfs<'a>(
        &'a self,
        buffer: &mut [Option<&'a Node>],
    ) -> Result<usize, CapacityError> {
        self.check_capacity(buffer.len())?;
        Ok(self.fill(buffer, self.pre_order()))
    }

    /// Same as [`Tree::collect_dfs`] except nodes are written in level order.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `buffer` has fewer slots than the tree has
    /// nodes.
    #[instrument(level = "trace", skip_all, fields(capacity = buffer.len(), size = self.size))]
    pub fn collect_bfs<'a>(
        &'a self,
        buffer: &mut [Option<&'a Node>],
    ) -> Result<usize, CapacityError> {
        self.check_capacity(buffer.len())?;
        Ok(self.fill(buffer, self.level_order()))
    }

    /// Releases every node, children before their parent, and leaves the
    /// tree in the state [`Tree::new`] produces. Clearing an empty tree does
    /// nothing.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        let mut released = 0usize;

        while let Some(node) = pending.last_mut() {
            match node.left.take().or_else(|| node.right.take()) {
                Some(child) => pending.push(child),
                // Both children are gone so this node can go too.
                None => {
                    pending.pop();
                    released += 1;
                }
            }
        }

        if released > 0 {
            debug!(released, "cleared tree");
        }
        debug_assert_eq!(released, self.size);
        self.size = 0;
    }

    fn check_capacity(&self, capacity: usize) -> Result<(), CapacityError> {
        if capacity < self.size {
            debug!(capacity, size = self.size, "output buffer too small");
            return Err(CapacityError {
                capacity,
                size: self.size,
            });
        }
        Ok(())
    }

    fn fill<'a>(
        &self,
        buffer: &mut [Option<&'a Node>],
        nodes: impl Iterator<Item = &'a Node>,
    ) -> usize {
        let mut written = 0;
        for (slot, node) in buffer.iter_mut().zip(nodes) {
            *slot = Some(node);
            written += 1;
        }
        debug_assert_eq!(written, self.size);
        written
    }
}
