//! Property tests that only go through the public API.

mod traversal;

use ordered_tree::{Node, Tree};

/// Builds a tree by inserting `xs` in order.
fn build(xs: &[i8]) -> Tree {
    let mut tree = Tree::new();
    tree.try_extend(xs.iter().map(|x| i32::from(*x))).unwrap();
    tree
}

/// Every node reachable from the root paired with its depth (the root is at depth 0). Walks the
/// child links directly so it doesn't lean on the traversals under test.
fn depths(tree: &Tree) -> Vec<(&Node, usize)> {
    let mut out = Vec::new();
    let mut stack: Vec<_> = tree.root().map(|root| (root, 0)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        out.push((node, depth));
        stack.extend(node.left().map(|left| (left, depth + 1)));
        stack.extend(node.right().map(|right| (right, depth + 1)));
    }
    out
}

/// Depth of `node` in `tree`, if it is one of the tree's nodes.
fn depth_of(tree: &Tree, node: &Node) -> Option<usize> {
    depths(tree)
        .into_iter()
        .find(|(candidate, _)| std::ptr::eq(*candidate, node))
        .map(|(_, depth)| depth)
}
