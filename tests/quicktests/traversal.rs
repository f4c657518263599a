use ordered_tree::{CapacityError, Node};

use crate::{build, depth_of};

fn values(buffer: &[Option<&Node>]) -> Vec<i32> {
    buffer.iter().flatten().map(|node| node.value()).collect()
}

/// Every value in `node`'s left subtree is `<=` it and every value in its right subtree is `>`.
fn holds_bounds(node: &Node) -> bool {
    let left_ok = node
        .left()
        .map_or(true, |left| left.pre_order().all(|n| n.value() <= node.value()));
    let right_ok = node
        .right()
        .map_or(true, |right| right.pre_order().all(|n| n.value() > node.value()));
    left_ok && right_ok
}

#[test]
fn scenario() {
    let tree = build(&[10, 5, 15, 1, 20]);
    assert_eq!(tree.size(), 5);

    let mut dfs = vec![None; 5];
    assert_eq!(tree.collect_dfs(&mut dfs), Ok(5));
    assert_eq!(values(&dfs), [10, 5, 1, 15, 20]);

    let mut bfs = vec![None; 5];
    assert_eq!(tree.collect_bfs(&mut bfs), Ok(5));
    assert_eq!(values(&bfs), [10, 5, 15, 1, 20]);

    assert_eq!(tree.find(|v, t| v == t, 15).map(Node::value), Some(15));
    assert!(tree.find(|v, t| v == t, 99).is_none());

    let mut short = vec![None; 4];
    assert_eq!(
        tree.collect_dfs(&mut short),
        Err(CapacityError {
            capacity: 4,
            size: 5
        })
    );
}

quickcheck::quickcheck! {
    fn dfs_visits_nodes_that_hold_bounds(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut buffer = vec![None; tree.size()];

        tree.collect_dfs(&mut buffer) == Ok(xs.len())
            && buffer.iter().all(|slot| slot.map_or(false, holds_bounds))
    }
}

quickcheck::quickcheck! {
    fn bfs_depths_never_decrease(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut buffer = vec![None; tree.size()];
        if tree.collect_bfs(&mut buffer) != Ok(xs.len()) {
            return false;
        }

        let depths: Option<Vec<_>> = buffer
            .iter()
            .map(|slot| slot.and_then(|node| depth_of(&tree, node)))
            .collect();
        let root_first = match (buffer.first().copied().flatten(), tree.root()) {
            (Some(first), Some(root)) => std::ptr::eq(first, root),
            (None, None) => true,
            _ => false,
        };

        root_first
            && depths.map_or(false, |depths| depths.windows(2).all(|pair| pair[0] <= pair[1]))
    }
}

quickcheck::quickcheck! {
    fn collected_nodes_are_reachable(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut dfs = vec![None; tree.size()];
        let mut bfs = vec![None; tree.size()];

        tree.collect_dfs(&mut dfs) == Ok(tree.size())
            && tree.collect_bfs(&mut bfs) == Ok(tree.size())
            && dfs
                .iter()
                .chain(&bfs)
                .all(|slot| slot.map_or(false, |node| depth_of(&tree, node).is_some()))
    }
}

quickcheck::quickcheck! {
    fn capacity_boundary(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let size = tree.size();
        let mut exact = vec![None; size];

        let exact_ok = tree.collect_dfs(&mut exact) == Ok(size)
            && tree.collect_bfs(&mut exact) == Ok(size);
        let short_fails = size == 0 || {
            let mut short = vec![None; size - 1];
            let err = Err(CapacityError {
                capacity: size - 1,
                size,
            });
            tree.collect_dfs(&mut short) == err && tree.collect_bfs(&mut short) == err
        };

        exact_ok && short_fails
    }
}

quickcheck::quickcheck! {
    fn find_matches_a_linear_scan(xs: Vec<i8>, target: i8) -> bool {
        let tree = build(&xs);
        let target = i32::from(target);

        let found = tree.find(|v, t| v == t, target).map(Node::value);
        let expected = xs.iter().map(|x| i32::from(*x)).find(|x| *x == target);
        found == expected && tree.contains(target) == expected.is_some()
    }
}
