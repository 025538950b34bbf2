mod helpers;

use anyhow::{Context, Result};
use bptree::{BPlusTree, Node, Order};
use helpers::{harness::build, init_debug_for_tests};

fn leaf(keys: &[i64]) -> Node<i64, i64> {
    let mut node = Node::new_leaf();
    for &k in keys {
        node.append_key(k);
        node.append_value(k);
    }
    node
}

fn internal(keys: &[i64], children: Vec<Node<i64, i64>>) -> Node<i64, i64> {
    let mut node = Node::new_internal();
    for &k in keys {
        node.append_key(k);
    }
    for child in children {
        node.append_child(child);
    }
    node
}

#[test]
fn split_full_leaf_under_parent() -> Result<()> {
    init_debug_for_tests();

    let mut parent = internal(&[1], vec![leaf(&[-3, -1]), leaf(&[1, 3, 9, 12, 56])]);
    parent
        .as_internal_mut()
        .context("parent is internal")?
        .split_child(1, Order::new(3)?);

    assert_eq!(parent.keys(), &[1, 9]);
    let children = parent.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[1].keys(), &[1, 3]);
    assert_eq!(children[1].values(), &[1, 3]);
    assert_eq!(children[2].keys(), &[9, 12, 56]);
    assert_eq!(children[2].values(), &[9, 12, 56]);

    // The split node is still a valid tree
    let tree = BPlusTree::from_root(Order::new(3)?, parent)?;
    assert_eq!(tree.walk(), vec![-3, -1, 1, 3, 9, 12, 56]);
    Ok(())
}

#[test]
fn merge_middle_child_into_left_neighbour() -> Result<()> {
    init_debug_for_tests();

    let mut root = internal(&[3, 5], vec![leaf(&[1, 2]), leaf(&[3, 4]), leaf(&[5, 6])]);
    let merged = root
        .as_internal_mut()
        .context("root is internal")?
        .merge_children(1);

    assert_eq!(merged, 0);
    assert_eq!(root.keys(), &[5]);
    assert_eq!(root.children()[0].keys(), &[1, 2, 3, 4]);
    assert_eq!(root.children()[1].keys(), &[5, 6]);
    Ok(())
}

#[test]
fn search_descends_to_owning_leaf() -> Result<()> {
    init_debug_for_tests();

    let tree = build(3, &(0..20).collect::<Vec<_>>())?;

    let root = tree.root();
    assert_eq!(root.keys(), &[6]);
    let expected_leaf = &root.children()[1].children()[0];

    let (node, idx) = tree.search(&6).context("6 is stored")?;
    assert!(std::ptr::eq(node, expected_leaf));
    assert_eq!(idx, 0);
    assert_eq!(node.keys()[idx], 6);

    assert!(tree.search(&21).is_none());
    Ok(())
}

#[test]
fn delete_leaves_no_stale_separator() -> Result<()> {
    init_debug_for_tests();

    let mut tree = build(3, &(0..20).collect::<Vec<_>>())?;

    assert_eq!(tree.delete(&8), Some(8));

    let expected: Vec<i64> = (0..20).filter(|&k| k != 8).collect();
    assert_eq!(tree.walk(), expected);
    assert!(!separators(tree.root()).contains(&8));
    assert!(tree.search(&8).is_none());
    Ok(())
}

#[test]
fn surviving_separator_moves_to_successor() -> Result<()> {
    init_debug_for_tests();

    let mut tree = build(3, &(0..20).collect::<Vec<_>>())?;
    tree.delete(&6);
    assert_eq!(tree.root().keys(), &[7]);

    let mut tree = build(3, &(0..20).collect::<Vec<_>>())?;
    assert!(separators(tree.root()).contains(&16));
    tree.delete(&16);
    let seps = separators(tree.root());
    assert!(!seps.contains(&16));
    assert!(seps.contains(&17));
    Ok(())
}

fn separators(node: &Node<i64, i64>) -> Vec<i64> {
    if node.is_leaf() {
        return Vec::new();
    }
    let mut out = node.keys().to_vec();
    for child in node.children() {
        out.extend(separators(child));
    }
    out
}
