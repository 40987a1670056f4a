//! Tests for building, printing, inverting and edge-listing trees

use std::collections::HashSet;

use rstest::rstest;

use treeflip::domain::{build, invert, TreeNode};
use treeflip::util::testing;

/// Addresses of every node, used to check that trees share no allocation.
fn node_addresses<T>(node: &TreeNode<T>, out: &mut HashSet<usize>) {
    out.insert(node as *const TreeNode<T> as usize);
    for child in [node.left.as_deref(), node.right.as_deref()]
        .into_iter()
        .flatten()
    {
        node_addresses(child, out);
    }
}

fn demo_tree() -> TreeNode<i32> {
    let mut counter = 1;
    *build(&mut counter, 3).expect("depth 3 builds a tree")
}

fn child(node: &TreeNode<i32>, path: &str) -> i32 {
    let mut current = node;
    for step in path.chars() {
        current = match step {
            'l' => current.left.as_deref().expect("left child"),
            'r' => current.right.as_deref().expect("right child"),
            _ => unreachable!(),
        };
    }
    current.value
}

// ============================================================
// build() tests
// ============================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(8)]
fn given_depth_when_building_then_tree_is_complete(#[case] depth: u32) {
    testing::init_test_setup();
    let mut counter = 10;

    let tree = build(&mut counter, depth).unwrap();

    let expected = (1usize << depth) - 1;
    assert_eq!(tree.node_count(), expected);
    assert_eq!(tree.depth(), depth as usize);
    assert_eq!(counter, 10 + expected as i32);
}

#[rstest]
#[case(1, 1)]
#[case(-4, 3)]
#[case(100, 4)]
fn given_start_when_building_then_values_are_contiguous_preorder(
    #[case] start: i32,
    #[case] depth: u32,
) {
    let mut counter = start;

    let tree = build(&mut counter, depth).unwrap();

    let values: Vec<i32> = tree.values().into_iter().copied().collect();
    let end = start + (1 << depth) - 1;
    assert_eq!(values, (start..end).collect::<Vec<_>>());
}

#[test]
fn given_depth_zero_when_building_then_absent_and_counter_unchanged() {
    let mut counter = 42;
    assert!(build(&mut counter, 0).is_none());
    assert_eq!(counter, 42);
}

#[test]
fn given_demo_parameters_when_building_then_matches_known_layout() {
    let tree = demo_tree();

    assert_eq!(tree.value, 1);
    assert_eq!(child(&tree, "l"), 2);
    assert_eq!(child(&tree, "ll"), 3);
    assert_eq!(child(&tree, "lr"), 4);
    assert_eq!(child(&tree, "r"), 5);
    assert_eq!(child(&tree, "rl"), 6);
    assert_eq!(child(&tree, "rr"), 7);
}

#[test]
fn given_two_builds_with_same_counter_when_building_then_numbering_continues() {
    let mut counter = 1;
    let first = build(&mut counter, 2).unwrap();
    let second = build(&mut counter, 1).unwrap();

    assert_eq!(first.values(), vec![&1, &2, &3]);
    assert_eq!(second.value, 4);
}

// ============================================================
// print tests
// ============================================================

#[test]
fn given_demo_tree_when_rotated_then_right_side_is_on_top() {
    let tree = demo_tree();

    let expected = "      7\n   5\n      6\n1\n      4\n   2\n      3\n";
    assert_eq!(tree.rotated().to_string(), expected);
}

#[test]
fn given_single_child_when_rotated_then_absent_side_prints_nothing() {
    let tree = TreeNode::new(1, Some(Box::new(TreeNode::leaf(2))), None);
    assert_eq!(tree.rotated().to_string(), "1\n   2\n");
}

#[test]
fn given_string_values_when_printing_then_does_not_panic() {
    let tree = TreeNode::new("root", None, Some(Box::new(TreeNode::leaf("right"))));
    tree.print();
    assert_eq!(tree.rotated().to_string(), "   right\nroot\n");
}

// ============================================================
// invert() tests
// ============================================================

#[test]
fn given_demo_tree_when_inverted_then_mirrored_throughout() {
    let inverted = demo_tree().invert();

    assert_eq!(inverted.value, 1);
    assert_eq!(child(&inverted, "l"), 5);
    assert_eq!(child(&inverted, "ll"), 7);
    assert_eq!(child(&inverted, "lr"), 6);
    assert_eq!(child(&inverted, "r"), 2);
    assert_eq!(child(&inverted, "rl"), 4);
    assert_eq!(child(&inverted, "rr"), 3);
}

#[test]
fn given_tree_when_inverted_then_source_is_unchanged() {
    let tree = demo_tree();
    let snapshot = tree.clone();

    let _ = tree.invert();

    assert_eq!(tree, snapshot);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(6)]
fn given_tree_when_inverted_twice_then_equal_but_distinct(#[case] depth: u32) {
    let mut counter = 0;
    let tree = *build(&mut counter, depth).unwrap();

    let twice = tree.invert().invert();

    assert_eq!(twice, tree);
    let mut original = HashSet::new();
    let mut copy = HashSet::new();
    node_addresses(&tree, &mut original);
    node_addresses(&twice, &mut copy);
    assert!(original.is_disjoint(&copy));
}

#[test]
fn given_absent_tree_when_inverted_then_absent() {
    assert!(invert::<i32>(None).is_none());
}

#[test]
fn given_uneven_tree_when_inverted_then_rotated_view_is_mirrored() {
    let tree = TreeNode::new(
        1,
        Some(Box::new(TreeNode::new(2, Some(Box::new(TreeNode::leaf(3))), None))),
        None,
    );

    let inverted = tree.invert();

    assert_eq!(tree.rotated().to_string(), "1\n   2\n      3\n");
    assert_eq!(inverted.rotated().to_string(), "      3\n   2\n1\n");
}

// ============================================================
// edges() tests
// ============================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
fn given_tree_when_listing_edges_then_one_per_non_root_node(#[case] depth: u32) {
    let mut counter = 1;
    let tree = build(&mut counter, depth).unwrap();

    assert_eq!(tree.edges().len(), tree.node_count() - 1);
}

#[test]
fn given_demo_tree_when_listing_edges_then_preorder() {
    let tree = demo_tree();

    let edges: Vec<(i32, i32)> = tree.edges().into_iter().map(|(p, c)| (*p, *c)).collect();

    assert_eq!(
        edges,
        vec![(1, 2), (2, 3), (2, 4), (1, 5), (5, 6), (5, 7)]
    );
}
