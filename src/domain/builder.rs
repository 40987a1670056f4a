//! Complete binary trees numbered from a running counter.

use tracing::debug;

use crate::domain::node::TreeNode;

/// Builds a complete binary tree of `depth` levels.
///
/// The node takes the current counter value, then the left subtree is built
/// completely before the right one, so values are assigned in pre-order and
/// `counter` ends up advanced by `2^depth - 1`. A depth of zero yields no node
/// and leaves the counter unchanged.
///
/// The counter wraps around at `i32::MAX`; callers wanting unique values keep
/// `counter + 2^depth - 1` within range.
pub fn build(counter: &mut i32, depth: u32) -> Option<Box<TreeNode<i32>>> {
    if depth == 0 {
        return None;
    }

    let value = *counter;
    *counter = counter.wrapping_add(1);
    let left = build(counter, depth - 1);
    let right = build(counter, depth - 1);

    Some(Box::new(TreeNode::new(value, left, right)))
}

/// Holds the counter between builds so consecutive trees continue numbering.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    next: i32,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TreeBuilder {
    pub fn new(start: i32) -> Self {
        Self { next: start }
    }

    /// The value the next built node will receive.
    pub fn next_value(&self) -> i32 {
        self.next
    }

    pub fn build(&mut self, depth: u32) -> Option<Box<TreeNode<i32>>> {
        let start = self.next;
        let tree = build(&mut self.next, depth);
        if let Some(t) = &tree {
            debug!(
                "built tree: levels={}, nodes={}, values={}..{}",
                t.depth(),
                t.node_count(),
                start,
                self.next
            );
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_leaves_counter() {
        let mut counter = 5;
        assert!(build(&mut counter, 0).is_none());
        assert_eq!(counter, 5);
    }

    #[test]
    fn test_depth_one_is_leaf() {
        let mut counter = 9;
        let tree = build(&mut counter, 1).unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.value, 9);
        assert_eq!(counter, 10);
    }

    #[test]
    fn test_counter_wraps_at_max() {
        let mut counter = i32::MAX;
        let tree = build(&mut counter, 1).unwrap();
        assert_eq!(tree.value, i32::MAX);
        assert_eq!(counter, i32::MIN);
    }

    #[test]
    fn test_builder_continues_numbering() {
        let mut builder = TreeBuilder::default();
        let first = builder.build(2).unwrap();
        let second = builder.build(2).unwrap();

        assert_eq!(first.values(), vec![&1, &2, &3]);
        assert_eq!(second.values(), vec![&4, &5, &6]);
        assert_eq!(builder.next_value(), 7);
    }
}
