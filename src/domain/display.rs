/*
Top-down rendering through termtree, as an alternative to the rotated view.

termtree has no notion of left and right, so a node with a single child gets a
placeholder leaf for the missing side.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::node::TreeNode;

/// Label used for the absent side of a single-child node.
pub const MISSING_CHILD: &str = "·";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for TreeNode<T> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<Tree<String>> = match (&self.left, &self.right) {
            (None, None) => Vec::new(),
            (Some(l), Some(r)) => vec![l.to_tree_string(), r.to_tree_string()],
            (Some(l), None) => vec![l.to_tree_string(), Tree::new(MISSING_CHILD.to_string())],
            (None, Some(r)) => vec![Tree::new(MISSING_CHILD.to_string()), r.to_tree_string()],
        };

        Tree::new(self.value.to_string()).with_leaves(leaves)
    }
}
