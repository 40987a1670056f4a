//! Owning binary tree node with rotated printing, inversion and edge listing.

use std::fmt;

/// Default width of one indentation level in the rotated view.
pub const INDENT_WIDTH: usize = 3;

/// Widest indentation level the rotated view accepts.
pub const MAX_INDENT: usize = 16;

/// A node of a binary tree.
///
/// Each node exclusively owns its value and its subtrees. There are no parent
/// pointers and no shared subtrees, so every tree is finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn new(
        value: T,
        left: Option<Box<TreeNode<T>>>,
        right: Option<Box<TreeNode<T>>>,
    ) -> Self {
        Self { value, left, right }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of levels, a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Values in pre-order: node, left subtree, right subtree.
    pub fn values(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.node_count());
        self.collect_values(&mut out);
        out
    }

    fn collect_values<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.push(&self.value);
        for child in self.children() {
            child.collect_values(out);
        }
    }

    /// Parent/child value pairs from a pre-order walk.
    ///
    /// The edge to the left child is emitted before the left subtree is
    /// walked, then the edge to the right child before the right subtree.
    /// Every non-root node contributes exactly one edge.
    pub fn edges(&self) -> Vec<(&T, &T)> {
        let mut out = Vec::new();
        self.collect_edges(&mut out);
        out
    }

    fn collect_edges<'a>(&'a self, out: &mut Vec<(&'a T, &'a T)>) {
        for child in self.children() {
            out.push((&self.value, &child.value));
            child.collect_edges(out);
        }
    }

    /// Left child first, then right; absent children are skipped.
    fn children(&self) -> impl Iterator<Item = &TreeNode<T>> {
        self.left.iter().chain(self.right.iter()).map(|b| &**b)
    }
}

impl<T: Clone> TreeNode<T> {
    /// Returns the mirror image of this tree as a new tree.
    ///
    /// Every node of the result is freshly allocated and the source is left
    /// untouched. Values are duplicated with `Clone`, which is a shallow copy
    /// for reference payloads: an `Rc<RefCell<_>>` value is shared between
    /// the original and the inverted tree, not deep-cloned.
    pub fn invert(&self) -> TreeNode<T> {
        TreeNode {
            value: self.value.clone(),
            left: invert(self.right.as_deref()),
            right: invert(self.left.as_deref()),
        }
    }
}

/// Inverts an optional subtree, mapping `None` to `None`.
pub fn invert<T: Clone>(node: Option<&TreeNode<T>>) -> Option<Box<TreeNode<T>>> {
    node.map(|n| Box::new(n.invert()))
}

impl<T: fmt::Display> TreeNode<T> {
    /// Sideways view: right subtree above, left subtree below.
    pub fn rotated(&self) -> Rotated<'_, T> {
        Rotated {
            node: self,
            indent: INDENT_WIDTH,
        }
    }

    /// Writes the rotated view to stdout.
    pub fn print(&self) {
        print!("{}", self.rotated());
    }
}

/// `Display` adapter for the rotated view of a tree.
///
/// Each node is printed on its own line, indented by its level. Values that
/// render wider than the indent or span several lines will not line up.
#[derive(Debug, Clone, Copy)]
pub struct Rotated<'a, T> {
    node: &'a TreeNode<T>,
    indent: usize,
}

impl<'a, T: fmt::Display> Rotated<'a, T> {
    /// Indentation per level, capped at [`MAX_INDENT`].
    pub fn with_indent(self, indent: usize) -> Self {
        Self {
            indent: indent.min(MAX_INDENT),
            ..self
        }
    }

    fn write_level(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &TreeNode<T>,
        level: usize,
    ) -> fmt::Result {
        if let Some(right) = &node.right {
            self.write_level(f, right, level + 1)?;
        }
        let width = level.saturating_mul(self.indent);
        writeln!(f, "{:width$}{}", "", node.value)?;
        if let Some(left) = &node.left {
            self.write_level(f, left, level + 1)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Rotated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_level(f, self.node, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample() -> TreeNode<&'static str> {
        // a
        // ├── b
        // │   └── (right) d
        // └── c
        TreeNode::new(
            "a",
            Some(Box::new(TreeNode::new("b", None, Some(Box::new(TreeNode::leaf("d")))))),
            Some(Box::new(TreeNode::leaf("c"))),
        )
    }

    #[test]
    fn test_counts_and_depth() {
        let t = sample();
        assert_eq!(t.node_count(), 4);
        assert_eq!(t.depth(), 3);
        assert!(!t.is_leaf());
        assert!(TreeNode::leaf(1).is_leaf());
    }

    #[test]
    fn test_edges_preorder() {
        let t = sample();
        assert_eq!(t.edges(), vec![(&"a", &"b"), (&"b", &"d"), (&"a", &"c")]);
    }

    #[test]
    fn test_leaf_has_no_edges() {
        assert!(TreeNode::leaf(7).edges().is_empty());
    }

    #[test]
    fn test_invert_single_child_moves_side() {
        let inv = sample().invert();
        let b = inv.right.as_ref().unwrap();
        assert_eq!(b.value, "b");
        assert!(b.right.is_none());
        assert_eq!(b.left.as_ref().unwrap().value, "d");
        assert_eq!(inv.left.as_ref().unwrap().value, "c");
    }

    #[test]
    fn test_invert_none_is_none() {
        assert_eq!(invert::<i32>(None), None);
    }

    #[test]
    fn test_invert_shares_reference_payload() {
        let shared = Rc::new(RefCell::new(10));
        let t = TreeNode::leaf(Rc::clone(&shared));
        let inv = t.invert();
        assert!(Rc::ptr_eq(&t.value, &inv.value));

        *inv.value.borrow_mut() = 11;
        assert_eq!(*t.value.borrow(), 11);
        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn test_rotated_custom_indent() {
        let t = TreeNode::new(
            1,
            Some(Box::new(TreeNode::leaf(2))),
            Some(Box::new(TreeNode::leaf(3))),
        );
        assert_eq!(t.rotated().with_indent(1).to_string(), " 3\n1\n 2\n");
    }

    #[test]
    fn test_rotated_oversized_indent_is_capped() {
        let t = TreeNode::new(1, None, Some(Box::new(TreeNode::leaf(2))));
        let expected = format!("{}2\n1\n", " ".repeat(MAX_INDENT));
        assert_eq!(t.rotated().with_indent(usize::MAX).to_string(), expected);
    }
}
