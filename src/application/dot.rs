//! Graph description in DOT syntax for the external drawing tool.
//!
//! The format is an undirected graph with ordered output edges, so `dot`
//! places left children left of right children:
//!
//! ```text
//! graph root {
//!     graph [ordering="out"];
//!     1 -- 2
//!     1 -- 5
//! }
//! ```

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::domain::TreeNode;

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Edge list of a tree, ready to be written as DOT text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGraph {
    name: String,
    root: String,
    edges: Vec<(String, String)>,
}

impl DotGraph {
    /// Takes the pre-order edge list of `tree`.
    ///
    /// Nodes with equal text collapse into one graph node, values should be
    /// unique for a faithful picture.
    pub fn from_tree<T: Display>(name: impl Into<String>, tree: &TreeNode<T>) -> Self {
        Self {
            name: name.into(),
            root: tree.value.to_string(),
            edges: tree
                .edges()
                .into_iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }
}

impl Display for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph {} {{", dot_id(&self.name))?;
        writeln!(f, "    graph [ordering=\"out\"];")?;
        if self.edges.is_empty() {
            // lone root, otherwise the picture is empty
            writeln!(f, "    {}", dot_id(&self.root))?;
        }
        for (parent, child) in &self.edges {
            writeln!(f, "    {} -- {}", dot_id(parent), dot_id(child))?;
        }
        writeln!(f, "}}")
    }
}

/// Quotes `s` unless it already is a plain DOT identifier or numeral.
pub fn dot_id(s: &str) -> Cow<'_, str> {
    if is_plain_id(s) || is_numeral(s) {
        return Cow::Borrowed(s);
    }
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn is_plain_id(s: &str) -> bool {
    let mut chars = s.chars();
    let first_ok = matches!(
        chars.next(),
        Some(c) if c == '_' || c.is_ascii_alphabetic() || !c.is_ascii()
    );
    first_ok
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii())
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s))
}

fn is_numeral(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    match frac {
        None => !int.is_empty() && all_digits(int),
        Some(frac) => (!int.is_empty() || !frac.is_empty()) && all_digits(int) && all_digits(frac),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_id_plain_values_unquoted() {
        assert_eq!(dot_id("42"), "42");
        assert_eq!(dot_id("-3.5"), "-3.5");
        assert_eq!(dot_id(".5"), ".5");
        assert_eq!(dot_id("root"), "root");
        assert_eq!(dot_id("_x1"), "_x1");
    }

    #[test]
    fn test_dot_id_quotes_when_needed() {
        assert_eq!(dot_id("hello world"), "\"hello world\"");
        assert_eq!(dot_id("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(dot_id("1a"), "\"1a\"");
        assert_eq!(dot_id("Graph"), "\"Graph\"");
        assert_eq!(dot_id(""), "\"\"");
        assert_eq!(dot_id("-"), "\"-\"");
        assert_eq!(dot_id("."), "\".\"");
    }

    #[test]
    fn test_lone_root_is_emitted() {
        let text = DotGraph::from_tree("single", &TreeNode::leaf(1)).to_string();
        assert_eq!(text, "graph single {\n    graph [ordering=\"out\"];\n    1\n}\n");
    }

    #[test]
    fn test_from_tree_takes_edges_as_text() {
        let tree = TreeNode::new("a", Some(Box::new(TreeNode::leaf("b"))), None);
        let g = DotGraph::from_tree("g", &tree);
        assert_eq!(g.edges(), &[("a".to_string(), "b".to_string())]);
        assert_eq!(g.name(), "g");
    }
}
