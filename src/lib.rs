//! # treeflip
//!
//! Builds complete binary trees of integers, prints them sideways, inverts
//! them and optionally renders them with graphviz.
//!
//! ```
//! use treeflip::domain::build;
//!
//! let mut counter = 1;
//! let root = build(&mut counter, 2).unwrap();
//! assert_eq!(root.rotated().to_string(), "   3\n1\n   2\n");
//!
//! let inverted = root.invert();
//! assert_eq!(inverted.left.as_ref().map(|n| n.value), Some(3));
//! assert_eq!(inverted.invert(), *root);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{build, invert, TreeBuilder, TreeNode};
