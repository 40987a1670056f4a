//! Domain layer: the binary tree and its builder
//!
//! This layer is independent of external concerns (no rendering, no config, no CLI).

pub mod builder;
pub mod display;
pub mod node;

pub use builder::{build, TreeBuilder};
pub use display::TreeNodeConvert;
pub use node::{invert, Rotated, TreeNode, INDENT_WIDTH, MAX_INDENT};
