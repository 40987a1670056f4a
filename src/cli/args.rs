//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Build a binary tree, print it, invert it and render both versions with graphviz
#[derive(Parser, Debug)]
#[command(name = "treeflip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Levels of the demo tree (0 builds nothing)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Value of the root, later nodes count up from here
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<i32>,

    /// Skip image rendering
    #[arg(long)]
    pub no_render: bool,

    /// Directory for rendered images
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Print trees top-down instead of rotated
    #[arg(long)]
    pub tree: bool,

    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Print a commented config template
    Template,

    /// Show config file locations
    Path,
}
