//! Command dispatch

use std::error::Error;
use std::fmt::Display;
use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument, warn};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{TreeBuilder, TreeNode, TreeNodeConvert, MAX_INDENT};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Printed between the original and the inverted tree.
pub const SEPARATOR: &str = "-------------";

/// Deepest demo tree, about a million nodes.
pub const MAX_DEMO_DEPTH: u32 = 20;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _demo(cli),
    }
}

/// Layered settings with command line flags on top.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let cwd = std::env::current_dir()
        .map_err(|e| InfraError::io("determine current directory", e))?;
    let mut settings = Settings::load(Some(&cwd))?;

    if let Some(depth) = cli.depth {
        settings.demo.depth = depth;
    }
    if let Some(start) = cli.start {
        settings.demo.start = start;
    }
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }
    debug!("effective settings: {:?}", settings);
    Ok(settings)
}

/// Rejects settings the demo cannot run with: a counter that would overflow
/// while numbering the tree, or an indent wider than [`MAX_INDENT`].
pub fn validate_demo(settings: &Settings) -> CliResult<()> {
    let depth = settings.demo.depth;
    if depth > MAX_DEMO_DEPTH {
        return Err(CliError::InvalidArgs(format!(
            "depth {} exceeds maximum of {}",
            depth, MAX_DEMO_DEPTH
        )));
    }
    let nodes = (1i32 << depth) - 1;
    if settings.demo.start.checked_add(nodes).is_none() {
        return Err(CliError::InvalidArgs(format!(
            "start {} leaves no room for {} nodes",
            settings.demo.start, nodes
        )));
    }
    if settings.indent > MAX_INDENT {
        return Err(CliError::InvalidArgs(format!(
            "indent {} exceeds maximum of {}",
            settings.indent, MAX_INDENT
        )));
    }
    Ok(())
}

/// How the demo presents its two trees.
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    /// termtree layout instead of the rotated view
    pub top_down: bool,
    /// hand each tree to the renderer
    pub render: bool,
}

#[instrument(skip(cli))]
fn _demo(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    validate_demo(&settings)?;
    let container = ServiceContainer::new(settings);
    let options = DemoOptions {
        top_down: cli.tree,
        render: !cli.no_render,
    };
    run_demo(&container, options, &mut io::stdout().lock())
}

/// Builds the demo tree from the container's settings, writes it, the
/// separator and its mirror image to `out`, rendering each tree after it is
/// written.
pub fn run_demo<W: Write>(
    container: &ServiceContainer,
    options: DemoOptions,
    out: &mut W,
) -> CliResult<()> {
    let settings = &container.settings;

    let mut builder = TreeBuilder::new(settings.demo.start);
    let Some(root) = builder.build(settings.demo.depth).map(|b| *b) else {
        output::warning("depth 0 builds an empty tree, nothing to show");
        return Ok(());
    };
    info!(
        "demo tree: {} levels, {} nodes",
        root.depth(),
        root.node_count()
    );

    show(out, &root, settings.indent, options.top_down)?;
    if options.render {
        render(container, &root, "root");
    }

    writeln!(out, "{}", SEPARATOR).map_err(|e| InfraError::io("write separator", e))?;

    let inverted = root.invert();
    show(out, &inverted, settings.indent, options.top_down)?;
    if options.render {
        render(container, &inverted, "inverted");
    }
    Ok(())
}

fn show<W: Write, T: Display>(
    out: &mut W,
    tree: &TreeNode<T>,
    indent: usize,
    top_down: bool,
) -> CliResult<()> {
    let written = if top_down {
        write!(out, "{}", tree.to_tree_string())
    } else {
        write!(out, "{}", tree.rotated().with_indent(indent))
    };
    written.map_err(|e| InfraError::io("write tree", e))?;
    Ok(())
}

/// Rendering is optional, failures are reported and the run continues.
fn render<T: Display>(container: &ServiceContainer, tree: &TreeNode<T>, name: &str) {
    match container.visualize.visualize(tree, name) {
        Ok(path) => output::success(&path.display()),
        Err(e) => {
            let chain = error_chain(&e);
            warn!("visualization of {} failed: {}", name, chain);
            output::warning(&format!("cannot render {}: {}", name, chain));
        }
    }
}

/// Joins an error and all its sources with ": ".
pub fn error_chain(e: &(dyn Error + 'static)) -> String {
    let mut parts = vec![e.to_string()];
    let mut source = e.source();
    while let Some(s) = source {
        parts.push(s.to_string());
        source = s.source();
    }
    parts.join(": ")
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            output::header("Config files (lowest to highest precedence)");
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<no config dir>".to_string());
            output::info(&format!("global: {}\n", global));
            let cwd = std::env::current_dir()
                .map_err(|e| InfraError::io("determine current directory", e))?;
            output::info(&format!("local:  {}\n", local_config_path(&cwd).display()));
        }
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
