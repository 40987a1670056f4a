//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treeflip/treeflip.toml`
//! 3. Local config: `<dir>/.treeflip.toml`
//! 4. Environment variables: `TREEFLIP_*` prefix, `__` separates nested keys
//!
//! Every layer replaces the scalar values it specifies. Command line flags are
//! applied on top by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::INDENT_WIDTH;

/// External drawing tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RendererConfig {
    /// Graphviz program (default: dot)
    pub program: String,
    /// Output format passed as `-T<format>`, also the file extension
    pub format: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: "dot".into(),
            format: "svg".into(),
        }
    }
}

/// Parameters of the demo tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    pub depth: u32,
    pub start: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { depth: 3, start: 1 }
    }
}

/// Raw renderer config for intermediate parsing (`None` → not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRendererConfig {
    pub program: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDemoConfig {
    pub depth: Option<u32>,
    pub start: Option<i32>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub output_dir: Option<PathBuf>,
    pub indent: Option<usize>,
    pub renderer: RawRendererConfig,
    pub demo: RawDemoConfig,
}

/// Unified configuration for treeflip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory receiving rendered images (default: ./graphs)
    pub output_dir: PathBuf,
    /// Spaces per level in the rotated print
    pub indent: usize,
    pub renderer: RendererConfig,
    pub demo: DemoConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("graphs"),
            indent: INDENT_WIDTH,
            renderer: RendererConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

/// Get the XDG config directory for treeflip.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treeflip").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treeflip.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".treeflip.toml")
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input as is.
pub fn expand_env_vars(input: &str) -> String {
    shellexpand::full(input)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            output_dir: overlay
                .output_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.clone()),
            indent: overlay.indent.unwrap_or(self.indent),
            renderer: RendererConfig {
                program: overlay
                    .renderer
                    .program
                    .clone()
                    .unwrap_or_else(|| self.renderer.program.clone()),
                format: overlay
                    .renderer
                    .format
                    .clone()
                    .unwrap_or_else(|| self.renderer.format.clone()),
            },
            demo: DemoConfig {
                depth: overlay.demo.depth.unwrap_or(self.demo.depth),
                start: overlay.demo.start.unwrap_or(self.demo.start),
            },
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.output_dir.to_string_lossy().as_ref());
        self.output_dir = PathBuf::from(expanded);
        self.renderer.program = expand_env_vars(&self.renderer.program);
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.treeflip.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("loading local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply TREEFLIP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREEFLIP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("output_dir") {
            settings.output_dir = PathBuf::from(val);
        }
        if let Some(val) = Self::env_number(&config, "indent")? {
            settings.indent = val;
        }
        if let Ok(val) = config.get_string("renderer.program") {
            settings.renderer.program = val;
        }
        if let Ok(val) = config.get_string("renderer.format") {
            settings.renderer.format = val;
        }
        if let Some(val) = Self::env_number(&config, "demo.depth")? {
            settings.demo.depth = val;
        }
        if let Some(val) = Self::env_number(&config, "demo.start")? {
            settings.demo.start = val;
        }

        Ok(settings)
    }

    /// Present but unparsable numbers are an error, absent ones are `None`.
    fn env_number<N: std::str::FromStr>(
        config: &Config,
        key: &str,
    ) -> Result<Option<N>, ApplicationError> {
        match config.get_string(key) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ApplicationError::Config {
                    message: format!("invalid number for {}: {}", key, raw),
                }),
            Err(_) => Ok(None),
        }
    }

    /// Output file for a graph of the given name.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", name, self.renderer.format))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treeflip configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treeflip/treeflip.toml
#   Local:  ./.treeflip.toml
#   Env:    TREEFLIP_* environment variables, e.g. TREEFLIP_RENDERER__FORMAT=png
#
# Command line flags override all of these.

# Directory receiving rendered images
# output_dir = "graphs"

# Spaces per level when printing a tree
# indent = 3

[renderer]
# Graphviz program
# program = "dot"

# Output format, also used as file extension
# format = "svg"

[demo]
# Levels of the demo tree
# depth = 3

# First value of the demo tree
# start = 1
"#
        .to_string()
    }
}
