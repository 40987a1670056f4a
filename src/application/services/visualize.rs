//! Visualization service
//!
//! Side branch of the tree workflow: turns a tree into its edge list, hands
//! it to the injected renderer and reports where the image went. A failing
//! renderer never affects the tree.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, DotGraph, IoResultExt};
use crate::config::Settings;
use crate::domain::TreeNode;
use crate::infrastructure::traits::{FileSystem, Renderer};

/// Renders trees into the configured output directory.
pub struct VisualizeService {
    fs: Arc<dyn FileSystem>,
    renderer: Arc<dyn Renderer>,
    settings: Arc<Settings>,
}

impl VisualizeService {
    /// Create a new visualization service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        renderer: Arc<dyn Renderer>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            renderer,
            settings,
        }
    }

    /// Render `tree` as `<output_dir>/<name>.<format>`.
    ///
    /// Creates the output directory when missing.
    ///
    /// # Returns
    /// Path of the written image
    #[instrument(level = "debug", skip(self, tree))]
    pub fn visualize<T: Display>(
        &self,
        tree: &TreeNode<T>,
        name: &str,
    ) -> ApplicationResult<PathBuf> {
        let dir = &self.settings.output_dir;
        if !self.fs.exists(dir) {
            debug!("creating output dir {}", dir.display());
            self.fs
                .create_dir_all(dir)
                .with_path_context("create output dir", dir)?;
        }

        let graph = DotGraph::from_tree(name, tree);
        debug!("graph {}: {} edges", name, graph.edges().len());

        let output = self.settings.output_path(name);
        self.renderer
            .render(&graph, &output)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("render {}", output.display()),
                source: Box::new(e),
            })?;

        info!("rendered {}", output.display());
        Ok(output)
    }
}
