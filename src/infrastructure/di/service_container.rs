//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::VisualizeService;
use crate::config::Settings;
use crate::infrastructure::graphviz::GraphvizRenderer;
use crate::infrastructure::traits::{
    CommandRunner, FileSystem, RealCommandRunner, RealFileSystem, Renderer,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    pub visualize: VisualizeService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let cmd: Arc<dyn CommandRunner> = Arc::new(RealCommandRunner);
        let renderer = Arc::new(GraphvizRenderer::from_config(cmd, &settings.renderer));
        Self::with_deps(settings, Arc::new(RealFileSystem), renderer)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let settings = Arc::new(settings);
        let visualize = VisualizeService::new(fs, renderer, settings.clone());

        Self {
            settings,
            visualize,
        }
    }
}
