//! Graphviz-backed renderer
//!
//! Writes the graph description to a temporary `.dot` file next to the
//! output image, runs `<program> -T<format> <dot> -o <output>` and removes the
//! description file again, whatever the outcome of the run.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tracing::{debug, instrument, warn};

use crate::application::DotGraph;
use crate::config::RendererConfig;
use crate::infrastructure::traits::{CommandRunner, Renderer};
use crate::infrastructure::{InfraError, InfraResult};

/// Renders graphs by shelling out to a Graphviz layout program.
pub struct GraphvizRenderer {
    cmd: Arc<dyn CommandRunner>,
    program: String,
    format: String,
}

impl GraphvizRenderer {
    pub fn new(
        cmd: Arc<dyn CommandRunner>,
        program: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            cmd,
            program: program.into(),
            format: format.into(),
        }
    }

    pub fn from_config(cmd: Arc<dyn CommandRunner>, config: &RendererConfig) -> Self {
        Self::new(cmd, config.program.as_str(), config.format.as_str())
    }

    /// Create the description file in the output directory.
    fn write_description(&self, graph: &DotGraph, dir: &Path) -> InfraResult<NamedTempFile> {
        let prefix = format!("{}.", graph.name());
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".dot")
            .tempfile_in(dir)
            .map_err(|e| InfraError::io(format!("create description in {}", dir.display()), e))?;

        write!(file, "{}", graph)
            .and_then(|_| file.flush())
            .map_err(|e| InfraError::io(format!("write {}", file.path().display()), e))?;
        Ok(file)
    }

    fn invoke(&self, description: &Path, output: &Path) -> InfraResult<()> {
        let format_arg = format!("-T{}", self.format);
        let description = description.to_string_lossy();
        let output = output.to_string_lossy();
        let args = [format_arg.as_str(), description.as_ref(), "-o", output.as_ref()];
        debug!("running {} {:?}", self.program, args);

        let result = self
            .cmd
            .run(&self.program, &args)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => InfraError::ToolNotFound {
                    program: self.program.clone(),
                },
                _ => InfraError::io(format!("run {}", self.program), e),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(InfraError::Render {
                message: format!(
                    "{} exited with {}: {}",
                    self.program,
                    result.status,
                    stderr.trim()
                ),
                exit_code: result.status.code(),
            });
        }
        Ok(())
    }
}

impl Renderer for GraphvizRenderer {
    #[instrument(level = "debug", skip(self, graph), fields(graph = graph.name()))]
    fn render(&self, graph: &DotGraph, output: &Path) -> InfraResult<()> {
        let dir = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let description = self.write_description(graph, dir)?;
        let result = self.invoke(description.path(), output);

        let path = description.path().to_path_buf();
        if let Err(e) = description.close() {
            warn!("failed to remove {}: {}", path.display(), e);
        }
        result
    }
}
