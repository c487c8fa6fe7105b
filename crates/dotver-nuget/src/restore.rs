use async_trait::async_trait;
use dotver_core::{DotverError, Result};
use std::path::{Path, PathBuf};

/// External tool that restores a project manifest.
///
/// On success the tool leaves the resolved graph at
/// `<manifest dir>/obj/project.assets.json`.
#[async_trait]
pub trait RestoreTool: Send + Sync {
    /// Restores the project at `manifest`, waiting for the tool to finish.
    ///
    /// # Errors
    ///
    /// Returns `RestoreFailed` when the tool exits unsuccessfully and `Io` when it
    /// cannot be started.
    async fn restore(&self, manifest: &Path) -> Result<()>;
}

/// `dotnet restore` invoked as a subprocess.
///
/// The child inherits stdout and stderr so restore diagnostics reach the
/// console. There is no timeout.
#[derive(Debug, Clone)]
pub struct DotnetCli {
    program: PathBuf,
}

impl DotnetCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DotnetCli {
    fn default() -> Self {
        Self::new("dotnet")
    }
}

#[async_trait]
impl RestoreTool for DotnetCli {
    async fn restore(&self, manifest: &Path) -> Result<()> {
        tracing::info!(
            "Running {} restore {}",
            self.program.display(),
            manifest.display()
        );

        let status = tokio::process::Command::new(&self.program)
            .arg("restore")
            .arg(manifest)
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(DotverError::RestoreFailed {
                manifest: manifest.to_path_buf(),
                code: status.code(),
            })
        }
    }
}
