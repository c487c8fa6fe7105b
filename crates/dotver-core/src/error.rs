use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::Track;

/// Core error types for dotver.
///
/// Lookup errors (`RegistryError`, `Http`) are recovered by the caller and only
/// logged. Restore and parse errors abort the run.
///
/// # Examples
///
/// ```
/// use dotver_core::error::{DotverError, Result};
///
/// fn read_graph(content: &str) -> Result<()> {
///     if content.is_empty() {
///         return Err(DotverError::ParseError {
///             file_type: "project.assets.json".into(),
///             source: Box::new(std::io::Error::new(
///                 std::io::ErrorKind::InvalidData,
///                 "empty content"
///             )),
///         });
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum DotverError {
    #[error("failed to parse {file_type}: {source}")]
    ParseError {
        file_type: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("registry request failed for {package}: {source}")]
    RegistryError {
        package: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("invalid version: {0}")]
    InvalidVersion(String),

    #[error("no {track} version available for runtime package {package}")]
    MissingRuntimeVersion { package: String, track: Track },

    #[error("restore failed for {}: exit code {}", .manifest.display(), exit_code_label(*.code))]
    RestoreFailed {
        manifest: PathBuf,
        code: Option<i32>,
    },

    #[error("restore produced no resolved graph at {}", .0.display())]
    MissingRestoreOutput(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn exit_code_label(code: Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Convenience type alias for `Result<T, DotverError>`.
pub type Result<T> = std::result::Result<T, DotverError>;
