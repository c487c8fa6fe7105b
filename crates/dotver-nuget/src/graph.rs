//! Dependency graph materialization for one track.
//!
//! A throwaway project pinning the track's versions is restored inside a fresh
//! temporary directory. Every library in the resolved graph is then merged into
//! the catalog, overwriting registry-derived versions for that track. The
//! directory is removed on every exit path.

use crate::assets::{ASSETS_RELATIVE_PATH, read_assets};
use crate::manifest::ProjectManifest;
use crate::restore::RestoreTool;
use dotver_core::{Catalog, DotverError, Result, Track};
use std::path::PathBuf;

/// File name of the generated project inside the temporary directory.
pub const MANIFEST_FILE_NAME: &str = "temp.csproj";

const TEMP_DIR_PREFIX: &str = "dotver-graph-";

/// Restores the dependency graph of `track` and merges it into `catalog`.
///
/// Returns the number of libraries in the resolved graph.
///
/// # Errors
///
/// Any error is fatal for the run:
/// - `MissingRuntimeVersion` if `runtime_package` has no version on `track`
/// - `RestoreFailed` / `Io` from the restore tool
/// - `MissingRestoreOutput` if restore succeeded without writing the graph
/// - `ParseError` for a malformed graph
pub async fn materialize(
    catalog: &mut Catalog,
    track: Track,
    tool: &dyn RestoreTool,
    runtime_package: &str,
) -> Result<usize> {
    let manifest = ProjectManifest::for_track(catalog, track, runtime_package)?;
    tracing::info!(
        "Generating {} package graph: {} pinned packages, {}",
        track,
        manifest.references.len(),
        manifest.target_framework
    );

    let workdir = tempfile::Builder::new()
        .prefix(TEMP_DIR_PREFIX)
        .tempdir()?;
    let manifest_path = workdir.path().join(MANIFEST_FILE_NAME);
    tokio::fs::write(&manifest_path, manifest.render()).await?;

    tool.restore(&manifest_path).await?;

    let assets_path: PathBuf = ASSETS_RELATIVE_PATH
        .iter()
        .fold(workdir.path().to_path_buf(), |path, part| path.join(part));
    if !assets_path.exists() {
        return Err(DotverError::MissingRestoreOutput(assets_path));
    }

    let graph = read_assets(&assets_path).await;
    workdir.close()?;
    let graph = graph?;

    for library in &graph.libraries {
        catalog.record(&library.id, track, library.version.as_str());
    }

    tracing::info!("{} graph resolved {} packages", track, graph.len());
    Ok(graph.len())
}
