//! End-to-end run: seed, look up, restore both tracks, export.

use crate::config::Config;
use dotver_core::{Catalog, Registry, Result, Track, export, select_versions};
use dotver_nuget::{RestoreTool, materialize};
use futures::future::join_all;

/// Order in which track graphs are restored.
pub const TRACK_ORDER: [Track; 2] = [Track::Lts, Track::Current];

/// Fills in Current and LTS versions for every catalog entry from the registry.
///
/// Lookups run `batch_size` at a time; each batch finishes before the next one
/// starts. Failed lookups and packages without stable versions are logged and
/// left without versions. Returns the number of packages that got versions.
pub async fn lookup_versions(
    registry: &dyn Registry,
    catalog: &mut Catalog,
    batch_size: usize,
) -> usize {
    let ids = catalog.ids();
    let mut selected_count = 0;

    for batch in ids.chunks(batch_size.max(1)) {
        let lookups = batch.iter().map(|id| async move {
            tracing::info!("Get versions for {}", id);
            (id, registry.stable_versions(id).await)
        });

        for (id, result) in join_all(lookups).await {
            let versions = match result {
                Ok(versions) => versions,
                Err(e) => {
                    tracing::error!("Failed to get versions for {}: {}", id, e);
                    continue;
                }
            };

            let Some(selected) = select_versions(&versions) else {
                tracing::warn!("{} has no stable versions", id);
                continue;
            };

            tracing::info!(
                "{} : (LTS) {}, (Current) {}",
                id,
                selected.lts,
                selected.current
            );
            if let Some(package) = catalog.get_mut(id) {
                Track::Lts.set_version(package, selected.lts);
                Track::Current.set_version(package, selected.current);
                selected_count += 1;
            }
        }
    }

    selected_count
}

/// Builds the full catalog: seeds, registry versions, then both track graphs.
///
/// # Errors
///
/// Restore and graph errors abort the run; lookup errors do not.
pub async fn build_catalog(
    config: &Config,
    registry: &dyn Registry,
    tool: &dyn RestoreTool,
) -> Result<Catalog> {
    let mut catalog = Catalog::from_seeds(config.seeds.iter().cloned());
    lookup_versions(registry, &mut catalog, config.batch_size).await;

    for track in TRACK_ORDER {
        materialize(&mut catalog, track, tool, &config.runtime_package).await?;
    }

    Ok(catalog)
}

/// Builds the catalog and exports it to `config.output`.
///
/// Nothing is written when any step fails.
pub async fn run(
    config: &Config,
    registry: &dyn Registry,
    tool: &dyn RestoreTool,
) -> Result<Catalog> {
    let catalog = build_catalog(config, registry, tool).await?;
    export(catalog.packages(), &config.output)?;
    Ok(catalog)
}
