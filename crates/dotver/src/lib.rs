pub mod cli;
pub mod config;
pub mod pipeline;

use cli::{Cli, Commands, GenerateArgs, VersionsArgs};
use config::Config;
use dotver_core::{Catalog, HttpClient, Registry, Result, Track};
use dotver_nuget::{DotnetCli, NuGetRegistry};

// Re-export commonly used types
pub use pipeline::{build_catalog, lookup_versions, run};

/// Runs the subcommand selected on the command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => generate(&args).await,
        Commands::Versions(args) => versions(&args).await,
    }
}

async fn generate(args: &GenerateArgs) -> Result<()> {
    let mut config = Config::load(args.common.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let registry = NuGetRegistry::with_base_url(HttpClient::new()?, &config.registry_url);
    let tool = DotnetCli::new(&config.dotnet);

    let catalog = run(&config, &registry, &tool).await?;
    tracing::info!(
        "Catalog complete: {} packages written to {}",
        catalog.len(),
        config.output.display()
    );
    Ok(())
}

async fn versions(args: &VersionsArgs) -> Result<()> {
    let mut config = Config::load(args.common.config.as_deref())?;
    args.common.apply(&mut config);

    let registry = NuGetRegistry::with_base_url(HttpClient::new()?, &config.registry_url);
    let mut catalog = Catalog::from_seeds(args.packages.iter().cloned());
    lookup_versions(&registry, &mut catalog, config.batch_size).await;

    print!("{}", render_versions(&catalog, &registry));
    Ok(())
}

/// Formats the `versions` report, one line per package:
/// `id : (LTS) x, (Current) y  <package url>`, or `id : no stable versions`.
pub fn render_versions(catalog: &Catalog, registry: &dyn Registry) -> String {
    catalog
        .packages()
        .map(|package| {
            let lts = Track::Lts.version(package);
            let current = Track::Current.version(package);
            match (lts, current) {
                (Some(lts), Some(current)) => format!(
                    "{} : (LTS) {}, (Current) {}  {}\n",
                    package.id,
                    lts,
                    current,
                    registry.package_url(&package.id)
                ),
                _ => format!("{} : no stable versions\n", package.id),
            }
        })
        .collect()
}
