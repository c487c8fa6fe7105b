use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dotver", version)]
#[command(
    about = "Catalog the Current and LTS versions of supported .NET packages",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve both tracks and write the version catalog to CSV
    Generate(GenerateArgs),
    /// Print the Current and LTS versions of packages
    Versions(VersionsArgs),
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// NuGet registration base URL
    #[arg(long)]
    pub registry_url: Option<String>,
}

impl CommonArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.registry_url {
            config.registry_url.clone_from(url);
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Output CSV path
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Seed package id (repeatable); replaces the configured seeds
    #[arg(long = "seed")]
    pub seeds: Vec<String>,
    /// Program used to run `restore`
    #[arg(long)]
    pub dotnet: Option<PathBuf>,
    /// Concurrent registry lookups per batch
    #[arg(long)]
    pub batch_size: Option<usize>,
}

impl GenerateArgs {
    /// Overrides configuration values with the flags that were given.
    pub fn apply(&self, config: &mut Config) {
        self.common.apply(config);
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if !self.seeds.is_empty() {
            config.seeds.clone_from(&self.seeds);
        }
        if let Some(dotnet) = &self.dotnet {
            config.dotnet.clone_from(dotnet);
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
    }
}

#[derive(Args, Debug)]
pub struct VersionsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Package ids to look up
    #[arg(required = true)]
    pub packages: Vec<String>,
}
