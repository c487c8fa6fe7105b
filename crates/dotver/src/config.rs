use dotver_core::{DotverError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Packages whose versions anchor the Current and LTS tracks.
pub const DEFAULT_SEEDS: [&str; 6] = [
    "Microsoft.NETCore.App",
    "Microsoft.AspNetCore",
    "Microsoft.AspNetCore.Mvc",
    "Microsoft.AspNetCore.Identity.EntityFrameworkCore",
    "Microsoft.AspNetCore.Authentication.OpenIdConnect",
    "Microsoft.EntityFrameworkCore.SqlServer",
];

pub const DEFAULT_OUTPUT: &str = "dotnet_supported_package_versions.csv";

/// Root configuration for a dotver run.
///
/// Can be loaded from a JSON file; every field falls back to its default when
/// omitted, and command-line flags override file values.
///
/// # Defaults
///
/// - `seeds`: [`DEFAULT_SEEDS`]
/// - `runtime_package`: `"Microsoft.NETCore.App"`
/// - `registry_url`: the nuget.org registration resource
/// - `dotnet`: `"dotnet"`
/// - `output`: `"dotnet_supported_package_versions.csv"`
/// - `batch_size`: `20`
///
/// # Examples
///
/// ```
/// use dotver::config::Config;
///
/// let json = r#"{
///     "seeds": ["Microsoft.NETCore.App", "Newtonsoft.Json"],
///     "batch_size": 5
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.seeds.len(), 2);
/// assert_eq!(config.batch_size, 5);
/// assert_eq!(config.runtime_package, "Microsoft.NETCore.App");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_seeds")]
    pub seeds: Vec<String>,
    /// Seed whose version decides the target framework of each track
    #[serde(default = "default_runtime_package")]
    pub runtime_package: String,
    #[serde(default = "default_registry_url")]
    pub registry_url: String,
    /// Program invoked as `<dotnet> restore <manifest>`
    #[serde(default = "default_dotnet")]
    pub dotnet: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Registry lookups issued concurrently per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seeds: default_seeds(),
            runtime_package: default_runtime_package(),
            registry_url: default_registry_url(),
            dotnet: default_dotnet(),
            output: default_output(),
            batch_size: default_batch_size(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| DotverError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Checks the settings a run depends on.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DotverError::Config("batch_size must be at least 1".into()));
        }
        if self.seeds.is_empty() {
            return Err(DotverError::Config("at least one seed package is required".into()));
        }
        if !self.seeds.iter().any(|s| s == &self.runtime_package) {
            return Err(DotverError::Config(format!(
                "runtime package {} must be one of the seeds",
                self.runtime_package
            )));
        }
        Ok(())
    }
}

fn default_seeds() -> Vec<String> {
    DEFAULT_SEEDS.iter().map(|s| (*s).to_string()).collect()
}

fn default_runtime_package() -> String {
    dotver_nuget::RUNTIME_PACKAGE.to_string()
}

fn default_registry_url() -> String {
    dotver_nuget::DEFAULT_REGISTRATION_URL.to_string()
}

fn default_dotnet() -> PathBuf {
    PathBuf::from("dotnet")
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

const fn default_batch_size() -> usize {
    20
}
