//! nuget.org registry client.
//!
//! Lists package versions through the NuGet V3 registration resource:
//! `{base}/{lowercase-id}/index.json`. Small packages inline their version
//! leaves in the index; large ones (such as `Microsoft.NETCore.App`) split them
//! into pages that must be fetched separately.
//!
//! # Examples
//!
//! ```no_run
//! use dotver_core::{HttpClient, Registry};
//! use dotver_nuget::NuGetRegistry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = NuGetRegistry::new(HttpClient::new().unwrap());
//!     let versions = registry.stable_versions("Newtonsoft.Json").await.unwrap();
//!     println!("{} stable versions", versions.len());
//! }
//! ```

use async_trait::async_trait;
use dotver_core::{DotverError, HttpClient, Registry, Result, parse_version};
use semver::Version;
use serde::Deserialize;

/// Registration base that includes SemVer 2.0.0 packages (gzip-encoded).
pub const DEFAULT_REGISTRATION_URL: &str = "https://api.nuget.org/v3/registration5-gz-semver2";

/// Base URL for package pages on nuget.org
pub const NUGET_PACKAGES_URL: &str = "https://www.nuget.org/packages";

/// Client for the NuGet registration resource.
#[derive(Clone)]
pub struct NuGetRegistry {
    client: HttpClient,
    base_url: String,
}

impl NuGetRegistry {
    /// Creates a client for nuget.org.
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_REGISTRATION_URL)
    }

    /// Creates a client for a registration resource at `base_url`.
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn index_url(&self, package_id: &str) -> String {
        format!(
            "{}/{}/index.json",
            self.base_url,
            urlencoding::encode(&package_id.to_lowercase())
        )
    }

    /// Collects every catalog entry of a package, fetching non-inlined pages.
    async fn catalog_entries(&self, package_id: &str) -> Result<Vec<CatalogEntry>> {
        let data = self
            .client
            .get_bytes(&self.index_url(package_id), package_id)
            .await?;
        let index: RegistrationIndex = parse_json(&data, package_id)?;

        let mut entries = Vec::new();
        for page in index.items {
            let leaves = match page.items {
                Some(leaves) => leaves,
                None => {
                    tracing::debug!("fetching registration page {} for {}", page.id, package_id);
                    let data = self.client.get_bytes(&page.id, package_id).await?;
                    let fetched: RegistrationPage = parse_json(&data, package_id)?;
                    fetched.items.unwrap_or_default()
                }
            };
            entries.extend(leaves.into_iter().map(|leaf| leaf.catalog_entry));
        }

        Ok(entries)
    }
}

#[async_trait]
impl Registry for NuGetRegistry {
    async fn stable_versions(&self, package_id: &str) -> Result<Vec<Version>> {
        let entries = self.catalog_entries(package_id).await?;
        Ok(stable_listed(entries, package_id))
    }

    fn package_url(&self, package_id: &str) -> String {
        format!("{}/{}", NUGET_PACKAGES_URL, package_id)
    }
}

/// Registration index document (partial, only fields we need).
#[derive(Debug, Deserialize)]
struct RegistrationIndex {
    #[serde(default)]
    items: Vec<RegistrationPage>,
}

/// Registration page, either inlined in the index or fetched from `@id`.
#[derive(Debug, Deserialize)]
struct RegistrationPage {
    #[serde(rename = "@id")]
    id: String,
    /// Absent when the page must be fetched separately
    #[serde(default)]
    items: Option<Vec<RegistrationLeaf>>,
}

#[derive(Debug, Deserialize)]
struct RegistrationLeaf {
    #[serde(rename = "catalogEntry")]
    catalog_entry: CatalogEntry,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    version: String,
    /// Missing means listed
    #[serde(default = "default_listed")]
    listed: bool,
}

const fn default_listed() -> bool {
    true
}

fn parse_json<'a, T: Deserialize<'a>>(data: &'a [u8], package_id: &str) -> Result<T> {
    serde_json::from_slice(data).map_err(|e| DotverError::ParseError {
        file_type: format!("NuGet registration for {package_id}"),
        source: Box::new(e),
    })
}

/// Keeps listed, non-prerelease entries that parse as versions.
fn stable_listed(entries: Vec<CatalogEntry>, package_id: &str) -> Vec<Version> {
    entries
        .into_iter()
        .filter(|entry| entry.listed)
        .filter_map(|entry| match parse_version(&entry.version) {
            Ok(version) => Some(version),
            Err(e) => {
                tracing::debug!("skipping {} {}: {}", package_id, entry.version, e);
                None
            }
        })
        .filter(|version| version.pre.is_empty())
        .collect()
}
