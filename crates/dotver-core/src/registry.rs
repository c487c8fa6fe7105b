use crate::error::Result;
use async_trait::async_trait;
use semver::Version;

/// Package registry interface.
///
/// Implementors list the versions a registry publishes for a package id. Only
/// stable (non-prerelease) and listed versions are returned; the order is
/// unspecified.
///
/// # Examples
///
/// ```
/// use dotver_core::Registry;
/// use async_trait::async_trait;
/// use semver::Version;
///
/// struct FixedRegistry;
///
/// #[async_trait]
/// impl Registry for FixedRegistry {
///     async fn stable_versions(&self, _package_id: &str) -> dotver_core::Result<Vec<Version>> {
///         Ok(vec![Version::new(3, 1, 5)])
///     }
///
///     fn package_url(&self, package_id: &str) -> String {
///         format!("https://example.com/packages/{}", package_id)
///     }
/// }
/// ```
#[async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all stable, listed versions of a package.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Package does not exist
    /// - Network request fails
    /// - Response parsing fails
    async fn stable_versions(&self, package_id: &str) -> Result<Vec<Version>>;

    /// Package URL on the registry website (e.g., <https://www.nuget.org/packages/Newtonsoft.Json>).
    fn package_url(&self, package_id: &str) -> String;
}
