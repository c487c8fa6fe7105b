use crate::error::{DotverError, Result};
use reqwest::{Client, Url};
use std::time::Duration;

const USER_AGENT: &str = concat!("dotver/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Validates that a URL uses HTTPS.
///
/// Plain HTTP is accepted for loopback hosts only, which is what local mock
/// registries listen on.
fn ensure_https(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| DotverError::Http(format!("invalid URL {url}: {e}")))?;

    let loopback = matches!(parsed.host_str(), Some("127.0.0.1" | "localhost" | "[::1]"));
    if parsed.scheme() == "https" || (parsed.scheme() == "http" && loopback) {
        Ok(parsed)
    } else {
        Err(DotverError::Http(format!("URL must use HTTPS: {url}")))
    }
}

/// HTTP client used by registry implementations.
///
/// Every call goes to the network; responses are not cached between runs or
/// between lookups.
///
/// # Examples
///
/// ```no_run
/// use dotver_core::HttpClient;
///
/// # async fn example() -> dotver_core::Result<()> {
/// let client = HttpClient::new()?;
/// let body = client
///     .get_bytes("https://api.nuget.org/v3/index.json", "service-index")
///     .await?;
/// println!("Fetched {} bytes", body.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with a 30-second timeout, gzip decoding and a
    /// `dotver/<version>` user agent.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .build()
            .map_err(|e| DotverError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body.
    ///
    /// `package` names the package the request is made for and is carried into
    /// transport errors.
    ///
    /// # Errors
    ///
    /// Returns `DotverError::Http` for non-HTTPS URLs and non-2xx statuses, and
    /// `DotverError::RegistryError` when the request itself fails.
    pub async fn get_bytes(&self, url: &str, package: &str) -> Result<Vec<u8>> {
        let url = ensure_https(url)?;
        tracing::debug!("fetching: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DotverError::RegistryError {
                package: package.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(DotverError::Http(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DotverError::RegistryError {
                package: package.to_string(),
                source: e,
            })?;

        Ok(body.to_vec())
    }
}
