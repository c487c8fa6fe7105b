//! Version parsing and Current/LTS selection.
//!
//! NuGet reports versions in a normalized form that is usually plain semver, but
//! older packages may carry one or two components, or a fourth "revision"
//! component. [`parse_version`] maps those onto [`semver::Version`] so the rest of
//! the workspace can rely on the semver ordering.

use crate::error::{DotverError, Result};
use semver::Version;

/// Versions picked for the two tracks of a single package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackVersions {
    /// Highest stable version.
    pub current: String,
    /// Highest stable version whose minor component is zero, or `current`.
    pub lts: String,
}

/// Parses a registry version string into a semantic version.
///
/// Accepts `1`, `1.2`, `1.2.3` and `1.2.3.0`. A four-part version with a
/// non-zero revision has no semver equivalent and is rejected.
///
/// # Examples
///
/// ```
/// use dotver_core::parse_version;
///
/// assert_eq!(parse_version("2.1").unwrap().to_string(), "2.1.0");
/// assert_eq!(parse_version("3.1.5.0").unwrap().to_string(), "3.1.5");
/// assert!(parse_version("1.0.0.1").is_err());
/// ```
pub fn parse_version(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    if let Ok(version) = Version::parse(trimmed) {
        return Ok(version);
    }

    // Split off pre-release/build suffix before counting numeric components
    let split_at = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(split_at);
    let parts: Vec<&str> = core.split('.').collect();

    let normalized = match parts.as_slice() {
        [major] => format!("{major}.0.0"),
        [major, minor] => format!("{major}.{minor}.0"),
        [major, minor, patch, "0"] => format!("{major}.{minor}.{patch}"),
        _ => return Err(DotverError::InvalidVersion(raw.to_string())),
    };

    Version::parse(&format!("{normalized}{suffix}"))
        .map_err(|_| DotverError::InvalidVersion(raw.to_string()))
}

/// Selects the Current and LTS versions from the stable versions of one package.
///
/// Returns `None` when `versions` is empty.
///
/// - Current: greatest `(major, minor, patch)`.
/// - LTS: greatest `(major, patch)` among versions with `minor == 0`, falling back
///   to Current when no such version exists.
///
/// When two versions share the same tuple the last one in input order wins.
///
/// # Examples
///
/// ```
/// use dotver_core::select_versions;
/// use semver::Version;
///
/// let versions: Vec<Version> = ["2.0.0", "2.1.0", "3.1.5", "3.1.0"]
///     .iter()
///     .map(|v| Version::parse(v).unwrap())
///     .collect();
///
/// let selected = select_versions(&versions).unwrap();
/// assert_eq!(selected.current, "3.1.5");
/// assert_eq!(selected.lts, "2.0.0");
/// ```
pub fn select_versions(versions: &[Version]) -> Option<TrackVersions> {
    let current = versions
        .iter()
        .max_by_key(|v| (v.major, v.minor, v.patch))?;

    let lts = versions
        .iter()
        .filter(|v| v.minor == 0)
        .max_by_key(|v| (v.major, v.patch))
        .unwrap_or(current);

    Some(TrackVersions {
        current: current.to_string(),
        lts: lts.to_string(),
    })
}
