//! project.assets.json parsing.
//!
//! `dotnet restore` writes the resolved graph to `obj/project.assets.json`.
//! Only the keys of the top-level `libraries` object are read:
//!
//! ```json
//! {
//!   "version": 3,
//!   "libraries": {
//!     "Newtonsoft.Json/12.0.1": { "type": "package", "path": "newtonsoft.json/12.0.1" },
//!     "System.Buffers/4.5.0": { "type": "package" }
//!   }
//! }
//! ```

use dotver_core::{DotverError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Location of the resolved graph relative to the restored project's directory.
pub const ASSETS_RELATIVE_PATH: [&str; 2] = ["obj", "project.assets.json"];

/// A resolved package as reported by restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLibrary {
    pub id: String,
    pub version: String,
}

/// Every library in a restored project's graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGraph {
    pub libraries: Vec<ResolvedLibrary>,
}

impl ResolvedGraph {
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

/// project.assets.json structure (partial, only fields we need).
#[derive(Debug, Deserialize)]
struct ProjectAssets {
    libraries: BTreeMap<String, serde_json::Value>,
}

/// Parses the content of a project.assets.json document.
///
/// # Errors
///
/// Returns `ParseError` if the document is not JSON, has no `libraries` object,
/// or contains a key that is not `<id>/<version>`.
///
/// # Examples
///
/// ```
/// use dotver_nuget::parse_assets;
///
/// let graph = parse_assets(r#"{"libraries": {"Newtonsoft.Json/12.0.1": {}}}"#).unwrap();
/// assert_eq!(graph.libraries[0].id, "Newtonsoft.Json");
/// assert_eq!(graph.libraries[0].version, "12.0.1");
/// ```
pub fn parse_assets(content: &str) -> Result<ResolvedGraph> {
    let assets: ProjectAssets =
        serde_json::from_str(content).map_err(|e| DotverError::ParseError {
            file_type: "project.assets.json".into(),
            source: Box::new(e),
        })?;

    let libraries = assets
        .libraries
        .into_keys()
        .map(|key| split_library_key(&key))
        .collect::<Result<Vec<_>>>()?;

    Ok(ResolvedGraph { libraries })
}

/// Reads and parses a project.assets.json file.
pub async fn read_assets(path: &Path) -> Result<ResolvedGraph> {
    tracing::debug!("Parsing project.assets.json: {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DotverError::ParseError {
            file_type: format!("project.assets.json at {}", path.display()),
            source: Box::new(e),
        })?;

    parse_assets(&content)
}

fn split_library_key(key: &str) -> Result<ResolvedLibrary> {
    match key.split_once('/') {
        Some((id, version)) if !id.is_empty() && !version.is_empty() => Ok(ResolvedLibrary {
            id: id.to_string(),
            version: version.to_string(),
        }),
        _ => Err(DotverError::ParseError {
            file_type: "project.assets.json".into(),
            source: format!("malformed library key '{key}'").into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assets() {
        let content = r#"{
            "version": 3,
            "targets": {".NETCoreApp,Version=v3.1": {}},
            "libraries": {
                "Microsoft.AspNetCore.Mvc/2.1.3": {"type": "package"},
                "Newtonsoft.Json/12.0.1": {"type": "package", "sha512": "abc"}
            }
        }"#;

        let graph = parse_assets(content).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.libraries[0],
            ResolvedLibrary {
                id: "Microsoft.AspNetCore.Mvc".into(),
                version: "2.1.3".into()
            }
        );
        assert_eq!(graph.libraries[1].id, "Newtonsoft.Json");
    }

    #[test]
    fn test_parse_assets_empty_libraries() {
        let graph = parse_assets(r#"{"libraries": {}}"#).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_parse_assets_missing_libraries() {
        let result = parse_assets(r#"{"version": 3}"#);
        assert!(matches!(result, Err(DotverError::ParseError { .. })));
    }

    #[test]
    fn test_parse_assets_invalid_json() {
        assert!(parse_assets("not json").is_err());
    }

    #[test]
    fn test_parse_assets_malformed_key() {
        let result = parse_assets(r#"{"libraries": {"NoVersionHere": {}}}"#);
        match result {
            Err(e) => assert!(e.to_string().contains("NoVersionHere")),
            Ok(_) => panic!("Expected parse error"),
        }
    }

    #[tokio::test]
    async fn test_read_assets_missing_file() {
        let result = read_assets(Path::new("/nonexistent/obj/project.assets.json")).await;
        assert!(matches!(result, Err(DotverError::ParseError { .. })));
    }
}
