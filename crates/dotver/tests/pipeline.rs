//! End-to-end pipeline tests against a mock NuGet registry and a fake restore tool.

use async_trait::async_trait;
use dotver::config::Config;
use dotver::run;
use dotver_core::{DotverError, HttpClient, Result};
use dotver_nuget::{NuGetRegistry, RestoreTool};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Restores by echoing the pinned references back as the resolved graph, plus
/// one transitive package whose version depends on the target framework.
struct EchoRestore {
    frameworks: Mutex<Vec<String>>,
}

impl EchoRestore {
    fn new() -> Self {
        Self {
            frameworks: Mutex::new(Vec::new()),
        }
    }
}

fn attribute<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let start = line.find(&format!("{name}=\""))? + name.len() + 2;
    let end = line[start..].find('"')? + start;
    Some(&line[start..end])
}

#[async_trait]
impl RestoreTool for EchoRestore {
    async fn restore(&self, manifest: &Path) -> Result<()> {
        let content = std::fs::read_to_string(manifest)?;
        let mut libraries = Map::new();
        let mut framework = String::new();

        for line in content.lines() {
            if let Some(tf) = line
                .trim()
                .strip_prefix("<TargetFramework>")
                .and_then(|rest| rest.strip_suffix("</TargetFramework>"))
            {
                framework = tf.to_string();
            }
            if let (Some(id), Some(version)) =
                (attribute(line, "Include"), attribute(line, "Version"))
            {
                libraries.insert(format!("{id}/{version}"), json!({"type": "package"}));
            }
        }

        let transitive = if framework == "netcoreapp2.0" {
            "10.0.3"
        } else {
            "12.0.1"
        };
        libraries.insert(
            format!("Newtonsoft.Json/{transitive}"),
            json!({"type": "package"}),
        );
        self.frameworks.lock().unwrap().push(framework);

        let obj = manifest.parent().unwrap().join("obj");
        std::fs::create_dir_all(&obj)?;
        std::fs::write(
            obj.join("project.assets.json"),
            json!({"version": 3, "libraries": Value::Object(libraries)}).to_string(),
        )?;
        Ok(())
    }
}

struct BrokenRestore;

#[async_trait]
impl RestoreTool for BrokenRestore {
    async fn restore(&self, manifest: &Path) -> Result<()> {
        Err(DotverError::RestoreFailed {
            manifest: manifest.to_path_buf(),
            code: Some(1),
        })
    }
}

fn registration(versions: &[&str]) -> String {
    let leaves: Vec<Value> = versions
        .iter()
        .map(|v| json!({"catalogEntry": {"version": v, "listed": true}}))
        .collect();
    json!({"count": 1, "items": [{"@id": "page", "items": leaves}]}).to_string()
}

async fn mock_package(
    server: &mut mockito::Server,
    id: &str,
    versions: &[&str],
) -> mockito::Mock {
    server
        .mock("GET", format!("/{}/index.json", id.to_lowercase()).as_str())
        .with_status(200)
        .with_body(registration(versions))
        .create_async()
        .await
}

fn config_for(seeds: &[&str], output: PathBuf) -> Config {
    Config {
        seeds: seeds.iter().map(|s| (*s).to_string()).collect(),
        output,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_runtime_seed_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let _runtime = mock_package(
        &mut server,
        "Microsoft.NETCore.App",
        &["2.0.0", "2.1.0", "3.1.5", "3.1.0"],
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("versions.csv");
    let config = config_for(&["Microsoft.NETCore.App"], output.clone());
    let registry = NuGetRegistry::with_base_url(HttpClient::new().unwrap(), server.url());
    let tool = EchoRestore::new();

    let catalog = run(&config, &registry, &tool).await.unwrap();

    let runtime = catalog.get("Microsoft.NETCore.App").unwrap();
    assert_eq!(runtime.current_version.as_deref(), Some("3.1.5"));
    assert_eq!(runtime.lts_version.as_deref(), Some("2.0.0"));

    let json = catalog.get("Newtonsoft.Json").unwrap();
    assert_eq!(json.lts_version.as_deref(), Some("10.0.3"));
    assert_eq!(json.current_version.as_deref(), Some("12.0.1"));

    assert_eq!(
        *tool.frameworks.lock().unwrap(),
        vec!["netcoreapp2.0".to_string(), "netcoreapp3.1".to_string()]
    );

    let csv = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "Id,LtsVersion,CurrentVersion\n\
         Microsoft.NETCore.App,2.0.0,3.1.5\n\
         Newtonsoft.Json,10.0.3,12.0.1\n"
    );
}

#[tokio::test]
async fn test_failed_lookup_skips_package() {
    let mut server = mockito::Server::new_async().await;
    let _runtime = mock_package(&mut server, "Microsoft.NETCore.App", &["2.1.0", "2.1.30"]).await;
    let _missing = server
        .mock("GET", "/does.not.exist/index.json")
        .with_status(404)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("versions.csv");
    let config = config_for(&["Microsoft.NETCore.App", "Does.Not.Exist"], output.clone());
    let registry = NuGetRegistry::with_base_url(HttpClient::new().unwrap(), server.url());

    let catalog = run(&config, &registry, &EchoRestore::new()).await.unwrap();

    let missing = catalog.get("Does.Not.Exist").unwrap();
    assert_eq!(missing.current_version, None);
    assert_eq!(missing.lts_version, None);

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.contains("Does.Not.Exist,,\n"));
    assert!(csv.contains("Microsoft.NETCore.App,2.1.30,2.1.30\n"));
}

#[tokio::test]
async fn test_restore_failure_writes_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _runtime = mock_package(&mut server, "Microsoft.NETCore.App", &["3.1.5"]).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("versions.csv");
    let config = config_for(&["Microsoft.NETCore.App"], output.clone());
    let registry = NuGetRegistry::with_base_url(HttpClient::new().unwrap(), server.url());

    let result = run(&config, &registry, &BrokenRestore).await;

    assert!(matches!(result, Err(DotverError::RestoreFailed { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_runtime_without_versions_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _runtime = mock_package(&mut server, "Microsoft.NETCore.App", &[]).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("versions.csv");
    let config = config_for(&["Microsoft.NETCore.App"], output.clone());
    let registry = NuGetRegistry::with_base_url(HttpClient::new().unwrap(), server.url());

    let result = run(&config, &registry, &EchoRestore::new()).await;

    assert!(matches!(result, Err(DotverError::MissingRuntimeVersion { .. })));
    assert!(!output.exists());
}
