//! Synthetic MSBuild project used to restore a track's dependency graph.
//!
//! The generated project is an executable targeting the framework of the
//! runtime package's version on that track, with one `PackageReference` per
//! catalog entry pinned on the track:
//!
//! ```xml
//! <Project Sdk="Microsoft.NET.Sdk">
//!   <PropertyGroup>
//!     <OutputType>Exe</OutputType>
//!     <TargetFramework>netcoreapp3.1</TargetFramework>
//!   </PropertyGroup>
//!   <ItemGroup>
//!     <PackageReference Include="Microsoft.NETCore.App" Version="3.1.5" />
//!   </ItemGroup>
//! </Project>
//! ```

use dotver_core::{Catalog, DotverError, Result, Track, parse_version};
use std::fmt::Write;

/// Runtime package whose version decides the target framework.
pub const RUNTIME_PACKAGE: &str = "Microsoft.NETCore.App";

/// Maps a runtime version to its target framework moniker.
///
/// .NET Core 1.x-3.x use `netcoreappX.Y`; .NET 5 and later use `netX.Y`.
///
/// # Examples
///
/// ```
/// use dotver_nuget::target_framework;
///
/// assert_eq!(target_framework("3.1.2").unwrap(), "netcoreapp3.1");
/// assert_eq!(target_framework("8.0.11").unwrap(), "net8.0");
/// ```
pub fn target_framework(runtime_version: &str) -> Result<String> {
    let version = parse_version(runtime_version)?;
    if version.major >= 5 {
        Ok(format!("net{}.{}", version.major, version.minor))
    } else {
        Ok(format!("netcoreapp{}.{}", version.major, version.minor))
    }
}

/// Project document for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    pub target_framework: String,
    /// `(package id, version)` pairs, in catalog order
    pub references: Vec<(String, String)>,
}

impl ProjectManifest {
    /// Builds the manifest for `track` from every catalog entry pinned on it.
    ///
    /// # Errors
    ///
    /// Returns `MissingRuntimeVersion` if `runtime_package` has no version on
    /// `track`, or `InvalidVersion` if that version cannot be parsed.
    pub fn for_track(catalog: &Catalog, track: Track, runtime_package: &str) -> Result<Self> {
        let runtime_version = catalog
            .get(runtime_package)
            .and_then(|p| track.version(p))
            .ok_or_else(|| DotverError::MissingRuntimeVersion {
                package: runtime_package.to_string(),
                track,
            })?;

        let references = catalog
            .pinned(track)
            .map(|(id, version)| (id.to_string(), version.to_string()))
            .collect();

        Ok(Self {
            target_framework: target_framework(runtime_version)?,
            references,
        })
    }

    /// Renders the project XML.
    pub fn render(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<Project Sdk=\"Microsoft.NET.Sdk\">\n");
        xml.push_str("  <PropertyGroup>\n");
        xml.push_str("    <OutputType>Exe</OutputType>\n");
        let _ = writeln!(
            xml,
            "    <TargetFramework>{}</TargetFramework>",
            escape_xml(&self.target_framework)
        );
        xml.push_str("  </PropertyGroup>\n");
        xml.push_str("  <ItemGroup>\n");
        for (id, version) in &self.references {
            let _ = writeln!(
                xml,
                "    <PackageReference Include=\"{}\" Version=\"{}\" />",
                escape_xml(id),
                escape_xml(version)
            );
        }
        xml.push_str("  </ItemGroup>\n");
        xml.push_str("</Project>\n");
        xml
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
