//! NuGet and `dotnet restore` support for dotver.
//!
//! - [`NuGetRegistry`]: lists stable, listed versions from nuget.org
//! - [`ProjectManifest`]: the throwaway project pinning a track's versions
//! - [`RestoreTool`] / [`DotnetCli`]: the external restore step
//! - [`materialize`]: restore a track's graph and merge it into the catalog

pub mod assets;
pub mod graph;
pub mod manifest;
pub mod registry;
pub mod restore;

pub use assets::{ResolvedGraph, ResolvedLibrary, parse_assets, read_assets};
pub use graph::{MANIFEST_FILE_NAME, materialize};
pub use manifest::{ProjectManifest, RUNTIME_PACKAGE, target_framework};
pub use registry::{DEFAULT_REGISTRATION_URL, NuGetRegistry};
pub use restore::{DotnetCli, RestoreTool};
