//! Core abstractions for dotver.
//!
//! This crate provides the pieces of the supported-version pipeline that do not
//! depend on a particular registry or build tool.
//!
//! # Architecture
//!
//! dotver-core defines:
//! - **Registry trait**: `Registry`, listing stable versions for a package id
//! - **Version selection**: `select_versions` picks the Current and LTS versions
//! - **Catalog**: `Catalog`/`Package`, the id to version mapping built during a run
//! - **Export**: CSV serialization of the catalog
//! - **HTTP client**: thin `reqwest` wrapper shared by registry implementations
//! - **Error Types**: `DotverError` and the `Result` alias
//!
//! # Examples
//!
//! ```
//! use dotver_core::{Catalog, Track, select_versions};
//! use semver::Version;
//!
//! let versions = vec![Version::new(2, 0, 0), Version::new(3, 1, 5)];
//! let selected = select_versions(&versions).unwrap();
//!
//! let mut catalog = Catalog::from_seeds(["Microsoft.NETCore.App"]);
//! catalog.record("Microsoft.NETCore.App", Track::Current, selected.current);
//! catalog.record("Microsoft.NETCore.App", Track::Lts, selected.lts);
//!
//! let runtime = catalog.get("Microsoft.NETCore.App").unwrap();
//! assert_eq!(runtime.current_version.as_deref(), Some("3.1.5"));
//! assert_eq!(runtime.lts_version.as_deref(), Some("2.0.0"));
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod http;
pub mod registry;
pub mod version;

// Re-export commonly used types
pub use catalog::{Catalog, Package, Track};
pub use error::{DotverError, Result};
pub use export::{export, write_catalog};
pub use http::HttpClient;
pub use registry::Registry;
pub use version::{TrackVersions, parse_version, select_versions};
