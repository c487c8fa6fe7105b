//! Package catalog shared by the lookup and graph phases.
//!
//! The catalog maps package ids to the versions known for each [`Track`]. Seeds
//! are inserted first with no versions; lookups fill in registry-derived versions,
//! and each restore pass overwrites or extends entries for its own track.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Release track a version belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Latest stable release.
    Current,
    /// Latest stable release with a zero minor component.
    Lts,
}

impl Track {
    /// Returns the version recorded for this track, if any.
    pub fn version(self, package: &Package) -> Option<&str> {
        match self {
            Self::Current => package.current_version.as_deref(),
            Self::Lts => package.lts_version.as_deref(),
        }
    }

    /// Overwrites the version recorded for this track.
    pub fn set_version(self, package: &mut Package, version: impl Into<String>) {
        let slot = match self {
            Self::Current => &mut package.current_version,
            Self::Lts => &mut package.lts_version,
        };
        *slot = Some(version.into());
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("Current"),
            Self::Lts => f.write_str("LTS"),
        }
    }
}

/// Known versions of a single package.
///
/// Serializes to the exported row layout: `Id,LtsVersion,CurrentVersion`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Package {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "LtsVersion")]
    pub lts_version: Option<String>,
    #[serde(rename = "CurrentVersion")]
    pub current_version: Option<String>,
}

impl Package {
    /// Creates a package with no known versions.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Mapping from package id to [`Package`].
///
/// Iteration is ordered by id so exports are stable across runs.
///
/// # Examples
///
/// ```
/// use dotver_core::{Catalog, Track};
///
/// let mut catalog = Catalog::from_seeds(["Microsoft.NETCore.App"]);
/// catalog.record("Newtonsoft.Json", Track::Current, "12.0.1");
///
/// let json = catalog.get("Newtonsoft.Json").unwrap();
/// assert_eq!(json.current_version.as_deref(), Some("12.0.1"));
/// assert_eq!(json.lts_version, None);
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    packages: BTreeMap<String, Package>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding one empty entry per seed id.
    pub fn from_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for seed in seeds {
            let id = seed.into();
            catalog
                .packages
                .entry(id.clone())
                .or_insert_with(|| Package::new(id));
        }
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&Package> {
        self.packages.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Package> {
        self.packages.get_mut(id)
    }

    /// Records a resolved version for `id` on `track`.
    ///
    /// Existing entries have their track version overwritten; unknown ids get a
    /// new entry with only this track populated.
    pub fn record(&mut self, id: &str, track: Track, version: impl Into<String>) {
        let package = self
            .packages
            .entry(id.to_string())
            .or_insert_with(|| Package::new(id));
        track.set_version(package, version);
    }

    /// Ids of all entries, in catalog order.
    pub fn ids(&self) -> Vec<String> {
        self.packages.keys().cloned().collect()
    }

    /// Entries that have a version on `track`, paired with that version.
    pub fn pinned(&self, track: Track) -> impl Iterator<Item = (&str, &str)> {
        self.packages
            .values()
            .filter_map(move |p| track.version(p).map(|v| (p.id.as_str(), v)))
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seeds_deduplicates() {
        let catalog = Catalog::from_seeds(["A", "B", "A"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A"), Some(&Package::new("A")));
    }

    #[test]
    fn test_record_new_entry_sets_only_track() {
        let mut catalog = Catalog::new();
        catalog.record("Newtonsoft.Json", Track::Lts, "12.0.1");

        let package = catalog.get("Newtonsoft.Json").unwrap();
        assert_eq!(package.lts_version.as_deref(), Some("12.0.1"));
        assert!(package.current_version.is_none());
    }

    #[test]
    fn test_record_overwrites_existing_track() {
        let mut catalog = Catalog::from_seeds(["Microsoft.AspNetCore.Mvc"]);
        catalog.record("Microsoft.AspNetCore.Mvc", Track::Current, "2.1.0");
        catalog.record("Microsoft.AspNetCore.Mvc", Track::Lts, "2.0.4");
        catalog.record("Microsoft.AspNetCore.Mvc", Track::Current, "2.1.3");

        let package = catalog.get("Microsoft.AspNetCore.Mvc").unwrap();
        assert_eq!(package.current_version.as_deref(), Some("2.1.3"));
        assert_eq!(package.lts_version.as_deref(), Some("2.0.4"));
    }

    #[test]
    fn test_pinned_skips_missing_versions() {
        let mut catalog = Catalog::from_seeds(["A", "B", "C"]);
        catalog.record("A", Track::Current, "1.0.0");
        catalog.record("C", Track::Current, "3.0.0");
        catalog.record("B", Track::Lts, "2.0.0");

        let pinned: Vec<_> = catalog.pinned(Track::Current).collect();
        assert_eq!(pinned, vec![("A", "1.0.0"), ("C", "3.0.0")]);
    }

    #[test]
    fn test_ids_sorted() {
        let catalog = Catalog::from_seeds(["b", "a", "c"]);
        assert_eq!(catalog.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_track_display() {
        assert_eq!(Track::Current.to_string(), "Current");
        assert_eq!(Track::Lts.to_string(), "LTS");
    }
}
