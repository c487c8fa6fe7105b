//! CSV export of the package catalog.

use crate::catalog::Package;
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes one CSV row per package, preceded by the `Id,LtsVersion,CurrentVersion`
/// header. Missing versions become empty cells.
pub fn write_catalog<'a, W, I>(writer: W, packages: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Package>,
{
    let mut csv = csv::Writer::from_writer(writer);
    let mut rows = 0usize;

    for package in packages {
        csv.serialize(package)?;
        rows += 1;
    }

    // serde only emits the header alongside the first record
    if rows == 0 {
        csv.write_record(["Id", "LtsVersion", "CurrentVersion"])?;
    }

    csv.flush()?;
    Ok(())
}

/// Exports packages to a CSV file at `path`, replacing any existing file.
///
/// # Examples
///
/// ```no_run
/// use dotver_core::{Catalog, Track, export};
///
/// # fn example() -> dotver_core::Result<()> {
/// let mut catalog = Catalog::from_seeds(["Microsoft.NETCore.App"]);
/// catalog.record("Microsoft.NETCore.App", Track::Current, "3.1.5");
/// export(catalog.packages(), "dotnet_supported_package_versions.csv")?;
/// # Ok(())
/// # }
/// ```
pub fn export<'a, I, P>(packages: I, path: P) -> Result<()>
where
    I: IntoIterator<Item = &'a Package>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_catalog(std::io::BufWriter::new(file), packages)?;
    tracing::info!("Wrote package versions to {}", path.display());
    Ok(())
}
