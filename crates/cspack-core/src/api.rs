//! High-level packing API.

use crate::PackConfig;
use crate::PackReport;
use crate::Result;
use crate::archive;
use std::path::Path;

/// Packs a project directory into a zip archive.
///
/// Convenience wrapper over [`archive::create_zip`] with the argument order
/// callers read naturally: source first, destination second.
///
/// # Examples
///
/// ```no_run
/// use cspack_core::PackConfig;
/// use cspack_core::pack_project;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PackConfig::default();
/// let report = pack_project(".", "cryptoscalp_project.zip", &config)?;
/// println!("packed {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the source directory does not exist, the output file
/// cannot be created, or archive writing fails.
pub fn pack_project<P: AsRef<Path>, Q: AsRef<Path>>(
    root: P,
    output: Q,
    config: &PackConfig,
) -> Result<PackReport> {
    archive::create_zip(output, root, config)
}
