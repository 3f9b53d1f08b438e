//! Error conversion utilities for the CLI.
//!
//! Converts cspack-core's typed errors into contextual anyhow errors naming
//! the paths involved. Failures still terminate the process with a non-zero
//! status; no recovery is attempted.

use anyhow::anyhow;
use cspack_core::PackError;
use std::path::Path;

/// Converts a `PackError` into an anyhow error with path context.
pub fn convert_pack_error(err: PackError, root: &Path, output: &Path) -> anyhow::Error {
    match err {
        PackError::SourceNotFound { path } => {
            anyhow!("source directory not found: {}", path.display())
        }
        PackError::Io(io_err) => {
            anyhow!(
                "I/O error while packing '{}' into '{}': {io_err}",
                root.display(),
                output.display()
            )
        }
        PackError::Zip(zip_err) => {
            anyhow!(
                "failed to write archive '{}': {zip_err}",
                output.display()
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("error packing directory '{}'", root.display())),
    }
}
