//! Path filtering logic for project packing.
//!
//! Exclusion patterns are matched against every component of an entry's
//! root-relative path, so excluding a directory name removes its whole
//! subtree from the archive.

use crate::PackConfig;
use crate::PackError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// Checks if a root-relative path should be skipped under the configuration.
///
/// # Examples
///
/// ```
/// use cspack_core::PackConfig;
/// use cspack_core::filters;
/// use std::path::Path;
///
/// let config = PackConfig::default();
/// assert!(filters::should_skip(Path::new(".git/config"), &config));
/// assert!(filters::should_skip(Path::new("replit.nix"), &config));
/// assert!(!filters::should_skip(Path::new("main.py"), &config));
/// ```
#[must_use]
pub fn should_skip(relative_path: &Path, config: &PackConfig) -> bool {
    config
        .exclude_patterns
        .iter()
        .any(|pattern| matches_pattern(relative_path, pattern))
}

/// Matches a path against a glob-style pattern.
///
/// Supports:
/// - Exact match: `".git"` matches the component `.git`
/// - Suffix wildcard: `"*.nix"` matches components ending with `.nix`
/// - Prefix wildcard: `"temp*"` matches components starting with `temp`
/// - Component match: the pattern is tested against every path component,
///   plus the full path string
///
/// # Examples
///
/// ```
/// use cspack_core::filters;
/// use std::path::Path;
///
/// assert!(filters::matches_pattern(Path::new(".git"), ".git"));
/// assert!(filters::matches_pattern(Path::new(".git/hooks/pre-commit"), ".git"));
/// assert!(filters::matches_pattern(Path::new("env/replit.nix"), "*.nix"));
/// assert!(!filters::matches_pattern(Path::new(".gitignore"), ".git"));
/// ```
#[must_use]
pub fn matches_pattern(path: &Path, pattern: &str) -> bool {
    for component in path.components() {
        if let Some(component_str) = component.as_os_str().to_str()
            && pattern_matches(component_str, pattern)
        {
            return true;
        }
    }

    // Also check the full path string for patterns like "*.ext"
    if let Some(path_str) = path.to_str()
        && pattern_matches(path_str, pattern)
    {
        return true;
    }

    false
}

/// Matches a string against a simple glob pattern.
fn pattern_matches(s: &str, pattern: &str) -> bool {
    if pattern == s {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        // Prefix wildcard: "temp*"
        return s.starts_with(prefix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        // Suffix wildcard: "*.nix"
        return s.ends_with(suffix);
    }

    false
}

/// Computes the archive path for a source path.
///
/// The archive path is the source path relative to the root directory being
/// packed.
///
/// # Errors
///
/// Returns [`PackError::InvalidPath`] if the source path is not under the
/// root directory.
///
/// # Examples
///
/// ```
/// use cspack_core::filters;
/// use std::path::Path;
///
/// let root = Path::new("/home/user/project");
/// let source = Path::new("/home/user/project/utils/config.py");
///
/// let archive_path = filters::compute_archive_path(source, root).unwrap();
/// assert_eq!(archive_path, Path::new("utils/config.py"));
/// ```
pub fn compute_archive_path(source_path: &Path, root: &Path) -> Result<PathBuf> {
    source_path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| PackError::InvalidPath {
            path: source_path.to_path_buf(),
            root: root.to_path_buf(),
        })
}
