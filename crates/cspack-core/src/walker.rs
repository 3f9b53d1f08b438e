//! Filtered directory tree walking.
//!
//! Wraps [`walkdir`] traversal of the source root, applying exclusion
//! patterns and computing the archive-relative path for every surviving
//! entry.

use crate::PackConfig;
use crate::Result;
use crate::filters;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks a directory tree, yielding entries that pass the exclusion filters.
///
/// The walker:
/// - skips any entry whose root-relative path matches an exclude pattern,
/// - skips the root directory itself (it has no archive path),
/// - optionally skips one extra absolute path (the archive being written,
///   when it lands inside the tree being packed),
/// - surfaces traversal errors instead of panicking.
///
/// # Examples
///
/// ```no_run
/// use cspack_core::PackConfig;
/// use cspack_core::walker::FilteredWalker;
/// use std::path::Path;
///
/// let config = PackConfig::default();
/// let walker = FilteredWalker::new(Path::new("./project"), &config);
///
/// for entry in walker.walk() {
///     let entry = entry?;
///     println!("would add: {}", entry.archive_path.display());
/// }
/// # Ok::<(), cspack_core::PackError>(())
/// ```
pub struct FilteredWalker<'a> {
    root: &'a Path,
    config: &'a PackConfig,
    skip_path: Option<&'a Path>,
}

impl<'a> FilteredWalker<'a> {
    /// Creates a new filtered walker for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a PackConfig) -> Self {
        Self {
            root,
            config,
            skip_path: None,
        }
    }

    /// Excludes one absolute path from the walk.
    ///
    /// Used to keep the output archive out of its own entry set when it is
    /// created inside the directory being packed.
    #[must_use]
    pub fn with_skip_path(mut self, path: Option<&'a Path>) -> Self {
        self.skip_path = path;
        self
    }

    /// Returns an iterator over filtered directory entries.
    ///
    /// # Errors
    ///
    /// Entries error if the traversal fails (unreadable directory,
    /// filesystem loop) or metadata cannot be read.
    pub fn walk(&self) -> impl Iterator<Item = Result<FilteredEntry>> + '_ {
        WalkDir::new(self.root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if self.skip_path == Some(entry.path()) {
                        return None;
                    }

                    match self.build_filtered_entry(&entry) {
                        Ok(Some(filtered)) => Some(Ok(filtered)),
                        Ok(None) => None,
                        Err(e) => Some(Err(e)),
                    }
                }
                Err(e) => Some(Err(e.into())),
            })
    }

    /// Builds a `FilteredEntry`, or `Ok(None)` when the entry is filtered
    /// out.
    fn build_filtered_entry(&self, entry: &walkdir::DirEntry) -> Result<Option<FilteredEntry>> {
        let path = entry.path().to_path_buf();
        let archive_path = filters::compute_archive_path(&path, self.root)?;

        // The root itself carries an empty archive path
        if archive_path.as_os_str().is_empty() {
            return Ok(None);
        }

        if filters::should_skip(&archive_path, self.config) {
            return Ok(None);
        }

        let metadata = entry.metadata()?;

        let entry_type = if !self.config.follow_symlinks && entry.path_is_symlink() {
            let target = std::fs::read_link(&path)?;
            EntryType::Symlink { target }
        } else if metadata.is_dir() {
            EntryType::Directory
        } else {
            EntryType::File
        };

        let size = if entry_type == EntryType::File {
            metadata.len()
        } else {
            0
        };

        Ok(Some(FilteredEntry {
            path,
            archive_path,
            entry_type,
            size,
        }))
    }
}

/// A directory entry that passed all filtering rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntry {
    /// Full filesystem path to the entry.
    pub path: PathBuf,

    /// Root-relative path to use in the archive.
    pub archive_path: PathBuf,

    /// Type of entry.
    pub entry_type: EntryType,

    /// Size in bytes (0 for directories and symlinks).
    pub size: u64,
}

/// Type of directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryType {
    /// Regular file.
    File,

    /// Directory.
    Directory,

    /// Symbolic link with its target path.
    Symlink {
        /// Target of the symlink.
        target: PathBuf,
    },
}

/// Collects all filtered entries under `root` in a single traversal.
///
/// Collecting up front makes the total entry count available before any
/// archive bytes are written, which progress reporting needs.
///
/// # Errors
///
/// Returns an error if the traversal fails or metadata cannot be read.
pub fn collect_entries(
    root: &Path,
    config: &PackConfig,
    skip_path: Option<&Path>,
) -> Result<Vec<FilteredEntry>> {
    FilteredWalker::new(root, config)
        .with_skip_path(skip_path)
        .walk()
        .collect()
}
