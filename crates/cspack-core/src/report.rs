//! Pack operation reporting.

use std::time::Duration;

/// Report of a pack operation.
///
/// Contains statistics and metadata about the archive that was produced.
///
/// # Examples
///
/// ```
/// use cspack_core::PackReport;
///
/// let mut report = PackReport::default();
/// report.files_added = 10;
/// report.bytes_written = 1024;
/// report.bytes_archived = 512;
///
/// assert_eq!(report.compression_ratio(), 2.0);
/// assert_eq!(report.compression_percentage(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Number of files added to the archive.
    pub files_added: usize,

    /// Number of directories added to the archive.
    pub directories_added: usize,

    /// Number of entries skipped (symlinks, oversized files).
    pub files_skipped: usize,

    /// Total bytes read from source files (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive file on disk.
    pub bytes_archived: u64,

    /// Duration of the pack operation.
    pub duration: Duration,

    /// Warnings generated during packing.
    pub warnings: Vec<String>,
}

impl PackReport {
    /// Creates a new empty pack report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the compression ratio (uncompressed / archived).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_archived == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_archived as f64
    }

    /// Returns the compression percentage (space saved).
    ///
    /// Returns 0.0 if nothing was written, or if the archive is at least as
    /// large as its contents (zip headers on tiny trees).
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        let saved = self.bytes_written.saturating_sub(self.bytes_archived);
        (saved as f64 / self.bytes_written as f64) * 100.0
    }

    /// Returns total number of entries added.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_added + self.directories_added
    }
}
