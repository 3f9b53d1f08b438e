//! Configuration for project packing operations.

use crate::PackError;
use crate::Result;

/// Default exclusion globs applied to every pack operation.
///
/// In order: version-control metadata, Replit IDE configuration, Python
/// bytecode caches, Nix environment metadata.
pub const DEFAULT_EXCLUDE_PATTERNS: [&str; 4] = [".git", ".replit", "__pycache__", "*.nix"];

/// Configuration for packing a project directory into an archive.
///
/// # Examples
///
/// ```
/// use cspack_core::PackConfig;
///
/// // Defaults match the project export contract
/// let config = PackConfig::default();
/// assert!(config.exclude_patterns.iter().any(|p| p == ".git"));
///
/// // Customize for specific needs
/// let custom = PackConfig::default()
///     .with_follow_symlinks(true)
///     .with_compression_level(9);
/// ```
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Patterns to exclude from the archive.
    ///
    /// Matched against every component of an entry's root-relative path.
    ///
    /// Default: [`DEFAULT_EXCLUDE_PATTERNS`].
    pub exclude_patterns: Vec<String>,

    /// Follow symlinks when adding files to the archive.
    ///
    /// Default: `false` (symlinks are skipped with a report warning).
    pub follow_symlinks: bool,

    /// Maximum size for a single file in bytes.
    ///
    /// Files larger than this limit are skipped with a report warning.
    /// `None` means no limit.
    ///
    /// Default: `None`.
    pub max_file_size: Option<u64>,

    /// Compression level (0-9).
    ///
    /// Level 0 stores entries without compression; 1-9 deflate with
    /// increasing effort. `None` uses the deflate default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Preserve unix file permissions in archive entries.
    ///
    /// Default: `true`.
    pub preserve_permissions: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            follow_symlinks: false,
            max_file_size: None,
            compression_level: Some(6),
            preserve_permissions: true,
        }
    }
}

impl PackConfig {
    /// Creates a `PackConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the exclude patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Appends additional exclude patterns to the current set.
    #[must_use]
    pub fn with_extra_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets whether to follow symlinks.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets the maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, max_size: Option<u64>) -> Self {
        self.max_file_size = max_size;
        self
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is not in the range 0-9. Use [`Self::validate`]
    /// for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!(level <= 9, "compression level must be 0-9");
        self.compression_level = Some(level);
        self
    }

    /// Sets whether to preserve permissions.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidCompressionLevel`] if the level is set
    /// and outside 0-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(PackError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
