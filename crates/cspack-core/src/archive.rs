//! Zip archive creation.
//!
//! Writes the filtered entry set of a project directory into a zip archive
//! with configurable compression, streaming file contents through a reused
//! 64 KB buffer.

use crate::PackConfig;
use crate::PackError;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::progress::NoProgress;
use crate::walker::EntryType;
use crate::walker::FilteredEntry;
use crate::walker::collect_entries;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates a zip archive of `root` at `output`.
///
/// An existing file at `output` is overwritten. If `output` lands inside
/// `root`, it is excluded from its own entry set.
///
/// # Examples
///
/// ```no_run
/// use cspack_core::PackConfig;
/// use cspack_core::archive::create_zip;
/// use std::path::Path;
///
/// let config = PackConfig::default();
/// let report = create_zip(Path::new("cryptoscalp_project.zip"), Path::new("."), &config)?;
/// println!("added {} files", report.files_added);
/// # Ok::<(), cspack_core::PackError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist or is not a directory
/// - the output file cannot be created
/// - traversal or zip writing fails
pub fn create_zip<P: AsRef<Path>, Q: AsRef<Path>>(
    output: P,
    root: Q,
    config: &PackConfig,
) -> Result<PackReport> {
    let mut progress = NoProgress;
    create_zip_with_progress(output, root, config, &mut progress)
}

/// Creates a zip archive with progress reporting.
///
/// The `progress` callback receives `on_entry_start`/`on_entry_complete`
/// per entry, `on_bytes_written` per copied chunk, and one final
/// `on_complete`.
///
/// # Errors
///
/// Same conditions as [`create_zip`].
pub fn create_zip_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    output: P,
    root: Q,
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    config.validate()?;

    let root = root.as_ref();
    if !root.is_dir() {
        return Err(PackError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }
    let root = root.canonicalize()?;

    let output = output.as_ref();
    let file = File::create(output)?;
    // The archive now exists inside the tree if output is under root; keep
    // it out of its own entry set.
    let skip = output.canonicalize().ok();

    let entries = collect_entries(&root, config, skip.as_deref())?;
    let total_entries = entries.len();

    let mut zip = ZipWriter::new(file);
    let mut report = PackReport::default();
    let start = std::time::Instant::now();
    let options = base_file_options(config);
    let mut buffer = vec![0u8; 64 * 1024];

    for (idx, entry) in entries.iter().enumerate() {
        progress.on_entry_start(&entry.archive_path, total_entries, idx + 1);

        match &entry.entry_type {
            EntryType::File => {
                add_file(&mut zip, entry, config, &mut report, options, progress, &mut buffer)?;
            }
            EntryType::Directory => {
                // Zip requires explicit directory entries with trailing /
                let dir_path = format!("{}/", normalize_zip_path(&entry.archive_path)?);
                zip.add_directory(dir_path, options)?;
                report.directories_added += 1;
            }
            EntryType::Symlink { .. } => {
                // Zip has no symlink entry here; record the omission
                report.files_skipped += 1;
                report.add_warning(format!("Skipped symlink: {}", entry.path.display()));
            }
        }

        progress.on_entry_complete(&entry.archive_path);
    }

    zip.finish()?;

    report.bytes_archived = std::fs::metadata(output)?.len();
    report.duration = start.elapsed();

    progress.on_complete();

    Ok(report)
}

/// Builds zip entry options from the configured compression level.
fn base_file_options(config: &PackConfig) -> SimpleFileOptions {
    if config.compression_level == Some(0) {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        let level = config.compression_level.unwrap_or(6);
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    }
}

/// Streams a single file into the archive.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &FilteredEntry,
    config: &PackConfig,
    report: &mut PackReport,
    options: SimpleFileOptions,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<()> {
    let mut file = File::open(&entry.path)?;
    let metadata = file.metadata()?;
    let size = metadata.len();

    if let Some(max_size) = config.max_file_size
        && size > max_size
    {
        report.files_skipped += 1;
        report.add_warning(format!(
            "Skipped file (too large): {} ({size} bytes)",
            entry.path.display()
        ));
        return Ok(());
    }

    let file_options = if config.preserve_permissions {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            options.unix_permissions(metadata.permissions().mode())
        }
        #[cfg(not(unix))]
        {
            options
        }
    } else {
        options
    };

    let archive_name = normalize_zip_path(&entry.archive_path)?;
    zip.start_file(archive_name, file_options)?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    report.files_added += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

/// Normalizes an archive path to zip format.
///
/// Zip requires forward slashes regardless of platform.
fn normalize_zip_path(path: &Path) -> Result<String> {
    let path_str = path.to_str().ok_or_else(|| PackError::NonUtf8Path {
        path: path.to_path_buf(),
    })?;

    #[cfg(windows)]
    let normalized = path_str.replace('\\', "/");

    #[cfg(not(windows))]
    let normalized = path_str.to_string();

    Ok(normalized)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry_names(archive: &Path) -> Vec<String> {
        let file = File::open(archive).unwrap();
        let zip = zip::ZipArchive::new(file).unwrap();
        zip.file_names().map(ToString::to_string).collect()
    }

    #[test]
    fn test_create_zip_basic_tree() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("main.py"), "print('hi')").unwrap();
        fs::create_dir(source.path().join("utils")).unwrap();
        fs::write(source.path().join("utils/config.py"), "KEYS = {}").unwrap();

        let out = TempDir::new().unwrap();
        let output = out.path().join("project.zip");

        let config = PackConfig::default();
        let report = create_zip(&output, source.path(), &config).unwrap();

        assert_eq!(report.files_added, 2);
        assert_eq!(report.directories_added, 1);
        assert!(report.bytes_written > 0);
        assert!(report.bytes_archived > 0);
        assert!(output.exists());

        let names = entry_names(&output);
        assert!(names.contains(&"main.py".to_string()));
        assert!(names.contains(&"utils/".to_string()));
        assert!(names.contains(&"utils/config.py".to_string()));
    }

    #[test]
    fn test_create_zip_applies_default_excludes() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "keep").unwrap();
        fs::create_dir(source.path().join(".git")).unwrap();
        fs::write(source.path().join(".git/config"), "[core]").unwrap();
        fs::write(source.path().join(".replit"), "run").unwrap();
        fs::write(source.path().join("replit.nix"), "{}").unwrap();

        let out = TempDir::new().unwrap();
        let output = out.path().join("project.zip");

        let report = create_zip(&output, source.path(), &PackConfig::default()).unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(entry_names(&output), vec!["a.txt".to_string()]);
    }

    #[test]
    fn test_create_zip_empty_directory() {
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("empty.zip");

        let report = create_zip(&output, source.path(), &PackConfig::default()).unwrap();

        assert_eq!(report.total_items(), 0);
        assert!(output.exists());
        assert!(entry_names(&output).is_empty());
    }

    #[test]
    fn test_create_zip_missing_source() {
        let out = TempDir::new().unwrap();
        let output = out.path().join("never.zip");

        let result = create_zip(&output, Path::new("/no/such/source"), &PackConfig::default());
        assert!(matches!(result, Err(PackError::SourceNotFound { .. })));
    }

    #[test]
    fn test_create_zip_overwrites_existing_archive() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "v1").unwrap();

        let out = TempDir::new().unwrap();
        let output = out.path().join("project.zip");

        create_zip(&output, source.path(), &PackConfig::default()).unwrap();
        fs::write(source.path().join("b.txt"), "v2").unwrap();
        create_zip(&output, source.path(), &PackConfig::default()).unwrap();

        let names = entry_names(&output);
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"b.txt".to_string()));
    }

    #[test]
    fn test_create_zip_output_inside_source_excluded() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "keep").unwrap();
        let output = source.path().join("cryptoscalp_project.zip");

        let report = create_zip(&output, source.path(), &PackConfig::default()).unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(entry_names(&output), vec!["a.txt".to_string()]);
    }

    #[test]
    fn test_create_zip_stored_at_level_zero() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("data.txt"), "abc".repeat(100)).unwrap();

        let out = TempDir::new().unwrap();
        let output = out.path().join("stored.zip");

        let config = PackConfig::default().with_compression_level(0);
        create_zip(&output, source.path(), &config).unwrap();

        let file = File::open(&output).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        let entry = zip.by_name("data.txt").unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Stored);
        assert_eq!(entry.size(), entry.compressed_size());
    }

    #[test]
    fn test_create_zip_skips_oversized_files() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("small.txt"), "tiny").unwrap();
        fs::write(source.path().join("large.bin"), "a".repeat(1000)).unwrap();

        let out = TempDir::new().unwrap();
        let output = out.path().join("limited.zip");

        let config = PackConfig::default().with_max_file_size(Some(100));
        let report = create_zip(&output, source.path(), &config).unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.files_skipped, 1);
        assert!(report.has_warnings());
        assert_eq!(entry_names(&output), vec!["small.txt".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_zip_skips_symlinks_with_warning() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("target.txt"), "content").unwrap();
        std::os::unix::fs::symlink(
            source.path().join("target.txt"),
            source.path().join("link.txt"),
        )
        .unwrap();

        let out = TempDir::new().unwrap();
        let output = out.path().join("links.zip");

        let report = create_zip(&output, source.path(), &PackConfig::default()).unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.files_skipped, 1);
        assert!(report.warnings[0].contains("Skipped symlink"));
        assert_eq!(entry_names(&output), vec!["target.txt".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_zip_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let source = TempDir::new().unwrap();
        let script = source.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let out = TempDir::new().unwrap();
        let output = out.path().join("perms.zip");

        create_zip(&output, source.path(), &PackConfig::default()).unwrap();

        let file = File::open(&output).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        let entry = zip.by_name("run.sh").unwrap();
        assert_eq!(entry.unix_mode().unwrap() & 0o777, 0o755);
    }

    #[test]
    fn test_normalize_zip_path() {
        assert_eq!(
            normalize_zip_path(Path::new("utils/config.py")).unwrap(),
            "utils/config.py"
        );
        assert_eq!(normalize_zip_path(Path::new("a.txt")).unwrap(), "a.txt");
    }
}
