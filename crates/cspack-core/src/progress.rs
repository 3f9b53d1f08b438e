//! Progress reporting hooks for pack operations.

use std::path::Path;

/// Callback interface for observing pack progress.
///
/// Implementations receive one `on_entry_start`/`on_entry_complete` pair per
/// archive entry, `on_bytes_written` for each chunk copied out of a source
/// file, and a single `on_complete` when the archive is finished.
pub trait ProgressCallback {
    /// Called before processing each entry.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of file data written to the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after an entry has been processed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once when the entire archive is finished.
    fn on_complete(&mut self);
}

/// No-op progress implementation for non-interactive callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
