//! Progress bar implementation for pack operations.

use console::Term;
use cspack_core::ProgressCallback;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Draws to stderr so stdout stays limited to the export contract lines.
/// The bar length is learned from the first `on_entry_start` callback and
/// the bar is cleared on completion or drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a new CLI progress bar with the given message.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(0);

        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} files ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        bar.set_message(message.to_string());

        Self { bar }
    }

    /// Checks if a progress bar should be drawn (stderr TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, _current: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
    }

    fn on_bytes_written(&mut self, _bytes: u64) {
        // Entry-level granularity is enough for a project-sized tree
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_entries() {
        let mut progress = CliProgress::new("Packing");

        progress.on_entry_start(Path::new("a.txt"), 2, 1);
        progress.on_entry_complete(Path::new("a.txt"));
        progress.on_entry_start(Path::new("b.txt"), 2, 2);
        progress.on_entry_complete(Path::new("b.txt"));

        assert_eq!(progress.bar.length(), Some(2));
        assert_eq!(progress.bar.position(), 2);

        progress.on_complete();
    }
}
