//! Human-readable output formatter.
//!
//! The start and completion lines are the tool's export contract and are
//! printed verbatim on stdout; statistics and warnings are opt-in or routed
//! to stderr so the two-line contract holds for any tree.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use cspack_core::PackReport;
use std::path::Path;

const START_MESSAGE: &str = "Creating zip file of your CryptoScalp AI project...";

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_start(&self) {
        if self.quiet {
            return;
        }

        let _ = self.term.write_line(START_MESSAGE);
    }

    fn format_creation_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        if !self.quiet {
            let _ = self
                .term
                .write_line(&format!("Done! File created: {}", output_path.display()));

            if self.verbose {
                let _ = self.term.write_line("");
                let _ = self.term.write_line(&format!(
                    "  Files added:      {}",
                    Self::format_number(report.files_added)
                ));
                let _ = self.term.write_line(&format!(
                    "  Directories:      {}",
                    Self::format_number(report.directories_added)
                ));
                let _ = self.term.write_line(&format!(
                    "  Total size:       {}",
                    Self::format_size(report.bytes_written)
                ));
                let _ = self.term.write_line(&format!(
                    "  Archive size:     {}",
                    Self::format_size(report.bytes_archived)
                ));
                if report.bytes_archived < report.bytes_written {
                    let _ = self.term.write_line(&format!(
                        "  Compression:      {:.1}%",
                        report.compression_percentage()
                    ));
                }
                if report.files_skipped > 0 {
                    let _ = self.term.write_line(&format!(
                        "  Files skipped:    {}",
                        Self::format_number(report.files_skipped)
                    ));
                }
                let _ = self
                    .term
                    .write_line(&format!("  Duration:         {:?}", report.duration));
            }
        }

        if report.has_warnings() && !self.quiet {
            let err = Term::stderr();
            let _ = err.write_line(&format!("{}", style("Warnings:").yellow().bold()));
            for warning in &report.warnings {
                let _ = err.write_line(&format!("  - {warning}"));
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let _ = Term::stderr().write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let _ = Term::stderr().write_line(&format!("{} {message}", style("⚠").yellow().bold()));
    }
}
