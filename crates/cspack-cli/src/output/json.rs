//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use cspack_core::PackReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_start(&self) {
        // A single JSON document is emitted when packing completes
    }

    fn format_creation_result(&self, output_path: &Path, report: &PackReport) -> Result<()> {
        #[derive(Serialize)]
        struct PackOutput {
            output_path: String,
            files_added: usize,
            directories_added: usize,
            files_skipped: usize,
            bytes_written: u64,
            bytes_archived: u64,
            compression_ratio: f64,
            compression_percentage: f64,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = PackOutput {
            output_path: output_path.display().to_string(),
            files_added: report.files_added,
            directories_added: report.directories_added,
            files_skipped: report.files_skipped,
            bytes_written: report.bytes_written,
            bytes_archived: report.bytes_archived,
            compression_ratio: report.compression_ratio(),
            compression_percentage: report.compression_percentage(),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("pack", data);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("pack", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
