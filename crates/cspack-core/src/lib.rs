//! Project packing library for the CryptoScalp AI workspace export tool.
//!
//! `cspack-core` walks a project directory, filters out version-control
//! metadata, IDE configuration, bytecode caches, and environment-manager
//! files, and writes the remaining tree into a zip archive.
//!
//! # Examples
//!
//! ```no_run
//! use cspack_core::PackConfig;
//! use cspack_core::pack_project;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::default();
//! let report = pack_project(".", "cryptoscalp_project.zip", &config)?;
//! println!("packed {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod filters;
pub mod progress;
pub mod report;
pub mod walker;

// Re-export main API types
pub use api::pack_project;
pub use archive::create_zip;
pub use archive::create_zip_with_progress;
pub use config::DEFAULT_EXCLUDE_PATTERNS;
pub use config::PackConfig;
pub use error::PackError;
pub use error::Result;
pub use progress::NoProgress;
pub use progress::ProgressCallback;
pub use report::PackReport;
pub use walker::EntryType;
pub use walker::FilteredEntry;
pub use walker::FilteredWalker;
