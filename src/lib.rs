//! jsoncat
//!
//! A Rust CLI tool for combining every JSON file under a directory tree
//! into a single pretty-printed JSON array. Files that fail to parse are
//! skipped with a diagnostic instead of aborting the batch.

pub mod collector;
pub mod error;
pub mod writer;

use std::path::Path;

// Re-export commonly used types
pub use collector::{collect_records, CollectorOptions, ScanOutcome, SkippedFile};
pub use error::{CombineError, CombineResult};
pub use writer::{write_array, DEFAULT_INDENT};

/// Combine every JSON file under `root` into one array at `output`,
/// using the default indentation.
pub fn combine_directory(
    root: &Path,
    output: &Path,
    options: &CollectorOptions,
) -> CombineResult<ScanOutcome> {
    let outcome = collector::collect_records(root, options)?;
    writer::write_array(&outcome.records, output, DEFAULT_INDENT)?;
    Ok(outcome)
}
