//! Candidate discovery and per-file JSON parsing

pub mod directory;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CombineError, CombineResult};

/// Options controlling a directory scan
#[derive(Debug, Clone, Default)]
pub struct CollectorOptions {
    /// Abort on the first unreadable or unparsable candidate
    pub strict: bool,
    /// Print each aggregated file as it is processed
    pub verbose: bool,
}

/// A candidate file that contributed nothing, and why
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything one scan produced: the parsed records plus the candidates
/// that had to be skipped
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Successfully parsed values, in sorted candidate-path order
    pub records: Vec<Value>,
    /// Candidates that failed to read or parse
    pub skipped: Vec<SkippedFile>,
}

/// Read one candidate file and parse it as a single JSON document.
/// The value keeps its native JSON type; no shape is enforced.
pub fn read_record(path: &Path) -> CombineResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| CombineError::read(path, e))?;
    serde_json::from_str(&content).map_err(|e| CombineError::parse(path, e))
}

/// Walk `root`, parse every .json file, and accumulate the results.
///
/// A candidate that fails to read or parse is reported to stderr and
/// skipped; the rest of the batch still runs. With `strict` set the first
/// such failure aborts the scan instead.
pub fn collect_records(root: &Path, options: &CollectorOptions) -> CombineResult<ScanOutcome> {
    let candidates = directory::find_json_files(root)?;
    let mut outcome = ScanOutcome::default();

    for path in candidates {
        match read_record(&path) {
            Ok(value) => {
                if options.verbose {
                    println!("✓ {}", path.display());
                }
                outcome.records.push(value);
            }
            Err(err) => {
                if options.strict {
                    return Err(err);
                }
                eprintln!("✗ {}", err);
                outcome.skipped.push(SkippedFile {
                    path,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(outcome)
}
