//! Serialization of the aggregate to the output file

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{CombineError, CombineResult};

/// Spaces per indentation level when the caller does not override it
pub const DEFAULT_INDENT: usize = 4;

/// Write the records as one JSON array to `path`, truncating any existing
/// content. `indent` is the number of spaces per level; 0 selects compact
/// output. Non-ASCII characters are written literally, never escaped.
pub fn write_array(records: &[Value], path: &Path, indent: usize) -> CombineResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CombineError::write_output(path, e))?;
        }
    }

    let file = File::create(path).map_err(|e| CombineError::write_output(path, e))?;
    let mut out = BufWriter::new(file);

    if indent == 0 {
        serde_json::to_writer(&mut out, records)?;
    } else {
        let indent_bytes = vec![b' '; indent];
        let formatter = PrettyFormatter::with_indent(&indent_bytes);
        let mut serializer = Serializer::with_formatter(&mut out, formatter);
        records.serialize(&mut serializer)?;
    }

    out.flush().map_err(|e| CombineError::write_output(path, e))?;
    Ok(())
}
