use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CombineResult;

/// Return true if the path is a regular file whose name ends in .json.
/// The comparison is case-sensitive, so FOO.JSON is not a candidate. A
/// file named exactly `.json` still matches the suffix.
pub fn is_json_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".json"))
}

/// Find every JSON file under a directory tree. Results are sorted
/// lexicographically so the aggregate order does not depend on the
/// platform's directory enumeration order.
pub fn find_json_files(root: &Path) -> CombineResult<Vec<PathBuf>> {
    let mut json_files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if is_json_file(entry.path()) {
            json_files.push(entry.path().to_path_buf());
        }
    }

    json_files.sort();
    Ok(json_files)
}
