//! Directory listing helpers shared by classification and artifact lookup.

use crate::error::{PackagerError, Result};
use std::path::Path;

/// Top-level entry names of `dir`, files and directories alike, sorted.
///
/// Names that are not valid UTF-8 are converted lossily.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PackagerError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PackagerError::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// First entry of `dir`, in sorted order, whose name contains `needle`.
pub fn first_containing(dir: &Path, needle: &str) -> Result<String> {
    if !dir.is_dir() {
        return Err(PackagerError::ArtifactNotFound(format!(
            "directory '{}' does not exist",
            dir.display()
        )));
    }

    list_entries(dir)?
        .into_iter()
        .find(|name| name.contains(needle))
        .ok_or_else(|| {
            PackagerError::ArtifactNotFound(format!(
                "no entry containing '{}' in '{}'",
                needle,
                dir.display()
            ))
        })
}
