//! File loading and writing around the validator.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use crate::error::LoadError;

/// Read and parse a JSON file.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// `<path>.bak`, keeping the original extension.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Whether two paths name the same file. A path that does not exist yet
/// only matches itself.
pub fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Write `value` as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content).with_context(|| format!("could not write {}", path.display()))
}

/// Write the corrected collection to `out`.
///
/// When `out` is the input file itself, the input is first renamed to its
/// backup path. Returns the backup path if one was made.
pub fn write_corrected(
    input: &Path,
    out: &Path,
    corrected: &Value,
) -> anyhow::Result<Option<PathBuf>> {
    let backup = if same_file(input, out) {
        let backup = backup_path(input);
        fs::rename(input, &backup).with_context(|| {
            format!("could not back up {} to {}", input.display(), backup.display())
        })?;
        tracing::warn!(backup = %backup.display(), "original backed up");
        Some(backup)
    } else {
        None
    };

    write_json(out, corrected)?;
    tracing::info!(path = %out.display(), "corrected JSON written");
    Ok(backup)
}
