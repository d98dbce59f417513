pub mod walker;

pub use walker::{find_source_files, FileWalker};

use crate::errors::{MigrateError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Read a source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| MigrateError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| MigrateError::Decode {
        path: path.to_path_buf(),
    })
}

/// Replace the contents of `path` without ever exposing a partial write.
///
/// The new content is written to a temporary file in the target's directory,
/// given the target's permissions and renamed over it. On failure the
/// temporary file is removed and the original is left as it was. Symbolic
/// links are followed so the link itself survives.
///
/// A target the caller cannot open for writing is rejected up front, even
/// though the directory would allow the rename.
///
/// The rename installs a new inode: hard links to the old file keep the old
/// content, and owner and group become those of the current user.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_write_target(path)?;
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    ensure_writable(&target)?;
    let permissions = fs::metadata(&target)
        .map_err(|e| MigrateError::io(&target, e))?
        .permissions();

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| MigrateError::io(dir, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| MigrateError::io(temp.path(), e))?;
    fs::set_permissions(temp.path(), permissions).map_err(|e| MigrateError::io(temp.path(), e))?;

    temp.persist(&target)
        .map_err(|e| MigrateError::io(&target, e.error))?;
    Ok(())
}

fn ensure_writable(target: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .open(target)
        .map(drop)
        .map_err(|e| MigrateError::io(target, e))
}

fn resolve_write_target(path: &Path) -> Result<PathBuf> {
    let metadata = fs::symlink_metadata(path).map_err(|e| MigrateError::io(path, e))?;
    if metadata.file_type().is_symlink() {
        fs::canonicalize(path).map_err(|e| MigrateError::io(path, e))
    } else {
        Ok(path.to_path_buf())
    }
}
