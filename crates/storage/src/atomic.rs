//! Atomic file replacement
//!
//! Writes go to `<file>.tmp`, are fsynced, then renamed over the target.
//! Readers see either the old file or the new one, never a torn write.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tailor_core::{VaultError, VaultResult};

/// Temp path used while replacing `path`
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Replace `path` with `bytes`
pub fn write_atomic(path: &Path, bytes: &[u8]) -> VaultResult<()> {
    let tmp = temp_path(path);
    let result = write_and_sync(&tmp, bytes).and_then(|_| {
        fs::rename(&tmp, path)
            .map_err(|e| VaultError::io(format!("renaming {} into place", tmp.display()), e))
    });

    if result.is_err() {
        if let Err(e) = fs::remove_file(&tmp) {
            tracing::debug!(target: "tailor::storage", path = %tmp.display(), error = %e, "Could not remove temp file");
        }
    }
    result
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> VaultResult<()> {
    let context = || format!("writing {}", path.display());
    let mut file = File::create(path).map_err(|e| VaultError::io(context(), e))?;
    file.write_all(bytes).map_err(|e| VaultError::io(context(), e))?;
    file.sync_all().map_err(|e| VaultError::io(context(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.json");

        write_atomic(&path, b"first").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");

        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("/v/versions_index.json")),
            PathBuf::from("/v/versions_index.json.tmp")
        );
    }

    #[test]
    fn test_write_into_missing_dir_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("a.json");
        let err = write_atomic(&path, b"x").unwrap_err();
        assert_eq!(err.kind(), tailor_core::ErrorKind::IoFailure);
        assert!(!path.exists());
    }
}
