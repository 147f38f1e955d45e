//! Paths inside a vault directory

use std::fs;
use std::path::{Path, PathBuf};
use tailor_core::{VaultError, VaultResult, VersionId};

/// Index file name
pub const INDEX_FILE: &str = "versions_index.json";
/// Advisory lock file name
pub const LOCK_FILE: &str = "versions.lock";
/// Sequence high-water mark sidecar
pub const SEQUENCE_FILE: &str = "versions.seq";
/// Optional configuration file name
pub const CONFIG_FILE: &str = "vault.toml";

/// Resolves every file the vault uses relative to one base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    base: PathBuf,
}

impl StorageLayout {
    /// Layout rooted at `base` (nothing is created yet)
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Create the base directory if it does not exist
    pub fn ensure(&self) -> VaultResult<()> {
        fs::create_dir_all(&self.base).map_err(|e| {
            VaultError::io(
                format!("creating storage directory {}", self.base.display()),
                e,
            )
        })
    }

    /// The base directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>/versions_index.json`
    pub fn index_path(&self) -> PathBuf {
        self.base.join(INDEX_FILE)
    }

    /// `<base>/versions.lock`
    pub fn lock_path(&self) -> PathBuf {
        self.base.join(LOCK_FILE)
    }

    /// `<base>/versions.seq`
    pub fn sequence_path(&self) -> PathBuf {
        self.base.join(SEQUENCE_FILE)
    }

    /// `<base>/vault.toml`
    pub fn config_path(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }

    /// `<base>/<id>.json`
    pub fn record_path(&self, id: &VersionId) -> PathBuf {
        self.base.join(id.record_file_name())
    }

    /// If `path` names a record file in this layout, the id it belongs to
    ///
    /// Only `<uuid>.json` stems are recognized, so the index and any temp
    /// files are skipped.
    pub fn record_id_of(path: &Path) -> Option<VersionId> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        VersionId::parse(stem).ok()
    }
}
