//! Store configuration
//!
//! Options can come from three places, later ones winning:
//! 1. built-in defaults
//! 2. `<storage dir>/vault.toml`, if present
//! 3. builder calls on [`StoreConfig`]
//!
//! ```toml
//! file_lock = true
//! pretty_json = false
//! default_style = "conservative"
//! default_tier = "premium"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tailor_core::{VaultError, VaultResult};
use tailor_storage::StorageLayout;

/// Environment variable that overrides the default storage directory
pub const VAULT_DIR_ENV: &str = "TAILOR_VAULT_DIR";

/// Directory name used under `$HOME` when nothing else is configured
pub const DEFAULT_DIR_NAME: &str = "resume_tailor_versions";

/// Default storage directory
///
/// `$TAILOR_VAULT_DIR` if set, else `$HOME/resume_tailor_versions`, else a
/// relative `resume_tailor_versions`.
pub fn default_storage_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(VAULT_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    match std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(DEFAULT_DIR_NAME),
        None => PathBuf::from(DEFAULT_DIR_NAME),
    }
}

/// Options for opening a [`VersionStore`](crate::VersionStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base directory; never read from `vault.toml`
    #[serde(skip)]
    pub storage_path: PathBuf,
    /// Take an advisory file lock around index updates
    pub file_lock: bool,
    /// Pretty-print index and record JSON
    pub pretty_json: bool,
    /// Style recorded when a save does not name one
    pub default_style: String,
    /// Tier recorded when a save does not name one
    pub default_tier: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_dir(),
            file_lock: false,
            pretty_json: true,
            default_style: "balanced".to_string(),
            default_tier: "standard".to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults, rooted at `path`
    pub fn default_for(path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: path.into(),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `<path>/vault.toml` when it exists
    pub fn load(path: impl AsRef<Path>) -> VaultResult<Self> {
        let path = path.as_ref();
        let file = StorageLayout::new(path).config_path();
        let text = match fs::read_to_string(&file) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default_for(path));
            }
            Err(e) => {
                return Err(VaultError::io(
                    format!("reading config {}", file.display()),
                    e,
                ))
            }
        };
        let mut config = Self::from_toml(&text).map_err(|reason| VaultError::Config {
            path: file.clone(),
            reason,
        })?;
        config.storage_path = path.to_path_buf();
        tracing::debug!(target: "tailor::store", path = %file.display(), "Loaded vault config");
        Ok(config)
    }

    fn from_toml(text: &str) -> Result<Self, String> {
        let config: StoreConfig = toml::from_str(text).map_err(|e| e.to_string())?;
        if config.default_style.trim().is_empty() {
            return Err("default_style must not be empty".to_string());
        }
        if config.default_tier.trim().is_empty() {
            return Err("default_tier must not be empty".to_string());
        }
        Ok(config)
    }

    /// Render the file-backed options as TOML
    pub fn to_toml(&self) -> VaultResult<String> {
        toml::to_string(self).map_err(|e| VaultError::Config {
            path: StorageLayout::new(&self.storage_path).config_path(),
            reason: e.to_string(),
        })
    }

    /// Enable or disable the advisory file lock
    pub fn with_file_lock(mut self, enabled: bool) -> Self {
        self.file_lock = enabled;
        self
    }

    /// Choose pretty or compact JSON
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Set the default optimization style
    pub fn with_default_style(mut self, style: impl Into<String>) -> Self {
        self.default_style = style.into();
        self
    }

    /// Set the default optimization tier
    pub fn with_default_tier(mut self, tier: impl Into<String>) -> Self {
        self.default_tier = tier.into();
        self
    }
}
