//! Storage statistics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Sentinel reported as `last_updated` when the index has no entries
pub const NEVER: &str = "Never";

/// Snapshot of how much the vault holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageStats {
    /// Indexed versions
    pub total_versions: usize,
    /// Sum of the sizes of every record file on disk, indexed or not
    pub total_size_bytes: u64,
    /// `total_size_bytes` in MiB
    pub total_size_mb: f64,
    /// Base directory
    pub storage_path: PathBuf,
    /// Index timestamp, or [`NEVER`]
    pub last_updated: String,
}

impl StorageStats {
    /// Build stats from raw numbers
    pub fn new(
        total_versions: usize,
        total_size_bytes: u64,
        storage_path: PathBuf,
        last_updated: Option<String>,
    ) -> Self {
        let last_updated = match last_updated {
            Some(ts) if total_versions > 0 => ts,
            _ => NEVER.to_string(),
        };
        Self {
            total_versions,
            total_size_bytes,
            total_size_mb: total_size_bytes as f64 / (1024.0 * 1024.0),
            storage_path,
            last_updated,
        }
    }

    /// True if nothing has been saved (or everything was deleted)
    pub fn is_empty(&self) -> bool {
        self.total_versions == 0
    }

    /// Size scaled to the largest sensible unit, e.g. `12.3 KB`
    pub fn human_size(&self) -> String {
        human_bytes(self.total_size_bytes)
    }
}

impl fmt::Display for StorageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} versions, {} in {} (last updated: {})",
            self.total_versions,
            self.human_size(),
            self.storage_path.display(),
            self.last_updated
        )
    }
}

/// Format a byte count with binary units
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
