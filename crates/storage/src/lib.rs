//! Durable storage for tailorvault
//!
//! This crate owns every byte the vault puts on disk:
//! - `StorageLayout`: where the index, lock, config and record files live
//! - `write_atomic`: temp-file + fsync + rename writes
//! - `MetadataIndex` / `IndexFile`: the id → metadata cache with its
//!   last-updated stamp and sequence high-water mark
//! - `SequenceMark`: the high-water mark sidecar that outlives the index
//! - `RecordFiles`: one pretty-printed JSON file per version
//! - `IndexLock`: the critical section around index read-modify-write
//!
//! # Layout
//!
//! ```text
//! <base>/
//! ├── versions_index.json
//! ├── versions.seq
//! ├── versions.lock          (only with file locking enabled)
//! ├── vault.toml             (optional)
//! └── <uuid>.json            (one per version)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod atomic;
pub mod index;
pub mod layout;
pub mod lock;
pub mod records;
pub mod sequence;

pub use atomic::write_atomic;
pub use index::{IndexFile, MetadataIndex};
pub use layout::StorageLayout;
pub use lock::{IndexGuard, IndexLock};
pub use records::RecordFiles;
pub use sequence::SequenceMark;
