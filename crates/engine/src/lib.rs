//! Version store engine for tailorvault
//!
//! `VersionStore` orchestrates the storage layer into the operations callers
//! use: save, load, list, delete, update_metadata, compare, storage_stats and
//! reconcile. It is generic over the generation-result and final-content
//! types, defaulting to the shipped `OptimizationResult` / `ResumeContent`.
//!
//! # Example
//!
//! ```ignore
//! use tailor_engine::{NewVersion, StoreConfig, VersionStore};
//! use tailor_core::VersionFilter;
//!
//! let store: VersionStore = VersionStore::open(StoreConfig::default_for("/tmp/vault"))?;
//! let meta = store.save(NewVersion::new(result, resume, "Engineer", "Acme", jd, original))?;
//! let acme = store.list(&VersionFilter::all().company("acme"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod reconcile;
pub mod stats;
pub mod store;

pub use config::{default_storage_dir, StoreConfig, VAULT_DIR_ENV};
pub use reconcile::ReconcileReport;
pub use stats::{human_bytes, StorageStats, NEVER};
pub use store::{DeleteOutcome, NewVersion, VersionStore};
