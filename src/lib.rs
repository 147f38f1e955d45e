//! tailorvault: a persistent, queryable store of tailored résumé versions
//!
//! Each saved version is an immutable snapshot of an optimized résumé plus
//! provenance: the target job, the optimization style, change statistics and
//! submission tracking. A small JSON index keeps listing fast; the full
//! records live one file per version next to it.
//!
//! # Quick start
//!
//! ```ignore
//! use tailorvault::{Vault, VersionFilter};
//!
//! let vault = Vault::open("/tmp/vault").value.expect("vault opens");
//! let saved = vault.save(result, resume, "Engineer", "Acme", jd, original, None, None, None, None);
//! let acme = vault.list(&VersionFilter::all().company("acme"));
//! ```
//!
//! Lower layers are available for callers who want `Result`s instead of
//! [`Outcome`]s: [`engine::VersionStore`] and [`executor::Executor`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod types;
mod vault;

pub use types::*;
pub use vault::Vault;

pub use tailor_executor::{Outcome, SaveRequest};

/// The version store engine
pub mod engine {
    pub use tailor_engine::*;
}

/// The command executor
pub mod executor {
    pub use tailor_executor::*;
}
