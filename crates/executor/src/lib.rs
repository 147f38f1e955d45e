//! Command execution layer for tailorvault
//!
//! Callers talk to the vault by sending a [`Command`] to an [`Executor`]:
//!
//! ```ignore
//! let executor = Executor::open(StoreConfig::default_for(dir))?;
//! let outcome = executor.run(Command::List { company: Some("acme".into()), tag: None, submitted_only: false });
//! if outcome.success { /* outcome.value is Some(Output::Versions(..)) */ }
//! ```
//!
//! Two entry points:
//! - [`Executor::execute`] returns `Result<Output, Error>`
//! - [`Executor::run`] never fails: it folds errors into an [`Outcome`]
//!   with `success = false` and a message, after logging them

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod outcome;
mod output;

pub use command::{Command, SaveRequest};
pub use convert::convert_result;
pub use error::Error;
pub use executor::Executor;
pub use outcome::{Outcome, OutcomeMessage};
pub use output::Output;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
