//! # smooth-result
//!
//! Immutable success/failure outcome values with an HTTP-aligned error catalog.
//!
//! ## Key Features
//!
//! - **Error Catalog**: 39 failure categories aligned to HTTP status codes, each with a canonical message
//! - **Outcomes**: [`Outcome`] for operations without a payload, [`DataOutcome<T>`] for those with one
//! - **Immutability**: values are built once through named constructors and expose no setters
//! - **Interop**: failed outcomes convert into [`OutcomeError`] for `?`-based propagation
//!
//! ## Example
//!
//! ```rust
//! use smooth_result::{DataOutcome, ErrorCategory, Outcome};
//!
//! let saved = Outcome::success();
//! assert!(saved.is_success());
//!
//! let missing: DataOutcome<u64> =
//!     DataOutcome::failure_with(&ErrorCategory::NotFound.descriptor());
//! assert_eq!(missing.status_code(), Some(404));
//! assert_eq!(
//!     missing.error_message(),
//!     Some("NotFound: The requested resource could not be found.")
//! );
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod data_outcome;
pub mod error;
pub mod outcome;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use data_outcome::DataOutcome;
pub use error::{
    descriptor_for, CatalogError, CatalogResult, ErrorCategory, ErrorDescriptor,
    InvalidOutcomeError, OutcomeError, OutcomeResult,
};
pub use outcome::Outcome;
