//! Logging utilities for smooth-result
//!
//! Re-exports the tracing macros the crate uses under the log_* naming convention.

pub use tracing::{debug as log_debug, warn as log_warn};
