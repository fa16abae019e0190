//! Payload-free success/failure outcome.
//!
//! [`Outcome`] records whether an operation succeeded and, on failure, the
//! status code and message describing why. Values are built through the
//! named constructors and never change afterwards.
//!
//! # Example
//!
//! ```rust
//! use smooth_result::{ErrorCategory, Outcome};
//!
//! let ok = Outcome::success();
//! assert!(ok.is_success());
//! assert_eq!(ok.status_code(), None);
//!
//! let conflict = Outcome::failure_with(&ErrorCategory::Conflict.descriptor());
//! assert_eq!(conflict.status_code(), Some(409));
//! ```

use crate::error::{ErrorDescriptor, InvalidOutcomeError, OutcomeError, OutcomeResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// The outcome of an operation that produces no payload.
///
/// | Constructor | success | status_code | error_message |
/// |-------------|---------|-------------|---------------|
/// | [`success`](Self::success) | `true` | `None` | `None` |
/// | [`failure`](Self::failure) | `false` | `None` | `Some("")` |
/// | [`failure_with_message`](Self::failure_with_message) | `false` | category code | caller message |
/// | [`failure_with`](Self::failure_with) | `false` | category code | rendered descriptor |
///
/// Deserialization rejects a success carrying a status code or a non-empty
/// error message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OutcomeRepr")]
pub struct Outcome {
    success: bool,
    status_code: Option<u16>,
    error_message: Option<String>,
}

/// Unvalidated wire form of [`Outcome`].
#[derive(Deserialize)]
struct OutcomeRepr {
    success: bool,
    status_code: Option<u16>,
    error_message: Option<String>,
}

impl TryFrom<OutcomeRepr> for Outcome {
    type Error = InvalidOutcomeError;

    fn try_from(repr: OutcomeRepr) -> Result<Self, Self::Error> {
        InvalidOutcomeError::check(
            repr.success,
            repr.status_code,
            repr.error_message.as_deref(),
        )?;
        Ok(Self {
            success: repr.success,
            status_code: repr.status_code,
            error_message: repr.error_message,
        })
    }
}

impl Outcome {
    /// A successful outcome with no status code or message.
    pub fn success() -> Self {
        Self {
            success: true,
            status_code: None,
            error_message: None,
        }
    }

    /// A failure with no status code and an empty message.
    pub fn failure() -> Self {
        log_debug!(error_type = "uncategorized", "Operation failed");
        Self {
            success: false,
            status_code: None,
            error_message: Some(String::new()),
        }
    }

    /// A failure carrying the descriptor's status code and a caller-supplied message.
    pub fn failure_with_message(error: &ErrorDescriptor, message: impl Into<String>) -> Self {
        let message = message.into();
        log_debug!(
            error_type = %error.category(),
            status_code = error.code(),
            message = %message,
            "Operation failed"
        );
        Self {
            success: false,
            status_code: Some(error.code()),
            error_message: Some(message),
        }
    }

    /// A failure carrying the descriptor's status code and its rendered form
    /// (`"{category}: {message}"`) as the message.
    pub fn failure_with(error: &ErrorDescriptor) -> Self {
        log_debug!(
            error_type = %error.category(),
            status_code = error.code(),
            "Operation failed"
        );
        Self {
            success: false,
            status_code: Some(error.code()),
            error_message: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Convert into a standard `Result` so failures can be propagated with `?`.
    pub fn into_result(self) -> OutcomeResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(OutcomeError::from_parts(self.status_code, self.error_message))
        }
    }
}

impl From<ErrorDescriptor> for Outcome {
    fn from(error: ErrorDescriptor) -> Self {
        Self::failure_with(&error)
    }
}
