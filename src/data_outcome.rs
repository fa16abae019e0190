//! Success/failure outcome carrying an optional payload.
//!
//! [`DataOutcome<T>`] is the payload-bearing counterpart of
//! [`Outcome`](crate::Outcome). The payload is present only when a success
//! constructor was given one; failures never carry data.

use crate::error::{ErrorDescriptor, InvalidOutcomeError, OutcomeError, OutcomeResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// The outcome of an operation that may produce a value of type `T`.
///
/// `data` is `None` unless supplied through [`ok_with`](Self::ok_with), so
/// "no payload" stays distinguishable from a default-valued payload.
/// Deserialization rejects a failure carrying data, and a success carrying a
/// status code or a non-empty error message.
///
/// # Example
///
/// ```rust
/// use smooth_result::{DataOutcome, ErrorCategory};
///
/// fn find_user(id: u32) -> DataOutcome<String> {
///     if id == 1 {
///         DataOutcome::ok_with("alice".to_string())
///     } else {
///         DataOutcome::failure_with(&ErrorCategory::NotFound.descriptor())
///     }
/// }
///
/// assert_eq!(find_user(1).data().map(String::as_str), Some("alice"));
/// assert_eq!(find_user(2).status_code(), Some(404));
/// assert!(find_user(2).data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "DataOutcomeRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct DataOutcome<T> {
    success: bool,
    status_code: Option<u16>,
    error_message: Option<String>,
    data: Option<T>,
}

/// Unvalidated wire form of [`DataOutcome`].
#[derive(Deserialize)]
struct DataOutcomeRepr<T> {
    success: bool,
    status_code: Option<u16>,
    error_message: Option<String>,
    data: Option<T>,
}

impl<T> TryFrom<DataOutcomeRepr<T>> for DataOutcome<T> {
    type Error = InvalidOutcomeError;

    fn try_from(repr: DataOutcomeRepr<T>) -> Result<Self, Self::Error> {
        InvalidOutcomeError::check(
            repr.success,
            repr.status_code,
            repr.error_message.as_deref(),
        )?;
        if !repr.success && repr.data.is_some() {
            return Err(InvalidOutcomeError::failure_with_data());
        }
        Ok(Self {
            success: repr.success,
            status_code: repr.status_code,
            error_message: repr.error_message,
            data: repr.data,
        })
    }
}

impl<T> DataOutcome<T> {
    /// A success without a payload.
    pub fn ok() -> Self {
        Self {
            success: true,
            status_code: None,
            error_message: Some(String::new()),
            data: None,
        }
    }

    /// A success carrying `data`.
    pub fn ok_with(data: T) -> Self {
        Self {
            success: true,
            status_code: None,
            error_message: Some(String::new()),
            data: Some(data),
        }
    }

    /// A failure with no status code and an empty message.
    pub fn failure() -> Self {
        log_debug!(error_type = "uncategorized", "Operation failed");
        Self::failed(None, String::new())
    }

    /// A failure with no status code and the given message.
    pub fn failure_with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        log_debug!(
            error_type = "uncategorized",
            message = %message,
            "Operation failed"
        );
        Self::failed(None, message)
    }

    /// A failure carrying the descriptor's status code and rendered form.
    pub fn failure_with(error: &ErrorDescriptor) -> Self {
        log_debug!(
            error_type = %error.category(),
            status_code = error.code(),
            "Operation failed"
        );
        Self::failed(Some(error.code()), error.to_string())
    }

    fn failed(status_code: Option<u16>, message: String) -> Self {
        Self {
            success: false,
            status_code,
            error_message: Some(message),
            data: None,
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

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the outcome, returning the payload if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Convert into a standard `Result` so failures can be propagated with `?`.
    ///
    /// A success yields its (possibly absent) payload.
    pub fn into_result(self) -> OutcomeResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(OutcomeError::from_parts(self.status_code, self.error_message))
        }
    }
}

impl<T> From<ErrorDescriptor> for DataOutcome<T> {
    fn from(error: ErrorDescriptor) -> Self {
        Self::failure_with(&error)
    }
}
