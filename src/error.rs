//! Error catalog and error types for outcome values.
//!
//! This module holds the closed taxonomy of failure categories used by
//! [`Outcome`](crate::Outcome) and [`DataOutcome`](crate::DataOutcome):
//!
//! - [`ErrorCategory`]: one variant per well-known failure class, each carrying
//!   the HTTP status code it is aligned to, plus the `None` sentinel (code 0)
//! - [`ErrorDescriptor`]: the immutable `(category, message)` pair describing a
//!   failure, rendered as `"{category}: {message}"`
//!
//! It also defines the two error types the crate can return:
//!
//! - [`CatalogError`]: reverse lookups (status code or name to category) that miss
//! - [`OutcomeError`]: a failed outcome turned into a `std::result::Result` error
//!
//! # Example
//!
//! ```rust
//! use smooth_result::error::{descriptor_for, ErrorCategory};
//!
//! let descriptor = descriptor_for(ErrorCategory::NotFound);
//! assert_eq!(descriptor.category().code(), 404);
//! assert_eq!(
//!     descriptor.to_string(),
//!     "NotFound: The requested resource could not be found."
//! );
//! ```

use crate::logging::log_warn;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Error catalog
// ============================================================================

/// Declares [`ErrorCategory`] and its lookup table from a single list of
/// `Variant = code => "message"` entries.
macro_rules! error_catalog {
    ($( $(#[$doc:meta])* $variant:ident = $code:literal => $message:literal, )*) => {
        /// Well-known failure categories, aligned to HTTP status semantics.
        ///
        /// The discriminant of each variant is its HTTP status code. `None` is
        /// the "no error" sentinel with code 0.
        ///
        /// # Example
        ///
        /// ```rust
        /// use smooth_result::ErrorCategory;
        ///
        /// assert_eq!(ErrorCategory::Forbidden.code(), 403);
        /// assert_eq!(ErrorCategory::from_code(504), Some(ErrorCategory::GatewayTimeout));
        /// assert!(ErrorCategory::TooManyRequests.is_retryable());
        /// ```
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[repr(u16)]
        pub enum ErrorCategory {
            $( $(#[$doc])* $variant = $code, )*
        }

        impl ErrorCategory {
            /// Every category in ascending code order, `None` first.
            pub const ALL: &'static [ErrorCategory] = &[ $( ErrorCategory::$variant, )* ];

            /// Catalog entry for this category: `(identifier, canonical message)`.
            const fn entry(self) -> (&'static str, &'static str) {
                match self {
                    $( ErrorCategory::$variant => (stringify!($variant), $message), )*
                }
            }
        }
    };
}

error_catalog! {
    /// No error. Used as a default rather than as a failure.
    #[default]
    None = 0 => "",
    /// 400: the request is malformed.
    BadRequest = 400 => "Your request could not be understood due to malformed syntax.",
    /// 401: authentication is missing or failed.
    Unauthorized = 401 => "Authentication is required and has failed or has not been provided.",
    /// 402
    PaymentRequired = 402 => "Payment is required to access this resource.",
    /// 403: authenticated but not permitted.
    Forbidden = 403 => "You do not have the necessary permissions to access this resource.",
    /// 404
    NotFound = 404 => "The requested resource could not be found.",
    /// 405
    MethodNotAllowed = 405 => "The method specified in the request is not allowed for the resource identified.",
    /// 406
    NotAcceptable = 406 => "The resource is capable of generating only content not acceptable according to the Accept headers sent in the request.",
    /// 407
    ProxyAuthenticationRequired = 407 => "You must authenticate with a proxy server before this request can be served.",
    /// 408
    RequestTimeout = 408 => "The server timed out waiting for the request.",
    /// 409: the request conflicts with the current state of the resource.
    Conflict = 409 => "The request could not be completed due to a conflict with the current state of the resource.",
    /// 410
    Gone = 410 => "The requested resource is no longer available at the server and no forwarding address is known.",
    /// 411
    LengthRequired = 411 => "The request did not specify the length of its content, which is required by the requested resource.",
    /// 412
    PreconditionFailed = 412 => "One or more preconditions given in the request header fields evaluated to false when tested on the server.",
    /// 413
    PayloadTooLarge = 413 => "The server is refusing to process a request because the request payload is larger than the server is willing or able to process.",
    /// 414: URI too long.
    ///
    /// The identifier keeps its historical spelling since it appears in
    /// rendered messages.
    UriToLong = 414 => "The URI provided was too long for the server to process.",
    /// 415
    UnsupportedMediaType = 415 => "The server is refusing to service the request because the entity of the request is in a format not supported by the requested resource for the requested method.",
    /// 416
    RangeNotSatisfiable = 416 => "The server cannot serve the requested ranges.",
    /// 417
    ExpectationFailed = 417 => "The server cannot meet the requirements of the Expect request-header field.",
    /// 421
    MisdirectedRequest = 421 => "The request was directed at a server that is not able to produce a response.",
    /// 422
    UnprocessableContent = 422 => "The server understands the content type of the request entity, but was unable to process the contained instructions.",
    /// 423
    Locked = 423 => "The resource that is being accessed is locked.",
    /// 424
    FailedDependency = 424 => "The request failed due to the failure of a previous request.",
    /// 425
    TooEarly = 425 => "The server is unwilling to risk processing a request that might be replayed.",
    /// 426
    UpgradeRequired = 426 => "The client should switch to a different protocol.",
    /// 428
    PreconditionRequired = 428 => "The server requires the request to be conditional.",
    /// 429: the caller is being rate limited.
    TooManyRequests = 429 => "You have sent too many requests in a given amount of time.",
    /// 431
    RequestHeaderFieldsTooLarge = 431 => "The server is unwilling to process the request because its header fields are too large.",
    /// 451
    UnavailableForLegalReasons = 451 => "The requested resource is unavailable due to legal reasons.",
    /// 500: unexpected server-side failure.
    InternalServerError = 500 => "The server encountered an unexpected condition that prevented it from fulfilling the request.",
    /// 501
    NotImplemented = 501 => "The server does not support the functionality required to fulfill the request.",
    /// 502
    BadGateway = 502 => "The server received an invalid response from the upstream server.",
    /// 503: overloaded or down for maintenance.
    ServiceUnavailable = 503 => "The server is currently unable to handle the request due to a temporary overloading or maintenance of the server.",
    /// 504
    GatewayTimeout = 504 => "The upstream server failed to send a request in the time allowed by the server.",
    /// 505
    HttpVersionNotSupported = 505 => "The server does not support the HTTP protocol version that was used in the request.",
    /// 506
    VariantAlsoNegotiates = 506 => "The server has an internal configuration error: the chosen variant resource is configured to engage in transparent content negotiation and is therefore not a suitable endpoint in the negotiation process.",
    /// 507
    InsufficientStorage = 507 => "The server is unable to store the representation needed to complete the request.",
    /// 508
    LoopDetected = 508 => "The server detected an infinite loop while processing the request.",
    /// 510
    NotExtended = 510 => "Further extensions to the request are required for the server to fulfill it.",
    /// 511
    NetworkAuthenticationRequired = 511 => "The client needs to authenticate to gain network access.",
}

impl ErrorCategory {
    /// The HTTP status code this category is aligned to (0 for `None`).
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The variant identifier, e.g. `"NotFound"`. Used when rendering descriptors.
    pub const fn name(self) -> &'static str {
        self.entry().0
    }

    /// The canonical human-readable message. Empty for `None`.
    pub const fn message(self) -> &'static str {
        self.entry().1
    }

    /// The descriptor pairing this category with its canonical message.
    pub fn descriptor(self) -> ErrorDescriptor {
        ErrorDescriptor {
            category: self,
            message: Cow::Borrowed(self.message()),
        }
    }

    /// Reverse lookup from a status code. Returns `None` for codes outside the catalog.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.code() == code)
    }

    /// Whether this is the "no error" sentinel.
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether the category is a 4xx client error.
    pub const fn is_client_error(self) -> bool {
        matches!(self.code(), 400..=499)
    }

    /// Whether the category is a 5xx server error.
    pub const fn is_server_error(self) -> bool {
        matches!(self.code(), 500..=599)
    }

    /// Whether a caller can reasonably retry the failed operation later.
    ///
    /// Returns `true` for timeouts, rate limiting, and transient upstream
    /// or availability failures. Implement backoff when retrying these.
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::RequestTimeout
                | Self::TooEarly
                | Self::TooManyRequests
                | Self::BadGateway
                | Self::ServiceUnavailable
                | Self::GatewayTimeout
        )
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for ErrorCategory {
    type Error = CatalogError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| CatalogError::unknown_status_code(code))
    }
}

impl FromStr for ErrorCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| CatalogError::unknown_category(s))
    }
}

/// Look up the descriptor for a category.
///
/// Pure and total: repeated calls return value-equal descriptors.
pub fn descriptor_for(category: ErrorCategory) -> ErrorDescriptor {
    category.descriptor()
}

// ============================================================================
// Error descriptor
// ============================================================================

/// An immutable `(category, message)` pair describing a failure.
///
/// Descriptors from [`descriptor_for`] carry the canonical catalog message;
/// [`ErrorDescriptor::new`] allows a domain-specific message instead.
///
/// The textual rendering is `"{category_name}: {message}"`:
///
/// ```rust
/// use smooth_result::ErrorCategory;
///
/// let descriptor = ErrorCategory::BadRequest.descriptor();
/// assert_eq!(
///     descriptor.to_string(),
///     "BadRequest: Your request could not be understood due to malformed syntax."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    category: ErrorCategory,
    message: Cow<'static, str>,
}

impl ErrorDescriptor {
    /// Create a descriptor with a custom message.
    pub fn new(category: ErrorCategory, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// The "no error" sentinel descriptor: category `None`, empty message.
    pub const fn none() -> Self {
        Self {
            category: ErrorCategory::None,
            message: Cow::Borrowed(""),
        }
    }

    /// The category this descriptor belongs to.
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The human-readable message, canonical or custom.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The status code of the descriptor's category.
    pub fn code(&self) -> u16 {
        self.category.code()
    }

    /// Whether this is the "no error" sentinel.
    pub fn is_none(&self) -> bool {
        self.category.is_none()
    }
}

impl From<ErrorCategory> for ErrorDescriptor {
    fn from(category: ErrorCategory) -> Self {
        category.descriptor()
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

// ============================================================================
// Error types
// ============================================================================

/// Convenient result type for catalog lookups.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors from reverse lookups into the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No category is aligned to the given status code.
    #[error("Unknown status code: {code}")]
    UnknownStatusCode {
        /// The status code that was requested.
        code: u16,
    },

    /// No category has the given identifier.
    #[error("Unknown error category: {name}")]
    UnknownCategory {
        /// The identifier that was requested.
        name: String,
    },
}

impl CatalogError {
    /// Create an unknown status code error (logs at WARN level).
    pub fn unknown_status_code(code: u16) -> Self {
        log_warn!(
            error_type = "unknown_status_code",
            code = code,
            "Status code has no catalog entry"
        );
        Self::UnknownStatusCode { code }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        let name = name.into();
        log_warn!(
            error_type = "unknown_category",
            name = %name,
            "Error category name has no catalog entry"
        );
        Self::UnknownCategory { name }
    }
}

/// Convenient result type for code that converts outcomes with `?`.
///
/// ```rust
/// use smooth_result::{ErrorCategory, Outcome, OutcomeResult};
///
/// fn delete_user(exists: bool) -> OutcomeResult<()> {
///     let outcome = if exists {
///         Outcome::success()
///     } else {
///         Outcome::failure_with(&ErrorCategory::NotFound.descriptor())
///     };
///     outcome.into_result()
/// }
///
/// assert!(delete_user(true).is_ok());
/// assert_eq!(delete_user(false).unwrap_err().status_code(), Some(404));
/// ```
pub type OutcomeResult<T> = std::result::Result<T, OutcomeError>;

/// A failed outcome, as a standard error.
///
/// Produced by [`Outcome::into_result`](crate::Outcome::into_result) and
/// [`DataOutcome::into_result`](crate::DataOutcome::into_result).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// The failure carried a status code.
    #[error("[{status_code}] {message}")]
    Categorized {
        /// Status code of the failure's category.
        status_code: u16,
        /// The failure's error message.
        message: String,
    },

    /// The failure carried no status code.
    #[error("{message}")]
    Uncategorized {
        /// The failure's error message (possibly empty).
        message: String,
    },
}

impl OutcomeError {
    pub(crate) fn from_parts(status_code: Option<u16>, message: Option<String>) -> Self {
        let message = message.unwrap_or_default();
        match status_code {
            Some(status_code) => Self::Categorized {
                status_code,
                message,
            },
            None => Self::Uncategorized { message },
        }
    }

    /// The failure's status code, if it had one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Categorized { status_code, .. } => Some(*status_code),
            Self::Uncategorized { .. } => None,
        }
    }

    /// The failure's error message.
    pub fn message(&self) -> &str {
        match self {
            Self::Categorized { message, .. } | Self::Uncategorized { message } => message,
        }
    }

    /// The catalog category matching the status code, if any.
    pub fn category(&self) -> Option<ErrorCategory> {
        self.status_code().and_then(ErrorCategory::from_code)
    }
}

/// A serialized outcome whose fields no constructor could have produced.
///
/// Returned while deserializing [`Outcome`](crate::Outcome) or
/// [`DataOutcome`](crate::DataOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOutcomeError {
    /// A success carried a status code.
    #[error("Successful outcome cannot carry status code {status_code}")]
    SuccessWithStatusCode {
        /// The status code found on the success.
        status_code: u16,
    },

    /// A success carried a non-empty error message.
    #[error("Successful outcome cannot carry error message: {message}")]
    SuccessWithErrorMessage {
        /// The message found on the success.
        message: String,
    },

    /// A failure carried a payload.
    #[error("Failed outcome cannot carry data")]
    FailureWithData,
}

impl InvalidOutcomeError {
    /// Check the fields shared by both outcome types (logs at WARN level on rejection).
    pub(crate) fn check(
        success: bool,
        status_code: Option<u16>,
        error_message: Option<&str>,
    ) -> Result<(), Self> {
        if !success {
            return Ok(());
        }
        let rejection = match (status_code, error_message) {
            (Some(status_code), _) => Self::SuccessWithStatusCode { status_code },
            (None, Some(message)) if !message.is_empty() => Self::SuccessWithErrorMessage {
                message: message.to_string(),
            },
            _ => return Ok(()),
        };
        log_warn!(
            error_type = "invalid_outcome",
            reason = %rejection,
            "Rejected serialized outcome"
        );
        Err(rejection)
    }

    pub(crate) fn failure_with_data() -> Self {
        log_warn!(
            error_type = "invalid_outcome",
            "Rejected serialized failure carrying data"
        );
        Self::FailureWithData
    }
}
