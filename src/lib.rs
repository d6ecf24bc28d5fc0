//! # TKE Error Codes
//!
//! Error-code catalog for the managed Kubernetes service API (TKE, version
//! `2018-05-25`), plus the small amount of machinery needed to act on a
//! received error.
//!
//! ## Design Philosophy
//!
//! 1. **Wire strings are the contract**: every entry carries the exact string
//!    the service emits, typos and odd capitalisation included
//! 2. **Lookup is byte-exact**: no case folding, no trimming, no nearest match
//! 3. **Unknown codes are surfaced, never coerced**: a code the catalog does
//!    not know comes back as [`Lookup::Unknown`] with the received bytes
//! 4. **The catalog is checked at compile time**: naming rule, category
//!    membership and uniqueness are `const` assertions
//!
//! ## Quick Start
//!
//! ```rust
//! use tke_error_codes::{ApiError, Action, Category, FailureClass, definitions};
//!
//! let err = ApiError::new(
//!     "ResourceNotFound.ClusterNotFound",
//!     "cluster cls-abc123 not found",
//!     "9f3c1f52-7c1e-4b8e-8f0c-4a8c6d3e2b10",
//! )
//! .with_action(Action::DescribeClusterNodePools);
//!
//! assert!(err.is(&definitions::RESOURCENOTFOUND_CLUSTERNOTFOUND));
//! assert_eq!(err.category(), Some(Category::ResourceNotFound));
//! assert_eq!(err.failure_class(), Some(FailureClass::ResourceState));
//!
//! // [TencentCloudSDKError] Code=ResourceNotFound.ClusterNotFound, Message=..., RequestId=...
//! println!("{err}");
//! ```
//!
//! ## Unknown Codes
//!
//! ```rust
//! use tke_error_codes::{ApiError, Lookup};
//!
//! let err = ApiError::new("SomeNewCode.Whatever", "new failure", "req-1");
//! assert!(!err.is_recognized());
//! assert_eq!(err.lookup(), Lookup::Unknown("SomeNewCode.Whatever"));
//! assert_eq!(err.code(), "SomeNewCode.Whatever");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` for [`ErrorCode`] (as its wire string) and
//!   `Serialize`/`Deserialize` for [`Category`] and [`FailureClass`]

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::borrow::Cow;
use std::fmt;
use std::result;
use zeroize::Zeroize;

pub mod actions;
pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod logging;
pub mod lookup;
pub mod ring_buffer;

pub use actions::*;
pub use codes::*;
pub use logging::*;
pub use lookup::*;
pub use ring_buffer::*;

/// Type alias for Results carrying a service error.
pub type Result<T> = result::Result<T, ApiError>;

/// Prefix of the rendered form, identical to the upstream SDK's.
const DISPLAY_TAG: &str = "[TencentCloudSDKError]";

/// An error returned by the service.
///
/// Holds the received `Code` string unchanged, next to its catalog entry when
/// it has one. The message and request id are server-supplied text; both are
/// zeroized on drop.
///
/// `Display` renders the upstream SDK form:
/// `[TencentCloudSDKError] Code=<code>, Message=<message>, RequestId=<id>`.
#[must_use = "errors should be handled or logged"]
pub struct ApiError {
    code: Cow<'static, str>,
    resolved: Option<&'static ErrorCode>,
    message: String,
    request_id: String,
    action: Option<Action>,
}

impl ApiError {
    /// Build from the three fields of the error envelope.
    ///
    /// The code is resolved once, here. Whatever the catalog says, the
    /// received string is kept as is.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let resolved = lookup::lookup(&code).code();
        Self {
            code,
            resolved,
            message: message.into(),
            request_id: request_id.into(),
            action: None,
        }
    }

    /// Build from a catalog entry, e.g. in tests or mocks.
    #[inline]
    pub fn from_code(
        code: &'static ErrorCode,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code.wire()),
            resolved: Some(code),
            message: message.into(),
            request_id: request_id.into(),
            action: None,
        }
    }

    /// Record which action returned this error.
    #[inline]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// The received code string, unchanged.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Catalog resolution of [`ApiError::code`].
    #[inline]
    pub fn lookup(&self) -> Lookup<'_> {
        match self.resolved {
            Some(code) => Lookup::Known(code),
            None => Lookup::Unknown(&*self.code),
        }
    }

    /// The catalog entry, if the code is in the catalog.
    #[inline]
    pub const fn error_code(&self) -> Option<&'static ErrorCode> {
        self.resolved
    }

    /// Whether the code is a catalog entry.
    #[inline]
    pub const fn is_recognized(&self) -> bool {
        self.resolved.is_some()
    }

    /// Category of the code, from its prefix. Present for unknown subcodes
    /// of a known category as well.
    #[inline]
    pub fn category(&self) -> Option<Category> {
        self.lookup().category()
    }

    /// Failure family of the code's category.
    #[inline]
    pub fn failure_class(&self) -> Option<FailureClass> {
        self.category().map(Category::failure_class)
    }

    /// Server-supplied message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Server-supplied request id.
    #[inline]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The action that returned this error, when recorded.
    #[inline]
    pub const fn action(&self) -> Option<Action> {
        self.action
    }

    /// Whether the action that returned this error documents its code.
    ///
    /// `None` when no action was recorded.
    #[inline]
    pub fn is_documented(&self) -> Option<bool> {
        self.action.map(|action| action.documents_wire(&self.code))
    }

    /// Byte-exact comparison against a catalog entry.
    #[inline]
    pub fn is(&self, code: &ErrorCode) -> bool {
        code.matches(&self.code)
    }

    /// Structured log record borrowing from this error.
    ///
    /// The record cannot outlive the error, so the server strings it points
    /// at are still zeroized when the error drops.
    #[inline]
    pub fn log(&self) -> ErrorLog<'_> {
        ErrorLog::new(&self.code, self.resolved, self.action, &self.message, &self.request_id)
    }

    /// Callback form of [`ApiError::log`].
    ///
    /// ```rust
    /// # use tke_error_codes::ApiError;
    /// let err = ApiError::new("LimitExceeded", "quota reached", "req-7");
    /// let line = err.with_log(|log| log.to_string());
    /// assert!(line.starts_with("[LimitExceeded]"));
    /// ```
    #[inline]
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_>) -> R,
    {
        let log = self.log();
        f(&log)
    }
}

impl Drop for ApiError {
    fn drop(&mut self) {
        self.message.zeroize();
        self.request_id.zeroize();
        if let Cow::Owned(ref mut code) = self.code {
            code.zeroize();
        }
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiError")
            .field("code", &self.code)
            .field("recognized", &self.is_recognized())
            .field("action", &self.action)
            .field("message", &self.message)
            .field("request_id", &self.request_id)
            .finish()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Code={}, Message={}, RequestId={}",
            DISPLAY_TAG, self.code, self.message, self.request_id
        )
    }
}

impl std::error::Error for ApiError {}

impl From<UnknownCodeError> for ApiError {
    /// Wrap a rejected code with an empty message and request id.
    fn from(err: UnknownCodeError) -> Self {
        Self::new(err.into_raw(), String::new(), String::new())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn display_matches_sdk_format() {
        let err = ApiError::new("InvalidParameter.Param", "bad cluster id", "req-42");
        assert_eq!(
            err.to_string(),
            "[TencentCloudSDKError] Code=InvalidParameter.Param, Message=bad cluster id, RequestId=req-42"
        );
    }

    #[test]
    fn known_code_resolves_at_construction() {
        let err = ApiError::new(
            String::from("InternalError.UnexceptedInternal"),
            "oops",
            "req-1",
        );
        assert!(err.is_recognized());
        assert_eq!(err.error_code(), Some(&definitions::INTERNALERROR_UNEXCEPTEDINTERNAL));
        assert!(err.is(&definitions::INTERNALERROR_UNEXCEPTEDINTERNAL));
        assert!(!err.is(&definitions::INTERNALERROR_UNEXPECTEDINTERNAL));
        assert_eq!(err.failure_class(), Some(FailureClass::ServiceFault));
    }

    #[test]
    fn unknown_code_is_kept_verbatim() {
        let err = ApiError::new("  invalidparameter ", "m", "r");
        assert!(!err.is_recognized());
        assert_eq!(err.code(), "  invalidparameter ");
        assert_eq!(err.lookup(), Lookup::Unknown("  invalidparameter "));
        assert_eq!(err.category(), None);
        assert_eq!(err.failure_class(), None);
    }

    #[test]
    fn unknown_subcode_keeps_category() {
        let err = ApiError::new("ResourceUnavailable.SomethingNew", "m", "r");
        assert!(!err.is_recognized());
        assert_eq!(err.category(), Some(Category::ResourceUnavailable));
        assert_eq!(err.failure_class(), Some(FailureClass::ResourceState));
    }

    #[test]
    fn from_code_matches_new() {
        let a = ApiError::from_code(&definitions::RESOURCEINUSE, "m", "r");
        let b = ApiError::new("ResourceInUse", "m", "r");
        assert_eq!(a.code(), b.code());
        assert_eq!(a.error_code(), b.error_code());
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn action_documentation_check() {
        let err = ApiError::new("LimitExceeded", "m", "r");
        assert_eq!(err.is_documented(), None);

        let err = err.with_action(Action::DeleteClusterInstances);
        assert_eq!(err.action(), Some(Action::DeleteClusterInstances));
        assert_eq!(err.is_documented(), Some(true));

        let err = ApiError::new("ResourcesSoldOut", "m", "r")
            .with_action(Action::DescribeClusterNodePools);
        assert_eq!(err.is_documented(), Some(false));
    }

    #[test]
    fn log_borrows_error_fields() {
        let err = ApiError::new("MissingParameter", "ClusterId is required", "req-9")
            .with_action(Action::DescribeClusterInstances);
        let log = err.log();
        assert_eq!(log.code(), "MissingParameter");
        assert_eq!(log.message(), "ClusterId is required");
        assert_eq!(log.request_id(), "req-9");
        assert_eq!(log.action(), Some(Action::DescribeClusterInstances));
        assert!(log.is_recognized());
    }

    #[test]
    fn from_unknown_code_error() {
        let parse_err = ErrorCode::parse("SomeNewCode.Whatever").unwrap_err();
        let err = ApiError::from(parse_err);
        assert_eq!(err.code(), "SomeNewCode.Whatever");
        assert_eq!(err.message(), "");
        assert!(!err.is_recognized());
    }
}
