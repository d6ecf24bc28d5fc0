//! Structured log record for a received service error.
//!
//! # Properties
//!
//! - Borrows from [`ApiError`](crate::ApiError) with an explicit lifetime
//! - Cannot outlive the error that created it
//! - No heap allocations in accessors
//! - Formatted output is bounded: every server-supplied field is cut at
//!   [`MAX_FIELD_OUTPUT_LEN`] bytes and control characters are replaced
//!
//! The message, request id, and unrecognised codes come from the network and
//! are treated as untrusted text when written out.

use crate::{Action, Category, ErrorCode, FailureClass};
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Appended to fields cut at [`MAX_FIELD_OUTPUT_LEN`].
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Written in place of the failure class when the code has no known category.
const UNCLASSIFIED: &str = "unclassified";

/// Written in place of the action when none was recorded.
const NO_ACTION: &str = "-";

/// Structured log record with data borrowed from an `ApiError`.
///
/// # Example
///
/// ```rust
/// # use tke_error_codes::{ApiError, Action};
/// let err = ApiError::new("ResourceUnavailable.ClusterState", "cluster is upgrading", "req-3")
///     .with_action(Action::DescribeClusterInstances);
///
/// let mut line = String::new();
/// err.log().write_to(&mut line).unwrap();
/// assert_eq!(
///     line,
///     "[ResourceUnavailable.ClusterState] class=Resource state recognized=true \
///      action='DescribeClusterInstances' request_id='req-3' message='cluster is upgrading'"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorLog<'a> {
    code: &'a str,
    resolved: Option<&'static ErrorCode>,
    action: Option<Action>,
    message: &'a str,
    request_id: &'a str,
}

impl<'a> ErrorLog<'a> {
    #[inline]
    pub(crate) const fn new(
        code: &'a str,
        resolved: Option<&'static ErrorCode>,
        action: Option<Action>,
        message: &'a str,
        request_id: &'a str,
    ) -> Self {
        Self {
            code,
            resolved,
            action,
            message,
            request_id,
        }
    }

    /// Write the record as a single line without intermediate allocation
    /// for fields that need neither truncation nor replacement.
    ///
    /// Format:
    /// `[<code>] class=<class> recognized=<bool> action='<a>' request_id='<id>' message='<m>'`
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let class = self.failure_class().map_or(UNCLASSIFIED, FailureClass::display_name);
        let action = self.action.map_or(NO_ACTION, Action::name);

        write!(
            f,
            "[{}] class={} recognized={} action='{}' request_id='{}' message='{}'",
            sanitize_field(self.code),
            class,
            self.is_recognized(),
            action,
            sanitize_field(self.request_id),
            sanitize_field(self.message),
        )
    }

    /// Raw received code. Not truncated; structured loggers apply their own
    /// limits when serialising.
    #[inline]
    pub const fn code(&self) -> &'a str {
        self.code
    }

    /// Catalog entry for the code, if any.
    #[inline]
    pub const fn error_code(&self) -> Option<&'static ErrorCode> {
        self.resolved
    }

    /// Whether the code is a catalog entry.
    #[inline]
    pub const fn is_recognized(&self) -> bool {
        self.resolved.is_some()
    }

    /// Category of the code's prefix.
    #[inline]
    pub fn category(&self) -> Option<Category> {
        match self.resolved {
            Some(code) => Some(code.category()),
            None => Category::from_wire(self.code),
        }
    }

    /// Failure family of the code's category.
    #[inline]
    pub fn failure_class(&self) -> Option<FailureClass> {
        self.category().map(Category::failure_class)
    }

    /// Action that returned the error.
    #[inline]
    pub const fn action(&self) -> Option<Action> {
        self.action
    }

    /// Server-supplied message, untruncated.
    #[inline]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Server-supplied request id, untruncated.
    #[inline]
    pub const fn request_id(&self) -> &'a str {
        self.request_id
    }
}

impl fmt::Display for ErrorLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Bound a field for output and replace control characters with `?`.
///
/// Borrows when the field is already safe to print.
pub(crate) fn sanitize_field(s: &str) -> Cow<'_, str> {
    let truncated = truncate_with_indicator(s);
    if !truncated.chars().any(char::is_control) {
        return truncated;
    }

    Cow::Owned(
        truncated
            .chars()
            .map(|c| if c.is_control() { '?' } else { c })
            .collect(),
    )
}

/// Cut a string longer than [`MAX_FIELD_OUTPUT_LEN`] on a UTF-8 boundary and
/// append [`TRUNCATION_INDICATOR`]. The result never exceeds the limit.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
