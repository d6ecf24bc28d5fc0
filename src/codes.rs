//! Error code identity - categories, failure classes, and the `ErrorCode` type.
//!
//! The managed Kubernetes service reports failures with a dotted string in the
//! `Code` field of its error envelope, e.g. `"ResourceNotFound.ClusterNotFound"`.
//! The part before the first `.` is the **category**; the part after it is the
//! **subcode**. A bare category (`"InvalidParameter"`) is a valid code on its own.
//!
//! # Category Structure
//!
//! - **FailedOperation**: request well-formed, service refused to carry it out
//! - **InternalError**: internal service fault
//! - **InvalidParameter / MissingParameter / UnknownParameter**: caller input
//! - **LimitExceeded / ResourceInsufficient / ResourcesSoldOut**: capacity
//! - **ResourceInUse / ResourceUnavailable / ResourceNotFound**: resource state
//! - **OperationDenied / UnauthorizedOperation**: authorisation
//! - **UnsupportedOperation**: feature availability
//!
//! # Governance
//!
//! Categories are a closed enum. Error codes are only constructed through
//! [`ErrorCode::const_new`], which is evaluated at compile time for every
//! catalog entry and rejects:
//! - wire strings that do not start with their category name
//! - empty or non-alphanumeric subcodes
//! - symbols that do not follow the naming rule (see [`symbol_for`])
//!
//! # No-Copy/No-Clone Semantics
//!
//! `ErrorCode` is **identity**: it exists only as `const` items in
//! [`crate::definitions`] and is used by reference. `Category` and
//! `FailureClass` are small metadata enums and are `Copy`.
//!
//! # Example Usage
//!
//! ```rust
//! use tke_error_codes::{Category, FailureClass, category_name, definitions};
//!
//! let code = &definitions::RESOURCENOTFOUND_CLUSTERNOTFOUND;
//! assert_eq!(code.wire(), "ResourceNotFound.ClusterNotFound");
//! assert_eq!(code.category(), Category::ResourceNotFound);
//! assert_eq!(code.failure_class(), FailureClass::ResourceState);
//!
//! assert_eq!(category_name("ResourceNotFound.ClusterNotFound"), "ResourceNotFound");
//! assert_eq!(category_name("InvalidParameter"), "InvalidParameter");
//! ```

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Failure Class (Metadata, Copy)
// ============================================================================

/// Caller-facing failure family induced by a [`Category`].
///
/// This is classification metadata, not a retry policy. Callers decide
/// recovery; [`FailureClass::may_succeed_on_retry`] only says whether an
/// unchanged retry can ever be meaningful for the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureClass {
    /// The request was well-formed but the service refused to carry it out.
    Refused,
    /// The service hit an internal fault. Transient for some subcodes only.
    ServiceFault,
    /// Caller-side input error; retrying without modification cannot help.
    InvalidInput,
    /// Quota, capacity, or resource lifecycle state. Depends on the subcode.
    ResourceState,
    /// The caller is not allowed to perform the operation.
    Authorization,
    /// The operation is not available for this account, region, or cluster.
    Unsupported,
}

impl FailureClass {
    /// Human-readable name for logs and dashboards.
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Refused => "Refused",
            Self::ServiceFault => "Service fault",
            Self::InvalidInput => "Invalid input",
            Self::ResourceState => "Resource state",
            Self::Authorization => "Authorization",
            Self::Unsupported => "Unsupported",
        }
    }

    /// Whether an unmodified retry can succeed for at least some subcodes.
    #[inline]
    pub const fn may_succeed_on_retry(self) -> bool {
        matches!(self, Self::ServiceFault | Self::ResourceState)
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Category (Closed Set)
// ============================================================================

/// Top-level portion of a wire string, preceding any `.`.
///
/// The set is closed: every catalog entry belongs to exactly one of these.
/// Ordering follows the catalog (alphabetical by wire name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// `FailedOperation`
    FailedOperation,
    /// `InternalError`
    InternalError,
    /// `InvalidParameter`
    InvalidParameter,
    /// `LimitExceeded`
    LimitExceeded,
    /// `MissingParameter`
    MissingParameter,
    /// `OperationDenied`
    OperationDenied,
    /// `ResourceInUse`
    ResourceInUse,
    /// `ResourceInsufficient`
    ResourceInsufficient,
    /// `ResourceNotFound`
    ResourceNotFound,
    /// `ResourceUnavailable`
    ResourceUnavailable,
    /// `ResourcesSoldOut`
    ResourcesSoldOut,
    /// `UnauthorizedOperation`
    UnauthorizedOperation,
    /// `UnknownParameter`
    UnknownParameter,
    /// `UnsupportedOperation`
    UnsupportedOperation,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 14] = [
        Self::FailedOperation,
        Self::InternalError,
        Self::InvalidParameter,
        Self::LimitExceeded,
        Self::MissingParameter,
        Self::OperationDenied,
        Self::ResourceInUse,
        Self::ResourceInsufficient,
        Self::ResourceNotFound,
        Self::ResourceUnavailable,
        Self::ResourcesSoldOut,
        Self::UnauthorizedOperation,
        Self::UnknownParameter,
        Self::UnsupportedOperation,
    ];

    /// The wire name of the category, identical to its bare error code.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailedOperation => "FailedOperation",
            Self::InternalError => "InternalError",
            Self::InvalidParameter => "InvalidParameter",
            Self::LimitExceeded => "LimitExceeded",
            Self::MissingParameter => "MissingParameter",
            Self::OperationDenied => "OperationDenied",
            Self::ResourceInUse => "ResourceInUse",
            Self::ResourceInsufficient => "ResourceInsufficient",
            Self::ResourceNotFound => "ResourceNotFound",
            Self::ResourceUnavailable => "ResourceUnavailable",
            Self::ResourcesSoldOut => "ResourcesSoldOut",
            Self::UnauthorizedOperation => "UnauthorizedOperation",
            Self::UnknownParameter => "UnknownParameter",
            Self::UnsupportedOperation => "UnsupportedOperation",
        }
    }

    /// Parse an exact category name. Case-sensitive, no trimming.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Category of a received wire string, if its prefix is a known category.
    ///
    /// Works for codes missing from the catalog too:
    /// `"InternalError.SomethingNew"` yields `Some(InternalError)`, while
    /// `"SomeNewCode.Whatever"` yields `None`.
    #[inline]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::from_name(category_name(raw))
    }

    /// Failure family for this category.
    pub const fn failure_class(self) -> FailureClass {
        match self {
            Self::FailedOperation => FailureClass::Refused,
            Self::InternalError => FailureClass::ServiceFault,
            Self::InvalidParameter | Self::MissingParameter | Self::UnknownParameter => {
                FailureClass::InvalidInput
            }
            Self::LimitExceeded
            | Self::ResourceInsufficient
            | Self::ResourcesSoldOut
            | Self::ResourceInUse
            | Self::ResourceUnavailable
            | Self::ResourceNotFound => FailureClass::ResourceState,
            Self::OperationDenied | Self::UnauthorizedOperation => FailureClass::Authorization,
            Self::UnsupportedOperation => FailureClass::Unsupported,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownCategoryError { raw: s.to_owned() })
    }
}

/// A string that is not one of the fourteen category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError {
    raw: String,
}

impl UnknownCategoryError {
    /// The rejected input, unchanged.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error category '{}'", self.raw)
    }
}

impl std::error::Error for UnknownCategoryError {}

// ============================================================================
// Wire String Helpers
// ============================================================================

/// Category portion of a wire string: the prefix before the first `.`,
/// or the whole string if there is none.
#[inline]
pub fn category_name(raw: &str) -> &str {
    raw.split_once('.').map_or(raw, |(category, _)| category)
}

/// Subcode portion of a wire string: everything after the first `.`.
#[inline]
pub fn subcode_name(raw: &str) -> Option<&str> {
    raw.split_once('.').map(|(_, subcode)| subcode)
}

/// Apply the symbol naming rule to a wire string.
///
/// Uppercase the category, then append `_` and the uppercased subcode with
/// every non-alphanumeric character stripped.
///
/// ```rust
/// # use tke_error_codes::symbol_for;
/// assert_eq!(
///     symbol_for("InvalidParameter.CIDRMaskSizeOutOfRange"),
///     "INVALIDPARAMETER_CIDRMASKSIZEOUTOFRANGE"
/// );
/// assert_eq!(symbol_for("LimitExceeded"), "LIMITEXCEEDED");
/// ```
pub fn symbol_for(wire: &str) -> String {
    let mut symbol = String::with_capacity(wire.len());
    let (category, subcode) = match wire.split_once('.') {
        Some((category, subcode)) => (category, Some(subcode)),
        None => (wire, None),
    };

    push_upper_alphanumeric(&mut symbol, category);
    if let Some(subcode) = subcode {
        symbol.push('_');
        push_upper_alphanumeric(&mut symbol, subcode);
    }
    symbol
}

fn push_upper_alphanumeric(out: &mut String, part: &str) {
    out.extend(
        part.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_uppercase()),
    );
}

// ============================================================================
// Compile-time Validation
// ============================================================================

/// `wire` is `category` or `category.Subcode` with a non-empty alphanumeric subcode.
const fn wire_matches_category(wire: &[u8], category: &[u8]) -> bool {
    if wire.len() < category.len() {
        return false;
    }
    let mut i = 0;
    while i < category.len() {
        if wire[i] != category[i] {
            return false;
        }
        i += 1;
    }
    if wire.len() == category.len() {
        return true;
    }
    if wire[i] != b'.' || wire.len() == i + 1 {
        return false;
    }
    i += 1;
    while i < wire.len() {
        if !wire[i].is_ascii_alphanumeric() {
            return false;
        }
        i += 1;
    }
    true
}

/// Const version of [`symbol_for`], comparing instead of building.
const fn symbol_follows_naming_rule(wire: &[u8], symbol: &[u8]) -> bool {
    let mut w = 0;
    let mut s = 0;
    let mut seen_dot = false;
    while w < wire.len() {
        let b = wire[w];
        let expected = if b == b'.' && !seen_dot {
            seen_dot = true;
            Some(b'_')
        } else if b.is_ascii_alphanumeric() {
            Some(b.to_ascii_uppercase())
        } else {
            None
        };
        if let Some(expected) = expected {
            if s >= symbol.len() || symbol[s] != expected {
                return false;
            }
            s += 1;
        }
        w += 1;
    }
    s == symbol.len()
}

// ============================================================================
// Error Code (Primary Identity Type)
// ============================================================================

/// One catalog entry: a category, the exact wire string, and its symbol.
///
/// `Display` writes the wire string, so `code.to_string()` is exactly what the
/// service puts on the wire.
///
/// # Example
///
/// ```rust
/// use tke_error_codes::{Category, ErrorCode};
///
/// const CLUSTER_STATE: ErrorCode = ErrorCode::const_new(
///     Category::ResourceUnavailable,
///     "ResourceUnavailable.ClusterState",
///     "RESOURCEUNAVAILABLE_CLUSTERSTATE",
/// );
///
/// assert_eq!(CLUSTER_STATE.to_string(), "ResourceUnavailable.ClusterState");
/// assert_eq!(CLUSTER_STATE.subcode(), Some("ClusterState"));
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    category: Category,
    wire: &'static str,
    symbol: &'static str,
}

impl ErrorCode {
    /// Create an error code with compile-time validation.
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - `wire` is not `category` or `category.Subcode`
    /// - the subcode is empty or not ASCII alphanumeric
    /// - `symbol` does not follow the naming rule for `wire`
    ///
    /// In **const contexts** these are compile errors.
    #[inline]
    pub const fn const_new(category: Category, wire: &'static str, symbol: &'static str) -> Self {
        assert!(
            wire_matches_category(wire.as_bytes(), category.as_str().as_bytes()),
            "Wire string must be `Category` or `Category.Subcode`"
        );
        assert!(
            symbol_follows_naming_rule(wire.as_bytes(), symbol.as_bytes()),
            "Symbol does not follow the naming rule for its wire string"
        );

        Self {
            category,
            wire,
            symbol,
        }
    }

    /// The category this code belongs to.
    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The exact string emitted by the service.
    #[inline]
    pub const fn wire(&self) -> &'static str {
        self.wire
    }

    /// Alias for [`ErrorCode::wire`].
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.wire
    }

    /// The local identifier of this entry, e.g. `INTERNALERROR_CIDRINVALI`.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Subcode after the `.`, or `None` for a bare category code.
    #[inline]
    pub fn subcode(&self) -> Option<&'static str> {
        subcode_name(self.wire)
    }

    /// Whether this is the bare category code (no subcode).
    #[inline]
    pub const fn is_bare(&self) -> bool {
        self.wire.len() == self.category.as_str().len()
    }

    /// Failure family of this code's category.
    #[inline]
    pub const fn failure_class(&self) -> FailureClass {
        self.category.failure_class()
    }

    /// Byte-exact comparison against a received code.
    #[inline]
    pub fn matches(&self, raw: &str) -> bool {
        self.wire == raw
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire)
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        self.wire
    }
}

impl PartialEq<str> for ErrorCode {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire)
    }
}

// ============================================================================
// Tests
// ============================================================================
