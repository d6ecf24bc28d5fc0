//! Resolution of received `Code` strings against the catalog.
//!
//! Lookup is byte-exact: no case folding, no trimming, no nearest match.
//! A string that is not in the catalog comes back as [`Lookup::Unknown`] with
//! the original bytes untouched, so callers can surface it as received.
//!
//! # Example
//!
//! ```rust
//! use tke_error_codes::{lookup, Lookup, definitions};
//!
//! match lookup("ResourceNotFound.ClusterNotFound") {
//!     Lookup::Known(code) => assert_eq!(code.symbol(), "RESOURCENOTFOUND_CLUSTERNOTFOUND"),
//!     Lookup::Unknown(raw) => panic!("unexpected code {raw}"),
//! }
//!
//! assert!(lookup("SomeNewCode.Whatever").is_unknown());
//! assert!(lookup("invalidparameter").is_unknown());
//! assert!(lookup("InvalidParameter").is(&definitions::INVALIDPARAMETER));
//! ```

use crate::{Category, ErrorCode};
use std::fmt;

/// Outcome of resolving a received code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The string is a catalog entry.
    Known(&'static ErrorCode),
    /// The string is not in the catalog; carried unchanged.
    Unknown(&'a str),
}

impl<'a> Lookup<'a> {
    /// The received string, identical in both variants.
    #[inline]
    pub fn raw(&self) -> &'a str {
        match self {
            Self::Known(code) => code.wire(),
            Self::Unknown(raw) => *raw,
        }
    }

    /// The catalog entry, if any.
    #[inline]
    pub fn code(&self) -> Option<&'static ErrorCode> {
        match self {
            Self::Known(code) => Some(*code),
            Self::Unknown(_) => None,
        }
    }

    /// Whether the string matched a catalog entry.
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Whether the string is outside the catalog.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        !self.is_known()
    }

    /// Whether this resolved to exactly `code`.
    #[inline]
    pub fn is(&self, code: &ErrorCode) -> bool {
        self.code().is_some_and(|known| known == code)
    }

    /// Category of the received string.
    ///
    /// Known entries report their own category. Unknown strings report the
    /// category of their prefix when it is one of the fourteen names.
    #[inline]
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Known(code) => Some(code.category()),
            Self::Unknown(raw) => Category::from_wire(raw),
        }
    }

    /// Convert to a `Result`, keeping the raw string in the error.
    pub fn into_result(self) -> Result<&'static ErrorCode, UnknownCodeError> {
        match self {
            Self::Known(code) => Ok(code),
            Self::Unknown(raw) => Err(UnknownCodeError { raw: raw.to_owned() }),
        }
    }
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

/// Resolve a received code string.
///
/// Dispatches on the category prefix, then scans that category's family.
/// Never allocates.
pub fn lookup(raw: &str) -> Lookup<'_> {
    let found = Category::from_wire(raw)
        .and_then(|category| category.codes().iter().copied().find(|code| code.matches(raw)));

    match found {
        Some(code) => Lookup::Known(code),
        None => Lookup::Unknown(raw),
    }
}

impl ErrorCode {
    /// The catalog entry whose wire string is exactly `raw`.
    #[inline]
    pub fn from_wire(raw: &str) -> Option<&'static ErrorCode> {
        lookup(raw).code()
    }

    /// Like [`ErrorCode::from_wire`], but reports misses as an error carrying
    /// the raw string unchanged.
    ///
    /// ```rust
    /// # use tke_error_codes::ErrorCode;
    /// let err = ErrorCode::parse("SomeNewCode.Whatever").unwrap_err();
    /// assert_eq!(err.raw(), "SomeNewCode.Whatever");
    /// ```
    #[inline]
    pub fn parse(raw: &str) -> Result<&'static ErrorCode, UnknownCodeError> {
        lookup(raw).into_result()
    }
}

/// A received code that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCodeError {
    raw: String,
}

impl UnknownCodeError {
    /// The received string, unchanged.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Take the received string back.
    #[inline]
    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Category of the prefix, if it is one of the fourteen names.
    #[inline]
    pub fn category(&self) -> Option<Category> {
        Category::from_wire(&self.raw)
    }
}

impl fmt::Display for UnknownCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error code '{}' is not in the catalog", self.raw)
    }
}

impl std::error::Error for UnknownCodeError {}
