//! Declaration macros for catalog entries.
//!
//! # Rules
//!
//! 1. **Wire strings MUST be string literals** - they are the upstream contract
//! 2. **Symbols are the constant names themselves** - `stringify!` feeds them to
//!    [`ErrorCode::const_new`](crate::ErrorCode::const_new), so a constant whose
//!    name breaks the naming rule does not compile
//! 3. **Each block names its family slice** - the slice lists the block's
//!    entries in declaration order and is what lookups scan
//!
//! # Usage
//!
//! ```rust
//! # use tke_error_codes::{define_error_codes, Category};
//! define_error_codes! {
//!     Category::OperationDenied =>
//!     /// Every `OperationDenied` code.
//!     OPERATION_DENIED {
//!         /// Operation denied.
//!         OPERATIONDENIED = "OperationDenied",
//!         /// Cluster has deletion protection enabled.
//!         OPERATIONDENIED_CLUSTERINDELETIONPROTECTION = "OperationDenied.ClusterInDeletionProtection",
//!     }
//! }
//!
//! assert_eq!(OPERATION_DENIED.len(), 2);
//! assert_eq!(OPERATIONDENIED.wire(), "OperationDenied");
//! ```
//!
//! ```rust,compile_fail
//! # use tke_error_codes::{define_error_code, Category};
//! // ✗ COMPILE ERROR: symbol does not follow the naming rule
//! define_error_code!(INTERNALERROR_CIDRINVALID, Category::InternalError, "InternalError.CidrInvali");
//! println!("{}", INTERNALERROR_CIDRINVALID);
//! ```

/// Define a single error code constant.
///
/// # Example
///
/// ```rust
/// # use tke_error_codes::{define_error_code, Category};
/// define_error_code!(
///     /// Cluster not found.
///     RESOURCENOTFOUND_CLUSTERNOTFOUND,
///     Category::ResourceNotFound,
///     "ResourceNotFound.ClusterNotFound"
/// );
/// assert_eq!(RESOURCENOTFOUND_CLUSTERNOTFOUND.symbol(), "RESOURCENOTFOUND_CLUSTERNOTFOUND");
/// ```
#[macro_export]
macro_rules! define_error_code {
    ($(#[$meta:meta])* $name:ident, $category:expr, $wire:literal) => {
        $(#[$meta])*
        pub const $name: $crate::ErrorCode =
            $crate::ErrorCode::const_new($category, $wire, stringify!($name));
    };
}

/// Define every error code of one category plus the slice that lists them.
///
/// The bare category code goes first by convention; the catalog check in
/// `definitions` enforces it for the shipped catalog.
#[macro_export]
macro_rules! define_error_codes {
    (
        $category:expr =>
        $(#[$family_meta:meta])*
        $family:ident {
            $( $(#[$meta:meta])* $name:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(
            $crate::define_error_code!($(#[$meta])* $name, $category, $wire);
        )+

        $(#[$family_meta])*
        pub const $family: &[&$crate::ErrorCode] = &[$( &$name ),+];
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{Category, FailureClass};

    #[test]
    fn macro_single_definition() {
        define_error_code!(
            /// Resources sold out.
            RESOURCESSOLDOUT,
            Category::ResourcesSoldOut,
            "ResourcesSoldOut"
        );

        assert_eq!(RESOURCESSOLDOUT.to_string(), "ResourcesSoldOut");
        assert_eq!(RESOURCESSOLDOUT.failure_class(), FailureClass::ResourceState);
    }

    #[test]
    fn macro_batch_definition() {
        define_error_codes! {
            Category::UnauthorizedOperation => UNAUTHORIZED {
                UNAUTHORIZEDOPERATION = "UnauthorizedOperation",
                UNAUTHORIZEDOPERATION_CAMNOAUTH = "UnauthorizedOperation.CamNoAuth",
            }
        }

        assert_eq!(UNAUTHORIZED.len(), 2);
        assert!(UNAUTHORIZED[0].is_bare());
        assert_eq!(UNAUTHORIZED[1].wire(), "UnauthorizedOperation.CamNoAuth");
        assert_eq!(UNAUTHORIZED[1].symbol(), "UNAUTHORIZEDOPERATION_CAMNOAUTH");
    }
}
