//! Catalog-wide invariants and the documented lookup scenarios.

use std::collections::HashSet;
use tke_error_codes::definitions::{self, CATALOG, CATALOG_LEN};
use tke_error_codes::{category_name, lookup, symbol_for, Action, ApiError, Category, ErrorCode, Lookup};

// ============================================================================
// STRUCTURAL INVARIANTS
// ============================================================================

#[test]
fn wire_strings_are_unique() {
    let mut seen = HashSet::new();
    for code in definitions::iter() {
        assert!(seen.insert(code.wire()), "duplicate wire string {}", code);
    }
    assert_eq!(seen.len(), CATALOG_LEN);
}

#[test]
fn symbols_are_unique() {
    let mut seen = HashSet::new();
    for code in definitions::iter() {
        assert!(seen.insert(code.symbol()), "duplicate symbol {}", code.symbol());
    }
}

#[test]
fn every_subcode_has_a_bare_category_entry() {
    let bare: HashSet<&str> = definitions::iter()
        .filter(|code| !code.wire().contains('.'))
        .map(ErrorCode::wire)
        .collect();

    for code in definitions::iter().filter(|code| code.wire().contains('.')) {
        assert!(
            bare.contains(category_name(code.wire())),
            "{} has no bare category entry",
            code
        );
    }
}

#[test]
fn bare_entries_are_exactly_the_categories() {
    let bare: Vec<&str> = definitions::iter()
        .filter(|code| code.is_bare())
        .map(ErrorCode::wire)
        .collect();
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(bare, names);
}

#[test]
fn symbols_follow_naming_rule() {
    for code in definitions::iter() {
        assert_eq!(symbol_for(code.wire()), code.symbol(), "naming rule broken for {}", code);
    }
}

#[test]
fn families_hold_their_own_category() {
    for (category, family) in Category::ALL.into_iter().zip(CATALOG) {
        assert_eq!(category.codes().len(), family.len());
        for code in *family {
            assert_eq!(code.category(), category);
            assert_eq!(Category::from_wire(code.wire()), Some(category));
        }
    }
}

#[test]
fn accessors_are_stable() {
    let first: Vec<(&str, &str)> = definitions::iter().map(|c| (c.wire(), c.symbol())).collect();
    let second: Vec<(&str, &str)> = definitions::iter().map(|c| (c.wire(), c.symbol())).collect();
    assert_eq!(first, second);

    let code = &definitions::FAILEDOPERATION_RBACFORBIDDEN;
    assert_eq!(code.wire(), "FailedOperation.RBACForbidden");
    assert_eq!(code.to_string(), code.wire());
    assert_eq!(AsRef::<str>::as_ref(code), code.wire());
}

#[test]
fn preserved_typos() {
    assert_eq!(definitions::INTERNALERROR_CIDRINVALI.wire(), "InternalError.CidrInvali");
    assert_eq!(definitions::INTERNALERROR_VPCRECODRNOTFOUND.wire(), "InternalError.VpcRecodrNotFound");
    assert!(lookup("InternalError.UnexceptedInternal").is_known());
    assert!(lookup("InternalError.UnexpectedInternal").is_known());
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn cluster_not_found_resolves() {
    let found = lookup("ResourceNotFound.ClusterNotFound");
    let code = found.code().expect("catalog entry");
    assert_eq!(code.symbol(), "RESOURCENOTFOUND_CLUSTERNOTFOUND");
    assert_eq!(category_name(found.raw()), "ResourceNotFound");
    assert_eq!(found.category(), Some(Category::ResourceNotFound));
}

#[test]
fn truncated_cidr_code_resolves() {
    let found = lookup("InternalError.CidrInvali");
    assert_eq!(found.code().map(ErrorCode::symbol), Some("INTERNALERROR_CIDRINVALI"));
}

#[test]
fn bare_category_resolves() {
    let found = lookup("InvalidParameter");
    assert!(found.is(&definitions::INVALIDPARAMETER));
    assert_eq!(category_name("InvalidParameter"), "InvalidParameter");
    assert_eq!(found.category(), Some(Category::InvalidParameter));
}

#[test]
fn unknown_code_is_surfaced_raw() {
    let found = lookup("SomeNewCode.Whatever");
    assert_eq!(found, Lookup::Unknown("SomeNewCode.Whatever"));

    let err = ApiError::new("SomeNewCode.Whatever", "m", "r");
    assert_eq!(err.code(), "SomeNewCode.Whatever");
    assert!(err.to_string().contains("Code=SomeNewCode.Whatever,"));
}

#[test]
fn excepted_and_expected_are_distinct() {
    let excepted = &definitions::INTERNALERROR_UNEXCEPTEDINTERNAL;
    let expected = &definitions::INTERNALERROR_UNEXPECTEDINTERNAL;
    assert_ne!(excepted, expected);
    assert_ne!(excepted.wire(), expected.wire());
    assert_eq!(excepted.wire().len(), expected.wire().len());

    let differing: Vec<usize> = excepted
        .wire()
        .bytes()
        .zip(expected.wire().bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect();

    // "Unexcepted" vs "Unexpected": c and p swap places
    assert_eq!(differing, [18, 20]);
    assert_eq!(excepted.wire().as_bytes()[18], b'c');
    assert_eq!(expected.wire().as_bytes()[18], b'p');
    assert_eq!(excepted.wire().as_bytes()[20], b'p');
    assert_eq!(expected.wire().as_bytes()[20], b'c');
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(lookup("invalidparameter").is_unknown());
    assert!(ErrorCode::from_wire("invalidparameter").is_none());
    for code in definitions::iter() {
        let lower = code.wire().to_ascii_lowercase();
        if lower != code.wire() {
            assert!(lookup(&lower).is_unknown(), "{} matched case-insensitively", lower);
        }
    }
}

// ============================================================================
// ENVELOPE FIXTURES
// ============================================================================

/// Pull the three error fields out of a response envelope.
fn api_error_from_envelope(body: &str) -> ApiError {
    let value: serde_json::Value = serde_json::from_str(body).expect("valid JSON");
    let response = &value["Response"];
    let field = |v: &serde_json::Value| v.as_str().unwrap_or_default().to_owned();
    ApiError::new(
        field(&response["Error"]["Code"]),
        field(&response["Error"]["Message"]),
        field(&response["RequestId"]),
    )
}

#[test]
fn envelope_with_known_code() {
    let err = api_error_from_envelope(
        r#"{"Response":{"Error":{"Code":"ResourceUnavailable.ClusterState","Message":"cluster cls-1 is scaling"},"RequestId":"6e8e4c36-2a6b-4f7a-9f52-1a0b6d2f0c11"}}"#,
    )
    .with_action(Action::DescribeClusterInstances);

    assert!(err.is(&definitions::RESOURCEUNAVAILABLE_CLUSTERSTATE));
    assert_eq!(err.is_documented(), Some(true));
    assert_eq!(err.request_id(), "6e8e4c36-2a6b-4f7a-9f52-1a0b6d2f0c11");
    assert_eq!(
        err.to_string(),
        "[TencentCloudSDKError] Code=ResourceUnavailable.ClusterState, Message=cluster cls-1 is scaling, RequestId=6e8e4c36-2a6b-4f7a-9f52-1a0b6d2f0c11"
    );
}

#[test]
fn envelope_with_unknown_code() {
    let err = api_error_from_envelope(
        r#"{"Response":{"Error":{"Code":"InternalError.RegionMaintenance","Message":"try later"},"RequestId":"req-77"}}"#,
    );
    assert!(!err.is_recognized());
    assert_eq!(err.code(), "InternalError.RegionMaintenance");
    assert_eq!(err.category(), Some(Category::InternalError));
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use tke_error_codes::FailureClass;

    #[test]
    fn error_code_serializes_as_wire_string() {
        let json = serde_json::to_string(&definitions::INVALIDPARAMETER_PARAM).unwrap();
        assert_eq!(json, r#""InvalidParameter.Param""#);
    }

    #[test]
    fn category_round_trips() {
        let json = serde_json::to_string(&Category::ResourcesSoldOut).unwrap();
        assert_eq!(json, r#""ResourcesSoldOut""#);
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::ResourcesSoldOut);

        let class: FailureClass = serde_json::from_str(r#""ServiceFault""#).unwrap();
        assert_eq!(class, FailureClass::ServiceFault);
    }
}
