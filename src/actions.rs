//! Documented error codes of the service actions the cluster autoscaler calls.
//!
//! The upstream API reference lists, for every action, the codes it may
//! return. This module keeps those lists for the actions used when managing
//! node pools and auto scaling groups, so callers can tell an expected failure
//! from one the action is not documented to produce.
//!
//! A code missing from an action's list is not proof of a bug. The service
//! can add codes at any time.
//!
//! ```rust
//! use tke_error_codes::{Action, definitions};
//!
//! let action = Action::from_name("DescribeClusterNodePools").unwrap();
//! assert!(action.documents(&definitions::RESOURCENOTFOUND_CLUSTERNOTFOUND));
//! assert!(!action.documents(&definitions::RESOURCESSOLDOUT));
//! ```

use crate::definitions::*;
use crate::ErrorCode;
use std::fmt;

/// Service version these action lists belong to.
pub const API_VERSION: &str = "2018-05-25";

/// Service name used in action routing and in error metrics.
pub const SERVICE: &str = "tke";

/// Actions of the managed Kubernetes service used by the autoscaler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Remove instances from a cluster.
    DeleteClusterInstances,
    /// List the auto scaling groups attached to a cluster.
    DescribeClusterAsGroups,
    /// List the node instances of a cluster.
    DescribeClusterInstances,
    /// List the node pools of a cluster.
    DescribeClusterNodePools,
    /// Query pod limits per instance type for VPC-CNI networking.
    DescribeVpcCniPodLimits,
    /// Change min/max size and other attributes of a cluster auto scaling group.
    ModifyClusterAsGroupAttribute,
}

const DELETE_CLUSTER_INSTANCES: &[&ErrorCode] = &[
    &INTERNALERROR,
    &INTERNALERROR_ASCOMMON,
    &INTERNALERROR_CLUSTERNOTFOUND,
    &INTERNALERROR_CLUSTERSTATE,
    &INTERNALERROR_DB,
    &INTERNALERROR_DBAFFECTIVEDROWS,
    &INTERNALERROR_PARAM,
    &INTERNALERROR_PUBLICCLUSTEROPNOTSUPPORT,
    &INTERNALERROR_UNEXCEPTEDINTERNAL,
    &INVALIDPARAMETER,
    &LIMITEXCEEDED,
];

const DESCRIBE_CLUSTER_AS_GROUPS: &[&ErrorCode] = &[
    &FAILEDOPERATION,
    &INTERNALERROR,
    &INTERNALERROR_ACCOUNTUSERNOTAUTHENTICATED,
    &INTERNALERROR_ASCOMMON,
    &INTERNALERROR_CLUSTERNOTFOUND,
    &INTERNALERROR_CLUSTERSTATE,
    &INTERNALERROR_DB,
    &INTERNALERROR_PARAM,
    &INTERNALERROR_PODNOTFOUND,
    &INTERNALERROR_UNEXCEPTEDINTERNAL,
    &INTERNALERROR_VPCCOMMON,
    &INTERNALERROR_VPCPEERNOTFOUND,
    &INTERNALERROR_VPCRECODRNOTFOUND,
];

const DESCRIBE_CLUSTER_INSTANCES: &[&ErrorCode] = &[
    &FAILEDOPERATION,
    &INTERNALERROR,
    &INTERNALERROR_DB,
    &INTERNALERROR_DBAFFECTIVEDROWS,
    &INTERNALERROR_INITMASTERFAILED,
    &INTERNALERROR_PARAM,
    &INTERNALERROR_PUBLICCLUSTEROPNOTSUPPORT,
    &INVALIDPARAMETER_CLUSTERNOTFOUND,
    &INVALIDPARAMETER_PARAM,
    &RESOURCEUNAVAILABLE_CLUSTERSTATE,
];

const DESCRIBE_CLUSTER_NODE_POOLS: &[&ErrorCode] = &[
    &INTERNALERROR_DBRECORDNOTFOUND,
    &INTERNALERROR_PARAM,
    &INTERNALERROR_UNEXPECTEDINTERNAL,
    &INVALIDPARAMETER_PARAM,
    &RESOURCENOTFOUND_CLUSTERNOTFOUND,
];

const DESCRIBE_VPC_CNI_POD_LIMITS: &[&ErrorCode] = &[
    &FAILEDOPERATION,
    &INTERNALERROR,
    &INTERNALERROR_CAMNOAUTH,
    &INTERNALERROR_DB,
    &INTERNALERROR_PARAM,
    &INTERNALERROR_UNEXCEPTEDINTERNAL,
    &INTERNALERROR_UNEXPECTEDINTERNAL,
    &INVALIDPARAMETER,
    &INVALIDPARAMETER_PARAM,
    &MISSINGPARAMETER,
    &UNAUTHORIZEDOPERATION,
    &UNKNOWNPARAMETER,
    &UNSUPPORTEDOPERATION,
];

const MODIFY_CLUSTER_AS_GROUP_ATTRIBUTE: &[&ErrorCode] = &[
    &FAILEDOPERATION,
    &INTERNALERROR,
    &INTERNALERROR_ACCOUNTUSERNOTAUTHENTICATED,
    &INTERNALERROR_ASCOMMON,
    &INTERNALERROR_CAMNOAUTH,
    &INTERNALERROR_PARAM,
    &INTERNALERROR_UNEXCEPTEDINTERNAL,
    &INVALIDPARAMETER,
    &INVALIDPARAMETER_ASCOMMONERROR,
    &INVALIDPARAMETER_CIDROUTOFROUTETABLE,
    &INVALIDPARAMETER_GATEWAYALREADYASSOCIATEDCIDR,
    &INVALIDPARAMETER_PARAM,
    &INVALIDPARAMETER_ROUTETABLENOTEMPTY,
    &LIMITEXCEEDED,
    &MISSINGPARAMETER,
    &RESOURCEINUSE,
    &RESOURCENOTFOUND,
    &RESOURCEUNAVAILABLE,
    &UNAUTHORIZEDOPERATION,
    &UNKNOWNPARAMETER,
    &UNSUPPORTEDOPERATION,
];

impl Action {
    /// Every action, alphabetical.
    pub const ALL: [Action; 6] = [
        Self::DeleteClusterInstances,
        Self::DescribeClusterAsGroups,
        Self::DescribeClusterInstances,
        Self::DescribeClusterNodePools,
        Self::DescribeVpcCniPodLimits,
        Self::ModifyClusterAsGroupAttribute,
    ];

    /// Action name as sent in the request.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeleteClusterInstances => "DeleteClusterInstances",
            Self::DescribeClusterAsGroups => "DescribeClusterAsGroups",
            Self::DescribeClusterInstances => "DescribeClusterInstances",
            Self::DescribeClusterNodePools => "DescribeClusterNodePools",
            Self::DescribeVpcCniPodLimits => "DescribeVpcCniPodLimits",
            Self::ModifyClusterAsGroupAttribute => "ModifyClusterAsGroupAttribute",
        }
    }

    /// Parse an exact action name.
    pub fn from_name(name: &str) -> Result<Self, UnknownActionError> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| UnknownActionError { raw: name.to_owned() })
    }

    /// Codes the API reference lists for this action.
    pub const fn documented_codes(self) -> &'static [&'static ErrorCode] {
        match self {
            Self::DeleteClusterInstances => DELETE_CLUSTER_INSTANCES,
            Self::DescribeClusterAsGroups => DESCRIBE_CLUSTER_AS_GROUPS,
            Self::DescribeClusterInstances => DESCRIBE_CLUSTER_INSTANCES,
            Self::DescribeClusterNodePools => DESCRIBE_CLUSTER_NODE_POOLS,
            Self::DescribeVpcCniPodLimits => DESCRIBE_VPC_CNI_POD_LIMITS,
            Self::ModifyClusterAsGroupAttribute => MODIFY_CLUSTER_AS_GROUP_ATTRIBUTE,
        }
    }

    /// Whether `code` is on this action's documented list.
    pub fn documents(self, code: &ErrorCode) -> bool {
        self.documented_codes().iter().any(|listed| *listed == code)
    }

    /// Whether the received string is on this action's documented list.
    pub fn documents_wire(self, raw: &str) -> bool {
        self.documented_codes().iter().any(|listed| listed.matches(raw))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that is not a known action name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActionError {
    raw: String,
}

impl UnknownActionError {
    /// The rejected input, unchanged.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for UnknownActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} action '{}'", SERVICE, self.raw)
    }
}

impl std::error::Error for UnknownActionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup;

    #[test]
    fn names_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), Ok(action));
            assert_eq!(action.to_string(), action.name());
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = Action::from_name("describeClusterNodePools").unwrap_err();
        assert_eq!(err.raw(), "describeClusterNodePools");
        assert_eq!(err.to_string(), "unknown tke action 'describeClusterNodePools'");
    }

    #[test]
    fn documented_codes_are_catalog_entries() {
        for action in Action::ALL {
            for code in action.documented_codes() {
                assert!(
                    lookup(code.wire()).is(code),
                    "{} lists {} which is not in the catalog",
                    action,
                    code
                );
            }
        }
    }

    #[test]
    fn documented_lists_have_no_duplicates() {
        for action in Action::ALL {
            let codes = action.documented_codes();
            for (i, a) in codes.iter().enumerate() {
                assert!(codes[i + 1..].iter().all(|b| b != a), "{} repeats {}", action, a);
            }
        }
    }

    #[test]
    fn delete_lists_the_misspelled_internal_code() {
        let action = Action::DeleteClusterInstances;
        assert!(action.documents(&INTERNALERROR_UNEXCEPTEDINTERNAL));
        assert!(!action.documents(&INTERNALERROR_UNEXPECTEDINTERNAL));
        assert!(action.documents_wire("InternalError.UnexceptedInternal"));
    }

    #[test]
    fn pod_limits_lists_both_internal_spellings() {
        let action = Action::DescribeVpcCniPodLimits;
        assert!(action.documents(&INTERNALERROR_UNEXCEPTEDINTERNAL));
        assert!(action.documents(&INTERNALERROR_UNEXPECTEDINTERNAL));
    }

    #[test]
    fn documents_wire_is_byte_exact() {
        let action = Action::DescribeClusterNodePools;
        assert!(action.documents_wire("ResourceNotFound.ClusterNotFound"));
        assert!(!action.documents_wire("resourcenotfound.clusternotfound"));
        assert!(!action.documents_wire("SomeNewCode.Whatever"));
    }
}
