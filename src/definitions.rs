//! The error code catalog for the managed Kubernetes service API, version 2018-05-25.
//!
//! # Taxonomy
//!
//! Every entry is a `pub const` [`ErrorCode`] whose name is its symbol and whose
//! wire string is byte-exact with what the service emits. Entries are grouped
//! by category; each group also exports a family slice (`INTERNAL_ERROR_CODES`,
//! ...) with the bare category code first.
//!
//! # Upstream Spellings
//!
//! Subcodes are kept exactly as the service sends them, including:
//! - `InternalError.CidrInvali` (no trailing `d`)
//! - `InternalError.ComponentClinetHttp` next to `InternalError.ComponentClientHttp`
//! - `InternalError.UnexceptedInternal` next to `InternalError.UnexpectedInternal`
//! - `InternalError.DbAffectivedRows`, `InternalError.VpcRecodrNotFound`
//!
//! Both members of each near-duplicate pair are live codes; neither is deprecated.
//!
//! # Glosses
//!
//! The one-line docs on each constant describe the code in English. They are
//! documentation only; the meaning of a code is fixed by the service.
//!
//! # Governance
//!
//! The constant checks at the bottom of this file run at compile time:
//! - family slices appear in [`Category::ALL`] order
//! - every entry belongs to its family's category
//! - every family starts with its bare category code
//! - wire strings are unique across the catalog
//!
//! Symbol uniqueness follows from Rust itself (duplicate constant names do not
//! compile) and the naming rule is checked by [`ErrorCode::const_new`].

use crate::{define_error_codes, Category, ErrorCode};

// -----------------------------------------------------------------------------
// FailedOperation
// -----------------------------------------------------------------------------
// CLASS: Refused
// ACTION: Surface to caller; do not retry unchanged
define_error_codes! {
    Category::FailedOperation =>
    /// Every `FailedOperation` code.
    FAILED_OPERATION_CODES {
        /// Operation failed.
        FAILEDOPERATION = "FailedOperation",
        /// Request forbidden by the cluster's RBAC rules.
        FAILEDOPERATION_RBACFORBIDDEN = "FailedOperation.RBACForbidden",
    }
}

// -----------------------------------------------------------------------------
// InternalError
// -----------------------------------------------------------------------------
// CLASS: ServiceFault
// ACTION: Bounded retry for transient subcodes (timeouts, client connections);
//         surface semantic subcodes (not found, quota, CIDR conflicts) at once
define_error_codes! {
    Category::InternalError =>
    /// Every `InternalError` code.
    INTERNAL_ERROR_CODES {
        /// Internal error.
        INTERNALERROR = "InternalError",
        /// Account service error.
        INTERNALERROR_ACCOUNTCOMMON = "InternalError.AccountCommon",
        /// Account has not completed identity verification.
        INTERNALERROR_ACCOUNTUSERNOTAUTHENTICATED = "InternalError.AccountUserNotAuthenticated",
        /// Auto scaling service call failed.
        INTERNALERROR_ASCOMMON = "InternalError.AsCommon",
        /// No CAM permission for the request.
        INTERNALERROR_CAMNOAUTH = "InternalError.CamNoAuth",
        /// CIDR conflicts with another cluster.
        INTERNALERROR_CIDRCONFLICTWITHOTHERCLUSTER = "InternalError.CidrConflictWithOtherCluster",
        /// CIDR conflicts with another route.
        INTERNALERROR_CIDRCONFLICTWITHOTHERROUTE = "InternalError.CidrConflictWithOtherRoute",
        /// CIDR conflicts with the VPC CIDR.
        INTERNALERROR_CIDRCONFLICTWITHVPCCIDR = "InternalError.CidrConflictWithVpcCidr",
        /// CIDR conflicts with a VPC global route.
        INTERNALERROR_CIDRCONFLICTWITHVPCGLOBALROUTE = "InternalError.CidrConflictWithVpcGlobalRoute",
        /// CIDR is invalid. Upstream omits the trailing `d`.
        INTERNALERROR_CIDRINVALI = "InternalError.CidrInvali",
        /// CIDR mask size out of range.
        INTERNALERROR_CIDRMASKSIZEOUTOFRANGE = "InternalError.CidrMaskSizeOutOfRange",
        /// CIDR is outside the route table.
        INTERNALERROR_CIDROUTOFROUTETABLE = "InternalError.CidrOutOfRouteTable",
        /// Cluster not found.
        INTERNALERROR_CLUSTERNOTFOUND = "InternalError.ClusterNotFound",
        /// Cluster state does not allow the operation.
        INTERNALERROR_CLUSTERSTATE = "InternalError.ClusterState",
        /// Node version does not allow the cluster upgrade.
        INTERNALERROR_CLUSTERUPGRADENODEVERSION = "InternalError.ClusterUpgradeNodeVersion",
        /// Command execution timed out.
        INTERNALERROR_CMDTIMEOUT = "InternalError.CmdTimeout",
        /// HTTP call to a cluster component failed.
        INTERNALERROR_COMPONENTCLIENTHTTP = "InternalError.ComponentClientHttp",
        /// HTTP call to a cluster component failed (upstream spelling `Clinet`).
        INTERNALERROR_COMPONENTCLINETHTTP = "InternalError.ComponentClinetHttp",
        /// Container not found.
        INTERNALERROR_CONTAINERNOTFOUND = "InternalError.ContainerNotFound",
        /// Master creation failed.
        INTERNALERROR_CREATEMASTERFAILED = "InternalError.CreateMasterFailed",
        /// CVM service call failed.
        INTERNALERROR_CVMCOMMON = "InternalError.CvmCommon",
        /// CVM instance not found.
        INTERNALERROR_CVMNOTFOUND = "InternalError.CvmNotFound",
        /// Number of CVM instances does not match.
        INTERNALERROR_CVMNUMBERNOTMATCH = "InternalError.CvmNumberNotMatch",
        /// CVM instance is in an unexpected status.
        INTERNALERROR_CVMSTATUS = "InternalError.CvmStatus",
        /// Database error.
        INTERNALERROR_DB = "InternalError.Db",
        /// Unexpected number of affected database rows.
        INTERNALERROR_DBAFFECTIVEDROWS = "InternalError.DbAffectivedRows",
        /// Database record not found.
        INTERNALERROR_DBRECORDNOTFOUND = "InternalError.DbRecordNotFound",
        /// Failed to read the security group count.
        INTERNALERROR_DFWGETUSGCOUNT = "InternalError.DfwGetUSGCount",
        /// Failed to read the security group quota.
        INTERNALERROR_DFWGETUSGQUOTA = "InternalError.DfwGetUSGQuota",
        /// Operation not supported on an empty cluster.
        INTERNALERROR_EMPTYCLUSTERNOTSUPPORT = "InternalError.EmptyClusterNotSupport",
        /// Gateway already associated with a CIDR.
        INTERNALERROR_GATEWAYALREADYASSOCIATEDCIDR = "InternalError.GatewayAlreadyAssociatedCidr",
        /// Image ID not found.
        INTERNALERROR_IMAGEIDNOTFOUND = "InternalError.ImageIdNotFound",
        /// Master initialisation failed.
        INTERNALERROR_INITMASTERFAILED = "InternalError.InitMasterFailed",
        /// Invalid private network CIDR.
        INTERNALERROR_INVALIDPRIVATENETWORKCIDR = "InternalError.InvalidPrivateNetworkCidr",
        /// Could not connect to the cluster API server.
        INTERNALERROR_KUBECLIENTCONNECTION = "InternalError.KubeClientConnection",
        /// Could not create the Kubernetes client.
        INTERNALERROR_KUBECLIENTCREATE = "InternalError.KubeClientCreate",
        /// Kubernetes API call failed.
        INTERNALERROR_KUBECOMMON = "InternalError.KubeCommon",
        /// Could not build the Kubernetes client.
        INTERNALERROR_KUBERNETESCLIENTBUILDERROR = "InternalError.KubernetesClientBuildError",
        /// Kubernetes create operation failed.
        INTERNALERROR_KUBERNETESCREATEOPERATIONERROR = "InternalError.KubernetesCreateOperationError",
        /// Kubernetes delete operation failed.
        INTERNALERROR_KUBERNETESDELETEOPERATIONERROR = "InternalError.KubernetesDeleteOperationError",
        /// Kubernetes get operation failed.
        INTERNALERROR_KUBERNETESGETOPERATIONERROR = "InternalError.KubernetesGetOperationError",
        /// Kubernetes internal error.
        INTERNALERROR_KUBERNETESINTERNAL = "InternalError.KubernetesInternal",
        /// Load balancer service call failed.
        INTERNALERROR_LBCOMMON = "InternalError.LbCommon",
        /// Operating system not supported.
        INTERNALERROR_OSNOTSUPPORT = "InternalError.OsNotSupport",
        /// Parameter error.
        INTERNALERROR_PARAM = "InternalError.Param",
        /// Pod not found.
        INTERNALERROR_PODNOTFOUND = "InternalError.PodNotFound",
        /// Operation not supported on this cluster type.
        INTERNALERROR_PUBLICCLUSTEROPNOTSUPPORT = "InternalError.PublicClusterOpNotSupport",
        /// Cluster count quota reached.
        INTERNALERROR_QUOTAMAXCLSLIMIT = "InternalError.QuotaMaxClsLimit",
        /// Node count quota reached.
        INTERNALERROR_QUOTAMAXNODLIMIT = "InternalError.QuotaMaxNodLimit",
        /// Route table quota reached.
        INTERNALERROR_QUOTAMAXRTLIMIT = "InternalError.QuotaMaxRtLimit",
        /// Security group quota reached.
        INTERNALERROR_QUOTAUSGLIMIT = "InternalError.QuotaUSGLimit",
        /// Resource already exists.
        INTERNALERROR_RESOURCEEXISTALREADY = "InternalError.ResourceExistAlready",
        /// Route table is not empty.
        INTERNALERROR_ROUTETABLENOTEMPTY = "InternalError.RouteTableNotEmpty",
        /// Route table not found.
        INTERNALERROR_ROUTETABLENOTFOUND = "InternalError.RouteTableNotFound",
        /// Task creation failed.
        INTERNALERROR_TASKCREATEFAILED = "InternalError.TaskCreateFailed",
        /// Task is in an invalid lifecycle state.
        INTERNALERROR_TASKLIFESTATEERROR = "InternalError.TaskLifeStateError",
        /// Task not found.
        INTERNALERROR_TASKNOTFOUND = "InternalError.TaskNotFound",
        /// Unexpected internal error (upstream spelling `Unexcepted`).
        INTERNALERROR_UNEXCEPTEDINTERNAL = "InternalError.UnexceptedInternal",
        /// Unexpected internal error.
        INTERNALERROR_UNEXPECTEDINTERNAL = "InternalError.UnexpectedInternal",
        /// Unexpected VPC error.
        INTERNALERROR_VPCUNEXPECTEDERROR = "InternalError.VPCUnexpectedError",
        /// VPC service call failed.
        INTERNALERROR_VPCCOMMON = "InternalError.VpcCommon",
        /// VPC peering connection not found.
        INTERNALERROR_VPCPEERNOTFOUND = "InternalError.VpcPeerNotFound",
        /// VPC record not found.
        INTERNALERROR_VPCRECODRNOTFOUND = "InternalError.VpcRecodrNotFound",
        /// Unexpected allow-list error.
        INTERNALERROR_WHITELISTUNEXPECTEDERROR = "InternalError.WhitelistUnexpectedError",
    }
}

// -----------------------------------------------------------------------------
// InvalidParameter
// -----------------------------------------------------------------------------
// CLASS: InvalidInput
// ACTION: Fix the request; never retry unchanged
define_error_codes! {
    Category::InvalidParameter =>
    /// Every `InvalidParameter` code.
    INVALID_PARAMETER_CODES {
        /// Invalid parameter.
        INVALIDPARAMETER = "InvalidParameter",
        /// Auto scaling parameter error.
        INVALIDPARAMETER_ASCOMMONERROR = "InvalidParameter.AsCommonError",
        /// CIDR mask size out of range.
        INVALIDPARAMETER_CIDRMASKSIZEOUTOFRANGE = "InvalidParameter.CIDRMaskSizeOutOfRange",
        /// CIDR conflicts with another cluster.
        INVALIDPARAMETER_CIDRCONFLICTWITHOTHERCLUSTER = "InvalidParameter.CidrConflictWithOtherCluster",
        /// CIDR conflicts with another route.
        INVALIDPARAMETER_CIDRCONFLICTWITHOTHERROUTE = "InvalidParameter.CidrConflictWithOtherRoute",
        /// CIDR conflicts with the VPC CIDR.
        INVALIDPARAMETER_CIDRCONFLICTWITHVPCCIDR = "InvalidParameter.CidrConflictWithVpcCidr",
        /// CIDR conflicts with a VPC global route.
        INVALIDPARAMETER_CIDRCONFLICTWITHVPCGLOBALROUTE = "InvalidParameter.CidrConflictWithVpcGlobalRoute",
        /// CIDR is invalid.
        INVALIDPARAMETER_CIDRINVALID = "InvalidParameter.CidrInvalid",
        /// CIDR is outside the route table.
        INVALIDPARAMETER_CIDROUTOFROUTETABLE = "InvalidParameter.CidrOutOfRouteTable",
        /// Cluster not found.
        INVALIDPARAMETER_CLUSTERNOTFOUND = "InvalidParameter.ClusterNotFound",
        /// Gateway already associated with a CIDR.
        INVALIDPARAMETER_GATEWAYALREADYASSOCIATEDCIDR = "InvalidParameter.GatewayAlreadyAssociatedCidr",
        /// Invalid private network CIDR.
        INVALIDPARAMETER_INVALIDPRIVATENETWORKCIDR = "InvalidParameter.InvalidPrivateNetworkCIDR",
        /// Parameter error.
        INVALIDPARAMETER_PARAM = "InvalidParameter.Param",
        /// Prometheus cluster not found.
        INVALIDPARAMETER_PROMCLUSTERNOTFOUND = "InvalidParameter.PromClusterNotFound",
        /// Prometheus instance not found.
        INVALIDPARAMETER_PROMINSTANCENOTFOUND = "InvalidParameter.PromInstanceNotFound",
        /// Referenced resource not found.
        INVALIDPARAMETER_RESOURCENOTFOUND = "InvalidParameter.ResourceNotFound",
        /// Route table is not empty.
        INVALIDPARAMETER_ROUTETABLENOTEMPTY = "InvalidParameter.RouteTableNotEmpty",
    }
}

// -----------------------------------------------------------------------------
// LimitExceeded / MissingParameter
// -----------------------------------------------------------------------------
define_error_codes! {
    Category::LimitExceeded =>
    /// Every `LimitExceeded` code.
    LIMIT_EXCEEDED_CODES {
        /// Quota limit exceeded.
        LIMITEXCEEDED = "LimitExceeded",
    }
}

define_error_codes! {
    Category::MissingParameter =>
    /// Every `MissingParameter` code.
    MISSING_PARAMETER_CODES {
        /// Required parameter missing.
        MISSINGPARAMETER = "MissingParameter",
    }
}

// -----------------------------------------------------------------------------
// OperationDenied
// -----------------------------------------------------------------------------
// CLASS: Authorization
// ACTION: Surface to caller
define_error_codes! {
    Category::OperationDenied =>
    /// Every `OperationDenied` code.
    OPERATION_DENIED_CODES {
        /// Operation denied.
        OPERATIONDENIED = "OperationDenied",
        /// Cluster has deletion protection enabled.
        OPERATIONDENIED_CLUSTERINDELETIONPROTECTION = "OperationDenied.ClusterInDeletionProtection",
    }
}

// -----------------------------------------------------------------------------
// Resource state
// -----------------------------------------------------------------------------
// CLASS: ResourceState
// ACTION: Depends on subcode; NotFound is surfaced immediately
define_error_codes! {
    Category::ResourceInUse =>
    /// Every `ResourceInUse` code.
    RESOURCE_IN_USE_CODES {
        /// Resource is in use.
        RESOURCEINUSE = "ResourceInUse",
    }
}

define_error_codes! {
    Category::ResourceInsufficient =>
    /// Every `ResourceInsufficient` code.
    RESOURCE_INSUFFICIENT_CODES {
        /// Insufficient resources.
        RESOURCEINSUFFICIENT = "ResourceInsufficient",
    }
}

define_error_codes! {
    Category::ResourceNotFound =>
    /// Every `ResourceNotFound` code.
    RESOURCE_NOT_FOUND_CODES {
        /// Resource not found.
        RESOURCENOTFOUND = "ResourceNotFound",
        /// Auto scaling group does not exist.
        RESOURCENOTFOUND_ASASGNOTEXIST = "ResourceNotFound.AsAsgNotExist",
        /// Cluster not found.
        RESOURCENOTFOUND_CLUSTERNOTFOUND = "ResourceNotFound.ClusterNotFound",
        /// Kubernetes resource not found in the cluster.
        RESOURCENOTFOUND_KUBERESOURCENOTFOUND = "ResourceNotFound.KubeResourceNotFound",
        /// Kubernetes resource not found.
        RESOURCENOTFOUND_KUBERNETESRESOURCENOTFOUND = "ResourceNotFound.KubernetesResourceNotFound",
        /// Route table not found.
        RESOURCENOTFOUND_ROUTETABLENOTFOUND = "ResourceNotFound.RouteTableNotFound",
    }
}

define_error_codes! {
    Category::ResourceUnavailable =>
    /// Every `ResourceUnavailable` code.
    RESOURCE_UNAVAILABLE_CODES {
        /// Resource unavailable.
        RESOURCEUNAVAILABLE = "ResourceUnavailable",
        /// Cluster state does not allow the operation.
        RESOURCEUNAVAILABLE_CLUSTERSTATE = "ResourceUnavailable.ClusterState",
        /// Elastic container instance is in an unexpected status.
        RESOURCEUNAVAILABLE_EKSCONTAINERSTATUS = "ResourceUnavailable.EksContainerStatus",
    }
}

define_error_codes! {
    Category::ResourcesSoldOut =>
    /// Every `ResourcesSoldOut` code.
    RESOURCES_SOLD_OUT_CODES {
        /// Resources sold out.
        RESOURCESSOLDOUT = "ResourcesSoldOut",
    }
}

// -----------------------------------------------------------------------------
// UnauthorizedOperation / UnknownParameter / UnsupportedOperation
// -----------------------------------------------------------------------------
define_error_codes! {
    Category::UnauthorizedOperation =>
    /// Every `UnauthorizedOperation` code.
    UNAUTHORIZED_OPERATION_CODES {
        /// Unauthorized operation.
        UNAUTHORIZEDOPERATION = "UnauthorizedOperation",
        /// No CAM permission for the request.
        UNAUTHORIZEDOPERATION_CAMNOAUTH = "UnauthorizedOperation.CamNoAuth",
    }
}

define_error_codes! {
    Category::UnknownParameter =>
    /// Every `UnknownParameter` code.
    UNKNOWN_PARAMETER_CODES {
        /// Unknown parameter.
        UNKNOWNPARAMETER = "UnknownParameter",
    }
}

define_error_codes! {
    Category::UnsupportedOperation =>
    /// Every `UnsupportedOperation` code.
    UNSUPPORTED_OPERATION_CODES {
        /// Unsupported operation.
        UNSUPPORTEDOPERATION = "UnsupportedOperation",
        /// Enabling the cluster autoscaler failed.
        UNSUPPORTEDOPERATION_CAENABLEFAILED = "UnsupportedOperation.CaEnableFailed",
        /// Account is not on the allow-list for this feature.
        UNSUPPORTEDOPERATION_NOTINWHITELIST = "UnsupportedOperation.NotInWhitelist",
    }
}

// -----------------------------------------------------------------------------
// Catalog
// -----------------------------------------------------------------------------

/// Every family slice, in [`Category::ALL`] order.
pub const CATALOG: &[&[&ErrorCode]] = &[
    FAILED_OPERATION_CODES,
    INTERNAL_ERROR_CODES,
    INVALID_PARAMETER_CODES,
    LIMIT_EXCEEDED_CODES,
    MISSING_PARAMETER_CODES,
    OPERATION_DENIED_CODES,
    RESOURCE_IN_USE_CODES,
    RESOURCE_INSUFFICIENT_CODES,
    RESOURCE_NOT_FOUND_CODES,
    RESOURCE_UNAVAILABLE_CODES,
    RESOURCES_SOLD_OUT_CODES,
    UNAUTHORIZED_OPERATION_CODES,
    UNKNOWN_PARAMETER_CODES,
    UNSUPPORTED_OPERATION_CODES,
];

/// Total number of entries in the catalog.
pub const CATALOG_LEN: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < CATALOG.len() {
        total += CATALOG[i].len();
        i += 1;
    }
    total
};

/// Iterate over every entry, family by family.
pub fn iter() -> impl Iterator<Item = &'static ErrorCode> {
    CATALOG.iter().flat_map(|family| family.iter().copied())
}

impl Category {
    /// Every catalog entry of this category, bare code first.
    #[inline]
    pub const fn codes(self) -> &'static [&'static ErrorCode] {
        CATALOG[self as usize]
    }

    /// The bare error code of this category.
    #[inline]
    pub const fn bare_code(self) -> &'static ErrorCode {
        self.codes()[0]
    }
}

// -----------------------------------------------------------------------------
// Compile-time catalog checks
// -----------------------------------------------------------------------------

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn catalog_is_well_formed() -> bool {
    if CATALOG.len() != Category::ALL.len() {
        return false;
    }

    let mut f = 0;
    while f < CATALOG.len() {
        let family = CATALOG[f];
        let category = Category::ALL[f];
        if category as usize != f || family.is_empty() || !family[0].is_bare() {
            return false;
        }
        let mut e = 0;
        while e < family.len() {
            if family[e].category() as usize != f {
                return false;
            }
            e += 1;
        }
        f += 1;
    }
    true
}

const fn wire_strings_are_unique() -> bool {
    let mut f1 = 0;
    while f1 < CATALOG.len() {
        let mut e1 = 0;
        while e1 < CATALOG[f1].len() {
            let a = CATALOG[f1][e1].wire().as_bytes();
            let mut f2 = f1;
            while f2 < CATALOG.len() {
                let mut e2 = if f2 == f1 { e1 + 1 } else { 0 };
                while e2 < CATALOG[f2].len() {
                    if bytes_eq(a, CATALOG[f2][e2].wire().as_bytes()) {
                        return false;
                    }
                    e2 += 1;
                }
                f2 += 1;
            }
            e1 += 1;
        }
        f1 += 1;
    }
    true
}

const _: () = assert!(catalog_is_well_formed(), "catalog families are malformed");
const _: () = assert!(wire_strings_are_unique(), "duplicate wire string in catalog");
