//! Synapse resource IDs.
//!
//! Besides the ARM IDs this module holds the two non-standard forms the
//! Synapse resources use: [`RoleAssignmentId`], a pipe-delimited
//! `{scope}|{assignment}` pair, and [`SynapseScope`], a scope that may be
//! either a workspace or a spark pool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdError;
use crate::resource_id::ResourceId;
use crate::scope::{ResolvedScope, ScopeResolver};

crate::define_resource_id! {
    /// A Synapse workspace.
    WorkspaceId("synapse_workspace", "Workspace") in "Microsoft.Synapse" {
        name: "workspaces",
    }
}

crate::define_resource_id! {
    /// The Azure AD administrator of a workspace.
    WorkspaceAadAdminId("synapse_workspace_aad_admin", "Workspace AAD Admin") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        administrator_name: "administrators",
    }
}

crate::define_resource_id! {
    /// The Azure AD administrator of a workspace's SQL endpoints.
    WorkspaceSqlAadAdminId("synapse_workspace_sql_aad_admin", "Workspace SQL AAD Admin") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        sql_administrator_name: "sqlAdministrators",
    }
}

crate::define_resource_id! {
    /// A dedicated SQL pool.
    SqlPoolId("synapse_sql_pool", "Sql Pool") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        name: "sqlPools",
    }
}

crate::define_resource_id! {
    /// The extended auditing policy of a SQL pool.
    SqlPoolExtendedAuditingPolicyId("synapse_sql_pool_extended_auditing_policy", "Sql Pool Extended Auditing Policy") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        sql_pool_name: "sqlPools",
        extended_auditing_setting_name: "extendedAuditingSettings",
    }
}

crate::define_resource_id! {
    /// The vulnerability assessment of a SQL pool.
    SqlPoolVulnerabilityAssessmentId("synapse_sql_pool_vulnerability_assessment", "Sql Pool Vulnerability Assessment") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        sql_pool_name: "sqlPools",
        vulnerability_assessment_name: "vulnerabilityAssessments",
    }
}

crate::define_resource_id! {
    /// A workload group of a SQL pool.
    SqlPoolWorkloadGroupId("synapse_sql_pool_workload_group", "Sql Pool Workload Group") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        sql_pool_name: "sqlPools",
        workload_group_name: "workloadGroups",
    }
}

crate::define_resource_id! {
    /// A workload classifier within a SQL pool workload group.
    SqlPoolWorkloadClassifierId("synapse_sql_pool_workload_classifier", "Sql Pool Workload Classifier") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        sql_pool_name: "sqlPools",
        workload_group_name: "workloadGroups",
        workload_classifier_name: "workloadClassifiers",
    }
}

crate::define_resource_id! {
    /// An Apache Spark pool.
    SparkPoolId("synapse_spark_pool", "Spark Pool") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        name: "bigDataPools",
    }
}

crate::define_resource_id! {
    /// A workspace firewall rule.
    FirewallRuleId("synapse_firewall_rule", "Firewall Rule") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        name: "firewallRules",
    }
}

crate::define_resource_id! {
    /// An integration runtime.
    IntegrationRuntimeId("synapse_integration_runtime", "Integration Runtime") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        name: "integrationRuntimes",
    }
}

crate::define_resource_id! {
    /// A managed private endpoint in the workspace's managed virtual network.
    ManagedPrivateEndpointId("synapse_managed_private_endpoint", "Managed Private Endpoint") in "Microsoft.Synapse" {
        workspace_name: "workspaces",
        managed_virtual_network_name: "managedVirtualNetworks",
        name: "managedPrivateEndpoints",
    }
}

crate::define_resource_id! {
    /// A private link hub.
    PrivateLinkHubId("synapse_private_link_hub", "Private Link Hub") in "Microsoft.Synapse" {
        name: "privateLinkHubs",
    }
}

// =============================================================================
// Scopes
// =============================================================================

const WORKSPACE_SCOPE: &str = "workspace";
const SPARK_POOL_SCOPE: &str = "spark_pool";

/// The scope of a Synapse role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SynapseScope {
    /// The assignment applies to the whole workspace.
    Workspace(WorkspaceId),
    /// The assignment applies to one spark pool.
    SparkPool(SparkPoolId),
}

impl SynapseScope {
    /// Parse a scope string.
    ///
    /// A workspace ID is tried first, then a spark pool ID.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let resolved = ScopeResolver::new()
            .with_candidate(WORKSPACE_SCOPE, WorkspaceId::schema())
            .with_candidate(SPARK_POOL_SCOPE, SparkPoolId::schema())
            .resolve(input)?;
        Self::from_resolved(resolved)
    }

    fn from_resolved(resolved: ResolvedScope<'_>) -> Result<Self, IdError> {
        match resolved.tag {
            WORKSPACE_SCOPE => Ok(Self::Workspace(WorkspaceId::from_parsed(resolved.id)?)),
            SPARK_POOL_SCOPE => Ok(Self::SparkPool(SparkPoolId::from_parsed(resolved.id)?)),
            other => Err(IdError::malformed(
                resolved.id.id(),
                format!("unexpected scope `{}`", other),
            )),
        }
    }

    /// The workspace the scope lives in.
    pub fn workspace_id(&self) -> WorkspaceId {
        match self {
            Self::Workspace(id) => id.clone(),
            Self::SparkPool(id) => WorkspaceId::new(
                id.subscription_id.clone(),
                id.resource_group.clone(),
                id.workspace_name.clone(),
            ),
        }
    }

    /// The canonical ID of the scope.
    pub fn id(&self) -> String {
        match self {
            Self::Workspace(id) => id.id(),
            Self::SparkPool(id) => id.id(),
        }
    }
}

impl fmt::Display for SynapseScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

// =============================================================================
// Role Assignments
// =============================================================================

/// A data-plane role assignment, encoded as `{scope}|{dataPlaneAssignmentId}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoleAssignmentId {
    /// The ARM ID the assignment is scoped to.
    pub scope: String,
    /// The ID the Synapse data plane gave the assignment.
    pub data_plane_assignment_id: String,
}

impl RoleAssignmentId {
    /// The delimiter between the scope and the assignment ID.
    pub const DELIMITER: char = '|';

    /// Create a role assignment ID.
    #[must_use]
    pub fn new(scope: impl Into<String>, data_plane_assignment_id: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            data_plane_assignment_id: data_plane_assignment_id.into(),
        }
    }

    /// Parse `{scope}|{dataPlaneAssignmentId}`.
    ///
    /// The input must split into exactly two non-empty parts.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        match input.split(Self::DELIMITER).collect::<Vec<_>>().as_slice() {
            [scope, assignment] if !scope.is_empty() && !assignment.is_empty() => {
                Ok(Self::new(*scope, *assignment))
            },
            _ => Err(IdError::malformed(input, "expected {scope}|{id}")),
        }
    }

    /// The canonical ID string.
    pub fn id(&self) -> String {
        format!(
            "{}{}{}",
            self.scope,
            Self::DELIMITER,
            self.data_plane_assignment_id
        )
    }

    /// Interpret the scope as a workspace or spark pool.
    pub fn synapse_scope(&self) -> Result<SynapseScope, IdError> {
        SynapseScope::parse(&self.scope)
    }
}

impl fmt::Display for RoleAssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for RoleAssignmentId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RoleAssignmentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for RoleAssignmentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
