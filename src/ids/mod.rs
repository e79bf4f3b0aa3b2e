//! Typed resource IDs, grouped by Azure service.
//!
//! Every type here is generated with [`define_resource_id!`](crate::define_resource_id)
//! and shares the one generic codec.

pub mod batch;
pub mod cdn;
pub mod digitaltwins;
pub mod resources;
pub mod storage;
pub mod synapse;

use crate::resource_id::ResourceId;
use crate::schema::ResourceIdSchema;

/// The schemas of every typed ID in this crate.
pub fn builtin_schemas() -> Vec<&'static ResourceIdSchema> {
    vec![
        resources::ResourceGroupId::schema(),
        batch::AccountId::schema(),
        batch::ApplicationId::schema(),
        batch::CertificateId::schema(),
        batch::PoolId::schema(),
        batch::JobId::schema(),
        cdn::ProfileId::schema(),
        cdn::EndpointId::schema(),
        cdn::CustomDomainId::schema(),
        digitaltwins::DigitalTwinsInstanceId::schema(),
        digitaltwins::DigitalTwinsEndpointId::schema(),
        storage::StorageAccountId::schema(),
        storage::StorageContainerResourceManagerId::schema(),
        storage::EncryptionScopeId::schema(),
        synapse::WorkspaceId::schema(),
        synapse::WorkspaceAadAdminId::schema(),
        synapse::WorkspaceSqlAadAdminId::schema(),
        synapse::SqlPoolId::schema(),
        synapse::SqlPoolExtendedAuditingPolicyId::schema(),
        synapse::SqlPoolVulnerabilityAssessmentId::schema(),
        synapse::SqlPoolWorkloadGroupId::schema(),
        synapse::SqlPoolWorkloadClassifierId::schema(),
        synapse::SparkPoolId::schema(),
        synapse::FirewallRuleId::schema(),
        synapse::IntegrationRuntimeId::schema(),
        synapse::ManagedPrivateEndpointId::schema(),
        synapse::PrivateLinkHubId::schema(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_schemas_are_valid() {
        for schema in builtin_schemas() {
            assert!(schema.validate().is_ok(), "invalid schema: {}", schema);
        }
    }

    #[test]
    fn test_builtin_schema_names_unique() {
        let names: Vec<&str> = builtin_schemas()
            .iter()
            .map(|schema| schema.name.as_str())
            .collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len(), "Duplicate resource types found!");
    }

    #[test]
    fn test_builtin_templates_unique() {
        let templates: Vec<String> = builtin_schemas()
            .iter()
            .map(|schema| schema.template())
            .collect();
        let unique: HashSet<_> = templates.iter().collect();
        assert_eq!(templates.len(), unique.len());
    }
}
