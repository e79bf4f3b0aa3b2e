//! Storage resource IDs.

crate::define_resource_id! {
    /// A storage account.
    StorageAccountId("storage_account", "Storage Account") in "Microsoft.Storage" {
        name: "storageAccounts",
    }
}

crate::define_resource_id! {
    /// A blob container addressed through Resource Manager rather than the data plane.
    StorageContainerResourceManagerId("storage_container_resource_manager", "Storage Container Resource Manager") in "Microsoft.Storage" {
        storage_account_name: "storageAccounts",
        blob_service_name: "blobServices",
        container_name: "containers",
    }
}

crate::define_resource_id! {
    /// An encryption scope of a storage account.
    EncryptionScopeId("storage_encryption_scope", "Encryption Scope") in "Microsoft.Storage" {
        storage_account_name: "storageAccounts",
        name: "encryptionScopes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceId;

    #[test]
    fn test_storage_account_id() {
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.Storage/storageAccounts/account1";
        let id = StorageAccountId::parse(input).unwrap();
        assert_eq!(
            id,
            StorageAccountId::new("12345678-1234-9876-4563-123456789012", "resGroup1", "account1")
        );
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn test_storage_container_resource_manager_id() {
        let id = StorageContainerResourceManagerId::new(
            "sub1",
            "rg1",
            "account1",
            "default",
            "container1",
        );
        let expected = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Storage/storageAccounts/account1/blobServices/default/containers/container1";
        assert_eq!(id.id(), expected);
        assert_eq!(StorageContainerResourceManagerId::parse(expected).unwrap(), id);

        // Storage account IDs are not container IDs
        let err = StorageContainerResourceManagerId::parse(
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Storage/storageAccounts/account1",
        )
        .unwrap_err();
        assert_eq!(err.message(), "blobServices");
    }

    #[test]
    fn test_encryption_scope_id_extra_segments() {
        let err = EncryptionScopeId::parse(
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Storage/storageAccounts/account1/encryptionScopes/scope1/extra/value",
        )
        .unwrap_err();
        assert!(err.is_unexpected_segments());
    }
}
