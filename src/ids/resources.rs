//! Resource group IDs.

crate::define_resource_id! {
    /// A resource group, `/subscriptions/{..}/resourceGroups/{..}`.
    ResourceGroupId("resource_group", "Resource Group") {}
}
