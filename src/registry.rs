//! Lookup table from resource type name to [`ResourceIdSchema`].
//!
//! The registry lets callers decode an ID when the resource type is only
//! known at runtime, and accepts additional schemas as JSON:
//!
//! ```
//! use azurerm_resource_ids::{ParseMode, ResourceIdRegistry};
//!
//! let registry = ResourceIdRegistry::builtin();
//! let parsed = registry
//!     .parse(
//!         "synapse_workspace",
//!         "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Synapse/workspaces/ws1",
//!         ParseMode::Strict,
//!     )
//!     .unwrap();
//! assert_eq!(parsed.get("name"), Some("ws1"));
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::codec::ParsedResourceId;
use crate::error::IdError;
use crate::ids::builtin_schemas;
use crate::resource_id::ParseMode;
use crate::schema::ResourceIdSchema;

/// Schemas keyed by resource type name.
#[derive(Debug, Clone, Default)]
pub struct ResourceIdRegistry {
    schemas: BTreeMap<String, ResourceIdSchema>,
}

impl ResourceIdRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every typed ID defined in this crate.
    pub fn builtin() -> Self {
        let schemas = builtin_schemas()
            .into_iter()
            .map(|schema| (schema.name.clone(), schema.clone()))
            .collect();
        Self { schemas }
    }

    /// Add a schema after checking it is well formed.
    ///
    /// Fails with [`IdError::InvalidSchema`] if the schema is rejected or its
    /// name is already taken.
    pub fn register(&mut self, schema: ResourceIdSchema) -> Result<(), IdError> {
        schema.validate()?;
        if self.schemas.contains_key(&schema.name) {
            return Err(IdError::invalid_schema(&schema.name, "already registered"));
        }
        debug!(resource_type = %schema.name, template = %schema.template(), "registered schema");
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_schema(mut self, schema: ResourceIdSchema) -> Result<Self, IdError> {
        self.register(schema)?;
        Ok(self)
    }

    /// Load a JSON array of schemas into an empty registry.
    pub fn from_json(json: &str) -> Result<Self, IdError> {
        let mut registry = Self::new();
        registry.extend_from_json(json)?;
        Ok(registry)
    }

    /// Register every schema in a JSON array.
    ///
    /// Stops at the first rejected schema; schemas before it stay registered.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), IdError> {
        let schemas: Vec<ResourceIdSchema> = serde_json::from_str(json)?;
        for schema in schemas {
            self.register(schema)?;
        }
        Ok(())
    }

    /// Look up a schema.
    pub fn get(&self, resource_type: &str) -> Option<&ResourceIdSchema> {
        self.schemas.get(resource_type)
    }

    /// Look up a schema, failing with [`IdError::UnknownResourceType`].
    pub fn schema(&self, resource_type: &str) -> Result<&ResourceIdSchema, IdError> {
        self.get(resource_type)
            .ok_or_else(|| IdError::UnknownResourceType(resource_type.to_string()))
    }

    /// Decode `input` with the schema registered as `resource_type`.
    pub fn parse(
        &self,
        resource_type: &str,
        input: &str,
        mode: ParseMode,
    ) -> Result<ParsedResourceId, IdError> {
        self.schema(resource_type)?.decode(input, mode)
    }

    /// The registered resource type names, sorted.
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
