//! Schema types describing the shape of a resource ID.
//!
//! A [`ResourceIdSchema`] is an ordered list of [`Segment`]s. Static segments
//! are written verbatim; user values are bound to named fields. One generic
//! decoder and encoder (see [`crate::codec`]) work for every schema.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdError;
use crate::segments::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

/// One component of a resource ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// A literal key such as `subscriptions` or `workspaces`.
    StaticLiteral(String),
    /// A provider namespace such as `Microsoft.Synapse`.
    StaticNamespace(String),
    /// A user-supplied value bound to the named field.
    UserValue(String),
}

impl Segment {
    /// Create a literal segment.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::StaticLiteral(value.into())
    }

    /// Create a provider namespace segment.
    pub fn namespace(value: impl Into<String>) -> Self {
        Self::StaticNamespace(value.into())
    }

    /// Create a user value segment.
    pub fn user_value(field: impl Into<String>) -> Self {
        Self::UserValue(field.into())
    }
}

/// The shape of one resource type's ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdSchema {
    /// Registry key, e.g. `synapse_workspace`.
    pub name: String,
    /// Human-readable name used in descriptions, e.g. `Workspace`.
    pub display_name: String,
    /// The segments in canonical order.
    pub segments: Vec<Segment>,
}

impl ResourceIdSchema {
    /// Create an empty schema.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            segments: Vec::new(),
        }
    }

    /// Create a schema starting with
    /// `/subscriptions/{subscription_id}/resourceGroups/{resource_group}`.
    pub fn resource_group_scoped(
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self::new(name, display_name)
            .with_child(SUBSCRIPTIONS, "subscription_id")
            .with_child(RESOURCE_GROUPS, "resource_group")
    }

    /// Append a single segment.
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Append `/providers/{namespace}`.
    pub fn with_provider(self, namespace: impl Into<String>) -> Self {
        self.with_segment(Segment::literal(PROVIDERS))
            .with_segment(Segment::namespace(namespace))
    }

    /// Append `/{key}/{field}`.
    pub fn with_child(self, key: impl Into<String>, field: impl Into<String>) -> Self {
        self.with_segment(Segment::literal(key))
            .with_segment(Segment::user_value(field))
    }

    /// The names of the user value fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::UserValue(field) => Some(field.as_str()),
            _ => None,
        })
    }

    /// The first provider namespace in the schema, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::StaticNamespace(namespace) => Some(namespace.as_str()),
            _ => None,
        })
    }

    /// The ID template with `{field}` placeholders.
    pub fn template(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::StaticLiteral(value) | Segment::StaticNamespace(value) => {
                    out.push_str(value)
                },
                Segment::UserValue(field) => {
                    out.push('{');
                    out.push_str(field);
                    out.push('}');
                },
            }
        }
        out
    }

    /// Check that the schema can be decoded unambiguously.
    ///
    /// # Rules
    ///
    /// - The schema begins with `subscriptions/{..}/resourceGroups/{..}`
    /// - Every user value is preceded by a literal key
    /// - Every namespace is preceded by the `providers` literal
    /// - Literals are never adjacent to each other
    /// - Field names are unique
    pub fn validate(&self) -> Result<(), IdError> {
        if self.name.is_empty() {
            return Err(IdError::invalid_schema(&self.name, "name cannot be empty"));
        }

        match self.segments.as_slice() {
            [
                Segment::StaticLiteral(subscriptions),
                Segment::UserValue(_),
                Segment::StaticLiteral(resource_groups),
                Segment::UserValue(_),
                ..
            ] if subscriptions == SUBSCRIPTIONS && resource_groups == RESOURCE_GROUPS => {},
            _ => {
                return Err(IdError::invalid_schema(
                    &self.name,
                    "must begin with subscriptions/{..}/resourceGroups/{..}",
                ))
            },
        }

        let mut fields = HashSet::new();
        let mut previous: Option<&Segment> = None;
        for segment in &self.segments {
            match (previous, segment) {
                (Some(Segment::StaticLiteral(_)), Segment::StaticLiteral(literal)) => {
                    return Err(IdError::invalid_schema(
                        &self.name,
                        format!("literal `{}` follows another literal", literal),
                    ));
                },
                (Some(Segment::StaticLiteral(key)), Segment::StaticNamespace(_))
                    if key == PROVIDERS => {},
                (_, Segment::StaticNamespace(namespace)) => {
                    return Err(IdError::invalid_schema(
                        &self.name,
                        format!("namespace `{}` must follow `{}`", namespace, PROVIDERS),
                    ));
                },
                (Some(Segment::StaticLiteral(key)), Segment::UserValue(field)) => {
                    if key == PROVIDERS {
                        return Err(IdError::invalid_schema(
                            &self.name,
                            format!("field `{}` cannot be keyed by `{}`", field, PROVIDERS),
                        ));
                    }
                    if !fields.insert(field.as_str()) {
                        return Err(IdError::invalid_schema(
                            &self.name,
                            format!("duplicate field `{}`", field),
                        ));
                    }
                },
                (_, Segment::UserValue(field)) => {
                    return Err(IdError::invalid_schema(
                        &self.name,
                        format!("field `{}` must follow a literal", field),
                    ));
                },
                (_, Segment::StaticLiteral(_)) => {},
            }
            previous = Some(segment);
        }

        if let Some(Segment::StaticLiteral(literal)) = self.segments.last() {
            return Err(IdError::invalid_schema(
                &self.name,
                format!("trailing literal `{}` has no value", literal),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ResourceIdSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> ResourceIdSchema {
        ResourceIdSchema::resource_group_scoped("synapse_workspace", "Workspace")
            .with_provider("Microsoft.Synapse")
            .with_child("workspaces", "name")
    }

    #[test]
    fn test_schema_builder() {
        let schema = workspace();
        assert_eq!(schema.segments.len(), 8);
        assert_eq!(
            schema.fields().collect::<Vec<_>>(),
            vec!["subscription_id", "resource_group", "name"]
        );
        assert_eq!(schema.namespace(), Some("Microsoft.Synapse"));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_schema_template() {
        assert_eq!(
            workspace().template(),
            "/subscriptions/{subscription_id}/resourceGroups/{resource_group}/providers/Microsoft.Synapse/workspaces/{name}"
        );
        assert!(format!("{}", workspace()).starts_with("synapse_workspace (/subscriptions/"));
    }

    #[test]
    fn test_resource_group_only_schema_is_valid() {
        let schema = ResourceIdSchema::resource_group_scoped("resource_group", "Resource Group");
        assert!(schema.validate().is_ok());
        assert_eq!(schema.namespace(), None);
    }

    #[test]
    fn test_validate_requires_subscription_prefix() {
        let schema = ResourceIdSchema::new("broken", "Broken").with_child("workspaces", "name");
        let err = schema.validate().unwrap_err();
        assert!(matches!(err, IdError::InvalidSchema { .. }));
        assert!(err.message().contains("must begin with"));
    }

    #[test]
    fn test_validate_rejects_duplicate_fields() {
        let schema = workspace().with_child("sqlPools", "name");
        let err = schema.validate().unwrap_err();
        assert!(err.message().contains("duplicate field `name`"));
    }

    #[test]
    fn test_validate_rejects_orphan_namespace() {
        let schema = ResourceIdSchema::resource_group_scoped("broken", "Broken")
            .with_segment(Segment::namespace("Microsoft.Synapse"));
        let err = schema.validate().unwrap_err();
        assert!(err.message().contains("must follow `providers`"));
    }

    #[test]
    fn test_validate_rejects_adjacent_literals() {
        let schema = ResourceIdSchema::resource_group_scoped("broken", "Broken")
            .with_segment(Segment::literal("workspaces"))
            .with_child("sqlPools", "name");
        let err = schema.validate().unwrap_err();
        assert!(err.message().contains("follows another literal"));
    }

    #[test]
    fn test_validate_rejects_trailing_literal() {
        let schema = workspace().with_segment(Segment::literal("sqlPools"));
        let err = schema.validate().unwrap_err();
        assert!(err.message().contains("trailing literal"));
    }

    #[test]
    fn test_validate_rejects_value_keyed_by_providers() {
        let schema = ResourceIdSchema::resource_group_scoped("broken", "Broken")
            .with_child("providers", "namespace");
        let err = schema.validate().unwrap_err();
        assert!(err.message().contains("cannot be keyed by `providers`"));
    }

    #[test]
    fn test_schema_json_shape() {
        let json = serde_json::to_value(
            ResourceIdSchema::resource_group_scoped("x", "X").with_provider("Microsoft.Cdn"),
        )
        .unwrap();
        assert_eq!(json["name"], "x");
        assert_eq!(json["segments"][0]["kind"], "static_literal");
        assert_eq!(json["segments"][1]["kind"], "user_value");
        assert_eq!(json["segments"][5]["kind"], "static_namespace");
        assert_eq!(json["segments"][5]["value"], "Microsoft.Cdn");
    }
}
