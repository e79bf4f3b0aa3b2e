//! The [`ResourceId`] trait implemented by every typed resource ID.

use serde::{Deserialize, Serialize};

use crate::codec::{describe_fields, ParsedResourceId};
use crate::error::IdError;
use crate::schema::ResourceIdSchema;

/// How static segment keys are matched while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Keys must match their canonical casing exactly.
    ///
    /// Used for IDs supplied by a user.
    #[default]
    Strict,
    /// Keys are matched ignoring ASCII case.
    ///
    /// Used only when re-reading IDs returned by the API, which is not
    /// consistent about casing.
    Insensitive,
}

impl ParseMode {
    /// Whether `actual` matches the canonical key under this mode.
    pub fn matches(self, actual: &str, canonical: &str) -> bool {
        match self {
            Self::Strict => actual == canonical,
            Self::Insensitive => actual.eq_ignore_ascii_case(canonical),
        }
    }
}

/// A typed resource ID backed by a [`ResourceIdSchema`].
///
/// Implementations are normally generated with
/// [`define_resource_id!`](crate::define_resource_id).
///
/// # Example
///
/// ```
/// use azurerm_resource_ids::ids::synapse::WorkspaceId;
/// use azurerm_resource_ids::ResourceId;
///
/// let id = WorkspaceId::new("sub1", "rg1", "ws1");
/// assert_eq!(
///     id.id(),
///     "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Synapse/workspaces/ws1"
/// );
///
/// let parsed = WorkspaceId::parse(&id.id()).unwrap();
/// assert_eq!(parsed, id);
/// ```
pub trait ResourceId: Sized {
    /// The schema this ID is encoded with.
    fn schema() -> &'static ResourceIdSchema;

    /// Build the typed ID from a generic decode result.
    fn from_parsed(parsed: ParsedResourceId) -> Result<Self, IdError>;

    /// The field values in schema order.
    fn segment_values(&self) -> Vec<&str>;

    /// The canonical ID string.
    fn id(&self) -> String {
        Self::schema().encode(&self.segment_values())
    }

    /// A human-readable description, e.g. `Workspace: (Name "ws1" / Resource Group "rg1")`.
    fn describe(&self) -> String {
        let schema = Self::schema();
        let fields: Vec<(&str, &str)> = schema.fields().zip(self.segment_values()).collect();
        describe_fields(&schema.display_name, &fields)
    }

    /// Parse an ID, requiring canonical casing of every static segment.
    fn parse(input: &str) -> Result<Self, IdError> {
        Self::parse_with_mode(input, ParseMode::Strict)
    }

    /// Parse an ID returned by the API, tolerating any casing of static segments.
    fn parse_insensitively(input: &str) -> Result<Self, IdError> {
        Self::parse_with_mode(input, ParseMode::Insensitive)
    }

    /// Parse an ID with an explicit [`ParseMode`].
    fn parse_with_mode(input: &str, mode: ParseMode) -> Result<Self, IdError> {
        let parsed = Self::schema().decode(input, mode)?;
        Self::from_parsed(parsed)
    }
}
