//! AzureRM resource IDs
//!
//! This crate parses and formats Azure Resource Manager resource IDs and
//! validates the names of the resources they point to.
//!
//! # Overview
//!
//! An ARM resource ID is a slash-delimited path of alternating keys and
//! values:
//!
//! ```text
//! /subscriptions/{subscription_id}/resourceGroups/{resource_group}/providers/Microsoft.Synapse/workspaces/{name}
//! ```
//!
//! The crate provides:
//!
//! - **Schemas**: [`ResourceIdSchema`] describes the ordered segments of one
//!   resource type
//! - **Codec**: one generic decoder and encoder driven by a schema
//! - **Typed IDs**: a struct per resource type under [`ids`], generated with
//!   [`define_resource_id!`]
//! - **Registry**: [`ResourceIdRegistry`] to decode by resource type name,
//!   including schemas loaded from JSON
//! - **Validation**: name and ID validators producing [`Diagnostic`]s
//! - **Logging**: integration with `tracing` for structured logging
//!
//! # Quick Start
//!
//! ```
//! use azurerm_resource_ids::ids::synapse::WorkspaceAadAdminId;
//! use azurerm_resource_ids::ResourceId;
//!
//! let id = WorkspaceAadAdminId::new(
//!     "12345678-1234-9876-4563-123456789012",
//!     "resGroup1",
//!     "workspace1",
//!     "Default",
//! );
//! assert_eq!(
//!     id.id(),
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/resGroup1/providers/Microsoft.Synapse/workspaces/workspace1/administrators/Default"
//! );
//!
//! // IDs from users must use canonical casing
//! assert!(WorkspaceAadAdminId::parse(&id.id().to_lowercase()).is_err());
//!
//! // IDs returned by the API may not
//! let parsed = WorkspaceAadAdminId::parse_insensitively(
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourcegroups/resGroup1/providers/Microsoft.Synapse/Workspaces/workspace1/Administrators/Default",
//! )
//! .unwrap();
//! assert_eq!(parsed, id);
//! ```
//!
//! # Parse Modes
//!
//! - [`ParseMode::Strict`]: static keys must match their canonical casing.
//!   Use it for anything a user typed.
//! - [`ParseMode::Insensitive`]: static keys match ignoring ASCII case. Use it
//!   only when reading IDs back from the API.
//!
//! In both modes the provider namespace is compared ignoring case and user
//! values are never altered.

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod codec;
pub mod diagnostic;
pub mod error;
pub mod ids;
pub mod logging;
pub mod registry;
pub mod resource_id;
pub mod schema;
pub mod scope;
pub mod segments;
pub mod validation;

// Re-export main types at crate root
pub use codec::ParsedResourceId;
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use error::{IdError, ValidationError};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use registry::ResourceIdRegistry;
pub use resource_id::{ParseMode, ResourceId};
pub use schema::{ResourceIdSchema, Segment};
pub use scope::{ResolvedScope, ScopeResolver};
pub use validation::{into_diagnostics, is_valid, validate_result, ValidateFunc, ValidateResult};

// Re-export commonly used external types
pub use serde;
pub use serde_json;
pub use tracing;
