//! Name and ID validators for attribute values.
//!
//! Every validator has the [`ValidateFunc`] shape: it takes the raw JSON value
//! supplied for an attribute plus the attribute key, and returns warnings and
//! errors. An empty error list means the value is accepted.
//!
//! # Example
//!
//! ```
//! use azurerm_resource_ids::validation::{into_diagnostics, is_valid, synapse};
//! use serde_json::json;
//!
//! assert!(is_valid(synapse::private_link_hub_name, &json!("hub1")));
//!
//! let result = synapse::private_link_hub_name(&json!("Hub1"), "name");
//! let diagnostics = into_diagnostics(result, "name");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].attribute, Some("name".to_string()));
//! ```

pub mod batch;
pub mod cdn;
pub mod digitaltwins;
pub mod storage;
pub mod synapse;

use regex::Regex;
use serde_json::Value;

use crate::diagnostic::Diagnostic;
use crate::error::ValidationError;
use crate::resource_id::ResourceId;

/// Warnings and errors produced by a validator.
pub type ValidateResult = (Vec<String>, Vec<ValidationError>);

/// The signature shared by every validator.
pub type ValidateFunc = fn(&Value, &str) -> ValidateResult;

/// Accept the value without findings.
pub(crate) fn valid() -> ValidateResult {
    (Vec::new(), Vec::new())
}

/// Reject the value with a single error.
pub(crate) fn invalid(key: &str, message: impl Into<String>) -> ValidateResult {
    (Vec::new(), vec![ValidationError::new(key, message)])
}

/// Borrow the string inside `value`, or produce the type error for `key`.
pub(crate) fn as_string<'a>(value: &'a Value, key: &str) -> Result<&'a str, ValidateResult> {
    value
        .as_str()
        .ok_or_else(|| invalid(key, format!("expected type of {} to be string", key)))
}

/// Compile a pattern that is known to be valid.
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|err| panic!("invalid built-in pattern {:?}: {}", re, err))
}

/// Validate that the value is a strictly formatted ID of type `T`.
///
/// ```
/// use azurerm_resource_ids::ids::synapse::WorkspaceId;
/// use azurerm_resource_ids::validation::resource_id;
/// use serde_json::json;
///
/// let (_, errors) = resource_id::<WorkspaceId>(&json!("/subscriptions/sub1"), "workspace_id");
/// assert_eq!(errors.len(), 1);
/// ```
pub fn resource_id<T: ResourceId>(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    match T::parse(v) {
        Ok(_) => valid(),
        Err(err) => invalid(key, err.to_string()),
    }
}

/// Convert validator output into diagnostics for `attribute`.
///
/// Warnings come first, followed by errors, each in the order reported.
pub fn into_diagnostics(result: ValidateResult, attribute: &str) -> Vec<Diagnostic> {
    let (warnings, errors) = result;
    warnings
        .into_iter()
        .map(|warning| Diagnostic::warning(warning).with_attribute_if_not_empty(attribute))
        .chain(errors.into_iter().map(|err| {
            let key = if err.key.is_empty() { attribute } else { err.key.as_str() };
            Diagnostic::error(err.message.clone()).with_attribute_if_not_empty(key)
        }))
        .collect()
}

/// Run a validator, returning Ok if the value is accepted or Err with its diagnostics.
///
/// Warnings do not cause a rejection.
pub fn validate_result(
    validator: ValidateFunc,
    value: &Value,
    attribute: &str,
) -> Result<(), Vec<Diagnostic>> {
    let diagnostics = into_diagnostics(validator(value, attribute), attribute);
    if diagnostics.iter().any(Diagnostic::is_error) {
        Err(diagnostics)
    } else {
        Ok(())
    }
}

/// Check if a value passes a validator.
pub fn is_valid(validator: ValidateFunc, value: &Value) -> bool {
    validator(value, "").1.is_empty()
}
