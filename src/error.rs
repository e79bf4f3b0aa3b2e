//! Error types for resource ID parsing and name validation.

use thiserror::Error;

/// Errors that can occur when decoding a resource ID or building a schema.
#[derive(Debug, Error)]
pub enum IdError {
    /// The input is empty, has unbalanced or empty segments, or does not
    /// split into the expected number of parts.
    #[error("parsing {input:?}: {reason}")]
    Malformed {
        /// The raw input that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A required static segment was not found.
    #[error("ID was missing the `{0}` element")]
    MissingElement(String),

    /// Every field was bound but path segments were left over.
    #[error("ID contained more segments than required: {input:?}, {remaining}")]
    UnexpectedSegments {
        /// The raw input that failed to parse.
        input: String,
        /// The unconsumed `key/value` pairs, slash-joined.
        remaining: String,
    },

    /// The `providers` segment names a different namespace.
    #[error("expected provider namespace {expected:?} but got {actual:?}")]
    NamespaceMismatch {
        /// The namespace the schema declares.
        expected: String,
        /// The namespace found in the input.
        actual: String,
    },

    /// The requested resource type is not registered.
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// A schema is not well formed.
    #[error("invalid schema {name:?}: {reason}")]
    InvalidSchema {
        /// The resource type name of the offending schema.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IdError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(segment: impl Into<String>) -> Self {
        Self::MissingElement(segment.into())
    }

    pub(crate) fn invalid_schema(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the error message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Malformed { reason, .. } => reason,
            Self::MissingElement(segment) => segment,
            Self::UnexpectedSegments { remaining, .. } => remaining,
            Self::NamespaceMismatch { actual, .. } => actual,
            Self::UnknownResourceType(name) => name,
            Self::InvalidSchema { reason, .. } => reason,
            Self::Serialization(_err) => "serialization error (see Debug output)",
        }
    }

    /// Returns true if the input itself was structurally unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns true if a required segment was absent.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }

    /// Returns true if the input had segments the schema does not declare.
    pub fn is_unexpected_segments(&self) -> bool {
        matches!(self, Self::UnexpectedSegments { .. })
    }
}

/// A name failed its shape rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The attribute the value was supplied for.
    pub key: String,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for `key`.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IdError::MissingElement("workspaces".to_string());
        assert_eq!(format!("{}", err), "ID was missing the `workspaces` element");

        let err = IdError::malformed("", "ID was empty");
        assert_eq!(format!("{}", err), "parsing \"\": ID was empty");

        let err = IdError::UnknownResourceType("synapse_nope".to_string());
        assert_eq!(format!("{}", err), "Unknown resource type: synapse_nope");

        let err = IdError::NamespaceMismatch {
            expected: "Microsoft.Synapse".to_string(),
            actual: "Microsoft.Cdn".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "expected provider namespace \"Microsoft.Synapse\" but got \"Microsoft.Cdn\""
        );
    }

    #[test]
    fn test_unexpected_segments_display() {
        let err = IdError::UnexpectedSegments {
            input: "/subscriptions/s/resourceGroups/rg/extra/x".to_string(),
            remaining: "extra/x".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.starts_with("ID contained more segments than required"));
        assert!(display.ends_with("extra/x"));
    }

    #[test]
    fn test_message_method() {
        let err = IdError::malformed("a/b/c", "odd number of segments");
        assert_eq!(err.message(), "odd number of segments");

        let err = IdError::missing("resourceGroups");
        assert_eq!(err.message(), "resourceGroups");

        let err = IdError::invalid_schema("cdn_profile", "duplicate field `name`");
        assert_eq!(err.message(), "duplicate field `name`");
    }

    #[test]
    fn test_classification_helpers() {
        assert!(IdError::malformed("", "empty").is_malformed());
        assert!(IdError::missing("subscriptions").is_missing_element());
        assert!(IdError::UnexpectedSegments {
            input: String::new(),
            remaining: String::new(),
        }
        .is_unexpected_segments());
        assert!(!IdError::missing("subscriptions").is_malformed());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("name", "name must start with a letter");
        assert_eq!(err.key, "name");
        assert_eq!(format!("{}", err), "name must start with a letter");
    }
}
