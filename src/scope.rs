//! Ordered-fallback resolution of scope strings.
//!
//! Some IDs embed a scope that may be one of several resource types. The
//! candidates are tried in the order they were added and the first schema
//! that decodes the input wins, so when an input could satisfy more than one
//! schema the earlier candidate takes precedence.

use tracing::debug;

use crate::codec::ParsedResourceId;
use crate::error::IdError;
use crate::resource_id::ParseMode;
use crate::schema::ResourceIdSchema;

/// A scope matched by a [`ScopeResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope<'a> {
    /// The tag of the candidate that matched.
    pub tag: &'a str,
    /// The decoded scope.
    pub id: ParsedResourceId,
}

/// An ordered list of `(tag, schema)` candidates.
#[derive(Debug, Clone, Default)]
pub struct ScopeResolver<'a> {
    candidates: Vec<(&'a str, &'a ResourceIdSchema)>,
    mode: ParseMode,
}

impl<'a> ScopeResolver<'a> {
    /// Create a resolver with no candidates, decoding strictly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate. Earlier candidates are tried first.
    pub fn with_candidate(mut self, tag: &'a str, schema: &'a ResourceIdSchema) -> Self {
        self.candidates.push((tag, schema));
        self
    }

    /// Set the parse mode used for every candidate.
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// The candidate tags in the order they are tried.
    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.candidates.iter().map(|(tag, _)| *tag)
    }

    /// Decode `input` with the first candidate that accepts it.
    pub fn resolve(&self, input: &str) -> Result<ResolvedScope<'a>, IdError> {
        for (tag, schema) in &self.candidates {
            match schema.decode(input, self.mode) {
                Ok(id) => {
                    debug!(tag = *tag, scope = %id, "resolved scope");
                    return Ok(ResolvedScope { tag: *tag, id });
                },
                Err(err) => {
                    debug!(tag = *tag, error = %err, "scope candidate did not match");
                },
            }
        }

        let tags: Vec<&str> = self.tags().collect();
        Err(IdError::malformed(
            input,
            format!("expected a scope matching one of [{}]", tags.join(", ")),
        ))
    }
}
