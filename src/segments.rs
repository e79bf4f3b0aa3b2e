//! Path tokenizer for ARM-style resource IDs.
//!
//! An ID such as
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Synapse/workspaces/{ws}`
//! is split into `key/value` pairs. The `subscriptions` and `resourceGroups`
//! pairs are pulled out up front; the rest are kept in input order and popped
//! by key as a schema is walked. Every value is returned with the position of
//! its pair in the input so callers can check ordering.

use tracing::debug;

use crate::error::IdError;
use crate::resource_id::ParseMode;

/// Key of the subscription segment.
pub const SUBSCRIPTIONS: &str = "subscriptions";

/// Key of the resource group segment.
pub const RESOURCE_GROUPS: &str = "resourceGroups";

/// Key preceding a provider namespace.
pub const PROVIDERS: &str = "providers";

/// A `(position, key, value)` triple.
type Pair<'a> = (usize, &'a str, &'a str);

/// A tokenized resource ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    mode: ParseMode,
    subscription_id: Option<Pair<'a>>,
    resource_group: Option<Pair<'a>>,
    pairs: Vec<Pair<'a>>,
}

impl<'a> Segments<'a> {
    /// Split `input` into key/value pairs.
    ///
    /// A single leading and trailing slash are ignored. The remaining tokens
    /// must come in non-empty pairs.
    pub fn tokenize(input: &'a str, mode: ParseMode) -> Result<Self, IdError> {
        if input.is_empty() {
            return Err(IdError::malformed(input, "ID was empty"));
        }

        let path = input.strip_prefix('/').unwrap_or(input);
        let path = path.strip_suffix('/').unwrap_or(path);
        if path.is_empty() {
            return Err(IdError::malformed(input, "ID contained no segments"));
        }

        let tokens: Vec<&str> = path.split('/').collect();
        if tokens.len() % 2 != 0 {
            return Err(IdError::malformed(
                input,
                format!(
                    "the number of path segments is not divisible by 2 (got {})",
                    tokens.len()
                ),
            ));
        }

        let mut segments = Self {
            mode,
            subscription_id: None,
            resource_group: None,
            pairs: Vec::with_capacity(tokens.len() / 2),
        };

        for (index, pair) in tokens.chunks_exact(2).enumerate() {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() || value.is_empty() {
                return Err(IdError::malformed(
                    input,
                    format!(
                        "key/value cannot be empty strings: key {:?}, value {:?}",
                        key, value
                    ),
                ));
            }

            let pair = (index, key, value);
            if segments.subscription_id.is_none() && mode.matches(key, SUBSCRIPTIONS) {
                segments.subscription_id = Some(pair);
            } else if segments.resource_group.is_none() && mode.matches(key, RESOURCE_GROUPS) {
                segments.resource_group = Some(pair);
            } else {
                segments.pairs.push(pair);
            }
        }

        Ok(segments)
    }

    /// The mode the input was tokenized with.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Take the position and value of the `subscriptions` pair, if present.
    pub fn take_subscription_id(&mut self) -> Option<(usize, &'a str)> {
        self.subscription_id
            .take()
            .map(|(index, _, value)| (index, value))
    }

    /// Take the position and value of the `resourceGroups` pair, if present.
    pub fn take_resource_group(&mut self) -> Option<(usize, &'a str)> {
        self.resource_group
            .take()
            .map(|(index, _, value)| (index, value))
    }

    /// Remove the first pair keyed by `key`, returning its position and value.
    ///
    /// In insensitive mode the key is compared ignoring ASCII case.
    pub fn pop(&mut self, key: &str) -> Option<(usize, &'a str)> {
        let position = self
            .pairs
            .iter()
            .position(|(_, candidate, _)| self.mode.matches(candidate, key))?;
        let (index, found, value) = self.pairs.remove(position);
        if found != key {
            debug!(expected = key, actual = found, "corrected segment casing");
        }
        Some((index, value))
    }

    /// Returns true once every pair has been consumed.
    pub fn is_empty(&self) -> bool {
        self.subscription_id.is_none() && self.resource_group.is_none() && self.pairs.is_empty()
    }

    /// The unconsumed pairs in input order, slash-joined.
    pub fn remaining(&self) -> String {
        let mut pairs: Vec<Pair<'a>> = self
            .subscription_id
            .into_iter()
            .chain(self.resource_group)
            .chain(self.pairs.iter().copied())
            .collect();
        pairs.sort_by_key(|(index, _, _)| *index);
        pairs
            .iter()
            .map(|(_, key, value)| format!("{}/{}", key, value))
            .collect::<Vec<_>>()
            .join("/")
    }
}
