//! Generic decoder and encoder driven by a [`ResourceIdSchema`].

use std::fmt;

use tracing::trace;

use crate::error::IdError;
use crate::resource_id::ParseMode;
use crate::schema::{ResourceIdSchema, Segment};
use crate::segments::{Segments, PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

/// The result of decoding an ID against a schema.
///
/// Holds the field values in declaration order together with the canonical
/// form of the ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedResourceId {
    resource_type: String,
    display_name: String,
    id: String,
    fields: Vec<(String, String)>,
}

impl ParsedResourceId {
    /// The schema name this ID was decoded with.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// The canonical ID string.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a field value by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// The `(field, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Move a field value out, leaving an empty string behind.
    pub fn take(&mut self, field: &str) -> Result<String, IdError> {
        self.fields
            .iter_mut()
            .find(|(name, _)| name == field)
            .map(|(_, value)| std::mem::take(value))
            .ok_or_else(|| IdError::missing(field))
    }

    /// Fail unless this ID was decoded with the schema named `resource_type`.
    pub fn expect_type(&self, resource_type: &str) -> Result<(), IdError> {
        if self.resource_type == resource_type {
            Ok(())
        } else {
            Err(IdError::malformed(
                &self.id,
                format!(
                    "expected a {} ID but got a {} ID",
                    resource_type, self.resource_type
                ),
            ))
        }
    }

    /// A human-readable description of the ID.
    pub fn describe(&self) -> String {
        let fields: Vec<(&str, &str)> = self.fields().collect();
        describe_fields(&self.display_name, &fields)
    }
}

impl fmt::Display for ParsedResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl ResourceIdSchema {
    /// Decode `input` into its field values.
    ///
    /// The subscription and resource group are resolved first, then each
    /// remaining field is popped by the literal key preceding it. The popped
    /// pairs must appear in the input in schema order, and any pair left over
    /// afterwards is an error.
    pub fn decode(&self, input: &str, mode: ParseMode) -> Result<ParsedResourceId, IdError> {
        trace!(resource_type = %self.name, ?mode, "decoding resource ID");

        let mut segments = Segments::tokenize(input, mode)?;
        let mut fields = Vec::new();
        let mut key: Option<&str> = None;
        let mut last: Option<usize> = None;

        for segment in &self.segments {
            match segment {
                Segment::StaticLiteral(literal) => key = Some(literal.as_str()),
                Segment::StaticNamespace(namespace) => {
                    let (index, actual) = segments
                        .pop(PROVIDERS)
                        .ok_or_else(|| IdError::missing(PROVIDERS))?;
                    check_order(input, PROVIDERS, index, &mut last)?;
                    if !actual.eq_ignore_ascii_case(namespace) {
                        return Err(IdError::NamespaceMismatch {
                            expected: namespace.clone(),
                            actual: actual.to_string(),
                        });
                    }
                    key = None;
                },
                Segment::UserValue(field) => {
                    let literal = key.take().ok_or_else(|| {
                        IdError::invalid_schema(
                            &self.name,
                            format!("field `{}` must follow a literal", field),
                        )
                    })?;
                    let (index, value) = match literal {
                        SUBSCRIPTIONS => segments.take_subscription_id(),
                        RESOURCE_GROUPS => segments.take_resource_group(),
                        other => segments.pop(other),
                    }
                    .ok_or_else(|| IdError::missing(literal))?;
                    check_order(input, literal, index, &mut last)?;
                    fields.push((field.clone(), value.to_string()));
                },
            }
        }

        if !segments.is_empty() {
            return Err(IdError::UnexpectedSegments {
                input: input.to_string(),
                remaining: segments.remaining(),
            });
        }

        let values: Vec<&str> = fields.iter().map(|(_, value)| value.as_str()).collect();
        let id = self.encode(&values);

        Ok(ParsedResourceId {
            resource_type: self.name.clone(),
            display_name: self.display_name.clone(),
            id,
            fields,
        })
    }

    /// Encode field values, in declaration order, into the canonical ID.
    ///
    /// Never fails: a missing value is written as an empty segment.
    pub fn encode<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut values = values.iter();
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::StaticLiteral(value) | Segment::StaticNamespace(value) => {
                    out.push_str(value)
                },
                Segment::UserValue(_) => {
                    out.push_str(values.next().map(|value| value.as_ref()).unwrap_or(""))
                },
            }
        }
        out
    }
}

/// Fail unless the pair at `index` comes after every pair already consumed.
fn check_order(
    input: &str,
    key: &str,
    index: usize,
    last: &mut Option<usize>,
) -> Result<(), IdError> {
    if last.is_some_and(|last| index < last) {
        return Err(IdError::malformed(
            input,
            format!("segment `{}` is out of order", key),
        ));
    }
    *last = Some(index);
    Ok(())
}

/// Render `Display Name: (Field "value" / ...)`, innermost field first.
///
/// The subscription is omitted.
pub(crate) fn describe_fields(display_name: &str, fields: &[(&str, &str)]) -> String {
    let segments: Vec<String> = fields
        .iter()
        .rev()
        .filter(|(name, _)| *name != "subscription_id")
        .map(|(name, value)| format!("{} {:?}", label(name), value))
        .collect();
    format!("{}: ({})", display_name, segments.join(" / "))
}

fn label(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
