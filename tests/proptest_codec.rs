//! Property-based tests for the resource ID codec.
//!
//! Every built-in schema is exercised with random field values:
//! - encoded IDs decode back to the same values in both modes
//! - insensitive decoding of re-cased IDs yields the canonical ID
//! - strict decoding rejects any re-cased static key
//! - every truncation, every swap of two pairs and every appended pair is
//!   rejected

use azurerm_resource_ids::ids::builtin_schemas;
use azurerm_resource_ids::ids::synapse::RoleAssignmentId;
use azurerm_resource_ids::{IdError, ParseMode, ResourceIdSchema, Segment};
use proptest::prelude::*;

fn schema_and_values() -> impl Strategy<Value = (&'static ResourceIdSchema, Vec<String>)> {
    let schemas = builtin_schemas();
    (0..schemas.len()).prop_flat_map(move |index| {
        let schema = schemas[index];
        let count = schema.fields().count();
        (
            Just(schema),
            prop::collection::vec("[A-Za-z0-9][A-Za-z0-9._-]{0,15}", count),
        )
    })
}

/// Upper-case every static literal, leaving values alone.
fn shout_literals(schema: &ResourceIdSchema, values: &[String]) -> String {
    let mut values = values.iter();
    let mut out = String::new();
    for segment in &schema.segments {
        out.push('/');
        match segment {
            Segment::StaticLiteral(literal) => out.push_str(&literal.to_uppercase()),
            Segment::StaticNamespace(namespace) => out.push_str(&namespace.to_lowercase()),
            Segment::UserValue(_) => out.push_str(values.next().map(String::as_str).unwrap_or("")),
        }
    }
    out
}

proptest! {
    #[test]
    fn encoded_ids_decode_to_the_same_values((schema, values) in schema_and_values()) {
        let id = schema.encode(&values);
        for mode in [ParseMode::Strict, ParseMode::Insensitive] {
            let parsed = schema.decode(&id, mode).unwrap();
            prop_assert_eq!(parsed.id(), id.as_str());
            let decoded: Vec<&str> = parsed.fields().map(|(_, value)| value).collect();
            prop_assert_eq!(decoded, values.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }

    #[test]
    fn insensitive_decoding_canonicalizes_literals((schema, values) in schema_and_values()) {
        let shouted = shout_literals(schema, &values);
        let parsed = schema.decode(&shouted, ParseMode::Insensitive).unwrap();
        prop_assert_eq!(parsed.id(), schema.encode(&values));

        // Decoding the canonical form again changes nothing
        let again = schema.decode(parsed.id(), ParseMode::Insensitive).unwrap();
        prop_assert_eq!(again, parsed);

        prop_assert!(schema.decode(&shouted, ParseMode::Strict).is_err());
    }

    #[test]
    fn truncated_ids_are_rejected((schema, values) in schema_and_values()) {
        let id = schema.encode(&values);
        let tokens: Vec<&str> = id.trim_start_matches('/').split('/').collect();
        for len in 1..tokens.len() {
            let truncated = format!("/{}", tokens[..len].join("/"));
            let err = schema.decode(&truncated, ParseMode::Strict).unwrap_err();
            if len % 2 == 1 {
                prop_assert!(err.is_malformed(), "{}: {:?}", truncated, err);
            } else {
                prop_assert!(err.is_missing_element(), "{}: {:?}", truncated, err);
            }
        }
    }

    #[test]
    fn swapped_pairs_are_rejected(
        (schema, values) in schema_and_values(),
        first in 0usize..8,
        second in 0usize..8,
    ) {
        let id = schema.encode(&values);
        let tokens: Vec<&str> = id.trim_start_matches('/').split('/').collect();
        let mut pairs: Vec<&[&str]> = tokens.chunks(2).collect();
        let (first, second) = (first % pairs.len(), second % pairs.len());
        prop_assume!(first != second);

        pairs.swap(first, second);
        let swapped = format!("/{}", pairs.concat().join("/"));
        for mode in [ParseMode::Strict, ParseMode::Insensitive] {
            let err = schema.decode(&swapped, mode).unwrap_err();
            prop_assert!(err.is_malformed(), "{}: {:?}", swapped, err);
        }
    }

    #[test]
    fn appended_pairs_are_rejected(
        (schema, values) in schema_and_values(),
        key in "[a-z][A-Za-z]{0,11}",
        value in "[A-Za-z0-9]{1,12}",
    ) {
        let id = format!("{}/{}/{}", schema.encode(&values), key, value);
        let err = schema.decode(&id, ParseMode::Insensitive).unwrap_err();
        prop_assert!(err.is_unexpected_segments(), "{}: {:?}", id, err);
    }

    #[test]
    fn role_assignment_ids_need_exactly_two_parts(
        scope in "[A-Za-z0-9/]{1,24}",
        assignment in "[A-Za-z0-9-]{1,24}",
    ) {
        let id = RoleAssignmentId::parse(&format!("{}|{}", scope, assignment)).unwrap();
        prop_assert_eq!(&id.scope, &scope);
        prop_assert_eq!(&id.data_plane_assignment_id, &assignment);

        let three = format!("{}|{}|{}", scope, assignment, assignment);
        let three_parts = RoleAssignmentId::parse(&three);
        prop_assert!(
            matches!(three_parts, Err(IdError::Malformed { .. })),
            "three parts should be malformed: {}",
            three
        );
        prop_assert!(RoleAssignmentId::parse(&scope).is_err());
    }
}
