//! Extraction of per-query endpoint records from the root `Query` type.

use crate::resolve::{resolve_type, strip_list_suffix};
use crate::{CodegenError, Result};
use graphql_introspect::{FieldDef, IntrospectionSchema, IntrospectionType, ObjectType};
use serde::Serialize;

/// Render data for one root query field.
///
/// Field names serialize in camelCase because they are addressed from the
/// artifact templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Field name, verbatim.
    pub query_name: String,
    /// Field name with its first character ASCII-uppercased, for generated
    /// symbol names.
    pub upper_query_name: String,
    /// Whether the field declares any arguments.
    pub has_args: bool,
    /// Resolved return-type expression, possibly array-shaped.
    pub return_type: String,
    /// `return_type` with one trailing `[]` stripped if present.
    pub base_return_type: String,
}

/// Derives one [`Endpoint`] per field of the schema's root `Query` type,
/// preserving the field list's order.
///
/// Every field is represented; colliding generated identifiers are left for
/// the TypeScript compile of the generated code to surface.
///
/// # Errors
///
/// Fails with [`CodegenError::Schema`] unless exactly one object type named
/// `Query` exists and it carries a field list, and propagates type-resolution
/// failures from the fields' return types.
pub fn extract_endpoints(schema: &IntrospectionSchema) -> Result<Vec<Endpoint>> {
    let query_type = find_query_type(schema)?;

    let Some(fields) = query_type.fields.as_ref() else {
        return Err(CodegenError::Schema(
            "the Query type carries no field list; the introspection result is malformed"
                .to_string(),
        ));
    };

    fields.iter().map(endpoint_from_field).collect()
}

/// Locates the single object type named exactly `Query`.
fn find_query_type(schema: &IntrospectionSchema) -> Result<&ObjectType> {
    let mut candidates = schema.types.iter().filter_map(|type_def| match type_def {
        IntrospectionType::Object(obj) if obj.name == "Query" => Some(obj),
        _ => None,
    });

    let Some(query_type) = candidates.next() else {
        return Err(CodegenError::Schema(
            "expected exactly one object type named Query, found none".to_string(),
        ));
    };
    if candidates.next().is_some() {
        return Err(CodegenError::Schema(
            "expected exactly one object type named Query, found more than one".to_string(),
        ));
    }

    Ok(query_type)
}

fn endpoint_from_field(field: &FieldDef) -> Result<Endpoint> {
    let return_type = resolve_type(&field.type_ref)?;

    Ok(Endpoint {
        query_name: field.name.clone(),
        upper_query_name: capitalize(&field.name),
        has_args: !field.args.is_empty(),
        base_return_type: strip_list_suffix(&return_type).to_string(),
        return_type,
    })
}

/// ASCII-uppercases the first character. Pure string transform, no locale
/// awareness.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_introspect::IntrospectionResponse;

    fn schema_from(json: serde_json::Value) -> IntrospectionSchema {
        let response: IntrospectionResponse = serde_json::from_value(serde_json::json!({
            "data": { "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
                "types": json
            }}
        }))
        .unwrap();
        response.data.schema
    }

    #[test]
    fn field_with_argument_and_object_return() {
        // user(id: ID!): User
        let schema = schema_from(serde_json::json!([
            {
                "kind": "OBJECT",
                "name": "Query",
                "description": null,
                "fields": [{
                    "name": "user",
                    "description": null,
                    "args": [{
                        "name": "id",
                        "description": null,
                        "type": {
                            "kind": "NON_NULL",
                            "name": null,
                            "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
                        },
                        "defaultValue": null
                    }],
                    "type": { "kind": "OBJECT", "name": "User", "ofType": null },
                    "isDeprecated": false,
                    "deprecationReason": null
                }]
            }
        ]));

        let endpoints = extract_endpoints(&schema).unwrap();
        assert_eq!(
            endpoints,
            vec![Endpoint {
                query_name: "user".to_string(),
                upper_query_name: "User".to_string(),
                has_args: true,
                return_type: "User".to_string(),
                base_return_type: "User".to_string(),
            }]
        );
    }

    #[test]
    fn list_return_strips_to_base_type() {
        // posts: [Post!]!
        let schema = schema_from(serde_json::json!([
            {
                "kind": "OBJECT",
                "name": "Query",
                "description": null,
                "fields": [{
                    "name": "posts",
                    "description": null,
                    "args": [],
                    "type": {
                        "kind": "NON_NULL",
                        "name": null,
                        "ofType": {
                            "kind": "LIST",
                            "name": null,
                            "ofType": {
                                "kind": "NON_NULL",
                                "name": null,
                                "ofType": { "kind": "OBJECT", "name": "Post", "ofType": null }
                            }
                        }
                    },
                    "isDeprecated": false,
                    "deprecationReason": null
                }]
            }
        ]));

        let endpoints = extract_endpoints(&schema).unwrap();
        assert_eq!(
            endpoints,
            vec![Endpoint {
                query_name: "posts".to_string(),
                upper_query_name: "Posts".to_string(),
                has_args: false,
                return_type: "Post[]".to_string(),
                base_return_type: "Post".to_string(),
            }]
        );
    }

    #[test]
    fn field_order_is_preserved() {
        let schema = schema_from(serde_json::json!([
            {
                "kind": "OBJECT",
                "name": "Query",
                "description": null,
                "fields": [
                    { "name": "zebra", "args": [], "type": { "kind": "SCALAR", "name": "String", "ofType": null } },
                    { "name": "apple", "args": [], "type": { "kind": "SCALAR", "name": "String", "ofType": null } },
                    { "name": "mango", "args": [], "type": { "kind": "SCALAR", "name": "String", "ofType": null } }
                ]
            }
        ]));

        let endpoints = extract_endpoints(&schema).unwrap();
        let names: Vec<_> = endpoints.iter().map(|e| e.query_name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn empty_field_list_yields_no_endpoints() {
        let schema = schema_from(serde_json::json!([
            { "kind": "OBJECT", "name": "Query", "description": null, "fields": [] }
        ]));
        assert!(extract_endpoints(&schema).unwrap().is_empty());
    }

    #[test]
    fn missing_query_type_is_a_schema_error() {
        let schema = schema_from(serde_json::json!([
            { "kind": "OBJECT", "name": "Mutation", "description": null, "fields": [] }
        ]));
        assert!(matches!(
            extract_endpoints(&schema),
            Err(CodegenError::Schema(_))
        ));
    }

    #[test]
    fn duplicate_query_types_are_a_schema_error() {
        let schema = schema_from(serde_json::json!([
            { "kind": "OBJECT", "name": "Query", "description": null, "fields": [] },
            { "kind": "OBJECT", "name": "Query", "description": null, "fields": [] }
        ]));
        assert!(matches!(
            extract_endpoints(&schema),
            Err(CodegenError::Schema(_))
        ));
    }

    #[test]
    fn non_object_named_query_does_not_count() {
        let schema = schema_from(serde_json::json!([
            { "kind": "INTERFACE", "name": "Query", "description": null, "fields": [] }
        ]));
        assert!(matches!(
            extract_endpoints(&schema),
            Err(CodegenError::Schema(_))
        ));
    }

    #[test]
    fn absent_field_list_is_a_schema_error() {
        let schema = schema_from(serde_json::json!([
            { "kind": "OBJECT", "name": "Query", "description": null, "fields": null }
        ]));
        assert!(matches!(
            extract_endpoints(&schema),
            Err(CodegenError::Schema(_))
        ));
    }

    #[test]
    fn unsupported_return_kind_propagates() {
        let schema = schema_from(serde_json::json!([
            {
                "kind": "OBJECT",
                "name": "Query",
                "description": null,
                "fields": [{
                    "name": "search",
                    "args": [],
                    "type": { "kind": "UNION", "name": "SearchResult", "ofType": null }
                }]
            }
        ]));
        assert!(matches!(
            extract_endpoints(&schema),
            Err(CodegenError::UnsupportedTypeKind(_))
        ));
    }

    #[test]
    fn capitalize_is_ascii_first_char_only() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("User"), "User");
        assert_eq!(capitalize("u"), "U");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("getUserById"), "GetUserById");
    }
}
