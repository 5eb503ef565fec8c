//! Deserialization of a standard introspection query result into the
//! [`IntrospectedSchema`] model.

use crate::{
    error::CodegenError,
    schema::{
        ArgumentDescriptor, EnumType, EnumValueDescriptor, FieldDescriptor, InputObjectType,
        InterfaceType, IntrospectedSchema, NamedKind, ObjectType, ScalarType, TypeDescriptor,
        TypeReference, UnionType,
    },
};
use serde::Deserialize;

/// Accepts both the bare `{ "__schema": ... }` shape and a full GraphQL
/// response with the schema under `data`.
pub(crate) fn from_json_str(json: &str) -> Result<IntrospectedSchema, CodegenError> {
    #[derive(Deserialize)]
    struct Response {
        data: Document,
    }

    let document: Document = match serde_json::from_str(json) {
        Ok(document) => document,
        Err(_) => serde_json::from_str::<Response>(json)?.data,
    };

    convert(document)
}

#[derive(Deserialize)]
struct Document {
    #[serde(rename = "__schema")]
    schema: RawSchema,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    query_type: Option<RawNamedRef>,
    #[serde(default)]
    mutation_type: Option<RawNamedRef>,
    #[serde(default)]
    subscription_type: Option<RawNamedRef>,
    types: Vec<RawType>,
}

#[derive(Deserialize)]
struct RawNamedRef {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawType {
    kind: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: Option<Vec<RawField>>,
    #[serde(default)]
    input_fields: Option<Vec<RawInputValue>>,
    #[serde(default)]
    interfaces: Option<Vec<RawTypeRef>>,
    #[serde(default)]
    enum_values: Option<Vec<RawEnumValue>>,
    #[serde(default)]
    possible_types: Option<Vec<RawTypeRef>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    args: Vec<RawInputValue>,
    #[serde(rename = "type")]
    type_ref: RawTypeRef,
    #[serde(default)]
    is_deprecated: bool,
    #[serde(default)]
    deprecation_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInputValue {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type")]
    type_ref: RawTypeRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnumValue {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    #[serde(default)]
    deprecation_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    of_type: Option<Box<RawTypeRef>>,
}

fn convert(document: Document) -> Result<IntrospectedSchema, CodegenError> {
    let schema = document.schema;
    let types = schema
        .types
        .into_iter()
        .map(convert_type)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(type_count = types.len(), "deserialized introspection result");

    Ok(IntrospectedSchema {
        types,
        query_type: schema.query_type.map(|reference| reference.name),
        mutation_type: schema.mutation_type.map(|reference| reference.name),
        subscription_type: schema.subscription_type.map(|reference| reference.name),
    })
}

fn convert_type(raw: RawType) -> Result<TypeDescriptor, CodegenError> {
    Ok(match raw.kind.as_str() {
        "SCALAR" => TypeDescriptor::Scalar(ScalarType {
            name: raw.name,
            description: raw.description,
        }),
        "ENUM" => TypeDescriptor::Enum(EnumType {
            name: raw.name,
            description: raw.description,
            values: raw
                .enum_values
                .unwrap_or_default()
                .into_iter()
                .map(|value| EnumValueDescriptor {
                    name: value.name,
                    description: value.description,
                    is_deprecated: value.is_deprecated,
                    deprecation_reason: value.deprecation_reason,
                })
                .collect(),
        }),
        "OBJECT" => TypeDescriptor::Object(ObjectType {
            name: raw.name,
            description: raw.description,
            fields: convert_fields(raw.fields)?,
            interfaces: named_refs(raw.interfaces),
        }),
        "INPUT_OBJECT" => TypeDescriptor::InputObject(InputObjectType {
            name: raw.name,
            description: raw.description,
            fields: raw
                .input_fields
                .unwrap_or_default()
                .into_iter()
                .map(convert_input_field)
                .collect::<Result<Vec<_>, _>>()?,
        }),
        "INTERFACE" => TypeDescriptor::Interface(InterfaceType {
            name: raw.name,
            description: raw.description,
            fields: convert_fields(raw.fields)?,
            possible_types: named_refs(raw.possible_types),
        }),
        "UNION" => TypeDescriptor::Union(UnionType {
            name: raw.name,
            description: raw.description,
            possible_types: named_refs(raw.possible_types),
        }),
        other => {
            return Err(CodegenError::UnsupportedTypeKind {
                kind: other.to_owned(),
                name: raw.name,
            })
        }
    })
}

fn convert_fields(fields: Option<Vec<RawField>>) -> Result<Vec<FieldDescriptor>, CodegenError> {
    fields
        .unwrap_or_default()
        .into_iter()
        .map(|field| {
            Ok(FieldDescriptor {
                name: field.name,
                description: field.description,
                is_deprecated: field.is_deprecated,
                deprecation_reason: field.deprecation_reason,
                type_ref: convert_type_ref(&field.type_ref)?,
                args: field
                    .args
                    .iter()
                    .map(|argument| {
                        Ok(ArgumentDescriptor {
                            name: argument.name.clone(),
                            type_ref: convert_type_ref(&argument.type_ref)?,
                        })
                    })
                    .collect::<Result<Vec<_>, CodegenError>>()?,
            })
        })
        .collect()
}

fn convert_input_field(input_value: RawInputValue) -> Result<FieldDescriptor, CodegenError> {
    Ok(FieldDescriptor {
        name: input_value.name,
        description: input_value.description,
        is_deprecated: false,
        deprecation_reason: None,
        type_ref: convert_type_ref(&input_value.type_ref)?,
        args: Vec::new(),
    })
}

fn named_refs(references: Option<Vec<RawTypeRef>>) -> Vec<String> {
    references
        .unwrap_or_default()
        .into_iter()
        .filter_map(|reference| reference.name)
        .collect()
}

fn convert_type_ref(raw: &RawTypeRef) -> Result<TypeReference, CodegenError> {
    match raw.kind.as_str() {
        "NON_NULL" => {
            let inner = raw.of_type.as_deref().ok_or_else(|| {
                CodegenError::MalformedTypeRef("NON_NULL wrapper without ofType".to_owned())
            })?;
            Ok(TypeReference::non_null(convert_type_ref(inner)?))
        }
        "LIST" => {
            let inner = raw.of_type.as_deref().ok_or_else(|| {
                CodegenError::MalformedTypeRef("LIST wrapper without ofType".to_owned())
            })?;
            Ok(TypeReference::list(convert_type_ref(inner)?))
        }
        named => {
            let kind = match named {
                "SCALAR" => NamedKind::Scalar,
                "OBJECT" => NamedKind::Object,
                "INTERFACE" => NamedKind::Interface,
                "UNION" => NamedKind::Union,
                "ENUM" => NamedKind::Enum,
                "INPUT_OBJECT" => NamedKind::InputObject,
                other => {
                    return Err(CodegenError::UnsupportedTypeKind {
                        kind: other.to_owned(),
                        name: raw.name.clone().unwrap_or_default(),
                    })
                }
            };
            let name = raw.name.clone().ok_or_else(|| {
                CodegenError::MalformedTypeRef("named type reference without a name".to_owned())
            })?;
            Ok(TypeReference::Named { kind, name })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::from_json_str;
    use crate::{
        error::CodegenError,
        schema::{NamedKind, TypeDescriptor, TypeReference},
    };
    use indoc::indoc;

    const MINIMAL: &str = indoc! {r#"
        {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": null,
                "subscriptionType": null,
                "types": [
                    {
                        "kind": "OBJECT",
                        "name": "Query",
                        "description": null,
                        "fields": [
                            {
                                "name": "viewer",
                                "description": null,
                                "args": [],
                                "type": {
                                    "kind": "NON_NULL",
                                    "name": null,
                                    "ofType": { "kind": "OBJECT", "name": "User", "ofType": null }
                                },
                                "isDeprecated": false,
                                "deprecationReason": null
                            }
                        ],
                        "interfaces": []
                    }
                ]
            }
        }
    "#};

    #[test]
    fn parses_a_bare_schema_document() {
        let schema = from_json_str(MINIMAL).unwrap();
        assert_eq!(schema.query_type.as_deref(), Some("Query"));
        let TypeDescriptor::Object(query) = &schema.types[0] else {
            unreachable!("expected an object type");
        };
        assert_eq!(
            query.fields[0].type_ref,
            TypeReference::non_null(TypeReference::named(NamedKind::Object, "User"))
        );
    }

    #[test]
    fn parses_a_full_graphql_response() {
        let wrapped = format!(r#"{{ "data": {} }}"#, MINIMAL);
        let schema = from_json_str(&wrapped).unwrap();
        assert_eq!(schema.query_type.as_deref(), Some("Query"));
    }

    #[test]
    fn unknown_type_kinds_are_rejected() {
        let json = indoc! {r#"
            {
                "__schema": {
                    "queryType": { "name": "Query" },
                    "types": [{ "kind": "SEMAPHORE", "name": "Odd" }]
                }
            }
        "#};
        let error = from_json_str(json).unwrap_err();
        assert!(matches!(
            error,
            CodegenError::UnsupportedTypeKind { ref kind, ref name } if kind == "SEMAPHORE" && name == "Odd"
        ));
    }

    #[test]
    fn wrappers_without_inner_types_are_rejected() {
        let json = indoc! {r#"
            {
                "__schema": {
                    "queryType": { "name": "Query" },
                    "types": [
                        {
                            "kind": "OBJECT",
                            "name": "Query",
                            "fields": [
                                {
                                    "name": "broken",
                                    "args": [],
                                    "type": { "kind": "LIST", "name": null, "ofType": null }
                                }
                            ]
                        }
                    ]
                }
            }
        "#};
        assert!(matches!(
            from_json_str(json).unwrap_err(),
            CodegenError::MalformedTypeRef(_)
        ));
    }
}
