//! SDL analysis: turns a parsed schema definition document into the
//! [`IntrospectedSchema`] model.

use crate::{
    error::CodegenError,
    schema::{
        ArgumentDescriptor, EnumType, EnumValueDescriptor, FieldDescriptor, InputObjectType,
        InterfaceType, IntrospectedSchema, NamedKind, ObjectType, ScalarType, TypeDescriptor,
        TypeReference, UnionType,
    },
};
use graphql_parser::schema as ast;
use std::collections::HashMap;

pub(crate) fn analyze_sdl(sdl: &str) -> Result<IntrospectedSchema, CodegenError> {
    let document: ast::Document<'_, String> = graphql_parser::parse_schema(sdl)?;
    Ok(analyze(&document))
}

fn analyze(document: &ast::Document<'_, String>) -> IntrospectedSchema {
    let kinds = named_kinds(document);

    let mut types = Vec::new();
    for definition in &document.definitions {
        let ast::Definition::TypeDefinition(type_definition) = definition else {
            continue;
        };
        types.push(match type_definition {
            ast::TypeDefinition::Scalar(scalar) => TypeDescriptor::Scalar(ScalarType {
                name: scalar.name.clone(),
                description: scalar.description.clone(),
            }),
            ast::TypeDefinition::Object(object) => TypeDescriptor::Object(ObjectType {
                name: object.name.clone(),
                description: object.description.clone(),
                fields: object
                    .fields
                    .iter()
                    .map(|field| convert_field(field, &kinds))
                    .collect(),
                interfaces: object.implements_interfaces.clone(),
            }),
            ast::TypeDefinition::Interface(interface) => {
                TypeDescriptor::Interface(InterfaceType {
                    name: interface.name.clone(),
                    description: interface.description.clone(),
                    fields: interface
                        .fields
                        .iter()
                        .map(|field| convert_field(field, &kinds))
                        .collect(),
                    // filled in once all object types are known
                    possible_types: Vec::new(),
                })
            }
            ast::TypeDefinition::Union(union) => TypeDescriptor::Union(UnionType {
                name: union.name.clone(),
                description: union.description.clone(),
                possible_types: union.types.clone(),
            }),
            ast::TypeDefinition::Enum(r#enum) => TypeDescriptor::Enum(EnumType {
                name: r#enum.name.clone(),
                description: r#enum.description.clone(),
                values: r#enum.values.iter().map(convert_enum_value).collect(),
            }),
            ast::TypeDefinition::InputObject(input_object) => {
                TypeDescriptor::InputObject(InputObjectType {
                    name: input_object.name.clone(),
                    description: input_object.description.clone(),
                    fields: input_object
                        .fields
                        .iter()
                        .map(|field| convert_input_field(field, &kinds))
                        .collect(),
                })
            }
        });
    }

    merge_extensions(document, &mut types, &kinds);
    fill_possible_types(&mut types);

    let schema_definition = document.definitions.iter().find_map(|definition| {
        if let ast::Definition::SchemaDefinition(schema_definition) = definition {
            Some(schema_definition)
        } else {
            None
        }
    });

    // An explicit `schema {}` block binds the root operation types; without
    // one the conventional names apply when such types exist.
    let (query_type, mutation_type, subscription_type) = match schema_definition {
        Some(schema_definition) => (
            schema_definition.query.clone(),
            schema_definition.mutation.clone(),
            schema_definition.subscription.clone(),
        ),
        None => (
            default_root(&kinds, "Query"),
            default_root(&kinds, "Mutation"),
            default_root(&kinds, "Subscription"),
        ),
    };

    tracing::debug!(
        type_count = types.len(),
        query_type,
        "analyzed schema definition document"
    );

    IntrospectedSchema {
        types,
        query_type,
        mutation_type,
        subscription_type,
    }
}

fn named_kinds<'d>(document: &'d ast::Document<'_, String>) -> HashMap<&'d str, NamedKind> {
    document
        .definitions
        .iter()
        .filter_map(|definition| {
            let ast::Definition::TypeDefinition(type_definition) = definition else {
                return None;
            };
            Some(match type_definition {
                ast::TypeDefinition::Scalar(scalar) => (scalar.name.as_str(), NamedKind::Scalar),
                ast::TypeDefinition::Object(object) => (object.name.as_str(), NamedKind::Object),
                ast::TypeDefinition::Interface(interface) => {
                    (interface.name.as_str(), NamedKind::Interface)
                }
                ast::TypeDefinition::Union(union) => (union.name.as_str(), NamedKind::Union),
                ast::TypeDefinition::Enum(r#enum) => (r#enum.name.as_str(), NamedKind::Enum),
                ast::TypeDefinition::InputObject(input_object) => {
                    (input_object.name.as_str(), NamedKind::InputObject)
                }
            })
        })
        .collect()
}

/// Folds `extend type` declarations into their base object type.
fn merge_extensions(
    document: &ast::Document<'_, String>,
    types: &mut [TypeDescriptor],
    kinds: &HashMap<&str, NamedKind>,
) {
    for definition in &document.definitions {
        let ast::Definition::TypeExtension(ast::TypeExtension::Object(extension)) = definition
        else {
            continue;
        };
        let Some(TypeDescriptor::Object(object)) = types
            .iter_mut()
            .find(|descriptor| descriptor.name() == extension.name)
        else {
            continue;
        };
        object.fields.extend(
            extension
                .fields
                .iter()
                .map(|field| convert_field(field, kinds)),
        );
        object
            .interfaces
            .extend(extension.implements_interfaces.iter().cloned());
    }
}

fn fill_possible_types(types: &mut [TypeDescriptor]) {
    let mut possible: HashMap<String, Vec<String>> = HashMap::new();
    for descriptor in types.iter() {
        if let TypeDescriptor::Object(object) = descriptor {
            for interface in &object.interfaces {
                possible
                    .entry(interface.clone())
                    .or_default()
                    .push(object.name.clone());
            }
        }
    }
    for descriptor in types.iter_mut() {
        if let TypeDescriptor::Interface(interface) = descriptor {
            interface.possible_types = possible.remove(&interface.name).unwrap_or_default();
        }
    }
}

fn default_root(kinds: &HashMap<&str, NamedKind>, name: &str) -> Option<String> {
    (kinds.get(name) == Some(&NamedKind::Object)).then(|| name.to_owned())
}

fn convert_field(
    field: &ast::Field<'_, String>,
    kinds: &HashMap<&str, NamedKind>,
) -> FieldDescriptor {
    let (is_deprecated, deprecation_reason) = deprecation(&field.directives);
    FieldDescriptor {
        name: field.name.clone(),
        description: field.description.clone(),
        is_deprecated,
        deprecation_reason,
        type_ref: convert_type(&field.field_type, kinds),
        args: field
            .arguments
            .iter()
            .map(|argument| ArgumentDescriptor {
                name: argument.name.clone(),
                type_ref: convert_type(&argument.value_type, kinds),
            })
            .collect(),
    }
}

fn convert_input_field(
    input_value: &ast::InputValue<'_, String>,
    kinds: &HashMap<&str, NamedKind>,
) -> FieldDescriptor {
    let (is_deprecated, deprecation_reason) = deprecation(&input_value.directives);
    FieldDescriptor {
        name: input_value.name.clone(),
        description: input_value.description.clone(),
        is_deprecated,
        deprecation_reason,
        type_ref: convert_type(&input_value.value_type, kinds),
        args: Vec::new(),
    }
}

fn convert_enum_value(value: &ast::EnumValue<'_, String>) -> EnumValueDescriptor {
    let (is_deprecated, deprecation_reason) = deprecation(&value.directives);
    EnumValueDescriptor {
        name: value.name.clone(),
        description: value.description.clone(),
        is_deprecated,
        deprecation_reason,
    }
}

fn convert_type(
    reference: &ast::Type<'_, String>,
    kinds: &HashMap<&str, NamedKind>,
) -> TypeReference {
    match reference {
        // names not defined in the document are the built-in scalars
        ast::Type::NamedType(name) => TypeReference::Named {
            kind: kinds.get(name.as_str()).copied().unwrap_or(NamedKind::Scalar),
            name: name.clone(),
        },
        ast::Type::ListType(inner) => TypeReference::list(convert_type(inner, kinds)),
        ast::Type::NonNullType(inner) => TypeReference::non_null(convert_type(inner, kinds)),
    }
}

fn deprecation(directives: &[ast::Directive<'_, String>]) -> (bool, Option<String>) {
    for directive in directives {
        if directive.name == "deprecated" {
            let reason = directive.arguments.iter().find_map(|(name, value)| {
                if name == "reason" {
                    if let ast::Value::String(reason) = value {
                        return Some(reason.clone());
                    }
                }
                None
            });
            return (true, reason);
        }
    }
    (false, None)
}
