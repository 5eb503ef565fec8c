//! Decomposition of [`TypeReference`]s and the composition algorithm that
//! turns them into TypeScript type expressions.

use crate::schema::{NamedKind, TypeReference};

/// One wrapping layer around a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeModifier {
    NonNull,
    List,
}

/// A [`TypeReference`] flattened into its named leaf plus the ordered wrapper
/// stack, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTypeRef<'a> {
    pub base_kind: NamedKind,
    pub base_name: &'a str,
    pub modifiers: Vec<TypeModifier>,
}

/// Walks the wrapper chain down to the named leaf. Total: every reference
/// terminates in a named type.
pub fn resolve(reference: &TypeReference) -> ResolvedTypeRef<'_> {
    let mut modifiers = Vec::new();
    let mut current = reference;
    loop {
        match current {
            TypeReference::NonNull(inner) => {
                modifiers.push(TypeModifier::NonNull);
                current = inner;
            }
            TypeReference::List(inner) => {
                modifiers.push(TypeModifier::List);
                current = inner;
            }
            TypeReference::Named { kind, name } => {
                return ResolvedTypeRef {
                    base_kind: *kind,
                    base_name: name,
                    modifiers,
                };
            }
        }
    }
}

/// A schema field or argument rendered as a TypeScript interface member: the
/// member name (with the `?` optionality marker already applied) and the type
/// expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldRef {
    pub(crate) member_name: String,
    pub(crate) ts_type: String,
}

/// Renders a field or argument.
///
/// Outside strict-nulls mode a nullable member is optional (`name?:`) and its
/// value type stays bare. In strict-nulls mode the member is always required
/// and nullability moves into the type as a `| null` union instead.
pub(crate) fn field_ref(
    member: &str,
    reference: &TypeReference,
    prefix: &str,
    strict_nulls: bool,
) -> FieldRef {
    let nullable = !matches!(
        resolve(reference).modifiers.first(),
        Some(TypeModifier::NonNull)
    );

    if !strict_nulls && nullable {
        FieldRef {
            member_name: format!("{member}?"),
            ts_type: ts_type_expression(reference, prefix, true),
        }
    } else {
        FieldRef {
            member_name: member.to_owned(),
            ts_type: ts_type_expression(reference, prefix, false),
        }
    }
}

/// The recursive composition rule. `non_nullable` records whether the
/// immediately enclosing wrapper was `NON_NULL`; a layer that is not covered
/// by one gets `| null` appended. Handles arbitrary wrapper depth.
pub(crate) fn ts_type_expression(
    reference: &TypeReference,
    prefix: &str,
    non_nullable: bool,
) -> String {
    match reference {
        TypeReference::NonNull(inner) => ts_type_expression(inner, prefix, true),
        TypeReference::List(inner) => {
            let mut expression = format!("Array<{}>", ts_type_expression(inner, prefix, false));
            if !non_nullable {
                expression.push_str(" | null");
            }
            expression
        }
        TypeReference::Named { kind, name } => {
            let mut expression = named_type_expression(*kind, name, prefix);
            if !non_nullable {
                expression.push_str(" | null");
            }
            expression
        }
    }
}

/// Built-in scalars map to TypeScript primitives; everything else, custom
/// scalars included, is referenced through its prefixed generated name.
fn named_type_expression(kind: NamedKind, name: &str, prefix: &str) -> String {
    if let NamedKind::Scalar = kind {
        match name {
            "Int" | "Float" => return "number".to_owned(),
            "String" | "ID" => return "string".to_owned(),
            "Boolean" => return "boolean".to_owned(),
            _ => {}
        }
    }
    format!("{prefix}{name}")
}
