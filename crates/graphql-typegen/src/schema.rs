//! The introspected-schema data model the generator walks. All of it is an
//! immutable snapshot built once per generation call, either from SDL (see
//! [`crate::analyze`]) or from an introspection query result (see
//! [`crate::introspection`]).

/// A full introspection result: every named type in the schema, in source
/// order, plus the names of the root operation types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectedSchema {
    pub types: Vec<TypeDescriptor>,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
}

impl IntrospectedSchema {
    pub fn is_root_type(&self, name: &str) -> bool {
        [
            self.query_type.as_deref(),
            self.mutation_type.as_deref(),
            self.subscription_type.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|root| root == name)
    }
}

/// One named schema type, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Scalar(ScalarType),
    Enum(EnumType),
    Object(ObjectType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Union(UnionType),
}

impl TypeDescriptor {
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Scalar(scalar) => &scalar.name,
            TypeDescriptor::Enum(r#enum) => &r#enum.name,
            TypeDescriptor::Object(object) => &object.name,
            TypeDescriptor::InputObject(input_object) => &input_object.name,
            TypeDescriptor::Interface(interface) => &interface.name,
            TypeDescriptor::Union(union) => &union.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Scalar(scalar) => scalar.description.as_deref(),
            TypeDescriptor::Enum(r#enum) => r#enum.description.as_deref(),
            TypeDescriptor::Object(object) => object.description.as_deref(),
            TypeDescriptor::InputObject(input_object) => input_object.description.as_deref(),
            TypeDescriptor::Interface(interface) => interface.description.as_deref(),
            TypeDescriptor::Union(union) => union.description.as_deref(),
        }
    }

    /// Built-in scalars and the `__*` meta types never get a declaration of
    /// their own.
    pub fn is_builtin(&self) -> bool {
        match self {
            TypeDescriptor::Scalar(scalar) => is_builtin_scalar_name(&scalar.name),
            TypeDescriptor::Enum(r#enum) => {
                matches!(r#enum.name.as_str(), "__TypeKind" | "__DirectiveLocation")
            }
            TypeDescriptor::Object(object) => is_builtin_object_name(&object.name),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValueDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    /// Names of the interfaces this object implements.
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    /// Names of the concrete object types implementing this interface.
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    /// Names of the member types.
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
    pub type_ref: TypeReference,
    /// Always empty for input object fields.
    pub args: Vec<ArgumentDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub type_ref: TypeReference,
}

/// The kind of the named type a [`TypeReference`] bottoms out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

/// A field or argument type: a named leaf wrapped in any finite nesting of
/// `NON_NULL` and `LIST` modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeReference {
    Named { kind: NamedKind, name: String },
    NonNull(Box<TypeReference>),
    List(Box<TypeReference>),
}

impl TypeReference {
    pub fn named(kind: NamedKind, name: impl Into<String>) -> Self {
        TypeReference::Named {
            kind,
            name: name.into(),
        }
    }

    pub fn non_null(inner: TypeReference) -> Self {
        TypeReference::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeReference) -> Self {
        TypeReference::List(Box::new(inner))
    }
}

pub(crate) fn is_builtin_scalar_name(name: &str) -> bool {
    matches!(name, "Int" | "Float" | "String" | "Boolean" | "ID")
}

pub(crate) fn is_builtin_object_name(name: &str) -> bool {
    matches!(
        name,
        "__Schema" | "__Type" | "__Field" | "__InputValue" | "__Directive" | "__EnumValue"
    )
}
