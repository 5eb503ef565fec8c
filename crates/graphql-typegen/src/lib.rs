//! Generate TypeScript type definitions, and optionally typed resolver
//! signatures, from a GraphQL schema.
//!
//! The schema can be provided as an SDL string, a path to a definition file
//! or folder, or an introspection query result. Generation is pure: the same
//! schema and options always produce the same output.

#![allow(unused_crate_dependencies)]

mod analyze;
mod assemble;
mod codegen;
mod config;
mod docs;
mod error;
mod introspection;
mod load;
mod resolvers;
mod schema;
mod type_ref;

pub use self::{
    config::{AsyncResult, GenerateOptions},
    error::CodegenError,
    load::SchemaSource,
    schema::{
        ArgumentDescriptor, EnumType, EnumValueDescriptor, FieldDescriptor, InputObjectType,
        InterfaceType, IntrospectedSchema, NamedKind, ObjectType, ScalarType, TypeDescriptor,
        TypeReference, UnionType,
    },
    type_ref::{resolve, ResolvedTypeRef, TypeModifier},
};

use codegen::DeclarationEmitter;
use resolvers::ResolverSynthesizer;
use std::path::Path;

/// Generates the TypeScript definition file content for the schema.
pub fn generate_typescript(
    source: &SchemaSource,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    let schema = source.load()?;
    Ok(generate_from_schema(&schema, options))
}

/// Same as [`generate_typescript`], for an already loaded schema.
pub fn generate_from_schema(schema: &IntrospectedSchema, options: &GenerateOptions) -> String {
    let type_defs = DeclarationEmitter::new(schema, options).emit();
    let resolvers = ResolverSynthesizer::new(schema, options).synthesize();
    assemble::assemble(type_defs, resolvers, options)
}

/// Generates the definitions and writes them to `output_path`. The content is
/// produced in full before anything touches the filesystem.
pub fn generate_typescript_to_file(
    source: &SchemaSource,
    output_path: &Path,
    options: &GenerateOptions,
) -> Result<(), CodegenError> {
    let content = generate_typescript(source, options)?;
    std::fs::write(output_path, content)?;
    tracing::info!(path = %output_path.display(), "wrote generated type definitions");
    Ok(())
}
