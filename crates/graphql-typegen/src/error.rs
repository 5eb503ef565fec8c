/// Everything that can go wrong while obtaining a schema or generating
/// definitions from it. Generation is all-or-nothing: any of these aborts the
/// call before output is produced.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("failed to parse the GraphQL schema: {0}")]
    SchemaParse(#[from] graphql_parser::schema::ParseError),
    #[error("failed to deserialize the introspection result: {0}")]
    IntrospectionJson(#[from] serde_json::Error),
    #[error("unsupported type kind `{kind}` on type `{name}`")]
    UnsupportedTypeKind { kind: String, name: String },
    #[error("malformed type reference: {0}")]
    MalformedTypeRef(String),
    #[error("failed to read schema definition files: {0}")]
    SchemaRead(#[from] std::io::Error),
    #[error("failed to walk the schema directory: {0}")]
    SchemaWalk(#[from] ignore::Error),
}
