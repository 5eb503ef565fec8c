//! Schema sourcing. A schema can arrive as an SDL string, a path to a
//! definition file or folder, or an introspection query result.

use crate::{analyze, error::CodegenError, introspection, schema::IntrospectedSchema};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where the schema comes from.
#[derive(Debug, Clone)]
pub enum SchemaSource {
    /// A schema definition document.
    Sdl(String),
    /// A `.graphql`/`.gql` file, a `.json` introspection result, or a folder
    /// of definition files.
    Path(PathBuf),
    /// An introspection query result, bare or under a `data` key.
    IntrospectionJson(String),
}

impl SchemaSource {
    /// Treats input that names an existing path as a path, anything else as
    /// an inline schema definition.
    pub fn detect(input: &str) -> SchemaSource {
        let path = Path::new(input);
        if path.exists() {
            SchemaSource::Path(path.to_owned())
        } else {
            SchemaSource::Sdl(input.to_owned())
        }
    }

    pub(crate) fn load(&self) -> Result<IntrospectedSchema, CodegenError> {
        match self {
            SchemaSource::Sdl(sdl) => analyze::analyze_sdl(sdl),
            SchemaSource::IntrospectionJson(json) => introspection::from_json_str(json),
            SchemaSource::Path(path) if path.is_dir() => {
                analyze::analyze_sdl(&collect_definitions(path)?)
            }
            SchemaSource::Path(path) => {
                let content = fs::read_to_string(path)?;
                if path.extension().is_some_and(|extension| extension == "json") {
                    introspection::from_json_str(&content)
                } else {
                    analyze::analyze_sdl(&content)
                }
            }
        }
    }
}

/// Concatenates every `.graphql`/`.gql` file under the folder, in path order
/// so repeated runs see the same document.
fn collect_definitions(root: &Path) -> Result<String, CodegenError> {
    let mut files = Vec::new();
    for entry in ignore::Walk::new(root) {
        let entry = entry?;
        let path = entry.path();
        let is_definition = path
            .extension()
            .is_some_and(|extension| extension == "graphql" || extension == "gql");
        if entry.file_type().is_some_and(|file_type| file_type.is_file()) && is_definition {
            files.push(path.to_owned());
        }
    }
    files.sort();

    tracing::debug!(
        file_count = files.len(),
        root = %root.display(),
        "collected schema definition files"
    );

    let mut document = String::new();
    for (index, file) in files.iter().enumerate() {
        if index > 0 {
            document.push('\n');
        }
        document.push_str(&fs::read_to_string(file)?);
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::SchemaSource;
    use std::fs;

    #[test]
    fn inline_sdl_is_detected_as_sdl() {
        let source = SchemaSource::detect("type Query { ok: Boolean }");
        assert!(matches!(source, SchemaSource::Sdl(_)));
    }

    #[test]
    fn existing_paths_are_detected_as_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("query.graphql"), "type Query { ok: Boolean }").unwrap();

        let input = dir.path().to_str().unwrap();
        let source = SchemaSource::detect(input);
        assert!(matches!(source, SchemaSource::Path(_)));
        let schema = source.load().unwrap();
        assert_eq!(schema.query_type.as_deref(), Some("Query"));
    }

    #[test]
    fn folders_are_walked_for_definition_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_user.graphql"), "type User { id: ID! }").unwrap();
        fs::write(
            dir.path().join("a_query.gql"),
            "type Query { user: User }",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();

        let source = SchemaSource::Path(dir.path().to_owned());
        let schema = source.load().unwrap();
        assert_eq!(schema.query_type.as_deref(), Some("Query"));
        assert_eq!(schema.types.len(), 2);
    }

    #[test]
    fn single_definition_files_load_directly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("schema.graphql");
        fs::write(&file, "type Query { ok: Boolean }").unwrap();

        let schema = SchemaSource::Path(file).load().unwrap();
        assert_eq!(schema.query_type.as_deref(), Some("Query"));
    }
}
