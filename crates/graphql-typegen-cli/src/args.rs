use clap::{Parser, ValueEnum};
use graphql_typegen::{AsyncResult, GenerateOptions};
use std::path::PathBuf;

/// Generate TypeScript definitions from a local folder of `.graphql` type
/// definitions, a single schema file or an introspection result.
#[derive(Debug, Parser)]
#[command(name = "graphql-typegen", version)]
pub(crate) struct Args {
    /// The schema: a folder of `.graphql`/`.gql` files, a single definition
    /// file, a `.json` introspection result or an inline schema definition
    pub(crate) schema: String,
    /// Output path for the TypeScript definitions file
    #[arg(short('o'), long, default_value = "graphqlTypes.d.ts")]
    pub(crate) output: PathBuf,
    /// Read generation options from a JSON configuration file. Flags given on
    /// the command line take precedence
    #[arg(long("config"))]
    pub(crate) config_path: Option<PathBuf>,
    /// Prefix prepended to every generated type name
    #[arg(long)]
    type_prefix: Option<String>,
    /// Indent width in spaces
    #[arg(long)]
    tab_spaces: Option<usize>,
    /// Map a custom scalar to a TypeScript type, e.g. `Date=string`
    #[arg(long("custom-scalar"), value_name = "NAME=TYPE", value_parser = parse_scalar_mapping)]
    custom_scalars: Vec<(String, String)>,
    /// Wrap the generated types in `declare global`
    #[arg(long)]
    global: bool,
    /// Wrap the generated types in a namespace
    #[arg(long)]
    namespace: Option<String>,
    /// Omit interface-inherited fields from implementing types
    #[arg(long)]
    minimize_interface_implementation: bool,
    /// TypeScript type of the resolver context
    #[arg(long)]
    context_type: Option<String>,
    /// Line injected verbatim at the top of the output, repeatable
    #[arg(long("import-statement"))]
    import_statements: Vec<String>,
    /// Encode nullable fields as required members with `| null` types
    #[arg(long)]
    strict_nulls: bool,
    /// Infer field resolver result types from the schema
    #[arg(long)]
    smart_t_result: bool,
    /// Infer field resolver parent types from the schema
    #[arg(long)]
    smart_t_parent: bool,
    /// Allow or require resolvers to return promises
    #[arg(long, value_enum)]
    async_result: Option<AsyncResultArg>,
    /// Make every member of the resolver map required
    #[arg(long)]
    require_resolver_types: bool,
    /// Generate enums as string literal unions
    #[arg(long)]
    no_string_enum: bool,
    /// Mark the `info` parameter of resolver signatures optional
    #[arg(long)]
    optional_resolver_info: bool,
    /// Rewrite enum member names to PascalCase
    #[arg(long)]
    enums_as_pascal_case: bool,
    /// TypeScript type of the root value, used by --smart-t-parent
    #[arg(long)]
    root_value_type: Option<String>,
    /// Append typed resolver interfaces to the output
    #[arg(long)]
    include_resolver_types: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum AsyncResultArg {
    /// Resolvers may return a value or a promise
    Enabled,
    /// Resolvers must return a promise
    Always,
}

impl From<AsyncResultArg> for AsyncResult {
    fn from(arg: AsyncResultArg) -> Self {
        match arg {
            AsyncResultArg::Enabled => AsyncResult::Enabled,
            AsyncResultArg::Always => AsyncResult::Always,
        }
    }
}

fn parse_scalar_mapping(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, ts_type)| (name.trim().to_owned(), ts_type.trim().to_owned()))
        .filter(|(name, ts_type)| !name.is_empty() && !ts_type.is_empty())
        .ok_or_else(|| format!("expected NAME=TYPE, got `{raw}`"))
}

impl Args {
    /// Layers the command line flags over `base`, which comes from the
    /// configuration file or the defaults.
    pub(crate) fn apply(&self, mut base: GenerateOptions) -> GenerateOptions {
        if let Some(type_prefix) = &self.type_prefix {
            base.type_prefix = type_prefix.clone();
        }
        if let Some(tab_spaces) = self.tab_spaces {
            base.tab_spaces = tab_spaces;
        }
        for (name, ts_type) in &self.custom_scalars {
            base.custom_scalar_type.insert(name.clone(), ts_type.clone());
        }
        if self.global {
            base.global = true;
        }
        if let Some(namespace) = &self.namespace {
            base.namespace = Some(namespace.clone());
        }
        if self.minimize_interface_implementation {
            base.minimize_interface_implementation = true;
        }
        if let Some(context_type) = &self.context_type {
            base.context_type = context_type.clone();
        }
        if !self.import_statements.is_empty() {
            base.import_statements = self.import_statements.clone();
        }
        if self.strict_nulls {
            base.strict_nulls = true;
        }
        if self.smart_t_result {
            base.smart_t_result = true;
        }
        if self.smart_t_parent {
            base.smart_t_parent = true;
        }
        if let Some(async_result) = self.async_result {
            base.async_result = async_result.into();
        }
        if self.require_resolver_types {
            base.require_resolver_types = true;
        }
        if self.no_string_enum {
            base.no_string_enum = true;
        }
        if self.optional_resolver_info {
            base.optional_resolver_info = true;
        }
        if self.enums_as_pascal_case {
            base.enums_as_pascal_case = true;
        }
        if let Some(root_value_type) = &self.root_value_type {
            base.root_value_type = root_value_type.clone();
        }
        if self.include_resolver_types {
            base.include_resolver_types = true;
        }
        base
    }
}
