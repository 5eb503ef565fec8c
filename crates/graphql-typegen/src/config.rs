use serde::Deserialize;
use std::collections::BTreeMap;

/// All generation options. Supplied once per generation call and never
/// mutated during it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Maps a custom scalar name to the TypeScript type its declaration
    /// aliases. Unmapped custom scalars fall back to `any`.
    pub custom_scalar_type: BTreeMap<String, String>,
    /// Indent width in spaces.
    pub tab_spaces: usize,
    /// Prefix prepended to every generated type name.
    pub type_prefix: String,
    /// Wrap the output in an ambient `declare global` block.
    pub global: bool,
    /// Wrap the output in a namespace of this name.
    pub namespace: Option<String>,
    /// Omit interface-inherited fields from implementing types; the
    /// `extends` clause supplies them.
    pub minimize_interface_implementation: bool,
    /// Name of the resolver context type.
    pub context_type: String,
    /// Raw lines injected verbatim at the top of the output.
    pub import_statements: Vec<String>,
    /// Encode nullable fields as required-but-nullable members instead of
    /// optional members.
    pub strict_nulls: bool,
    /// Infer the default `TResult` of field resolvers from the field type.
    pub smart_t_result: bool,
    /// Infer the default `TParent` of field resolvers from the declaring
    /// type.
    pub smart_t_parent: bool,
    /// Resolver return-type wrapping in `Promise`.
    pub async_result: AsyncResult,
    /// Make every resolver-map member required instead of optional.
    pub require_resolver_types: bool,
    /// Force string-literal-union enums instead of nominal enums.
    pub no_string_enum: bool,
    /// Mark the `info` parameter of resolver signatures optional.
    pub optional_resolver_info: bool,
    /// Rewrite enum member names to PascalCase, keeping the original wire
    /// value as the assigned string.
    pub enums_as_pascal_case: bool,
    /// The parent type of resolvers on root operation types, used by smart
    /// `TParent` inference.
    pub root_value_type: String,
    /// Append the resolver type section to the output.
    pub include_resolver_types: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            custom_scalar_type: BTreeMap::new(),
            tab_spaces: 2,
            type_prefix: "GQL".to_owned(),
            global: false,
            namespace: None,
            minimize_interface_implementation: false,
            context_type: "any".to_owned(),
            import_statements: Vec::new(),
            strict_nulls: false,
            smart_t_result: false,
            smart_t_parent: false,
            async_result: AsyncResult::Disabled,
            require_resolver_types: false,
            no_string_enum: false,
            optional_resolver_info: false,
            enums_as_pascal_case: false,
            root_value_type: "any".to_owned(),
            include_resolver_types: false,
        }
    }
}

/// Whether generated resolver signatures may or must return promises.
///
/// Deserializes from `true`, `false` or `"always"`, matching the
/// `asyncResult` option of JSON configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AsyncResult {
    /// Resolvers return `TResult`.
    #[default]
    Disabled,
    /// Resolvers return `TResult | Promise<TResult>`.
    Enabled,
    /// Resolvers always return `Promise<TResult>`.
    Always,
}

impl<'de> Deserialize<'de> for AsyncResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(true) => Ok(AsyncResult::Enabled),
            Raw::Bool(false) => Ok(AsyncResult::Disabled),
            Raw::Str(value) if value == "always" => Ok(AsyncResult::Always),
            Raw::Str(value) => Err(serde::de::Error::custom(format!(
                "invalid asyncResult value `{value}`, expected `true`, `false` or `always`"
            ))),
        }
    }
}
