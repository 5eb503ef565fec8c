//! The resolver synthesizer: emits an umbrella resolver map plus one typed
//! interface per field, interface and union, compatible with graphql-tools
//! style resolver maps.

use crate::{
    config::{AsyncResult, GenerateOptions},
    schema::{FieldDescriptor, IntrospectedSchema, ObjectType, TypeDescriptor},
    type_ref::field_ref,
};
use itertools::Itertools;

/// The two pieces of the resolver section. The import header goes above the
/// generation notice, the body below the type definitions.
pub(crate) struct ResolverOutput {
    pub(crate) import_header: Vec<String>,
    pub(crate) body: Vec<String>,
}

pub(crate) struct ResolverSynthesizer<'a> {
    schema: &'a IntrospectedSchema,
    options: &'a GenerateOptions,
    /// Members of the umbrella resolver interface.
    resolver_map: Vec<String>,
    /// Standalone resolver and argument interfaces.
    interfaces: Vec<String>,
}

impl<'a> ResolverSynthesizer<'a> {
    pub(crate) fn new(schema: &'a IntrospectedSchema, options: &'a GenerateOptions) -> Self {
        ResolverSynthesizer {
            schema,
            options,
            resolver_map: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    pub(crate) fn synthesize(mut self) -> ResolverOutput {
        let mut import_header = self.options.import_statements.clone();
        import_header.push("/* tslint:disable */".to_owned());
        import_header.push("/* eslint-disable */".to_owned());

        let user_types: Vec<&TypeDescriptor> = self
            .schema
            .types
            .iter()
            .filter(|descriptor| !descriptor.is_builtin())
            .collect();

        let has_custom_scalar = user_types
            .iter()
            .any(|descriptor| matches!(descriptor, TypeDescriptor::Scalar(_)));
        if has_custom_scalar {
            import_header
                .push("import { GraphQLResolveInfo, GraphQLScalarType } from 'graphql';".to_owned());
        } else {
            import_header.push("import { GraphQLResolveInfo } from 'graphql';".to_owned());
        }

        self.resolver_map.extend([
            "/**".to_owned(),
            " * This interface define the shape of your resolver".to_owned(),
            " * Note that this type is designed to be compatible with graphql-tools resolvers"
                .to_owned(),
            " * However, you can still use other generated interfaces to make your resolver type-safed"
                .to_owned(),
            " */".to_owned(),
            format!("export interface {}Resolver {{", self.options.type_prefix),
        ]);

        for descriptor in &user_types {
            match descriptor {
                TypeDescriptor::Scalar(scalar) => {
                    self.resolver_map
                        .push(format!("{}{}: GraphQLScalarType;", scalar.name, self.modifier()));
                }
                TypeDescriptor::Object(object) => {
                    let is_subscription =
                        self.schema.subscription_type.as_deref() == Some(object.name.as_str());
                    self.object_resolver(object, is_subscription);
                }
                TypeDescriptor::Interface(interface) => {
                    self.abstract_type_resolver(&interface.name, &interface.possible_types);
                }
                TypeDescriptor::Union(union) => {
                    self.abstract_type_resolver(&union.name, &union.possible_types);
                }
                TypeDescriptor::Enum(_) | TypeDescriptor::InputObject(_) => {}
            }
        }

        self.resolver_map.push("}".to_owned());

        let mut body = self.resolver_map;
        body.extend(self.interfaces);
        ResolverOutput {
            import_header,
            body,
        }
    }

    /// The `__resolveType` entry for an interface or union, returning one of
    /// the possible type names.
    fn abstract_type_resolver(&mut self, name: &str, possible_types: &[String]) {
        let interface_name = format!("{}{name}TypeResolver", self.options.type_prefix);
        let names = possible_types
            .iter()
            .map(|possible| format!("'{possible}'"))
            .join(" | ");

        self.interfaces.extend([
            format!(
                "export interface {interface_name}<TParent = {}> {{",
                self.guess_t_parent(name)
            ),
            format!(
                "(parent: TParent, context: {}, info{}: GraphQLResolveInfo): {names} | Promise<{names}>;",
                self.options.context_type,
                self.info_modifier(),
            ),
            "}".to_owned(),
        ]);

        self.resolver_map.extend([
            format!("{name}{}: {{", self.modifier()),
            format!("__resolveType: {interface_name}"),
            "};".to_owned(),
            String::new(),
        ]);
    }

    fn object_resolver(&mut self, object: &ObjectType, is_subscription: bool) {
        let prefix = &self.options.type_prefix;
        let type_resolver_name = format!("{prefix}{}TypeResolver", object.name);
        let mut member_lines = Vec::new();
        let mut field_interfaces = Vec::new();

        for field in &object.fields {
            let uppercased = uppercase_first(&field.name);

            let args_type = if field.args.is_empty() {
                "{}".to_owned()
            } else {
                let args_name = format!("{}To{uppercased}Args", object.name);
                field_interfaces.push(format!("export interface {args_name} {{"));
                for argument in &field.args {
                    // argument members are always optional-style, regardless
                    // of strictNulls
                    let rendered = field_ref(&argument.name, &argument.type_ref, prefix, false);
                    field_interfaces
                        .push(format!("{}: {};", rendered.member_name, rendered.ts_type));
                }
                field_interfaces.push("}".to_owned());
                args_name
            };

            let field_resolver_name = format!("{}To{uppercased}Resolver", object.name);
            let t_parent = self.guess_t_parent(&object.name);
            let t_result = self.guess_t_result(field);
            let info = self.info_modifier();
            let context = &self.options.context_type;
            let return_type = match self.options.async_result {
                AsyncResult::Disabled => "TResult",
                AsyncResult::Enabled => "TResult | Promise<TResult>",
                AsyncResult::Always => "Promise<TResult>",
            };

            field_interfaces.push(format!(
                "export interface {field_resolver_name}<TParent = {t_parent}, TResult = {t_result}> {{"
            ));
            if is_subscription {
                let subscribe_return = match self.options.async_result {
                    AsyncResult::Disabled => "AsyncIterator<TResult>",
                    AsyncResult::Enabled | AsyncResult::Always => {
                        "AsyncIterator<TResult> | Promise<AsyncIterator<TResult>>"
                    }
                };
                field_interfaces.push(format!(
                    "resolve{}: (parent: TParent, args: {args_type}, context: {context}, info{info}: GraphQLResolveInfo) => {return_type};",
                    self.modifier(),
                ));
                field_interfaces.push(format!(
                    "subscribe: (parent: TParent, args: {args_type}, context: {context}, info{info}: GraphQLResolveInfo) => {subscribe_return};"
                ));
            } else {
                field_interfaces.push(format!(
                    "(parent: TParent, args: {args_type}, context: {context}, info{info}: GraphQLResolveInfo): {return_type};"
                ));
            }
            field_interfaces.push("}".to_owned());
            field_interfaces.push(String::new());

            member_lines.push(format!(
                "{}{}: {field_resolver_name}<TParent>;",
                field.name,
                self.modifier()
            ));
        }

        self.interfaces.push(format!(
            "export interface {type_resolver_name}<TParent = {}> {{",
            self.guess_t_parent(&object.name)
        ));
        self.interfaces.extend(member_lines);
        self.interfaces.push("}".to_owned());
        self.interfaces.push(String::new());
        self.interfaces.extend(field_interfaces);

        self.resolver_map.push(format!(
            "{}{}: {type_resolver_name};",
            object.name,
            self.modifier()
        ));
    }

    fn modifier(&self) -> &'static str {
        if self.options.require_resolver_types {
            ""
        } else {
            "?"
        }
    }

    fn info_modifier(&self) -> &'static str {
        if self.options.optional_resolver_info {
            "?"
        } else {
            ""
        }
    }

    fn guess_t_parent(&self, parent_type_name: &str) -> String {
        if !self.options.smart_t_parent {
            return "any".to_owned();
        }
        if self.schema.is_root_type(parent_type_name) {
            return self.options.root_value_type.clone();
        }
        format!("{}{parent_type_name}", self.options.type_prefix)
    }

    fn guess_t_result(&self, field: &FieldDescriptor) -> String {
        if !self.options.smart_t_result {
            return "any".to_owned();
        }
        // strict rendering so that TResult can carry `| null`
        field_ref(&field.name, &field.type_ref, &self.options.type_prefix, true).ts_type
    }
}

fn uppercase_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::uppercase_first;

    #[test]
    fn uppercase_first_leaves_the_rest_alone() {
        assert_eq!(uppercase_first("createUser"), "CreateUser");
        assert_eq!(uppercase_first("HTTPCode"), "HTTPCode");
        assert_eq!(uppercase_first(""), "");
    }
}
