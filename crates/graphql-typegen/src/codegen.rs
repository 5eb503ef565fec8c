//! The declaration emitter: one TypeScript declaration block per named
//! schema type, in schema order.

use crate::{
    config::GenerateOptions,
    docs::description_to_jsdoc,
    schema::{
        is_builtin_object_name, EnumType, FieldDescriptor, InterfaceType, IntrospectedSchema,
        ScalarType, TypeDescriptor, UnionType,
    },
    type_ref::field_ref,
};
use heck::ToPascalCase;
use itertools::Itertools;

/// Union declarations longer than this are reflowed onto one line per
/// member.
const UNION_REFLOW_WIDTH: usize = 80;

pub(crate) struct DeclarationEmitter<'a> {
    schema: &'a IntrospectedSchema,
    options: &'a GenerateOptions,
}

impl<'a> DeclarationEmitter<'a> {
    pub(crate) fn new(schema: &'a IntrospectedSchema, options: &'a GenerateOptions) -> Self {
        DeclarationEmitter { schema, options }
    }

    pub(crate) fn emit(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for descriptor in self.schema.types.iter().filter(|t| !t.is_builtin()) {
            lines.extend(description_to_jsdoc(descriptor.description(), false, None));
            match descriptor {
                TypeDescriptor::Scalar(scalar) => self.scalar_declaration(scalar, &mut lines),
                TypeDescriptor::Enum(r#enum) => self.enum_declaration(r#enum, &mut lines),
                TypeDescriptor::Object(object) => self.object_declaration(
                    &object.name,
                    &object.fields,
                    &object.interfaces,
                    &mut lines,
                ),
                TypeDescriptor::InputObject(input_object) => {
                    self.object_declaration(&input_object.name, &input_object.fields, &[], &mut lines);
                }
                TypeDescriptor::Interface(interface) => {
                    self.object_declaration(&interface.name, &interface.fields, &[], &mut lines);
                    self.interface_extras(interface, &mut lines);
                }
                TypeDescriptor::Union(union) => self.union_declaration(union, &mut lines),
            }
            lines.push(String::new());
        }

        lines
    }

    fn scalar_declaration(&self, scalar: &ScalarType, out: &mut Vec<String>) {
        let mapped = self
            .options
            .custom_scalar_type
            .get(&scalar.name)
            .map_or("any", String::as_str);
        out.push(format!(
            "export type {}{} = {mapped};",
            self.options.type_prefix, scalar.name
        ));
    }

    fn enum_declaration(&self, r#enum: &EnumType, out: &mut Vec<String>) {
        // Under a global wrapper a nominal enum would need an import to be
        // usable, so the string union form is forced there too.
        if self.options.no_string_enum || self.options.global {
            let members: Vec<String> = r#enum
                .values
                .iter()
                .map(|value| format!("'{}'", value.name))
                .collect();
            out.extend(union_type_lines(
                &self.options.type_prefix,
                &r#enum.name,
                &members,
            ));
            // the note only marks the case where global scope forced the
            // union against an otherwise nominal enum
            if self.options.global && !self.options.no_string_enum {
                out.push(format!(
                    "// NOTE: enum {} is generated as a string union because the types are generated under global scope",
                    r#enum.name
                ));
            }
            return;
        }

        out.push(format!(
            "export enum {}{} {{",
            self.options.type_prefix, r#enum.name
        ));
        let last = r#enum.values.len().saturating_sub(1);
        for (index, value) in r#enum.values.iter().enumerate() {
            let jsdoc = description_to_jsdoc(
                value.description.as_deref(),
                value.is_deprecated,
                value.deprecation_reason.as_deref(),
            );
            if !jsdoc.is_empty() {
                out.push(String::new());
                out.extend(jsdoc);
            }
            let member = if self.options.enums_as_pascal_case {
                value.name.to_pascal_case()
            } else {
                value.name.clone()
            };
            let comma = if index == last { "" } else { "," };
            out.push(format!("{member} = '{}'{comma}", value.name));
        }
        out.push("}".to_owned());
    }

    fn object_declaration(
        &self,
        name: &str,
        fields: &[FieldDescriptor],
        interfaces: &[String],
        out: &mut Vec<String>,
    ) {
        let prefix = &self.options.type_prefix;

        // Fields covered by an `extends` clause are dropped from the member
        // list when minimization is on; matching is by name only.
        let inherited: Vec<&str> = if self.options.minimize_interface_implementation {
            interfaces
                .iter()
                .flat_map(|interface| self.interface_field_names(interface))
                .collect()
        } else {
            Vec::new()
        };

        let extends = if interfaces.is_empty() {
            String::new()
        } else {
            format!(
                "extends {} ",
                interfaces
                    .iter()
                    .map(|interface| format!("{prefix}{interface}"))
                    .join(", ")
            )
        };
        out.push(format!("export interface {prefix}{name} {extends}{{"));

        for field in fields {
            if inherited.contains(&field.name.as_str()) {
                continue;
            }
            let jsdoc = description_to_jsdoc(
                field.description.as_deref(),
                field.is_deprecated,
                field.deprecation_reason.as_deref(),
            );
            if !jsdoc.is_empty() {
                out.push(String::new());
                out.extend(jsdoc);
            }
            let rendered = field_ref(&field.name, &field.type_ref, prefix, self.options.strict_nulls);
            out.push(format!("{}: {};", rendered.member_name, rendered.ts_type));
        }

        out.push("}".to_owned());
    }

    /// A string-literal union of the implementing type names plus a
    /// name-to-type map, for exhaustive narrowing on `__resolveType` results.
    fn interface_extras(&self, interface: &InterfaceType, out: &mut Vec<String>) {
        let prefix = &self.options.type_prefix;
        let name = &interface.name;

        out.push(String::new());
        out.push(format!("/** Use this to resolve interface type {name} */"));
        let members: Vec<String> = interface
            .possible_types
            .iter()
            .map(|possible| format!("'{possible}'"))
            .collect();
        out.extend(union_type_lines(
            prefix,
            &format!("Possible{name}TypeNames"),
            &members,
        ));

        out.push(String::new());
        out.push(format!("export interface {prefix}{name}NameMap {{"));
        out.push(format!("{name}: {prefix}{name};"));
        for possible in &interface.possible_types {
            out.push(format!("{possible}: {prefix}{possible};"));
        }
        out.push("}".to_owned());
    }

    fn union_declaration(&self, union: &UnionType, out: &mut Vec<String>) {
        let prefix = &self.options.type_prefix;
        let name = &union.name;

        let members: Vec<String> = union
            .possible_types
            .iter()
            .map(|member| {
                if is_builtin_object_name(member) {
                    member.clone()
                } else {
                    format!("{prefix}{member}")
                }
            })
            .collect();
        out.extend(union_type_lines(prefix, name, &members));

        out.push(String::new());
        out.push(format!("/** Use this to resolve union type {name} */"));
        let possible_names: Vec<String> = union
            .possible_types
            .iter()
            .map(|possible| format!("'{possible}'"))
            .collect();
        out.extend(union_type_lines(
            prefix,
            &format!("Possible{name}TypeNames"),
            &possible_names,
        ));

        out.push(String::new());
        out.push(format!("export interface {prefix}{name}NameMap {{"));
        out.push(format!("{name}: {prefix}{name};"));
        for possible in &union.possible_types {
            out.push(format!("{possible}: {prefix}{possible};"));
        }
        out.push("}".to_owned());
    }

    fn interface_field_names(&self, interface_name: &str) -> Vec<&'a str> {
        self.schema
            .types
            .iter()
            .find_map(|descriptor| match descriptor {
                TypeDescriptor::Interface(interface) if interface.name == interface_name => Some(
                    interface
                        .fields
                        .iter()
                        .map(|field| field.name.as_str())
                        .collect(),
                ),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// `export type <Prefix><Name> = A | B | ...;`, reflowed onto one member per
/// line when the single-line form would overrun [`UNION_REFLOW_WIDTH`].
fn union_type_lines(prefix: &str, type_name: &str, members: &[String]) -> Vec<String> {
    let single_line = format!(
        "export type {prefix}{type_name} = {};",
        members.iter().join(" | ")
    );
    if single_line.len() <= UNION_REFLOW_WIDTH {
        return vec![single_line];
    }

    let mut lines = vec![format!("export type {prefix}{type_name} =")];
    let last = members.len() - 1;
    for (index, member) in members.iter().enumerate() {
        if index == last {
            lines.push(format!("{member};"));
        } else {
            lines.push(format!("{member} |"));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::union_type_lines;

    #[test]
    fn short_unions_stay_on_one_line() {
        let members = vec!["'Red'".to_owned(), "'Green'".to_owned()];
        assert_eq!(
            union_type_lines("GQL", "Color", &members),
            vec!["export type GQLColor = 'Red' | 'Green';"]
        );
    }

    #[test]
    fn long_unions_reflow_one_member_per_line() {
        let members: Vec<String> = (0..8)
            .map(|index| format!("'VeryLongEnumVariantName{index}'"))
            .collect();
        let lines = union_type_lines("GQL", "Long", &members);
        assert_eq!(lines[0], "export type GQLLong =");
        assert_eq!(lines[1], "'VeryLongEnumVariantName0' |");
        assert_eq!(lines.last().unwrap(), "'VeryLongEnumVariantName7';");
    }
}
