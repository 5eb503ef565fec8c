#![allow(unused_crate_dependencies)]

use expect_test::expect;
use graphql_typegen::{generate_typescript, GenerateOptions, SchemaSource};
use indoc::indoc;

fn generate(sdl: &str, options: &GenerateOptions) -> String {
    generate_typescript(&SchemaSource::Sdl(sdl.to_owned()), options).unwrap()
}

#[test]
fn default_output_for_a_small_schema() {
    let output = generate(
        indoc! {r"
            type Query {
                user: User
            }

            type User {
                id: ID!
                name: String
            }
        "},
        &GenerateOptions::default(),
    );

    expect![[r#"
        /**
         * This file is auto-generated by graphql-typegen
         * Please note that any changes in this file may be overwritten
         */

        /*******************************
         *                             *
         *          TYPE DEFS          *
         *                             *
         *******************************/
        export interface GQLQuery {
          user?: GQLUser;
        }

        export interface GQLUser {
          id: string;
          name?: string;
        }

    "#]]
    .assert_eq(&output);
}

#[test]
fn custom_scalars_use_the_configured_type_or_any() {
    let mut options = GenerateOptions::default();
    options
        .custom_scalar_type
        .insert("Date".to_owned(), "string".to_owned());

    let output = generate("scalar Date scalar JSON", &options);
    assert!(output.contains("export type GQLDate = string;"));
    assert!(output.contains("export type GQLJSON = any;"));
}

#[test]
fn descriptions_become_jsdoc_blocks() {
    let output = generate(
        indoc! {r#"
            """
            A user of the system
            """
            type User {
                "Unique identifier"
                id: ID!
                old: String @deprecated(reason: "use id")
            }
        "#},
        &GenerateOptions::default(),
    );
    assert!(output.contains(" * A user of the system"));
    assert!(output.contains(" * Unique identifier"));
    assert!(output.contains(" * @deprecated use id"));
}

#[test]
fn interfaces_get_possible_names_and_a_name_map() {
    let output = generate(
        indoc! {r"
            interface Character {
                id: ID!
            }
            type Human implements Character {
                id: ID!
            }
            type Droid implements Character {
                id: ID!
            }
        "},
        &GenerateOptions::default(),
    );
    assert!(output.contains("/** Use this to resolve interface type Character */"));
    assert!(output.contains("export type GQLPossibleCharacterTypeNames = 'Human' | 'Droid';"));
    assert!(output.contains("export interface GQLCharacterNameMap {"));
    assert!(output.contains("Character: GQLCharacter;"));
    assert!(output.contains("Droid: GQLDroid;"));
    assert!(output.contains("export interface GQLHuman extends GQLCharacter {"));
}

#[test]
fn minimized_implementations_drop_inherited_fields() {
    let sdl = indoc! {r"
        interface Character {
            id: ID!
        }
        type Human implements Character {
            id: ID!
            height: Float
        }
    "};

    let plain = generate(sdl, &GenerateOptions::default());
    assert_eq!(plain.matches("id: string;").count(), 2);

    let minimized = generate(
        sdl,
        &GenerateOptions {
            minimize_interface_implementation: true,
            ..GenerateOptions::default()
        },
    );
    assert_eq!(minimized.matches("id: string;").count(), 1);
    assert!(minimized.contains("height?: number;"));
}

#[test]
fn unions_list_their_members_and_possible_names() {
    let output = generate(
        indoc! {r"
            type Photo { url: String }
            type Video { url: String }
            union Media = Photo | Video
        "},
        &GenerateOptions::default(),
    );
    assert!(output.contains("export type GQLMedia = GQLPhoto | GQLVideo;"));
    assert!(output.contains("/** Use this to resolve union type Media */"));
    assert!(output.contains("export type GQLPossibleMediaTypeNames = 'Photo' | 'Video';"));
    assert!(output.contains("export interface GQLMediaNameMap {"));
}

#[test]
fn overlong_unions_reflow_one_member_per_line() {
    let output = generate(
        "union Everything = AlphaVariant | BetaVariant | GammaVariant | DeltaVariant | EpsilonVariant",
        &GenerateOptions::default(),
    );
    assert!(output.contains("export type GQLEverything =\n"));
    assert!(output.contains("GQLAlphaVariant |\n"));
    assert!(output.contains("GQLEpsilonVariant;\n"));
}

#[test]
fn enums_are_nominal_by_default() {
    let output = generate(
        "enum UserRole { SYS_ADMIN MANAGER }",
        &GenerateOptions::default(),
    );
    assert!(output.contains("export enum GQLUserRole {"));
    assert!(output.contains("SYS_ADMIN = 'SYS_ADMIN',"));
    assert!(output.contains("MANAGER = 'MANAGER'\n"));
}

#[test]
fn no_string_enum_forces_a_literal_union() {
    let output = generate(
        "enum UserRole { SYS_ADMIN MANAGER }",
        &GenerateOptions {
            no_string_enum: true,
            ..GenerateOptions::default()
        },
    );
    assert!(output.contains("export type GQLUserRole = 'SYS_ADMIN' | 'MANAGER';"));
    assert!(!output.contains("export enum"));
}

#[test]
fn pascal_case_renames_members_but_keeps_wire_values() {
    let output = generate(
        "enum UserRole { SYS_ADMIN MANAGER }",
        &GenerateOptions {
            enums_as_pascal_case: true,
            ..GenerateOptions::default()
        },
    );
    assert!(output.contains("SysAdmin = 'SYS_ADMIN',"));
    assert!(output.contains("Manager = 'MANAGER'"));
}

#[test]
fn strict_nulls_moves_nullability_into_the_type() {
    let output = generate(
        "type User { name: String tags: [String!] }",
        &GenerateOptions {
            strict_nulls: true,
            ..GenerateOptions::default()
        },
    );
    assert!(output.contains("name: string | null;"));
    assert!(output.contains("tags: Array<string> | null;"));
}

#[test]
fn input_objects_are_plain_interfaces() {
    let output = generate(
        "input CreateUserInput { name: String! nickname: String }",
        &GenerateOptions::default(),
    );
    assert!(output.contains("export interface GQLCreateUserInput {"));
    assert!(output.contains("name: string;"));
    assert!(output.contains("nickname?: string;"));
}

#[test]
fn the_type_prefix_is_configurable() {
    let output = generate(
        "type User { id: ID! }",
        &GenerateOptions {
            type_prefix: "Api".to_owned(),
            ..GenerateOptions::default()
        },
    );
    assert!(output.contains("export interface ApiUser {"));
    assert!(!output.contains("GQLUser"));
}
