#![allow(unused_crate_dependencies)]

use expect_test::expect;
use graphql_typegen::{generate_typescript, AsyncResult, GenerateOptions, SchemaSource};
use indoc::indoc;

fn generate(sdl: &str, options: &GenerateOptions) -> String {
    generate_typescript(&SchemaSource::Sdl(sdl.to_owned()), options).unwrap()
}

fn resolver_options() -> GenerateOptions {
    GenerateOptions {
        include_resolver_types: true,
        ..GenerateOptions::default()
    }
}

#[test]
fn full_output_with_resolver_types() {
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
        &resolver_options(),
    );

    expect![[r#"
        /* tslint:disable */
        /* eslint-disable */
        import { GraphQLResolveInfo } from 'graphql';
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

        /*********************************
         *                               *
         *         TYPE RESOLVERS        *
         *                               *
         *********************************/
        /**
         * This interface define the shape of your resolver
         * Note that this type is designed to be compatible with graphql-tools resolvers
         * However, you can still use other generated interfaces to make your resolver type-safed
         */
        export interface GQLResolver {
          Query?: GQLQueryTypeResolver;
          User?: GQLUserTypeResolver;
        }
        export interface GQLQueryTypeResolver<TParent = any> {
          user?: QueryToUserResolver<TParent>;
        }

        export interface QueryToUserResolver<TParent = any, TResult = any> {
          (parent: TParent, args: {}, context: any, info: GraphQLResolveInfo): TResult;
        }

        export interface GQLUserTypeResolver<TParent = any> {
          id?: UserToIdResolver<TParent>;
          name?: UserToNameResolver<TParent>;
        }

        export interface UserToIdResolver<TParent = any, TResult = any> {
          (parent: TParent, args: {}, context: any, info: GraphQLResolveInfo): TResult;
        }

        export interface UserToNameResolver<TParent = any, TResult = any> {
          (parent: TParent, args: {}, context: any, info: GraphQLResolveInfo): TResult;
        }

    "#]]
    .assert_eq(&output);
}

#[test]
fn custom_scalars_pull_in_graphql_scalar_type() {
    let output = generate("scalar Date type Query { now: Date }", &resolver_options());
    assert!(output.contains("import { GraphQLResolveInfo, GraphQLScalarType } from 'graphql';"));
    assert!(output.contains("Date?: GraphQLScalarType;"));
}

#[test]
fn field_arguments_get_their_own_interface() {
    let output = generate(
        "type Query { user(id: ID!, active: Boolean): User } type User { id: ID! }",
        &resolver_options(),
    );
    assert!(output.contains("export interface QueryToUserArgs {"));
    assert!(output.contains("id: string;"));
    assert!(output.contains("active?: boolean;"));
    assert!(output
        .contains("(parent: TParent, args: QueryToUserArgs, context: any, info: GraphQLResolveInfo): TResult;"));
}

#[test]
fn argument_members_ignore_strict_nulls() {
    let mut options = resolver_options();
    options.strict_nulls = true;

    let output = generate(
        "type Query { user(nickname: String): User } type User { id: ID! }",
        &options,
    );
    // the argument stays optional even though fields are strict
    assert!(output.contains("nickname?: string;"));
}

#[test]
fn abstract_types_get_a_resolve_type_member() {
    let output = generate(
        indoc! {r"
            interface Character { id: ID! }
            type Human implements Character { id: ID! }
            type Droid implements Character { id: ID! }
            union Searchable = Human | Droid
        "},
        &resolver_options(),
    );
    assert!(output.contains("__resolveType: GQLCharacterTypeResolver"));
    assert!(output.contains("__resolveType: GQLSearchableTypeResolver"));
    assert!(output.contains(
        "(parent: TParent, context: any, info: GraphQLResolveInfo): 'Human' | 'Droid' | Promise<'Human' | 'Droid'>;"
    ));
}

#[test]
fn subscription_fields_get_resolve_and_subscribe() {
    let output = generate(
        "type Query { ok: Boolean } type Subscription { messageAdded: String }",
        &resolver_options(),
    );
    assert!(output.contains(
        "resolve?: (parent: TParent, args: {}, context: any, info: GraphQLResolveInfo) => TResult;"
    ));
    assert!(output.contains(
        "subscribe: (parent: TParent, args: {}, context: any, info: GraphQLResolveInfo) => AsyncIterator<TResult>;"
    ));
}

#[test]
fn async_result_wraps_return_types() {
    let sdl = "type Query { ok: Boolean } type Subscription { tick: Int }";

    let mut options = resolver_options();
    options.async_result = AsyncResult::Enabled;
    let enabled = generate(sdl, &options);
    assert!(enabled.contains("): TResult | Promise<TResult>;"));
    assert!(enabled
        .contains("=> AsyncIterator<TResult> | Promise<AsyncIterator<TResult>>;"));

    options.async_result = AsyncResult::Always;
    let always = generate(sdl, &options);
    assert!(always.contains("): Promise<TResult>;"));
}

#[test]
fn smart_inference_fills_parent_and_result_defaults() {
    let mut options = resolver_options();
    options.smart_t_parent = true;
    options.smart_t_result = true;
    options.root_value_type = "MyRoot".to_owned();

    let output = generate(
        "type Query { user: User } type User { id: ID! }",
        &options,
    );
    assert!(output.contains("export interface GQLQueryTypeResolver<TParent = MyRoot> {"));
    assert!(output.contains("export interface GQLUserTypeResolver<TParent = GQLUser> {"));
    // smart TResult keeps nullability visible
    assert!(output
        .contains("export interface QueryToUserResolver<TParent = MyRoot, TResult = GQLUser | null> {"));
    assert!(output.contains("export interface UserToIdResolver<TParent = GQLUser, TResult = string> {"));
}

#[test]
fn require_resolver_types_drops_the_optionality_markers() {
    let mut options = resolver_options();
    options.require_resolver_types = true;

    let output = generate("type Query { ok: Boolean }", &options);
    assert!(output.contains("Query: GQLQueryTypeResolver;"));
    assert!(!output.contains("Query?:"));
    assert!(output.contains("ok: QueryToOkResolver<TParent>;"));
}

#[test]
fn optional_resolver_info_marks_the_info_parameter() {
    let mut options = resolver_options();
    options.optional_resolver_info = true;

    let output = generate("type Query { ok: Boolean }", &options);
    assert!(output.contains("info?: GraphQLResolveInfo"));
}

#[test]
fn the_context_type_is_threaded_through_signatures() {
    let mut options = resolver_options();
    options.context_type = "AppContext".to_owned();

    let output = generate("type Query { ok: Boolean }", &options);
    assert!(output.contains("context: AppContext, info: GraphQLResolveInfo"));
}

#[test]
fn resolver_section_is_absent_by_default() {
    let output = generate("type Query { ok: Boolean }", &GenerateOptions::default());
    assert!(!output.contains("TYPE RESOLVERS"));
    assert!(!output.contains("GraphQLResolveInfo"));
}
