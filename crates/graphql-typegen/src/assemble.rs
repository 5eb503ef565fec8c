//! Final output assembly: generation notice, section banners, optional
//! namespace and global wrappers, then a single reindentation pass.

use crate::{config::GenerateOptions, resolvers::ResolverOutput};

const TYPE_DEFS_BANNER: [&str; 5] = [
    "/*******************************",
    " *                             *",
    " *          TYPE DEFS          *",
    " *                             *",
    " *******************************/",
];

const TYPE_RESOLVERS_BANNER: [&str; 5] = [
    "/*********************************",
    " *                               *",
    " *         TYPE RESOLVERS        *",
    " *                               *",
    " *********************************/",
];

fn generation_notice() -> Vec<String> {
    vec![
        "/**".to_owned(),
        format!(" * This file is auto-generated by {}", env!("CARGO_PKG_NAME")),
        " * Please note that any changes in this file may be overwritten".to_owned(),
        " */".to_owned(),
        String::new(),
    ]
}

/// Stitches the generated sections together and returns the full file
/// content, newline-terminated.
pub(crate) fn assemble(
    type_defs: Vec<String>,
    resolvers: ResolverOutput,
    options: &GenerateOptions,
) -> String {
    let mut header = Vec::new();
    if options.include_resolver_types {
        header.extend(resolvers.import_header);
    }
    header.extend(generation_notice());

    let mut body: Vec<String> = TYPE_DEFS_BANNER.map(str::to_owned).into();
    body.extend(type_defs);
    if options.include_resolver_types {
        body.extend(TYPE_RESOLVERS_BANNER.map(str::to_owned));
        body.extend(resolvers.body);
    }

    if let Some(namespace) = &options.namespace {
        // a namespace nested under `declare global` must not be declared again
        let declare = if options.global { "" } else { "declare " };
        let mut wrapped = vec![format!("{declare}namespace {namespace} {{")];
        wrapped.extend(body);
        wrapped.push("}".to_owned());
        body = wrapped;
    }

    if options.global {
        let mut wrapped = vec![
            "export { };".to_owned(),
            String::new(),
            "declare global {".to_owned(),
        ];
        wrapped.extend(body);
        wrapped.push("}".to_owned());
        body = wrapped;
    }

    header.extend(body);
    let mut output = reindent(&header, options.tab_spaces).join("\n");
    output.push('\n');
    output
}

/// Reindents by brace tracking: a line whose trimmed form ends in `}` or `};`
/// dedents itself, a line ending in `{` indents what follows. Blank lines are
/// indented too, matching the historical output byte for byte.
pub(crate) fn reindent(lines: &[String], tab_spaces: usize) -> Vec<String> {
    let mut result = Vec::with_capacity(lines.len());
    let mut indent = 0usize;

    for line in lines {
        let trimmed = line.trim();

        if trimmed.ends_with('}') || trimmed.ends_with("};") {
            indent = indent.saturating_sub(tab_spaces);
        }

        result.push(format!("{}{line}", " ".repeat(indent)));

        if trimmed.ends_with('{') {
            indent += tab_spaces;
        }
    }

    result
}
