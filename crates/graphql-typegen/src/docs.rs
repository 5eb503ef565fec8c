/// Renders a description and deprecation metadata as a JSDoc block. Returns
/// no lines when there is nothing to document.
pub(crate) fn description_to_jsdoc(
    description: Option<&str>,
    is_deprecated: bool,
    deprecation_reason: Option<&str>,
) -> Vec<String> {
    let mut text = description.unwrap_or_default().to_owned();

    if is_deprecated {
        text.push_str("\n@deprecated");
        if let Some(reason) = deprecation_reason {
            text.push(' ');
            text.push_str(reason);
        }
    }

    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["/**".to_owned()];
    lines.extend(text.lines().map(|line| format!(" * {line}")));
    lines.push(" */".to_owned());
    lines
}
