//! The four substitution passes.
//!
//! Each pass is a full-string regex rewrite over the output of the previous
//! one. Patterns are non-greedy, so the first closing marker wins and
//! nested blocks of the same kind break apart rather than nest.

use super::context::{Context, is_truthy, value_to_string};
use regex::{Captures, NoExpand, Regex};
use serde_json::Value;
use std::sync::LazyLock;

/// `{{ name }}` markers; the name may not span lines.
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("invalid variable regex"));

/// `{% if cond %} A {% else %} B {% endif %}`; condition and bodies may span lines.
static IF_ELSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{%\s*if\s+(.*?)\s*%\}(.*?)\{%\s*else\s*%\}(.*?)\{%\s*endif\s*%\}")
        .expect("invalid if/else regex")
});

/// `{% if cond %} A {% endif %}`; only reached after if/else blocks are consumed.
static IF_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{%\s*if\s+(.*?)\s*%\}(.*?)\{%\s*endif\s*%\}").expect("invalid if regex")
});

/// `{% for item in list %} body {% endfor %}`.
static FOR_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{%\s*for\s+(.*?)\s+in\s+(.*?)\s*%\}(.*?)\{%\s*endfor\s*%\}")
        .expect("invalid for regex")
});

/// Pass 1: substitute `{{name}}` markers.
///
/// Defined keys (including falsy values) substitute their string form.
/// Absent keys re-emit the marker with the trimmed name, so unresolved
/// variables stay visible in the output and to later passes.
pub(super) fn substitute_variables(template: &str, context: &Context) -> String {
    VARIABLE
        .replace_all(template, |caps: &Captures| {
            let name = caps[1].trim();
            match context.get(name) {
                Some(value) => value_to_string(value),
                None => format!("{{{{{name}}}}}"),
            }
        })
        .into_owned()
}

/// Pass 2: resolve `{% if %}...{% else %}...{% endif %}` blocks.
pub(super) fn resolve_if_else(template: &str, context: &Context) -> String {
    IF_ELSE
        .replace_all(template, |caps: &Captures| {
            let condition = caps[1].trim();
            let branch = if is_truthy(context.get(condition)) {
                &caps[2]
            } else {
                &caps[3]
            };
            branch.trim().to_string()
        })
        .into_owned()
}

/// Pass 3: resolve standalone `{% if %}...{% endif %}` blocks.
pub(super) fn resolve_if(template: &str, context: &Context) -> String {
    IF_ONLY
        .replace_all(template, |caps: &Captures| {
            let condition = caps[1].trim();
            if is_truthy(context.get(condition)) {
                caps[2].trim().to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Pass 4: expand `{% for item in list %}...{% endfor %}` blocks.
///
/// A list key that is absent or not an array collapses the whole block to
/// the empty string. Each element renders the body with every `{{item}}`
/// marker (whitespace-tolerant inside the braces) replaced by the element's
/// string form; iterations are trimmed and concatenated with no separator.
pub(super) fn expand_loops(template: &str, context: &Context) -> String {
    FOR_LOOP
        .replace_all(template, |caps: &Captures| {
            let item_name = caps[1].trim();
            let list_name = caps[2].trim();
            let body = &caps[3];

            let Some(Value::Array(items)) = context.get(list_name) else {
                return String::new();
            };

            // The item name is escaped, so names containing regex
            // metacharacters match literally.
            let marker = Regex::new(&format!(
                r"\{{\{{\s*{}\s*\}}\}}",
                regex::escape(item_name)
            ))
            .expect("escaped item name forms a valid regex");

            items
                .iter()
                .map(|item| {
                    let element = value_to_string(item);
                    marker
                        .replace_all(body, NoExpand(&element))
                        .trim()
                        .to_string()
                })
                .collect()
        })
        .into_owned()
}
