//! Template rendering engine.
//!
//! This module implements the mini template language used for message
//! bodies:
//!
//! - `{{ name }}` - substitutes a context value
//! - `{% if cond %} A {% else %} B {% endif %}` - routes on truthiness
//! - `{% if cond %} A {% endif %}` - truthy keeps the block, falsy drops it
//! - `{% for item in list %} ... {{item}} ... {% endfor %}` - repeats the
//!   body once per array element
//!
//! # Pipeline
//!
//! [`render`] is a fixed sequence of four full-string substitution passes:
//! variable interpolation, if/else conditionals, if-without-else
//! conditionals, then for-loops. There is no AST; each pass consumes the
//! flat string the previous pass produced. The ordering is observable: loop
//! bodies rely on `{{item}}` markers left intact by pass 1, and the if-only
//! pass can only see blocks the if/else pass did not consume. Nested
//! directives of the same kind are not supported; the first non-greedy
//! match wins.
//!
//! # Error Handling
//!
//! Rendering never fails. Unknown variables survive as `{{name}}` markers,
//! falsy or missing conditions route to the else branch (or drop the
//! block), and loops over missing or non-array values collapse to the
//! empty string.

mod context;
mod passes;


pub use context::{Context, is_truthy, value_to_string};

use passes::{expand_loops, resolve_if, resolve_if_else, substitute_variables};

/// Render a template against a context.
///
/// Pure function of its inputs: no I/O, no shared state, safe to call
/// concurrently.
///
/// # Examples
///
/// ```
/// use missive::template::{Context, render};
///
/// let context: Context = [("first_name", "John"), ("last_name", "Doe")]
///     .into_iter()
///     .collect();
///
/// let rendered = render("Hello, {{first_name}} {{last_name}}!", &context);
/// assert_eq!(rendered, "Hello, John Doe!");
/// ```
pub fn render(template: &str, context: &Context) -> String {
    let rendered = substitute_variables(template, context);
    let rendered = resolve_if_else(&rendered, context);
    let rendered = resolve_if(&rendered, context);
    expand_loops(&rendered, context)
}
