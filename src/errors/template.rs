//! Placeholder substitution for error message templates
//!
//! A placeholder is an upper-case identifier in square brackets, e.g.
//! `[ARG_TYPE]`. Every placeholder in a template must have a binding;
//! an unbound one is reported instead of being left in the output.
//! Bracketed text that is not an upper-case identifier (`[1, 2]`, `[x]`)
//! is copied through untouched, and substituted values are never re-scanned.

use serde_json::{Map, Value};
use thiserror::Error;

/// Expected type of an argument
pub const ARG_TYPE: &str = "ARG_TYPE";

/// Type of the value actually given for an argument
pub const VAR_TYPE: &str = "VAR_TYPE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template placeholder [{0}] has no binding")]
    UnboundPlaceholder(String),
}

/// Substitute every placeholder in `template` using `bindings`
pub fn render(template: &str, bindings: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let name = after
            .find(']')
            .map(|close| &after[..close])
            .filter(|name| is_placeholder_name(name));

        match name {
            Some(name) => {
                let value = bindings
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| TemplateError::UnboundPlaceholder(name.to_string()))?;
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('[');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Apply [`render`] to every string inside a JSON value
///
/// Object keys are left as they are.
pub fn render_value(value: &Value, bindings: &[(&str, &str)]) -> Result<Value, TemplateError> {
    Ok(match value {
        Value::String(s) => Value::String(render(s, bindings)?),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| render_value(item, bindings))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(fields) => {
            let mut rendered = Map::with_capacity(fields.len());
            for (key, field) in fields {
                rendered.insert(key.clone(), render_value(field, bindings)?);
            }
            Value::Object(rendered)
        }
        other => other.clone(),
    })
}

fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
