use super::{
    error::{TemplateField, UnresolvedTemplate},
    keywords::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, PROCESS_ENV_PREFIX},
};
use std::collections::BTreeMap;

/// Replaces every `{{name}}` and `{{process.env.name}}` whose name is in
/// `vars`. Substituted values are copied as-is and never rescanned, so the
/// result does not depend on the order variables are applied in.
pub fn replace_variables(input: &str, vars: &BTreeMap<String, String>) -> String {
    if vars.is_empty() || !input.contains(PLACEHOLDER_OPEN) {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find(PLACEHOLDER_OPEN) {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];
        match match_placeholder(candidate, vars) {
            Some((name, value, len)) => {
                tracing::debug!(placeholder = name, "replaced variable");
                out.push_str(value);
                rest = &candidate[len..];
            }
            None => {
                // Keep one brace and resume at the next byte, so `{{k}}`
                // starting inside a longer run of braces is still found.
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Shortest known placeholder at the start of `s`, as its name, value and
/// length in bytes. Every `}}` is tried as the closing one, so names
/// containing braces still match.
fn match_placeholder<'s, 'v>(
    s: &'s str,
    vars: &'v BTreeMap<String, String>,
) -> Option<(&'s str, &'v String, usize)> {
    let body = &s[PLACEHOLDER_OPEN.len()..];
    body.char_indices()
        .map(|(close, _)| close)
        .filter(|&close| body[close..].starts_with(PLACEHOLDER_CLOSE))
        .find_map(|close| {
            let name = &body[..close];
            lookup(name, vars).map(|value| {
                (name, value, PLACEHOLDER_OPEN.len() + close + PLACEHOLDER_CLOSE.len())
            })
        })
}

fn lookup<'a>(name: &str, vars: &'a BTreeMap<String, String>) -> Option<&'a String> {
    vars.get(name).or_else(|| {
        name.strip_prefix(PROCESS_ENV_PREFIX)
            .and_then(|stripped| vars.get(stripped))
    })
}

pub fn has_unreplaced_variables(s: &str) -> bool {
    s.contains(PLACEHOLDER_OPEN)
}

/// Substitutes `vars` into `input` and rejects the result if any `{{` is left.
pub fn resolve(
    input: &str,
    vars: &BTreeMap<String, String>,
    field: TemplateField,
) -> Result<String, UnresolvedTemplate> {
    let value = replace_variables(input, vars);
    if has_unreplaced_variables(&value) {
        return Err(UnresolvedTemplate { field, value });
    }
    Ok(value)
}
