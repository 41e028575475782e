use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure while substituting `{{ env.VAR }}` placeholders
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Variable is unset and the placeholder has no default
    #[error("environment variable not found: `{0}`")]
    MissingVar(String),
    /// Placeholder key is not of the form `env.NAME`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // 1: dotted key, 2: optional value inside default("...")
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder regex is valid")
    })
}

/// Expand `{{ env.VAR }}` and `{{ env.VAR | default("x") }}` in raw TOML text
///
/// Lines whose first non-blank character is `#` are copied untouched so a
/// commented-out secret never has to be present in the environment.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(line)?);
        }
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for caps in placeholder().captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        expanded.push_str(&line[cursor..whole.start()]);
        expanded.push_str(&resolve(&caps)?);
        cursor = whole.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}

fn resolve(caps: &Captures<'_>) -> Result<String, ExpandError> {
    let key = caps.get(1).map_or("", |m| m.as_str());
    let fallback = caps.get(2).map(|m| m.as_str());

    let var_name = match key.split_once('.') {
        Some(("env", name)) if !name.is_empty() && !name.contains('.') => name,
        _ => return Err(ExpandError::UnsupportedScope(key.to_owned())),
    };

    match (std::env::var(var_name), fallback) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(ExpandError::MissingVar(var_name.to_owned())),
    }
}
