//! Validation of values that end up verbatim in generated Go code.

use miette::SourceSpan;

use crate::{Config, Result, SourceContext};

/// Go keywords, which cannot be used as package or method names
/// Source: https://go.dev/ref/spec#Keywords
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

impl Config {
    /// Validate the config after parsing or after applying overrides.
    pub fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(package) = &self.output.package {
            check_identifier(ctx, package, "package name")?;
        }
        if let Some(method) = &self.output.real_name_method {
            check_identifier(ctx, method, "real name method")?;
        }
        if let Some(key) = &self.tags.key {
            if let Some(reason) = validate_tag_key(key) {
                let span = find_value_span(ctx.src(), key);
                return Err(ctx.invalid_tag_key_error(key, reason, span));
            }
        }
        Ok(())
    }
}

fn check_identifier(ctx: &SourceContext, name: &str, key: &str) -> Result<()> {
    match validate_identifier(name) {
        Some(reason) => Err(ctx.invalid_identifier_error(
            name,
            key,
            reason,
            find_value_span(ctx.src(), name),
        )),
        None => Ok(()),
    }
}

/// Check that a name is a valid Go identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if GO_KEYWORDS.contains(&name) {
        return Some("name is a Go keyword");
    }

    None
}

/// Check that a key can appear in a Go struct tag (`key:"value"`).
pub(crate) fn validate_tag_key(key: &str) -> Option<&'static str> {
    if key.is_empty() {
        return Some("tag key cannot be empty");
    }
    if key
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | ':' | '`'))
    {
        return Some("tag key cannot contain spaces, quotes, colons or backticks");
    }
    None
}

/// Find the span of a quoted string value in the TOML source
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .find_map(|quoted| src.find(quoted.as_str()))
        // +1 to skip the opening quote
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
