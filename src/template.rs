//! Named placeholder substitution for prompt and greeting templates.
//!
//! Templates use `{name}` placeholders. `{{` and `}}` render as literal braces.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Template errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing value for placeholder: {0}")]
    MissingKey(String),
    #[error("Malformed placeholder at byte {0}")]
    MalformedPlaceholder(usize),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex is valid")
});

/// Fill `template` with the given `(name, value)` bindings.
///
/// Every placeholder must have a binding. Bindings that the template never
/// references are ignored.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut missing: Option<String> = None;

    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let whole = &caps[0];
        match caps.get(1) {
            None if whole == "{{" => "{".to_string(),
            None => "}".to_string(),
            Some(name) => match vars.iter().find(|(k, _)| *k == name.as_str()) {
                Some((_, value)) => (*value).to_string(),
                None => {
                    missing.get_or_insert_with(|| name.as_str().to_string());
                    String::new()
                }
            },
        }
    });

    if let Some(key) = missing {
        return Err(TemplateError::MissingKey(key));
    }

    if let Some(pos) = stray_brace(template) {
        return Err(TemplateError::MalformedPlaceholder(pos));
    }

    Ok(rendered.into_owned())
}

/// Byte offset of the first brace in `template` that is not part of a token.
fn stray_brace(template: &str) -> Option<usize> {
    let mut last = 0;
    for token in PLACEHOLDER.find_iter(template) {
        if let Some(pos) = template[last..token.start()].find(['{', '}']) {
            return Some(last + pos);
        }
        last = token.end();
    }
    template[last..].find(['{', '}']).map(|pos| last + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template() {
        let out = fill_template(
            "Hello! I'm {voiceName} from {company}.",
            &[("voiceName", "Thalia"), ("company", "Deepgram")],
        )
        .unwrap();
        assert_eq!(out, "Hello! I'm Thalia from Deepgram.");
    }

    #[test]
    fn test_repeated_placeholder_and_unused_binding() {
        let out = fill_template("{a}-{a}", &[("a", "x"), ("b", "unused")]).unwrap();
        assert_eq!(out, "x-x");
    }

    #[test]
    fn test_escaped_braces() {
        let out = fill_template("{{\"key\": \"{v}\"}}", &[("v", "1")]).unwrap();
        assert_eq!(out, "{\"key\": \"1\"}");
    }

    #[test]
    fn test_missing_key() {
        let err = fill_template("I can help with {topic}.", &[]).unwrap_err();
        assert!(matches!(err, TemplateError::MissingKey(ref k) if k == "topic"));
    }

    #[test]
    fn test_malformed_placeholder() {
        let err = fill_template("broken {topic", &[("topic", "x")]).unwrap_err();
        assert!(matches!(err, TemplateError::MalformedPlaceholder(7)));

        let err = fill_template("stray } brace", &[]).unwrap_err();
        assert!(matches!(err, TemplateError::MalformedPlaceholder(6)));
    }

    #[test]
    fn test_malformed_offset_is_into_template() {
        let err = fill_template("{{ab} x", &[]).unwrap_err();
        assert!(matches!(err, TemplateError::MalformedPlaceholder(4)));

        let err = fill_template("{a} and {b", &[("a", "1"), ("b", "2")]).unwrap_err();
        assert!(matches!(err, TemplateError::MalformedPlaceholder(8)));
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let out = fill_template("{a}", &[("a", "{b}")]).unwrap();
        assert_eq!(out, "{b}");
    }
}
