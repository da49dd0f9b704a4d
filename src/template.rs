//! HTML template rendering for packaged pages.
//!
//! Substitutes `{{ NAME }}` placeholders with values from an explicit
//! variable map. Rendering is pure: no filesystem access, same input and
//! map always yield the same text. An unresolved name fails the packaging
//! step instead of silently emitting empty content.

use anyhow::{bail, Result};
use std::collections::{BTreeSet, HashMap};

/// A parsed piece of a template: literal text or a variable reference.
enum Segment<'a> {
    Text(&'a str),
    Var(&'a str),
}

/// Split template content into literal and placeholder segments.
///
/// Placeholder names follow environment-variable grammar (ASCII
/// alphanumerics and underscore); whitespace inside the braces is allowed.
fn scan(content: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            bail!("Unterminated '{{{{' placeholder in template");
        };
        let name = after[..end].trim();
        if name.is_empty()
            || !name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            bail!("Invalid template placeholder '{{{{{}}}}}'", &after[..end]);
        }
        segments.push(Segment::Var(name));
        rest = &after[end + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    Ok(segments)
}

/// Render template content against a variable map.
///
/// Every `{{ NAME }}` is replaced by `vars["NAME"]`. A name absent from
/// the map is an error, not an empty substitution.
pub fn render(content: &str, vars: &HashMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(content.len());
    for segment in scan(content)? {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Var(name) => match vars.get(name) {
                Some(value) => out.push_str(value),
                None => bail!("Template references undefined variable '{}'", name),
            },
        }
    }
    Ok(out)
}

/// Collect the set of variable names a template references.
///
/// Used by preflight to report unresolvable placeholders before packaging.
pub fn placeholders(content: &str) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for segment in scan(content)? {
        if let Segment::Var(name) = segment {
            names.insert(name.to_string());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let out = render(
            "<title>{{ EXT_NAME }}</title><p>{{GREETING}}</p>",
            &vars(&[("EXT_NAME", "Pomodoro"), ("GREETING", "hi")]),
        )
        .unwrap();
        assert_eq!(out, "<title>Pomodoro</title><p>hi</p>");
    }

    #[test]
    fn test_render_passes_plain_text_through() {
        let html = "<html><body>no placeholders here</body></html>";
        assert_eq!(render(html, &vars(&[])).unwrap(), html);
    }

    #[test]
    fn test_render_idempotent_on_resolved_text() {
        let once = render("a {{ X }} b", &vars(&[("X", "value")])).unwrap();
        let twice = render(&once, &vars(&[("X", "value")])).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_render_fails_on_undefined_variable() {
        let err = render("{{ MISSING }}", &vars(&[])).unwrap_err();
        assert!(err.to_string().contains("MISSING"));
    }

    #[test]
    fn test_render_fails_on_unterminated_placeholder() {
        assert!(render("before {{ OOPS", &vars(&[("OOPS", "x")])).is_err());
    }

    #[test]
    fn test_render_rejects_non_identifier_names() {
        assert!(render("{{ a.b }}", &vars(&[])).is_err());
        assert!(render("{{ }}", &vars(&[])).is_err());
    }

    #[test]
    fn test_placeholders_collects_names() {
        let names = placeholders("{{A}} text {{ B }} {{A}}").unwrap();
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["A".to_string(), "B".to_string()]
        );
    }
}
