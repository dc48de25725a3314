use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::props::PropMap;

/// Replace every `{{key}}` occurrence with the escaped, stringified prop
/// value. Placeholders whose key is absent from the props stay literal;
/// that keeps authoring mistakes visible instead of silently erasing them.
pub fn substitute(template: &str, props: &PropMap) -> String {
    let mut html = template.to_string();
    for (key, value) in props {
        let placeholder = format!("{{{{{key}}}}}");
        if html.contains(&placeholder) {
            html = html.replace(&placeholder, &escape_html(&value.to_display_string()));
        }
    }
    html
}

/// All `{{key}}` placeholder keys in a template, in lexical order.
pub fn placeholder_keys(template: &str) -> BTreeSet<String> {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").unwrap());
    regex
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Minimal HTML entity escaping for interpolated values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropValue;

    fn props(entries: &[(&str, &str)]) -> PropMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), PropValue::Text(v.to_string())))
            .collect()
    }

    #[test]
    fn test_substitute_basic() {
        let out = substitute("<p>{{x}}</p>", &props(&[("x", "hello")]));
        assert_eq!(out, "<p>hello</p>");
    }

    #[test]
    fn test_absent_key_stays_literal() {
        let out = substitute("<p>{{x}}</p>", &PropMap::new());
        assert_eq!(out, "<p>{{x}}</p>");
    }

    #[test]
    fn test_substitution_is_escaped() {
        let out = substitute(
            "<p>{{x}}</p>",
            &props(&[("x", "<script>alert(1)</script>")]),
        );
        assert_eq!(out, "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
    }

    #[test]
    fn test_repeated_placeholder() {
        let out = substitute("{{x}} and {{x}}", &props(&[("x", "a")]));
        assert_eq!(out, "a and a");
    }

    #[test]
    fn test_placeholder_keys() {
        let keys = placeholder_keys("<h3>{{title}}</h3><p>{{body}}</p>{{title}}");
        assert_eq!(
            keys.into_iter().collect::<Vec<_>>(),
            vec!["body".to_string(), "title".to_string()]
        );
    }
}
