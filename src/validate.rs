use regex::Regex;
use std::sync::OnceLock;

use crate::document::ComponentInstance;
use crate::error::{BuilderError, BuilderResult};

/// Accepts #rgb / #rrggbb hex, rgb() and rgba() color values.
pub fn is_valid_color(value: &str) -> bool {
    static HEX: OnceLock<Regex> = OnceLock::new();
    static RGB: OnceLock<Regex> = OnceLock::new();
    static RGBA: OnceLock<Regex> = OnceLock::new();
    let hex = HEX.get_or_init(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap());
    let rgb = RGB.get_or_init(|| Regex::new(r"^rgb\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)$").unwrap());
    let rgba = RGBA
        .get_or_init(|| Regex::new(r"^rgba\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[\d.]+\s*\)$").unwrap());
    hex.is_match(value) || rgb.is_match(value) || rgba.is_match(value)
}

/// URL scheme whitelist for rendered src/href positions. Fragment-only and
/// relative links are allowed; anything with another scheme is not.
pub fn is_safe_url(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:") {
        return true;
    }
    // Relative paths and in-page anchors carry no scheme at all.
    !lower.contains(':')
}

/// Strip script blocks, javascript: URLs and inline event handlers from
/// user-authored markup. Not a full sanitizer; it removes the injection
/// vectors the renderer would otherwise pass through verbatim.
pub fn sanitize_html(html: &str) -> String {
    static SCRIPT_BLOCK: OnceLock<Regex> = OnceLock::new();
    static JS_URL: OnceLock<Regex> = OnceLock::new();
    static EVENT_ATTR: OnceLock<Regex> = OnceLock::new();
    let script_block =
        SCRIPT_BLOCK.get_or_init(|| Regex::new(r"(?is)<script\b.*?</script>").unwrap());
    let js_url = JS_URL.get_or_init(|| Regex::new(r"(?i)javascript:").unwrap());
    let event_attr = EVENT_ATTR.get_or_init(|| Regex::new(r"(?i)\son\w+\s*=").unwrap());

    let html = script_block.replace_all(html, "");
    let html = js_url.replace_all(&html, "");
    event_attr.replace_all(&html, " ").to_string()
}

/// Structural sanity check for instances arriving from a save payload.
pub fn validate_instance(instance: &ComponentInstance) -> BuilderResult<()> {
    if instance.id.trim().is_empty() {
        return Err(BuilderError::InvalidPage(
            "component instance has an empty id".to_string(),
        ));
    }
    if instance.type_tag.trim().is_empty() {
        return Err(BuilderError::InvalidPage(format!(
            "component instance '{}' has an empty type",
            instance.id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_formats() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#3b82f6"));
        assert!(is_valid_color("rgb(59, 130, 246)"));
        assert!(is_valid_color("rgba(59, 130, 246, 0.5)"));
        assert!(!is_valid_color("blue"));
        assert!(!is_valid_color("#12345"));
    }

    #[test]
    fn test_url_whitelist() {
        assert!(is_safe_url("https://example.com/a.png"));
        assert!(is_safe_url("http://example.com"));
        assert!(is_safe_url("data:image/png;base64,AAAA"));
        assert!(is_safe_url("#pricing"));
        assert!(is_safe_url("/assets/logo.svg"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox"));
    }

    #[test]
    fn test_sanitize_strips_vectors() {
        let dirty = r#"<div onclick="steal()"><script>evil()</script><a href="javascript:x">go</a></div>"#;
        let clean = sanitize_html(dirty);
        assert!(!clean.contains("<script"));
        assert!(!clean.to_lowercase().contains("javascript:"));
        assert!(!clean.contains("onclick="));
    }
}
