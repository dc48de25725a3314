use serde::{Deserialize, Serialize};

use crate::config::{Breakpoints, EditorConfig};
use crate::custom::{CustomComponent, CustomStore};
use crate::document::{ComponentInstance, Document};
use crate::props::PropMap;
use crate::registry::{BuiltinKind, Definition, Registry};
use crate::template::{escape_html, substitute};
use crate::validate::{is_safe_url, is_valid_color, sanitize_html};

/// Preview viewport sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
}

impl Viewport {
    pub fn label(&self) -> &'static str {
        match self {
            Viewport::Mobile => "Mobile",
            Viewport::Tablet => "Tablet",
            Viewport::Desktop => "Desktop",
        }
    }

    /// CSS width of the preview frame; desktop is unconstrained.
    pub fn css_width(&self, breakpoints: &Breakpoints) -> String {
        match self {
            Viewport::Mobile => format!("{}px", breakpoints.mobile),
            Viewport::Tablet => format!("{}px", breakpoints.tablet),
            Viewport::Desktop => "100%".to_string(),
        }
    }
}

/// Which rendering path is being produced.
///
/// Editor decorations (selection ring, move/delete affordances) appear
/// only in `Editor` mode; preview and export output is affordance-free.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderMode {
    Editor { selected: Option<String> },
    Preview { viewport: Viewport },
    Export,
}

/// Render the whole document in order.
pub fn render_page(
    document: &Document,
    custom: &CustomStore,
    mode: &RenderMode,
    config: &EditorConfig,
) -> String {
    let registry = Registry::new(custom);
    let total = document.len();
    let mut parts = Vec::with_capacity(total);

    for (index, instance) in document.iter().enumerate() {
        let body = render_instance(instance, &registry, config);
        match mode {
            RenderMode::Editor { selected } => {
                parts.push(wrap_with_chrome(
                    instance,
                    &body,
                    selected.as_deref() == Some(instance.id.as_str()),
                    index > 0,
                    index + 1 < total,
                ));
            }
            _ => parts.push(body),
        }
    }

    let html = parts.join("\n");
    match mode {
        RenderMode::Preview { viewport } => {
            let width = viewport.css_width(&config.breakpoints);
            format!(
                "<div class=\"pw-preview\" data-viewport=\"{}\" style=\"width:{};margin:0 auto\">\n{}\n</div>",
                viewport.label().to_ascii_lowercase(),
                width,
                html
            )
        }
        _ => html,
    }
}

/// Render one instance: custom template, built-in rule, or the
/// unknown-type placeholder (degraded display, never an error).
pub fn render_instance(
    instance: &ComponentInstance,
    registry: &Registry<'_>,
    config: &EditorConfig,
) -> String {
    match registry.definition(&instance.type_tag) {
        Some(Definition::Custom(component)) => {
            render_custom(component, &instance.props, config)
        }
        Some(Definition::Builtin(kind, _)) => render_builtin(kind, &instance.props),
        None => format!(
            "<div class=\"pw-unknown\">Component: {}</div>",
            escape_html(&instance.type_tag)
        ),
    }
}

/// Custom component path: literal `{{key}}` substitution with escaped
/// values; stylesheet emitted verbatim; script only behind the config
/// opt-in. With scripts disabled the template itself is sanitized too, so
/// inline handlers cannot smuggle execution back in.
fn render_custom(component: &CustomComponent, props: &PropMap, config: &EditorConfig) -> String {
    let markup = if config.allow_custom_scripts {
        substitute(&component.html, props)
    } else {
        substitute(&sanitize_html(&component.html), props)
    };

    let mut out = String::new();
    if !component.css.trim().is_empty() {
        out.push_str("<style>\n");
        out.push_str(&component.css);
        out.push_str("\n</style>\n");
    }
    out.push_str(&markup);
    if config.allow_custom_scripts && !component.js.trim().is_empty() {
        out.push_str("\n<script>\n");
        out.push_str(&component.js);
        out.push_str("\n</script>");
    }
    out
}

fn wrap_with_chrome(
    instance: &ComponentInstance,
    body: &str,
    selected: bool,
    can_move_up: bool,
    can_move_down: bool,
) -> String {
    let mut out = format!(
        "<div class=\"pw-component{}\" data-component-id=\"{}\" data-selected=\"{}\" data-can-move-up=\"{}\" data-can-move-down=\"{}\">",
        if selected { " pw-selected" } else { "" },
        escape_html(&instance.id),
        selected,
        can_move_up,
        can_move_down,
    );
    if selected {
        out.push_str(&format!(
            "<div class=\"pw-toolbar\">\
<button data-action=\"move-up\"{}>↑</button>\
<button data-action=\"move-down\"{}>↓</button>\
<button data-action=\"delete\">✕</button>\
</div>",
            if can_move_up { "" } else { " disabled" },
            if can_move_down { "" } else { " disabled" },
        ));
    }
    out.push_str(body);
    out.push_str("</div>");
    out
}

// --- prop accessors with the documented fallbacks ---
// Missing keys render as empty values, never as errors.

fn prop_text(props: &PropMap, key: &str) -> String {
    props
        .get(key)
        .map(|v| escape_html(&v.to_display_string()))
        .unwrap_or_default()
}

fn prop_url(props: &PropMap, key: &str) -> String {
    match props.get(key) {
        Some(value) => {
            let raw = value.to_display_string();
            if is_safe_url(&raw) {
                escape_html(&raw)
            } else {
                String::new()
            }
        }
        None => String::new(),
    }
}

fn prop_color(props: &PropMap, key: &str) -> Option<String> {
    let raw = props.get(key)?.to_display_string();
    if is_valid_color(&raw) {
        Some(raw)
    } else {
        None
    }
}

fn prop_usize(props: &PropMap, key: &str, default: usize) -> usize {
    props
        .get(key)
        .map(|v| v.to_display_string())
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn prop_bool(props: &PropMap, key: &str) -> bool {
    props.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

fn text_align(props: &PropMap) -> &'static str {
    match props
        .get("textAlign")
        .map(|v| v.to_display_string())
        .as_deref()
    {
        Some("left") => "left",
        Some("right") => "right",
        _ => "center",
    }
}

fn render_builtin(kind: BuiltinKind, props: &PropMap) -> String {
    match kind {
        BuiltinKind::Hero => format!(
            "<section class=\"pw-hero\" style=\"background-image:url('{}')\">\n\
<div class=\"pw-hero-overlay\"></div>\n\
<div class=\"pw-hero-body\" style=\"text-align:{}\">\n\
<h1>{}</h1>\n<p>{}</p>\n\
<a class=\"pw-btn pw-btn-primary\" href=\"{}\">{}</a>\n\
</div>\n</section>",
            prop_url(props, "backgroundImage"),
            text_align(props),
            prop_text(props, "title"),
            prop_text(props, "subtitle"),
            prop_url(props, "buttonLink"),
            prop_text(props, "buttonText"),
        ),

        BuiltinKind::Text => {
            let color = prop_color(props, "color")
                .map(|c| format!("color:{};", c))
                .unwrap_or_default();
            let size = match props
                .get("fontSize")
                .map(|v| v.to_display_string())
                .as_deref()
            {
                Some(s @ ("sm" | "base" | "lg" | "xl" | "2xl" | "3xl")) => s.to_string(),
                _ => "base".to_string(),
            };
            format!(
                "<div class=\"pw-text pw-text-{}\" style=\"{}text-align:{}\"><p>{}</p></div>",
                size,
                color,
                text_align(props),
                prop_text(props, "content"),
            )
        }

        BuiltinKind::Image => format!(
            "<figure class=\"pw-image\">\
<img src=\"{}\" alt=\"{}\" style=\"width:{};height:{};border-radius:{}px\">\
</figure>",
            prop_url(props, "src"),
            prop_text(props, "alt"),
            prop_text(props, "width"),
            prop_text(props, "height"),
            prop_usize(props, "borderRadius", 0),
        ),

        BuiltinKind::Button => {
            let variant = match props
                .get("variant")
                .map(|v| v.to_display_string())
                .as_deref()
            {
                Some("secondary") => "secondary",
                Some("outline") => "outline",
                _ => "primary",
            };
            let size = match props.get("size").map(|v| v.to_display_string()).as_deref() {
                Some("small") => "small",
                Some("large") => "large",
                _ => "medium",
            };
            format!(
                "<a class=\"pw-btn pw-btn-{} pw-btn-{}\" href=\"{}\">{}</a>",
                variant,
                size,
                prop_url(props, "link"),
                prop_text(props, "text"),
            )
        }

        BuiltinKind::Columns => {
            let count = prop_usize(props, "columnCount", 2).clamp(1, 4);
            let cells: String = (1..=count)
                .map(|i| {
                    format!(
                        "<div class=\"pw-column\"><p>Column {} content</p></div>",
                        i
                    )
                })
                .collect();
            format!(
                "<div class=\"pw-columns pw-gap-{}\" style=\"display:grid;grid-template-columns:repeat({},1fr)\">{}</div>",
                prop_usize(props, "gap", 4),
                count,
                cells,
            )
        }

        BuiltinKind::Spacer => format!(
            "<div class=\"pw-spacer\" style=\"height:{}rem\"></div>",
            prop_usize(props, "height", 4),
        ),

        BuiltinKind::Video => format!(
            "<div class=\"pw-video\">\
<iframe src=\"{}\" width=\"{}\" height=\"{}\"{} allowfullscreen></iframe>\
</div>",
            prop_url(props, "src"),
            prop_text(props, "width"),
            prop_text(props, "height"),
            if prop_bool(props, "autoplay") {
                " allow=\"autoplay\""
            } else {
                ""
            },
        ),

        BuiltinKind::Gallery => {
            let radius = prop_usize(props, "borderRadius", 0);
            let images: String = props
                .get("images")
                .and_then(|v| v.as_list())
                .map(|items| {
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, src)| {
                            let raw = src.to_display_string();
                            let url = if is_safe_url(&raw) {
                                escape_html(&raw)
                            } else {
                                String::new()
                            };
                            format!(
                                "<img src=\"{}\" alt=\"Gallery image {}\" style=\"border-radius:{}px\">",
                                url,
                                i + 1,
                                radius,
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            format!(
                "<div class=\"pw-gallery pw-gap-{}\" style=\"display:grid;grid-template-columns:repeat({},1fr)\">{}</div>",
                prop_usize(props, "gap", 4),
                prop_usize(props, "columns", 3).clamp(1, 5),
                images,
            )
        }

        BuiltinKind::Testimonial => {
            let rating = prop_usize(props, "rating", 5).min(5);
            format!(
                "<div class=\"pw-testimonial\">\n\
<div class=\"pw-stars\">{}</div>\n\
<blockquote>\u{201c}{}\u{201d}</blockquote>\n\
<div class=\"pw-attribution\">\
<img src=\"{}\" alt=\"{}\">\
<div><div class=\"pw-author\">{}</div><div class=\"pw-position\">{}</div></div>\
</div>\n</div>",
                "★".repeat(rating),
                prop_text(props, "quote"),
                prop_url(props, "avatar"),
                prop_text(props, "author"),
                prop_text(props, "author"),
                prop_text(props, "position"),
            )
        }

        BuiltinKind::Pricing => {
            let features: String = props
                .get("features")
                .and_then(|v| v.as_list())
                .map(|items| {
                    items
                        .iter()
                        .map(|f| {
                            format!(
                                "<li><span class=\"pw-check\">✓</span>{}</li>",
                                escape_html(&f.to_display_string())
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            let featured = prop_bool(props, "featured");
            format!(
                "<div class=\"pw-pricing{}\">{}\n\
<h3>{}</h3>\n\
<div class=\"pw-price\">{}<span class=\"pw-period\">{}</span></div>\n\
<ul>{}</ul>\n\
<a class=\"pw-btn pw-btn-{}\" href=\"{}\">{}</a>\n</div>",
                if featured { " pw-featured" } else { "" },
                if featured {
                    "<span class=\"pw-badge\">Most Popular</span>"
                } else {
                    ""
                },
                prop_text(props, "title"),
                prop_text(props, "price"),
                prop_text(props, "period"),
                features,
                if featured { "primary" } else { "secondary" },
                prop_url(props, "buttonLink"),
                prop_text(props, "buttonText"),
            )
        }

        BuiltinKind::Form => {
            let fields: String = props
                .get("fields")
                .and_then(|v| v.as_list())
                .map(|items| {
                    items
                        .iter()
                        .map(|f| form_field(&f.to_display_string()))
                        .collect()
                })
                .unwrap_or_default();
            format!(
                "<div class=\"pw-form\">\n\
<h2>{}</h2>\n<p>{}</p>\n\
<form>{}<button type=\"submit\" class=\"pw-btn pw-btn-primary\">{}</button></form>\n\
</div>",
                prop_text(props, "title"),
                prop_text(props, "subtitle"),
                fields,
                prop_text(props, "buttonText"),
            )
        }

        BuiltinKind::Stats => {
            let stats: String = props
                .get("stats")
                .and_then(|v| v.as_list())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_map())
                        .map(|stat| {
                            let number = stat
                                .get("number")
                                .map(|v| escape_html(&v.to_display_string()))
                                .unwrap_or_default();
                            let label = stat
                                .get("label")
                                .map(|v| escape_html(&v.to_display_string()))
                                .unwrap_or_default();
                            format!(
                                "<div class=\"pw-stat\"><div class=\"pw-stat-number\">{}</div><div class=\"pw-stat-label\">{}</div></div>",
                                number, label,
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            format!("<div class=\"pw-stats\">{}</div>", stats)
        }

        BuiltinKind::Cta => {
            let background = prop_color(props, "backgroundColor")
                .map(|c| format!(" style=\"background-color:{}\"", c))
                .unwrap_or_default();
            format!(
                "<div class=\"pw-cta\"{}>\n\
<h2>{}</h2>\n<p>{}</p>\n\
<div class=\"pw-cta-actions\">\
<a class=\"pw-btn pw-btn-primary\" href=\"{}\">{}</a>\
<a class=\"pw-btn pw-btn-outline\" href=\"{}\">{}</a>\
</div>\n</div>",
                background,
                prop_text(props, "title"),
                prop_text(props, "subtitle"),
                prop_url(props, "primaryButtonLink"),
                prop_text(props, "primaryButtonText"),
                prop_url(props, "secondaryButtonLink"),
                prop_text(props, "secondaryButtonText"),
            )
        }

        BuiltinKind::Accordion => {
            let items: String = props
                .get("items")
                .and_then(|v| v.as_list())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_map())
                        .map(|item| {
                            let question = item
                                .get("question")
                                .map(|v| escape_html(&v.to_display_string()))
                                .unwrap_or_default();
                            let answer = item
                                .get("answer")
                                .map(|v| escape_html(&v.to_display_string()))
                                .unwrap_or_default();
                            format!(
                                "<details class=\"pw-accordion-item\"><summary>{}</summary><p>{}</p></details>",
                                question, answer,
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            format!(
                "<div class=\"pw-accordion\">\n<h2>{}</h2>\n{}\n</div>",
                prop_text(props, "title"),
                items,
            )
        }

        BuiltinKind::Team => {
            let social: String = props
                .get("social")
                .and_then(|v| v.as_map())
                .map(|links| {
                    links
                        .iter()
                        .map(|(network, link)| {
                            format!(
                                "<a class=\"pw-social pw-social-{}\" href=\"{}\">{}</a>",
                                escape_html(network),
                                {
                                    let raw = link.to_display_string();
                                    if is_safe_url(&raw) {
                                        escape_html(&raw)
                                    } else {
                                        String::new()
                                    }
                                },
                                escape_html(network),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            format!(
                "<div class=\"pw-team\">\n\
<img src=\"{}\" alt=\"{}\">\n\
<h3>{}</h3>\n<p class=\"pw-position\">{}</p>\n<p class=\"pw-bio\">{}</p>\n\
<div class=\"pw-socials\">{}</div>\n</div>",
                prop_url(props, "image"),
                prop_text(props, "name"),
                prop_text(props, "name"),
                prop_text(props, "position"),
                prop_text(props, "bio"),
                social,
            )
        }
    }
}

fn form_field(name: &str) -> String {
    let label = {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    };
    let name = escape_html(name);
    match name.as_str() {
        "email" => format!(
            "<label>{}<input type=\"email\" name=\"{}\" placeholder=\"your@email.com\"></label>",
            escape_html(&label),
            name,
        ),
        "message" => format!(
            "<label>{}<textarea name=\"{}\" rows=\"4\"></textarea></label>",
            escape_html(&label),
            name,
        ),
        _ => format!(
            "<label>{}<input type=\"text\" name=\"{}\"></label>",
            escape_html(&label),
            name,
        ),
    }
}
