use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{BuilderError, BuilderResult};
use crate::props::{PropField, PropMap, PropValue, PropWidget};
use crate::registry::BuiltinKind;
use crate::template;

/// A user-authored component definition: raw markup/style/script templates
/// plus the same editable-props schema shape the built-ins use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomComponent {
    /// Synthetic, registry-wide unique tag (slugified name + UUID suffix).
    #[serde(rename = "type")]
    pub type_tag: String,
    pub name: String,
    pub icon: String,
    pub html: String,
    pub css: String,
    pub js: String,
    pub editable_props: Vec<PropField>,
    pub default_props: PropMap,
    pub created_at: DateTime<Utc>,
}

/// Creation/edit input for a custom component, before it enters the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomComponentSpec {
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub js: String,
    #[serde(default)]
    pub editable_props: Vec<PropField>,
}

fn default_icon() -> String {
    "Box".to_string()
}

impl CustomComponentSpec {
    /// Reject malformed specs with a user-facing message; a rejected spec
    /// never enters the store.
    pub fn validate(&self) -> BuilderResult<()> {
        validate_parts(&self.name, &self.html, &self.editable_props)
    }
}

impl CustomComponent {
    /// Same structural checks the creation path applies, for definitions
    /// arriving from an imported envelope rather than the creator dialog.
    pub fn validate(&self) -> BuilderResult<()> {
        if self.type_tag.trim().is_empty() {
            return Err(BuilderError::InvalidCustomComponent {
                reason: "component type tag must not be empty".to_string(),
            });
        }
        validate_parts(&self.name, &self.html, &self.editable_props)
    }
}

fn validate_parts(name: &str, html: &str, editable_props: &[PropField]) -> BuilderResult<()> {
    if name.trim().is_empty() {
        return Err(BuilderError::InvalidCustomComponent {
            reason: "component name must not be empty".to_string(),
        });
    }
    if html.trim().is_empty() {
        return Err(BuilderError::InvalidCustomComponent {
            reason: "component markup must not be empty".to_string(),
        });
    }
    let mut seen = std::collections::HashSet::new();
    for field in editable_props {
        if field.key.trim().is_empty() {
            return Err(BuilderError::InvalidCustomComponent {
                reason: "editable prop keys must not be empty".to_string(),
            });
        }
        if !seen.insert(field.key.as_str()) {
            return Err(BuilderError::DuplicatePropKey {
                key: field.key.clone(),
            });
        }
    }
    Ok(())
}

/// Derive the initial property set from the edit schema, the same way the
/// creator dialog seeds it: boolean -> false, number -> 0, color ->
/// #000000, everything else -> empty string.
pub fn derive_default_props(fields: &[PropField]) -> PropMap {
    fields
        .iter()
        .map(|field| {
            let value = match field.widget {
                PropWidget::Boolean => PropValue::Bool(false),
                PropWidget::Number => PropValue::Number(0.0),
                PropWidget::Color => PropValue::Text("#000000".to_string()),
                _ => PropValue::Text(String::new()),
            };
            (field.key.clone(), value)
        })
        .collect()
}

fn slugify(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        "component".to_string()
    } else {
        slug
    }
}

fn synth_type_tag(name: &str) -> String {
    // UUID suffix guarantees registry-wide uniqueness; the slug prefix
    // keeps saved documents readable.
    format!("{}-{}", slugify(name), Uuid::new_v4().simple())
}

/// In-memory store of user-authored components, newest first. Not
/// persisted across sessions except through the save payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomStore {
    components: Vec<CustomComponent>,
}

impl CustomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new definition; returns the synthesized tag.
    pub fn insert(&mut self, spec: CustomComponentSpec, now: DateTime<Utc>) -> BuilderResult<String> {
        spec.validate()?;
        warn_on_schema_drift(&spec);

        let type_tag = synth_type_tag(&spec.name);
        debug_assert!(BuiltinKind::parse(&type_tag).is_none());

        let component = CustomComponent {
            type_tag: type_tag.clone(),
            name: spec.name,
            icon: spec.icon,
            html: spec.html,
            css: spec.css,
            js: spec.js,
            default_props: derive_default_props(&spec.editable_props),
            editable_props: spec.editable_props,
            created_at: now,
        };
        self.components.insert(0, component);
        Ok(type_tag)
    }

    /// Replace an existing definition in place, keeping its tag and
    /// creation time. Existing instances keep their current props.
    pub fn update(&mut self, type_tag: &str, spec: CustomComponentSpec) -> BuilderResult<()> {
        spec.validate()?;
        warn_on_schema_drift(&spec);

        let component = self
            .components
            .iter_mut()
            .find(|c| c.type_tag == type_tag)
            .ok_or_else(|| BuilderError::UnknownComponentType {
                type_tag: type_tag.to_string(),
            })?;

        component.name = spec.name;
        component.icon = spec.icon;
        component.html = spec.html;
        component.css = spec.css;
        component.js = spec.js;
        component.default_props = derive_default_props(&spec.editable_props);
        component.editable_props = spec.editable_props;
        Ok(())
    }

    pub fn remove(&mut self, type_tag: &str) -> Option<CustomComponent> {
        let index = self.components.iter().position(|c| c.type_tag == type_tag)?;
        Some(self.components.remove(index))
    }

    pub fn get(&self, type_tag: &str) -> Option<&CustomComponent> {
        self.components.iter().find(|c| c.type_tag == type_tag)
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.get(type_tag).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomComponent> {
        self.components.iter()
    }

    pub fn components(&self) -> &[CustomComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn from_components(components: Vec<CustomComponent>) -> Self {
        Self { components }
    }
}

/// The schema keys and the `{{key}}` placeholders in the markup are meant
/// to line up. Drift is legal (absent keys render as literal placeholders)
/// but almost always an authoring mistake, so it gets logged.
fn warn_on_schema_drift(spec: &CustomComponentSpec) {
    let placeholders = template::placeholder_keys(&spec.html);
    for field in &spec.editable_props {
        if !placeholders.contains(field.key.as_str()) {
            warn!(
                component = %spec.name,
                key = %field.key,
                "editable prop has no matching placeholder in markup"
            );
        }
    }
    for key in &placeholders {
        if !spec.editable_props.iter().any(|f| &f.key == key) {
            warn!(
                component = %spec.name,
                key = %key,
                "markup placeholder has no matching editable prop"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> CustomComponentSpec {
        CustomComponentSpec {
            name: name.to_string(),
            icon: "Box".to_string(),
            html: "<p>{{text}}</p>".to_string(),
            css: String::new(),
            js: String::new(),
            editable_props: vec![PropField::new("text", "Text", PropWidget::Text)],
        }
    }

    #[test]
    fn test_insert_prepends_and_synthesizes_unique_tags() {
        let mut store = CustomStore::new();
        let first = store.insert(spec("Promo Card"), Utc::now()).unwrap();
        let second = store.insert(spec("Promo Card"), Utc::now()).unwrap();
        assert_ne!(first, second);
        assert!(first.starts_with("promo-card-"));
        // Newest first.
        assert_eq!(store.components()[0].type_tag, second);
    }

    #[test]
    fn test_rejects_empty_name_and_markup() {
        let mut store = CustomStore::new();
        let mut bad = spec("  ");
        assert!(store.insert(bad.clone(), Utc::now()).is_err());
        bad = spec("Ok");
        bad.html = "   ".to_string();
        assert!(store.insert(bad, Utc::now()).is_err());
    }

    #[test]
    fn test_rejects_duplicate_prop_keys() {
        let mut bad = spec("Card");
        bad.editable_props.push(PropField::new("text", "Again", PropWidget::Text));
        assert!(matches!(
            bad.validate(),
            Err(BuilderError::DuplicatePropKey { .. })
        ));
    }

    #[test]
    fn test_default_props_follow_widget_kinds() {
        let fields = vec![
            PropField::new("title", "Title", PropWidget::Text),
            PropField::new("count", "Count", PropWidget::Number),
            PropField::new("tint", "Tint", PropWidget::Color),
            PropField::new("on", "On", PropWidget::Boolean),
        ];
        let defaults = derive_default_props(&fields);
        assert_eq!(defaults["title"], PropValue::Text(String::new()));
        assert_eq!(defaults["count"], PropValue::Number(0.0));
        assert_eq!(defaults["tint"], PropValue::Text("#000000".to_string()));
        assert_eq!(defaults["on"], PropValue::Bool(false));
    }
}
