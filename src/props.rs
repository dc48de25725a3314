use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property values as stored on a component instance.
///
/// Built-in definitions seed strings, numbers, booleans, lists (gallery
/// images, pricing features) and maps (team social links); custom component
/// props are flat scalars. Untagged so the serialized form matches the
/// plain JSON the save payload carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropValue>),
    Map(BTreeMap<String, PropValue>),
}

/// Property mapping of a component instance, keyed by prop key.
///
/// BTreeMap keeps serialization deterministic, which the auto-save
/// change fingerprint relies on.
pub type PropMap = BTreeMap<String, PropValue>;

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, PropValue>> {
        match self {
            PropValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Stringify for template substitution and rendering.
    ///
    /// Integral numbers render without a trailing `.0`, lists join their
    /// elements with a comma, maps fall back to their JSON form.
    pub fn to_display_string(&self) -> String {
        match self {
            PropValue::Text(s) => s.clone(),
            PropValue::Number(n) => format_number(*n),
            PropValue::Bool(b) => b.to_string(),
            PropValue::List(items) => items
                .iter()
                .map(|v| v.to_display_string())
                .collect::<Vec<_>>()
                .join(","),
            PropValue::Map(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(items: Vec<PropValue>) -> Self {
        PropValue::List(items)
    }
}

/// Widget kind for one entry of an editable-props schema.
///
/// A closed enum instead of a string kind plus an optional options field:
/// select options only exist on the select widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "lowercase")]
pub enum PropWidget {
    Text,
    Textarea,
    Number,
    Color,
    Select { options: Vec<String> },
    Boolean,
}

/// One entry of a definition's editable-props schema. Order matters: the
/// property panel renders fields in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropField {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub widget: PropWidget,
}

impl PropField {
    pub fn new(key: &str, label: &str, widget: PropWidget) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            widget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string_integral_number() {
        assert_eq!(PropValue::Number(5.0).to_display_string(), "5");
        assert_eq!(PropValue::Number(2.5).to_display_string(), "2.5");
    }

    #[test]
    fn test_display_string_list_joins_with_comma() {
        let list = PropValue::List(vec!["a".into(), "b".into()]);
        assert_eq!(list.to_display_string(), "a,b");
    }

    #[test]
    fn test_prop_value_untagged_roundtrip() {
        let json = r#"{"title":"Hi","rating":5,"featured":false}"#;
        let map: PropMap = serde_json::from_str(json).unwrap();
        assert_eq!(map["title"], PropValue::Text("Hi".to_string()));
        assert_eq!(map["rating"], PropValue::Number(5.0));
        assert_eq!(map["featured"], PropValue::Bool(false));
    }

    #[test]
    fn test_prop_field_serde_shape() {
        let field = PropField::new(
            "size",
            "Size",
            PropWidget::Select {
                options: vec!["small".to_string(), "large".to_string()],
            },
        );
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["key"], "size");
        assert_eq!(json["widget"], "select");
        assert_eq!(json["options"][0], "small");
    }
}
