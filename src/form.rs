use tracing::warn;

use crate::document::ComponentInstance;
use crate::props::{PropField, PropValue, PropWidget};
use crate::registry::Definition;
use crate::session::EditorSession;

/// A widget-typed form control carrying the current value with the
/// documented fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum FormControl {
    TextInput { value: String },
    TextArea { value: String },
    NumberInput { value: i64 },
    ColorInput { value: String },
    SelectInput { options: Vec<String>, value: String },
    Toggle { value: bool },
}

/// One rendered form row: schema entry plus its resolved control state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub control: FormControl,
}

/// Generate the edit form for an instance from its definition's schema:
/// one field per schema entry, in schema order.
pub fn build_form(instance: &ComponentInstance, definition: &Definition<'_>) -> Vec<FormField> {
    definition
        .editable_props()
        .iter()
        .map(|field| FormField {
            key: field.key.clone(),
            label: field.label.clone(),
            control: resolve_control(field, instance.props.get(&field.key)),
        })
        .collect()
}

fn resolve_control(field: &PropField, current: Option<&PropValue>) -> FormControl {
    let text = || {
        current
            .map(|v| v.to_display_string())
            .unwrap_or_default()
    };
    match &field.widget {
        PropWidget::Text => FormControl::TextInput { value: text() },
        PropWidget::Textarea => FormControl::TextArea { value: text() },
        PropWidget::Number => FormControl::NumberInput {
            value: current.map(|v| coerce_integer(&v.to_display_string())).unwrap_or(0),
        },
        PropWidget::Color => FormControl::ColorInput {
            value: current
                .map(|v| v.to_display_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "#000000".to_string()),
        },
        PropWidget::Select { options } => {
            // Fall back to the first option when the current value is
            // absent or no longer one of the options.
            let value = current
                .map(|v| v.to_display_string())
                .filter(|v| options.contains(v))
                .or_else(|| options.first().cloned())
                .unwrap_or_default();
            FormControl::SelectInput {
                options: options.clone(),
                value,
            }
        }
        PropWidget::Boolean => FormControl::Toggle {
            value: current.and_then(|v| v.as_bool()).unwrap_or(false),
        },
    }
}

/// Raw input from a form widget, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Toggle(bool),
}

/// Coerce a raw input by the widget kind it came from. Number inputs use
/// integer coercion (leading digits, 0 on garbage); everything else
/// passes through as text or bool.
pub fn coerce_input(widget: &PropWidget, input: FieldInput) -> PropValue {
    match (widget, input) {
        (PropWidget::Number, FieldInput::Text(raw)) => {
            PropValue::Number(coerce_integer(&raw) as f64)
        }
        (PropWidget::Boolean, FieldInput::Toggle(b)) => PropValue::Bool(b),
        (PropWidget::Boolean, FieldInput::Text(raw)) => PropValue::Bool(raw == "true"),
        (_, FieldInput::Toggle(b)) => PropValue::Bool(b),
        (_, FieldInput::Text(raw)) => PropValue::Text(raw),
    }
}

/// Parse the leading integer of a string, ignoring a trailing unit
/// ("12px" -> 12); 0 when there are no leading digits.
fn coerce_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed),
    };
    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    leading.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// Apply one property edit to the selected instance: read-modify-write
/// merge over the current props, committed to history immediately.
///
/// The merge happens here, at the panel layer; the session-level update
/// is a full replacement.
pub fn apply_edit(session: &mut EditorSession, id: &str, key: &str, input: FieldInput) -> bool {
    let widget = session
        .registry()
        .definition(
            match session.document().get(id) {
                Some(instance) => instance.type_tag.as_str(),
                None => {
                    warn!(id, "edit ignored: no such instance");
                    return false;
                }
            },
        )
        .and_then(|def| {
            def.editable_props()
                .iter()
                .find(|f| f.key == key)
                .map(|f| f.widget.clone())
        });

    let widget = match widget {
        Some(widget) => widget,
        None => {
            warn!(id, key, "edit ignored: key not in edit schema");
            return false;
        }
    };

    let value = coerce_input(&widget, input);
    let mut props = match session.document().get(id) {
        Some(instance) => instance.props.clone(),
        None => return false,
    };
    props.insert(key.to_string(), value);
    session.update_component_props(id, props)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(coerce_integer("12"), 12);
        assert_eq!(coerce_integer("12px"), 12);
        assert_eq!(coerce_integer("-4rem"), -4);
        assert_eq!(coerce_integer("abc"), 0);
        assert_eq!(coerce_integer(""), 0);
    }

    #[test]
    fn test_number_input_coerces() {
        let value = coerce_input(&PropWidget::Number, FieldInput::Text("8px".to_string()));
        assert_eq!(value, PropValue::Number(8.0));
    }
}
