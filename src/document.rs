use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::props::PropMap;

/// A placed, independently configurable occurrence of a component
/// definition within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Unique within a document: type tag prefix + UUID suffix.
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub props: PropMap,
    /// Reserved; no current component type nests children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentInstance>,
}

impl ComponentInstance {
    /// Create a fresh instance of a definition, seeded with a clone of its
    /// default props.
    pub fn new(type_tag: &str, default_props: &PropMap) -> Self {
        Self {
            id: format!("{}-{}", type_tag, Uuid::new_v4().simple()),
            type_tag: type_tag.to_string(),
            props: default_props.clone(),
            children: Vec::new(),
        }
    }
}

/// An ordered sequence of component instances. Order is render order and
/// z-order; reordering is an explicit operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    components: Vec<ComponentInstance>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: Vec<ComponentInstance>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[ComponentInstance] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ComponentInstance> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ComponentInstance> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    pub fn push(&mut self, instance: ComponentInstance) {
        self.components.push(instance);
    }

    pub fn remove(&mut self, id: &str) -> Option<ComponentInstance> {
        let index = self.position(id)?;
        Some(self.components.remove(index))
    }

    /// Remove every instance of a type; returns the removed instances.
    pub fn remove_all_of_type(&mut self, type_tag: &str) -> Vec<ComponentInstance> {
        let mut removed = Vec::new();
        self.components.retain(|c| {
            if c.type_tag == type_tag {
                removed.push(c.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.components.swap(a, b);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentInstance> {
        self.components.iter()
    }
}
