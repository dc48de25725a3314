use chrono::Utc;
use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::custom::{CustomComponentSpec, CustomStore};
use crate::document::{ComponentInstance, Document};
use crate::error::BuilderResult;
use crate::history::History;
use crate::props::PropMap;
use crate::registry::Registry;

/// Direction for the explicit reorder operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// One editing session over one page: the live document, the custom
/// component store, the selection and the undo history.
///
/// Everything is explicit state passed to the operations below; there are
/// no ambient singletons. Mutating document operations return `true` when
/// they applied and `false` for the documented no-op cases (unknown
/// target, boundary move, page cap); every ignored target is logged.
#[derive(Debug)]
pub struct EditorSession {
    document: Document,
    custom: CustomStore,
    history: History,
    selected: Option<String>,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        let history = History::new(config.max_undo_steps);
        Self {
            document: Document::new(),
            custom: CustomStore::new(),
            history,
            selected: None,
            config,
        }
    }

    /// Resume a session over previously saved state. The restored document
    /// becomes the new history baseline.
    pub fn resume(config: EditorConfig, document: Document, custom: CustomStore) -> Self {
        let mut session = Self::new(config);
        session.custom = custom;
        if !document.is_empty() {
            session.document = document;
            session.history.commit(&session.document);
        }
        session
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn custom_components(&self) -> &CustomStore {
        &self.custom
    }

    pub fn registry(&self) -> Registry<'_> {
        Registry::new(&self.custom)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_component(&self) -> Option<&ComponentInstance> {
        let id = self.selected.as_deref()?;
        self.document.get(id)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Append a new instance of `type_tag` seeded from its definition's
    /// default props, select it, and commit.
    pub fn add_component(&mut self, type_tag: &str) -> bool {
        if self.document.len() >= self.config.max_components_per_page {
            warn!(
                type_tag,
                limit = self.config.max_components_per_page,
                "add ignored: page component limit reached"
            );
            return false;
        }
        let default_props = match self.registry().definition(type_tag) {
            Some(def) => def.default_props().clone(),
            None => {
                warn!(type_tag, "add ignored: unknown component type");
                return false;
            }
        };

        let instance = ComponentInstance::new(type_tag, &default_props);
        let id = instance.id.clone();
        self.document.push(instance);
        self.history.commit(&self.document);
        self.selected = Some(id);
        true
    }

    /// Remove an instance; clears selection if it was selected. Commits.
    pub fn delete_component(&mut self, id: &str) -> bool {
        if self.document.remove(id).is_none() {
            warn!(id, "delete ignored: no such instance");
            return false;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.history.commit(&self.document);
        true
    }

    /// Full replacement of an instance's props (the property panel merges
    /// before calling this). Commits.
    pub fn update_component_props(&mut self, id: &str, props: PropMap) -> bool {
        match self.document.get_mut(id) {
            Some(instance) => {
                instance.props = props;
                self.history.commit(&self.document);
                true
            }
            None => {
                warn!(id, "update ignored: no such instance");
                false
            }
        }
    }

    /// Swap an instance with its adjacent neighbor. No-op at the
    /// boundaries. Commits on an actual swap.
    pub fn move_component(&mut self, id: &str, direction: MoveDirection) -> bool {
        let index = match self.document.position(id) {
            Some(index) => index,
            None => {
                warn!(id, "move ignored: no such instance");
                return false;
            }
        };
        let neighbor = match direction {
            MoveDirection::Up => {
                if index == 0 {
                    return false;
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.document.len() {
                    return false;
                }
                index + 1
            }
        };
        self.document.swap(index, neighbor);
        self.history.commit(&self.document);
        true
    }

    /// Register a user-authored component; returns its synthesized type
    /// tag. Malformed specs are rejected with a user-facing error and
    /// never enter the registry. Does not touch document history.
    pub fn add_custom_component(&mut self, spec: CustomComponentSpec) -> BuilderResult<String> {
        self.custom.insert(spec, Utc::now())
    }

    /// Edit a custom definition in place. Placed instances keep their
    /// current props; only future placements see the new defaults.
    pub fn update_custom_component(
        &mut self,
        type_tag: &str,
        spec: CustomComponentSpec,
    ) -> BuilderResult<()> {
        self.custom.update(type_tag, spec)
    }

    /// Remove a custom definition and cascade to every placed instance of
    /// that type, so the document never holds a dangling type reference.
    /// Commits once if any instance was removed.
    pub fn delete_custom_component(&mut self, type_tag: &str) -> bool {
        if self.custom.remove(type_tag).is_none() {
            warn!(type_tag, "custom delete ignored: no such definition");
            return false;
        }

        let removed = self.document.remove_all_of_type(type_tag);
        if !removed.is_empty() {
            if let Some(selected) = self.selected.as_deref() {
                if removed.iter().any(|c| c.id == selected) {
                    self.selected = None;
                }
            }
            self.history.commit(&self.document);
            debug!(type_tag, count = removed.len(), "cascaded instance removal");
        }
        true
    }

    /// Step back one committed state; clears selection. No-op at the
    /// initial empty document.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.document = snapshot.clone();
                self.selected = None;
                true
            }
            None => false,
        }
    }

    /// Step forward one committed state; clears selection. No-op at the
    /// newest state.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.document = snapshot.clone();
                self.selected = None;
                true
            }
            None => false,
        }
    }

    /// Change the selection. Selection is UI state and never commits
    /// history.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        match id {
            Some(id) => {
                if self.document.get(id).is_none() {
                    warn!(id, "select ignored: no such instance");
                    return false;
                }
                self.selected = Some(id.to_string());
                true
            }
            None => {
                self.selected = None;
                true
            }
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
