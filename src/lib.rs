//! # Pagewright
//!
//! Headless page-builder core: a component document model with linear
//! undo/redo, a registry of built-in and user-authored components, a
//! `{{placeholder}}` template renderer, schema-driven property forms,
//! debounced auto-save, and HTML/JSON export.
//!
//! ## Features
//! - Closed registry of built-in section components plus runtime-registered custom components
//! - Snapshot-based history with a configurable depth cap
//! - HTML rendering in editor, preview and export modes
//! - Property forms derived from component schemas, with input coercion
//! - Deterministic, clock-injected auto-save debouncing
//!
//! ## Example — an editing session
//! ```ignore
//! use pagewright::{EditorConfig, EditorSession};
//!
//! let mut session = EditorSession::new(EditorConfig::default());
//! session.add_component("hero");
//! session.add_component("text");
//! session.undo();
//! assert_eq!(session.document().len(), 1);
//! ```
//!
//! ## Example — exporting a page
//! ```ignore
//! use pagewright::{export_html, EditorConfig, EditorSession};
//!
//! let mut session = EditorSession::new(EditorConfig::default());
//! session.add_component("hero");
//! let html = export_html(
//!     session.document(),
//!     session.custom_components(),
//!     "My Page",
//!     session.config(),
//! );
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod autosave;
pub mod config;
pub mod custom;
pub mod document;
pub mod error;
pub mod export;
pub mod form;
pub mod history;
pub mod identity;
pub mod persist;
pub mod props;
pub mod registry;
pub mod render;
pub mod session;
pub mod shortcuts;
pub mod template;
pub mod validate;

// --- Core types ---
pub use config::EditorConfig;
pub use custom::{CustomComponent, CustomComponentSpec, CustomStore};
pub use document::{ComponentInstance, Document};
pub use error::{BuilderError, BuilderResult};
pub use history::History;
pub use props::{PropField, PropMap, PropValue, PropWidget};
pub use registry::{BuiltinKind, ComponentDefinition, Definition, Registry};
pub use session::{EditorSession, MoveDirection};

// --- Rendering and export ---
pub use export::{export_html, export_json, import_json, ExportEnvelope};
pub use render::{render_page, RenderMode, Viewport};

// --- Controllers ---
pub use autosave::AutoSave;
pub use form::{apply_edit, build_form, FieldInput, FormControl, FormField};
pub use persist::{MemoryStore, PageMetadata, PageStore, SavePayload};
pub use shortcuts::{KeyCombo, ShortcutAction, ShortcutKey};
