use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::custom::{CustomComponent, CustomStore};
use crate::document::{ComponentInstance, Document};

pub const PAYLOAD_VERSION: &str = "1.0.0";

#[derive(Error, Debug, Clone)]
#[error("Persistence failed: {message}")]
pub struct PersistError {
    pub message: String,
}

impl PersistError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Page metadata carried alongside the component lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub last_modified: DateTime<Utc>,
    pub version: String,
}

impl PageMetadata {
    pub fn new(title: &str, now: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            last_modified: now,
            version: PAYLOAD_VERSION.to_string(),
        }
    }
}

/// What gets handed to the persistence backend: the pair of component
/// lists plus metadata. No further schema is mandated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub components: Vec<ComponentInstance>,
    pub custom_components: Vec<CustomComponent>,
    pub metadata: PageMetadata,
}

impl SavePayload {
    pub fn capture(
        document: &Document,
        custom: &CustomStore,
        title: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            components: document.components().to_vec(),
            custom_components: custom.components().to_vec(),
            metadata: PageMetadata::new(title, now),
        }
    }
}

/// The opaque persistence collaborator. Fire-and-forget from the document
/// model's perspective: the editor never awaits a result before allowing
/// further edits.
pub trait PageStore {
    fn save(&mut self, payload: &SavePayload) -> Result<(), PersistError>;
}

/// Persist and swallow the outcome: a failure is logged, nothing more.
/// No retry policy exists at this layer.
pub fn save_and_log<S: PageStore>(store: &mut S, payload: &SavePayload) -> bool {
    match store.save(payload) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "page save failed");
            false
        }
    }
}

/// In-memory store used by tests and local sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Vec<SavePayload>,
    pub fail_next: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> &[SavePayload] {
        &self.saved
    }
}

impl PageStore for MemoryStore {
    fn save(&mut self, payload: &SavePayload) -> Result<(), PersistError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(PersistError::new("simulated backend failure"));
        }
        self.saved.push(payload.clone());
        Ok(())
    }
}
