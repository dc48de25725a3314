use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::custom::CustomStore;
use crate::document::Document;
use crate::persist::SavePayload;

/// Debounced auto-save controller.
///
/// Deterministic and clock-injected: the editor calls `observe` after
/// every document or custom-store change and `poll` on its timer tick,
/// both with an explicit `now`. A change (re)arms the debounce deadline;
/// reverting to the last persisted state disarms it; `save_now` cancels
/// the pending deadline and captures immediately.
///
/// Change detection compares the serialized pair of component lists, the
/// same fingerprint the original editor diffed.
#[derive(Debug)]
pub struct AutoSave {
    interval: Duration,
    last_persisted: Option<String>,
    deadline: Option<DateTime<Utc>>,
    last_saved_at: Option<DateTime<Utc>>,
}

impl AutoSave {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_persisted: None,
            deadline: None,
            last_saved_at: None,
        }
    }

    /// Note a (possible) state change. Arms or re-arms the debounce
    /// deadline when the state differs from the last persisted state,
    /// disarms it when the difference has gone away.
    pub fn observe(&mut self, document: &Document, custom: &CustomStore, now: DateTime<Utc>) {
        let current = fingerprint(document, custom);
        if self.last_persisted.as_deref() == Some(current.as_str()) {
            self.deadline = None;
            return;
        }
        self.deadline = Some(now + self.interval);
        debug!("auto-save armed");
    }

    /// Fire the pending save if its deadline has passed.
    pub fn poll(
        &mut self,
        document: &Document,
        custom: &CustomStore,
        title: &str,
        now: DateTime<Utc>,
    ) -> Option<SavePayload> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        Some(self.capture(document, custom, title, now))
    }

    /// Manual save: cancels any pending deadline and captures immediately.
    pub fn save_now(
        &mut self,
        document: &Document,
        custom: &CustomStore,
        title: &str,
        now: DateTime<Utc>,
    ) -> SavePayload {
        self.capture(document, custom, title, now)
    }

    fn capture(
        &mut self,
        document: &Document,
        custom: &CustomStore,
        title: &str,
        now: DateTime<Utc>,
    ) -> SavePayload {
        self.deadline = None;
        self.last_persisted = Some(fingerprint(document, custom));
        self.last_saved_at = Some(now);
        debug!("auto-save captured");
        SavePayload::capture(document, custom, title, now)
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    pub fn pending_deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}

/// Serialized `(components, customComponents)` pair. BTreeMap-backed
/// props keep this deterministic for equal states.
fn fingerprint(document: &Document, custom: &CustomStore) -> String {
    serde_json::to_string(&(document.components(), custom.components())).unwrap_or_default()
}
