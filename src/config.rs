use serde::{Deserialize, Serialize};

use crate::error::BuilderResult;

/// Editor configuration. Defaults mirror the shipped editor; overrides
/// load from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Auto-save debounce interval in milliseconds.
    pub auto_save_interval_ms: u64,
    /// Undo depth; the history keeps this many steps plus the live state.
    pub max_undo_steps: usize,
    /// Hard cap on placed components per page.
    pub max_components_per_page: usize,
    /// Whether custom component scripts are emitted in rendered output.
    /// Off by default: user-authored scripts are an explicit opt-in.
    pub allow_custom_scripts: bool,
    pub breakpoints: Breakpoints,
}

/// Preview viewport widths in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile: u32,
    pub tablet: u32,
    pub desktop: u32,
    pub wide: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 375,
            tablet: 768,
            desktop: 1024,
            wide: 1440,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            auto_save_interval_ms: 30_000,
            max_undo_steps: 50,
            max_components_per_page: 100,
            allow_custom_scripts: false,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_yaml(source: &str) -> BuilderResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn auto_save_interval(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.auto_save_interval_ms as i64)
    }
}
