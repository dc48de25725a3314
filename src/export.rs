use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::custom::{CustomComponent, CustomStore};
use crate::document::{ComponentInstance, Document};
use crate::error::BuilderResult;
use crate::persist::PageMetadata;
use crate::render::{render_page, RenderMode};
use crate::template::escape_html;
use crate::validate;

/// Export the current document as a complete static HTML page: escaped
/// title, aggregated custom CSS, the rendered body (export mode, no
/// editor affordances) and, only when scripts are enabled, the aggregated
/// custom JS.
pub fn export_html(
    document: &Document,
    custom: &CustomStore,
    title: &str,
    config: &EditorConfig,
) -> String {
    let body = render_page(document, custom, &RenderMode::Export, config);

    let custom_css: String = custom
        .iter()
        .map(|c| c.css.as_str())
        .filter(|css| !css.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let script_block = if config.allow_custom_scripts {
        let custom_js: String = custom
            .iter()
            .map(|c| c.js.as_str())
            .filter(|js| !js.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if custom_js.is_empty() {
            String::new()
        } else {
            format!("\n  <script>\n{}\n  </script>", custom_js)
        }
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
  <meta charset=\"UTF-8\">\n\
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
  <title>{}</title>\n\
  <style>\n{}\nbody {{ margin: 0; padding: 0; }}\n.page-container {{ min-height: 100vh; }}\n  </style>\n\
</head>\n\
<body>\n\
  <div class=\"page-container\">\n{}\n  </div>{}\n\
</body>\n\
</html>",
        escape_html(title),
        custom_css,
        body,
        script_block,
    )
}

/// The JSON export envelope; also the import format of the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: PageMetadata,
    pub components: Vec<ComponentInstance>,
    pub custom_components: Vec<CustomComponent>,
}

/// Export the current document as pretty-printed JSON.
pub fn export_json(
    document: &Document,
    custom: &CustomStore,
    metadata: PageMetadata,
) -> BuilderResult<String> {
    let envelope = ExportEnvelope {
        version: crate::persist::PAYLOAD_VERSION.to_string(),
        timestamp: Utc::now(),
        metadata,
        components: document.components().to_vec(),
        custom_components: custom.components().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parse and structurally validate a JSON export envelope.
pub fn import_json(source: &str) -> BuilderResult<ExportEnvelope> {
    let envelope: ExportEnvelope = serde_json::from_str(source)?;
    for instance in &envelope.components {
        validate::validate_instance(instance)?;
    }
    for component in &envelope.custom_components {
        component.validate()?;
    }
    Ok(envelope)
}
