//! Read-only widget view for display.

use serde::Serialize;
use serde_json::Value;

/// Placeholder shown when a host document refuses to render.
const UNSERIALIZABLE: &str = "<unserializable>";

/// A display-ready snapshot of the three host documents.
///
/// Consumed by the presentation layer for debugging; nothing in the
/// reconciliation core depends on it. Rendering never fails: a document
/// that cannot be serialized shows up as a sentinel string instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WidgetView {
    /// Pending tool invocation input, pretty-printed.
    pub tool_input: String,
    /// Tool output (delta payload), pretty-printed.
    pub tool_output: String,
    /// Persisted widget state, pretty-printed.
    pub widget_state: String,
}

impl WidgetView {
    /// Renders the given host documents.
    pub fn render(
        tool_input: Option<&Value>,
        tool_output: Option<&Value>,
        widget_state: Option<&Value>,
    ) -> Self {
        Self {
            tool_input: render_document(tool_input),
            tool_output: render_document(tool_output),
            widget_state: render_document(widget_state),
        }
    }
}

fn render_document(document: Option<&Value>) -> String {
    match document {
        None => "null".to_string(),
        Some(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| UNSERIALIZABLE.to_string())
        }
    }
}
