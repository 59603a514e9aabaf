// File: crates/graph-spec/src/normalize.rs
// Summary: Fills in defaults for optional graph settings on raw JSON mappings.

use serde_json::{Map, Value};

use crate::error::{Result, SpecError};

/// Key holding the legend/caption font size descriptor.
pub const CAPTION_FONT_SIZE_KEY: &str = "caption_font_size";
/// Value used when a graph does not name a caption font size.
pub const DEFAULT_CAPTION_FONT_SIZE: &str = "large";

/// Insert default values for absent optional keys. Existing values are
/// left untouched, so applying this twice is the same as applying it once.
pub fn apply_defaults(graph: &mut Map<String, Value>) {
    if !graph.contains_key(CAPTION_FONT_SIZE_KEY) {
        graph.insert(
            CAPTION_FONT_SIZE_KEY.to_string(),
            Value::String(DEFAULT_CAPTION_FONT_SIZE.to_string()),
        );
    }
}

/// Normalize a parsed document: a single graph object or an array of graph
/// objects. Nested arrays are not graphs and are rejected.
pub fn normalize_value(doc: &mut Value) -> Result<()> {
    match doc {
        Value::Array(graphs) => {
            for (i, graph) in graphs.iter_mut().enumerate() {
                match graph {
                    Value::Object(map) => apply_defaults(map),
                    other => {
                        return Err(SpecError::schema(
                            format!("[{i}]"),
                            format!("expected a graph object, found {}", kind(other)),
                        ))
                    }
                }
            }
            tracing::debug!(graphs = graphs.len(), "normalized graph collection");
            Ok(())
        }
        Value::Object(map) => {
            apply_defaults(map);
            tracing::debug!("normalized single graph");
            Ok(())
        }
        other => Err(SpecError::schema(
            "$",
            format!("expected a graph object or an array of graph objects, found {}", kind(other)),
        )),
    }
}

pub(crate) fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
