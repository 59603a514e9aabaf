// File: crates/graph-spec/src/load.rs
// Summary: Loader: JSON text or file -> normalized, validated GraphCollection.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SpecError};
use crate::model::{GraphCollection, GraphSpec};
use crate::normalize::normalize_value;

/// Read the file at `path` and parse it with [`parse_str`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<GraphCollection> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| SpecError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read graph file");
    parse_str(&text)
}

/// Parse JSON text into graphs. An object yields `Single`, an array yields
/// `Many`; every graph is normalized and then validated.
pub fn parse_str(text: &str) -> Result<GraphCollection> {
    let doc = parse_value(text)?;
    let graphs = match &doc {
        Value::Array(items) => GraphCollection::Many(
            items
                .iter()
                .enumerate()
                .map(|(i, g)| GraphSpec::from_value_at(g, &format!("[{i}]")))
                .collect::<Result<Vec<_>>>()?,
        ),
        single => GraphCollection::Single(GraphSpec::from_value(single)?),
    };
    tracing::debug!(graphs = graphs.len(), "loaded graph description");
    Ok(graphs)
}

/// Parse JSON text and apply defaults, without typed validation.
pub fn parse_value(text: &str) -> Result<Value> {
    let mut doc: Value = serde_json::from_str(text)?;
    normalize_value(&mut doc)?;
    Ok(doc)
}
